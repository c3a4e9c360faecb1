//! libclang-backed declaration extraction.
//!
//! Parses each header into a translation unit and walks its top-level
//! function declarations. Type spellings come back typedef-resolved, in
//! contrast to the text-pattern extractor.

use std::path::Path;

use anyhow::{Context, Result};
use clang::{Clang, EntityKind, Index};
use thiserror::Error;

use super::types::{FunctionSignature, Param};
use super::DeclarationExtractor;

/// Fatal startup failure of the parsing backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("libclang backend unavailable: {0}")]
    Unavailable(String),
}

/// Extractor that walks a libclang syntax tree.
pub struct ClangExtractor {
    clang: Clang,
}

impl ClangExtractor {
    /// Load and validate the libclang backend.
    ///
    /// This is the process-wide, one-time backend configuration step: a
    /// missing or misconfigured libclang fails here, before any header
    /// is read.
    pub fn new() -> Result<Self, BackendError> {
        let clang = Clang::new().map_err(BackendError::Unavailable)?;
        Ok(ClangExtractor { clang })
    }
}

impl DeclarationExtractor for ClangExtractor {
    fn extract(&self, header: &Path) -> Result<Vec<FunctionSignature>> {
        let index = Index::new(&self.clang, false, false);
        let tu = index
            .parser(header)
            .parse()
            .with_context(|| format!("failed to parse header: {}", header.display()))?;

        let mut signatures = Vec::new();
        for entity in tu.get_entity().get_children() {
            if entity.get_kind() != EntityKind::FunctionDecl {
                continue;
            }

            // Transitively included standard-library declarations would
            // flood the output; keep only the project's own.
            if entity
                .get_location()
                .is_some_and(|loc| loc.is_in_system_header())
            {
                continue;
            }

            let Some(name) = entity.get_name() else {
                continue;
            };

            let return_type = entity
                .get_result_type()
                .map(|t| t.get_canonical_type().get_display_name())
                .unwrap_or_else(|| "void".to_string());

            let mut sig = FunctionSignature::new(name, return_type);
            for arg in entity.get_arguments().unwrap_or_default() {
                if let Some(ty) = arg.get_type() {
                    sig.params
                        .push(Param::new(ty.get_canonical_type().get_display_name()));
                }
            }

            signatures.push(sig);
        }

        Ok(signatures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // libclang is a process-wide singleton, so everything that needs it
    // lives in one test. Skips when no backend is installed.
    #[test]
    fn test_clang_extraction() {
        let extractor = match ClangExtractor::new() {
            Ok(e) => e,
            Err(e) => {
                eprintln!("skipping: {e}");
                return;
            }
        };

        let tmp = tempfile::TempDir::new().unwrap();

        // Typedefs resolve to their canonical spelling.
        let header = tmp.path().join("synth.h");
        std::fs::write(
            &header,
            "typedef int handle_t;\n\
             handle_t open_synth(const char *name);\n\
             void close_synth(handle_t h);\n",
        )
        .unwrap();

        let sigs = extractor.extract(&header).unwrap();
        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0].name, "open_synth");
        assert_eq!(sigs[0].return_type, "int");
        assert_eq!(sigs[0].params[0].spelling, "const char *");
        assert_eq!(sigs[1].name, "close_synth");
        assert_eq!(sigs[1].return_type, "void");
        assert_eq!(sigs[1].params[0].spelling, "int");

        // A header with no function declarations is an empty success.
        let structs_only = tmp.path().join("types.h");
        std::fs::write(&structs_only, "typedef struct { int x; int y; } point_t;\n").unwrap();
        assert!(extractor.extract(&structs_only).unwrap().is_empty());

        // Declarations dragged in from system headers are filtered;
        // only the header's own function survives.
        let with_include = tmp.path().join("io.h");
        std::fs::write(
            &with_include,
            "#include <stdio.h>\nint write_sample(int s);\n",
        )
        .unwrap();
        let sigs = extractor.extract(&with_include).unwrap();
        let names: Vec<&str> = sigs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["write_sample"]);
    }
}

//! Declaration extraction for cwrap binding generation.
//!
//! Two interchangeable strategies produce the same output shape: a
//! regex scan of raw header text, and a libclang translation-unit walk.

pub mod clang;
pub mod pattern;
pub mod render;
pub mod typemap;
pub mod types;

use std::path::Path;

use anyhow::Result;

use self::types::FunctionSignature;

/// A strategy for extracting function declarations from one header.
///
/// Signatures come back in declaration order, which governs the order
/// of generated wrapper lines. Zero declarations is success, not an
/// error.
pub trait DeclarationExtractor {
    /// Extract all function signatures declared in `header`.
    fn extract(&self, header: &Path) -> Result<Vec<FunctionSignature>>;
}

/// Extraction strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Regex scan of the raw header text.
    #[default]
    Pattern,
    /// libclang translation-unit walk.
    Clang,
}

impl Strategy {
    /// Construct the extractor for this strategy.
    ///
    /// For [`Strategy::Clang`] this loads and validates the libclang
    /// backend, so a misconfigured installation fails here, before any
    /// header is read.
    pub fn create(self) -> Result<Box<dyn DeclarationExtractor>> {
        match self {
            Strategy::Pattern => Ok(Box::new(pattern::PatternExtractor::new())),
            Strategy::Clang => Ok(Box::new(clang::ClangExtractor::new()?)),
        }
    }
}

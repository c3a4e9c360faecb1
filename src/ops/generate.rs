//! Wrapper generation over a project tree.
//!
//! Walks a directory for `.h` files, extracts declarations with the
//! chosen strategy, renders cwrap statements per header, and writes one
//! aggregate output file with per-header provenance comments.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::bindings::render::CwrapGenerator;
use crate::bindings::types::FunctionSignature;
use crate::bindings::Strategy;
use crate::util::fs::{find_files, write_string};

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root directory to scan for headers
    pub root: PathBuf,

    /// Destination for the generated wrapper file
    pub output: PathBuf,

    /// Extraction strategy
    pub strategy: Strategy,

    /// Optional JSON manifest of the extracted signatures
    pub manifest: Option<PathBuf>,
}

impl GenerateOptions {
    /// Create options for scanning `root` and writing to `output`.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            root: root.into(),
            output: output.into(),
            strategy: Strategy::default(),
            manifest: None,
        }
    }

    /// Set the extraction strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Also write a JSON manifest of the extracted signatures.
    pub fn with_manifest(mut self, manifest: Option<PathBuf>) -> Self {
        self.manifest = manifest;
        self
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    /// Headers found under the root
    pub headers_scanned: usize,

    /// Headers that contributed at least one wrapper
    pub headers_bound: usize,

    /// Total wrapper statements written
    pub functions_bound: usize,

    /// Where the aggregate was written
    pub output: PathBuf,
}

/// One header's extracted exports, for the JSON manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderExports {
    /// Header path as scanned
    pub header: PathBuf,

    /// Signatures in declaration order
    pub functions: Vec<FunctionSignature>,
}

/// Run the full pipeline: walk, extract, render, write.
///
/// Per-header failures (unreadable file, parse failure) are logged and
/// skipped; only a missing root, a missing parsing backend, or a failed
/// destination write abort the run.
pub fn generate_wrappers(opts: &GenerateOptions) -> Result<GenerateReport> {
    if !opts.root.is_dir() {
        bail!("project root is not a directory: {}", opts.root.display());
    }

    // Backend validation happens here, before any header is read.
    let extractor = opts.strategy.create()?;
    let generator = CwrapGenerator::new();

    let headers = find_files(&opts.root, "h");
    let mut blocks: Vec<String> = Vec::new();
    let mut exports: Vec<HeaderExports> = Vec::new();
    let mut functions_bound = 0;

    for header in &headers {
        let signatures = match extractor.extract(header) {
            Ok(sigs) => sigs,
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", header.display(), e);
                continue;
            }
        };

        tracing::debug!(
            "{}: {} function declaration(s)",
            header.display(),
            signatures.len()
        );

        // Headers with nothing to bind contribute no block at all.
        if signatures.is_empty() {
            continue;
        }

        functions_bound += signatures.len();
        blocks.push(format!(
            "// From {}\n{}",
            header.display(),
            generator.render_all(&signatures)
        ));

        if opts.manifest.is_some() {
            exports.push(HeaderExports {
                header: header.clone(),
                functions: signatures,
            });
        }
    }

    let body = blocks.join("\n");
    write_string(&opts.output, &body)?;

    if let Some(ref manifest_path) = opts.manifest {
        let json = serde_json::to_string_pretty(&exports)
            .context("failed to serialize export manifest")?;
        write_string(manifest_path, &json)?;
        tracing::info!("wrote export manifest: {}", manifest_path.display());
    }

    Ok(GenerateReport {
        headers_scanned: headers.len(),
        headers_bound: blocks.len(),
        functions_bound,
        output: opts.output.clone(),
    })
}

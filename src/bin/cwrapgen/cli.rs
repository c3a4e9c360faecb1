//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Generate Emscripten cwrap bindings from C header files
#[derive(Parser)]
#[command(name = "cwrapgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan for .h files
    pub root: PathBuf,

    /// Output file for the generated wrappers
    #[arg(short, long, default_value = "wrappers.js")]
    pub output: PathBuf,

    /// Declaration extraction strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Pattern)]
    pub strategy: StrategyArg,

    /// Also write a JSON manifest of the extracted signatures
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How declarations are pulled out of each header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Regex scan of the raw header text
    Pattern,
    /// libclang syntax-tree walk (requires libclang installed)
    Clang,
}

impl From<StrategyArg> for cwrapgen::Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Pattern => cwrapgen::Strategy::Pattern,
            StrategyArg::Clang => cwrapgen::Strategy::Clang,
        }
    }
}

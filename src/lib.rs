//! cwrapgen - Emscripten cwrap binding generator for C headers
//!
//! This crate scans a tree of C header files, extracts function
//! declarations with one of two interchangeable strategies (regex text
//! matching or a libclang syntax tree), and emits `Module.cwrap(...)`
//! wrapper statements for a JavaScript host.

pub mod bindings;
pub mod ops;
pub mod util;

pub use bindings::{
    render::CwrapGenerator,
    typemap::{JsType, TypeMap},
    types::{FunctionSignature, Param},
    DeclarationExtractor, Strategy,
};
pub use ops::generate::{generate_wrappers, GenerateOptions, GenerateReport};

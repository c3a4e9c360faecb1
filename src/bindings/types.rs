//! Signature types extracted from C headers.
//!
//! Only the FFI-relevant shape of a declaration is kept: the name, the
//! raw return-type spelling, and the parameter-type spellings in
//! declaration order.

use serde::{Deserialize, Serialize};

/// A C function declaration, as extracted from a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// Function name
    pub name: String,

    /// Return type, raw C spelling (`int`, `const char *`, ...)
    pub return_type: String,

    /// Parameters in declaration order. Order is load-bearing: the
    /// generated wrapper passes positional arguments in this order.
    pub params: Vec<Param>,
}

impl FunctionSignature {
    /// Create a new signature with no parameters.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        FunctionSignature {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn with_param(mut self, spelling: impl Into<String>) -> Self {
        self.params.push(Param::new(spelling));
        self
    }
}

/// One parameter's type spelling. Names are discarded at extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Raw C type text (`char *`, `int`, ...)
    pub spelling: String,
}

impl Param {
    /// Create a new parameter type.
    pub fn new(spelling: impl Into<String>) -> Self {
        Param {
            spelling: spelling.into(),
        }
    }
}

//! cwrap wrapper statement rendering.

use super::typemap::TypeMap;
use super::types::FunctionSignature;

/// Renders extracted signatures as `Module.cwrap` statements.
///
/// All type knowledge lives in the [`TypeMap`]; the generator only
/// formats. The parameter-tag order in a rendered line equals the
/// signature's parameter order, which the Emscripten runtime relies on
/// for positional argument marshalling.
#[derive(Debug, Clone, Default)]
pub struct CwrapGenerator {
    typemap: TypeMap,
}

impl CwrapGenerator {
    /// Create a generator with the default type mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom type mapping.
    pub fn with_typemap(typemap: TypeMap) -> Self {
        CwrapGenerator { typemap }
    }

    /// Render one wrapper statement.
    pub fn render(&self, sig: &FunctionSignature) -> String {
        let ret = self.typemap.classify(&sig.return_type);
        let args: Vec<String> = sig
            .params
            .iter()
            .map(|p| format!("'{}'", self.typemap.classify(&p.spelling).as_str()))
            .collect();

        format!(
            "const {name} = Module.cwrap('{name}', '{ret}', [{args}]);",
            name = sig.name,
            ret = ret.as_str(),
            args = args.join(", ")
        )
    }

    /// Render one line per signature, joined with newlines.
    pub fn render_all(&self, sigs: &[FunctionSignature]) -> String {
        sigs.iter()
            .map(|s| self.render(s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

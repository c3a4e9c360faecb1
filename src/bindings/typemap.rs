//! C type spelling to JavaScript cwrap type classification.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The cwrap type vocabulary understood by the Emscripten runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsType {
    /// Numeric value or raw pointer handle
    Number,
    /// `char*`-family pointer marshalled as text
    String,
    /// No return value (`void`)
    Null,
}

impl JsType {
    /// The literal tag used in generated wrapper code.
    pub fn as_str(&self) -> &'static str {
        match self {
            JsType::Number => "number",
            JsType::String => "string",
            JsType::Null => "null",
        }
    }
}

/// Exact-match table from normalized C spellings to cwrap tags.
///
/// Built once at startup and never mutated during a run. Lookup is
/// total: spellings absent from the table classify as `number`, the
/// pointer-as-integer fallback that an FFI bridge can always accept.
#[derive(Debug, Clone)]
pub struct TypeMap {
    map: HashMap<String, JsType>,
}

impl Default for TypeMap {
    fn default() -> Self {
        let mut map = HashMap::new();
        map.insert("int".to_string(), JsType::Number);
        map.insert("float".to_string(), JsType::Number);
        map.insert("double".to_string(), JsType::Number);
        map.insert("char*".to_string(), JsType::String);
        map.insert("const char*".to_string(), JsType::String);
        map.insert("void".to_string(), JsType::Null);
        TypeMap { map }
    }
}

impl TypeMap {
    /// Create the default mapping table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or override a mapping. The spelling is normalized the same
    /// way lookups are.
    pub fn with_mapping(mut self, spelling: &str, tag: JsType) -> Self {
        self.map.insert(normalize(spelling), tag);
        self
    }

    /// Classify a raw C type spelling.
    pub fn classify(&self, raw: &str) -> JsType {
        self.map
            .get(&normalize(raw))
            .copied()
            .unwrap_or(JsType::Number)
    }
}

/// Normalize a C type spelling for table lookup: collapse whitespace
/// runs, then glue each `*` to the preceding token so that `char *`,
/// `char*` and `char  *` all share one key.
fn normalize(spelling: &str) -> String {
    let collapsed = spelling.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(" *", "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_spellings() {
        let map = TypeMap::new();
        assert_eq!(map.classify("int"), JsType::Number);
        assert_eq!(map.classify("float"), JsType::Number);
        assert_eq!(map.classify("double"), JsType::Number);
        assert_eq!(map.classify("char*"), JsType::String);
        assert_eq!(map.classify("void"), JsType::Null);
    }

    #[test]
    fn test_pointer_spacing_normalizes_to_one_key() {
        let map = TypeMap::new();
        assert_eq!(map.classify("char *"), JsType::String);
        assert_eq!(map.classify("char  *"), JsType::String);
        assert_eq!(map.classify("const char *"), JsType::String);
        assert_eq!(map.classify(" char* "), JsType::String);
    }

    #[test]
    fn test_unknown_spelling_defaults_to_number() {
        let map = TypeMap::new();
        assert_eq!(map.classify("MyHandle"), JsType::Number);
        assert_eq!(map.classify("struct fluid_synth_t *"), JsType::Number);
        assert_eq!(map.classify(""), JsType::Number);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let map = TypeMap::new();
        for spelling in ["int", "MyHandle", "const char *"] {
            assert_eq!(map.classify(spelling), map.classify(spelling));
        }
    }

    #[test]
    fn test_with_mapping_extends_table() {
        let map = TypeMap::new().with_mapping("wchar_t *", JsType::String);
        assert_eq!(map.classify("wchar_t*"), JsType::String);
    }
}

//! Regex-based declaration extraction.
//!
//! Scans raw header text for `type name(params);` shapes. Declarations
//! that don't fit the pattern (function-pointer parameters, variadics,
//! parameter lists broken by interior comments) are silently skipped.

use std::path::Path;

use anyhow::Result;
use regex::Regex;

use super::types::{FunctionSignature, Param};
use super::DeclarationExtractor;

/// Extractor that pattern-matches declarations in the raw header text.
pub struct PatternExtractor {
    decl: Regex,
}

impl Default for PatternExtractor {
    fn default() -> Self {
        // Captures: return type and qualifiers, function name, parameter
        // list. The leading word/pointer block before the name is the
        // return type, so `unsigned int` and `const char *` survive
        // verbatim.
        PatternExtractor {
            decl: Regex::new(r"(\w[\w\s*]+)\s+(\w+)\s*\(([^)]*)\)\s*;").unwrap(),
        }
    }
}

impl PatternExtractor {
    /// Create a new pattern extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract signatures from header text.
    pub fn parse_content(&self, content: &str) -> Vec<FunctionSignature> {
        let mut signatures = Vec::new();

        'decls: for cap in self.decl.captures_iter(content) {
            let return_type = cap[1].trim();
            let name = cap[2].trim();
            let params_str = cap[3].trim();

            if return_type.is_empty() || name.is_empty() {
                continue;
            }

            let mut params = Vec::new();
            if !params_str.is_empty() && params_str != "void" {
                for param in params_str.split(',') {
                    let param = param.trim();
                    if param.is_empty() {
                        continue;
                    }
                    // Variadic declarations have no fixed cwrap shape.
                    if param == "..." {
                        continue 'decls;
                    }
                    // Only the first token is the type; the parameter
                    // name (and any `*` glued to it) is discarded.
                    if let Some(ty) = param.split_whitespace().next() {
                        params.push(Param::new(ty));
                    }
                }
            }

            signatures.push(FunctionSignature {
                name: name.to_string(),
                return_type: return_type.to_string(),
                params,
            });
        }

        signatures
    }
}

impl DeclarationExtractor for PatternExtractor {
    fn extract(&self, header: &Path) -> Result<Vec<FunctionSignature>> {
        let content = crate::util::fs::read_to_string(header)?;
        Ok(self.parse_content(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations_in_order() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("int add(int a, int b);\nvoid log(char* msg);\n");

        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0].name, "add");
        assert_eq!(sigs[0].return_type, "int");
        assert_eq!(sigs[0].params.len(), 2);
        assert_eq!(sigs[0].params[0].spelling, "int");
        assert_eq!(sigs[1].name, "log");
        assert_eq!(sigs[1].return_type, "void");
        assert_eq!(sigs[1].params[0].spelling, "char*");
    }

    #[test]
    fn test_multiword_return_type_kept_verbatim() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("unsigned int count(void);");

        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].return_type, "unsigned int");
        assert!(sigs[0].params.is_empty());
    }

    #[test]
    fn test_pointer_return_type() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("char* version(void);");

        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].return_type, "char*");
    }

    #[test]
    fn test_star_glued_to_param_name_is_lost() {
        // Known limitation: the first token of `char *msg` is `char`, so
        // the pointer is dropped and the parameter classifies as number.
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("void warn(char *msg);");

        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].params[0].spelling, "char");
    }

    #[test]
    fn test_variadic_declaration_skipped() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("int printf(const char* fmt, ...);\nint add(int a);\n");

        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].name, "add");
    }

    #[test]
    fn test_function_pointer_param_skipped() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("void set_cb(void (*cb)(int));");

        assert!(sigs.is_empty());
    }

    #[test]
    fn test_block_comments_in_param_list_not_understood() {
        let extractor = PatternExtractor::new();

        // A comment without a comma lands in the discarded name
        // position and the declaration still extracts.
        let sigs = extractor.parse_content("int f(int a /* gain */, int b);");
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].params.len(), 2);
        assert_eq!(sigs[0].params[0].spelling, "int");

        // A comma inside a comment splits the list: the extracted
        // parameter count no longer matches the declaration.
        let sigs = extractor.parse_content("int g(int a /* x, y */, int b);");
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].params.len(), 3);
    }

    #[test]
    fn test_struct_only_header_yields_nothing() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("typedef struct { int x; int y; } point_t;");

        assert!(sigs.is_empty());
    }

    #[test]
    fn test_void_param_list_is_empty() {
        let extractor = PatternExtractor::new();
        let sigs = extractor.parse_content("int init(void);");

        assert_eq!(sigs.len(), 1);
        assert!(sigs[0].params.is_empty());
    }
}

//! JavaScript parsing on top of tree-sitter.

use tree_sitter::{Language, Parser, Tree};

/// The tree-sitter JavaScript grammar (includes JSX).
pub fn language() -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}

/// Result of parsing a source file.
pub struct ParseResult {
    pub tree: Tree,
    /// Whether tree-sitter had to insert `ERROR` or `MISSING` nodes.
    pub has_errors: bool,
}

/// Reusable JavaScript parser.
///
/// A parser holds tree-sitter state and is not `Sync`; create one per thread.
pub struct JsParser {
    parser: Parser,
}

impl JsParser {
    pub fn new() -> Self {
        let mut parser = Parser::new();
        parser
            .set_language(&language())
            .expect("tree-sitter-javascript is ABI compatible with tree-sitter");
        Self { parser }
    }

    /// Parse `source`, returning `None` only if tree-sitter gives up
    /// (cancellation or timeout).
    pub fn parse(&mut self, source: &str) -> Option<ParseResult> {
        let tree = self.parser.parse(source, None)?;
        let has_errors = tree.root_node().has_error();
        Some(ParseResult { tree, has_errors })
    }
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program() {
        let mut parser = JsParser::new();
        let result = parser.parse("const myVar = 1;").unwrap();
        assert_eq!(result.tree.root_node().kind(), "program");
        assert!(!result.has_errors);
    }

    #[test]
    fn test_parse_module_syntax() {
        let mut parser = JsParser::new();
        let source = "import { my_export as myExport } from 'm';\nexport default myExport;";
        let result = parser.parse(source).unwrap();
        assert!(!result.has_errors);
    }

    #[test]
    fn test_parse_reports_errors() {
        let mut parser = JsParser::new();
        let result = parser.parse("const = ;").unwrap();
        assert!(result.has_errors);
    }

    #[test]
    fn test_parser_is_reusable() {
        let mut parser = JsParser::new();
        assert!(parser.parse("a_b = 1;").is_some());
        assert!(parser.parse("let c_d;").is_some());
    }
}

use camelint_config::Config;
use camelint_diagnostics::Diagnostic;
use camelint_js_cst::TreeWalker;
use camelint_js_parser::JsParser;
use tracing::debug;

use crate::{CheckContext, Rule, build_rules};

/// A configured set of rules that can be run over source files.
pub struct Linter {
    rules: Vec<Box<dyn Rule>>,
}

impl Linter {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(build_rules(config))
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(AsRef::as_ref)
    }

    /// Parse and check one source file.
    ///
    /// Returns `None` if tree-sitter could not produce a tree at all. Files
    /// with syntax errors are still checked on the recovered tree.
    /// Diagnostics are sorted by position.
    pub fn check(&self, source: &str) -> Option<Vec<Diagnostic>> {
        let mut parser = JsParser::new();
        let result = parser.parse(source)?;
        if result.has_errors {
            debug!("source has syntax errors, checking the recovered tree");
        }

        // Fresh per-file state: nothing is shared between files.
        let ctx = CheckContext::new(source);
        let mut diagnostics = vec![];

        for node in TreeWalker::new(result.tree.root_node(), source) {
            for rule in &self.rules {
                let kinds = rule.relevant_kinds();
                if !kinds.is_empty() && !kinds.contains(&node.kind()) {
                    continue;
                }
                diagnostics.extend(rule.check(&ctx, &node));
            }
        }

        diagnostics.sort_by_key(|d| d.range);
        Some(diagnostics)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

//! Rule engine for camelint.
//!
//! Rules are checked node by node over a tree-sitter JavaScript tree. Each
//! file gets its own [`CheckContext`], so rules can keep per-file state there
//! without leaking it between files linted in parallel.

pub mod fix;
mod linter;
mod registry;
pub mod rules;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use camelint_diagnostics::Diagnostic;
use camelint_js_cst::CstNode;

pub use linter::Linter;
pub use registry::{RULE_NAMES, build_rules};

/// Rule options, as `name -> value` strings.
pub type Properties<'a> = HashMap<&'a str, &'a str>;

/// Per-file state shared by all rules during one traversal.
pub struct CheckContext<'a> {
    source: &'a str,
    reported: RefCell<HashSet<(&'static str, usize)>>,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            reported: RefCell::new(HashSet::new()),
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Record that `rule` reported `node`. Returns `false` if it already had.
    pub fn mark_reported(&self, rule: &'static str, node: &CstNode<'_>) -> bool {
        self.reported.borrow_mut().insert((rule, node.id()))
    }
}

/// A lint rule.
pub trait Rule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Node kinds this rule wants to see. Empty means every node.
    fn relevant_kinds(&self) -> &'static [&'static str] {
        &[]
    }

    fn check(&self, ctx: &CheckContext, node: &CstNode) -> Vec<Diagnostic>;
}

/// Construction of a rule from its configuration table.
pub trait FromConfig: Sized {
    /// Name of the rule's table in `camelint.toml`.
    const MODULE_NAME: &'static str;

    fn from_config(properties: &Properties) -> Self;
}

//! Camelcase rule implementation.
//!
//! Flags identifiers that use underscores as word separators instead of
//! camelCase. All-caps constants and leading/trailing "private" underscores
//! are allowed, and names whose spelling is usually dictated by someone else
//! (call arguments, renamed imports, property reads) are exempt.
//!
//! ESLint equivalent: camelcase

use camelint_diagnostics::{Diagnostic, Edit, Fix, FixAvailability, Violation};
use camelint_js_cst::CstNode;
use tracing::trace;

use super::camel_case::{is_underscored, split_underscore_markers, to_camel_case};
use super::identifier_context::{ContextKind, identifier_contexts};
use crate::{CheckContext, FromConfig, Properties, Rule};

/// Node kinds that carry an identifier name.
const RELEVANT_KINDS: &[&str] = &[
    "identifier",
    "property_identifier",
    "shorthand_property_identifier",
    "shorthand_property_identifier_pattern",
    "statement_identifier",
];

/// How property-like names (member, object key and import names) are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropertiesMode {
    /// Property names must be camelCase too.
    #[default]
    Always,
    /// Property names are not checked.
    Never,
}

impl PropertiesMode {
    /// `"never"` selects [`PropertiesMode::Never`]; any other value is `Always`.
    pub fn from_option(value: &str) -> Self {
        match value {
            "never" => Self::Never,
            _ => Self::Always,
        }
    }
}

/// Configuration for Camelcase rule.
#[derive(Debug, Clone, Default)]
pub struct Camelcase {
    pub properties: PropertiesMode,
}

impl FromConfig for Camelcase {
    const MODULE_NAME: &'static str = "camelcase";

    fn from_config(properties: &Properties) -> Self {
        let properties = properties
            .get("properties")
            .map(|v| PropertiesMode::from_option(v))
            .unwrap_or_default();

        Self { properties }
    }
}

/// Violation: identifier is not in camel case.
#[derive(Debug, Clone)]
pub struct CamelcaseViolation {
    pub name: String,
    pub replacement: String,
}

impl Violation for CamelcaseViolation {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Always;

    fn message(&self) -> String {
        format!("Identifier '{}' is not in camel case.", self.name)
    }

    fn fix_title(&self) -> Option<String> {
        Some(format!("Rename to `{}`", self.replacement))
    }
}

impl Rule for Camelcase {
    fn name(&self) -> &'static str {
        Self::MODULE_NAME
    }

    fn relevant_kinds(&self) -> &'static [&'static str] {
        RELEVANT_KINDS
    }

    fn check(&self, ctx: &CheckContext, node: &CstNode) -> Vec<Diagnostic> {
        if !RELEVANT_KINDS.contains(&node.kind()) {
            return vec![];
        }

        let Some(diagnostic) = self.classify(ctx, node) else {
            return vec![];
        };

        // One syntactic identifier can play several roles; report it once.
        if !ctx.mark_reported(Self::MODULE_NAME, node) {
            return vec![];
        }

        trace!(name = %node.text(), range = ?node.range(), "camelcase violation");
        vec![diagnostic]
    }
}

impl Camelcase {
    /// Decide whether `node` violates the rule, and build the diagnostic if so.
    pub fn classify(&self, ctx: &CheckContext, node: &CstNode) -> Option<Diagnostic> {
        let name = &ctx.source()[node.range()];
        let (_, stripped, _) = split_underscore_markers(name);

        let violates = identifier_contexts(node)
            .into_iter()
            .any(|context| self.is_violation(name, stripped, context));
        if !violates {
            return None;
        }

        let replacement = to_camel_case(name);
        let mut diagnostic = Diagnostic::new(
            CamelcaseViolation {
                name: name.to_string(),
                replacement: replacement.clone(),
            },
            node.range(),
        );
        // Only this occurrence is renamed; other references keep the old name.
        if replacement != name {
            diagnostic.set_fix(Fix::unsafe_edit(Edit::range_replacement(
                replacement,
                node.range(),
            )));
        }
        Some(diagnostic)
    }

    /// Judge one role of an identifier. `stripped` is `name` without its
    /// leading and trailing underscores.
    fn is_violation(&self, name: &str, stripped: &str, context: ContextKind<'_>) -> bool {
        let check_properties = self.properties == PropertiesMode::Always;

        match context {
            ContextKind::ObjectMemberAccess { is_object } => {
                check_properties && is_object && is_underscored(stripped)
            }
            ContextKind::AssignmentTarget => check_properties && is_underscored(stripped),
            ContextKind::ObjectPropertyKeyOrValue { passed_as_argument } => {
                check_properties && !passed_as_argument && is_underscored(stripped)
            }
            // The binding role of the same node decides.
            ContextKind::ObjectPatternShorthand => false,
            ContextKind::ImportBinding { local_name } => {
                local_name == Some(name) && is_underscored(stripped)
            }
            ContextKind::CallOrConstructorArgumentPosition => false,
            ContextKind::PlainReference => is_underscored(stripped),
        }
    }
}

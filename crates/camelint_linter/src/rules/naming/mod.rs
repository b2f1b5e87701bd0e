//! Naming convention rules.
//!
//! These rules check that JavaScript identifiers follow naming conventions.

mod camel_case;
mod camelcase;
mod identifier_context;

pub use camel_case::{is_underscored, split_underscore_markers, to_camel_case};
pub use camelcase::{Camelcase, CamelcaseViolation, PropertiesMode};
pub use identifier_context::{ContextKind, identifier_contexts};

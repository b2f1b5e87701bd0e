//! Lint rules.

pub mod naming;

pub use naming::Camelcase;

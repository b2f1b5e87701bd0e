//! Concrete syntax tree helpers over tree-sitter nodes.

mod node;
mod walker;

pub use node::CstNode;
pub use walker::TreeWalker;

use tree_sitter::{Node, TreeCursor};

use crate::CstNode;

/// Pre-order iterator over every node of a tree.
pub struct TreeWalker<'a> {
    cursor: TreeCursor<'a>,
    source: &'a str,
    done: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: Node<'a>, source: &'a str) -> Self {
        Self {
            cursor: root.walk(),
            source,
            done: false,
        }
    }

    /// Move to the next node in pre-order, or mark the walk as finished.
    fn advance(&mut self) {
        if self.cursor.goto_first_child() || self.cursor.goto_next_sibling() {
            return;
        }
        loop {
            // The cursor was created at the root, so `goto_parent` fails there.
            if !self.cursor.goto_parent() {
                self.done = true;
                return;
            }
            if self.cursor.goto_next_sibling() {
                return;
            }
        }
    }
}

impl<'a> Iterator for TreeWalker<'a> {
    type Item = CstNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let node = CstNode::new(self.cursor.node(), self.source);
        self.advance();
        Some(node)
    }
}

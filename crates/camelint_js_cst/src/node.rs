use camelint_text_size::{TextRange, TextSize};
use tree_sitter::Node;

/// A tree-sitter node paired with the source text it was parsed from.
///
/// Parent links are read-only; nothing in the linter mutates the tree.
#[derive(Clone, Copy)]
pub struct CstNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl<'a> CstNode<'a> {
    pub fn new(node: Node<'a>, source: &'a str) -> Self {
        Self { node, source }
    }

    /// The grammar kind, e.g. `identifier` or `member_expression`.
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Stable identity of the node within its tree.
    pub fn id(&self) -> usize {
        self.node.id()
    }

    pub fn range(&self) -> TextRange {
        let start = TextSize::try_from(self.node.start_byte()).unwrap_or_default();
        let end = TextSize::try_from(self.node.end_byte()).unwrap_or(start);
        TextRange::new(start, end)
    }

    /// The literal source text covered by this node.
    pub fn text(&self) -> &'a str {
        &self.source[self.node.start_byte()..self.node.end_byte()]
    }

    pub fn is_named(&self) -> bool {
        self.node.is_named()
    }

    pub fn parent(&self) -> Option<CstNode<'a>> {
        self.node.parent().map(|p| CstNode::new(p, self.source))
    }

    pub fn child_by_field_name(&self, field: &str) -> Option<CstNode<'a>> {
        self.node
            .child_by_field_name(field)
            .map(|c| CstNode::new(c, self.source))
    }

    /// Whether `other` is the node stored in this node's `field`.
    pub fn field_is(&self, field: &str, other: &CstNode<'_>) -> bool {
        self.child_by_field_name(field)
            .is_some_and(|child| child.id() == other.id())
    }

    /// All children, named and anonymous.
    pub fn children(&self) -> impl Iterator<Item = CstNode<'a>> + use<'a> {
        let source = self.source;
        let mut cursor = self.node.walk();
        let children: Vec<_> = self.node.children(&mut cursor).collect();
        children.into_iter().map(move |c| CstNode::new(c, source))
    }

    /// Named children only; punctuation and keywords are skipped.
    pub fn named_children(&self) -> impl Iterator<Item = CstNode<'a>> + use<'a> {
        self.children().filter(CstNode::is_named)
    }
}

impl PartialEq for CstNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for CstNode<'_> {}

impl std::fmt::Debug for CstNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CstNode")
            .field("kind", &self.kind())
            .field("range", &self.range())
            .finish()
    }
}

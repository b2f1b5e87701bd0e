use std::cmp::Ordering;

use camelint_text_size::{TextRange, TextSize};

/// A text edit to be applied to a source file: the content of `range` is
/// replaced, or deleted when there is no content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, get_size2::GetSize)]
pub struct Edit {
    range: TextRange,
    content: Option<Box<str>>,
}

impl Edit {
    /// Creates an edit that deletes the content in `range`.
    pub const fn range_deletion(range: TextRange) -> Self {
        Self {
            content: None,
            range,
        }
    }

    /// Creates an edit that replaces the content in `range` with `content`.
    pub fn range_replacement(content: String, range: TextRange) -> Self {
        debug_assert!(!content.is_empty(), "Prefer `Edit::range_deletion`");

        Self {
            content: Some(Box::from(content)),
            range,
        }
    }

    /// The replacement text; `None` for a deletion.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub const fn range(&self) -> TextRange {
        self.range
    }

    pub const fn start(&self) -> TextSize {
        self.range.start()
    }

    pub const fn end(&self) -> TextSize {
        self.range.end()
    }
}

impl Ord for Edit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start()
            .cmp(&other.start())
            .then_with(|| self.end().cmp(&other.end()))
            .then_with(|| self.content.cmp(&other.content))
    }
}

impl PartialOrd for Edit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//! Line/column lookup for source text.

use std::fmt;

use camelint_text_size::{TextRange, TextSize};

pub use crate::line_index::{LineIndex, OneIndexed};

mod line_index;

/// Gives access to the source code of a file and allows mapping between
/// [`TextSize`] and [`SourceLocation`].
#[derive(Debug)]
pub struct SourceCode<'src, 'index> {
    text: &'src str,
    index: &'index LineIndex,
}

impl<'src, 'index> SourceCode<'src, 'index> {
    pub fn new(content: &'src str, index: &'index LineIndex) -> Self {
        Self {
            text: content,
            index,
        }
    }

    /// Computes the one indexed line and column numbers for `offset`.
    #[inline]
    pub fn line_column(&self, offset: TextSize) -> SourceLocation {
        self.index.line_column(offset, self.text)
    }

    /// Returns the source text of the line with the given index.
    #[inline]
    pub fn line_text(&self, index: OneIndexed) -> &'src str {
        let range = self.index.line_range(index, self.text);
        &self.text[range]
    }

    /// Returns the source text.
    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Returns the source text for `range`.
    #[inline]
    pub fn slice(&self, range: TextRange) -> &'src str {
        &self.text[range]
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }
}

/// A one-indexed line and column position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    pub line: OneIndexed,
    pub column: OneIndexed,
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self {
            line: OneIndexed::MIN,
            column: OneIndexed::MIN,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

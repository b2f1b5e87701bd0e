use std::fmt;
use std::num::NonZeroUsize;

use camelint_text_size::{TextRange, TextSize};

use crate::SourceLocation;

/// Index for fast [byte offset](TextSize) to [`SourceLocation`] conversions.
///
/// Columns are counted in characters, not bytes.
#[derive(Clone, Eq, PartialEq)]
pub struct LineIndex {
    /// Offset of the first byte of every line.
    line_starts: Vec<TextSize>,
    ascii: bool,
}

impl LineIndex {
    /// Builds the [`LineIndex`] from the source text of a file.
    pub fn from_source_text(text: &str) -> Self {
        let mut line_starts: Vec<TextSize> = Vec::with_capacity(text.len() / 88);
        line_starts.push(TextSize::default());

        let bytes = text.as_bytes();
        for i in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            // `\r\n` is a single line terminator; only the `\n` starts a new line.
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                continue;
            }
            line_starts.push(TextSize::try_from(i + 1).unwrap_or_default());
        }

        Self {
            line_starts,
            ascii: text.is_ascii(),
        }
    }

    /// Returns the row and column index for an offset.
    pub fn line_column(&self, offset: TextSize, content: &str) -> SourceLocation {
        let line = self.line_index(offset);
        let line_start = self.line_start(line, content);

        let column = if self.ascii {
            (offset - line_start).to_usize()
        } else {
            content[TextRange::new(line_start, offset)].chars().count()
        };

        SourceLocation {
            line,
            column: OneIndexed::from_zero_indexed(column),
        }
    }

    /// Returns the one-indexed line that contains `offset`.
    pub fn line_index(&self, offset: TextSize) -> OneIndexed {
        match self.line_starts.binary_search(&offset) {
            Ok(row) => OneIndexed::from_zero_indexed(row),
            Err(next_row) => OneIndexed::from_zero_indexed(next_row - 1),
        }
    }

    /// Returns the number of lines in the source code.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the byte offset where the line `line` starts.
    pub fn line_start(&self, line: OneIndexed, contents: &str) -> TextSize {
        let row_index = line.to_zero_indexed();
        if row_index == self.line_count() {
            TextSize::of(contents)
        } else {
            self.line_starts[row_index]
        }
    }

    /// Returns the byte offset of the end of `line`, including its terminator.
    pub fn line_end(&self, line: OneIndexed, contents: &str) -> TextSize {
        let row_index = line.to_zero_indexed();
        if row_index + 1 >= self.line_count() {
            TextSize::of(contents)
        } else {
            self.line_starts[row_index + 1]
        }
    }

    /// Returns the [`TextRange`] of `line`, including its terminator.
    pub fn line_range(&self, line: OneIndexed, contents: &str) -> TextRange {
        TextRange::new(self.line_start(line, contents), self.line_end(line, contents))
    }
}

impl fmt::Debug for LineIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.line_starts.iter()).finish()
    }
}

/// Type-safe wrapper for a value whose logical range starts at `1`, for
/// instance the line or column numbers in a file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    pub const MIN: Self = Self(NonZeroUsize::MIN);

    /// Creates a non-zero index from a zero-indexed value.
    pub const fn from_zero_indexed(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    pub const fn new(value: usize) -> Option<Self> {
        match NonZeroUsize::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn to_zero_indexed(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.get(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let source = "let my_var = 1;";
        let index = LineIndex::from_source_text(source);
        assert_eq!(index.line_count(), 1);

        let loc = index.line_column(TextSize::new(4), source);
        assert_eq!(loc.line.get(), 1);
        assert_eq!(loc.column.get(), 5);
    }

    #[test]
    fn test_multiple_lines() {
        let source = "a\nbb\n\nccc";
        let index = LineIndex::from_source_text(source);
        assert_eq!(index.line_count(), 4);

        let loc = index.line_column(TextSize::new(7), source);
        assert_eq!(loc.line.get(), 4);
        assert_eq!(loc.column.get(), 2);
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let source = "a\r\nb";
        let index = LineIndex::from_source_text(source);
        assert_eq!(index.line_count(), 2);

        let loc = index.line_column(TextSize::new(3), source);
        assert_eq!(loc.line.get(), 2);
        assert_eq!(loc.column.get(), 1);
    }

    #[test]
    fn test_columns_count_chars() {
        let source = "'é'; my_var";
        let index = LineIndex::from_source_text(source);
        // `é` is two bytes, so `my_var` starts at byte 6 after five characters.
        let loc = index.line_column(TextSize::new(6), source);
        assert_eq!(loc.column.get(), 6);
    }

    #[test]
    fn test_line_range_includes_terminator() {
        let source = "ab\ncd";
        let index = LineIndex::from_source_text(source);
        assert_eq!(
            &source[index.line_range(OneIndexed::MIN, source)],
            "ab\n"
        );
        assert_eq!(
            &source[index.line_range(OneIndexed::from_zero_indexed(1), source)],
            "cd"
        );
    }
}

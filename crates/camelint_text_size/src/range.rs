use std::cmp;
use std::fmt;
use std::ops::{Index, IndexMut, Range};

use crate::TextSize;

/// A range in text, represented as a pair of [`TextSize`].
///
/// The range is half-open: `start` is included, `end` is not.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "get-size", derive(get_size2::GetSize))]
pub struct TextRange {
    start: TextSize,
    end: TextSize,
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start().raw, self.end().raw)
    }
}

impl TextRange {
    /// Creates a new `TextRange` with the given `start` and `end` (`start..end`).
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    #[inline]
    pub const fn new(start: TextSize, end: TextSize) -> TextRange {
        assert!(start.raw <= end.raw);
        TextRange { start, end }
    }

    /// Creates a new `TextRange` with the given `offset` and `len` (`offset..offset + len`).
    #[inline]
    pub fn at(offset: TextSize, len: TextSize) -> TextRange {
        TextRange::new(offset, offset + len)
    }

    /// Creates a zero-length range at the specified offset.
    #[inline]
    pub const fn empty(offset: TextSize) -> TextRange {
        TextRange {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn start(self) -> TextSize {
        self.start
    }

    #[inline]
    pub const fn end(self) -> TextSize {
        self.end
    }

    #[inline]
    pub const fn len(self) -> TextSize {
        TextSize {
            raw: self.end().raw - self.start().raw,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start().raw == self.end().raw
    }

    /// Check if this range contains an offset.
    ///
    /// The end index is considered excluded.
    #[inline]
    pub fn contains(self, offset: TextSize) -> bool {
        self.start() <= offset && offset < self.end()
    }

    /// Check if this range completely contains another range.
    #[inline]
    pub fn contains_range(self, other: TextRange) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }

    /// The range covered by both ranges, if it exists.
    /// If the ranges touch but do not overlap, the output range is empty.
    #[inline]
    pub fn intersect(self, other: TextRange) -> Option<TextRange> {
        let start = cmp::max(self.start(), other.start());
        let end = cmp::min(self.end(), other.end());
        if end < start {
            return None;
        }
        Some(TextRange::new(start, end))
    }

    /// Whether the two ranges share at least one byte.
    #[inline]
    pub fn overlaps(self, other: TextRange) -> bool {
        self.start() < other.end() && other.start() < self.end()
    }
}

impl Index<TextRange> for str {
    type Output = str;

    #[inline]
    fn index(&self, index: TextRange) -> &str {
        &self[Range::<usize>::from(index)]
    }
}

impl Index<TextRange> for String {
    type Output = str;

    #[inline]
    fn index(&self, index: TextRange) -> &str {
        &self[Range::<usize>::from(index)]
    }
}

impl IndexMut<TextRange> for str {
    #[inline]
    fn index_mut(&mut self, index: TextRange) -> &mut str {
        &mut self[Range::<usize>::from(index)]
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(r: TextRange) -> Self {
        r.start().into()..r.end().into()
    }
}

impl Ord for TextRange {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.start()
            .cmp(&other.start())
            .then(self.end().cmp(&other.end()))
    }
}

impl PartialOrd for TextRange {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(TextRange, u64);

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(start.into(), end.into())
    }

    #[test]
    fn test_index_str() {
        let source = "const my_var = 1;";
        assert_eq!(&source[range(6, 12)], "my_var");
    }

    #[test]
    fn test_contains_excludes_end() {
        let r = range(2, 4);
        assert!(r.contains(TextSize::new(2)));
        assert!(!r.contains(TextSize::new(4)));
    }

    #[test]
    fn test_overlaps() {
        assert!(range(0, 5).overlaps(range(4, 8)));
        assert!(!range(0, 4).overlaps(range(4, 8)));
    }

    #[test]
    fn test_intersect_touching_is_empty() {
        assert_eq!(range(0, 4).intersect(range(4, 8)), Some(range(4, 4)));
        assert_eq!(range(0, 3).intersect(range(4, 8)), None);
    }

    #[test]
    #[should_panic]
    fn test_new_rejects_inverted_range() {
        let _ = range(5, 1);
    }
}

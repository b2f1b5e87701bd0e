use camelint_text_size::TextSize;

use crate::edit::Edit;

/// Indicates if a fix can be applied.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, is_macro::Is, get_size2::GetSize,
)]
pub enum Applicability {
    /// The fix is unsafe and should only be displayed for manual application by the user.
    DisplayOnly,

    /// The fix is unsafe and should only be applied with user opt-in.
    Unsafe,

    /// The fix is safe and can always be applied.
    Safe,
}

/// A collection of [`Edit`] elements to be applied to a source file.
#[derive(Debug, PartialEq, Eq, Clone, Hash, get_size2::GetSize)]
pub struct Fix {
    /// The [`Edit`] elements to be applied, sorted by [`Edit::start`] in ascending order.
    edits: Vec<Edit>,
    /// The [`Applicability`] of the fix.
    applicability: Applicability,
}

impl Fix {
    /// Create a new [`Fix`] that is [safe](Applicability::Safe) to apply from an [`Edit`] element.
    pub fn safe_edit(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            applicability: Applicability::Safe,
        }
    }

    /// Create a new [`Fix`] that is [safe](Applicability::Safe) to apply from multiple [`Edit`] elements.
    pub fn safe_edits(edit: Edit, rest: impl IntoIterator<Item = Edit>) -> Self {
        let mut edits: Vec<Edit> = std::iter::once(edit).chain(rest).collect();
        edits.sort_by_key(|edit| (edit.start(), edit.end()));
        Self {
            edits,
            applicability: Applicability::Safe,
        }
    }

    /// Create a new [`Fix`] that is [unsafe](Applicability::Unsafe) to apply from an [`Edit`] element.
    pub fn unsafe_edit(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            applicability: Applicability::Unsafe,
        }
    }

    /// Create a new [`Fix`] that should only [display](Applicability::DisplayOnly) and not apply from an [`Edit`] element.
    pub fn display_only_edit(edit: Edit) -> Self {
        Self {
            edits: vec![edit],
            applicability: Applicability::DisplayOnly,
        }
    }

    /// Return the [`TextSize`] of the first [`Edit`] in the [`Fix`].
    pub fn min_start(&self) -> Option<TextSize> {
        self.edits.first().map(Edit::start)
    }

    /// Return a slice of the [`Edit`] elements in the [`Fix`], sorted by [`Edit::start`] in ascending order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<Edit> {
        self.edits
    }

    /// Return the [`Applicability`] of the [`Fix`].
    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    /// Return `true` if this [`Fix`] should be applied with at a given [`Applicability`].
    pub fn applies(&self, applicability: Applicability) -> bool {
        self.applicability >= applicability
    }

    /// Create a new [`Fix`] with the given [`Applicability`].
    #[must_use]
    pub fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camelint_text_size::TextRange;

    fn replacement(start: u32, end: u32, content: &str) -> Edit {
        Edit::range_replacement(
            content.to_string(),
            TextRange::new(start.into(), end.into()),
        )
    }

    #[test]
    fn test_safe_edits_are_sorted() {
        let fix = Fix::safe_edits(replacement(10, 12, "b"), [replacement(0, 2, "a")]);
        assert_eq!(fix.min_start(), Some(TextSize::new(0)));
        assert_eq!(fix.edits()[1].content(), Some("b"));
    }

    #[test]
    fn test_applies() {
        let safe = Fix::safe_edit(replacement(0, 1, "a"));
        let unsafe_fix = Fix::unsafe_edit(replacement(0, 1, "a"));

        assert!(safe.applies(Applicability::Safe));
        assert!(safe.applies(Applicability::Unsafe));
        assert!(!unsafe_fix.applies(Applicability::Safe));
        assert!(unsafe_fix.applies(Applicability::Unsafe));
        assert!(unsafe_fix.applicability().is_unsafe());
    }
}

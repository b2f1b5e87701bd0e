use camelint_text_size::{TextRange, TextSize};

use crate::{Fix, Violation};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DiagnosticKind {
    /// The identifier of the violation type, e.g. `CamelcaseViolation`.
    pub name: String,
    /// The message body to display to the user, to explain the diagnostic.
    pub body: String,
    /// The message to display to the user, to explain the suggested fix.
    pub suggestion: Option<String>,
}

impl<T: Violation> From<T> for DiagnosticKind {
    fn from(value: T) -> Self {
        Self {
            body: value.message(),
            suggestion: value.fix_title(),
            name: value.name(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new<T: Into<DiagnosticKind>>(kind: T, range: TextRange) -> Self {
        Self {
            kind: kind.into(),
            range,
            fix: None,
        }
    }

    /// Consumes `self` and returns a new `Diagnostic` with the given `fix`.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.set_fix(fix);
        self
    }

    /// Set the [`Fix`] used to fix the diagnostic.
    #[inline]
    pub fn set_fix(&mut self, fix: Fix) {
        self.fix = Some(fix);
    }

    /// Set the [`Fix`] used to fix the diagnostic, if the provided function
    /// returns `Some`. Otherwise, the fix is left unset.
    #[inline]
    pub fn set_optional_fix(&mut self, fix: Option<Fix>) {
        if let Some(fix) = fix {
            self.set_fix(fix);
        }
    }

    pub const fn start(&self) -> TextSize {
        self.range.start()
    }

    pub const fn end(&self) -> TextSize {
        self.range.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edit, FixAvailability};

    #[derive(Debug)]
    struct SampleViolation {
        name: String,
    }

    impl Violation for SampleViolation {
        const FIX_AVAILABILITY: FixAvailability = FixAvailability::Always;

        fn message(&self) -> String {
            format!("Sample '{}'.", self.name)
        }

        fn fix_title(&self) -> Option<String> {
            Some("Rename".to_string())
        }
    }

    #[test]
    fn test_kind_from_violation() {
        let kind = DiagnosticKind::from(SampleViolation {
            name: "a_b".to_string(),
        });
        assert_eq!(kind.name, "SampleViolation");
        assert_eq!(kind.body, "Sample 'a_b'.");
        assert_eq!(kind.suggestion.as_deref(), Some("Rename"));
    }

    #[test]
    fn test_with_fix() {
        let range = TextRange::new(TextSize::new(0), TextSize::new(3));
        let diagnostic = Diagnostic::new(
            SampleViolation {
                name: "a_b".to_string(),
            },
            range,
        )
        .with_fix(Fix::safe_edit(Edit::range_replacement(
            "aB".to_string(),
            range,
        )));

        assert_eq!(diagnostic.start(), TextSize::new(0));
        let fix = diagnostic.fix.expect("fix should be set");
        assert_eq!(fix.edits()[0].content(), Some("aB"));
    }
}

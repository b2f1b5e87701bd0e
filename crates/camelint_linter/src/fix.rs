//! Applying fixes to source text.

use std::collections::BTreeSet;

use camelint_diagnostics::{Applicability, Diagnostic, Edit};
use camelint_text_size::TextSize;

/// Source text after fixes were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixResult {
    pub code: String,
    /// Number of diagnostics whose fix was applied.
    pub fixed: usize,
}

/// Apply the fixes of `diagnostics` to `source`.
///
/// Fixes below `required` applicability are skipped, as is any fix that
/// overlaps a fix applied before it. Diagnostics may be given in any order.
pub fn apply_fixes<'a>(
    source: &str,
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    required: Applicability,
) -> FixResult {
    let mut fixes: Vec<_> = diagnostics
        .into_iter()
        .filter_map(|d| d.fix.as_ref())
        .filter(|fix| fix.applies(required))
        .collect();
    fixes.sort_by_key(|fix| fix.min_start());

    let mut output = String::with_capacity(source.len());
    let mut last_pos: Option<TextSize> = None;
    let mut applied: BTreeSet<&Edit> = BTreeSet::new();
    let mut fixed = 0;

    for fix in fixes {
        // Identical edits from different diagnostics are applied once.
        let edits: Vec<&Edit> = fix
            .edits()
            .iter()
            .filter(|edit| !applied.contains(edit))
            .collect();

        let Some(first) = edits.first() else {
            continue;
        };
        if last_pos.is_some_and(|pos| pos > first.start()) {
            continue;
        }

        for edit in edits {
            let start = last_pos.unwrap_or_default();
            output.push_str(&source[start.to_usize()..edit.start().to_usize()]);
            if let Some(content) = edit.content() {
                output.push_str(content);
            }
            last_pos = Some(edit.end());
            applied.insert(edit);
        }
        fixed += 1;
    }

    let start = last_pos.unwrap_or_default();
    output.push_str(&source[start.to_usize()..]);

    FixResult {
        code: output,
        fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Linter;
    use camelint_diagnostics::{Fix, FixAvailability, Violation};
    use camelint_text_size::TextRange;

    #[derive(Debug)]
    struct Rename;

    impl Violation for Rename {
        const FIX_AVAILABILITY: FixAvailability = FixAvailability::Always;

        fn message(&self) -> String {
            "rename".to_string()
        }
    }

    fn diagnostic(start: u32, end: u32, content: &str, fix: fn(Edit) -> Fix) -> Diagnostic {
        let range = TextRange::new(start.into(), end.into());
        Diagnostic::new(Rename, range)
            .with_fix(fix(Edit::range_replacement(content.to_string(), range)))
    }

    #[test]
    fn test_apply_camelcase_fixes() {
        let source = "let my_var = other_var;\nobj.my_prop = my_var;\n";
        let diagnostics = Linter::default().check(source).unwrap();
        assert_eq!(apply_fixes(source, &diagnostics, Applicability::Safe).fixed, 0);

        let result = apply_fixes(source, &diagnostics, Applicability::Unsafe);
        assert_eq!(
            result.code,
            "let myVar = otherVar;\nobj.myProp = myVar;\n"
        );
        assert_eq!(result.fixed, 4);
    }

    #[test]
    fn test_unsorted_input() {
        let source = "aa bb";
        let diagnostics = [
            diagnostic(3, 5, "BB", Fix::safe_edit),
            diagnostic(0, 2, "AA", Fix::safe_edit),
        ];
        let result = apply_fixes(source, &diagnostics, Applicability::Safe);
        assert_eq!(result.code, "AA BB");
        assert_eq!(result.fixed, 2);
    }

    #[test]
    fn test_overlapping_fix_skipped() {
        let source = "abcdef";
        let diagnostics = [
            diagnostic(0, 4, "X", Fix::safe_edit),
            diagnostic(2, 6, "Y", Fix::safe_edit),
        ];
        let result = apply_fixes(source, &diagnostics, Applicability::Safe);
        assert_eq!(result.code, "Xef");
        assert_eq!(result.fixed, 1);
    }

    #[test]
    fn test_unsafe_fix_needs_opt_in() {
        let source = "a_b";
        let diagnostics = [diagnostic(0, 3, "aB", Fix::unsafe_edit)];

        let result = apply_fixes(source, &diagnostics, Applicability::Safe);
        assert_eq!(result.code, "a_b");
        assert_eq!(result.fixed, 0);

        let result = apply_fixes(source, &diagnostics, Applicability::Unsafe);
        assert_eq!(result.code, "aB");
        assert_eq!(result.fixed, 1);
    }

    #[test]
    fn test_no_fixes_returns_source() {
        let result = apply_fixes("let x = 1;", &[], Applicability::Safe);
        assert_eq!(result.code, "let x = 1;");
        assert_eq!(result.fixed, 0);
    }
}

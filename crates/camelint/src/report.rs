//! Rendering of lint results.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use camelint_diagnostics::{Applicability, Diagnostic};
use camelint_source_file::{LineIndex, SourceCode, SourceLocation};
use colored::Colorize;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::discover::relativize;

/// Result of linting one file.
#[derive(Debug)]
pub(crate) struct FileReport {
    pub(crate) path: PathBuf,
    /// Source the diagnostics refer to (after fixes, if any were applied).
    pub(crate) source: String,
    pub(crate) diagnostics: Vec<Diagnostic>,
    /// Number of fixes written back to the file.
    pub(crate) fixed: usize,
}

impl FileReport {
    /// Diagnostics paired with their one-indexed location.
    fn located(&self) -> Vec<(SourceLocation, &Diagnostic)> {
        let index = LineIndex::from_source_text(&self.source);
        let source_code = SourceCode::new(&self.source, &index);
        self.diagnostics
            .iter()
            .map(|d| (source_code.line_column(d.start()), d))
            .collect()
    }
}

/// Print `path:line:col: message` lines and a summary.
///
/// `[*]` marks diagnostics that `--fix` repairs with the given `unsafe_fixes`
/// setting; fixes held back by it are counted in the summary.
pub(crate) fn print_text(reports: &[FileReport], unsafe_fixes: bool) {
    let required = if unsafe_fixes {
        Applicability::Unsafe
    } else {
        Applicability::Safe
    };
    let mut remaining = 0;
    let mut fixable = 0;
    let mut held_back = 0;
    let mut fixed = 0;

    for report in reports {
        let path = relativize(&report.path).display().to_string();
        for (loc, diagnostic) in report.located() {
            let marker = match &diagnostic.fix {
                Some(fix) if fix.applies(required) => {
                    fixable += 1;
                    " [*]".cyan().to_string()
                }
                Some(fix) if fix.applies(Applicability::Unsafe) => {
                    held_back += 1;
                    String::new()
                }
                _ => String::new(),
            };
            println!(
                "{}:{}:{}: {}{}",
                path.bold(),
                loc.line,
                loc.column,
                diagnostic.kind.body,
                marker
            );
        }
        remaining += report.diagnostics.len();
        fixed += report.fixed;
    }

    if fixed > 0 {
        println!("{}", format!("Fixed {fixed} problem(s).").green());
    }
    if remaining == 0 {
        if fixed == 0 {
            println!("{}", "All checks passed!".green());
        }
        return;
    }

    let mut summary = format!("Found {remaining} problem(s)");
    if fixable > 0 {
        summary.push_str(&format!(" ({fixable} fixable with --fix)"));
    }
    if held_back > 0 {
        summary.push_str(&format!(" ({held_back} fixable with --fix --unsafe-fixes)"));
    }
    summary.push('.');
    println!("{}", summary.red());
}

/// Write a checkstyle-format XML report.
pub(crate) fn write_checkstyle<W: Write>(reports: &[FileReport], out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("checkstyle").with_attributes([("version", "4.3")]),
    ))?;

    for report in reports {
        let path = relativize(&report.path).display().to_string();
        writer.write_event(Event::Start(
            BytesStart::new("file").with_attributes([("name", path.as_str())]),
        ))?;

        for (loc, diagnostic) in report.located() {
            let line = loc.line.to_string();
            let column = loc.column.to_string();
            let source = format!("camelint.{}", diagnostic.kind.name);
            writer.write_event(Event::Empty(BytesStart::new("error").with_attributes([
                ("line", line.as_str()),
                ("column", column.as_str()),
                ("severity", "error"),
                ("message", diagnostic.kind.body.as_str()),
                ("source", source.as_str()),
            ])))?;
        }

        writer.write_event(Event::End(BytesEnd::new("file")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("checkstyle")))?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

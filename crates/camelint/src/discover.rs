//! Collection of the JavaScript files to lint.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// File extensions picked up when walking directories.
const JS_EXTENSIONS: &[&str] = &["js", "mjs", "cjs", "jsx"];

/// Expand `paths` into a sorted, de-duplicated list of files.
///
/// Files named explicitly are always included. Directories are walked for
/// JavaScript files, skipping `node_modules` and hidden directories.
pub(crate) fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = vec![];

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            bail!("path does not exist: {}", path.display());
        }

        for entry in WalkDir::new(path).into_iter().filter_entry(|e| !is_ignored(e)) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && is_javascript(entry.path()) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_javascript(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| JS_EXTENSIONS.contains(&ext))
}

fn is_ignored(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name == "node_modules" || name.starts_with('.'))
}

/// Current directory relative form of `path`, for display.
pub(crate) fn relativize(path: &Path) -> &Path {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "let x = 1;\n").unwrap();
    }

    #[test]
    fn test_walks_javascript_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.js");
        touch(dir.path(), "src/b.mjs");
        touch(dir.path(), "src/c.cjs");
        touch(dir.path(), "src/d.jsx");
        touch(dir.path(), "src/readme.md");
        touch(dir.path(), "src/e.ts");

        let files = collect_files(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.js", "b.mjs", "c.cjs", "d.jsx"]);
    }

    #[test]
    fn test_skips_node_modules_and_hidden() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.js");
        touch(dir.path(), "node_modules/pkg/index.js");
        touch(dir.path(), ".cache/index.js");

        let files = collect_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![dir.path().join("index.js")]);
    }

    #[test]
    fn test_explicit_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "script.txt");
        let file = dir.path().join("script.txt");

        let files = collect_files(&[file.clone(), file.clone()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_files(&[dir.path().join("missing")]).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}

//! Hygiene — the library must never panic on caller input.
//!
//! Scans `src/` (test files excluded) for constructs that crash or silently
//! swallow errors. Every budget is zero; the renderer and option resolution
//! report bad input through `RepInfoError` instead.

use std::fs;
use std::path::Path;

/// Pattern, allowed occurrences, and what it costs when it fires.
const BUDGETS: [(&str, usize, &str); 9] = [
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the caller"),
    ("unreachable!(", 0, "crashes the caller"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards a result unseen"),
    (".ok()", 0, "drops the error detail"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn library_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|l| l.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn library_sources_are_found() {
    let files = library_sources();
    assert!(files.iter().any(|f| f.path.ends_with("chat.rs")));
}

#[test]
fn panic_and_discard_budgets() {
    let files = library_sources();
    let mut report = Vec::new();

    for (pattern, max, why) in BUDGETS {
        let found = hits(&files, pattern);
        let total: usize = found.iter().map(|(_, c)| c).sum();
        if total > max {
            report.push(format!("`{pattern}` ({why}): found {total}, max {max}"));
            report.extend(found.iter().map(|(path, c)| format!("  {path}: {c}")));
        }
    }

    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}

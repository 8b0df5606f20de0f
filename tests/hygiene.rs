//! Hygiene: source-level budgets for the browser adapter.
//!
//! Scans `src/` (excluding `*_test.rs`) for constructs that can crash the page
//! or silently drop errors. DOM failures must surface as `PageError`, not be
//! discarded. Budgets are zero and only ever go down.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    max: usize,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", max: 0 },
    Rule { pattern: ".expect(", max: 0 },
    Rule { pattern: "panic!(", max: 0 },
    Rule { pattern: "unreachable!(", max: 0 },
    Rule { pattern: "todo!(", max: 0 },
    Rule { pattern: "unimplemented!(", max: 0 },
    Rule { pattern: "let _ =", max: 0 },
    Rule { pattern: ".ok()", max: 0 },
    Rule { pattern: "#[allow(dead_code)]", max: 0 },
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn violations(rule: &Rule) -> (usize, String) {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    let mut total = 0;
    let mut report = String::new();
    for (path, content) in &files {
        let count = content.lines().filter(|line| line.contains(rule.pattern)).count();
        if count > 0 {
            total += count;
            report.push_str(&format!("  {path}: {count}\n"));
        }
    }
    (total, report)
}

#[test]
fn sources_are_present() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let mut failures = Vec::new();
    for rule in RULES {
        let (count, report) = violations(rule);
        if count > rule.max {
            failures.push(format!("`{}` budget exceeded: found {count}, max {}\n{report}", rule.pattern, rule.max));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

//! Hygiene: enforces coding standards at test time.
//!
//! Scans the widget's production sources for panics and silently discarded
//! results. Each pattern has a budget; fix an existing hit before adding one.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the WASM module" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the WASM module" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the WASM module" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the WASM module" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "discards a result without inspecting it" },
    // `util::color::hex_channel`, where a bad digit means "not a hex color".
    Budget { pattern: ".ok()", max: 1, why: "discards an error without inspecting it" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "dead code should be deleted" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
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
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.clone(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();

    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "{} budget exceeded: found {count}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

/// Names under `[dependencies]` in `Cargo.toml`, as written.
fn declared_dependencies() -> Vec<String> {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    manifest
        .lines()
        .skip_while(|line| line.trim() != "[dependencies]")
        .skip(1)
        .take_while(|line| !line.trim_start().starts_with('['))
        .filter_map(|line| line.split_once('=').map(|(name, _)| name.trim().to_owned()))
        .filter(|name| !name.is_empty() && !name.starts_with('#'))
        .collect()
}

#[test]
fn declared_dependencies_are_used() {
    let files = source_files();
    let deps = declared_dependencies();
    assert!(deps.iter().any(|d| d == "leptos"), "run from the crate root");

    let unused: Vec<_> = deps
        .iter()
        .filter(|dep| {
            let path = format!("{}::", dep.replace('-', "_"));
            !files.iter().any(|f| f.content.contains(&path))
        })
        .collect();
    assert!(unused.is_empty(), "dependencies never referenced from src/: {unused:?}");
}

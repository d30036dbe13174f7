//! Hygiene: every declared dependency is referenced from `src/`.

use std::fs;
use std::path::Path;

fn collect_sources(dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(content);
            }
        }
    }
}

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
    let mut sources = Vec::new();
    collect_sources(Path::new("src"), &mut sources);
    let deps = declared_dependencies();
    assert!(deps.iter().any(|d| d == "chat-widget"), "run from the crate root");

    let unused: Vec<_> = deps
        .iter()
        .filter(|dep| {
            let path = format!("{}::", dep.replace('-', "_"));
            !sources.iter().any(|content| content.contains(&path))
        })
        .collect();
    assert!(unused.is_empty(), "dependencies never referenced from src/: {unused:?}");
}

//! Tests for source file discovery

use mentor_core::discover_sources;
use tempfile::TempDir;

#[test]
fn test_only_reviewable_languages() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("main.py"), "print('hi')").unwrap();
    std::fs::write(tmp.path().join("app.js"), "let x = 1;").unwrap();
    std::fs::write(tmp.path().join("Main.java"), "class Main {}").unwrap();
    std::fs::write(tmp.path().join("notes.md"), "# notes").unwrap();
    std::fs::write(tmp.path().join("lib.rs"), "fn main() {}").unwrap();

    let files = discover_sources(tmp.path(), &[]).unwrap();
    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| f.is_absolute()));
}

#[test]
fn test_results_are_sorted() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("b.py"), "x").unwrap();
    std::fs::write(tmp.path().join("a.py"), "x").unwrap();
    std::fs::write(tmp.path().join("c.py"), "x").unwrap();

    let files = discover_sources(tmp.path(), &[]).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["a.py", "b.py", "c.py"]);
}

#[test]
fn test_ignore_patterns() {
    let tmp = TempDir::new().unwrap();
    let deps = tmp.path().join("node_modules");
    std::fs::create_dir(&deps).unwrap();
    std::fs::write(deps.join("lib.js"), "x").unwrap();
    std::fs::write(tmp.path().join("index.js"), "x").unwrap();

    let files = discover_sources(tmp.path(), &["node_modules/".to_string()]).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("index.js"));
}

#[test]
fn test_gitignore_respected() {
    let tmp = TempDir::new().unwrap();

    // The ignore crate needs a .git dir to recognize .gitignore files
    std::fs::create_dir(tmp.path().join(".git")).unwrap();
    std::fs::write(tmp.path().join(".gitignore"), "generated/\n").unwrap();

    let generated = tmp.path().join("generated");
    std::fs::create_dir(&generated).unwrap();
    std::fs::write(generated.join("out.py"), "x").unwrap();
    std::fs::write(tmp.path().join("app.py"), "x").unwrap();

    let files = discover_sources(tmp.path(), &[]).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.py"));
}

#[test]
fn test_file_pattern_ignored() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("app.min.js"), "x").unwrap();
    std::fs::write(tmp.path().join("app.js"), "x").unwrap();

    let files = discover_sources(tmp.path(), &["*.min.js".to_string()]).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("app.js"));
}

#[test]
fn test_missing_root_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(discover_sources(&tmp.path().join("nope"), &[]).is_err());
}

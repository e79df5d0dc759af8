use scaffold::processor::process;
use scaffold::renderer::MiniJinjaRenderer;
use scaffold::scanner::scan;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// proj/
///   a.txt
///   sub/
///     b.txt
fn small_tree(root: &Path) -> PathBuf {
    let proj = root.join("proj");
    write(&proj.join("a.txt"), "alpha\n");
    write(&proj.join("sub/b.txt"), "beta\n");
    proj
}

#[test]
fn test_scan_small_tree() {
    let tmp = TempDir::new().unwrap();
    let proj = small_tree(tmp.path());

    let markup = scan(&proj, None).unwrap();

    assert_eq!(
        markup,
        ">>>proj/\n\
         >>>a.txt\n\
         alpha\n\
         <<<a.txt\n\
         >>>sub/\n\
         >>>b.txt\n\
         beta\n\
         <<<b.txt\n\
         <<<sub/\n\
         <<<proj/\n"
    );
}

#[test]
fn test_scan_closes_on_sibling_transition() {
    let tmp = TempDir::new().unwrap();
    let proj = tmp.path().join("proj");
    write(&proj.join("one/x.txt"), "x\n");
    write(&proj.join("two/y.txt"), "y\n");

    let markup = scan(&proj, None).unwrap();

    assert_eq!(
        markup,
        ">>>proj/\n\
         >>>one/\n\
         >>>x.txt\n\
         x\n\
         <<<x.txt\n\
         <<<one/\n\
         >>>two/\n\
         >>>y.txt\n\
         y\n\
         <<<y.txt\n\
         <<<two/\n\
         <<<proj/\n"
    );
}

#[test]
fn test_scan_appends_missing_trailing_newline() {
    let tmp = TempDir::new().unwrap();
    let proj = tmp.path().join("proj");
    write(&proj.join("f.txt"), "no newline at end");

    let markup = scan(&proj, None).unwrap();

    assert_eq!(markup, ">>>proj/\n>>>f.txt\nno newline at end\n<<<f.txt\n<<<proj/\n");
}

#[test]
fn test_scan_skip_pattern_prunes_subtree() {
    let tmp = TempDir::new().unwrap();
    let proj = small_tree(tmp.path());
    write(&proj.join(".git/config"), "should not appear\n");

    let markup = scan(&proj, Some(r"^\.git$")).unwrap();

    assert!(!markup.contains(".git"));
    assert!(!markup.contains("should not appear"));
    assert!(markup.contains(">>>a.txt\n"));
    assert!(markup.contains(">>>sub/\n"));
}

#[test]
fn test_scan_invalid_skip_pattern() {
    let tmp = TempDir::new().unwrap();
    let result = scan(tmp.path(), Some("["));
    assert!(matches!(result, Err(scaffold::error::Error::SkipPatternError(_))));
}

#[test]
fn test_scan_placeholder_segments() {
    let tmp = TempDir::new().unwrap();
    let proj = tmp.path().join("proj");
    write(&proj.join("#model_name/#model.go"), "package x\n");

    let markup = scan(&proj, None).unwrap();

    assert_eq!(
        markup,
        ">>>proj/\n\
         >>>{{ filename_lower(ModelName) }}/\n\
         >>>{{ filename_lower(Model) }}.go\n\
         package x\n\
         <<<{{ filename_lower(Model) }}.go\n\
         <<<{{ filename_lower(ModelName) }}/\n\
         <<<proj/\n"
    );
}

#[test]
fn test_round_trip_reproduces_tree() {
    let tmp = TempDir::new().unwrap();
    let proj = small_tree(tmp.path());

    let markup = scan(&proj, None).unwrap();

    let out = TempDir::new().unwrap();
    let engine = MiniJinjaRenderer::new();
    let written = process(&engine, out.path(), &markup, &json!({}), false).unwrap();

    assert_eq!(
        written,
        vec![out.path().join("proj/a.txt"), out.path().join("proj/sub/b.txt")]
    );
    assert!(!dir_diff::is_different(&proj, out.path().join("proj")).unwrap());
}

#[test]
fn test_round_trip_dry_run_logs_relative_paths() {
    let tmp = TempDir::new().unwrap();
    let proj = small_tree(tmp.path());

    let markup = scan(&proj, None).unwrap();

    let engine = MiniJinjaRenderer::new();
    let written = process(&engine, "start", &markup, &json!({}), true).unwrap();

    assert_eq!(
        written,
        vec![
            PathBuf::from("start/proj/a.txt"),
            PathBuf::from("start/proj/sub/b.txt")
        ]
    );
}

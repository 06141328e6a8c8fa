use projprompt::output::{format_json, format_prompt};
use projprompt::{BinaryDetection, ProjpromptError, ScanBuilder, ScanResult, scan};
use std::fs;
use tempfile::tempdir;
fn prompt_text(result: &ScanResult) -> String {
    String::from_utf8(format_prompt(result).unwrap()).unwrap()
}
#[test]
fn integration_gitignore_and_binary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\n").unwrap();
    fs::write(dir.path().join("b.bin"), [0x01u8, 0x00, 0x02]).unwrap();
    fs::write(dir.path().join(".gitignore"), "b.bin\n").unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.tree, ".\n    └── a.txt\n");
    assert_eq!(result.files.len(), 1);
    assert_eq!(
        prompt_text(&result),
        ".\n    └── a.txt\n\n\n>>>> a.txt <<<<\n```\nhello\n```\n"
    );
}
#[test]
fn integration_binary_listed_but_not_dumped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.bin"), [0x48u8, 0x65, 0x00, 0x6F]).unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.tree, ".\n    ├── a.txt\n    └── b.bin\n");
    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].path.ends_with("a.txt"));
    let with_none = scan(
        ScanBuilder::new(dir.path())
            .binary_detection(BinaryDetection::None)
            .build(),
    )
    .unwrap();
    assert_eq!(with_none.files.len(), 2);
}
#[test]
fn integration_nested_paths_and_order() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/util")).unwrap();
    fs::write(dir.path().join("b.txt"), "b").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}\r\n").unwrap();
    fs::write(dir.path().join("src/util/mod.rs"), "").unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    let expected_tree = "\
.
    ├── a.txt
    ├── b.txt
    └── src
        ├── main.rs
        └── util
            └── mod.rs
";
    assert_eq!(result.tree, expected_tree);
    let paths: Vec<String> = result
        .files
        .iter()
        .map(|f| f.path.to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(paths, ["a.txt", "b.txt", "src/main.rs", "src/util/mod.rs"]);
    assert_eq!(result.files[2].content, b"fn main() {}\n");
    assert!(prompt_text(&result).ends_with(">>>> src/util/mod.rs <<<<\n```\n```\n")
        || prompt_text(&result).ends_with(">>>> src\\util\\mod.rs <<<<\n```\n```\n"));
}
#[test]
fn integration_ignored_directory_is_pruned() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/out.txt"), "build output").unwrap();
    fs::create_dir(dir.path().join("test")).unwrap();
    fs::write(dir.path().join("test/data.txt"), "data").unwrap();
    fs::write(dir.path().join("keep.rs"), "keep").unwrap();
    let result = scan(
        ScanBuilder::new(dir.path())
            .ignore_list("target,test/*")
            .build(),
    )
    .unwrap();
    assert_eq!(result.tree, ".\n    ├── keep.rs\n    └── test\n");
    assert_eq!(result.files.len(), 1);
}
#[test]
fn integration_builtin_patterns() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/config"), "[core]").unwrap();
    fs::write(dir.path().join(".gitignore"), "# nothing\n").unwrap();
    fs::write(dir.path().join("project-requirements.md"), "inner").unwrap();
    fs::write(dir.path().join("main.go"), "package main").unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.tree, ".\n    ├── .git\n    └── main.go\n");
    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].path.ends_with("main.go"));
}
#[test]
fn integration_requirements_sibling() {
    let outer = tempdir().unwrap();
    let root = outer.path().join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(outer.path().join("project-requirements.md"), "Build it").unwrap();
    fs::write(root.join("main.rs"), "fn main() {}\n").unwrap();
    let result = scan(ScanBuilder::new(&root).build()).unwrap();
    assert_eq!(result.requirements.as_deref(), Some(&b"Build it"[..]));
    assert!(prompt_text(&result).starts_with("# Project requirements\nBuild it\n.\n    └── main.rs\n"));
}
#[test]
fn integration_idempotent() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "# Guide\n").unwrap();
    fs::write(dir.path().join("lib.rs"), "pub fn f() {}\n").unwrap();
    let first = prompt_text(&scan(ScanBuilder::new(dir.path()).build()).unwrap());
    let second = prompt_text(&scan(ScanBuilder::new(dir.path()).build()).unwrap());
    assert_eq!(first, second);
}
#[test]
fn integration_json_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&format_json(&result, false).unwrap()).unwrap();
    assert_eq!(json["tree"], ".\n    └── a.txt\n");
    assert_eq!(json["files"][0]["content"], "a\n");
}
#[test]
fn integration_root_must_be_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    fs::write(&file, "x").unwrap();
    assert!(matches!(
        scan(ScanBuilder::new(&file).build()),
        Err(ProjpromptError::InvalidPath(_))
    ));
    assert!(matches!(
        scan(ScanBuilder::new(dir.path().join("missing")).build()),
        Err(ProjpromptError::Io { .. })
    ));
}
#[test]
fn integration_non_utf8_content_is_verbatim() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("latin1.txt"), b"caf\xE9\r\nna\xEFve").unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].content, b"caf\xE9\nna\xEFve\n");
    let out = format_prompt(&result).unwrap();
    let expected: &[u8] = b">>>> latin1.txt <<<<\n```\ncaf\xE9\nna\xEFve\n```\n";
    assert!(out.ends_with(expected));
    let json: serde_json::Value = serde_json::from_str(&format_json(&result, false).unwrap()).unwrap();
    assert_eq!(json["files"][0]["content"], "caf\u{FFFD}\nna\u{FFFD}ve\n");
}
#[test]
fn integration_trailing_ignored_sibling() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("z.log"), "log").unwrap();
    let result = scan(ScanBuilder::new(dir.path()).ignore_list("*.log").build()).unwrap();
    assert_eq!(result.tree, ".\n    └── a.txt\n");
}
#[cfg(unix)]
#[test]
fn integration_symlinked_directory_is_followed() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real/x.txt"), "x").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();
    let result = scan(ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        result.tree,
        ".\n    ├── link\n    │   └── x.txt\n    └── real\n        └── x.txt\n"
    );
    let paths: Vec<String> = result
        .files
        .iter()
        .map(|f| f.path.to_string_lossy().into_owned())
        .collect();
    assert_eq!(paths, ["link/x.txt", "real/x.txt"]);
    let unfollowed = scan(ScanBuilder::new(dir.path()).follow_links(false).build()).unwrap();
    assert_eq!(
        unfollowed.tree,
        ".\n    ├── link\n    └── real\n        └── x.txt\n"
    );
}
#[cfg(unix)]
#[test]
fn integration_unreadable_entries_are_skipped() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let secret = dir.path().join("secret.txt");
    let locked = dir.path().join("locked");
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(&secret, "hidden").unwrap();
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("inner.txt"), "inner").unwrap();
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    // Privileged users bypass permission bits; nothing is unreadable then.
    let enforced = fs::read(&secret).is_err();
    let result = scan(ScanBuilder::new(dir.path()).build());
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o644)).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let result = result.unwrap();
    if !enforced {
        return;
    }
    assert_eq!(
        result.tree,
        ".\n    ├── a.txt\n    ├── locked\n    └── secret.txt\n"
    );
    assert_eq!(result.files.len(), 1);
    assert!(result.files[0].path.ends_with("a.txt"));
}

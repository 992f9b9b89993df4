use std::{fs, path::Path};

use crate::content::*;
use crate::markdown::CommonMarkParser;

use super::setup_log;

#[test]
fn test_output_name() {
    let name = |file: &str| output_name(Path::new(file)).unwrap();

    assert_eq!(Some("a.html".to_string()), name("a.md"));
    assert_eq!(Some("a.tar.html".to_string()), name("a.tar.md"));
    assert_eq!(None, name("c.MD"));
    assert_eq!(None, name("b.txt"));
    assert_eq!(None, name(".md"));
    assert_eq!(None, name("README"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_markdown_name_fails() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    setup_log();

    let file_name = OsStr::from_bytes(b"caf\xe9.md");
    assert!(output_name(Path::new(file_name)).is_err());

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(file_name), "# Cafe").unwrap();

    let result = load_content(dir.path(), &mut CommonMarkParser::default());
    assert!(result.is_err(), "Expected an error instead of skipping the file");
}

#[test]
fn test_only_lowercase_md_files_are_loaded() {
    setup_log();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "# A").unwrap();
    fs::write(dir.path().join("b.txt"), "# B").unwrap();
    fs::write(dir.path().join("c.MD"), "# C").unwrap();
    fs::create_dir(dir.path().join("d.md")).unwrap();
    fs::write(dir.path().join("d.md").join("e.md"), "# E").unwrap();

    let map = load_content(dir.path(), &mut CommonMarkParser::default()).unwrap();

    assert_eq!(vec!["a.html"], map.keys().map(String::as_str).collect::<Vec<_>>());
    assert_eq!("A\n", map["a.html"].text());
}

#[test]
fn test_reader_is_injected() {
    setup_log();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.md"), "").unwrap();
    fs::write(dir.path().join("test.md"), "").unwrap();

    let map = load_content_with(dir.path(), &mut CommonMarkParser::default(), |path| {
        match path.file_name().and_then(|name| name.to_str()) {
            Some("README.md") => Ok("# README".to_string()),
            Some("test.md") => Ok("# test header".to_string()),
            _ => Err(anyhow::anyhow!("Should not be reached")),
        }
    })
    .unwrap();

    assert_eq!(2, map.len(), "Expected 2 files");
    assert_eq!("README\n", map["README.html"].text());
    assert_eq!("test header\n", map["test.html"].text());
}

#[test]
fn test_read_error_aborts_loading() {
    setup_log();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.md"), "").unwrap();

    let result = load_content_with(dir.path(), &mut CommonMarkParser::default(), |_| {
        Err(anyhow::anyhow!("Permission denied"))
    });

    assert!(result.is_err());
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_content(&dir.path().join("content"), &mut CommonMarkParser::default());
    assert!(result.is_err());
}

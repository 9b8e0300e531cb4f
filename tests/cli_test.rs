use clap::Parser;
use pagegen::cli::{Args, Selection};
use pagegen::component::SetKind;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("pagegen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.set, Selection::All);
    assert_eq!(parsed.root, PathBuf::from("."));
    assert!(parsed.config.is_none());
    assert!(parsed.only.is_empty());
    assert!(!parsed.fail_fast);
    assert!(!parsed.dry_run);
    assert!(!parsed.interactive);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "admin",
        "--root",
        "./web",
        "--config",
        "pages.yml",
        "--only",
        "Dash*",
        "--only",
        "Inbox.jsx",
        "--fail-fast",
        "--dry-run",
        "--interactive",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.set, Selection::Admin);
    assert_eq!(parsed.root, PathBuf::from("./web"));
    assert_eq!(parsed.config, Some(PathBuf::from("pages.yml")));
    assert_eq!(parsed.only, vec!["Dash*", "Inbox.jsx"]);
    assert!(parsed.fail_fast);
    assert!(parsed.dry_run);
    assert!(parsed.interactive);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["public", "-r", "out", "-c", "m.json", "-i", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.set, Selection::Public);
    assert_eq!(parsed.root, PathBuf::from("out"));
    assert_eq!(parsed.config, Some(PathBuf::from("m.json")));
    assert!(parsed.interactive);
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_set() {
    assert!(Args::try_parse_from(make_args(&["private"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["admin", "public"])).is_err());
}

#[test]
fn test_selection_kinds() {
    assert_eq!(Selection::Admin.kinds(), vec![SetKind::Admin]);
    assert_eq!(Selection::Public.kinds(), vec![SetKind::Public]);
    assert_eq!(Selection::All.kinds(), vec![SetKind::Admin, SetKind::Public]);
}

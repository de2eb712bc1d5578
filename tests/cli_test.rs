use clap::Parser;
use go_include::cli::Args;
use go_include::config::Encoding;
use std::ffi::OsString;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("go-include")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert!(parsed.patterns.is_empty());
    assert_eq!(parsed.output, "-");
    assert_eq!(parsed.encoding, Encoding::Text);
    assert!(!parsed.with_dir);
    assert!(!parsed.with_ext);
    assert!(!parsed.unexported);
    assert!(!parsed.verbose);
}

#[test]
fn test_short_flags() {
    let parsed =
        Args::try_parse_from(make_args(&["-o", "res", "-t", "bin", "-v", "*.png"])).unwrap();

    assert_eq!(parsed.output, "res");
    assert_eq!(parsed.encoding, Encoding::Bin);
    assert!(parsed.verbose);
    assert_eq!(parsed.patterns, vec!["*.png".to_string()]);
}

#[test]
fn test_long_flags() {
    let parsed = Args::try_parse_from(make_args(&[
        "--output",
        "assets.go",
        "--type",
        "text",
        "--with-dir",
        "--with-ext",
        "--unexported",
        "a.txt",
        "res/*",
    ]))
    .unwrap();

    assert_eq!(parsed.output, "assets.go");
    assert_eq!(parsed.encoding, Encoding::Text);
    assert!(parsed.with_dir);
    assert!(parsed.with_ext);
    assert!(parsed.unexported);
    assert_eq!(parsed.patterns, vec!["a.txt".to_string(), "res/*".to_string()]);
}

#[test]
fn test_invalid_type() {
    assert!(Args::try_parse_from(make_args(&["-t", "json", "a.txt"])).is_err());
}

#[test]
fn test_help_is_reported_as_error() {
    let err = Args::try_parse_from(make_args(&["-h"])).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

//! Behaviour of the option parser on realistic command lines

use std::path::Path;

use im2a::{parse, Configuration, OptionsError, ParseOutcome, DEFAULT_CHARSET};

fn configuration(args: &[&str]) -> Configuration {
    let argv = std::iter::once("im2a").chain(args.iter().copied());
    match parse(argv) {
        Ok(ParseOutcome::Run(config)) => config,
        other => panic!("expected a configuration for {:?}, got {:?}", args, other),
    }
}

fn rejection(args: &[&str]) -> OptionsError {
    let argv = std::iter::once("im2a").chain(args.iter().copied());
    match parse(argv) {
        Err(err) => err,
        other => panic!("expected {:?} to be rejected, got {:?}", args, other),
    }
}

#[test]
fn test_single_file_uses_defaults() {
    let config = configuration(&["file.png"]);
    assert_eq!(config.source_path(), Path::new("file.png"));
    assert_eq!(config.charset().to_string(), " M   ...',;:clodxkO0KXNWMM");
    assert_eq!(config.charset().to_string(), DEFAULT_CHARSET);
    assert_eq!(config.red_weight(), 0.2989);
    assert_eq!(config.green_weight(), 0.5866);
    assert_eq!(config.blue_weight(), 0.1145);
    assert_eq!(config.transparency_threshold(), 1.0);
    assert_eq!(config.width(), None);
    assert_eq!(config.height(), None);
    assert!(!config.html_output());
    assert!(!config.pixel_mode());
    assert!(!config.invert());
    assert!(!config.center());
    assert!(!config.grayscale());
    assert!(!config.transparent());
}

#[test]
fn test_every_long_flag() {
    let config = configuration(&[
        "--html",
        "--invert",
        "--center",
        "--width=120",
        "--height=40",
        "--charset= .:-=+*#%@",
        "--grayscale",
        "--transparent",
        "--transparency-threshold=0.5",
        "--red-weight=0.3",
        "--green-weight=0.59",
        "--blue-weight=0.11",
        "photo.jpg",
    ]);
    assert!(config.html_output());
    assert!(!config.pixel_mode());
    assert!(config.invert());
    assert!(config.center());
    assert_eq!(config.width(), Some(120));
    assert_eq!(config.height(), Some(40));
    assert_eq!(config.charset().to_string(), " .:-=+*#%@");
    assert!(config.grayscale());
    assert!(config.transparent());
    assert_eq!(config.transparency_threshold(), 0.5);
    assert_eq!(config.red_weight(), 0.3);
    assert_eq!(config.green_weight(), 0.59);
    assert_eq!(config.blue_weight(), 0.11);
    assert_eq!(config.source_path(), Path::new("photo.jpg"));
}

#[test]
fn test_every_short_flag() {
    let config = configuration(&[
        "-p", "-i", "-t", "-W", "80", "-H", "25", "-c", "01", "-g", "-T", "-X", "0.25", "-R",
        "1", "-G", "2", "-B", "3", "photo.jpg",
    ]);
    assert!(config.pixel_mode());
    assert!(config.invert());
    assert!(config.center());
    assert_eq!(config.width(), Some(80));
    assert_eq!(config.height(), Some(25));
    assert_eq!(config.charset().glyphs(), &['0', '1']);
    assert!(config.grayscale());
    assert!(config.transparent());
    assert_eq!(config.transparency_threshold(), 0.25);
    assert_eq!(config.red_weight(), 1.0);
    assert_eq!(config.green_weight(), 2.0);
    assert_eq!(config.blue_weight(), 3.0);
}

#[test]
fn test_options_after_positional() {
    let config = configuration(&["photo.jpg", "--invert", "-W", "10"]);
    assert!(config.invert());
    assert_eq!(config.width(), Some(10));
    assert_eq!(config.source_path(), Path::new("photo.jpg"));
}

#[test]
fn test_negative_width_rejected() {
    let err = rejection(&["--width=-5", "file.png"]);
    assert_eq!(err, OptionsError::InvalidWidth { value: -5 });
    assert!(err.to_string().contains("invalid width"));
}

#[test]
fn test_zero_height_rejected() {
    let err = rejection(&["-H", "0", "file.png"]);
    assert_eq!(err.to_string(), "invalid height: 0");
}

#[test]
fn test_short_charset_rejected() {
    let err = rejection(&["--charset=a", "file.png"]);
    assert_eq!(err, OptionsError::CharsetTooShort { length: 1 });
    assert!(err.to_string().contains("at least 2 symbols long"));
}

#[test]
fn test_html_and_pixel_conflict() {
    let err = rejection(&["--html", "--pixel", "file.png"]);
    assert_eq!(err, OptionsError::IncompatibleModes);
    assert!(err.to_string().contains("--html and --pixel"));
}

#[test]
fn test_conflict_reported_before_argument_count() {
    assert_eq!(rejection(&["-m", "-p"]), OptionsError::IncompatibleModes);
}

#[test]
fn test_two_files_rejected() {
    let err = rejection(&["file1.png", "file2.png"]);
    assert_eq!(err, OptionsError::WrongArgumentCount { given: 2 });
    assert!(err.to_string().contains("wrong number of arguments"));
}

#[test]
fn test_no_file_rejected() {
    assert_eq!(
        rejection(&["--invert"]),
        OptionsError::WrongArgumentCount { given: 0 }
    );
}

#[test]
fn test_help_needs_no_file() {
    assert_eq!(parse(["im2a", "--help"]), Ok(ParseOutcome::Help));
    assert_eq!(parse(["im2a", "-h"]), Ok(ParseOutcome::Help));
}

#[test]
fn test_version_needs_no_file() {
    assert_eq!(parse(["im2a", "--version"]), Ok(ParseOutcome::Version));
    assert_eq!(parse(["im2a", "-v", "a.png", "b.png"]), Ok(ParseOutcome::Version));
}

#[test]
fn test_unknown_long_option() {
    let err = rejection(&["--sepia", "file.png"]);
    assert_eq!(err, OptionsError::unrecognized("--sepia"));
}

#[test]
fn test_unknown_short_option() {
    let err = rejection(&["-z", "file.png"]);
    assert!(matches!(err, OptionsError::UnrecognizedOption { .. }));
    assert!(err.to_string().contains("-z"));
}

#[test]
fn test_non_numeric_width_is_zero() {
    assert_eq!(
        rejection(&["--width=wide", "file.png"]),
        OptionsError::InvalidWidth { value: 0 }
    );
}

#[test]
fn test_non_numeric_weight_is_zero() {
    let config = configuration(&["--red-weight=heavy", "file.png"]);
    assert_eq!(config.red_weight(), 0.0);
}

#[test]
fn test_numeric_suffix_ignored() {
    let config = configuration(&["--width=80cols", "--blue-weight=0.2x", "file.png"]);
    assert_eq!(config.width(), Some(80));
    assert_eq!(config.blue_weight(), 0.2);
}

#[test]
fn test_unicode_charset_counts_glyphs() {
    let config = configuration(&["--charset=░▒▓█", "file.png"]);
    assert_eq!(config.charset().len(), 4);
    assert_eq!(rejection(&["-c", "█", "file.png"]), OptionsError::CharsetTooShort { length: 1 });
}

#[test]
fn test_stdin_dash_is_a_file() {
    let config = configuration(&["-"]);
    assert_eq!(config.source_path(), Path::new("-"));
}

#[test]
fn test_every_repeated_value_is_validated() {
    assert_eq!(
        rejection(&["--width=-5", "--width=80", "f.png"]),
        OptionsError::InvalidWidth { value: -5 }
    );
    assert_eq!(
        rejection(&["--charset=a", "--charset=ab", "f.png"]),
        OptionsError::CharsetTooShort { length: 1 }
    );
    let config = configuration(&["--width=40", "--width=80", "f.png"]);
    assert_eq!(config.width(), Some(80));
}

#[test]
fn test_help_before_unknown_option() {
    assert_eq!(parse(["im2a", "--help", "--bogus"]), Ok(ParseOutcome::Help));
    assert_eq!(
        rejection(&["--width=0", "--bogus", "f.png"]),
        OptionsError::InvalidWidth { value: 0 }
    );
    assert_eq!(
        rejection(&["--bogus", "--width=0", "f.png"]),
        OptionsError::unrecognized("--bogus")
    );
}

#[test]
fn test_ambiguous_prefix_rejected() {
    let err = rejection(&["--trans", "f.png"]);
    assert!(matches!(err, OptionsError::AmbiguousOption { .. }));
    assert!(err.to_string().starts_with("option '--trans' is ambiguous"));
}

#[test]
fn test_empty_file_name_rejected() {
    assert_eq!(rejection(&[""]), OptionsError::EmptySourcePath);
}

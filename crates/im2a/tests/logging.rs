//! Tests for logging functionality
//!
//! Only one global subscriber can be installed per process, so most calls
//! here are allowed to fail; they must not panic.

use im2a::core::logging::{init_logging, resolve_level, LogFormat, DEFAULT_LOG_LEVEL};
use im2a::{parse, ParseOutcome};
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("Pretty").unwrap(), LogFormat::Pretty);
    assert!(LogFormat::from_str("xml").is_err());
}

#[test]
fn test_log_format_variants() {
    let variants = LogFormat::variants();
    assert_eq!(variants.len(), 3);
    assert!(variants.contains(&"compact"));
    assert!(variants.contains(&"pretty"));
    assert!(variants.contains(&"json"));
}

#[test]
fn test_default_format_is_compact() {
    assert_eq!(LogFormat::default(), LogFormat::Compact);
}

#[test]
fn test_default_level_is_quiet() {
    assert_eq!(DEFAULT_LOG_LEVEL, "warn");
    assert_eq!(resolve_level(Some("debug")), "debug");
}

#[test]
fn test_init_logging_with_levels() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("off"), Some("compact"));
}

#[test]
fn test_init_logging_with_formats() {
    let _ = init_logging(Some("info"), Some("pretty"));
    let _ = init_logging(Some("info"), Some("json"));
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_parsing_with_tracing_enabled() {
    let _ = init_logging(Some("trace"), Some("compact"));
    let outcome = parse(["im2a", "--charset=ab", "--width=3", "cat.png"]);
    assert!(matches!(outcome, Ok(ParseOutcome::Run(_))));
    assert!(parse(["im2a", "--width=0", "cat.png"]).is_err());
}

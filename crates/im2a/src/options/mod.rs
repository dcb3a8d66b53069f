//! Command-line option parsing
//!
//! [`parse`] turns an argument vector into a [`ParseOutcome`] or an
//! [`OptionsError`]. Nothing here touches the process: printing and exiting
//! are left to the binary.
//!
//! Parsing runs in three stages:
//! 1. `clap` matches the argument vector against the flag table, rejecting
//!    unknown, ambiguous, and value-less options.
//! 2. Help, version, and per-option validation failures are resolved in the
//!    order they appear on the command line, so `--help --width=0` prints
//!    help while `--width=0 --help` reports the width. Every occurrence of a
//!    repeated option is checked. When stage 1 failed, only the options before
//!    the offending token take part, and the syntax error is reported if none
//!    of them stops parsing.
//! 3. Cross-option checks: `--html` with `--pixel`, then the positional count
//!    and a non-empty file name.

mod args;
pub mod numeric;
mod usage;

use std::ffi::OsString;
use std::num::NonZeroU32;
use std::path::Path;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::{debug, span, trace, Level};

use crate::core::{Charset, Configuration, OptionsError};
use args::RawArgs;

pub use usage::usage;

/// Name used in diagnostics when `argv[0]` is missing or unusable
pub const DEFAULT_PROGRAM_NAME: &str = "im2a";

/// Successful result of parsing an argument vector
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Convert an image with this configuration
    Run(Configuration),
    /// Print usage to standard output and exit successfully
    Help,
    /// Print the version string to standard output and exit successfully
    Version,
}

/// First event in argument order that ends option scanning
enum Stop {
    Help,
    Version,
    Reject(OptionsError),
}

/// Program name for diagnostics: the file name of `argv[0]`
pub fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROGRAM_NAME)
        .to_string()
}

/// Parse a full argument vector, program name first
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use im2a::options::{parse, ParseOutcome};
///
/// let outcome = parse(["im2a", "--width=80", "--invert", "cat.png"]).unwrap();
/// let ParseOutcome::Run(config) = outcome else { panic!("expected a configuration") };
/// assert_eq!(config.width(), Some(80));
/// assert!(config.invert());
/// assert_eq!(config.source_path(), Path::new("cat.png"));
/// ```
pub fn parse<I, T>(args: I) -> Result<ParseOutcome, OptionsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let parse_span = span!(Level::DEBUG, "parse_options", arg_count = args.len());
    let _enter = parse_span.enter();

    let matches = match RawArgs::command().try_get_matches_from(&args) {
        Ok(matches) => matches,
        Err(err) => {
            let err = from_clap_error(err);
            return match stop_before_syntax_error(&args) {
                Some(stop) => resolve(stop),
                None => {
                    debug!(error = %err, "Rejected option syntax");
                    Err(err)
                }
            };
        }
    };
    let raw = RawArgs::from_arg_matches(&matches).map_err(from_clap_error)?;

    if let Some(stop) = first_stop(&raw, &matches) {
        return resolve(stop);
    }

    let config = build_configuration(raw).map_err(|err| {
        debug!(error = %err, "Rejected argument vector");
        err
    })?;

    debug!(
        source = %config.source_path().display(),
        html = config.html_output(),
        pixel = config.pixel_mode(),
        width = ?config.width(),
        height = ?config.height(),
        charset_len = config.charset().len(),
        "Parsed configuration"
    );
    Ok(ParseOutcome::Run(config))
}

fn resolve(stop: Stop) -> Result<ParseOutcome, OptionsError> {
    match stop {
        Stop::Help => {
            debug!("Help requested");
            Ok(ParseOutcome::Help)
        }
        Stop::Version => {
            debug!("Version requested");
            Ok(ParseOutcome::Version)
        }
        Stop::Reject(err) => {
            debug!(error = %err, "Rejected option value");
            Err(err)
        }
    }
}

/// Stop found in the longest prefix of `args` that still parses
///
/// Once the offending token is part of a prefix every longer prefix fails too,
/// so this prefix holds exactly the options that precede the syntax error.
fn stop_before_syntax_error(args: &[OsString]) -> Option<Stop> {
    let (len, matches) = (1..args.len()).rev().find_map(|len| {
        let matches = RawArgs::command().try_get_matches_from(&args[..len]).ok()?;
        Some((len, matches))
    })?;
    trace!(prefix_len = len, "Checking options before syntax error");
    let raw = RawArgs::from_arg_matches(&matches).ok()?;
    first_stop(&raw, &matches)
}

fn first_stop(raw: &RawArgs, matches: &ArgMatches) -> Option<Stop> {
    let positions = |id: &str| -> Vec<usize> {
        matches
            .indices_of(id)
            .map(|indices| indices.collect())
            .unwrap_or_default()
    };
    let at = |indices: &[usize], n: usize| indices.get(n).copied().unwrap_or(0);
    let mut stops: Vec<(usize, Stop)> = Vec::new();

    if raw.help {
        stops.push((at(&positions("help"), 0), Stop::Help));
    }
    if raw.version {
        stops.push((at(&positions("version"), 0), Stop::Version));
    }

    let indices = positions("width");
    for (n, width) in raw.width.iter().enumerate().filter(|(_, w)| **w <= 0) {
        stops.push((at(&indices, n), Stop::Reject(OptionsError::invalid_width(*width))));
    }
    let indices = positions("height");
    for (n, height) in raw.height.iter().enumerate().filter(|(_, h)| **h <= 0) {
        stops.push((at(&indices, n), Stop::Reject(OptionsError::invalid_height(*height))));
    }
    let indices = positions("charset");
    for (n, glyphs) in raw.charset.iter().enumerate() {
        if let Err(err) = Charset::new(glyphs) {
            stops.push((at(&indices, n), Stop::Reject(err)));
        }
    }

    stops.sort_by_key(|(index, _)| *index);
    stops.into_iter().next().map(|(_, stop)| stop)
}

/// Positive dimension as `NonZeroU32`, saturating values past `u32::MAX`
fn dimension(value: i64) -> Option<NonZeroU32> {
    let clamped = u32::try_from(value).unwrap_or(u32::MAX);
    NonZeroU32::new(clamped)
}

fn build_configuration(raw: RawArgs) -> Result<Configuration, OptionsError> {
    if raw.html && raw.pixel {
        return Err(OptionsError::IncompatibleModes);
    }

    let given = raw.files.len();
    let mut files = raw.files.into_iter();
    let source_path = match (files.next(), files.next()) {
        (Some(source), None) => source,
        _ => return Err(OptionsError::WrongArgumentCount { given }),
    };
    if source_path.as_os_str().is_empty() {
        return Err(OptionsError::EmptySourcePath);
    }

    let mut config = Configuration::with_source(source_path);
    config.html_output = raw.html;
    config.pixel_mode = raw.pixel;
    config.invert = raw.invert;
    config.center = raw.center;
    config.grayscale = raw.grayscale;
    config.transparent = raw.transparent;
    config.width = raw.width.last().copied().and_then(dimension);
    config.height = raw.height.last().copied().and_then(dimension);

    if let Some(glyphs) = raw.charset.last() {
        config.charset = Charset::new(glyphs)?;
        trace!(charset = glyphs.as_str(), "Custom charset");
    } else {
        trace!("Using default charset");
    }
    if let Some(threshold) = raw.transparency_threshold {
        config.transparency_threshold = threshold;
    }
    if let Some(red) = raw.red_weight {
        config.weights.red = red;
    }
    if let Some(green) = raw.green_weight {
        config.weights.green = green;
    }
    if let Some(blue) = raw.blue_weight {
        config.weights.blue = blue;
    }

    Ok(config)
}

/// Long options that `--prefix` abbreviates, when there is more than one
fn ambiguous_candidates(option: &str) -> Option<Vec<String>> {
    let name = option.strip_prefix("--")?;
    let name = name.split('=').next().unwrap_or(name);
    if name.is_empty() {
        return None;
    }

    let command = RawArgs::command();
    let candidates: Vec<String> = command
        .get_arguments()
        .filter_map(|arg| arg.get_long())
        .filter(|long| long.starts_with(name))
        .map(|long| format!("--{}", long))
        .collect();
    (candidates.len() > 1).then_some(candidates)
}

fn from_clap_error(err: clap::Error) -> OptionsError {
    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.clone()),
        _ => None,
    };

    match (err.kind(), invalid_arg) {
        (ErrorKind::UnknownArgument, Some(arg)) => match ambiguous_candidates(&arg) {
            Some(candidates) => {
                let option = arg.split('=').next().unwrap_or(&arg).to_string();
                OptionsError::ambiguous(option, candidates)
            }
            None => OptionsError::unrecognized(arg),
        },
        (ErrorKind::InvalidValue, Some(arg)) => {
            // clap renders the argument as `--width <N>`
            let option = arg.split_whitespace().next().unwrap_or(&arg).to_string();
            OptionsError::missing_value(option)
        }
        _ => {
            let rendered = err.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ")
                .to_string();
            OptionsError::InvalidUsage { message }
        }
    }
}

//! Flag table for the `im2a` command line
//!
//! `clap` handles the getopt-style syntax: bundled short flags, `--opt=value`
//! and `--opt value`, unambiguous long prefixes, and `--`. Help and version are
//! ordinary flags here so the parser decides when they take effect.
//!
//! Validated options keep every occurrence so each one can be checked where it
//! appears; the parser takes the last.

use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};

use super::numeric::{parse_float, parse_int};

pub(crate) const COMMON_HEADING: &str = "Common options";
pub(crate) const SPECIFIC_HEADING: &str = "Specific options";

#[derive(Parser, Debug)]
#[command(name = "im2a")]
#[command(about = "Convert image files to ASCII art")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true, infer_long_args = true)]
pub(crate) struct RawArgs {
    /// Prints this message
    #[arg(short = 'h', long, help_heading = COMMON_HEADING)]
    pub help: bool,

    /// Prints version string
    #[arg(short = 'v', long, help_heading = COMMON_HEADING)]
    pub version: bool,

    /// Output HTML
    #[arg(short = 'm', long, help_heading = SPECIFIC_HEADING)]
    pub html: bool,

    /// Invert the image
    #[arg(short = 'i', long, help_heading = SPECIFIC_HEADING)]
    pub invert: bool,

    /// Center the image
    #[arg(short = 't', long, help_heading = SPECIFIC_HEADING)]
    pub center: bool,

    /// Pixel mode
    #[arg(short = 'p', long, help_heading = SPECIFIC_HEADING)]
    pub pixel: bool,

    /// Set output width
    #[arg(
        short = 'W',
        long,
        value_name = "N",
        allow_hyphen_values = true,
        action = ArgAction::Append,
        value_parser = parse_int,
        help_heading = SPECIFIC_HEADING
    )]
    pub width: Vec<i64>,

    /// Set output height
    #[arg(
        short = 'H',
        long,
        value_name = "M",
        allow_hyphen_values = true,
        action = ArgAction::Append,
        value_parser = parse_int,
        help_heading = SPECIFIC_HEADING
    )]
    pub height: Vec<i64>,

    /// Set output charset
    #[arg(
        short = 'c',
        long,
        value_name = "CHARSET",
        allow_hyphen_values = true,
        action = ArgAction::Append,
        help_heading = SPECIFIC_HEADING
    )]
    pub charset: Vec<String>,

    /// Grayscale output instead of 256-color
    #[arg(short = 'g', long, help_heading = SPECIFIC_HEADING)]
    pub grayscale: bool,

    /// Enable transparency
    #[arg(short = 'T', long, help_heading = SPECIFIC_HEADING)]
    pub transparent: bool,

    /// Set transparency threshold (default: 1.0)
    #[arg(
        short = 'X',
        long,
        value_name = "X",
        allow_hyphen_values = true,
        value_parser = parse_float,
        help_heading = SPECIFIC_HEADING
    )]
    pub transparency_threshold: Option<f64>,

    /// Set red component weight (default: 0.2989)
    #[arg(
        short = 'R',
        long,
        value_name = "RW",
        allow_hyphen_values = true,
        value_parser = parse_float,
        help_heading = SPECIFIC_HEADING
    )]
    pub red_weight: Option<f64>,

    /// Set green component weight (default: 0.5866)
    #[arg(
        short = 'G',
        long,
        value_name = "GW",
        allow_hyphen_values = true,
        value_parser = parse_float,
        help_heading = SPECIFIC_HEADING
    )]
    pub green_weight: Option<f64>,

    /// Set blue component weight (default: 0.1145)
    #[arg(
        short = 'B',
        long,
        value_name = "BW",
        allow_hyphen_values = true,
        value_parser = parse_float,
        help_heading = SPECIFIC_HEADING
    )]
    pub blue_weight: Option<f64>,

    /// Image file to convert
    #[arg(value_name = "FILE", value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub files: Vec<PathBuf>,
}

//! Usage text
//!
//! Option lines are generated from the flag table in [`super::args`], so the
//! text can never drift from what the parser accepts.

use clap::{Arg, CommandFactory};

use super::args::{RawArgs, COMMON_HEADING, SPECIFIC_HEADING};
use crate::{BUGREPORT_URL, HOMEPAGE_URL, PROJECT_NAME, VERSION};

/// Column at which option descriptions start
const DESCRIPTION_COLUMN: usize = 36;

fn flag_column(arg: &Arg) -> String {
    let short = arg.get_short().map(|short| format!("-{}, ", short));
    let long = arg.get_long().map(|long| format!("--{}", long));
    let value = arg
        .get_value_names()
        .and_then(|names| names.first())
        .map(|name| format!("={}", name));
    format!(
        "  {}{}{}",
        short.unwrap_or_default(),
        long.unwrap_or_default(),
        value.unwrap_or_default()
    )
}

fn option_section(heading: &str) -> String {
    let command = RawArgs::command();
    let lines: String = command
        .get_arguments()
        .filter(|arg| !arg.is_positional() && arg.get_help_heading() == Some(heading))
        .map(|arg| {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            format!("{:<width$}{}\n", flag_column(arg), help, width = DESCRIPTION_COLUMN)
        })
        .collect();
    format!("{}:\n{}\n", heading, lines)
}

/// Full usage message for the given program name
pub fn usage(program: &str) -> String {
    let mut out = format!(
        "{} {}\n\nConvert image files to ASCII art\n\nUsage:\n  {} [options] <file>\n\n",
        PROJECT_NAME, VERSION, program
    );
    out.push_str(&option_section(COMMON_HEADING));
    out.push_str(&option_section(SPECIFIC_HEADING));
    out.push_str(&format!("Project homepage: {}\n", HOMEPAGE_URL));
    out.push_str(&format!("Report bugs to: {}\n", BUGREPORT_URL));
    out
}

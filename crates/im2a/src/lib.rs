//! im2a - Convert image files to ASCII art
//!
//! This crate holds the command-line layer of im2a: the render
//! [`Configuration`] and the option parser that builds it. The rendering core
//! consumes the configuration through its read-only accessors.
//!
//! # Quick Start
//!
//! ```rust
//! use im2a::{parse, ParseOutcome};
//!
//! match parse(["im2a", "--html", "--width=120", "photo.jpg"]) {
//!     Ok(ParseOutcome::Run(config)) => {
//!         assert!(config.html_output());
//!         assert_eq!(config.width(), Some(120));
//!     }
//!     Ok(ParseOutcome::Help) | Ok(ParseOutcome::Version) => unreachable!(),
//!     Err(err) => panic!("{}", err),
//! }
//! ```
//!
//! Errors never terminate the process from inside the library. A binary prints
//! the diagnostic followed by [`usage`] and exits with
//! [`OptionsError::exit_code`].

pub mod core;
pub mod options;

pub use self::core::*;
pub use self::options::{parse, program_name, usage, ParseOutcome};

/// Project name shown in the usage banner
pub const PROJECT_NAME: &str = "im2a";

/// Version string printed by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project homepage shown at the end of the usage text
pub const HOMEPAGE_URL: &str = env!("CARGO_PKG_HOMEPAGE");

/// Where to report bugs
pub const BUGREPORT_URL: &str = concat!(env!("CARGO_PKG_REPOSITORY"), "/issues");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Charset, Configuration, LumaWeights, OptionsError};
    pub use crate::options::{parse, usage, ParseOutcome};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reexport() {
        let outcome = parse(["im2a", "cat.png"]).unwrap();
        assert!(matches!(outcome, ParseOutcome::Run(_)));
    }

    #[test]
    fn test_bugreport_url_points_at_issues() {
        assert!(BUGREPORT_URL.starts_with(HOMEPAGE_URL));
        assert!(BUGREPORT_URL.ends_with("/issues"));
    }

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

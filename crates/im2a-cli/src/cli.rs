//! Command-line interface for the im2a utility
//!
//! Runs the option parser and turns its outcome into process output and an
//! exit code. On success the resolved configuration is written to standard
//! output as JSON for the rendering core to pick up.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, info};

use im2a::{parse, program_name, usage, Configuration, OptionsError, ParseOutcome, VERSION};

/// Exit code for help, version, and successful parses
pub const EXIT_SUCCESS: i32 = 0;

/// Main CLI application
pub struct Im2aApp {
    program: String,
}

impl Im2aApp {
    /// Create an application whose diagnostics are prefixed with `argv[0]`
    pub fn new(args: &[OsString]) -> Self {
        Self {
            program: program_name(args.first()),
        }
    }

    /// Name used to prefix diagnostics and in the usage line
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the application, returning the process exit code
    ///
    /// Only failures to write output are reported as `Err`; rejected
    /// arguments produce a diagnostic on `stderr` and a non-zero code.
    pub fn run<O, E>(&self, args: Vec<OsString>, stdout: &mut O, stderr: &mut E) -> Result<i32>
    where
        O: Write,
        E: Write,
    {
        match parse(args) {
            Ok(ParseOutcome::Help) => {
                stdout
                    .write_all(usage(&self.program).as_bytes())
                    .context("Failed to write usage")?;
                Ok(EXIT_SUCCESS)
            }
            Ok(ParseOutcome::Version) => {
                writeln!(stdout, "{}", VERSION).context("Failed to write version")?;
                Ok(EXIT_SUCCESS)
            }
            Ok(ParseOutcome::Run(config)) => {
                self.emit_configuration(&config, stdout)?;
                Ok(EXIT_SUCCESS)
            }
            Err(err) => self.reject(&err, stderr),
        }
    }

    fn emit_configuration<O: Write>(&self, config: &Configuration, stdout: &mut O) -> Result<()> {
        info!(source = %config.source_path().display(), "Configuration ready");
        let document =
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
        writeln!(stdout, "{}", document).context("Failed to write configuration")?;
        stdout.flush()?;
        Ok(())
    }

    fn reject<E: Write>(&self, err: &OptionsError, stderr: &mut E) -> Result<i32> {
        debug!(error = %err, code = err.exit_code(), "Exiting with usage");
        writeln!(stderr, "{}: {}", self.program, err).context("Failed to write diagnostic")?;
        writeln!(stderr)?;
        stderr
            .write_all(usage(&self.program).as_bytes())
            .context("Failed to write usage")?;
        Ok(err.exit_code())
    }
}

//! im2a CLI - Convert image files to ASCII art

mod cli;

use im2a::core::logging::init_logging;
use std::ffi::OsString;
use std::io;

fn main() {
    // Environment variables pick level and format; see `init_logging`
    if let Err(e) = init_logging(None, None) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let args: Vec<OsString> = std::env::args_os().collect();
    let app = cli::Im2aApp::new(&args);

    let code = match app.run(args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", app.program(), e);
            1
        }
    };
    std::process::exit(code);
}

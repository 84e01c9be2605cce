//! yaslc-drv - Driver for the YASL front end.
//!
//! The driver wires the pieces together: it loads a source file, runs the
//! scanner over it, prints one token per line to stdout, and reports every
//! collected diagnostic on stderr. Later compilation phases will slot in
//! behind the scanner; for now the token dump is the program's output.

use anyhow::{bail, Result};
use std::path::PathBuf;
use yaslc_lex::{Scanner, SourceFile};
use yaslc_util::{Diagnostic, Handler};

/// Configuration for a driver run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The source file to scan.
    pub input: Option<PathBuf>,
    /// Print progress information to stderr.
    pub verbose: bool,
    /// Print usage and exit.
    pub help: bool,
    /// Print version and exit.
    pub version: bool,
}

/// Parse command line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                config.help = true;
                return Ok(config);
            },
            "--version" | "-V" => {
                config.version = true;
                return Ok(config);
            },
            "--verbose" | "-v" => config.verbose = true,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            },
            _ => {
                if config.input.is_some() {
                    return Err("multiple input files given".to_string());
                }
                config.input = Some(PathBuf::from(arg));
            },
        }
    }

    Ok(config)
}

/// Print usage information.
pub fn print_help() {
    println!("YASL front end v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: yaslc [OPTIONS] <input file>");
    println!();
    println!("Scans the input and prints its token stream, one token per line.");
    println!();
    println!("Options:");
    println!("  -h, --help       Print this help message");
    println!("  -V, --version    Print version information");
    println!("  -v, --verbose    Print progress information to stderr");
}

/// Print version information.
pub fn print_version() {
    println!("yaslc {}", env!("CARGO_PKG_VERSION"));
}

/// Run the driver with the given configuration.
///
/// Returns an error (and thus a nonzero exit status) when the input cannot
/// be read, when scanning aborts fatally, or when any recoverable lexical
/// error was reported along the way.
pub fn run(config: &Config) -> Result<()> {
    if config.help {
        print_help();
        return Ok(());
    }
    if config.version {
        print_version();
        return Ok(());
    }

    let Some(path) = config.input.as_ref() else {
        bail!("no input file given (try --help)");
    };

    let source = SourceFile::open(path)?;
    if config.verbose {
        eprintln!("scanning {}", source.name());
    }

    let handler = Handler::new();
    let mut scanner = Scanner::new(source.text(), &handler);

    let mut token_count = 0usize;
    let fatal = loop {
        match scanner.next_token() {
            Ok(token) => {
                println!("{}", token);
                if token.is_eof() {
                    break None;
                }
                token_count += 1;
            },
            Err(err) => break Some(err),
        }
    };

    for diag in handler.diagnostics() {
        print_diagnostic(&diag);
    }
    if config.verbose {
        eprintln!("{} token(s)", token_count);
    }

    if let Some(err) = fatal {
        return Err(err.into());
    }
    if handler.has_errors() {
        bail!("{} lexical error(s)", handler.error_count());
    }
    Ok(())
}

fn print_diagnostic(diag: &Diagnostic) {
    eprintln!("{}", diag);
    for note in &diag.notes {
        eprintln!("  note: {}", note);
    }
    for help in &diag.helps {
        eprintln!("  help: {}", help);
    }
}

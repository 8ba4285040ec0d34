//! Command-line interface for docstrip
//! This binary cleans and inspects documentation files that contain Python
//! interactive-session transcripts.
//!
//! Usage:
//!   docstrip strip `<path>`                      - Print the cleaned rendition of a file
//!   docstrip blocks `<path>` [--format <format>] - Report discovered transcript blocks
//!   docstrip view `<path>`                       - Open an interactive TUI viewer
mod viewer;

use clap::{Arg, Command};
use docstrip::transcript::process::{blocks_report, strip_file, OutputFormat};
use std::path::PathBuf;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("docstrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for cleaning and viewing interactive-session transcripts in docs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("strip")
                .about("Print the cleaned rendition of a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown or transcript file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("blocks")
                .about("Report the transcript blocks found in a file")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text' or 'json')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("view")
                .about("Open an interactive TUI viewer with prompt toggling")
                .arg(
                    Arg::new("path")
                        .help("Path to the markdown file to view")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("strip", strip_matches)) => {
            let path = strip_matches.get_one::<String>("path").unwrap();
            handle_strip_command(path);
        }
        Some(("blocks", blocks_matches)) => {
            let path = blocks_matches.get_one::<String>("path").unwrap();
            let format = blocks_matches.get_one::<String>("format").unwrap();
            handle_blocks_command(path, format);
        }
        Some(("view", view_matches)) => {
            let path = view_matches.get_one::<String>("path").unwrap();
            handle_view_command(path);
        }
        _ => unreachable!(),
    }
}

/// Handle the strip command
fn handle_strip_command(path: &str) {
    let output = strip_file(path).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

/// Handle the blocks command
fn handle_blocks_command(path: &str, format: &str) {
    let format = OutputFormat::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let output = blocks_report(path, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", output);
}

/// Handle the view command
fn handle_view_command(path: &str) {
    let file_path = PathBuf::from(path);
    match viewer::viewer_main::run_viewer(file_path) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

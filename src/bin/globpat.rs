//! Command-line interface for globpat
//! This binary parses extended glob patterns and tests candidate strings
//! against them.
//!
//! Usage:
//!   globpat parse `<pattern>` [--format `<format>`]          - Parse a pattern and print its AST
//!   globpat match `<pattern>` `<candidate>` [--mode `<mode>`]  - Test a candidate against a pattern

use clap::{Arg, Command};
use std::str::FromStr;

use globpat::glob::formats;
use globpat::glob::{parse, Mode, Pattern};

fn main() {
    let matches = Command::new("globpat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and matching extended glob patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a pattern and print its AST")
                .arg(
                    Arg::new("pattern")
                        .help("The glob pattern to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'tree', 'json')")
                        .default_value("tree"),
                ),
        )
        .subcommand(
            Command::new("match")
                .about("Test a candidate string against a pattern")
                .arg(
                    Arg::new("pattern")
                        .help("The glob pattern to match with")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("candidate")
                        .help("The string to test")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .help("Pattern dialect ('strict', 'grouping', 'editorconfig')")
                        .default_value("strict"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let pattern = parse_matches.get_one::<String>("pattern").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(pattern, format);
        }
        Some(("match", match_matches)) => {
            let pattern = match_matches.get_one::<String>("pattern").unwrap();
            let candidate = match_matches.get_one::<String>("candidate").unwrap();
            let mode = match_matches.get_one::<String>("mode").unwrap();
            handle_match_command(pattern, candidate, mode);
        }
        _ => unreachable!(),
    }
}

/// Handle the parse command
fn handle_parse_command(pattern: &str, format: &str) {
    let nodes = match parse(pattern) {
        Ok(nodes) => nodes,
        Err(error) => {
            eprintln!("Error parsing pattern: {error}");
            std::process::exit(1);
        }
    };

    match format {
        "tree" => print!("{}", formats::to_tree_str(&nodes)),
        "json" => match formats::to_json_str(&nodes) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("Error serializing AST: {error}");
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("Unknown format '{other}' (expected 'tree' or 'json')");
            std::process::exit(1);
        }
    }
}

/// Handle the match command
fn handle_match_command(pattern: &str, candidate: &str, mode: &str) {
    let mode = match Mode::from_str(mode) {
        Ok(mode) => mode,
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    };

    let pattern = match Pattern::new(pattern, mode) {
        Ok(pattern) => pattern,
        Err(error) => {
            eprintln!("Error parsing pattern: {error}");
            std::process::exit(1);
        }
    };

    if pattern.matches(candidate) {
        println!("match");
    } else {
        println!("no match");
        std::process::exit(1);
    }
}

//! # wordhist
//!
//! A CLI tool that renders a word-frequency histogram of a text as an aligned
//! bar chart.
//!
//! ## Overview
//!
//! wordhist is built on top of wordhistlib. It reads one text source, counts
//! its words, and writes one report, most frequent word first:
//!
//! ```text
//!     the | ==== (4)
//!   clock | == (2)
//! dickory | == (2)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Read input.txt, write output.txt
//! wordhist
//!
//! # Explicit paths; `-` means stdin / stdout
//! wordhist poem.txt -o -
//!
//! # Split on word characters instead of stripping punctuation
//! wordhist poem.txt --tokenizer word
//!
//! # Top ten words as JSON
//! wordhist poem.txt -o - --top 10 --format json
//! ```

mod logging;

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Style;
use log::info;
use wordhistlib::{generate, Destination, HistogramOptions, ReportFormat, Source, TokenizerKind};

/// Conventional input file when no path is given
const DEFAULT_INPUT: &str = "input.txt";

/// Conventional output file when no path is given
const DEFAULT_OUTPUT: &str = "output.txt";

/// Path argument standing for stdin or stdout
const STDIO_PATH: &str = "-";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("wordhist")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Word-frequency histogram rendered as an aligned bar chart")
        .arg(
            Arg::new("input")
                .help("Text file to analyze ('-' for stdin)")
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value(DEFAULT_OUTPUT)
                .help("Report destination ('-' for stdout)"),
        )
        .arg(
            Arg::new("tokenizer")
                .short('t')
                .long("tokenizer")
                .value_parser(["strip", "word"])
                .default_value("strip")
                .help("Tokenizer: strip punctuation from word ends, or split on word characters"),
        )
        .arg(
            Arg::new("marker")
                .short('m')
                .long("marker")
                .default_value("=")
                .help("Character used to draw the bars"),
        )
        .arg(
            Arg::new("top")
                .short('n')
                .long("top")
                .value_parser(value_parser!(usize))
                .help("Only report the N most frequent words"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Report format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more detail to stderr (repeat for more)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Disable all logging"),
        )
}

/// Parse the marker argument, which must be exactly one character
fn parse_marker(value: &str) -> Result<char, anyhow::Error> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("marker must be a single character, got '{}'", value),
    }
}

/// Build histogram options from matches
fn build_options(matches: &ArgMatches) -> Result<HistogramOptions, anyhow::Error> {
    let tokenizer: TokenizerKind = matches
        .get_one::<String>("tokenizer")
        .map(|s| s.as_str())
        .unwrap_or("strip")
        .parse()?;
    let format: ReportFormat = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("text")
        .parse()?;
    let marker = match matches.get_one::<String>("marker") {
        Some(value) => parse_marker(value)?,
        None => wordhistlib::DEFAULT_MARKER,
    };

    let mut options = HistogramOptions::new()
        .tokenizer(tokenizer)
        .format(format)
        .marker(marker);
    if let Some(top) = matches.get_one::<usize>("top") {
        options = options.limit(*top);
    }
    Ok(options)
}

fn source_from(path: &str) -> Source {
    if path == STDIO_PATH {
        Source::Stdin
    } else {
        Source::file(path)
    }
}

fn destination_from(path: &str) -> Destination {
    if path == STDIO_PATH {
        Destination::Stdout
    } else {
        Destination::file(path)
    }
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let options = build_options(matches)?;
    let source = source_from(
        matches
            .get_one::<String>("input")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_INPUT),
    );
    let destination = destination_from(
        matches
            .get_one::<String>("output")
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_OUTPUT),
    );

    let histogram = generate(&source, &destination, &options)
        .with_context(|| format!("could not build histogram of {}", source))?;

    info!(
        "{} words, {} distinct, {} tokenizer",
        histogram.total_tokens, histogram.distinct_words, options.tokenizer
    );
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    logging::initialize(logging::level_from_flags(
        matches.get_count("verbose"),
        matches.get_flag("quiet"),
    ));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let prefix = Style::new().red().bold().for_stderr().apply_to("Error:");
            eprintln!("{prefix} {e:#}");
            ExitCode::FAILURE
        }
    }
}

//! cat implementation in Rust
//!
//! Concatenate files and print on the standard output, with optional line
//! numbering, end-of-line markers, and blank-line squashing.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufWriter};
use std::process;

use mycat::{
    cat,
    error::{CatError, CatResult},
    options::CatOptions,
    sources, EXIT_SUCCESS,
};

/// The four recognized flag letters: number-all, number-nonblank,
/// show-end-marker, squash-blank.
const FLAG_LETTERS: [char; 4] = ['n', 'b', 'e', 'h'];

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("mycat: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> CatResult<i32> {
    let args: Vec<String> = std::env::args().collect();

    // Informational keywords in subcommand position bypass all processing
    match args.get(1).map(String::as_str) {
        Some("help") => {
            build_cli().print_help()?;
            return Ok(EXIT_SUCCESS);
        }
        Some("version") => {
            print!("{}", build_cli().render_version());
            return Ok(EXIT_SUCCESS);
        }
        _ => {}
    }

    // Reject unknown flag letters before any I/O happens
    validate_flag_tokens(&args[1..])?;

    let matches = build_cli().get_matches_from(&args);

    // Build the option set from command line arguments
    let options = options_from_matches(&matches);

    // Get input files
    let files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();
    let inputs = sources::resolve(&files);

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    // Execute the concatenation
    cat(&options, &inputs, &mut out)
}

fn build_cli() -> Command {
    Command::new("mycat")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("mycat [OPTION]... [FILE]...")
        .about("Concatenate FILE(s) to standard output")
        .long_about(
            "Concatenate FILE(s) to standard output.\n\n\
             With no FILE, or when FILE is -, read standard input.\n\n\
             Run 'mycat help' for this message or 'mycat version' for the version string.",
        )
        .disable_help_flag(true) // We use -h for squeeze-blank
        .disable_version_flag(true)
        // Input files
        .arg(
            Arg::new("files")
                .help("Input files to concatenate (use '-' or omit for stdin)")
                .num_args(0..)
                .value_name("FILE"),
        )
        // Formatting flags; Count so repeated letters stay legal
        .arg(
            Arg::new("number")
                .short('n')
                .help("Number all output lines")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("number-nonblank")
                .short('b')
                .help("Number nonempty output lines")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("show-ends")
                .short('e')
                .help("Display $ at the end of each line")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("squeeze-blank")
                .short('h')
                .help("Suppress repeated empty output lines")
                .action(ArgAction::Count),
        )
}

/// Scan every option-group token for letters outside the recognized set.
///
/// A token consisting of just the introducer denotes standard input, not a
/// flag group, and is skipped; everything else starting with the introducer
/// must spell only recognized letters. Only the first offending character is
/// reported.
fn validate_flag_tokens(args: &[String]) -> CatResult<()> {
    for token in args {
        if !token.starts_with('-') || token.as_str() == "-" {
            continue;
        }
        if let Some(bad) = token.chars().skip(1).find(|c| !FLAG_LETTERS.contains(c)) {
            return Err(CatError::invalid_flag(bad));
        }
    }
    Ok(())
}

/// Fold the parsed matches into one immutable option set
fn options_from_matches(matches: &ArgMatches) -> CatOptions {
    CatOptions::new()
        .with_number_all(matches.get_count("number") > 0)
        .with_number_nonblank(matches.get_count("number-nonblank") > 0)
        .with_show_end(matches.get_count("show-ends") > 0)
        .with_squash_blank(matches.get_count("squeeze-blank") > 0)
}

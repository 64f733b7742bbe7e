use std::{fs, process};

use clap::Parser;
use log::LevelFilter;
use stackcalc::{calc, error::CalcError};

/// stackcalc evaluates an arithmetic expression such as `(2 + 3) * 4` and
/// prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file with one expression per line. Blank lines
    /// and lines starting with `#` are skipped.
    #[arg(short, long)]
    file: bool,

    /// Log every token and every applied operator to standard error.
    /// `RUST_LOG` can be used instead for finer control.
    #[arg(short, long)]
    verbose: bool,

    /// The expression to evaluate, or a path when `--file` is given. Quote
    /// expressions that contain spaces or `*`.
    #[arg(allow_hyphen_values = true)]
    contents: String,
}

/// Renders an error, pointing at the offending character when the position
/// is known.
fn render_error(expression: &str, error: &CalcError) -> String {
    match error.position() {
        Some(position) => format!("{expression}\n{:>width$}\n{error}", "^", width = position + 1),
        None => error.to_string(),
    }
}

/// Evaluates one expression, printing the value or the rendered error.
/// Returns whether the evaluation succeeded.
fn run(expression: &str) -> bool {
    match calc(expression) {
        Ok(value) => {
            println!("{value}");
            true
        },
        Err(e) => {
            eprintln!("{}", render_error(expression, &e));
            false
        },
    }
}

fn main() {
    let args = Args::parse();

    // `RUST_LOG` still takes precedence over the flag.
    env_logger::Builder::new().filter_level(if args.verbose {
                                                LevelFilter::Trace
                                            } else {
                                                LevelFilter::Warn
                                            })
                              .parse_default_env()
                              .format_timestamp(None)
                              .init();

    let ok = if args.file {
        let script = fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                         eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                   &args.contents);
                         process::exit(1);
                     });

        script.lines()
              .map(str::trim)
              .filter(|line| !line.is_empty() && !line.starts_with('#'))
              .fold(true, |ok, line| run(line) && ok)
    } else {
        run(&args.contents)
    };

    if !ok {
        process::exit(1);
    }
}

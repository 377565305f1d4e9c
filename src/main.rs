use std::{fs, process::ExitCode};

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use yardcalc::{Evaluator, STANDARD_FUNCTIONS, interpreter::token::render};

/// yardcalc evaluates arithmetic expressions such as `2 + 3 * sin(30)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells yardcalc to read expressions from a file, one per line, instead
    /// of taking a single expression.
    #[arg(short, long)]
    file: bool,

    /// Prints the postfix form of each expression before its result.
    #[arg(short, long)]
    postfix: bool,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let evaluator = Evaluator::new(&STANDARD_FUNCTIONS);
    let mut failures = 0_usize;

    for expression in script.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if args.postfix {
            match evaluator.postfix(expression) {
                Ok(postfix) => println!("{}", render(&postfix)),
                Err(e) => {
                    debug!(expression, "parsing failed");
                    eprintln!("{e}");
                    failures += 1;
                    continue;
                },
            }
        }

        match evaluator.evaluate(expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                debug!(expression, kind = ?e.kind(), "evaluation failed");
                eprintln!("{e}");
                failures += 1;
            },
        }
    }

    info!(failures, "done");
    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

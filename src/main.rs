use std::fs;

use clap::{ArgAction, Parser};
use squiggle_scalar::get_result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// squiggle evaluates the scalar core of the Squiggle expression language:
/// numbers, variables, arithmetic and builtin math functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells squiggle to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Increases log verbosity (`-v` for debug, `-vv` for trace). `RUST_LOG`
    /// takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

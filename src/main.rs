use std::{fs, io};

use clap::{ArgAction, Parser};
use tracing::{Level, debug};

/// dragon runs programs written in a small block-structured imperative
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as program text instead of a path to a source file.
    #[arg(short, long)]
    script: bool,

    /// Increase log output on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = if args.script {
        args.contents
    } else {
        debug!(path = %args.contents, "reading source file");
        fs::read_to_string(&args.contents).unwrap_or_else(|e| {
            eprintln!("Failed to read the input file '{}': {e}", &args.contents);
            std::process::exit(1);
        })
    };

    if let Err(e) = dragon::run(&source, io::stdout().lock()) {
        debug!(kind = %e.kind(), "run aborted");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use strings_sort_cli::{SortCommand, run_sort_command};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sort the entries of Android strings.xml files by name, in place.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files or glob patterns to sort, e.g. `res/values*/strings.xml`
    files: Vec<String>,

    /// Read the file list from a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Continue with the remaining files after a failure
    #[arg(long)]
    keep_going: bool,

    /// Do not write; list files that are not sorted and exit non-zero if any
    #[arg(long)]
    check: bool,
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let command = SortCommand {
        inputs: args.files,
        config: args.config,
        keep_going: args.keep_going,
        check: args.check,
    };

    match run_sort_command(command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

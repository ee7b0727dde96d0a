use std::{fs::File, io, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env, Target};
use log::{error, info};
use rayon::ThreadPoolBuilder;
use repagree::{
    cli::Cli,
    error::{RepagreeError, EXIT_FILE_IO_ERROR},
    io::{self as repagree_io, points},
};

const PROGRAM_NAME: &str = "repagree";

fn main() -> ExitCode {
    // parse command line and validate inputs where possible
    let config = Cli::parse();

    if let Err(e) = init_logging(config.log.as_deref()) {
        eprintln!("{PROGRAM_NAME} ERROR: {e:#}, exiting");
        return ExitCode::from(EXIT_FILE_IO_ERROR);
    }

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{PROGRAM_NAME} ERROR: {e:#}, exiting");
            e.downcast_ref::<RepagreeError>()
                .map_or(ExitCode::from(EXIT_FILE_IO_ERROR), RepagreeError::exit_code)
        }
    }
}

fn try_main(config: &Cli) -> Result<()> {
    let dataset =
        repagree_io::load_dataset(&config.cnv_file, config.reference_sample.as_deref())?;

    ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build_global()?;

    let points = repagree::run(&dataset, config.overlap, config.steps)?;

    let stdout = io::stdout();
    points::write_points(&mut stdout.lock(), &points, config.format)?;
    info!("Finished");

    Ok(())
}

/// Without a log file, log to stderr at the level set by `RUST_LOG` ('info' by default).
/// With a log file, write everything from 'debug' up to it, truncating old content.
fn init_logging(log_file: Option<&str>) -> Result<()> {
    match log_file {
        None => {
            Builder::from_env(Env::default().default_filter_or("info")).init();
        }
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Could not create log file {path}"))?;
            Builder::from_env(Env::default().default_filter_or("debug"))
                .target(Target::Pipe(Box::new(file)))
                .format_timestamp_secs()
                .init();
            info!("program started");
            info!(
                "command line: {}",
                std::env::args().collect::<Vec<_>>().join(" ")
            );
        }
    }
    Ok(())
}

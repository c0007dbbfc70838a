// logtriage - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Dispatch to the triage pipeline

use clap::{Parser, Subcommand};
use logtriage::app::pipeline;
use logtriage::app::sink::{ConsoleSink, LineSink};
use logtriage::core::report;
use logtriage::util::{constants, epoch, logging};
use std::path::PathBuf;

/// logtriage - Field extraction and failure-line triage for
/// line-oriented application logs.
///
/// Point logtriage at a log file to count addresses, request verbs, and
/// status codes, or to separate failure-indicating error/warning lines
/// into categorised output files.
#[derive(Parser, Debug)]
#[command(name = "logtriage", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count address, verb, and status-code occurrences in a log file.
    Extract {
        /// Log file to scan.
        file: PathBuf,

        /// Emit the report as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Bucket failure-indicating error/warning lines from a log file.
    Classify {
        /// Log file to scan.
        file: PathBuf,

        /// Directory for the bucket output files
        /// (defaults to the source file's directory).
        #[arg(short = 'o', long = "out-dir")]
        out_dir: Option<PathBuf>,

        /// Print the buckets to stdout instead of writing files.
        #[arg(long)]
        stdout: bool,
    },

    /// Convert a Unix epoch value to a UTC datetime.
    Epoch {
        /// Epoch seconds, optionally fractional; millisecond-magnitude
        /// values are scaled automatically.
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.debug);
    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "logtriage starting"
    );

    if let Err(e) = run(cli.command) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> logtriage::util::error::Result<()> {
    match command {
        Command::Extract { file, json } => {
            let result = pipeline::run_extract(&file)?;
            let stdout = std::io::stdout().lock();
            if json {
                report::render_json(&result, stdout)?;
                println!();
            } else {
                report::render_text(&result, stdout)?;
            }
        }

        Command::Classify {
            file,
            out_dir,
            stdout,
        } => {
            if stdout {
                let buckets = pipeline::run_classify_to_buckets(&file)?;
                let mut sink = ConsoleSink::new(std::io::stdout().lock());
                println!("Errors ({}):", buckets.errors.len());
                sink.accept(&buckets.errors)?;
                println!("Warnings ({}):", buckets.warnings.len());
                sink.accept(&buckets.warnings)?;
                println!("Lines processed: {}", buckets.lines_processed);
            } else {
                // Default the output directory to the source's directory,
                // matching the conventional layout of the output naming.
                let out_dir = match out_dir {
                    Some(dir) => dir,
                    None => file
                        .parent()
                        .filter(|p| !p.as_os_str().is_empty())
                        .map(PathBuf::from)
                        .unwrap_or_else(|| PathBuf::from(".")),
                };

                let outcome = pipeline::run_classify(&file, &out_dir)?;
                println!(
                    "Processed {} lines: {} errors -> {}, {} warnings -> {}",
                    outcome.lines_processed,
                    outcome.errors_written,
                    outcome.error_path.display(),
                    outcome.warnings_written,
                    outcome.warning_path.display()
                );
            }
        }

        Command::Epoch { value } => {
            let dt = epoch::epoch_to_utc(&value)?;
            println!("{}", dt.format("%Y-%m-%d %H:%M:%S%.3f UTC"));
        }
    }

    Ok(())
}

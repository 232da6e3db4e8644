//! CLI entry point for the solver.
//!
//! Usage:
//!   forty-two [FILE] [options]
//!
//! Reads one hand of four integers per line from FILE, or stdin when no
//! file is given, and answers YES (with a witness) or NO for each.
//!
//! Options:
//!   --format <text|json>         Output format (default: text)
//!   --order <unwind|normalized>  Text line order (default: unwind)
//!   --skip-malformed             Report and skip bad lines instead of stopping

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::debug;

use forty_two::{open_input, process_lines, Format, PrintOrder, RunOptions};

#[derive(Parser)]
#[command(name = "forty-two")]
#[command(about = "Decide whether four integers can make 42 with + - * applied left to right")]
#[command(version)]
struct Cli {
    /// Input file with one hand per line (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Line order of text answers
    #[arg(long, value_enum, default_value_t = PrintOrder::Unwind)]
    order: PrintOrder,

    /// Report malformed lines and keep going instead of stopping at the first
    #[arg(long)]
    skip_malformed: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Read hands
    let input = match open_input(cli.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let options = RunOptions {
        format: cli.format,
        order: cli.order,
        skip_malformed: cli.skip_malformed,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();

    match process_lines(input, &mut out, &mut err, &options) {
        Ok(summary) => debug!(
            "done: {} solved, {} unsolved, {} skipped",
            summary.solved, summary.unsolved, summary.skipped
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

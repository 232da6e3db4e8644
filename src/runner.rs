//! Line-by-line processing of an input stream.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::hand::{Hand, HandError};
use crate::output::{write_json, write_json_error, write_text, Format, PrintOrder};
use crate::solver::solve;

/// Options controlling how hands are read and answered
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub format: Format,
    pub order: PrintOrder,
    /// Report malformed lines and continue instead of stopping
    pub skip_malformed: bool,
}

/// Counts for one processed stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub solved: usize,
    pub unsolved: usize,
    pub skipped: usize,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to read file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: HandError,
    },
}

/// Open `path` for reading, or stdin when no path is given
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, RunError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| RunError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Answer every line of `input` on `out`. Skipped lines are reported on `err`
/// in text mode and as error records on `out` in JSON mode.
pub fn process_lines<R: BufRead, W: Write, E: Write>(
    input: R,
    out: &mut W,
    err: &mut E,
    options: &RunOptions,
) -> Result<RunSummary, RunError> {
    let mut summary = RunSummary::default();

    // Raw lines, so a line that is not UTF-8 goes through the malformed-line policy
    for (index, line) in input.split(b'\n').enumerate() {
        let line_number = index + 1;
        let line = line?;

        let hand = match Hand::from_bytes(&line) {
            Ok(hand) => hand,
            Err(source) => {
                let error = RunError::MalformedLine {
                    line: line_number,
                    source,
                };
                out.flush()?;
                if !options.skip_malformed {
                    return Err(error);
                }
                debug!("skipping {}", error);
                match options.format {
                    Format::Text => writeln!(err, "Error: {}", error)?,
                    Format::Json => write_json_error(out, line_number, &error.to_string())?,
                }
                summary.skipped += 1;
                continue;
            }
        };

        let result = solve(&hand);
        if result.solved {
            summary.solved += 1;
        } else {
            summary.unsolved += 1;
        }

        match options.format {
            Format::Text => write_text(out, &result, options.order)?,
            Format::Json => write_json(out, line_number, &hand, &result)?,
        }
    }

    out.flush()?;
    Ok(summary)
}

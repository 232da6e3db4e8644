//! Rendering of solver results.
//!
//! Text output answers one hand per block, ending in `YES` or `NO`. JSON
//! output writes one object per input line.

use std::io::{self, Write};

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::hand::{Hand, Operator, HAND_SIZE, STEPS};
use crate::solver::{SolverResult, Witness};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Line order of a text answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PrintOrder {
    /// Operators last to first, one per line, then the permutation, then YES
    #[default]
    Unwind,
    /// Permutation, then operators in application order, then YES
    Normalized,
}

/// JSON record for one input line
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HandOutput<'a> {
    line: usize,
    hand: &'a Hand,
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    permutation: Option<[i64; HAND_SIZE]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    positions: Option<[usize; HAND_SIZE]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operators: Option<[Operator; STEPS]>,
    combinations_tested: usize,
    branches_pruned: usize,
    time_elapsed_us: u64,
}

/// JSON record for a skipped line
#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    line: usize,
    error: &'a str,
}

/// Tuple form of a permutation, e.g. `(2, 5, 4, 3)`
pub fn format_permutation(numbers: &[i64]) -> String {
    format!("({})", numbers.iter().join(", "))
}

fn write_witness<W: Write>(out: &mut W, witness: &Witness, order: PrintOrder) -> io::Result<()> {
    match order {
        PrintOrder::Unwind => {
            for op in witness.operators.iter().rev() {
                writeln!(out, "{}", op)?;
            }
            writeln!(out, "{}", format_permutation(&witness.numbers))?;
        }
        PrintOrder::Normalized => {
            writeln!(out, "{}", format_permutation(&witness.numbers))?;
            writeln!(out, "{}", witness.operators.iter().join(" "))?;
        }
    }
    writeln!(out, "YES")
}

/// Write the text answer for one hand
pub fn write_text<W: Write>(out: &mut W, result: &SolverResult, order: PrintOrder) -> io::Result<()> {
    match &result.witness {
        Some(witness) => write_witness(out, witness, order),
        None => writeln!(out, "NO"),
    }
}

/// Write the JSON record for one hand
pub fn write_json<W: Write>(
    out: &mut W,
    line: usize,
    hand: &Hand,
    result: &SolverResult,
) -> io::Result<()> {
    let output = HandOutput {
        line,
        hand,
        solved: result.solved,
        permutation: result.witness.map(|w| w.numbers),
        positions: result.witness.map(|w| w.positions),
        operators: result.witness.map(|w| w.operators),
        combinations_tested: result.combinations_tested,
        branches_pruned: result.branches_pruned,
        time_elapsed_us: result.time_elapsed_us,
    };
    serde_json::to_writer(&mut *out, &output)?;
    writeln!(out)
}

/// Write the JSON record for a malformed line
pub fn write_json_error<W: Write>(out: &mut W, line: usize, error: &str) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &ErrorOutput { line, error })?;
    writeln!(out)
}

//! Brute-force solver for the "make 42" hand puzzle.
//!
//! Given four integers, this crate decides whether some permutation of
//! them, combined left to right with `+`, `-` and `*`, evaluates to 42,
//! and reports the first such witness in a fixed enumeration order.

pub mod executor;
pub mod hand;
pub mod output;
pub mod runner;
pub mod solver;

// Re-export main types
pub use executor::{evaluate, verify_witness};
pub use hand::{Hand, HandError, Operator, HAND_SIZE, OPERATORS, STEPS, TARGET};
pub use output::{format_permutation, write_json, write_json_error, write_text, Format, PrintOrder};
pub use runner::{open_input, process_lines, RunError, RunOptions, RunSummary};
pub use solver::{solve, SolverResult, Witness};

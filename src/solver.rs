//! Brute-force search for a witness.
//!
//! Every permutation of the hand is tried in lexicographic order of input
//! positions, and for each one every operator sequence in `OPERATORS` order,
//! using an explicit depth-first stack. The search stops at the first
//! combination that reaches the target.

use std::time::Instant;

use itertools::Itertools;
use log::{debug, trace};
use serde::Serialize;
use smallvec::SmallVec;

use crate::hand::{Hand, Operator, HAND_SIZE, OPERATORS, STEPS, TARGET};

/// A permutation and operator sequence that evaluate to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Witness {
    /// The hand's numbers in permuted order
    pub numbers: [i64; HAND_SIZE],
    /// Input position each number was taken from
    pub positions: [usize; HAND_SIZE],
    /// Operators in application order
    pub operators: [Operator; STEPS],
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Whether some combination reached the target
    pub solved: bool,
    /// First witness in enumeration order
    pub witness: Option<Witness>,
    /// Complete operator sequences evaluated
    pub combinations_tested: usize,
    /// Branches dropped because an intermediate overflowed `i128`
    pub branches_pruned: usize,
    /// Time elapsed in microseconds
    pub time_elapsed_us: u64,
}

/// A partial operator sequence applied to one permutation
#[derive(Debug, Clone)]
struct SearchFrame {
    value: i128,
    trace: SmallVec<[Operator; STEPS]>,
}

impl SearchFrame {
    fn new(first: i64) -> Self {
        Self {
            value: i128::from(first),
            trace: SmallVec::new(),
        }
    }

    fn step(&self) -> usize {
        self.trace.len()
    }

    fn child(&self, op: Operator, value: i128) -> Self {
        let mut trace = self.trace.clone();
        trace.push(op);
        Self { value, trace }
    }
}

/// Operators of a complete frame as a fixed-size sequence
fn complete_trace(trace: &[Operator]) -> Option<[Operator; STEPS]> {
    match trace {
        [a, b, c] => Some([*a, *b, *c]),
        _ => None,
    }
}

/// Search one permutation. Returns the operator sequence reaching the target, if any.
fn search_permutation(
    numbers: &[i64; HAND_SIZE],
    combinations_tested: &mut usize,
    branches_pruned: &mut usize,
) -> Option<[Operator; STEPS]> {
    let mut stack: Vec<SearchFrame> = vec![SearchFrame::new(numbers[0])];

    while let Some(frame) = stack.pop() {
        let step = frame.step();

        if step == STEPS {
            *combinations_tested += 1;
            if frame.value == TARGET {
                return complete_trace(&frame.trace);
            }
            continue;
        }

        let next = i128::from(numbers[step + 1]);

        // Pushed in reverse so they pop in declared order
        for &op in OPERATORS.iter().rev() {
            match op.apply(frame.value, next) {
                Some(value) => stack.push(frame.child(op, value)),
                None => {
                    trace!(
                        "overflow: {} {} {} at step {} of {:?}",
                        frame.value,
                        op,
                        next,
                        step,
                        numbers
                    );
                    *branches_pruned += 1;
                }
            }
        }
    }

    None
}

/// Find the first permutation and operator sequence that reach the target.
pub fn solve(hand: &Hand) -> SolverResult {
    let start_time = Instant::now();

    let mut combinations_tested: usize = 0;
    let mut branches_pruned: usize = 0;
    let mut witness = None;

    for order in (0..HAND_SIZE).permutations(HAND_SIZE) {
        let positions: [usize; HAND_SIZE] = std::array::from_fn(|i| order[i]);
        let numbers = hand.arrange(&positions);

        if let Some(operators) =
            search_permutation(&numbers, &mut combinations_tested, &mut branches_pruned)
        {
            witness = Some(Witness {
                numbers,
                positions,
                operators,
            });
            break;
        }
    }

    let result = SolverResult {
        solved: witness.is_some(),
        witness,
        combinations_tested,
        branches_pruned,
        time_elapsed_us: start_time.elapsed().as_micros() as u64,
    };

    debug!(
        "{:?}: solved={} tested={} pruned={}",
        hand.numbers(),
        result.solved,
        result.combinations_tested,
        result.branches_pruned
    );

    result
}

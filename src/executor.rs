//! Left-to-right evaluation of an arranged hand.
//!
//! No precedence and no parentheses: `a op1 b op2 c op3 d` is
//! `((a op1 b) op2 c) op3 d`.

use crate::hand::{Operator, HAND_SIZE, STEPS, TARGET};
use crate::solver::Witness;

/// Evaluate `numbers` under `operators`, or `None` if an intermediate overflows
pub fn evaluate(numbers: &[i64; HAND_SIZE], operators: &[Operator; STEPS]) -> Option<i128> {
    let mut value = i128::from(numbers[0]);
    for (op, &next) in operators.iter().zip(&numbers[1..]) {
        value = op.apply(value, i128::from(next))?;
    }
    Some(value)
}

/// Replay a witness and check it reaches the target
pub fn verify_witness(witness: &Witness) -> bool {
    evaluate(&witness.numbers, &witness.operators) == Some(TARGET)
}

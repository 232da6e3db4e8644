//! Hand and operator types.
//!
//! A hand is the four integers read from one input line. Operators are the
//! fixed, ordered set the solver combines them with.

use std::fmt;
use std::num::ParseIntError;
use std::str::{self, FromStr, Utf8Error};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of integers in a hand
pub const HAND_SIZE: usize = 4;

/// Number of operators applied to reduce a hand to a single value
pub const STEPS: usize = HAND_SIZE - 1;

/// The value every witness must evaluate to
pub const TARGET: i128 = 42;

/// Binary operator applied to the running result and the next number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
}

/// Operators in search order. The first witness found depends on this order.
pub const OPERATORS: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
        }
    }

    /// Apply the operator, returning `None` if the result does not fit in `i128`
    pub fn apply(self, lhs: i128, rhs: i128) -> Option<i128> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Errors from parsing a line into a hand
#[derive(Debug, Error)]
pub enum HandError {
    #[error("expected 4 integers, found {found}")]
    WrongCount { found: usize },
    #[error("invalid integer {token:?}")]
    InvalidToken {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line is not valid UTF-8")]
    InvalidEncoding(#[source] Utf8Error),
}

/// Four integers read from one input line, in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([i64; HAND_SIZE]);

impl Hand {
    pub fn new(numbers: [i64; HAND_SIZE]) -> Self {
        Self(numbers)
    }

    pub fn numbers(&self) -> &[i64; HAND_SIZE] {
        &self.0
    }

    /// Parse a raw input line, rejecting bytes that are not UTF-8
    pub fn from_bytes(line: &[u8]) -> Result<Self, HandError> {
        str::from_utf8(line)
            .map_err(HandError::InvalidEncoding)?
            .parse()
    }

    /// Reorder the hand by input positions
    pub fn arrange(&self, positions: &[usize; HAND_SIZE]) -> [i64; HAND_SIZE] {
        positions.map(|p| self.0[p])
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != HAND_SIZE {
            return Err(HandError::WrongCount {
                found: tokens.len(),
            });
        }

        let mut numbers = [0i64; HAND_SIZE];
        for (slot, token) in numbers.iter_mut().zip(tokens) {
            *slot = token.parse().map_err(|source| HandError::InvalidToken {
                token: token.to_string(),
                source,
            })?;
        }
        Ok(Self(numbers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hand() {
        let hand: Hand = "4 9 10 13".parse().unwrap();
        assert_eq!(hand.numbers(), &[4, 9, 10, 13]);

        let hand: Hand = "  -3\t+7  0 42\r".parse().unwrap();
        assert_eq!(hand.numbers(), &[-3, 7, 0, 42]);
    }

    #[test]
    fn test_parse_wrong_count() {
        assert!(matches!(
            "1 2 3".parse::<Hand>(),
            Err(HandError::WrongCount { found: 3 })
        ));
        assert!(matches!(
            "1 2 3 4 5".parse::<Hand>(),
            Err(HandError::WrongCount { found: 5 })
        ));
        assert!(matches!(
            "   ".parse::<Hand>(),
            Err(HandError::WrongCount { found: 0 })
        ));
    }

    #[test]
    fn test_parse_invalid_token() {
        match "1 two 3 4".parse::<Hand>() {
            Err(HandError::InvalidToken { token, .. }) => assert_eq!(token, "two"),
            other => panic!("unexpected result: {:?}", other),
        }
        // Larger than i64
        assert!(matches!(
            "1 2 3 99999999999999999999".parse::<Hand>(),
            Err(HandError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_from_bytes() {
        let hand = Hand::from_bytes(b"6 7 0 0\r").unwrap();
        assert_eq!(hand.numbers(), &[6, 7, 0, 0]);

        assert!(matches!(
            Hand::from_bytes(b"\xff 2 3 4"),
            Err(HandError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(40, 2), Some(42));
        assert_eq!(Operator::Sub.apply(40, -2), Some(42));
        assert_eq!(Operator::Mul.apply(6, 7), Some(42));
        assert_eq!(Operator::Mul.apply(i128::MAX, 2), None);
        assert_eq!(Operator::Sub.apply(i128::MIN, 1), None);
    }

    #[test]
    fn test_operator_order_and_symbols() {
        let symbols: Vec<&str> = OPERATORS.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!["+", "-", "*"]);
        assert_eq!(Operator::Mul.to_string(), "*");
    }

    #[test]
    fn test_arrange() {
        let hand = Hand::new([2, 3, 4, 5]);
        assert_eq!(hand.arrange(&[0, 3, 2, 1]), [2, 5, 4, 3]);
    }
}

use crate::utils::error::{Result, SumError};
use crate::utils::format::format_float;

pub const FAILURE_PREFIX: &str = "execution failed:";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sum(f64),
    Failed(SumError),
}

impl Outcome {
    /// The one line written to stdout for this run.
    pub fn line(&self) -> String {
        match self {
            Outcome::Sum(value) => format_float(*value),
            Outcome::Failed(err) => format!("{} {}", FAILURE_PREFIX, err),
        }
    }
}

impl From<Result<f64>> for Outcome {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(value) => Outcome::Sum(value),
            Err(err) => Outcome::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_line() {
        assert_eq!(Outcome::Sum(3.0).line(), "3.0");
        assert_eq!(
            Outcome::Failed(SumError::invalid_number("abc")).line(),
            "execution failed: could not convert string to float: 'abc'"
        );
    }

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(Outcome::from(Ok(1.0)), Outcome::Sum(1.0));
        assert_eq!(
            Outcome::from(Err(SumError::invalid_number("x"))),
            Outcome::Failed(SumError::invalid_number("x"))
        );
    }
}

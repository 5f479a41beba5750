use crate::utils::error::{Result, SumError};

pub const REQUIRED_OPERANDS: usize = 2;

/// Value at `index`, or `MissingArgument` naming its 1-based position.
pub fn validate_required_operand(values: &[String], index: usize) -> Result<&str> {
    values
        .get(index)
        .map(String::as_str)
        .ok_or(SumError::MissingArgument {
            position: index + 1,
            received: values.len(),
        })
}

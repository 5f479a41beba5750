use crate::core::operand::parse_operand;
use crate::domain::model::Operands;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_operand;

pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

/// Read the operands at positions 0 and 1. Extra values are ignored.
pub fn parse_operands(raw: &[String]) -> Result<Operands> {
    let a = parse_operand(validate_required_operand(raw, 0)?)?;
    let b = parse_operand(validate_required_operand(raw, 1)?)?;
    Ok(Operands { a, b })
}

pub fn compute(raw: &[String]) -> Result<f64> {
    let operands = parse_operands(raw)?;
    Ok(sum(operands.a, operands.b))
}

/// Anything that can hand the engine its raw, unparsed operands.
pub trait OperandSource {
    fn operands(&self) -> &[String];
}

impl OperandSource for Vec<String> {
    fn operands(&self) -> &[String] {
        self
    }
}

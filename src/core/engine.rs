use crate::core::calculator::compute;
use crate::domain::model::Outcome;
use crate::domain::ports::OperandSource;
use crate::utils::validation::REQUIRED_OPERANDS;

pub struct SumEngine<S: OperandSource> {
    source: S,
}

impl<S: OperandSource> SumEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// One-shot: parse both operands, add them, and report the outcome.
    pub fn run(&self) -> Outcome {
        let raw = self.source.operands();
        tracing::debug!("Received {} operand(s): {:?}", raw.len(), raw);

        if raw.len() > REQUIRED_OPERANDS {
            tracing::debug!(
                "Ignoring {} extra operand(s)",
                raw.len() - REQUIRED_OPERANDS
            );
        }

        let result = compute(raw)
            .inspect(|value| tracing::debug!("Computed sum: {}", value))
            .inspect_err(|e| {
                tracing::error!("Sum failed: {} (Category: {:?})", e, e.category())
            });

        Outcome::from(result)
    }
}

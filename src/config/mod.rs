use crate::domain::ports::OperandSource;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "small-sum", version)]
#[command(about = "Add two numbers and print the sum")]
pub struct CliConfig {
    /// Numbers to add; values after the second are ignored
    #[arg(value_name = "OPERAND", num_args = 0.., allow_hyphen_values = true)]
    pub operands: Vec<String>,

    #[arg(short, long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,
}

impl OperandSource for CliConfig {
    fn operands(&self) -> &[String] {
        &self.operands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_two_operands() {
        let config = CliConfig::try_parse_from(["small-sum", "1", "2"]).unwrap();
        assert_eq!(config.operands, vec!["1", "2"]);
        assert!(!config.verbose);
    }

    #[test]
    fn test_accepts_negative_operands() {
        let config = CliConfig::try_parse_from(["small-sum", "-1.5", "-inf"]).unwrap();
        assert_eq!(config.operands, vec!["-1.5", "-inf"]);
    }

    #[test]
    fn test_verbose_flag_before_operands() {
        let config = CliConfig::try_parse_from(["small-sum", "-v", "3", "4"]).unwrap();
        assert!(config.verbose);
        assert_eq!(config.operands, vec!["3", "4"]);
    }

    #[test]
    fn test_no_operands_is_not_a_parse_error() {
        let config = CliConfig::try_parse_from(["small-sum"]).unwrap();
        assert!(config.operands.is_empty());
    }
}

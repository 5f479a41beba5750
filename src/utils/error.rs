use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SumError {
    #[error("missing operand at position {position}: expected 2 arguments, got {received}")]
    MissingArgument { position: usize, received: usize },

    #[error("could not convert string to float: {}", quote(.value))]
    InvalidNumber { value: String },

    #[error("{message}")]
    Usage { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Usage,
}

impl SumError {
    pub fn invalid_number(value: impl Into<String>) -> Self {
        SumError::InvalidNumber {
            value: value.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SumError::MissingArgument { .. } | SumError::InvalidNumber { .. } => {
                ErrorCategory::Input
            }
            SumError::Usage { .. } => ErrorCategory::Usage,
        }
    }
}

impl From<clap::Error> for SumError {
    fn from(err: clap::Error) -> Self {
        // clap renders a multi-line report with usage; keep the headline only
        let rendered = err.render().to_string();
        let headline = rendered.lines().next().unwrap_or_default();
        let message = headline.strip_prefix("error: ").unwrap_or(headline).trim();

        SumError::Usage {
            message: message.to_string(),
        }
    }
}

// Control characters and quotes are escaped so the diagnostic stays on one line.
fn quote(value: &str) -> String {
    format!("'{}'", value.escape_debug())
}

pub type Result<T> = std::result::Result<T, SumError>;

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{calculator::sum, engine::SumEngine};
pub use domain::model::{Operands, Outcome};
pub use utils::error::{Result, SumError};

use clap::error::ErrorKind;
use clap::Parser;
use small_sum::utils::logger;
use small_sum::{CliConfig, Outcome, SumEngine, SumError};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            logger::init_cli_logger(false);
            let err = SumError::from(e);
            tracing::error!("Argument parsing failed: {}", err);
            println!("{}", Outcome::Failed(err).line());
            return;
        }
    };

    // logging
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let outcome = SumEngine::new(config).run();

    println!("{}", outcome.line());
}

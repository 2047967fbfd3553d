//! `hasagi`: command line access to the League of Legends client API.
//!
//! The binary is a thin wrapper around [`run`]; everything else is exported
//! for tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod readiness;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::error::HasagiError;

use lcu_client::HasagiConfig;

use log::debug;

/// Load the config, start logging and run one command.
pub async fn run(cli: Cli) -> Result<(), HasagiError> {
    let config = HasagiConfig::load(cli.config.as_deref())?;

    let level = logger::raise_level(config.log.level_filter(), cli.verbose);
    logger::initialize(level, config.log.file.as_deref())?;
    debug!("Running {:?}", cli.command);

    match cli.command {
        Command::Request(args) => commands::request::run(args, &config).await,
        Command::Listen(args) => commands::listen::run(args, &config).await,
        Command::Schema(args) => commands::schema::run(args, &config).await,
        Command::Credentials => commands::credentials::run(&config).await,
    }
}

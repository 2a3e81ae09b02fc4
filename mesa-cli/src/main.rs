//! mesa - session diagnostics CLI
//!
//! Inspects and manipulates the locally persisted session the mesa client
//! keeps between launches.
//!
//! # Examples
//!
//! ```bash
//! # Show the hydrated session
//! mesa status --pretty
//!
//! # Store an identity
//! mesa login --id usr_1 --email a@b.com --role USER --token <jwt>
//!
//! # Clear it everywhere
//! mesa logout
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod status;

#[cfg(test)]
mod tests;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::{CliError, Result as CliErrorResult};
use crate::status::{StatusReport, format_report};

use mesa_auth::ExpiryPolicy;
use mesa_config::Config;
use mesa_core::Identity;
use mesa_session::SessionManager;
use mesa_store::{FileStore, MemoryStore};

use std::collections::HashSet;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::warn;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = Config::config_dir()?.join(&config.logging.dir);
            std::fs::create_dir_all(&log_dir).map_err(|e| CliError::Io {
                path: log_dir.clone(),
                source: e,
            })?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;
    config.log_summary();

    let policy = if config.session.unknown_expiry_valid {
        ExpiryPolicy::UnknownIsValid
    } else {
        ExpiryPolicy::UnknownIsInvalid
    };

    let mut manager = SessionManager::new(&config.session.storage_key, policy);
    if cli.ephemeral {
        manager.register_store(Arc::new(MemoryStore::new()));
    } else {
        manager.register_store(Arc::new(FileStore::new(config.storage_dir()?)));
    }

    let outcome = manager.hydrate().await;

    match cli.command {
        Commands::Status => {
            let report = StatusReport::collect(&manager, &outcome);
            print_json(&report, cli.pretty);
        }

        Commands::Login {
            id,
            email,
            first_name,
            last_name,
            roles,
            token,
        } => {
            let identity = Identity {
                id,
                email,
                first_name,
                last_name,
                roles: roles.into_iter().collect::<HashSet<String>>(),
                token,
            };

            if let Err(e) = identity.validate() {
                warn!("Storing identity anyway: {e}");
            }

            let report = manager.set_identity(Some(identity)).await;
            for line in format_report(&report) {
                println!("{line}");
            }
        }

        Commands::Logout => {
            let report = manager.logout().await;
            for line in format_report(&report) {
                println!("{line}");
            }
        }

        Commands::Purge => {
            let report = manager.purge().await;
            for line in format_report(&report) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing output: {e}"),
    }
}

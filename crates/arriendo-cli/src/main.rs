//! Arriendo CLI - landlord tools for the rental marketplace
//!
//! Inspect listings, follow tenant interest, and manage residences from the
//! terminal.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::dismiss::run_dismiss;
use crate::commands::list::run_list;
use crate::commands::notifications::run_notifications;
use crate::commands::update::run_update;
use crate::commands::watch::run_watch;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arriendo_core=info".parse().unwrap())
                .add_directive("arriendo_cli=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url.as_deref();

    match cli.command {
        Some(Commands::List { json }) => run_list(api_url, cli.owner, json).await?,
        Some(Commands::Notifications { json }) => {
            run_notifications(api_url, cli.owner, json).await?;
        }
        Some(Commands::Dismiss { id }) => run_dismiss(api_url, &id).await?,
        Some(Commands::Delete { id }) => run_delete(api_url, &id).await?,
        Some(Commands::Update {
            id,
            price,
            description,
            rooms,
            bathrooms,
        }) => {
            run_update(api_url, &id, price, description, rooms, bathrooms).await?;
        }
        Some(Commands::Watch { json, ack }) => run_watch(api_url, cli.owner, json, ack).await?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}

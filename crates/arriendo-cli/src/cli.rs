use std::path::PathBuf;

use arriendo_core::OwnerId;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "arriendo")]
#[command(about = "Landlord tools for the rental marketplace")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Rental API base URL (falls back to ARRIENDO_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Landlord account id (falls back to ARRIENDO_OWNER_ID)
    #[arg(long, global = true, value_name = "ID")]
    pub owner: Option<OwnerId>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List your residences
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List unread tenant interest notifications
    Notifications {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark an interest notification as read
    Dismiss {
        /// Notification ID
        id: String,
    },
    /// Delete a residence
    Delete {
        /// Residence ID
        id: String,
    },
    /// Update an existing residence listing
    Update {
        /// Residence ID
        id: String,
        /// New monthly rent
        #[arg(long)]
        price: Option<f64>,
        /// New listing description
        #[arg(long)]
        description: Option<String>,
        /// New bedroom count
        #[arg(long)]
        rooms: Option<u32>,
        /// New bathroom count
        #[arg(long)]
        bathrooms: Option<u32>,
    },
    /// Follow listings and notifications live until interrupted
    Watch {
        /// Output state updates as JSON lines
        #[arg(long)]
        json: bool,
        /// Mark each surfaced notification as read after printing it
        #[arg(long)]
        ack: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

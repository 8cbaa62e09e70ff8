use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] arriendo_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No API base URL configured. Pass --api-url or set ARRIENDO_API_URL.")]
    MissingApiUrl,
    #[error("No owner id configured. Pass --owner or set ARRIENDO_OWNER_ID.")]
    MissingOwner,
    #[error("Invalid owner id: {0}")]
    InvalidOwnerId(String),
    #[error("Invalid residence id: {0}")]
    InvalidResidenceId(String),
    #[error("Invalid notification id: {0}")]
    InvalidNotificationId(String),
    #[error(
        "Nothing to update; pass at least one of --price, --description, --rooms, --bathrooms"
    )]
    EmptyUpdate,
}

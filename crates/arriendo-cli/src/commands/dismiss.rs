use arriendo_core::api::NotificationSource;

use crate::commands::common::{build_client, parse_notification_id};
use crate::error::CliError;

pub async fn run_dismiss(api_url: Option<&str>, id: &str) -> Result<(), CliError> {
    let id = parse_notification_id(id)?;
    let client = build_client(api_url)?;

    client.mark_read(id).await?;
    println!("{id}");
    Ok(())
}

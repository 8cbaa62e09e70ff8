use arriendo_core::api::ResidenceSource;

use crate::commands::common::{build_client, parse_residence_id};
use crate::error::CliError;

pub async fn run_delete(api_url: Option<&str>, id: &str) -> Result<(), CliError> {
    let id = parse_residence_id(id)?;
    let client = build_client(api_url)?;

    client.delete_residence(id).await?;
    println!("{id}");
    Ok(())
}

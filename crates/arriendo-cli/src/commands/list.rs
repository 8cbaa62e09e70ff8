use arriendo_core::api::ResidenceSource;
use arriendo_core::OwnerId;

use crate::commands::common::{
    build_client, format_residence_lines, residence_to_list_item, resolve_owner, ResidenceListItem,
};
use crate::error::CliError;

pub async fn run_list(
    api_url: Option<&str>,
    owner: Option<OwnerId>,
    as_json: bool,
) -> Result<(), CliError> {
    let owner = resolve_owner(owner)?;
    let client = build_client(api_url)?;
    let residences = client.fetch_residences(owner).await?;

    if as_json {
        let json_items = residences
            .iter()
            .map(residence_to_list_item)
            .collect::<Vec<ResidenceListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        for line in format_residence_lines(&residences) {
            println!("{line}");
        }
    }

    Ok(())
}

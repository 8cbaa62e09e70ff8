use arriendo_core::models::ResidenceUpdate;

use crate::commands::common::{build_client, parse_residence_id};
use crate::error::CliError;

pub async fn run_update(
    api_url: Option<&str>,
    id: &str,
    price: Option<f64>,
    description: Option<String>,
    rooms: Option<u32>,
    bathrooms: Option<u32>,
) -> Result<(), CliError> {
    let id = parse_residence_id(id)?;
    let update = ResidenceUpdate {
        monthly_price: price,
        description,
        rooms,
        bathrooms,
        amenities: None,
    };
    if update == ResidenceUpdate::default() {
        return Err(CliError::EmptyUpdate);
    }

    let client = build_client(api_url)?;
    client.update_residence(id, &update).await?;
    println!("{id}");
    Ok(())
}

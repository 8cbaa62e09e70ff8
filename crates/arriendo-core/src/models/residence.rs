//! Residence model as served by the rental marketplace API

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-issued identifier for a residence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResidenceId(i64);

impl ResidenceId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ResidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ResidenceId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for ResidenceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Server-issued identifier for a landlord account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i64);

impl OwnerId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OwnerId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for OwnerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A rental property owned by a landlord.
///
/// The marketplace backend speaks Spanish wire names; serde renames map them
/// onto idiomatic field names. Every field except the id defaults when the
/// backend omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residence {
    /// Unique identifier
    pub id: ResidenceId,
    /// Monthly rent
    #[serde(rename = "precio_mensual", default)]
    pub monthly_price: f64,
    /// Free-form listing description
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Bedroom count
    #[serde(rename = "habitaciones", default)]
    pub rooms: u32,
    /// Bathroom count
    #[serde(rename = "banos", default)]
    pub bathrooms: u32,
    /// Amenity labels shown on the listing card
    #[serde(rename = "comodidades", default)]
    pub amenities: Vec<String>,
    /// Photo URLs in display order
    #[serde(rename = "fotos", default)]
    pub photos: Vec<String>,
    /// Latitude of the property, when geocoded
    #[serde(rename = "latitud", default)]
    pub latitude: Option<f64>,
    /// Longitude of the property, when geocoded
    #[serde(rename = "longitud", default)]
    pub longitude: Option<f64>,
    /// Owning landlord account
    #[serde(rename = "propietario_id", default)]
    pub owner_id: Option<OwnerId>,
}

/// Editable residence fields sent on update.
///
/// Only the populated fields are serialized, so a partial edit leaves the
/// remaining columns untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResidenceUpdate {
    #[serde(rename = "precio_mensual", skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "habitaciones", skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    #[serde(rename = "banos", skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(rename = "comodidades", skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_full_wire_document() {
        let json = r#"{
            "id": 7,
            "precio_mensual": 300.0,
            "descripcion": "Bright flat near the river",
            "habitaciones": 2,
            "banos": 1,
            "comodidades": ["wifi", "parking"],
            "fotos": ["https://cdn.example.com/7/front.jpg"],
            "latitud": -33.45,
            "longitud": -70.66,
            "propietario_id": 42
        }"#;

        let residence: Residence = serde_json::from_str(json).unwrap();
        assert_eq!(residence.id, ResidenceId::new(7));
        assert_eq!(residence.monthly_price, 300.0);
        assert_eq!(residence.description, "Bright flat near the river");
        assert_eq!(residence.rooms, 2);
        assert_eq!(residence.bathrooms, 1);
        assert_eq!(residence.amenities, vec!["wifi", "parking"]);
        assert_eq!(residence.photos.len(), 1);
        assert_eq!(residence.latitude, Some(-33.45));
        assert_eq!(residence.longitude, Some(-70.66));
        assert_eq!(residence.owner_id, Some(OwnerId::new(42)));
    }

    #[test]
    fn decodes_minimal_document_with_defaults() {
        let residence: Residence =
            serde_json::from_str(r#"{"id": 7, "precio_mensual": 300}"#).unwrap();

        assert_eq!(residence.id, ResidenceId::new(7));
        assert_eq!(residence.monthly_price, 300.0);
        assert_eq!(residence.description, "");
        assert_eq!(residence.rooms, 0);
        assert!(residence.amenities.is_empty());
        assert!(residence.photos.is_empty());
        assert_eq!(residence.latitude, None);
        assert_eq!(residence.owner_id, None);
    }

    #[test]
    fn serializes_with_wire_names() {
        let residence: Residence = serde_json::from_str(r#"{"id": 9}"#).unwrap();
        let value = serde_json::to_value(&residence).unwrap();

        assert!(value.get("precio_mensual").is_some());
        assert!(value.get("habitaciones").is_some());
        assert!(value.get("monthly_price").is_none());
    }

    #[test]
    fn residence_id_parses_and_displays() {
        let id: ResidenceId = " 7 ".parse().unwrap();
        assert_eq!(id, ResidenceId::new(7));
        assert_eq!(id.to_string(), "7");
        assert!("not-a-number".parse::<ResidenceId>().is_err());
    }

    #[test]
    fn residence_update_skips_unset_fields() {
        let update = ResidenceUpdate {
            monthly_price: Some(350.0),
            ..ResidenceUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(value.get("precio_mensual").and_then(serde_json::Value::as_f64), Some(350.0));
        assert!(value.get("descripcion").is_none());
        assert!(value.get("habitaciones").is_none());
    }
}

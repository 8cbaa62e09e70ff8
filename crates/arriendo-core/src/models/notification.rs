//! Interest notification model and payload decoding

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ResidenceId;

/// Server-issued identifier for an interest notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NotificationId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl FromStr for NotificationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// An unread interest notification as returned by the rental API.
///
/// `data` is an opaque JSON-encoded string; decode it with
/// [`InterestPayload::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,
    /// Read flag, false for everything the unread endpoint returns
    #[serde(rename = "leida", default)]
    pub read: bool,
    /// JSON-encoded tenant interest payload
    #[serde(default)]
    pub data: String,
    /// Creation timestamp (Unix ms)
    #[serde(rename = "creada_en", default)]
    pub created_at: Option<i64>,
}

/// Tenant contact details carried inside a notification's `data` string.
///
/// Every field is optional so a sparse payload still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestPayload {
    /// Interested tenant's account id
    #[serde(rename = "usuario_id", default)]
    pub tenant_id: Option<i64>,
    /// Interested tenant's display name
    #[serde(rename = "nombre", default)]
    pub tenant_name: Option<String>,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    /// Residence the tenant is asking about
    #[serde(rename = "residencia_id", default)]
    pub residence_id: Option<ResidenceId>,
}

impl InterestPayload {
    /// Decodes a payload from the opaque `data` string.
    ///
    /// Malformed or empty JSON decodes to the empty payload rather than an
    /// error; the notification itself is still delivered.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::debug!("Interest payload did not parse, using empty payload: {error}");
                Self::default()
            }
        }
    }
}

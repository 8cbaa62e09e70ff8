//! Display formatting for interest notifications

use serde::Serialize;

use crate::models::{InterestPayload, Notification, NotificationId};

/// Title shown for every tenant interest notification
pub const INTEREST_TITLE: &str = "New rental interest";

/// Stand-in tenant name when the payload is missing or malformed
pub const TENANT_PLACEHOLDER: &str = "A tenant";

/// A notification shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNotification {
    /// Server id, used for dismissal and mark-read
    pub id: NotificationId,
    /// Display title
    pub title: String,
    /// Human-readable summary naming the interested tenant
    pub message: String,
    /// Read flag carried from the raw notification
    pub read: bool,
    /// Decoded tenant contact details
    pub payload: InterestPayload,
}

/// Maps a raw notification into its display shape.
///
/// Total over its input: a malformed `data` string decodes to the empty
/// payload and the message names [`TENANT_PLACEHOLDER`] instead of a tenant.
#[must_use]
pub fn format_notification(raw: &Notification) -> DisplayNotification {
    let payload = InterestPayload::decode(&raw.data);
    let tenant = payload
        .tenant_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(TENANT_PLACEHOLDER);

    DisplayNotification {
        id: raw.id,
        title: INTEREST_TITLE.to_string(),
        message: format!("{tenant} is interested in one of your properties"),
        read: raw.read,
        payload,
    }
}

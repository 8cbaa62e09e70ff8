use std::env;

use arriendo_core::api::RentalApiClient;
use arriendo_core::models::{InterestPayload, Notification, OwnerId, Residence};
use arriendo_core::notifications::format_notification;
use arriendo_core::{NotificationId, ResidenceId};
use chrono::Utc;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct ResidenceListItem {
    pub id: i64,
    pub monthly_price: f64,
    pub description: String,
    pub rooms: u32,
    pub bathrooms: u32,
    pub amenities: Vec<String>,
    pub photos: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NotificationListItem {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub age: Option<String>,
    pub tenant: InterestPayload,
}

pub fn build_client(api_url_flag: Option<&str>) -> Result<RentalApiClient, CliError> {
    let base_url = resolve_api_url(api_url_flag)?;
    Ok(RentalApiClient::new(base_url)?)
}

pub fn resolve_api_url(flag: Option<&str>) -> Result<String, CliError> {
    if let Some(url) = flag {
        let trimmed = url.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    match env::var("ARRIENDO_API_URL") {
        Ok(url) if !url.trim().is_empty() => Ok(url.trim().to_string()),
        _ => Err(CliError::MissingApiUrl),
    }
}

pub fn resolve_owner(flag: Option<OwnerId>) -> Result<OwnerId, CliError> {
    if let Some(owner) = flag {
        return Ok(owner);
    }

    let raw = env::var("ARRIENDO_OWNER_ID").map_err(|_| CliError::MissingOwner)?;
    raw.parse()
        .map_err(|_| CliError::InvalidOwnerId(raw.trim().to_string()))
}

pub fn parse_residence_id(id: &str) -> Result<ResidenceId, CliError> {
    id.parse()
        .map_err(|_| CliError::InvalidResidenceId(id.trim().to_string()))
}

pub fn parse_notification_id(id: &str) -> Result<NotificationId, CliError> {
    id.parse()
        .map_err(|_| CliError::InvalidNotificationId(id.trim().to_string()))
}

pub fn residence_to_list_item(residence: &Residence) -> ResidenceListItem {
    ResidenceListItem {
        id: residence.id.as_i64(),
        monthly_price: residence.monthly_price,
        description: residence.description.clone(),
        rooms: residence.rooms,
        bathrooms: residence.bathrooms,
        amenities: residence.amenities.clone(),
        photos: residence.photos.clone(),
    }
}

pub fn format_residence_lines(residences: &[Residence]) -> Vec<String> {
    residences
        .iter()
        .map(|residence| {
            let id = residence.id.to_string();
            let price = format!("${:.0}/mo", residence.monthly_price);
            let layout = format!("{}bd/{}ba", residence.rooms, residence.bathrooms);
            let preview = text_preview(&residence.description, 40);

            if preview.is_empty() {
                format!("{id:<6}  {price:<11}  {layout}")
            } else {
                format!("{id:<6}  {price:<11}  {layout:<7}  {preview}")
            }
        })
        .collect()
}

pub fn notification_to_list_item(notification: &Notification) -> NotificationListItem {
    let now_ms = Utc::now().timestamp_millis();
    let formatted = format_notification(notification);

    NotificationListItem {
        id: formatted.id.as_i64(),
        title: formatted.title,
        message: formatted.message,
        age: notification
            .created_at
            .map(|created_at| format_notification_age(created_at, now_ms)),
        tenant: formatted.payload,
    }
}

pub fn format_notification_lines(notifications: &[Notification]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notifications
        .iter()
        .map(|notification| {
            let formatted = format_notification(notification);
            let id = formatted.id.to_string();
            let message = text_preview(&formatted.message, 50);

            match notification.created_at {
                Some(created_at) => {
                    let age = format_notification_age(created_at, now_ms);
                    format!("{id:<6}  {message:<50}  {age}")
                }
                None => format!("{id:<6}  {message}"),
            }
        })
        .collect()
}

/// Collapses a listing description (or message) to a single line and, when
/// too long, truncates it at a word boundary with a trailing ellipsis.
pub fn text_preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let budget = max_chars.saturating_sub(3);
    let mut preview = String::new();
    for word in collapsed.split(' ') {
        let grown = if preview.is_empty() {
            word.chars().count()
        } else {
            preview.chars().count() + 1 + word.chars().count()
        };
        if grown > budget {
            break;
        }
        if !preview.is_empty() {
            preview.push(' ');
        }
        preview.push_str(word);
    }
    // a single over-long word still gets hard-cut
    if preview.is_empty() {
        preview = collapsed.chars().take(budget).collect();
    }

    preview + "..."
}

/// Age of an interest notification. Fresh interest renders as a counter;
/// anything older than a week shows the creation date instead.
pub fn format_notification_age(timestamp_ms: i64, now_ms: i64) -> String {
    let elapsed_minutes = now_ms.saturating_sub(timestamp_ms) / 60_000;
    let elapsed_hours = elapsed_minutes / 60;
    let elapsed_days = elapsed_hours / 24;

    if elapsed_minutes < 1 {
        "moments ago".to_string()
    } else if elapsed_hours < 1 {
        format!("{elapsed_minutes}m ago")
    } else if elapsed_days < 1 {
        format!("{elapsed_hours}h ago")
    } else if elapsed_days < 7 {
        format!("{elapsed_days}d ago")
    } else {
        chrono::DateTime::from_timestamp_millis(timestamp_ms).map_or_else(
            || format!("{elapsed_days}d ago"),
            |created| created.format("%Y-%m-%d").to_string(),
        )
    }
}

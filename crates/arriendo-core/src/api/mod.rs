//! HTTP client for the rental marketplace REST API.
//!
//! [`RentalApiClient`] speaks the marketplace endpoints directly. The
//! [`ResidenceSource`] and [`NotificationSource`] traits are the seams the
//! sync controller polls through, so tests can substitute scripted sources.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{
    Notification, NotificationId, OwnerId, Residence, ResidenceId, ResidenceUpdate,
};

/// Remote source of a landlord's residence set.
#[async_trait]
pub trait ResidenceSource: Send + Sync + 'static {
    /// Fetches the complete residence set for one owner.
    async fn fetch_residences(&self, owner: OwnerId) -> Result<Vec<Residence>>;

    /// Deletes a residence server-side.
    async fn delete_residence(&self, id: ResidenceId) -> Result<()>;
}

/// Remote source of unread interest notifications.
#[async_trait]
pub trait NotificationSource: Send + Sync + 'static {
    /// Fetches the unread notifications for one landlord, oldest first.
    async fn fetch_unread(&self, landlord: OwnerId) -> Result<Vec<Notification>>;

    /// Marks a single notification as read.
    async fn mark_read(&self, id: NotificationId) -> Result<()>;
}

/// HTTP client for the rental marketplace API.
#[derive(Debug, Clone)]
pub struct RentalApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl RentalApiClient {
    /// Builds a client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(&base_url.into())?;
        Ok(Self {
            base_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    /// The normalized base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the editable fields of a residence.
    pub async fn update_residence(&self, id: ResidenceId, update: &ResidenceUpdate) -> Result<()> {
        let response = self
            .client
            .put(format!("{}/residences/{id}", self.base_url))
            .json(update)
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn get_array<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let response = ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|error| Error::Decode(error.to_string()))
    }
}

#[async_trait]
impl ResidenceSource for RentalApiClient {
    async fn fetch_residences(&self, owner: OwnerId) -> Result<Vec<Residence>> {
        self.get_array(format!("{}/residences?ownerId={owner}", self.base_url))
            .await
    }

    async fn delete_residence(&self, id: ResidenceId) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/residences/{id}", self.base_url))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl NotificationSource for RentalApiClient {
    async fn fetch_unread(&self, landlord: OwnerId) -> Result<Vec<Notification>> {
        self.get_array(format!(
            "{}/notifications/unread?landlordId={landlord}",
            self.base_url
        ))
        .await
    }

    async fn mark_read(&self, id: NotificationId) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/notifications/{id}/read", self.base_url))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(Error::Api(parse_api_error(status, &body)))
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::InvalidConfiguration(
            "API base URL must not be empty".to_string(),
        ));
    }
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(Error::InvalidConfiguration(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base.to_string())
}

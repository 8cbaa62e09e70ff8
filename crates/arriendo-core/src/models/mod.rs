//! Data models for Arriendo

mod notification;
mod residence;

pub use notification::{InterestPayload, Notification, NotificationId};
pub use residence::{OwnerId, Residence, ResidenceId, ResidenceUpdate};

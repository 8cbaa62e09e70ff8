//! Interest notification formatting and queueing

mod format;
mod queue;

pub use format::{format_notification, DisplayNotification, INTEREST_TITLE, TENANT_PLACEHOLDER};
pub use queue::NotificationQueue;

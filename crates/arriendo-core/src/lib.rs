//! arriendo-core - Core library for Arriendo
//!
//! This crate contains the shared models, the rental marketplace API client,
//! and the background listing synchronization used by all Arriendo
//! interfaces (mobile, CLI).

pub mod api;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod notifications;
pub mod sync;

pub use error::{Error, Result};
pub use models::{Notification, NotificationId, OwnerId, Residence, ResidenceId};

//! Background synchronization of listings and interest notifications

mod change;
mod scheduler;

pub use scheduler::{ListingState, SyncSchedule, SyncScheduler};

pub mod common;
pub mod completions;
pub mod delete;
pub mod dismiss;
pub mod list;
pub mod notifications;
pub mod update;
pub mod watch;

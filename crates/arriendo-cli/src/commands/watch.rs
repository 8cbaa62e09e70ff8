use std::sync::Arc;

use arriendo_core::sync::{ListingState, SyncSchedule, SyncScheduler};
use arriendo_core::OwnerId;

use crate::commands::common::{build_client, format_residence_lines, resolve_owner};
use crate::error::CliError;

/// Runs the live sync controller against the terminal until Ctrl+C.
///
/// Each published state replacement is rendered as the lines that changed
/// since the previous one (or as one JSON line with `--json`). With `--ack`
/// every surfaced notification is dismissed right after printing, so the
/// queue drains as it is watched.
pub async fn run_watch(
    api_url: Option<&str>,
    owner: Option<OwnerId>,
    as_json: bool,
    ack: bool,
) -> Result<(), CliError> {
    let owner = resolve_owner(owner)?;
    let client = Arc::new(build_client(api_url)?);
    let mut scheduler =
        SyncScheduler::new(Arc::clone(&client), Arc::clone(&client), SyncSchedule::default());
    let mut updates = scheduler.subscribe();
    tracing::info!("Starting watch for owner {owner} against {}", client.base_url());
    scheduler.start(Some(owner));

    eprintln!("Watching listings for owner {owner} (Ctrl+C to stop)");

    let mut last_rendered = ListingState::default();
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if as_json {
                    println!("{}", serde_json::to_string(&state)?);
                } else {
                    for line in render_state_lines(&state, &last_rendered) {
                        println!("{line}");
                    }
                }
                if ack {
                    if let Some(head) = state.current_notification.as_ref() {
                        scheduler.dismiss_notification(head.id).await;
                    }
                }
                last_rendered = state;
            }
        }
    }

    scheduler.stop();
    tracing::info!("Watch for owner {owner} stopped");
    Ok(())
}

/// Lines describing what changed between two published states.
pub fn render_state_lines(state: &ListingState, previous: &ListingState) -> Vec<String> {
    let mut lines = Vec::new();

    if state.loading && !previous.loading {
        lines.push("Loading listings...".to_string());
    }

    if let Some(error) = state.load_error.as_deref() {
        if previous.load_error.as_deref() != Some(error) {
            lines.push(format!("Load failed: {error}"));
        }
    }

    let finished_loading = previous.loading && !state.loading;
    if !state.loading
        && state.load_error.is_none()
        && (finished_loading || state.residences != previous.residences)
    {
        lines.push(format!("{} residence(s) listed", state.residences.len()));
        for line in format_residence_lines(&state.residences) {
            lines.push(format!("  {line}"));
        }
    }

    match (&state.current_notification, &previous.current_notification) {
        (Some(head), previous_head)
            if previous_head.as_ref().map(|entry| entry.id) != Some(head.id) =>
        {
            lines.push(format!("[{}] {}: {}", head.id, head.title, head.message));
        }
        (None, Some(_)) => lines.push("No pending notifications".to_string()),
        _ => {}
    }

    lines
}

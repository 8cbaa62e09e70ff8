//! Polling synchronization controller for a landlord's listing view.
//!
//! One controller per mounted view: `start` spawns the polling task, `stop`
//! (or drop) deactivates the lifecycle guard so in-flight work resolves as a
//! no-op. All state writes funnel through one lock where the guard is
//! re-checked, and subscribers only ever see whole replacement values.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::api::{NotificationSource, ResidenceSource};
use crate::lifecycle::LifecycleGuard;
use crate::models::{InterestPayload, NotificationId, OwnerId, Residence, ResidenceId};
use crate::notifications::{format_notification, DisplayNotification, NotificationQueue};

use super::change::SyncSnapshot;

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(2);
const DEFAULT_PERIOD: Duration = Duration::from_secs(3);

/// Timing of the repeating synchronization pass.
///
/// The first pass runs immediately on `start`; the repeating timer begins
/// after `initial_delay` and fires every `period` from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSchedule {
    pub initial_delay: Duration,
    pub period: Duration,
}

impl Default for SyncSchedule {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            period: DEFAULT_PERIOD,
        }
    }
}

impl SyncSchedule {
    /// Settling delay between the first pass and the repeating timer.
    #[must_use]
    pub const fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    /// Period of the repeating pass.
    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }
}

/// State published to the consuming view layer.
///
/// Consumers receive whole replacement values through a watch channel; they
/// never mutate controller state directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingState {
    /// Complete residence set for the owner, replaced wholesale on change
    pub residences: Vec<Residence>,
    /// True while the first synchronization pass is in flight
    pub loading: bool,
    /// Surfaced failure from the first residence fetch, if any
    pub load_error: Option<String>,
    /// Head of the notification queue, when one is eligible for display
    pub current_notification: Option<DisplayNotification>,
}

#[derive(Default)]
struct Inner {
    snapshot: SyncSnapshot,
    queue: NotificationQueue,
    view: ListingState,
}

/// Snapshot, queue, and published view behind one lock, plus the guard and
/// the broadcast channel. Every write funnels through [`apply`].
///
/// [`apply`]: ControllerState::apply
struct ControllerState {
    guard: LifecycleGuard,
    inner: Mutex<Inner>,
    updates: watch::Sender<ListingState>,
}

impl ControllerState {
    /// Runs `mutate` under the state lock and publishes the resulting view
    /// when it differs from the last published one. The guard is checked
    /// under the same lock, so teardown can never interleave between the
    /// check and the write. Returns `None` when the write was suppressed.
    async fn apply<T>(&self, label: &str, mutate: impl FnOnce(&mut Inner) -> T) -> Option<T> {
        let mut inner = self.inner.lock().await;
        if !self.guard.is_active() {
            tracing::debug!("Skipped {label} write: listing controller is torn down");
            return None;
        }
        let output = mutate(&mut inner);
        inner.view.current_notification = inner.queue.head().cloned();
        let next = inner.view.clone();
        self.updates.send_if_modified(|view| {
            if *view == next {
                false
            } else {
                *view = next;
                true
            }
        });
        Some(output)
    }
}

/// Background synchronization controller for one landlord's listing view.
///
/// Owns the polling task, the change-detection snapshot, and the
/// notification queue. Consumers subscribe to [`ListingState`] replacements
/// and interact through the dismissal and removal methods; nothing else
/// mutates the published state.
pub struct SyncScheduler<R, N> {
    residences: Arc<R>,
    notifications: Arc<N>,
    schedule: SyncSchedule,
    state: Arc<ControllerState>,
    task: Option<JoinHandle<()>>,
}

impl<R, N> SyncScheduler<R, N>
where
    R: ResidenceSource,
    N: NotificationSource,
{
    /// Builds a controller over the given sources.
    #[must_use]
    pub fn new(residences: Arc<R>, notifications: Arc<N>, schedule: SyncSchedule) -> Self {
        let (updates, _) = watch::channel(ListingState::default());
        Self {
            residences,
            notifications,
            schedule,
            state: Arc::new(ControllerState {
                guard: LifecycleGuard::new(),
                inner: Mutex::new(Inner::default()),
                updates,
            }),
            task: None,
        }
    }

    /// Subscribes to published listing state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ListingState> {
        self.state.updates.subscribe()
    }

    /// The most recently published state.
    #[must_use]
    pub fn current(&self) -> ListingState {
        self.state.updates.borrow().clone()
    }

    /// Whether the controller has not been torn down yet.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.guard.is_active()
    }

    /// Starts the polling task for `owner`.
    ///
    /// Without an owner id nothing is scheduled and no error is raised; the
    /// view simply stays empty. Calling `start` twice, or after `stop`, is a
    /// no-op: one timer per controller.
    pub fn start(&mut self, owner: Option<OwnerId>) {
        let Some(owner) = owner else {
            tracing::warn!("Listing sync not started: no owner id available");
            return;
        };
        if !self.state.guard.is_active() {
            tracing::warn!("Listing sync controller is torn down; ignoring start");
            return;
        }
        if self.task.is_some() {
            tracing::debug!("Listing sync already running for owner {owner}; ignoring start");
            return;
        }

        tracing::info!(
            "Starting listing sync for owner {owner} (initial delay {:?}, period {:?})",
            self.schedule.initial_delay,
            self.schedule.period
        );
        self.task = Some(tokio::spawn(run_sync_loop(
            Arc::clone(&self.residences),
            Arc::clone(&self.notifications),
            Arc::clone(&self.state),
            self.schedule,
            owner,
        )));
    }

    /// Tears the controller down: deactivates the guard (exactly once) and
    /// wakes the polling loop so no further pass starts.
    ///
    /// An in-flight pass is left to resolve on its own; the guard turns its
    /// completion into a no-op. The network call itself is never aborted.
    pub fn stop(&mut self) {
        if self.state.guard.deactivate() {
            tracing::info!("Listing sync stopped");
        }
        self.task = None;
    }

    /// Optimistically dismisses a notification: removes it from the queue,
    /// then acknowledges it server-side without awaiting the outcome.
    ///
    /// A failed acknowledgement leaves the entry dismissed client-side; an
    /// unchanged unread set compares equal on later passes and never
    /// resurrects it. Only a genuinely different server set replaces the
    /// queue again.
    pub async fn dismiss_notification(&self, id: NotificationId) {
        let removed = self
            .state
            .apply("notification dismissal", |inner| inner.queue.dismiss(id))
            .await
            .flatten();
        if removed.is_some() {
            self.acknowledge(id);
        } else {
            tracing::debug!("Dismissal of notification {id} matched no queued entry");
        }
    }

    /// Handles a tap on the displayed notification: dismisses it, fires the
    /// acknowledgement, and hands back the decoded payload so the caller can
    /// navigate to the interested tenant.
    pub async fn press_notification(&self, id: NotificationId) -> Option<InterestPayload> {
        let removed = self
            .state
            .apply("notification press", |inner| inner.queue.dismiss(id))
            .await
            .flatten()?;
        self.acknowledge(id);
        Some(removed.payload)
    }

    /// Applies an externally performed residence delete to local state, so
    /// the view updates before the next poll confirms it. Returns whether
    /// the write landed; false once the controller is torn down.
    pub async fn residence_removed(&self, id: ResidenceId) -> bool {
        self.state
            .apply("residence removal", |inner| {
                if inner.snapshot.remove_residence(id) {
                    inner.view.residences.retain(|residence| residence.id != id);
                }
            })
            .await
            .is_some()
    }

    /// Optimistically deletes a residence: local removal first, then the
    /// remote delete without awaiting the outcome. When the remote delete
    /// fails, the next poll restores the residence. The remote call fires
    /// only when the local write landed, so a torn-down controller never
    /// reaches the server.
    pub async fn remove_residence(&self, id: ResidenceId) {
        if !self.residence_removed(id).await {
            return;
        }

        let residences = Arc::clone(&self.residences);
        tokio::spawn(async move {
            if let Err(error) = residences.delete_residence(id).await {
                tracing::warn!("Remote delete for residence {id} failed: {error}");
            }
        });
    }

    fn acknowledge(&self, id: NotificationId) {
        let notifications = Arc::clone(&self.notifications);
        tokio::spawn(async move {
            if let Err(error) = notifications.mark_read(id).await {
                tracing::warn!("Failed to mark notification {id} as read: {error}");
            }
        });
    }
}

impl<R, N> Drop for SyncScheduler<R, N> {
    fn drop(&mut self) {
        self.state.guard.deactivate();
    }
}

async fn run_sync_loop<R, N>(
    residences: Arc<R>,
    notifications: Arc<N>,
    state: Arc<ControllerState>,
    schedule: SyncSchedule,
    owner: OwnerId,
) where
    R: ResidenceSource,
    N: NotificationSource,
{
    if !state.guard.is_active() {
        return;
    }

    state
        .apply("loading flag", |inner| inner.view.loading = true)
        .await;
    run_pass(
        residences.as_ref(),
        notifications.as_ref(),
        &state,
        owner,
        true,
    )
    .await;

    tokio::select! {
        () = state.guard.cancelled() => return,
        () = tokio::time::sleep(schedule.initial_delay) => {}
    }

    loop {
        tokio::select! {
            () = state.guard.cancelled() => return,
            () = tokio::time::sleep(schedule.period) => {}
        }
        if !state.guard.is_active() {
            return;
        }
        run_pass(
            residences.as_ref(),
            notifications.as_ref(),
            &state,
            owner,
            false,
        )
        .await;
    }
}

/// One synchronization pass: both fetches concurrently, each result gated
/// through the snapshot, passes never overlap because the loop awaits here.
async fn run_pass<R, N>(
    residences: &R,
    notifications: &N,
    state: &ControllerState,
    owner: OwnerId,
    first_pass: bool,
) where
    R: ResidenceSource,
    N: NotificationSource,
{
    tracing::debug!("Listing sync pass for owner {owner} (first_pass: {first_pass})");

    let (residence_result, notification_result) = tokio::join!(
        residences.fetch_residences(owner),
        notifications.fetch_unread(owner),
    );

    match residence_result {
        Ok(fetched) => {
            state
                .apply("residence snapshot", |inner| {
                    if inner.snapshot.accept_residences(fetched.clone()) {
                        inner.view.residences = fetched;
                    }
                    inner.view.loading = false;
                    inner.view.load_error = None;
                })
                .await;
        }
        Err(error) if first_pass => {
            tracing::warn!("Initial residence fetch for owner {owner} failed: {error}");
            state
                .apply("initial load error", |inner| {
                    inner.view.loading = false;
                    inner.view.load_error = Some(error.to_string());
                })
                .await;
        }
        Err(error) => {
            tracing::warn!("Background residence fetch for owner {owner} failed: {error}");
        }
    }

    match notification_result {
        Ok(fetched) => {
            let formatted: Vec<DisplayNotification> =
                fetched.iter().map(format_notification).collect();
            state
                .apply("notification queue", |inner| {
                    if inner.snapshot.accept_notifications(formatted.clone()) {
                        inner.queue.replace_all(formatted);
                    }
                })
                .await;
        }
        Err(error) => {
            tracing::warn!("Notification fetch for owner {owner} failed: {error}");
        }
    }
}

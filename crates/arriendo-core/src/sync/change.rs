//! Change detection between synchronization passes

use crate::models::{Residence, ResidenceId};
use crate::notifications::DisplayNotification;

/// Last-accepted fetch results, compared before anything is published.
///
/// Comparison is deep structural equality over the decoded values, so two
/// independently fetched but content-identical responses never reach
/// subscribers. `None` means no fetch of that kind has been accepted yet,
/// which is distinct from an accepted empty list.
#[derive(Debug, Default)]
pub(crate) struct SyncSnapshot {
    residences: Option<Vec<Residence>>,
    notifications: Option<Vec<DisplayNotification>>,
}

impl SyncSnapshot {
    /// Accepts a fresh residence fetch. Returns true when the value differs
    /// from the held snapshot and replaced it.
    pub fn accept_residences(&mut self, fetched: Vec<Residence>) -> bool {
        if self.residences.as_ref() == Some(&fetched) {
            return false;
        }
        self.residences = Some(fetched);
        true
    }

    /// Accepts a fresh, already formatted notification fetch. Same contract
    /// as [`accept_residences`].
    ///
    /// [`accept_residences`]: SyncSnapshot::accept_residences
    pub fn accept_notifications(&mut self, fetched: Vec<DisplayNotification>) -> bool {
        if self.notifications.as_ref() == Some(&fetched) {
            return false;
        }
        self.notifications = Some(fetched);
        true
    }

    /// Drops one residence from the held snapshot after a local removal, so
    /// an unchanged server response does not resurrect it. Returns true when
    /// the residence was present.
    pub fn remove_residence(&mut self, id: ResidenceId) -> bool {
        let Some(residences) = self.residences.as_mut() else {
            return false;
        };
        let before = residences.len();
        residences.retain(|residence| residence.id != id);
        residences.len() != before
    }
}

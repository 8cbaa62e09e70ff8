//! FIFO queue of undismissed interest notifications

use std::collections::VecDeque;

use crate::models::NotificationId;

use super::format::DisplayNotification;

/// Ordered set of currently undismissed notifications.
///
/// The head is the entry eligible for display and is always the
/// earliest-arrived entry still present. [`replace_all`] mirrors the
/// server's unread set wholesale; [`dismiss`] removes one entry wherever it
/// sits, promoting the next arrival when the head goes.
///
/// [`replace_all`]: NotificationQueue::replace_all
/// [`dismiss`]: NotificationQueue::dismiss
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: VecDeque<DisplayNotification>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The notification currently eligible for display.
    #[must_use]
    pub fn head(&self) -> Option<&DisplayNotification> {
        self.entries.front()
    }

    /// Whether any notification is pending display.
    #[must_use]
    pub fn is_displaying(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Replaces the whole queue with the server's current unread set.
    ///
    /// The incoming order is authoritative; nothing of the previous queue
    /// survives.
    pub fn replace_all(&mut self, entries: Vec<DisplayNotification>) {
        self.entries = entries.into();
    }

    /// Removes `id` from the queue and returns the removed entry.
    ///
    /// Dismissing a non-head entry leaves the head unchanged.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<DisplayNotification> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        self.entries.remove(position)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::models::Notification;
    use crate::notifications::format_notification;

    use super::*;

    fn entry(id: i64, name: &str) -> DisplayNotification {
        format_notification(&Notification {
            id: NotificationId::new(id),
            read: false,
            data: format!(r#"{{"nombre": "{name}"}}"#),
            created_at: None,
        })
    }

    #[test]
    fn new_queue_is_empty() {
        let queue = NotificationQueue::new();
        assert!(!queue.is_displaying());
        assert_eq!(queue.head(), None);
    }

    #[test]
    fn head_is_earliest_arrival() {
        let mut queue = NotificationQueue::new();
        queue.replace_all(vec![entry(1, "Ana"), entry(2, "Beto"), entry(3, "Carla")]);

        assert!(queue.is_displaying());
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(1)));
    }

    #[test]
    fn dismissing_head_promotes_next_arrival() {
        let mut queue = NotificationQueue::new();
        queue.replace_all(vec![entry(1, "Ana"), entry(2, "Beto")]);

        let removed = queue.dismiss(NotificationId::new(1)).unwrap();
        assert_eq!(removed.id, NotificationId::new(1));
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(2)));
    }

    #[test]
    fn dismissing_non_head_keeps_head() {
        let mut queue = NotificationQueue::new();
        queue.replace_all(vec![entry(1, "Ana"), entry(2, "Beto"), entry(3, "Carla")]);

        queue.dismiss(NotificationId::new(2)).unwrap();
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(1)));

        // the dismissed entry is gone: the head skips straight to the third
        queue.dismiss(NotificationId::new(1)).unwrap();
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(3)));
    }

    #[test]
    fn dismissing_unknown_id_is_noop() {
        let mut queue = NotificationQueue::new();
        queue.replace_all(vec![entry(1, "Ana")]);

        assert_eq!(queue.dismiss(NotificationId::new(99)), None);
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(1)));
    }

    #[test]
    fn replace_all_is_authoritative() {
        let mut queue = NotificationQueue::new();
        queue.replace_all(vec![entry(1, "Ana"), entry(2, "Beto")]);
        queue.dismiss(NotificationId::new(1));

        queue.replace_all(vec![entry(4, "Dora"), entry(5, "Elena")]);
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(4)));

        queue.replace_all(Vec::new());
        assert!(!queue.is_displaying());
    }

    #[test]
    fn queue_drains_in_arrival_order() {
        let mut queue = NotificationQueue::new();
        queue.replace_all(vec![entry(1, "Ana"), entry(2, "Beto")]);

        queue.dismiss(NotificationId::new(1)).unwrap();
        assert_eq!(queue.head().map(|n| n.id), Some(NotificationId::new(2)));

        queue.dismiss(NotificationId::new(2)).unwrap();
        assert_eq!(queue.head(), None);
        assert!(!queue.is_displaying());
    }
}

//! User notifications and the derivations the header bell needs.

use serde::Deserialize;

/// A notification shown in the notifications screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    /// The ID of the notification. IDs increase with creation order.
    pub id: i64,
    /// The headline, e.g. "Budget Alert".
    pub title: String,
    /// The body text.
    #[serde(default)]
    pub message: String,
    /// The severity tag assigned by the backend, e.g. "warning".
    #[serde(default)]
    pub notification_type: String,
    /// Whether the user has opened the notification.
    #[serde(default)]
    pub is_read: bool,
}

/// The number of unread notifications, for the bell badge.
pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Whether any unread notification arrived after the one the user last saw.
///
/// `last_seen_id` of zero means the user has never opened the list.
pub fn has_new_notifications(notifications: &[Notification], last_seen_id: i64) -> bool {
    notifications
        .iter()
        .any(|n| !n.is_read && n.id > last_seen_id)
}

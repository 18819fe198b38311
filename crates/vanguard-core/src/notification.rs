//! Notification list shown in the shade

use chrono::{DateTime, Local};

use crate::app_id::AppId;
use crate::settings::SettingsView;

/// Accent colour hint for a notification icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationTint {
    Cyan,
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub icon: &'static str,
    pub tint: NotificationTint,
    pub timestamp: DateTime<Local>,
    /// App opened when the notification is activated
    pub target_app: Option<AppId>,
    /// Settings page to deep-link into when `target_app` is Settings
    pub target_view: Option<SettingsView>,
}

impl Notification {
    /// Relative age in the shade's compact form
    pub fn time_ago(&self, now: DateTime<Local>) -> String {
        let seconds = (now - self.timestamp).num_seconds().max(0);
        if seconds < 60 {
            return "Now".to_string();
        }
        let minutes = seconds / 60;
        if minutes < 60 {
            return format!("{minutes}m ago");
        }
        let hours = minutes / 60;
        if hours < 24 {
            return format!("{hours}h ago");
        }
        format!("{}d ago", hours / 24)
    }
}

/// Input for [`NotificationCenter::push`]
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub icon: &'static str,
    pub tint: NotificationTint,
    pub target_app: Option<AppId>,
    pub target_view: Option<SettingsView>,
}

impl NewNotification {
    /// The "system update available" notice raised shortly after first start
    pub fn system_update() -> Self {
        Self {
            title: "System Update".to_string(),
            message: "VanguardOS 9 is now available.".to_string(),
            icon: "cloud-arrow-down",
            tint: NotificationTint::Cyan,
            target_app: Some(AppId::AppUpdates),
            target_view: None,
        }
    }
}

/// Ordered notification list, newest first
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert at the front and return the assigned id
    pub fn push(&mut self, new: NewNotification, timestamp: DateTime<Local>) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.items.insert(
            0,
            Notification {
                id,
                title: new.title,
                message: new.message,
                icon: new.icon,
                tint: new.tint,
                timestamp,
                target_app: new.target_app,
                target_view: new.target_view,
            },
        );
        id
    }

    /// Remove exactly the notification with `id`; false if absent
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(title: &str) -> NewNotification {
        NewNotification {
            title: title.to_string(),
            message: String::new(),
            icon: "bell",
            tint: NotificationTint::Green,
            target_app: None,
            target_view: None,
        }
    }

    #[test]
    fn test_push_is_newest_first() {
        let mut center = NotificationCenter::new();
        let now = Local::now();
        let a = center.push(sample("a"), now);
        let b = center.push(sample("b"), now);
        assert_ne!(a, b);
        assert_eq!(center.items()[0].title, "b");
        assert_eq!(center.items()[1].title, "a");
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut center = NotificationCenter::new();
        let now = Local::now();
        let a = center.push(sample("a"), now);
        let b = center.push(sample("b"), now);
        let c = center.push(sample("c"), now);

        assert!(center.dismiss(b));
        assert_eq!(center.len(), 2);
        assert!(center.get(a).is_some());
        assert!(center.get(c).is_some());
        assert!(!center.dismiss(b));
    }

    #[test]
    fn test_clear_all() {
        let mut center = NotificationCenter::new();
        center.push(sample("a"), Local::now());
        center.push(NewNotification::system_update(), Local::now());
        center.clear_all();
        assert!(center.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut center = NotificationCenter::new();
        let a = center.push(sample("a"), Local::now());
        center.clear_all();
        let b = center.push(sample("b"), Local::now());
        assert!(b > a);
    }

    #[test]
    fn test_default_center_starts_at_one() {
        let mut center = NotificationCenter::default();
        assert_eq!(center.push(sample("a"), Local::now()), 1);
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Local::now();
        let mut n = NotificationCenter::new();
        n.push(sample("x"), now);
        let mut item = n.items()[0].clone();

        assert_eq!(item.time_ago(now), "Now");
        item.timestamp = now - Duration::seconds(59);
        assert_eq!(item.time_ago(now), "Now");
        item.timestamp = now - Duration::minutes(5);
        assert_eq!(item.time_ago(now), "5m ago");
        item.timestamp = now - Duration::hours(3);
        assert_eq!(item.time_ago(now), "3h ago");
        item.timestamp = now - Duration::days(2);
        assert_eq!(item.time_ago(now), "2d ago");
    }

    #[test]
    fn test_system_update_targets_updates_app() {
        let n = NewNotification::system_update();
        assert_eq!(n.target_app, Some(AppId::AppUpdates));
        assert_eq!(n.title, "System Update");
    }
}

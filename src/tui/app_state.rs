//! Application state for the dashboard TUI.
//!
//! [`AppState`] is the single source of truth for everything the dashboard
//! draws. Each transcript reload replaces the derived [`Snapshot`] wholesale
//! via [`AppState::apply_snapshot`]; the user-owned bits (selection, read and
//! dismissed notifications, active tab) survive reloads.

use chrono::{DateTime, Utc};

use crate::dashboard::Snapshot;
use crate::dashboard::notifications::{NotificationCenter, NotificationFilter, SwarmNotification};
use crate::dashboard::templates::{self, SwarmTemplate};

/// Index of the Swarm tab.
pub const TAB_SWARM: usize = 0;
/// Index of the Notifications tab.
pub const TAB_NOTIFICATIONS: usize = 1;
/// Index of the Templates tab.
pub const TAB_TEMPLATES: usize = 2;
/// Number of tabs.
pub const TAB_COUNT: usize = 3;

/// All TUI-visible state.
pub struct AppState {
    /// Display name of the watched transcript.
    pub source: String,
    /// Latest successfully derived snapshot.
    pub snapshot: Snapshot,
    pub notifications: NotificationCenter,
    pub notification_filter: NotificationFilter,
    /// Index into the visible (filtered) notification list.
    pub selected_notification: usize,
    /// Index into the template catalog.
    pub selected_template: usize,
    pub active_tab: usize,
    /// Wall clock at the last render tick, used for relative times.
    pub now: DateTime<Utc>,
    /// When the current snapshot was derived.
    pub last_refresh: Option<DateTime<Utc>>,
    /// Error from the most recent reload, cleared by the next good one.
    pub load_error: Option<String>,
    /// Set by the `r` key; the runner reloads and clears it.
    pub refresh_requested: bool,
    /// True after the first 'q' press; a second 'q' or 'y' confirms quit.
    pub quit_pending: bool,
}

impl AppState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            snapshot: Snapshot::default(),
            notifications: NotificationCenter::new(),
            notification_filter: NotificationFilter::All,
            selected_notification: 0,
            selected_template: 0,
            active_tab: TAB_SWARM,
            now: Utc::now(),
            last_refresh: None,
            load_error: None,
            refresh_requested: false,
            quit_pending: false,
        }
    }

    /// Install a freshly derived snapshot.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot, derived_at: DateTime<Utc>) {
        self.notifications.sync(snapshot.notifications.clone());
        self.snapshot = snapshot;
        self.last_refresh = Some(derived_at);
        self.load_error = None;
        self.clamp_selection();
    }

    /// Record a failed reload. The previous snapshot stays on screen.
    pub fn record_load_error(&mut self, message: String) {
        self.load_error = Some(message);
    }

    /// Notifications shown under the current filter, newest first.
    pub fn visible_notifications(&self) -> Vec<&SwarmNotification> {
        self.notifications.visible(self.notification_filter)
    }

    pub fn selected_template(&self) -> Option<&'static SwarmTemplate> {
        templates::catalog().get(self.selected_template)
    }

    /// Move the selection of the active tab's list down.
    pub fn select_next(&mut self) {
        match self.active_tab {
            TAB_NOTIFICATIONS => {
                let len = self.visible_notifications().len();
                self.selected_notification = step_down(self.selected_notification, len);
            }
            TAB_TEMPLATES => {
                let len = templates::catalog().len();
                self.selected_template = step_down(self.selected_template, len);
            }
            _ => {}
        }
    }

    /// Move the selection of the active tab's list up.
    pub fn select_previous(&mut self) {
        match self.active_tab {
            TAB_NOTIFICATIONS => {
                self.selected_notification = self.selected_notification.saturating_sub(1);
            }
            TAB_TEMPLATES => {
                self.selected_template = self.selected_template.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn mark_selected_read(&mut self) {
        if let Some(id) = self.selected_notification_id() {
            self.notifications.mark_as_read(&id);
            self.clamp_selection();
        }
    }

    pub fn mark_all_read(&mut self) {
        self.notifications.mark_all_as_read();
        self.clamp_selection();
    }

    pub fn dismiss_selected(&mut self) {
        if let Some(id) = self.selected_notification_id() {
            self.notifications.dismiss(&id);
            self.clamp_selection();
        }
    }

    pub fn dismiss_all(&mut self) {
        self.notifications.dismiss_all();
        self.clamp_selection();
    }

    pub fn toggle_notification_filter(&mut self) {
        self.notification_filter = self.notification_filter.toggle();
        self.selected_notification = 0;
    }

    fn selected_notification_id(&self) -> Option<String> {
        self.visible_notifications()
            .get(self.selected_notification)
            .map(|n| n.id.clone())
    }

    /// Keep the notification selection inside the visible list.
    fn clamp_selection(&mut self) {
        let len = self.visible_notifications().len();
        self.selected_notification = self.selected_notification.min(len.saturating_sub(1));
    }
}

fn step_down(current: usize, len: usize) -> usize {
    current.saturating_add(1).min(len.saturating_sub(1))
}

//! # Notifications Widget
//!
//! Toast system built on egui-notify. Action handlers queue notifications in
//! app state; the frame loop drains them into toasts here.

use crate::app::NotifyLevel;
use egui_notify::Toasts;

/// Notification manager for the application
pub struct NotificationManager {
    toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one toast at the given severity.
    pub fn push(&mut self, level: NotifyLevel, message: String) {
        match level {
            NotifyLevel::Success => {
                self.toasts.success(message);
            }
            NotifyLevel::Error => {
                self.toasts.error(message);
            }
            NotifyLevel::Warning => {
                self.toasts.warning(message);
            }
            NotifyLevel::Info => {
                self.toasts.info(message);
            }
        }
    }

    /// Render pending toasts; call once per frame.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

//! Notifier that renders notifications as log events.

use crate::task::ports::{Notification, NotificationLevel, Notifier};
use tracing::{info, warn};

/// Emits each notification through `tracing`.
///
/// Errors are logged at `WARN`; successes and information at `INFO`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                warn!(notification = %notification.message, "task action failed");
            }
            NotificationLevel::Success | NotificationLevel::Info => {
                info!(notification = %notification.message, "task notification");
            }
        }
    }
}

use crate::domain::ports::Notifier;

/// Sends cart notifications to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(target: "storefront::notify", "{}", message);
    }
}

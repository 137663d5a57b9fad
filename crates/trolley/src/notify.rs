//! User-facing error notices.
//!
//! Failed operations surface a short human-readable notice in addition to
//! the typed error returned to the caller. The [`Notifier`] trait is the
//! sink for those notices; implementations decide how to present them
//! (toast, log line, test recorder).

/// Notice shown when a requested quantity exceeds available stock.
pub const NOTICE_OUT_OF_STOCK: &str = "Requested quantity is out of stock";

/// Notice shown when adding a product fails for any other reason.
pub const NOTICE_ADD_FAILED: &str = "Failed to add product";

/// Notice shown when removing a product fails.
pub const NOTICE_REMOVE_FAILED: &str = "Failed to remove product";

/// Notice shown when changing a product's quantity fails.
pub const NOTICE_UPDATE_FAILED: &str = "Failed to update product amount";

/// Sink for user-facing error notices.
///
/// Notices are fire-and-forget: implementations must not fail, and the
/// cart never inspects a result.
pub trait Notifier: Send + Sync {
    /// Present an error notice to the user.
    fn notify_error(&self, message: &str);
}

/// Notifier that emits notices as tracing events.
///
/// A reasonable default sink when no UI layer is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

//! Collaborators the view layer calls out to.
//!
//! The stores never show messages or change pages themselves. The
//! [`Storefront`](crate::Storefront) reports outcomes through a [`Notifier`]
//! and moves the viewer with a [`Navigator`]; both are fire-and-forget.

use std::fmt;
use std::sync::Mutex;

use lacapke_core::ProductId;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A transient message for the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub description: String,
}

impl Notification {
    /// Build a success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Build an error notification.
    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Displays notifications. No return value is expected.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Views the storefront can send the viewer to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Menu,
    Cart,
    Product(ProductId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Menu => f.write_str("/menu"),
            Self::Cart => f.write_str("/cart"),
            Self::Product(id) => write!(f, "/product/{id}"),
        }
    }
}

/// Moves the viewer to another view.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Notifier that writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            Level::Success => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            Level::Error => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
        }
    }
}

/// Navigator that only logs the requested route.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "Navigate");
    }
}

/// Notifier and navigator that record every call, for tests and previews.
#[derive(Debug, Default)]
pub struct Recorder {
    notifications: Mutex<Vec<Notification>>,
    routes: Mutex<Vec<Route>>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Routes requested so far.
    #[must_use]
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Notifier for Recorder {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}

impl Navigator for Recorder {
    fn navigate(&self, route: Route) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}

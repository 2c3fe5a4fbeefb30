//! Local login state.
//!
//! "Logging in" only records a username and a role flag in the local store.
//! There is no password and no server check; the flag exists to show or hide
//! the editing UI.

use std::sync::Arc;

use lacapke_core::Role;
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, keys};

/// Stored identity of the local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    /// Whether this user may edit the catalog.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.can_edit()
    }
}

/// Reads and writes the [`CurrentUser`] under [`keys::CURRENT_USER`].
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn KeyValueStore>,
    admin_username: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("admin_username", &self.admin_username)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session; logging in as `admin_username` grants [`Role::Admin`].
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, admin_username: impl Into<String>) -> Self {
        Self {
            storage,
            admin_username: admin_username.into(),
        }
    }

    /// The logged-in user, if any. Unreadable data reads as logged out.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        let raw = match self.storage.get(keys::CURRENT_USER) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read current user");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| tracing::warn!(error = %e, "Failed to parse current user"))
            .ok()
    }

    /// Role of the current user; [`Role::Visitor`] when logged out.
    #[must_use]
    pub fn role(&self) -> Role {
        self.current_user().map(|user| user.role).unwrap_or_default()
    }

    /// Whether catalog editing is unlocked.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().can_edit()
    }

    /// Record `username` as the current user.
    ///
    /// Returns `None` for a blank username.
    pub fn login(&self, username: &str) -> Option<CurrentUser> {
        let username = username.trim();
        if username.is_empty() {
            return None;
        }

        let role = if username == self.admin_username {
            Role::Admin
        } else {
            Role::Visitor
        };
        let user = CurrentUser {
            username: username.to_string(),
            role,
        };

        match serde_json::to_string(&user) {
            Ok(json) => {
                if let Err(e) = self.storage.set(keys::CURRENT_USER, &json) {
                    tracing::warn!(error = %e, "Failed to persist current user");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize current user"),
        }
        tracing::info!(username = %user.username, ?role, "Logged in");
        Some(user)
    }

    /// Forget the current user.
    pub fn logout(&self) {
        if let Err(e) = self.storage.remove(keys::CURRENT_USER) {
            tracing::warn!(error = %e, "Failed to clear current user");
        }
        tracing::info!("Logged out");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session() -> Session {
        Session::new(Arc::new(MemoryStorage::new()), "Admin1")
    }

    #[test]
    fn test_admin_login() {
        let session = session();
        let user = session.login("Admin1").unwrap();
        assert!(user.is_admin());
        assert!(session.is_admin());
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn test_visitor_login() {
        let session = session();
        let user = session.login("  maria ").unwrap();
        assert_eq!(user.username, "maria");
        assert_eq!(user.role, Role::Visitor);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_username_match_is_exact() {
        let session = session();
        assert_eq!(session.login("admin1").unwrap().role, Role::Visitor);
    }

    #[test]
    fn test_blank_login_rejected() {
        let session = session();
        assert!(session.login("   ").is_none());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_logout() {
        let session = session();
        session.login("Admin1");
        session.logout();
        assert!(session.current_user().is_none());
        assert_eq!(session.role(), Role::Visitor);
    }

    #[test]
    fn test_corrupt_user_reads_logged_out() {
        let storage = Arc::new(MemoryStorage::with_entries([(keys::CURRENT_USER, "admin")]));
        let session = Session::new(storage, "Admin1");
        assert!(session.current_user().is_none());
    }
}

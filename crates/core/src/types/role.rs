//! Local role flag.

use serde::{Deserialize, Serialize};

/// What the current browser session is allowed to do.
///
/// This is a UI switch, not an authorization boundary: anyone with access to
/// the local store can flip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Visitor,
    Admin,
}

impl Role {
    /// Whether catalog editing is unlocked.
    #[must_use]
    pub const fn can_edit(self) -> bool {
        matches!(self, Self::Admin)
    }
}

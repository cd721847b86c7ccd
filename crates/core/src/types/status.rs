//! Status enums for client-side state.

use serde::{Deserialize, Serialize};

/// Loading indicator for a resource collection.
///
/// `Idle` means the collection has never been fetched. Every remote
/// operation moves the indicator to `Pending`, then to `Succeeded` or
/// `Failed` once the call resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl LoadStatus {
    /// Whether a remote call is in flight.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

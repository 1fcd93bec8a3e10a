//! Query filters for sending-status lookups.

use serde::{Deserialize, Serialize};

/// Filter on the `is_seen` flag of sending statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeenFilter {
    /// Only statuses the user has not seen yet.
    Unseen,
    /// Only statuses the user has already seen.
    Seen,
    /// Both seen and unseen statuses.
    All,
}

impl SeenFilter {
    /// Whether a status with the given `is_seen` flag passes this filter.
    pub fn matches(self, is_seen: bool) -> bool {
        match self {
            Self::Unseen => !is_seen,
            Self::Seen => is_seen,
            Self::All => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(SeenFilter::Unseen.matches(false));
        assert!(!SeenFilter::Unseen.matches(true));
        assert!(SeenFilter::Seen.matches(true));
        assert!(!SeenFilter::Seen.matches(false));
        assert!(SeenFilter::All.matches(true));
        assert!(SeenFilter::All.matches(false));
    }
}

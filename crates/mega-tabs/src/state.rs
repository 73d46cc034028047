//! Tab State Machine
//!
//! ```text
//! Created
//!   ↓ load
//! Navigating  ←──┐
//!   ↓ finished   │ load / location change
//! Loaded ────────┘
//!
//! any live state ──close──→ Closed (terminal)
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Engine exists, nothing requested yet
    Created,
    /// A load is in flight
    Navigating,
    /// Last load finished
    Loaded,
    /// Engine released, tab removed
    Closed,
}

impl TabState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: TabState) -> bool {
        match (self, target) {
            // Nothing leaves Closed, not even Closed itself
            (TabState::Closed, _) => false,
            (_, TabState::Closed) => true,
            (TabState::Created, TabState::Navigating) => true,
            (TabState::Navigating, TabState::Loaded) => true,
            (TabState::Loaded, TabState::Navigating) => true,
            // A new load while one is in flight
            (TabState::Navigating, TabState::Navigating) => true,
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TabState::Closed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, TabState::Navigating)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabState::Created => "created",
            TabState::Navigating => "navigating",
            TabState::Loaded => "loaded",
            TabState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TabState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "created" => Ok(TabState::Created),
            "navigating" => Ok(TabState::Navigating),
            "loaded" => Ok(TabState::Loaded),
            "closed" => Ok(TabState::Closed),
            _ => Err(format!("Unknown tab state: {}", s)),
        }
    }
}

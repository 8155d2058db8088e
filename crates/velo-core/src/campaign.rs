//! Campaign phase model
//!
//! The challenge campaign runs inside a fixed window. Navigation gating only
//! cares which side of the window "now" falls on, so the window collapses to
//! a tri-state [`CampaignPhase`] derived fresh on every navigation attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the current instant falls relative to the campaign window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignPhase {
    /// The campaign has not started yet
    Before,
    /// The current instant is inside the active window
    Active,
    /// The campaign window has closed
    After,
}

impl CampaignPhase {
    /// Check if the campaign is currently accepting activity
    pub fn is_active(&self) -> bool {
        matches!(self, CampaignPhase::Active)
    }
}

/// The campaign's active window
///
/// Start is inclusive, end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignWindow {
    /// First instant of the active window
    pub starts_at: DateTime<Utc>,
    /// First instant after the active window
    pub ends_at: DateTime<Utc>,
}

impl CampaignWindow {
    /// Create a window from its bounds
    pub fn new(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self { starts_at, ends_at }
    }

    /// Derive the campaign phase at the given instant
    pub fn phase_at(&self, now: DateTime<Utc>) -> CampaignPhase {
        if now < self.starts_at {
            CampaignPhase::Before
        } else if now < self.ends_at {
            CampaignPhase::Active
        } else {
            CampaignPhase::After
        }
    }
}

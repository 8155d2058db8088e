//! Navigation state and guard decision types

use serde::{Deserialize, Serialize};
use velo_core::{CampaignPhase, RouteKey};

/// Session and campaign state for one navigation attempt
///
/// Derived fresh per attempt from data owned by external collaborators; the
/// guard never persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// User holds a valid session
    pub is_authenticated: bool,
    /// The session's email address has been verified
    pub is_email_verified: bool,
    /// Which side of the campaign window the current instant falls on
    pub campaign_phase: CampaignPhase,
    /// The user finished the multi-step challenge registration
    pub is_registration_complete: bool,
    /// Symbolic name of the requested route
    pub target_route: String,
}

impl NavigationState {
    /// State for an anonymous visitor requesting the given route
    pub fn anonymous(target_route: impl Into<String>) -> Self {
        Self {
            is_authenticated: false,
            is_email_verified: false,
            campaign_phase: CampaignPhase::Before,
            is_registration_complete: false,
            target_route: target_route.into(),
        }
    }
}

/// Outcome of a guard evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Let the route transition commit
    Allow,
    /// Cancel the transition and navigate to the given route instead
    RedirectTo(RouteKey),
}

impl Decision {
    /// Check if the transition may proceed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Get the redirect target, if any
    pub fn redirect_target(&self) -> Option<RouteKey> {
        match self {
            Decision::Allow => None,
            Decision::RedirectTo(key) => Some(*key),
        }
    }
}

/// How the guard treats registry misses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardMode {
    /// Unknown route names are fatal; surface the error to the caller
    #[default]
    Development,
    /// Unknown route names are logged and denied with a login redirect
    Production,
}

/// Guard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Registry-miss handling mode
    pub mode: GuardMode,
}

impl GuardConfig {
    /// Configuration for production deployments
    pub fn production() -> Self {
        Self {
            mode: GuardMode::Production,
        }
    }
}

//! Navigation Guard Policy
//!
//! Evaluates the redirect matrix before every route transition. Rules are
//! checked in priority order and the first match wins:
//!
//! 1. Entry points (login/register) redirect home for a fully set-up user.
//! 2. An unverified email redirects to the verification page from anywhere
//!    except the verification page itself and logout.
//! 3. Campaign-gated routes redirect to the inactive-challenge page while
//!    the campaign window is closed.
//! 4. Post-registration routes redirect to challenge registration until the
//!    registration is complete.
//! 5. Authenticated-only routes redirect anonymous visitors to login.
//! 6. Anything else is allowed.
//!
//! Verification gates everything below it: an unverified account must not
//! reach any further-gated state. Campaign-activity gating precedes
//! registration-completeness gating because registration cannot usefully
//! proceed while the window is closed.

use crate::state::{Decision, GuardConfig, GuardMode, NavigationState};
use tracing::{debug, error};
use velo_core::{CampaignPhase, RouteEntry, RouteKey, RouteRegistry, VeloResult};

/// Guard that authorizes route transitions against session and campaign state
#[derive(Debug, Clone)]
pub struct NavigationGuardPolicy {
    /// The route registry to consult
    registry: RouteRegistry,
    config: GuardConfig,
}

impl NavigationGuardPolicy {
    /// Create a guard over the given registry
    pub fn new(registry: RouteRegistry, config: GuardConfig) -> Self {
        Self { registry, config }
    }

    /// Create a guard over the standard registry in development mode
    pub fn with_defaults() -> Self {
        Self::new(RouteRegistry::standard().clone(), GuardConfig::default())
    }

    /// Authorize one navigation attempt
    ///
    /// Pure over its inputs: identical state yields an identical decision,
    /// and re-invocation is safe. An unknown `target_route` is a programming
    /// error; in development mode it surfaces as
    /// [`velo_core::VeloError::UnknownRoute`], in production mode it is
    /// logged and denied with a login redirect so the user never stays on a
    /// disallowed route.
    pub fn authorize(&self, state: &NavigationState) -> VeloResult<Decision> {
        let target = match self.registry.resolve(&state.target_route) {
            Ok(key) => key,
            Err(err) => match self.config.mode {
                GuardMode::Development => return Err(err),
                GuardMode::Production => {
                    error!(route = %state.target_route, %err, "registry miss, denying navigation");
                    return Ok(Decision::RedirectTo(RouteKey::Login));
                }
            },
        };

        let decision = self.evaluate(state, self.registry.get(target));
        debug!(route = %target, ?decision, "navigation guard decision");
        Ok(decision)
    }

    /// Check if a navigation attempt may proceed
    pub fn allows(&self, state: &NavigationState) -> bool {
        matches!(self.authorize(state), Ok(Decision::Allow))
    }

    /// Get an immutable reference to the registry
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    fn evaluate(&self, state: &NavigationState, entry: &RouteEntry) -> Decision {
        let campaign_active = state.campaign_phase == CampaignPhase::Active;
        let fully_set_up = state.is_authenticated
            && state.is_email_verified
            && campaign_active
            && state.is_registration_complete;

        // 1. Entry points bounce a fully set-up user home
        if entry.entry_point && fully_set_up {
            return Decision::RedirectTo(RouteKey::Home);
        }

        // 2. Unverified email gates everything but the exempt routes
        if state.is_authenticated && !state.is_email_verified && !entry.verification_exempt {
            return Decision::RedirectTo(RouteKey::VerifyEmail);
        }

        // 3. Closed campaign window gates campaign routes, ahead of rule 4:
        //    registration cannot usefully proceed while the window is closed
        if state.is_authenticated
            && state.is_email_verified
            && !campaign_active
            && entry.campaign_gated
        {
            return Decision::RedirectTo(RouteKey::ChallengeInactive);
        }

        // 4. Incomplete challenge registration gates post-registration routes
        if state.is_authenticated
            && state.is_email_verified
            && campaign_active
            && !state.is_registration_complete
            && entry.post_registration
        {
            return Decision::RedirectTo(RouteKey::RegisterChallenge);
        }

        // 5. Anonymous visitors are sent to login for protected routes
        if !state.is_authenticated && entry.requires_auth {
            return Decision::RedirectTo(RouteKey::Login);
        }

        // 6. Nothing matched
        Decision::Allow
    }
}

impl Default for NavigationGuardPolicy {
    fn default() -> Self {
        Self::with_defaults()
    }
}

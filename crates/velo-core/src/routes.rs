//! Route registry for symbolic route names
//!
//! The registry maps a closed enumeration of route identifiers to path
//! descriptors and access-classification flags. It is built once at process
//! start and never mutated afterwards; the navigation guard consults it on
//! every navigation attempt.
//!
//! # Usage
//!
//! ```rust
//! use velo_core::{RouteKey, RouteRegistry};
//!
//! let registry = RouteRegistry::standard();
//! let entry = registry.get(RouteKey::Prizes);
//! assert_eq!(entry.path, "/prizes");
//! assert!(entry.requires_auth);
//!
//! // Symbolic names coming from outside the closed enum are fallible
//! assert_eq!(registry.resolve("prizes").unwrap(), RouteKey::Prizes);
//! assert!(registry.resolve("przies").is_err());
//! ```

use crate::errors::{VeloError, VeloResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Symbolic identifiers for every route the application exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKey {
    /// Landing page after a completed registration
    Home,
    /// Login entry point
    Login,
    /// Account registration entry point
    Register,
    /// Multi-step challenge registration
    RegisterChallenge,
    /// Email verification holding page
    VerifyEmail,
    /// Logout action route
    Logout,
    /// Holding page shown outside the campaign window
    ChallengeInactive,
    /// Logged routes list
    RoutesList,
    /// Route-logging calendar view
    RoutesCalendar,
    /// Route-logging map view
    RoutesMap,
    /// Prizes page
    Prizes,
    /// Community page
    Community,
    /// Profile details page
    Profile,
    /// Results and reporting page
    Results,
}

impl RouteKey {
    /// Get the symbolic string form of the route name
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKey::Home => "home",
            RouteKey::Login => "login",
            RouteKey::Register => "register",
            RouteKey::RegisterChallenge => "register_challenge",
            RouteKey::VerifyEmail => "verify_email",
            RouteKey::Logout => "logout",
            RouteKey::ChallengeInactive => "challenge_inactive",
            RouteKey::RoutesList => "routes",
            RouteKey::RoutesCalendar => "routes_calendar",
            RouteKey::RoutesMap => "routes_map",
            RouteKey::Prizes => "prizes",
            RouteKey::Community => "community",
            RouteKey::Profile => "profile",
            RouteKey::Results => "results",
        }
    }

    /// All route keys, in registry order
    pub fn all() -> &'static [RouteKey] {
        &[
            RouteKey::Home,
            RouteKey::Login,
            RouteKey::Register,
            RouteKey::RegisterChallenge,
            RouteKey::VerifyEmail,
            RouteKey::Logout,
            RouteKey::ChallengeInactive,
            RouteKey::RoutesList,
            RouteKey::RoutesCalendar,
            RouteKey::RoutesMap,
            RouteKey::Prizes,
            RouteKey::Community,
            RouteKey::Profile,
            RouteKey::Results,
        ]
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved nested-route descriptor under a parent entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteChild {
    /// Symbolic name of the nested route
    pub name: RouteKey,
    /// Full path of the nested route, parent prefix included
    pub full_path: &'static str,
}

/// Path descriptor and access classification for one route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// The symbolic identifier this entry describes
    pub key: RouteKey,
    /// URL path template
    pub path: &'static str,
    /// Resolved nested routes, if any
    pub children: Vec<RouteChild>,
    /// Route is only reachable by an authenticated user
    pub requires_auth: bool,
    /// Route is gated on the campaign window being active
    pub campaign_gated: bool,
    /// Route presumes a completed challenge registration
    pub post_registration: bool,
    /// Route is a login/registration entry point
    pub entry_point: bool,
    /// Route stays reachable while the user's email is unverified
    pub verification_exempt: bool,
}

impl RouteEntry {
    fn new(key: RouteKey, path: &'static str) -> Self {
        Self {
            key,
            path,
            children: Vec::new(),
            requires_auth: false,
            campaign_gated: false,
            post_registration: false,
            entry_point: false,
            verification_exempt: false,
        }
    }

    fn children(mut self, children: Vec<RouteChild>) -> Self {
        self.children = children;
        self
    }

    fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    fn campaign_gated(mut self) -> Self {
        self.campaign_gated = true;
        self
    }

    fn post_registration(mut self) -> Self {
        self.post_registration = true;
        self
    }

    fn entry_point(mut self) -> Self {
        self.entry_point = true;
        self
    }

    fn verification_exempt(mut self) -> Self {
        self.verification_exempt = true;
        self
    }
}

static STANDARD_REGISTRY: Lazy<RouteRegistry> = Lazy::new(RouteRegistry::build_standard);

/// Immutable map from route identifiers to path descriptors
///
/// Total over [`RouteKey`]: `get` never fails for a key from the closed
/// enum. String lookups via [`RouteRegistry::resolve`] are fallible and miss
/// with [`VeloError::UnknownRoute`].
#[derive(Clone)]
pub struct RouteRegistry {
    entries: HashMap<RouteKey, RouteEntry>,
    by_name: HashMap<&'static str, RouteKey>,
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::build_standard()
    }
}

impl RouteRegistry {
    /// Get the standard registry, built once per process
    pub fn standard() -> &'static RouteRegistry {
        &STANDARD_REGISTRY
    }

    fn build_standard() -> Self {
        let entries = vec![
            RouteEntry::new(RouteKey::Home, "/")
                .requires_auth()
                .post_registration(),
            RouteEntry::new(RouteKey::Login, "/login").entry_point(),
            RouteEntry::new(RouteKey::Register, "/register").entry_point(),
            RouteEntry::new(RouteKey::RegisterChallenge, "/register-challenge").requires_auth(),
            RouteEntry::new(RouteKey::VerifyEmail, "/verify-email")
                .requires_auth()
                .verification_exempt(),
            RouteEntry::new(RouteKey::Logout, "/logout")
                .requires_auth()
                .verification_exempt(),
            RouteEntry::new(RouteKey::ChallengeInactive, "/challenge-inactive").requires_auth(),
            RouteEntry::new(RouteKey::RoutesList, "/routes")
                .requires_auth()
                .campaign_gated()
                .post_registration()
                .children(vec![
                    RouteChild {
                        name: RouteKey::RoutesCalendar,
                        full_path: "/routes/calendar",
                    },
                    RouteChild {
                        name: RouteKey::RoutesMap,
                        full_path: "/routes/map",
                    },
                ]),
            RouteEntry::new(RouteKey::RoutesCalendar, "/routes/calendar")
                .requires_auth()
                .campaign_gated()
                .post_registration(),
            RouteEntry::new(RouteKey::RoutesMap, "/routes/map")
                .requires_auth()
                .campaign_gated()
                .post_registration(),
            RouteEntry::new(RouteKey::Prizes, "/prizes")
                .requires_auth()
                .campaign_gated()
                .post_registration(),
            RouteEntry::new(RouteKey::Community, "/community")
                .requires_auth()
                .campaign_gated()
                .post_registration(),
            RouteEntry::new(RouteKey::Profile, "/profile")
                .requires_auth()
                .campaign_gated()
                .post_registration(),
            RouteEntry::new(RouteKey::Results, "/results")
                .requires_auth()
                .campaign_gated()
                .post_registration(),
        ];

        let by_name = entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.key))
            .collect();
        let entries = entries.into_iter().map(|entry| (entry.key, entry)).collect();

        Self { entries, by_name }
    }

    /// Get the entry for a route key
    ///
    /// Total over the closed enum; the standard registry carries an entry
    /// for every [`RouteKey`] variant.
    pub fn get(&self, key: RouteKey) -> &RouteEntry {
        self.entries
            .get(&key)
            .unwrap_or_else(|| unreachable!("registry is total over RouteKey: {key}"))
    }

    /// Resolve a symbolic route name to its key
    ///
    /// Fails with [`VeloError::UnknownRoute`] when the name misses the
    /// registry. A miss is a programming error in the caller, not a
    /// user-facing condition.
    pub fn resolve(&self, name: &str) -> VeloResult<RouteKey> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| VeloError::unknown_route(name))
    }

    /// Check if a symbolic name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of registered routes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered route keys
    pub fn keys(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.entries.keys().copied()
    }
}

impl std::fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("route_count", &self.entries.len())
            .finish()
    }
}

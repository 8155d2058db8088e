#![forbid(unsafe_code)]
//! # Velo Guards - Navigation Gating
//!
//! The navigation guard sits in front of every route transition and decides
//! whether it may proceed or where it redirects instead. State is rebuilt
//! from the session and campaign collaborators on each attempt; the guard
//! itself keeps nothing between calls.
//!
//! ```text
//! session/campaign state ─┐
//!                         ├─► NavigationGuardPolicy::authorize ─► Decision
//! requested route name ───┘
//! ```

pub mod policy;
pub mod state;

pub use policy::NavigationGuardPolicy;
pub use state::{Decision, GuardConfig, GuardMode, NavigationState};

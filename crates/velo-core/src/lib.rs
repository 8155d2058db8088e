#![forbid(unsafe_code)]
//! # Velo Core - Decision-Core Foundation
//!
//! Foundational types shared by the Velo decision crates: the unified error
//! type, the immutable route registry consulted by the navigation guard, and
//! the campaign phase model derived from the campaign's active window.
//!
//! This crate owns no I/O. Session data, campaign dates, and price records
//! are produced by external collaborators (HTTP client, session store) and
//! only read here.

pub mod campaign;
pub mod errors;
pub mod routes;

pub use campaign::{CampaignPhase, CampaignWindow};
pub use errors::{VeloError, VeloResult};
pub use routes::{RouteChild, RouteEntry, RouteKey, RouteRegistry};

#![forbid(unsafe_code)]
//! # Velo Pricing - Current Price Level Resolution
//!
//! Price records arrive from the pricing API as a flat list: each record is
//! tagged with a category and the date it takes effect. This crate parses
//! the raw records and resolves the single currently-effective record per
//! category. Pure functions over borrowed input; the fetch itself belongs
//! to the external API client.

pub mod level;
pub mod resolver;

pub use level::{parse_price_levels, PriceCategory, PriceLevel, RawPriceLevel};
pub use resolver::{resolve_current_by_category, resolve_effective_by_category};

//! Static rule catalogues for the three pattern-based categories.
//!
//! Rules are process-wide immutable data, compiled once on first use and
//! shared by every scan. Each catalogue keeps exactly the fields its category
//! needs; see [`crate::core::finding`] for the matching finding shapes.

pub mod gas;
pub mod optimization;
pub mod security;

pub use gas::{GasRule, GAS_RULES};
pub use optimization::{OptimizationRule, OPTIMIZATION_RULES};
pub use security::{SecurityRule, SECURITY_RULES};

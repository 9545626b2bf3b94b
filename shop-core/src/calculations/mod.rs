//! Pricing calculations for the shop form.
//!
//! This module turns the raw text of the quantity fields into a validated
//! order, prices it against the fixed catalog and renders the result as the
//! text shown under the form.

pub mod common;
pub mod pricing;

pub use pricing::{InvalidReason, PricingCalculator, PricingError, TotalDisplay, calculate_total};

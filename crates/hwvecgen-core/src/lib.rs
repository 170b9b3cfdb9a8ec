#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for the HwVector type generator.
//!
//! Two pieces:
//! - `descriptor` - identifier parsing and derived type facts
//! - `ops` - the static operator catalogue every concrete type exposes

pub mod descriptor;
pub mod ops;

#[cfg(test)]
mod descriptor_tests;
#[cfg(test)]
mod ops_tests;

pub use descriptor::{DIMS, Descriptor, DeriveError, Dim, Shape, WIDTHS, Width};

/// Family prefix for the stock generation job.
pub const DEFAULT_FAMILY: &str = "HwVector";

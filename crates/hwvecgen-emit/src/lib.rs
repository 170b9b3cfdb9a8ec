#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Declaration rendering for the HwVector wrapper-type family.
//!
//! Combines a descriptor with the operator catalogue and assembles the final
//! declaration text. Pure text assembly: no file system access, no state
//! shared between renderings.

mod config;
mod render;
mod unit;


pub use config::Config;
pub use render::Renderer;
pub use unit::{render_all, render_unit, unit_file_name};

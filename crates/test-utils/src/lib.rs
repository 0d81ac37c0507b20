//! Shared test utilities for the artmesh workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic image fixtures written to temporary directories
//! - Height-field and grid data generators
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{write_gradient_png, gradient_grid};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

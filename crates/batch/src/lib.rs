//! Batch cube generation.
//!
//! Applies the cube generator across a list of images with best-effort
//! semantics: each item is processed independently, a failure is
//! recorded and excluded without aborting the batch, and successes keep
//! their input order. Items share no mutable state, so the parallel
//! mode is a drop-in replacement for the sequential one.

mod coordinator;

// Re-exports
pub use coordinator::{
    batch_create_cubes, BatchCoordinator, BatchFailure, BatchReport, CancellationToken,
};

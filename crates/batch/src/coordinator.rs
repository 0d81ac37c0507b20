//! Batch coordination over the cube generator.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use artmesh_common::{CubeResult, Diagnostics, PipelineError, TracingDiagnostics};
use cube_gen::{CubeGenerator, CubeOptions};
use rayon::prelude::*;
use tracing::warn;

/// A single failed batch item.
#[derive(Debug)]
pub struct BatchFailure {
    /// The image that could not be processed.
    pub image: PathBuf,
    /// What went wrong.
    pub error: PipelineError,
}

/// Outcome of a batch run.
///
/// `succeeded` preserves the input order restricted to successes.
/// Failures never abort the batch; they are collected here so callers
/// can report them without re-running anything.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub succeeded: Vec<CubeResult>,
    pub failed: Vec<BatchFailure>,
    /// Items skipped because the batch was cancelled before they started.
    pub skipped: usize,
}

/// Cooperative cancellation flag shared between the caller and a
/// running batch. Checked between items; a single item's processing is
/// not interruptible mid-computation.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Items not yet started will be skipped.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Create cubes for a list of images, returning only the successes in
/// input order. Convenience wrapper over [`BatchCoordinator::run`].
pub fn batch_create_cubes(
    image_paths: &[PathBuf],
    options: &CubeOptions,
) -> Vec<CubeResult> {
    BatchCoordinator::new().run(image_paths, options).succeeded
}

/// Coordinates cube generation across many images.
pub struct BatchCoordinator {
    generator: CubeGenerator,
    cancel: CancellationToken,
}

impl BatchCoordinator {
    /// Coordinator with `tracing`-backed diagnostics and no external
    /// cancellation.
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingDiagnostics))
    }

    /// Coordinator whose generator reports through the given observer.
    pub fn with_diagnostics(diag: Arc<dyn Diagnostics>) -> Self {
        Self {
            generator: CubeGenerator::with_diagnostics(diag),
            cancel: CancellationToken::new(),
        }
    }

    /// Attach a cancellation token shared with the caller.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Process the images one at a time.
    pub fn run(&self, image_paths: &[PathBuf], options: &CubeOptions) -> BatchReport {
        let mut report = BatchReport::default();

        for path in image_paths {
            if self.cancel.is_cancelled() {
                report.skipped += 1;
                continue;
            }
            self.record(self.process_one(path, options), &mut report);
        }

        report
    }

    /// Process the images on the rayon thread pool.
    ///
    /// Ordering matches the sequential mode: the ordered collect keeps
    /// successes in input order regardless of completion order.
    pub fn run_parallel(&self, image_paths: &[PathBuf], options: &CubeOptions) -> BatchReport {
        let outcomes: Vec<Option<Result<CubeResult, BatchFailure>>> = image_paths
            .par_iter()
            .map(|path| {
                if self.cancel.is_cancelled() {
                    return None;
                }
                Some(self.process_one(path, options))
            })
            .collect();

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Some(result) => self.record(result, &mut report),
                None => report.skipped += 1,
            }
        }
        report
    }

    fn process_one(
        &self,
        path: &Path,
        options: &CubeOptions,
    ) -> Result<CubeResult, BatchFailure> {
        self.generator
            .create_cube(path, options)
            .map_err(|error| BatchFailure {
                image: path.to_path_buf(),
                error,
            })
    }

    fn record(&self, outcome: Result<CubeResult, BatchFailure>, report: &mut BatchReport) {
        match outcome {
            Ok(result) => report.succeeded.push(result),
            Err(failure) => {
                warn!(
                    "could not create cube for {}: {}",
                    failure.image.display(),
                    failure.error
                );
                report.failed.push(failure);
            }
        }
    }
}

impl Default for BatchCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

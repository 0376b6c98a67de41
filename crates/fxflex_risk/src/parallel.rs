//! Rayon-based scenario fan-out.
//!
//! Scenarios are independent, so they can be spread over the rayon pool in
//! batches. Results always come back in input order.

use rayon::prelude::*;
use serde::Deserialize;

/// Batch size for parallel processing.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Scenario count from which work is spread over the pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Processes items in parallel batches.
///
/// Each batch is handled by one task; the batch results are returned in
/// input order.
pub fn process_in_batches<T, R, F>(items: &[T], batch_size: usize, processor: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    items.par_chunks(batch_size.max(1)).map(processor).collect()
}

/// Parallel map preserving input order.
pub fn parallel_map<T, R, F>(items: &[T], mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(mapper).collect()
}

/// Configuration for parallel execution.
///
/// Deserialises as the `[parallel]` section of a calculation config.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParallelConfig {
    /// Whether the rayon pool is used at all
    pub enabled: bool,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
    /// Items per rayon task
    pub batch_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl ParallelConfig {
    /// Creates an enabled configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            enabled: true,
            parallel_threshold,
            batch_size: batch_size.max(1),
        }
    }

    /// A configuration that always runs on the calling thread.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        self.enabled && n_items >= self.parallel_threshold
    }

    /// Maps every item, in parallel batches when worthwhile.
    ///
    /// The output has the same length and order as `items`.
    pub fn map<T, R, F>(&self, items: &[T], mapper: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if !self.should_parallelize(items.len()) {
            return items.iter().map(mapper).collect();
        }
        let batches = process_in_batches(items, self.batch_size, |batch| {
            batch.iter().map(&mapper).collect::<Vec<R>>()
        });
        batches.into_iter().flatten().collect()
    }
}

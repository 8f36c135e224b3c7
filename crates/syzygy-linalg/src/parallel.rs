//! Parallel execution of independent row updates.
//!
//! Within one pivot step of the normal form, the updates of the rows below
//! (and above) the pivot read only the pivot row and their own entries, so
//! they can be handed to rayon's work-stealing pool. Small matrices stay
//! sequential: the pool overhead dominates below a few dozen rows.

use rayon::prelude::*;

/// Configuration for the parallel normal-form engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum number of rows touched by one pivot step before the
    /// updates run on the rayon pool.
    pub parallel_threshold: usize,
}

impl ParallelConfig {
    /// A configuration that never leaves the calling thread.
    #[must_use]
    pub const fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Returns true if a batch of `num_rows` row updates should run in
    /// parallel.
    #[must_use]
    pub fn is_parallel(&self, num_rows: usize) -> bool {
        num_rows >= self.parallel_threshold
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

/// Applies `update` to every row, on the rayon pool when the batch is large
/// enough.
pub(crate) fn for_each_row<R, F>(rows: &mut [Vec<R>], config: &ParallelConfig, update: F)
where
    R: Send,
    F: Fn(&mut Vec<R>) + Send + Sync,
{
    if config.is_parallel(rows.len()) {
        rows.par_iter_mut().for_each(update);
    } else {
        rows.iter_mut().for_each(update);
    }
}

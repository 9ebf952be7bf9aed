use std::ops::Range;
use log::{info, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};
use crate::bodies::Body;
use crate::errors::SimulationError;

/// Splits `[0, n)` into `workers` contiguous ranges.
///
/// Every range has `n / workers` elements except the last, which also takes
/// the remainder. When `n < workers` the leading ranges are empty.
///
/// # Examples
///
/// ```
/// use nbody_quadtree::simulation::partition_ranges;
///
/// assert_eq!(partition_ranges(10, 3), vec![0..3, 3..6, 6..10]);
/// assert_eq!(partition_ranges(2, 3), vec![0..0, 0..0, 0..2]);
/// ```
pub fn partition_ranges(n: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let stride = n / workers;
    (0..workers)
        .map(|w| {
            let start = w * stride;
            let end = if w + 1 == workers { n } else { start + stride };
            start..end
        })
        .collect()
}

/// A fixed-size pool of worker threads that update disjoint blocks of bodies.
///
/// Each call to [`for_each_block`](WorkerPool::for_each_block) hands one
/// contiguous block to each worker and returns only after every block is
/// done.
pub struct WorkerPool {
    pool: ThreadPool,
    workers: usize,
}

impl WorkerPool {
    /// Spawns a pool of `workers` threads.
    ///
    /// # Errors
    ///
    /// Returns an error if `workers` is zero or the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, SimulationError> {
        if workers == 0 {
            return Err(SimulationError::InvalidWorkerCount);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("nbody-worker-{}", i))
            .build()
            .map_err(|e| SimulationError::WorkerPool(e.to_string()))?;
        info!("Started worker pool with {} threads", workers);
        Ok(WorkerPool { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `task` on each block of [`partition_ranges`] in parallel.
    ///
    /// Blocks are disjoint mutable slices of `bodies`, so tasks never observe
    /// each other's writes.
    pub fn for_each_block<F>(&self, bodies: &mut [Body], task: F)
    where
        F: Fn(&mut [Body]) + Sync,
    {
        let ranges = partition_ranges(bodies.len(), self.workers);
        trace!("Dispatching {} bodies as blocks {:?}", bodies.len(), ranges);

        let mut blocks = Vec::with_capacity(ranges.len());
        let mut rest = bodies;
        for range in &ranges {
            let (block, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            blocks.push(block);
            rest = tail;
        }

        let task = &task;
        self.pool.scope(|s| {
            for block in blocks {
                if block.is_empty() {
                    continue;
                }
                s.spawn(move |_| task(block));
            }
        });
    }
}

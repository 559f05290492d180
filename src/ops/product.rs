//! Product of a range of integers.

use num_bigint::BigInt;
use num_traits::One;
use rayon::ThreadPoolBuilder;
use tracing::{debug, trace};

use crate::defs::{Error, DEFAULT_THRESHOLD};

/// Computes the product of all integers of a range using fork-join parallelism.
///
/// A range longer than the threshold is split in two halves at the midpoint,
/// the halves are multiplied concurrently, and their products are multiplied together.
/// Shorter ranges are multiplied sequentially in ascending order.
/// The threshold affects only the speed of the computation, never its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeProduct {
    threshold: usize,
    threads: Option<usize>,
}

impl RangeProduct {
    /// Create a new range product with the default threshold, running on the global thread pool.
    pub fn new() -> Self {
        RangeProduct {
            threshold: DEFAULT_THRESHOLD,
            threads: None,
        }
    }

    /// Sets the size of a range below which the product is computed sequentially.
    /// Threshold 0 has the same effect as threshold 1.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the number of worker threads. If `threads` is `None`, the global thread pool is used,
    /// otherwise a dedicated pool is created for each computation.
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Returns the threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns the number of worker threads of the dedicated pool.
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Returns the product of all integers `i` such that `start <= i <= end`.
    /// The product of an empty range is 1.
    ///
    /// ## Errors
    ///
    ///  - ThreadPool: a dedicated thread pool could not be created.
    pub fn compute(&self, start: &BigInt, end: &BigInt) -> Result<BigInt, Error> {
        let threshold = BigInt::from(self.threshold.max(1));

        match self.threads {
            Some(n) => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|_| Error::ThreadPool)?;

                debug!(threads = pool.current_num_threads(), "thread pool created");

                Ok(pool.install(|| multiply_range(start.clone(), end.clone(), &threshold)))
            }
            None => Ok(multiply_range(start.clone(), end.clone(), &threshold)),
        }
    }
}

impl Default for RangeProduct {
    fn default() -> Self {
        RangeProduct::new()
    }
}

fn multiply_range(start: BigInt, end: BigInt, threshold: &BigInt) -> BigInt {
    // Inclusive bound: with threshold 1 a range of two elements must not split again.
    if &(&end - &start) <= threshold {
        return multiply_sequential(start, &end);
    }

    let mid: BigInt = (&start + &end) >> 1u32;
    let low_end = &mid - 1u32;

    trace!(bits = end.bits(), "range split");

    let (low, high) = rayon::join(
        || multiply_range(start, low_end, threshold),
        || multiply_range(mid, end, threshold),
    );

    high * low
}

fn multiply_sequential(mut i: BigInt, end: &BigInt) -> BigInt {
    let mut product = BigInt::one();
    while &i <= end {
        product *= &i;
        i += 1u32;
    }
    product
}

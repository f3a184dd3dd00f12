/*!
 * Product Filter
 *
 * Toy data-parallel example, independent of the race: keep the products
 * under both a calorie and a carbohydrate threshold, either on the calling
 * thread or split into contiguous partitions filtered on scoped threads.
 *
 * The parallel form concatenates partition results in partition order, so
 * both forms return the same products in the same order.
 */

mod product;

pub use product::{sample_catalogue, Product};

use crate::core::limits::{FILTER_MAX_CALORIES, FILTER_MAX_CARBS, FILTER_PARTITIONS};
use std::ops::Range;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Thresholds a product must satisfy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterThresholds {
    /// Inclusive ceiling on portion calories
    pub max_calories: f64,
    /// Exclusive ceiling on carbohydrates
    pub max_carbs: f64,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            max_calories: FILTER_MAX_CALORIES,
            max_carbs: FILTER_MAX_CARBS,
        }
    }
}

impl FilterThresholds {
    #[inline]
    pub fn accepts(&self, product: &Product) -> bool {
        product.calories() <= self.max_calories && product.carbs < self.max_carbs
    }
}

/// Filter configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    pub thresholds: FilterThresholds,
    /// Worker threads for the parallel form (0 behaves like 1)
    pub partitions: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            thresholds: FilterThresholds::default(),
            partitions: FILTER_PARTITIONS,
        }
    }
}

/// Products accepted by `thresholds`, in input order
pub fn filter_products(products: &[Product], thresholds: &FilterThresholds) -> Vec<Product> {
    products
        .iter()
        .filter(|p| thresholds.accepts(p))
        .cloned()
        .collect()
}

/// Split `len` items into `min(partitions, len)` contiguous ranges
///
/// Every range gets `len / count` items; the last one also takes the
/// remainder.
pub fn partition_ranges(len: usize, partitions: usize) -> Vec<Range<usize>> {
    let count = partitions.max(1).min(len);
    if count == 0 {
        return Vec::new();
    }

    let base = len / count;
    (0..count)
        .map(|i| {
            let start = i * base;
            let end = if i + 1 == count { len } else { start + base };
            start..end
        })
        .collect()
}

/// Same result as `filter_products`, computed on `partitions` scoped threads
pub fn filter_parallel(
    products: &[Product],
    thresholds: &FilterThresholds,
    partitions: usize,
) -> Vec<Product> {
    let ranges = partition_ranges(products.len(), partitions);
    if ranges.is_empty() {
        return Vec::new();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = ranges
            .into_iter()
            .map(|range| {
                let chunk = &products[range];
                scope.spawn(move || filter_products(chunk, thresholds))
            })
            .collect();

        let mut accepted = Vec::new();
        for handle in handles {
            match handle.join() {
                Ok(part) => accepted.extend(part),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        accepted
    })
}

/// Result of a timed filter pass
#[derive(Debug, Clone)]
pub struct FilterRun {
    pub accepted: Vec<Product>,
    pub elapsed: Duration,
}

pub fn run_sequential(products: &[Product], config: &FilterConfig) -> FilterRun {
    let start = Instant::now();
    let accepted = filter_products(products, &config.thresholds);
    let elapsed = start.elapsed();
    debug!(accepted = accepted.len(), elapsed_us = elapsed.as_micros() as u64, "sequential filter");
    FilterRun { accepted, elapsed }
}

pub fn run_parallel(products: &[Product], config: &FilterConfig) -> FilterRun {
    let start = Instant::now();
    let accepted = filter_parallel(products, &config.thresholds, config.partitions);
    let elapsed = start.elapsed();
    debug!(
        accepted = accepted.len(),
        partitions = config.partitions,
        elapsed_us = elapsed.as_micros() as u64,
        "parallel filter"
    );
    FilterRun { accepted, elapsed }
}

//! Row-partitioned parallel product kernel
//!
//! The output buffer is row-major, so splitting it into one chunk per row
//! hands every rayon worker a disjoint region to write. Results are
//! identical to [`super::product`].

use dualmat_core::validation::validate_product;
use dualmat_core::{enforce, Matrix};
use rayon::prelude::*;

use super::dot;
use crate::DynamicMatrix;

/// Configuration for the parallel product kernel
#[derive(Debug, Clone)]
pub struct ProductConfig {
    /// Minimum number of output rows before work is split across threads
    pub parallel_threshold: usize,
    /// Smallest number of rows a single rayon task processes
    pub min_rows_per_task: usize,
}

impl ProductConfig {
    /// Set the output row count at which the kernel goes parallel
    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }

    /// Set the minimum rows per rayon task
    pub fn with_min_rows_per_task(mut self, rows: usize) -> Self {
        self.min_rows_per_task = rows.max(1);
        self
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn min_rows_per_task(&self) -> usize {
        self.min_rows_per_task
    }
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
            min_rows_per_task: 8,
        }
    }
}

/// Matrix product computed with one rayon task per block of output rows
///
/// Falls back to the serial kernel when the result has fewer rows than
/// `config.parallel_threshold`.
#[track_caller]
pub fn product_par<A, B>(left: &A, right: &B, config: &ProductConfig) -> DynamicMatrix<A::Element>
where
    A: Matrix + Sync + ?Sized,
    B: Matrix<Element = A::Element> + Sync + ?Sized,
{
    enforce(validate_product(left.shape(), right.shape()));

    let (height, width) = (left.height(), right.width());
    if height < config.parallel_threshold {
        log::debug!(
            "product with {height} output rows below threshold {}, running serially",
            config.parallel_threshold
        );
        return super::product(left, right);
    }

    log::trace!(
        "parallel product {}x{} * {}x{} on {} threads",
        height,
        left.width(),
        right.height(),
        width,
        rayon::current_num_threads()
    );

    let mut result = DynamicMatrix::new(height, width);
    result
        .as_mut_slice()
        .par_chunks_mut(width)
        .with_min_len(config.min_rows_per_task.max(1))
        .enumerate()
        .for_each(|(row, cells)| {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = dot(left, right, row, col);
            }
        });
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedMatrix;
    use rand::Rng;

    fn random_matrix(rng: &mut impl Rng, height: usize, width: usize) -> DynamicMatrix<i64> {
        DynamicMatrix::from_fn(height, width, |_, _| rng.gen_range(-50..50))
    }

    #[test]
    fn test_config_builder() {
        let config = ProductConfig::default()
            .with_parallel_threshold(4)
            .with_min_rows_per_task(0);
        assert_eq!(config.parallel_threshold(), 4);
        assert_eq!(config.min_rows_per_task(), 1);
    }

    #[test]
    fn test_matches_serial_product() {
        let mut rng = rand::thread_rng();
        let config = ProductConfig::default()
            .with_parallel_threshold(1)
            .with_min_rows_per_task(3);

        for _ in 0..10 {
            let m = rng.gen_range(1..40);
            let n = rng.gen_range(1..40);
            let p = rng.gen_range(1..40);
            let a = random_matrix(&mut rng, m, n);
            let b = random_matrix(&mut rng, n, p);
            assert_eq!(product_par(&a, &b, &config), super::super::product(&a, &b));
        }
    }

    #[test]
    fn test_serial_fallback() {
        let a = FixedMatrix::<i32, 2, 3>::from_slice(&[1, 2, 3, 4, 5, 6]);
        let b = FixedMatrix::<i32, 3, 2>::from_slice(&[7, 8, 9, 10, 11, 12]);
        let result = product_par(&a, &b, &ProductConfig::default());
        assert_eq!(result.as_slice(), &[58, 64, 139, 154]);
    }
}

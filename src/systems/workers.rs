//! Row-block sizing for the data-parallel passes

/// Threads available to the parallel passes (1 without the `parallel` feature)
#[cfg(feature = "parallel")]
pub fn worker_count() -> usize {
    rayon::current_num_threads().max(1)
}

#[cfg(not(feature = "parallel"))]
pub fn worker_count() -> usize {
    1
}

/// One contiguous band of rows per worker
#[inline]
pub fn rows_per_block(height: usize) -> usize {
    height.div_ceil(worker_count()).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_cover_the_height() {
        let workers = worker_count();
        assert!(workers >= 1);
        for height in [1usize, 3, 64, 257] {
            let rows = rows_per_block(height);
            assert!(rows >= 1);
            assert!(rows * workers >= height);
        }
    }
}

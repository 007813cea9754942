//! Zero-cost indexing macros for the lattice hot loops
//!
//! Streaming and bounce-back do nothing but index arithmetic on flat
//! `Vec<f32>` planes. Bounds checks are kept in debug builds so a bad
//! neighbour offset panics with a useful message, and compiled out in release.
//!
//! Usage:
//! ```rust
//! use windtunnel_engine::fast;
//!
//! let width = 4;
//! let north = vec![0.0f32, 0.1, 0.2, 0.3, 1.0, 1.1, 1.2, 1.3];
//! // Read: fast!(slice, [index])
//! let below = *fast!(north, [1 + 0 * width]);
//! assert_eq!(below, 0.1);
//!
//! let mut plane = vec![0.0f32; 8];
//! // Write: fast!(slice, [index] = value)
//! fast!(plane, [1 + 1 * width] = below);
//! assert_eq!(plane[5], 0.1);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// Callers must only pass indices derived from interior loop bounds
/// (`1..width-1`, `1..height-1`) plus a single-cell offset.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_follows_row_major_index() {
        let width = 3;
        let plane = vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
        let val = *fast!(plane, [2 + width]);
        assert_eq!(val, 5.0);
    }

    #[test]
    fn fast_write_shifts_a_value() {
        let mut plane = vec![0.0f32, 7.0, 0.0];
        let src = *fast!(plane, [1]);
        fast!(plane, [2] = src);
        assert_eq!(plane, vec![0.0, 7.0, 7.0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_bounds_check_debug() {
        let plane = vec![0.0f32; 3];
        let _ = *fast!(plane, [10]);
    }
}

//! Elementwise vector sum

use rayon::prelude::*;

/// `c[i] = a[i] + b[i]` for every index, one work-item per element.
///
/// Overflow wraps (32-bit two's complement). Callers guarantee the three
/// slices have equal length.
pub fn vector_add(a: &[i32], b: &[i32], c: &mut [i32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), c.len());

    c.par_iter_mut()
        .zip(a.par_iter().zip(b.par_iter()))
        .for_each(|(out, (x, y))| *out = x.wrapping_add(*y));
}

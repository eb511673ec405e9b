use crate::{layouts::LaneLayout, reference::word::WordMulScalar};

/// Maps `factor` to its representative in `[0, p)`.
#[inline]
pub fn mmv_reduce_factor(layout: &LaneLayout, factor: i32) -> u64 {
    (factor as i64).rem_euclid(layout.modulus() as i64) as u64
}

/// Multiplies every lane of `a` by `factor` modulo `p`.
pub fn mmv_mul_scalar_inplace<W: WordMulScalar>(layout: &LaneLayout, factor: i32, a: &mut [u64]) {
    let factor: u64 = mmv_reduce_factor(layout, factor);
    a.iter_mut()
        .for_each(|x| *x = W::word_mul_scalar(layout, factor, *x));
}

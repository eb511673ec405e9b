use crate::{layouts::LaneLayout, reference::word::{plane_fold_carry, zip_planes}};

/// Lane-wise `a + b (mod p)` on a packed word.
///
/// Plane lanes sum to at most `2p = 2^(k+1) - 2`, so a single carry fold
/// brings every lane back into `[0, p]`.
#[inline(always)]
pub fn word_add_ref(layout: &LaneLayout, a: u64, b: u64) -> u64 {
    zip_planes(layout, a, b, |x, y| plane_fold_carry(layout, x + y))
}

use crate::{
    layouts::LaneLayout,
    reference::word::{map_planes, plane_fold_carry, plane_fold_high},
};

/// Lane-wise `factor * a (mod p)` on a packed word, `factor` in `[0, p)`.
///
/// A plane lane times `factor` is below `p * (p - 1) < 2^(2k)`, which fits
/// the `2 * field_width` bits a plane lane owns. The product is folded twice:
/// high half onto low half, then the remaining carry.
#[inline(always)]
pub fn word_mul_scalar_ref(layout: &LaneLayout, factor: u64, a: u64) -> u64 {
    debug_assert!(factor < layout.modulus() as u64, "factor {factor} not reduced");
    map_planes(layout, a, |x| plane_fold_carry(layout, plane_fold_high(layout, x * factor)))
}

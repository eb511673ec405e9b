use crate::layouts::LaneLayout;

/// Returns zero if and only if `a` and `b` are lane-wise congruent modulo `p`.
///
/// Lanes `x, y` in `[0, p]` are congruent iff `x == y` or `{x, y} = {0, p}`.
/// With `t = x ^ y` that is: `t` is `0` or all-ones, and when it is all-ones
/// `x` itself is `0` or all-ones. A value is `0` or all-ones iff its `k` bits
/// are equal, i.e. iff `v ^ (v >> 1)` vanishes on bits `0..k-1` of the lane
/// (the check mask). `u = x & t` is `0` where `t` is, and `x` where `t` is
/// all-ones, so one fold of `t` and one of `u` decide the lane.
#[inline(always)]
pub fn word_diff_ref(layout: &LaneLayout, a: u64, b: u64) -> u64 {
    let t: u64 = a ^ b;
    let u: u64 = a & t;
    ((t ^ (t >> 1)) | (u ^ (u >> 1))) & layout.check_mask()
}

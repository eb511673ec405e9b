use crate::layouts::LaneLayout;

/// Folds the carry bit of every plane lane back into the lane.
///
/// Since `2^k = 1 (mod p)`, a lane `s = c * 2^k + r` with `c` in `{0, 1}` is
/// congruent to `r + c`, which lies in `[0, p]`. Every lane of `s` must be
/// below `2^(k+1)`.
#[inline(always)]
pub fn plane_fold_carry(layout: &LaneLayout, s: u64) -> u64 {
    (s & layout.plane_mask()) + ((s & layout.guard_mask()) >> layout.lane_width())
}

/// Folds the high `k` bits of every plane lane onto its low `k` bits.
///
/// Every lane of `s` must be below `2^(2k) - 2^k`; every lane of the
/// result is below `2^(k+1)` and can be finished by [`plane_fold_carry`].
#[inline(always)]
pub fn plane_fold_high(layout: &LaneLayout, s: u64) -> u64 {
    let plane: u64 = layout.plane_mask();
    (s & plane) + ((s >> layout.lane_width()) & plane)
}

/// Returns a plane holding `p` in every lane where `flag` (bit 0 of the
/// lane) is set, and `0` elsewhere.
#[inline(always)]
pub fn plane_spread(layout: &LaneLayout, flag: u64) -> u64 {
    (flag << layout.lane_width()) - flag
}

/// Applies `f` to the even and the odd plane of `a` and recombines them.
#[inline(always)]
pub fn map_planes<F>(layout: &LaneLayout, a: u64, f: F) -> u64
where
    F: Fn(u64) -> u64,
{
    let plane: u64 = layout.plane_mask();
    let shift: u32 = layout.field_width();
    f(a & plane) | (f((a >> shift) & plane) << shift)
}

/// Two-operand variant of [`map_planes`].
#[inline(always)]
pub fn zip_planes<F>(layout: &LaneLayout, a: u64, b: u64, f: F) -> u64
where
    F: Fn(u64, u64) -> u64,
{
    let plane: u64 = layout.plane_mask();
    let shift: u32 = layout.field_width();
    f(a & plane, b & plane) | (f((a >> shift) & plane, (b >> shift) & plane) << shift)
}

use crate::{
    layouts::LaneLayout,
    reference::word::{map_planes, plane_spread},
};

/// Lane-wise `-a (mod p)` on a packed word.
///
/// A non-zero lane `x < p` maps to `p - x = x ^ p`. Both representatives
/// of zero map to `0`, so unused tail lanes stay clear.
#[inline(always)]
pub fn word_negate_ref(layout: &LaneLayout, a: u64) -> u64 {
    let k: u32 = layout.lane_width();
    let plane: u64 = layout.plane_mask();
    map_planes(layout, a, |x| {
        // Bit k is set in lanes where x + p >= 2^k, i.e. x != 0.
        let nonzero: u64 = ((x + plane) >> k) & layout.plane_low_mask();
        x ^ plane_spread(layout, nonzero)
    })
}

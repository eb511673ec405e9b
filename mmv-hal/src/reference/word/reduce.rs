use crate::{
    layouts::LaneLayout,
    reference::word::{map_planes, plane_spread},
};

/// Rewrites every lane equal to `p` as `0`.
#[inline(always)]
pub fn word_reduce_ref(layout: &LaneLayout, a: u64) -> u64 {
    let k: u32 = layout.lane_width();
    map_planes(layout, a, |x| {
        // Bit k is set in lanes where x + 1 >= 2^k, i.e. x == p.
        let full: u64 = ((x + layout.plane_low_mask()) >> k) & layout.plane_low_mask();
        x ^ plane_spread(layout, full)
    })
}

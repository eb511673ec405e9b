use crate::{
    layouts::LaneLayout,
    reference::word::{WordAdd, WordDiff, WordMulScalar, WordNegate, WordReduce},
};

/// Lane-by-lane scalar kernels.
///
/// Produces the same representative as the branch-free kernels in every
/// lane, so both can be compared word for word.
pub struct WordLane {}

#[inline(always)]
fn lane_fold(layout: &LaneLayout, s: u64) -> u64 {
    let p: u64 = layout.modulus() as u64;
    (s & p) + (s >> layout.lane_width())
}

/// Rebuilds a word from `f` applied to every lane of `a` and `b`.
#[inline(always)]
fn lanewise<F>(layout: &LaneLayout, a: u64, b: u64, f: F) -> u64
where
    F: Fn(u64, u64) -> u64,
{
    let p: u64 = layout.modulus() as u64;
    let w: u32 = layout.field_width();
    (0..layout.lanes_per_word() as u32).fold(0u64, |acc, i| {
        let x: u64 = (a >> (i * w)) & p;
        let y: u64 = (b >> (i * w)) & p;
        acc | (f(x, y) << (i * w))
    })
}

pub fn word_add_lane(layout: &LaneLayout, a: u64, b: u64) -> u64 {
    lanewise(layout, a, b, |x, y| lane_fold(layout, x + y))
}

pub fn word_mul_scalar_lane(layout: &LaneLayout, factor: u64, a: u64) -> u64 {
    lanewise(layout, a, 0, |x, _| lane_fold(layout, lane_fold(layout, x * factor)))
}

pub fn word_diff_lane(layout: &LaneLayout, a: u64, b: u64) -> u64 {
    let p: u64 = layout.modulus() as u64;
    lanewise(layout, a, b, |x, y| (x % p != y % p) as u64)
}

pub fn word_negate_lane(layout: &LaneLayout, a: u64) -> u64 {
    let p: u64 = layout.modulus() as u64;
    lanewise(layout, a, 0, |x, _| (p - x) % p)
}

pub fn word_reduce_lane(layout: &LaneLayout, a: u64) -> u64 {
    let p: u64 = layout.modulus() as u64;
    lanewise(layout, a, 0, |x, _| x % p)
}

impl WordAdd for WordLane {
    #[inline(always)]
    fn word_add(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_add_lane(layout, a, b)
    }
}

impl WordMulScalar for WordLane {
    #[inline(always)]
    fn word_mul_scalar(layout: &LaneLayout, factor: u64, a: u64) -> u64 {
        word_mul_scalar_lane(layout, factor, a)
    }
}

impl WordDiff for WordLane {
    #[inline(always)]
    fn word_diff(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_diff_lane(layout, a, b)
    }
}

impl WordNegate for WordLane {
    #[inline(always)]
    fn word_negate(layout: &LaneLayout, a: u64) -> u64 {
        word_negate_lane(layout, a)
    }
}

impl WordReduce for WordLane {
    #[inline(always)]
    fn word_reduce(layout: &LaneLayout, a: u64) -> u64 {
        word_reduce_lane(layout, a)
    }
}

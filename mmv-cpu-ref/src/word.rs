use mmv_hal::{
    layouts::LaneLayout,
    reference::word::{
        WordAdd, WordDiff, WordMulScalar, WordNegate, WordReduce, word_add_lane, word_add_ref, word_diff_lane, word_diff_ref,
        word_mul_scalar_lane, word_mul_scalar_ref, word_negate_lane, word_negate_ref, word_reduce_lane, word_reduce_ref,
    },
};

use crate::{MmvLane, MmvRef};

impl WordAdd for MmvRef {
    #[inline(always)]
    fn word_add(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_add_ref(layout, a, b)
    }
}

impl WordMulScalar for MmvRef {
    #[inline(always)]
    fn word_mul_scalar(layout: &LaneLayout, factor: u64, a: u64) -> u64 {
        word_mul_scalar_ref(layout, factor, a)
    }
}

impl WordDiff for MmvRef {
    #[inline(always)]
    fn word_diff(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_diff_ref(layout, a, b)
    }
}

impl WordNegate for MmvRef {
    #[inline(always)]
    fn word_negate(layout: &LaneLayout, a: u64) -> u64 {
        word_negate_ref(layout, a)
    }
}

impl WordReduce for MmvRef {
    #[inline(always)]
    fn word_reduce(layout: &LaneLayout, a: u64) -> u64 {
        word_reduce_ref(layout, a)
    }
}

impl WordAdd for MmvLane {
    fn word_add(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_add_lane(layout, a, b)
    }
}

impl WordMulScalar for MmvLane {
    fn word_mul_scalar(layout: &LaneLayout, factor: u64, a: u64) -> u64 {
        word_mul_scalar_lane(layout, factor, a)
    }
}

impl WordDiff for MmvLane {
    fn word_diff(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_diff_lane(layout, a, b)
    }
}

impl WordNegate for MmvLane {
    fn word_negate(layout: &LaneLayout, a: u64) -> u64 {
        word_negate_lane(layout, a)
    }
}

impl WordReduce for MmvLane {
    fn word_reduce(layout: &LaneLayout, a: u64) -> u64 {
        word_reduce_lane(layout, a)
    }
}

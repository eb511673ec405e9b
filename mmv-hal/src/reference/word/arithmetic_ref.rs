use crate::{
    layouts::LaneLayout,
    reference::word::{
        WordAdd, WordDiff, WordMulScalar, WordNegate, WordReduce, word_add_ref, word_diff_ref, word_mul_scalar_ref,
        word_negate_ref, word_reduce_ref,
    },
};

pub struct WordRef {}

impl WordAdd for WordRef {
    #[inline(always)]
    fn word_add(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_add_ref(layout, a, b)
    }
}

impl WordMulScalar for WordRef {
    #[inline(always)]
    fn word_mul_scalar(layout: &LaneLayout, factor: u64, a: u64) -> u64 {
        word_mul_scalar_ref(layout, factor, a)
    }
}

impl WordDiff for WordRef {
    #[inline(always)]
    fn word_diff(layout: &LaneLayout, a: u64, b: u64) -> u64 {
        word_diff_ref(layout, a, b)
    }
}

impl WordNegate for WordRef {
    #[inline(always)]
    fn word_negate(layout: &LaneLayout, a: u64) -> u64 {
        word_negate_ref(layout, a)
    }
}

impl WordReduce for WordRef {
    #[inline(always)]
    fn word_reduce(layout: &LaneLayout, a: u64) -> u64 {
        word_reduce_ref(layout, a)
    }
}

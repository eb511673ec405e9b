use crate::{layouts::LaneLayout, reference::word::WordReduce};

/// Rewrites every lane holding `p` as `0`, leaving the unique canonical
/// representative in each lane.
pub fn mmv_reduce<W: WordReduce>(layout: &LaneLayout, a: &mut [u64]) {
    a.iter_mut().for_each(|x| *x = W::word_reduce(layout, *x));
}

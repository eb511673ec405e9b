use crate::{layouts::LaneLayout, reference::word::WordNegate};

pub fn mmv_negate_inplace<W: WordNegate>(layout: &LaneLayout, a: &mut [u64]) {
    a.iter_mut().for_each(|x| *x = W::word_negate(layout, *x));
}

use itertools::izip;

use crate::{layouts::LaneLayout, reference::word::WordAdd};

/// Adds `b` to `a` lane-wise modulo `p`.
pub fn mmv_add_inplace<W: WordAdd>(layout: &LaneLayout, a: &mut [u64], b: &[u64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }

    for (x, y) in izip!(a.iter_mut(), b.iter()) {
        *x = W::word_add(layout, *x, *y);
    }
}

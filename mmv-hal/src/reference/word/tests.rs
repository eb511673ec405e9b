use proptest::prelude::*;

use crate::{
    SUPPORTED_MODULI,
    layouts::LaneLayout,
    reference::word::{
        word_add_lane, word_add_ref, word_diff_lane, word_diff_ref, word_mul_scalar_lane, word_mul_scalar_ref, word_negate_lane,
        word_negate_ref, word_reduce_lane, word_reduce_ref,
    },
};

const MODULI: [u32; 8] = [3, 7, 15, 31, 63, 127, 255, u32::MAX];

fn pack(layout: &LaneLayout, lanes: &[u64]) -> u64 {
    lanes
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, x)| acc | (x << (i as u32 * layout.field_width())))
}

fn unpack(layout: &LaneLayout, word: u64) -> Vec<u64> {
    (0..layout.lanes_per_word() as u32)
        .map(|i| (word >> (i * layout.field_width())) & layout.modulus() as u64)
        .collect()
}

#[test]
fn word_add_mod3_scenario() {
    let layout: LaneLayout = LaneLayout::new(3).unwrap();
    let a: u64 = pack(&layout, &[2, 1, 0, 2]);
    let sum: u64 = word_add_ref(&layout, a, a);
    let prod: u64 = word_mul_scalar_ref(&layout, 2, a);
    assert_eq!(unpack(&layout, sum)[..4], [1, 2, 0, 1]);
    assert_eq!(sum, prod);
    assert_eq!(word_diff_ref(&layout, sum, prod), 0);
}

#[test]
fn word_add_mod31_wraps() {
    let layout: LaneLayout = LaneLayout::new(31).unwrap();
    let a: u64 = pack(&layout, &[30, 31, 31, 16, 0, 1, 29, 15]);
    let b: u64 = pack(&layout, &[5, 1, 31, 16, 0, 30, 2, 16]);
    assert_eq!(unpack(&layout, word_add_ref(&layout, a, b)), [4, 1, 31, 1, 0, 31, 31, 31]);
}

#[test]
fn word_kernels_every_lane_pair() {
    for p in [3u32, 7, 15, 31] {
        let layout: LaneLayout = LaneLayout::new(p).unwrap();
        let p64: u64 = p as u64;
        let lanes: usize = layout.lanes_per_word();
        for x in 0..=p64 {
            // Lane i of `b` sweeps every y in [0, p] across consecutive words.
            for start in (0..=p64).step_by(lanes) {
                let xs: Vec<u64> = vec![x; lanes];
                let ys: Vec<u64> = (0..lanes as u64).map(|i| (start + i) % (p64 + 1)).collect();
                let a: u64 = pack(&layout, &xs);
                let b: u64 = pack(&layout, &ys);

                let sum: Vec<u64> = unpack(&layout, word_add_ref(&layout, a, b));
                let neg: Vec<u64> = unpack(&layout, word_negate_ref(&layout, b));
                let red: Vec<u64> = unpack(&layout, word_reduce_ref(&layout, b));
                for i in 0..lanes {
                    assert!(sum[i] <= p64);
                    assert_eq!(sum[i] % p64, (x + ys[i]) % p64, "p={p} {x}+{}", ys[i]);
                    assert_eq!((neg[i] + ys[i]) % p64, 0, "p={p} -{}", ys[i]);
                    assert!(neg[i] < p64);
                    assert_eq!(red[i], ys[i] % p64);
                }
                assert_eq!(word_add_ref(&layout, a, b), word_add_lane(&layout, a, b));

                if x < p64 {
                    let prod: Vec<u64> = unpack(&layout, word_mul_scalar_ref(&layout, x, b));
                    for i in 0..lanes {
                        assert!(prod[i] <= p64);
                        assert_eq!(prod[i] % p64, (x * ys[i]) % p64, "p={p} {x}*{}", ys[i]);
                    }
                    assert_eq!(word_mul_scalar_ref(&layout, x, b), word_mul_scalar_lane(&layout, x, b));
                }

                let congruent: bool = (0..lanes).all(|i| x % p64 == ys[i] % p64);
                assert_eq!(word_diff_ref(&layout, a, b) == 0, congruent, "p={p} x={x} ys={ys:?}");
            }
        }
    }
}

#[test]
fn word_diff_zero_representatives() {
    for p in SUPPORTED_MODULI {
        let layout: LaneLayout = LaneLayout::new(p).unwrap();
        let zeros: u64 = 0;
        let fulls: u64 = layout.value_mask();
        assert_eq!(word_diff_ref(&layout, zeros, fulls), 0, "{layout}");
        assert_eq!(word_diff_ref(&layout, fulls, zeros), 0, "{layout}");
        assert_ne!(word_diff_ref(&layout, zeros, layout.low_mask()), 0, "{layout}");
        // x and its complement are congruent only for the two zero representatives.
        let one: u64 = 1;
        assert_ne!(word_diff_ref(&layout, one, one ^ p as u64), 0, "{layout}");
    }
}

fn layout_at(i: usize) -> LaneLayout {
    LaneLayout::new(MODULI[i]).unwrap()
}

proptest! {
    #[test]
    fn word_add_matches_lane(i in 0usize..MODULI.len(), a in any::<u64>(), b in any::<u64>()) {
        let layout: LaneLayout = layout_at(i);
        let (a, b) = (a & layout.value_mask(), b & layout.value_mask());
        prop_assert_eq!(word_add_ref(&layout, a, b), word_add_lane(&layout, a, b));
    }

    #[test]
    fn word_mul_scalar_matches_lane(i in 0usize..MODULI.len(), a in any::<u64>(), factor in any::<u64>()) {
        let layout: LaneLayout = layout_at(i);
        let a: u64 = a & layout.value_mask();
        let factor: u64 = factor % layout.modulus() as u64;
        prop_assert_eq!(word_mul_scalar_ref(&layout, factor, a), word_mul_scalar_lane(&layout, factor, a));
    }

    #[test]
    fn word_negate_reduce_match_lane(i in 0usize..MODULI.len(), a in any::<u64>()) {
        let layout: LaneLayout = layout_at(i);
        let a: u64 = a & layout.value_mask();
        prop_assert_eq!(word_negate_ref(&layout, a), word_negate_lane(&layout, a));
        prop_assert_eq!(word_reduce_ref(&layout, a), word_reduce_lane(&layout, a));
    }

    #[test]
    fn word_diff_matches_lane(i in 0usize..MODULI.len(), a in any::<u64>(), b in any::<u64>(), mix in any::<u64>()) {
        let layout: LaneLayout = layout_at(i);
        let a: u64 = a & layout.value_mask();
        // Copy part of `a` into `b` so that congruent lanes are frequent.
        let b: u64 = ((b & mix) | (a & !mix)) & layout.value_mask();
        prop_assert_eq!(word_diff_ref(&layout, a, b) == 0, word_diff_lane(&layout, a, b) == 0);
        prop_assert_eq!(word_diff_ref(&layout, a, a), 0);
        prop_assert_eq!(word_diff_ref(&layout, a, word_reduce_ref(&layout, a)), 0);
    }
}

use itertools::izip;

use crate::{
    layouts::{ComparisonResult, LaneLayout},
    reference::word::{WordDiff, WordMulScalar},
};

/// Returns `true` if every lane of `a` is congruent to the matching lane of
/// `b` modulo `p`.
///
/// Word differences are OR-ed together and tested once at the end, so the
/// running time does not depend on where (or whether) a mismatch occurs.
pub fn mmv_compare<W: WordDiff>(layout: &LaneLayout, a: &[u64], b: &[u64]) -> bool {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }

    izip!(a.iter(), b.iter()).fold(0u64, |acc, (x, y)| acc | W::word_diff(layout, *x, *y)) == 0
}

/// Tests `a` and `b` for lane-wise congruence modulo a divisor `q` of `p`.
///
/// With `p = r * q`, `x = y (mod q)` iff `r * x = r * y (mod p)`: both
/// operands are scaled by `r` word by word and compared modulo `p`.
pub fn mmv_compare_mod_q<W: WordDiff + WordMulScalar>(layout: &LaneLayout, a: &[u64], b: &[u64], q: u32) -> ComparisonResult {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), b.len());
    }

    let p: u32 = layout.modulus();

    if q == p {
        return ComparisonResult::from_equal(mmv_compare::<W>(layout, a, b));
    }

    if q == 1 {
        return ComparisonResult::Equal;
    }

    if q == 0 || p % q != 0 {
        return ComparisonResult::NotDivisible;
    }

    let scale: u64 = (p / q) as u64;

    let diff: u64 = izip!(a.iter(), b.iter()).fold(0u64, |acc, (x, y)| {
        acc | W::word_diff(
            layout,
            W::word_mul_scalar(layout, scale, *x),
            W::word_mul_scalar(layout, scale, *y),
        )
    });

    ComparisonResult::from_equal(diff == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layouts::PackedVec,
        reference::word::{WordLane, WordRef},
    };

    fn check<W: WordDiff + WordMulScalar>(p: u32, q: u32, xs: &[u32], ys: &[u32]) -> ComparisonResult {
        let layout: LaneLayout = LaneLayout::new(p).unwrap();
        let a: PackedVec<Vec<u64>> = PackedVec::from_lanes(&layout, xs);
        let b: PackedVec<Vec<u64>> = PackedVec::from_lanes(&layout, ys);
        mmv_compare_mod_q::<W>(&layout, a.raw(), b.raw(), q)
    }

    #[test]
    fn compare_mod_q_intermediate_divisors() {
        let xs: Vec<u32> = (0..40).map(|i| i % 16).collect();
        let plus3: Vec<u32> = xs.iter().map(|x| (x + 3) % 15).collect();
        let plus5: Vec<u32> = xs.iter().map(|x| (x + 5) % 15).collect();

        assert_eq!(check::<WordRef>(15, 3, &xs, &plus3), ComparisonResult::Equal);
        assert_eq!(check::<WordRef>(15, 5, &xs, &plus3), ComparisonResult::NotEqual);
        assert_eq!(check::<WordRef>(15, 5, &xs, &plus5), ComparisonResult::Equal);
        assert_eq!(check::<WordRef>(15, 3, &xs, &plus5), ComparisonResult::NotEqual);
        assert_eq!(check::<WordRef>(15, 15, &xs, &plus5), ComparisonResult::NotEqual);
        assert_eq!(check::<WordLane>(15, 3, &xs, &plus3), ComparisonResult::Equal);
        assert_eq!(check::<WordLane>(15, 5, &xs, &plus3), ComparisonResult::NotEqual);
    }

    #[test]
    fn compare_mod_q_composite_63() {
        let xs: Vec<u32> = (0..50).map(|i| (i * 11) % 64).collect();
        let plus21: Vec<u32> = xs.iter().map(|x| (x + 21) % 63).collect();
        for (q, want) in [
            (3, ComparisonResult::Equal),
            (7, ComparisonResult::Equal),
            (21, ComparisonResult::Equal),
            (9, ComparisonResult::NotEqual),
            (63, ComparisonResult::NotEqual),
            (1, ComparisonResult::Equal),
            (5, ComparisonResult::NotDivisible),
            (0, ComparisonResult::NotDivisible),
            (126, ComparisonResult::NotDivisible),
        ] {
            assert_eq!(check::<WordRef>(63, q, &xs, &plus21), want, "q={q}");
            assert_eq!(check::<WordLane>(63, q, &xs, &plus21), want, "q={q}");
        }
    }

    #[test]
    fn compare_equal_zero_representatives() {
        let layout: LaneLayout = LaneLayout::new(7).unwrap();
        let a: PackedVec<Vec<u64>> = PackedVec::from_lanes(&layout, &[0, 7, 3, 7, 0]);
        let b: PackedVec<Vec<u64>> = PackedVec::from_lanes(&layout, &[7, 0, 3, 7, 0]);
        let c: PackedVec<Vec<u64>> = PackedVec::from_lanes(&layout, &[7, 0, 4, 7, 0]);
        assert!(mmv_compare::<WordRef>(&layout, a.raw(), b.raw()));
        assert!(!mmv_compare::<WordRef>(&layout, a.raw(), c.raw()));
        assert!(mmv_compare::<WordLane>(&layout, a.raw(), b.raw()));
        assert!(!mmv_compare::<WordLane>(&layout, a.raw(), c.raw()));
    }
}

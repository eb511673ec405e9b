use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{
    MmvError,
    api::{
        MmvAddInplace, MmvCompare, MmvCompareModQ, MmvCopy, MmvMulScalarInplace, MmvNegateInplace, MmvReduce, MmvZero, ModuleNew,
    },
    layouts::{Backend, ComparisonResult, DataMut, DataRef, LaneLayout, Module, PackedVec},
    source::Source,
};

/// Lane values reduced to `[0, p)`.
fn residues<D: DataRef>(vec: &PackedVec<D>) -> Vec<u64> {
    let p: u64 = vec.layout().modulus() as u64;
    vec.to_lanes().iter().map(|x| *x as u64 % p).collect()
}

fn alloc_uniform<B: Backend>(module: &Module<B>, source: &mut Source) -> PackedVec<Vec<u64>> {
    let mut vec: PackedVec<Vec<u64>> = module.alloc_vec();
    vec.fill_uniform(source);
    vec
}

/// Rewrites every zero lane as `p` and every `p` lane as zero.
fn swap_zero_representatives<D: DataMut>(vec: &mut PackedVec<D>) {
    let p: u32 = vec.layout().modulus();
    for i in 0..vec.dimension() {
        match vec.lane_get(i).unwrap() {
            0 => vec.lane_set(i, p).unwrap(),
            x if x == p => vec.lane_set(i, 0).unwrap(),
            _ => {}
        }
    }
}

/// Divisors of `p` strictly between 1 and `p`.
fn proper_divisors(p: u32) -> Vec<u32> {
    let mut divisors: Vec<u32> = Vec::new();
    let mut d: u32 = 2;
    while (d as u64) * (d as u64) <= p as u64 {
        if p % d == 0 {
            divisors.push(d);
            if d != p / d {
                divisors.push(p / d);
            }
        }
        d += 1;
    }
    divisors
}

/// Returns a layout for a modulus different from the one of `module`.
fn foreign_layout<B: Backend>(module: &Module<B>) -> LaneLayout {
    let p: u32 = if module.modulus() == 3 { 7 } else { 3 };
    LaneLayout::new(p).unwrap()
}

pub fn test_mmv_copy<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvCopy + MmvCompare,
{
    let mut source: Source = Source::new([0u8; 32]);

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let a_digest: u64 = a.digest_u64();

    // Set res to garbage
    let mut res: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    module.mmv_copy(&mut res, &a).unwrap();

    assert_eq!(res, a);
    assert_eq!(a.digest_u64(), a_digest);
    assert!(module.mmv_compare(&res, &a).unwrap());
}

pub fn test_mmv_zero<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvZero + MmvCompare,
{
    let mut source: Source = Source::new([0u8; 32]);

    let mut res: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    module.mmv_zero(&mut res).unwrap();

    assert!(res.raw().iter().all(|x| *x == 0));
    assert!(module.mmv_compare(&res, &module.alloc_vec()).unwrap());
}

pub fn test_mmv_compare<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvCompare,
{
    let mut source: Source = Source::new([0u8; 32]);
    let p: u32 = module.modulus();

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let a_digest: u64 = a.digest_u64();
    let mut b: PackedVec<Vec<u64>> = a.clone();

    assert!(module.mmv_compare(&a, &a).unwrap());
    assert!(module.mmv_compare(&a, &b).unwrap());

    // Both representatives of zero are congruent.
    swap_zero_representatives(&mut b);
    assert!(module.mmv_compare(&a, &b).unwrap());
    assert!(module.mmv_compare(&b, &a).unwrap());

    // A single non-congruent lane anywhere is detected, in both argument orders.
    for _ in 0..16 {
        let i: usize = source.random_range(0..module.dimension());
        let x: u32 = a.lane_get(i).unwrap();
        let mut c: PackedVec<Vec<u64>> = a.clone();
        c.lane_set(i, (x % p + 1) % p).unwrap();
        assert!(!module.mmv_compare(&a, &c).unwrap(), "lane {i}");
        assert!(!module.mmv_compare(&c, &a).unwrap(), "lane {i}");
    }

    // Last lane of the vector.
    let last: usize = module.dimension() - 1;
    let x: u32 = a.lane_get(last).unwrap();
    let mut c: PackedVec<Vec<u64>> = a.clone();
    c.lane_set(last, (x % p + 1) % p).unwrap();
    assert!(!module.mmv_compare(&a, &c).unwrap());

    assert_eq!(a.digest_u64(), a_digest);
}

pub fn test_mmv_compare_mod_q<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvCompare + MmvCompareModQ,
{
    let mut source: Source = Source::new([0u8; 32]);
    let p: u32 = module.modulus();

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let b: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let a_digest: u64 = a.digest_u64();
    let b_digest: u64 = b.digest_u64();

    // q = p agrees with the full comparison.
    let full: bool = module.mmv_compare(&a, &b).unwrap();
    assert_eq!(
        module.mmv_compare_mod_q(&a, &b, p).unwrap(),
        ComparisonResult::from_equal(full)
    );
    assert_eq!(module.mmv_compare_mod_q(&a, &a, p).unwrap(), ComparisonResult::Equal);

    // Everything is congruent modulo 1.
    assert_eq!(module.mmv_compare_mod_q(&a, &b, 1).unwrap(), ComparisonResult::Equal);

    for q in [0, 2, p.saturating_add(1), p.saturating_mul(2), u32::MAX - 1] {
        if q != 0 && p % q == 0 {
            continue;
        }
        assert_eq!(
            module.mmv_compare_mod_q(&a, &b, q).unwrap(),
            ComparisonResult::NotDivisible,
            "q={q}"
        );
        assert_eq!(module.mmv_compare_mod_q(&a, &b, q).unwrap().code(), 2);
    }

    for q in proper_divisors(p) {
        // Shift every lane by a random multiple of q.
        let mut c: PackedVec<Vec<u64>> = module.alloc_vec();
        for i in 0..module.dimension() {
            let x: u64 = a.lane_get(i).unwrap() as u64;
            let t: u64 = source.random_range(0..(p / q) as u64);
            c.lane_set(i, ((x + t * q as u64) % p as u64) as u32).unwrap();
        }
        assert_eq!(module.mmv_compare_mod_q(&a, &c, q).unwrap(), ComparisonResult::Equal, "q={q}");
        assert_eq!(module.mmv_compare_mod_q(&c, &a, q).unwrap(), ComparisonResult::Equal, "q={q}");

        let i: usize = source.random_range(0..module.dimension());
        let x: u32 = c.lane_get(i).unwrap();
        c.lane_set(i, (x % p + 1) % p).unwrap();
        assert_eq!(
            module.mmv_compare_mod_q(&a, &c, q).unwrap(),
            ComparisonResult::NotEqual,
            "q={q} lane {i}"
        );
        assert_eq!(module.mmv_compare_mod_q(&a, &c, q).unwrap().code(), 1);
    }

    assert_eq!(a.digest_u64(), a_digest);
    assert_eq!(b.digest_u64(), b_digest);
}

pub fn test_mmv_add_inplace<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvAddInplace + MmvCompare + MmvCopy,
{
    let mut source: Source = Source::new([0u8; 32]);
    let p: u64 = module.modulus() as u64;

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let b: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let b_digest: u64 = b.digest_u64();

    let mut res: PackedVec<Vec<u64>> = module.alloc_vec();
    module.mmv_copy(&mut res, &a).unwrap();
    module.mmv_add_inplace(&mut res, &b).unwrap();

    let want: Vec<u64> = residues(&a)
        .iter()
        .zip(residues(&b))
        .map(|(x, y)| (x + y) % p)
        .collect();
    assert_eq!(residues(&res), want);
    assert!(res.is_well_formed());
    assert_eq!(b.digest_u64(), b_digest);

    // Commutative.
    let mut res_swap: PackedVec<Vec<u64>> = b.clone();
    module.mmv_add_inplace(&mut res_swap, &a).unwrap();
    assert!(module.mmv_compare(&res, &res_swap).unwrap());

    // Adding zero, in either representative, keeps the residues.
    let mut zero: PackedVec<Vec<u64>> = module.alloc_vec();
    let mut res_zero: PackedVec<Vec<u64>> = a.clone();
    module.mmv_add_inplace(&mut res_zero, &zero).unwrap();
    assert_eq!(res_zero, a);
    swap_zero_representatives(&mut zero);
    module.mmv_add_inplace(&mut res_zero, &zero).unwrap();
    assert!(module.mmv_compare(&res_zero, &a).unwrap());
    assert!(res_zero.is_well_formed());
}

pub fn test_mmv_mul_scalar_inplace<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvMulScalarInplace + MmvAddInplace + MmvCompare,
{
    let mut source: Source = Source::new([0u8; 32]);
    let p: u32 = module.modulus();
    let p64: u64 = p as u64;

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let zero: PackedVec<Vec<u64>> = module.alloc_vec();

    let bound: i32 = p.min(1 << 20) as i32;
    let dist: Uniform<i32> = Uniform::new_inclusive(-4 * bound, 4 * bound).unwrap();
    let mut factors: Vec<i32> = vec![0, 1, -1, 2, -2, bound - 1, bound, -bound, i32::MAX, i32::MIN];
    factors.extend((0..8).map(|_| dist.sample(&mut source)));

    for factor in factors {
        let mut res: PackedVec<Vec<u64>> = a.clone();
        module.mmv_mul_scalar_inplace(factor, &mut res).unwrap();

        let f: u64 = (factor as i64).rem_euclid(p as i64) as u64;
        let want: Vec<u64> = residues(&a).iter().map(|x| (x * f) % p64).collect();
        assert_eq!(residues(&res), want, "factor={factor}");
        assert!(res.is_well_formed(), "factor={factor}");

        if f == 0 {
            assert!(module.mmv_compare(&res, &zero).unwrap(), "factor={factor}");
        }
        if f == 1 {
            assert!(module.mmv_compare(&res, &a).unwrap(), "factor={factor}");
        }
    }

    // Doubling agrees with adding a vector to a copy of itself.
    let mut doubled: PackedVec<Vec<u64>> = a.clone();
    module.mmv_mul_scalar_inplace(2, &mut doubled).unwrap();
    let mut summed: PackedVec<Vec<u64>> = a.clone();
    module.mmv_add_inplace(&mut summed, &a).unwrap();
    assert!(module.mmv_compare(&doubled, &summed).unwrap());
}

pub fn test_mmv_negate_inplace<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvNegateInplace + MmvAddInplace + MmvCompare,
{
    let mut source: Source = Source::new([0u8; 32]);
    let p: u64 = module.modulus() as u64;

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);

    let mut neg: PackedVec<Vec<u64>> = a.clone();
    module.mmv_negate_inplace(&mut neg).unwrap();
    assert!(neg.is_well_formed());
    let want: Vec<u64> = residues(&a).iter().map(|x| (p - x) % p).collect();
    assert_eq!(residues(&neg), want);

    let mut sum: PackedVec<Vec<u64>> = neg.clone();
    module.mmv_add_inplace(&mut sum, &a).unwrap();
    assert!(module.mmv_compare(&sum, &module.alloc_vec()).unwrap());

    module.mmv_negate_inplace(&mut neg).unwrap();
    assert!(module.mmv_compare(&neg, &a).unwrap());
}

pub fn test_mmv_reduce<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvReduce + MmvCompare,
{
    let mut source: Source = Source::new([0u8; 32]);
    let p: u32 = module.modulus();

    let a: PackedVec<Vec<u64>> = alloc_uniform(module, &mut source);
    let mut res: PackedVec<Vec<u64>> = a.clone();
    module.mmv_reduce(&mut res).unwrap();

    assert!(res.to_lanes().iter().all(|x| *x < p));
    assert!(res.is_well_formed());
    assert!(module.mmv_compare(&res, &a).unwrap());

    // Canonical representatives are unique.
    let mut b: PackedVec<Vec<u64>> = a.clone();
    swap_zero_representatives(&mut b);
    module.mmv_reduce(&mut b).unwrap();
    assert_eq!(b, res);
}

pub fn test_mmv_operand_mismatch<B: Backend>(module: &Module<B>)
where
    Module<B>: MmvCopy + MmvCompare + MmvCompareModQ + MmvAddInplace + MmvMulScalarInplace + MmvZero,
{
    let layout: LaneLayout = *module.layout();
    let expected: usize = module.word_count();
    let longer: usize = module.dimension() + layout.lanes_per_word();

    let mut res: PackedVec<Vec<u64>> = module.alloc_vec();
    let a: PackedVec<Vec<u64>> = module.alloc_vec();
    let mut long: PackedVec<Vec<u64>> = PackedVec::alloc(&layout, longer);
    let foreign: PackedVec<Vec<u64>> = PackedVec::alloc(&foreign_layout(module), module.dimension());

    let mismatch = |operand: &'static str| MmvError::LengthMismatch {
        operand,
        expected,
        found: expected + 1,
    };

    assert_eq!(module.mmv_add_inplace(&mut res, &long), Err(mismatch("a")));
    assert_eq!(module.mmv_add_inplace(&mut long, &a), Err(mismatch("res")));
    assert_eq!(module.mmv_copy(&mut res, &long), Err(mismatch("a")));
    assert_eq!(module.mmv_compare(&a, &long), Err(mismatch("b")));
    assert_eq!(module.mmv_compare_mod_q(&long, &a, 1), Err(mismatch("a")));
    assert_eq!(module.mmv_mul_scalar_inplace(2, &mut long), Err(mismatch("res")));
    assert_eq!(module.mmv_zero(&mut long), Err(mismatch("res")));

    assert!(matches!(
        module.mmv_compare(&a, &foreign),
        Err(MmvError::Configuration { modulus, .. }) if modulus == foreign.layout().modulus()
    ));

    // Rejected calls leave the operands untouched.
    assert!(long.raw().iter().all(|x| *x == 0));
}

/// Four lanes `[2, 1, 0, 2]` modulo 3 in a single word.
pub fn test_mmv_scenario_mod3<B: Backend>()
where
    Module<B>: ModuleNew<B> + MmvAddInplace + MmvMulScalarInplace + MmvCompare,
{
    let module: Module<B> = Module::<B>::new(3, 4).unwrap();
    assert_eq!(module.word_count(), 1);

    let a: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &[2, 1, 0, 2]);

    let mut sum: PackedVec<Vec<u64>> = a.clone();
    module.mmv_add_inplace(&mut sum, &a).unwrap();
    assert_eq!(sum.to_lanes(), [1, 2, 0, 1]);

    let mut prod: PackedVec<Vec<u64>> = a.clone();
    module.mmv_mul_scalar_inplace(2, &mut prod).unwrap();
    assert_eq!(prod.to_lanes(), [1, 2, 0, 1]);

    assert!(module.mmv_compare(&sum, &prod).unwrap());
}

/// Congruence modulo 1 and modulo a non-divisor of the prime 31.
pub fn test_mmv_scenario_mod31<B: Backend>()
where
    Module<B>: ModuleNew<B> + MmvAddInplace + MmvCompare + MmvCompareModQ,
{
    let dimension: usize = 100;
    let module: Module<B> = Module::<B>::new(31, dimension).unwrap();

    let xs: Vec<u32> = (0..dimension as u32).map(|i| i % 31).collect();
    let ys: Vec<u32> = xs.iter().map(|x| (x + 1) % 31).collect();
    let a: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &xs);
    let b: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &ys);

    assert!(!module.mmv_compare(&a, &b).unwrap());
    assert_eq!(module.mmv_compare_mod_q(&a, &b, 31).unwrap(), ComparisonResult::NotEqual);
    assert_eq!(module.mmv_compare_mod_q(&a, &b, 1).unwrap(), ComparisonResult::Equal);
    assert_eq!(module.mmv_compare_mod_q(&a, &b, 1).unwrap().code(), 0);
    assert_eq!(module.mmv_compare_mod_q(&a, &b, 7).unwrap(), ComparisonResult::NotDivisible);

    // 30 + 5 wraps to 4.
    let mut c: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &vec![30; dimension]);
    let five: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &vec![5; dimension]);
    module.mmv_add_inplace(&mut c, &five).unwrap();
    assert!(c.to_lanes().iter().all(|x| *x == 4));
}

/// Divisors strictly between 1 and the composite modulus 15.
pub fn test_mmv_scenario_mod15<B: Backend>()
where
    Module<B>: ModuleNew<B> + MmvCompareModQ,
{
    let dimension: usize = 40;
    let module: Module<B> = Module::<B>::new(15, dimension).unwrap();

    let xs: Vec<u32> = (0..dimension as u32).map(|i| i % 16).collect();
    let plus3: Vec<u32> = xs.iter().map(|x| (x + 3) % 15).collect();
    let plus5: Vec<u32> = xs.iter().map(|x| (x + 5) % 15).collect();
    let a: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &xs);
    let b: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &plus3);
    let c: PackedVec<Vec<u64>> = PackedVec::from_lanes(module.layout(), &plus5);

    assert_eq!(module.mmv_compare_mod_q(&a, &b, 3).unwrap(), ComparisonResult::Equal);
    assert_eq!(module.mmv_compare_mod_q(&a, &b, 5).unwrap(), ComparisonResult::NotEqual);
    assert_eq!(module.mmv_compare_mod_q(&a, &c, 5).unwrap(), ComparisonResult::Equal);
    assert_eq!(module.mmv_compare_mod_q(&a, &c, 3).unwrap(), ComparisonResult::NotEqual);
    assert_eq!(module.mmv_compare_mod_q(&a, &c, 15).unwrap(), ComparisonResult::NotEqual);
    assert_eq!(module.mmv_compare_mod_q(&a, &c, 4).unwrap(), ComparisonResult::NotDivisible);
}

pub fn test_module_new_rejects<B: Backend>()
where
    Module<B>: ModuleNew<B>,
{
    for p in [0, 1, 2, 5, 17, 100] {
        assert!(
            matches!(Module::<B>::new(p, 16), Err(MmvError::Configuration { modulus, .. }) if modulus == p),
            "p={p}"
        );
    }
    assert!(matches!(
        Module::<B>::new(15, 0),
        Err(MmvError::Configuration { modulus: 15, .. })
    ));

    let module: Module<B> = Module::<B>::new(15, crate::MMV_ENTRIES).unwrap();
    assert_eq!(module.word_count(), 15468);
    assert_eq!(module.dimension(), crate::MMV_ENTRIES);
}

/// Adds `b` to `a` on both backends and checks the words are identical.
pub fn test_mmv_add_inplace_cross<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MmvAddInplace,
    Module<BT>: MmvAddInplace,
{
    assert_eq!(module_ref.layout(), module_test.layout());
    assert_eq!(module_ref.dimension(), module_test.dimension());

    let mut source: Source = Source::new([0u8; 32]);
    let a: PackedVec<Vec<u64>> = alloc_uniform(module_ref, &mut source);

    for _ in 0..4 {
        let b: PackedVec<Vec<u64>> = alloc_uniform(module_ref, &mut source);
        let mut res_ref: PackedVec<Vec<u64>> = a.clone();
        let mut res_test: PackedVec<Vec<u64>> = a.clone();
        module_ref.mmv_add_inplace(&mut res_ref, &b).unwrap();
        module_test.mmv_add_inplace(&mut res_test, &b).unwrap();
        assert_eq!(res_ref, res_test);
    }
}

pub fn test_mmv_mul_scalar_inplace_cross<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MmvMulScalarInplace,
    Module<BT>: MmvMulScalarInplace,
{
    assert_eq!(module_ref.layout(), module_test.layout());
    assert_eq!(module_ref.dimension(), module_test.dimension());

    let mut source: Source = Source::new([0u8; 32]);
    let a: PackedVec<Vec<u64>> = alloc_uniform(module_ref, &mut source);
    let p: i32 = module_ref.modulus() as i32;

    for factor in [0, 1, 2, -1, p - 1, p, i32::MIN, source.next_factor(1 << 20)] {
        let mut res_ref: PackedVec<Vec<u64>> = a.clone();
        let mut res_test: PackedVec<Vec<u64>> = a.clone();
        module_ref.mmv_mul_scalar_inplace(factor, &mut res_ref).unwrap();
        module_test.mmv_mul_scalar_inplace(factor, &mut res_test).unwrap();
        assert_eq!(res_ref, res_test, "factor={factor}");
    }
}

pub fn test_mmv_negate_reduce_cross<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MmvNegateInplace + MmvReduce,
    Module<BT>: MmvNegateInplace + MmvReduce,
{
    assert_eq!(module_ref.layout(), module_test.layout());

    let mut source: Source = Source::new([0u8; 32]);
    let a: PackedVec<Vec<u64>> = alloc_uniform(module_ref, &mut source);

    let mut res_ref: PackedVec<Vec<u64>> = a.clone();
    let mut res_test: PackedVec<Vec<u64>> = a.clone();
    module_ref.mmv_negate_inplace(&mut res_ref).unwrap();
    module_test.mmv_negate_inplace(&mut res_test).unwrap();
    assert_eq!(res_ref, res_test);

    let mut res_ref: PackedVec<Vec<u64>> = a.clone();
    let mut res_test: PackedVec<Vec<u64>> = a.clone();
    module_ref.mmv_reduce(&mut res_ref).unwrap();
    module_test.mmv_reduce(&mut res_test).unwrap();
    assert_eq!(res_ref, res_test);
}

pub fn test_mmv_compare_cross<BR: Backend, BT: Backend>(module_ref: &Module<BR>, module_test: &Module<BT>)
where
    Module<BR>: MmvCompare + MmvCompareModQ,
    Module<BT>: MmvCompare + MmvCompareModQ,
{
    assert_eq!(module_ref.layout(), module_test.layout());

    let mut source: Source = Source::new([0u8; 32]);
    let p: u32 = module_ref.modulus();
    let a: PackedVec<Vec<u64>> = alloc_uniform(module_ref, &mut source);
    let mut b: PackedVec<Vec<u64>> = a.clone();
    swap_zero_representatives(&mut b);

    for _ in 0..4 {
        assert_eq!(
            module_ref.mmv_compare(&a, &b).unwrap(),
            module_test.mmv_compare(&a, &b).unwrap()
        );
        for q in 0..=p + 1 {
            assert_eq!(
                module_ref.mmv_compare_mod_q(&a, &b, q).unwrap(),
                module_test.mmv_compare_mod_q(&a, &b, q).unwrap(),
                "q={q}"
            );
        }
        let i: usize = source.random_range(0..module_ref.dimension());
        let x: u32 = b.lane_get(i).unwrap();
        b.lane_set(i, (x + 3) % p).unwrap();
    }
}

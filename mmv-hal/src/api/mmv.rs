use crate::{
    MmvError,
    layouts::{ComparisonResult, PackedVecToMut, PackedVecToRef},
};

pub trait MmvCopy {
    /// Copies `a` into `res`, word for word.
    fn mmv_copy<R, A>(&self, res: &mut R, a: &A) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
        A: PackedVecToRef;
}

pub trait MmvZero {
    /// Sets every lane of `res` to zero.
    fn mmv_zero<R>(&self, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut;
}

pub trait MmvCompare {
    /// Returns `true` if every lane of `a` is congruent to the matching lane
    /// of `b` modulo `p`. The two representatives of zero compare equal.
    fn mmv_compare<A, C>(&self, a: &A, b: &C) -> Result<bool, MmvError>
    where
        A: PackedVecToRef,
        C: PackedVecToRef;
}

pub trait MmvCompareModQ {
    /// Tests `a` and `b` for lane-wise congruence modulo `q`.
    ///
    /// Returns [`ComparisonResult::NotDivisible`] if `q` does not divide `p`,
    /// and [`ComparisonResult::Equal`] for `q = 1`.
    fn mmv_compare_mod_q<A, C>(&self, a: &A, b: &C, q: u32) -> Result<ComparisonResult, MmvError>
    where
        A: PackedVecToRef,
        C: PackedVecToRef;
}

pub trait MmvAddInplace {
    /// Adds `a` to `res` lane-wise modulo `p`.
    fn mmv_add_inplace<R, A>(&self, res: &mut R, a: &A) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
        A: PackedVecToRef;
}

pub trait MmvMulScalarInplace {
    /// Multiplies every lane of `res` by `factor` modulo `p`. Negative
    /// factors are taken modulo `p`.
    fn mmv_mul_scalar_inplace<R>(&self, factor: i32, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut;
}

pub trait MmvNegateInplace {
    /// Replaces every lane `x` of `res` by `-x` modulo `p`.
    fn mmv_negate_inplace<R>(&self, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut;
}

pub trait MmvReduce {
    /// Maps every lane of `res` to its canonical representative in `[0, p)`.
    fn mmv_reduce<R>(&self, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut;
}

//! Kernels on a single packed word.
//!
//! `*_ref` kernels are branch-free: a word is split into its even-lane and
//! odd-lane planes, each lane of a plane has a full field of zero headroom,
//! and every carry is resolved inside its own lane before the planes are
//! recombined. `*_lane` kernels unpack the word and apply the same modular
//! rules one lane at a time; they are the correctness oracle.

mod add;
mod arithmetic_lane;
mod arithmetic_ref;
mod compare;
mod fold;
mod mul;
mod neg;
mod reduce;

pub use add::*;
pub use arithmetic_lane::*;
pub use arithmetic_ref::*;
pub use compare::*;
pub use fold::*;
pub use mul::*;
pub use neg::*;
pub use reduce::*;

use crate::layouts::LaneLayout;

pub trait WordAdd {
    /// Returns the lane-wise sum of `a` and `b` modulo `p`.
    fn word_add(layout: &LaneLayout, a: u64, b: u64) -> u64;
}

pub trait WordMulScalar {
    /// Returns the lanes of `a` multiplied by `factor` modulo `p`.
    /// `factor` must lie in `[0, p)`.
    fn word_mul_scalar(layout: &LaneLayout, factor: u64, a: u64) -> u64;
}

pub trait WordDiff {
    /// Returns zero if and only if every lane of `a` is congruent to the
    /// matching lane of `b` modulo `p`.
    fn word_diff(layout: &LaneLayout, a: u64, b: u64) -> u64;
}

pub trait WordNegate {
    /// Returns the lane-wise negation of `a` modulo `p`.
    fn word_negate(layout: &LaneLayout, a: u64) -> u64;
}

pub trait WordReduce {
    /// Replaces every lane holding `p` by `0`.
    fn word_reduce(layout: &LaneLayout, a: u64) -> u64;
}

#[cfg(test)]
mod tests;

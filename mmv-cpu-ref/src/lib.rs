//! Portable CPU backends for `mmv-hal`.
//!
//! - [`MmvRef`]: branch-free kernels working on whole packed words.
//! - [`MmvLane`]: lane-by-lane kernels, slower but obviously correct. Used
//!   as the oracle in cross-backend tests.
//!
//! Both backends produce identical words for identical inputs.

mod mmv;
mod module;
mod word;

#[cfg(test)]
mod tests;

pub struct MmvRef {}

pub struct MmvLane {}

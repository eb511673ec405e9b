//! Criterion-based benchmark harnesses, generic over any backend.
//!
//! Backend crates call these functions to measure their kernels on vectors
//! of [`crate::MMV_ENTRIES`] entries for several moduli.

pub mod mmv;

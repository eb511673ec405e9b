//! Safe, user-facing trait definitions for packed-vector arithmetic.
//!
//! - **module** -- module instantiation for a modulus and a dimension.
//! - **mmv** -- copy, zero, congruence tests, addition, scalar
//!   multiplication, negation and reduction of packed vectors.
//!
//! Every operation checks its operands against the module (modulus and word
//! count) and returns [`crate::MmvError`] on a mismatch. The computation is
//! dispatched to a backend via the [`oep`](crate::oep) extension points.

mod mmv;
mod module;

pub use mmv::*;
pub use module::*;

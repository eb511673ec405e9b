//! Vector-level loops over the word kernels.
//!
//! Every function walks the buffers one word at a time and is generic over
//! the word kernels `W` (see [`crate::reference::word`]). Buffer lengths are
//! checked by [`crate::delegates`] before these are reached.

mod add;
mod compare;
mod copy;
mod mul;
mod neg;
mod reduce;
mod zero;

pub use add::*;
pub use compare::*;
pub use copy::*;
pub use mul::*;
pub use neg::*;
pub use reduce::*;
pub use zero::*;

//! [`Backend`] and [`ModuleNewImpl`] for the CPU backends.
//!
//! Neither backend needs precomputed state beyond the [`LaneLayout`] of the
//! modulus, so a module is just the layout and the dimension.

use mmv_hal::{
    MmvError,
    layouts::{Backend, LaneLayout, Module},
    oep::ModuleNewImpl,
};

use crate::{MmvLane, MmvRef};

impl Backend for MmvRef {}

impl Backend for MmvLane {}

/// # Safety
///
/// Returns a module only for a modulus accepted by [`LaneLayout::new`] and a
/// positive dimension.
unsafe impl ModuleNewImpl<Self> for MmvRef {
    fn new_impl(modulus: u32, dimension: usize) -> Result<Module<Self>, MmvError> {
        Module::from_layout(LaneLayout::new(modulus)?, dimension)
    }
}

/// # Safety
///
/// See [`MmvRef`].
unsafe impl ModuleNewImpl<Self> for MmvLane {
    fn new_impl(modulus: u32, dimension: usize) -> Result<Module<Self>, MmvError> {
        Module::from_layout(LaneLayout::new(modulus)?, dimension)
    }
}

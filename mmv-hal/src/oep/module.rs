use crate::{
    MmvError,
    layouts::{Backend, Module},
};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::layouts::LaneLayout::new] for reference code.
/// * See [crate::api::ModuleNew] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait ModuleNewImpl<B: Backend> {
    fn new_impl(modulus: u32, dimension: usize) -> Result<Module<B>, MmvError>;
}

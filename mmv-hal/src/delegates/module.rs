use crate::{
    MmvError,
    api::ModuleNew,
    layouts::{Backend, Module},
    oep::ModuleNewImpl,
};

impl<B> ModuleNew<B> for Module<B>
where
    B: Backend + ModuleNewImpl<B>,
{
    fn new(modulus: u32, dimension: usize) -> Result<Self, MmvError> {
        B::new_impl(modulus, dimension)
    }
}

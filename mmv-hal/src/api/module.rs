use crate::{MmvError, layouts::Backend};

/// Instantiate a new [crate::layouts::Module].
pub trait ModuleNew<B: Backend>: Sized {
    /// # Errors
    ///
    /// [`MmvError::Configuration`] if `modulus` is not supported by the
    /// backend or if `dimension == 0`.
    fn new(modulus: u32, dimension: usize) -> Result<Self, MmvError>;
}

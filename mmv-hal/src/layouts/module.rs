use std::marker::PhantomData;

use crate::{
    MmvError,
    layouts::{LaneLayout, PackedVec},
};

/// Marker trait of a backend providing the [`crate::oep`] kernels.
pub trait Backend: Sized + Sync + Send {}

/// A per-modulus instantiation of the kernel.
///
/// Holds the [`LaneLayout`] of `p` and the fixed dimension of the vectors it
/// operates on. Both are construction-time constants: every buffer handed to
/// a [`crate::api`] operation must hold exactly [`Module::word_count`] words.
pub struct Module<B: Backend> {
    layout: LaneLayout,
    dimension: usize,
    _marker: PhantomData<B>,
}

impl<B: Backend> Module<B> {
    /// # Errors
    ///
    /// [`MmvError::Configuration`] if `dimension == 0`.
    pub fn from_layout(layout: LaneLayout, dimension: usize) -> Result<Self, MmvError> {
        if dimension == 0 {
            return Err(MmvError::Configuration {
                modulus: layout.modulus(),
                reason: "dimension must be positive",
            });
        }
        Ok(Self {
            layout,
            dimension,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn layout(&self) -> &LaneLayout {
        &self.layout
    }

    #[inline]
    pub fn modulus(&self) -> u32 {
        self.layout.modulus()
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of words of every vector of this module.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.layout.word_count(self.dimension)
    }

    /// Allocates a zero vector of this module's dimension.
    pub fn alloc_vec(&self) -> PackedVec<Vec<u64>> {
        PackedVec::alloc(&self.layout, self.dimension)
    }
}

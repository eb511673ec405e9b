//! Packed-vector operations for [`MmvRef`](crate::MmvRef) and
//! [`MmvLane`](crate::MmvLane).
//!
//! Both backends share the vector-level loops of
//! `mmv_hal::reference::mmv` and differ only in the word kernels they
//! plug into them (see `word.rs`).

use mmv_hal::{
    layouts::{ComparisonResult, Module, PackedVec, PackedVecToMut, PackedVecToRef},
    oep::{
        MmvAddInplaceImpl, MmvCompareImpl, MmvCompareModQImpl, MmvCopyImpl, MmvMulScalarInplaceImpl, MmvNegateInplaceImpl,
        MmvReduceImpl, MmvZeroImpl,
    },
    reference::mmv::{
        mmv_add_inplace, mmv_compare, mmv_compare_mod_q, mmv_copy, mmv_mul_scalar_inplace, mmv_negate_inplace, mmv_reduce,
        mmv_zero,
    },
};

use crate::{MmvLane, MmvRef};

macro_rules! impl_mmv_oep {
    ($backend:ty) => {
        unsafe impl MmvCopyImpl<Self> for $backend {
            fn mmv_copy_impl<R, A>(_module: &Module<Self>, res: &mut R, a: &A)
            where
                R: PackedVecToMut,
                A: PackedVecToRef,
            {
                let mut res: PackedVec<&mut [u64]> = res.to_mut();
                let a: PackedVec<&[u64]> = a.to_ref();
                mmv_copy(a.raw(), res.raw_mut());
            }
        }

        unsafe impl MmvZeroImpl<Self> for $backend {
            fn mmv_zero_impl<R>(_module: &Module<Self>, res: &mut R)
            where
                R: PackedVecToMut,
            {
                let mut res: PackedVec<&mut [u64]> = res.to_mut();
                mmv_zero(res.raw_mut());
            }
        }

        unsafe impl MmvCompareImpl<Self> for $backend {
            fn mmv_compare_impl<A, C>(module: &Module<Self>, a: &A, b: &C) -> bool
            where
                A: PackedVecToRef,
                C: PackedVecToRef,
            {
                let a: PackedVec<&[u64]> = a.to_ref();
                let b: PackedVec<&[u64]> = b.to_ref();
                mmv_compare::<$backend>(module.layout(), a.raw(), b.raw())
            }
        }

        unsafe impl MmvCompareModQImpl<Self> for $backend {
            fn mmv_compare_mod_q_impl<A, C>(module: &Module<Self>, a: &A, b: &C, q: u32) -> ComparisonResult
            where
                A: PackedVecToRef,
                C: PackedVecToRef,
            {
                let a: PackedVec<&[u64]> = a.to_ref();
                let b: PackedVec<&[u64]> = b.to_ref();
                mmv_compare_mod_q::<$backend>(module.layout(), a.raw(), b.raw(), q)
            }
        }

        unsafe impl MmvAddInplaceImpl<Self> for $backend {
            fn mmv_add_inplace_impl<R, A>(module: &Module<Self>, res: &mut R, a: &A)
            where
                R: PackedVecToMut,
                A: PackedVecToRef,
            {
                let mut res: PackedVec<&mut [u64]> = res.to_mut();
                let a: PackedVec<&[u64]> = a.to_ref();
                mmv_add_inplace::<$backend>(module.layout(), res.raw_mut(), a.raw());
            }
        }

        unsafe impl MmvMulScalarInplaceImpl<Self> for $backend {
            fn mmv_mul_scalar_inplace_impl<R>(module: &Module<Self>, factor: i32, res: &mut R)
            where
                R: PackedVecToMut,
            {
                let mut res: PackedVec<&mut [u64]> = res.to_mut();
                mmv_mul_scalar_inplace::<$backend>(module.layout(), factor, res.raw_mut());
            }
        }

        unsafe impl MmvNegateInplaceImpl<Self> for $backend {
            fn mmv_negate_inplace_impl<R>(module: &Module<Self>, res: &mut R)
            where
                R: PackedVecToMut,
            {
                let mut res: PackedVec<&mut [u64]> = res.to_mut();
                mmv_negate_inplace::<$backend>(module.layout(), res.raw_mut());
            }
        }

        unsafe impl MmvReduceImpl<Self> for $backend {
            fn mmv_reduce_impl<R>(module: &Module<Self>, res: &mut R)
            where
                R: PackedVecToMut,
            {
                let mut res: PackedVec<&mut [u64]> = res.to_mut();
                mmv_reduce::<$backend>(module.layout(), res.raw_mut());
            }
        }
    };
}

impl_mmv_oep!(MmvRef);
impl_mmv_oep!(MmvLane);

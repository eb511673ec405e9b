use crate::layouts::{Backend, ComparisonResult, Module, PackedVecToMut, PackedVecToRef};

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_copy] for reference code.
/// * See [crate::api::MmvCopy] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvCopyImpl<B: Backend> {
    fn mmv_copy_impl<R, A>(module: &Module<B>, res: &mut R, a: &A)
    where
        R: PackedVecToMut,
        A: PackedVecToRef;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_zero] for reference code.
/// * See [crate::api::MmvZero] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvZeroImpl<B: Backend> {
    fn mmv_zero_impl<R>(module: &Module<B>, res: &mut R)
    where
        R: PackedVecToMut;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_compare] for reference code.
/// * See [crate::api::MmvCompare] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvCompareImpl<B: Backend> {
    fn mmv_compare_impl<A, C>(module: &Module<B>, a: &A, b: &C) -> bool
    where
        A: PackedVecToRef,
        C: PackedVecToRef;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_compare_mod_q] for reference code.
/// * See [crate::api::MmvCompareModQ] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvCompareModQImpl<B: Backend> {
    fn mmv_compare_mod_q_impl<A, C>(module: &Module<B>, a: &A, b: &C, q: u32) -> ComparisonResult
    where
        A: PackedVecToRef,
        C: PackedVecToRef;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_add_inplace] for reference code.
/// * See [crate::api::MmvAddInplace] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvAddInplaceImpl<B: Backend> {
    fn mmv_add_inplace_impl<R, A>(module: &Module<B>, res: &mut R, a: &A)
    where
        R: PackedVecToMut,
        A: PackedVecToRef;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_mul_scalar_inplace] for reference code.
/// * See [crate::api::MmvMulScalarInplace] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvMulScalarInplaceImpl<B: Backend> {
    fn mmv_mul_scalar_inplace_impl<R>(module: &Module<B>, factor: i32, res: &mut R)
    where
        R: PackedVecToMut;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_negate_inplace] for reference code.
/// * See [crate::api::MmvNegateInplace] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvNegateInplaceImpl<B: Backend> {
    fn mmv_negate_inplace_impl<R>(module: &Module<B>, res: &mut R)
    where
        R: PackedVecToMut;
}

/// # THIS TRAIT IS AN OPEN EXTENSION POINT (unsafe)
/// * See [crate::reference::mmv::mmv_reduce] for reference code.
/// * See [crate::api::MmvReduce] for corresponding public API.
/// # Safety [crate::doc::backend_safety] for safety contract.
pub unsafe trait MmvReduceImpl<B: Backend> {
    fn mmv_reduce_impl<R>(module: &Module<B>, res: &mut R)
    where
        R: PackedVecToMut;
}

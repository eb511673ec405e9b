use crate::{
    MmvError,
    api::{MmvAddInplace, MmvCompare, MmvCompareModQ, MmvCopy, MmvMulScalarInplace, MmvNegateInplace, MmvReduce, MmvZero},
    delegates::check_operand,
    layouts::{Backend, ComparisonResult, Module, PackedVecToMut, PackedVecToRef},
    oep::{
        MmvAddInplaceImpl, MmvCompareImpl, MmvCompareModQImpl, MmvCopyImpl, MmvMulScalarInplaceImpl, MmvNegateInplaceImpl,
        MmvReduceImpl, MmvZeroImpl,
    },
};

impl<B> MmvCopy for Module<B>
where
    B: Backend + MmvCopyImpl<B>,
{
    fn mmv_copy<R, A>(&self, res: &mut R, a: &A) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
        A: PackedVecToRef,
    {
        check_operand(self, "res", &res.to_mut())?;
        check_operand(self, "a", a)?;
        B::mmv_copy_impl(self, res, a);
        Ok(())
    }
}

impl<B> MmvZero for Module<B>
where
    B: Backend + MmvZeroImpl<B>,
{
    fn mmv_zero<R>(&self, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
    {
        check_operand(self, "res", &res.to_mut())?;
        B::mmv_zero_impl(self, res);
        Ok(())
    }
}

impl<B> MmvCompare for Module<B>
where
    B: Backend + MmvCompareImpl<B>,
{
    fn mmv_compare<A, C>(&self, a: &A, b: &C) -> Result<bool, MmvError>
    where
        A: PackedVecToRef,
        C: PackedVecToRef,
    {
        check_operand(self, "a", a)?;
        check_operand(self, "b", b)?;
        Ok(B::mmv_compare_impl(self, a, b))
    }
}

impl<B> MmvCompareModQ for Module<B>
where
    B: Backend + MmvCompareModQImpl<B>,
{
    fn mmv_compare_mod_q<A, C>(&self, a: &A, b: &C, q: u32) -> Result<ComparisonResult, MmvError>
    where
        A: PackedVecToRef,
        C: PackedVecToRef,
    {
        check_operand(self, "a", a)?;
        check_operand(self, "b", b)?;
        Ok(B::mmv_compare_mod_q_impl(self, a, b, q))
    }
}

impl<B> MmvAddInplace for Module<B>
where
    B: Backend + MmvAddInplaceImpl<B>,
{
    fn mmv_add_inplace<R, A>(&self, res: &mut R, a: &A) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
        A: PackedVecToRef,
    {
        check_operand(self, "res", &res.to_mut())?;
        check_operand(self, "a", a)?;
        B::mmv_add_inplace_impl(self, res, a);
        Ok(())
    }
}

impl<B> MmvMulScalarInplace for Module<B>
where
    B: Backend + MmvMulScalarInplaceImpl<B>,
{
    fn mmv_mul_scalar_inplace<R>(&self, factor: i32, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
    {
        check_operand(self, "res", &res.to_mut())?;
        B::mmv_mul_scalar_inplace_impl(self, factor, res);
        Ok(())
    }
}

impl<B> MmvNegateInplace for Module<B>
where
    B: Backend + MmvNegateInplaceImpl<B>,
{
    fn mmv_negate_inplace<R>(&self, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
    {
        check_operand(self, "res", &res.to_mut())?;
        B::mmv_negate_inplace_impl(self, res);
        Ok(())
    }
}

impl<B> MmvReduce for Module<B>
where
    B: Backend + MmvReduceImpl<B>,
{
    fn mmv_reduce<R>(&self, res: &mut R) -> Result<(), MmvError>
    where
        R: PackedVecToMut,
    {
        check_operand(self, "res", &res.to_mut())?;
        B::mmv_reduce_impl(self, res);
        Ok(())
    }
}

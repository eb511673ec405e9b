//! Blanket implementations connecting [`crate::api`] traits to [`crate::oep`] traits
//! on [`crate::layouts::Module`].
//!
//! Besides the wiring, this is where operands are checked against the module
//! before a backend kernel is reached.

mod mmv;
mod module;

use crate::{
    MmvError,
    layouts::{Backend, Module, PackedVec, PackedVecToRef},
};

/// Verifies that `vec` was laid out for the modulus of `module` and holds
/// exactly `module.word_count()` words.
pub(crate) fn check_operand<B, V>(module: &Module<B>, operand: &'static str, vec: &V) -> Result<(), MmvError>
where
    B: Backend,
    V: PackedVecToRef,
{
    let vec: PackedVec<&[u64]> = vec.to_ref();
    if vec.layout() != module.layout() {
        return Err(MmvError::Configuration {
            modulus: vec.layout().modulus(),
            reason: "operand modulus differs from module modulus",
        });
    }
    MmvError::check_len(operand, module.word_count(), vec.word_count())
}

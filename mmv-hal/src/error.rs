use thiserror::Error;

/// Errors reported by layout construction and by the checked API boundary.
///
/// Kernels behind the API never fail: once a module is built and buffer
/// lengths are verified, every operation is a total function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MmvError {
    /// The modulus (or dimension) cannot be laid out in lanes of one machine word.
    #[error("invalid configuration for modulus {modulus}: {reason}")]
    Configuration { modulus: u32, reason: &'static str },

    /// A lane index at or past the declared dimension.
    #[error("lane index {index} out of range for dimension {dimension}")]
    Index { index: usize, dimension: usize },

    /// A buffer whose word count differs from the one declared by the layout.
    #[error("length mismatch on `{operand}`: expected {expected} words, found {found}")]
    LengthMismatch {
        operand: &'static str,
        expected: usize,
        found: usize,
    },
}

impl MmvError {
    pub(crate) fn check_len(operand: &'static str, expected: usize, found: usize) -> Result<(), MmvError> {
        if expected != found {
            return Err(MmvError::LengthMismatch {
                operand,
                expected,
                found,
            });
        }
        Ok(())
    }
}

//! # mmv-hal
//!
//! A trait-based Hardware Abstraction Layer (HAL) for packed vectors of small
//! integers modulo `p = 2^k - 1`.
//!
//! Very large vectors (the [`MMV_ENTRIES`]-entry representation space of the
//! surrounding group algebra) are stored several coefficients per `u64` word.
//! Every operation in this crate works on the packed words directly: no
//! coefficient is ever unpacked to one-integer-per-word on a hot path.
//!
//! ## Core Concepts
//!
//! **Modulus:** `p = 2^k - 1` with `2 <= k <= 32`. Because `2^k = 1 (mod p)`,
//! a carry out of a `k`-bit lane can be folded back into the same lane
//! (end-around carry), and the all-ones lane pattern is a second
//! representative of zero.
//!
//! **Lanes:** a [`layouts::LaneLayout`] places each `k`-bit value in a field
//! of `next_power_of_two(k)` bits. A word therefore holds an even number of
//! lanes and splits into an even-lane plane and an odd-lane plane, each of
//! which has a full field of headroom above every value. Carries are resolved
//! inside a plane and never reach a neighbouring lane.
//!
//! **Layout types** ([`layouts`]):
//! - [`layouts::LaneLayout`] -- masks and capacities derived from `p`.
//! - [`layouts::PackedVec`] -- a word buffer interpreted lane-by-lane.
//! - [`layouts::Module`] -- a per-modulus instantiation: layout plus fixed dimension.
//!
//! ## Architecture
//!
//! 1. **[`api`]** -- Safe, user-facing traits (e.g. [`api::MmvAddInplace`]).
//!    Every call checks buffer lengths against the module's word count.
//! 2. **[`oep`]** -- Unsafe extension-point traits mirroring the API
//!    (e.g. [`oep::MmvAddInplaceImpl`]). Backend crates implement these.
//! 3. **[`delegates`]** -- Blanket `impl` glue connecting [`api`] to [`oep`] on
//!    [`layouts::Module`], including the precondition checks.
//! 4. **[`mod@reference`]** -- Pure-Rust reference kernels: branch-free
//!    word-level kernels and a lane-by-lane scalar oracle.
//!
//! ## Testing and Benchmarking
//!
//! [`test_suite`] holds backend-generic test functions, instantiated by
//! backend crates through [`backend_test_suite!`] and
//! [`cross_backend_test_suite!`]. [`bench_suite`] holds the criterion harnesses.

pub mod api;

/// Criterion-based benchmark harnesses, generic over any backend.
pub mod bench_suite;

/// Blanket implementations connecting [`api`] traits to [`oep`] traits on
/// [`layouts::Module`].
pub mod delegates;

mod error;

pub mod layouts;

pub mod oep;

/// Pure-Rust reference kernels.
///
/// Contains the word-level kernels (`word`), both branch-free and lane-by-lane,
/// and the vector-level loops over them (`mmv`). The lane-by-lane kernels serve
/// as a correctness oracle for backend testing.
pub mod reference;

/// Deterministic pseudorandom number generation based on ChaCha8.
pub mod source;

/// Fully generic, backend-parametric test functions.
pub mod test_suite;

pub use error::*;

/// Embedded safety contract documentation for backend implementors.
pub mod doc {
    /// Safety contract that all [`crate::oep`] trait implementations must uphold.
    ///
    /// An implementation is called by [`crate::delegates`] only after every
    /// operand has been checked against the module: each buffer was laid out
    /// for the module's modulus and holds exactly `module.word_count()` words.
    /// In return, an implementation must:
    ///
    /// - never read or write past `module.word_count()` words of an operand;
    /// - write only representatives in `[0, p]` into the lanes below the
    ///   dimension, and leave every padding bit of a result at zero when the
    ///   corresponding input padding bits are zero;
    /// - produce, word for word, the same representatives as
    ///   [`crate::reference::word::WordRef`] (two backends must be
    ///   interchangeable bit for bit);
    /// - not panic and not allocate on the packed-vector paths;
    /// - keep the running time of a comparison independent of where the
    ///   first non-congruent lane lies.
    pub mod backend_safety {
        pub const _PLACEHOLDER: () = ();
    }
}

/// Number of bits in a machine word of a packed vector.
pub const WORD_BITS: u32 = u64::BITS;

/// Logical dimension of the represented space.
pub const MM_REP_DIMENSION: usize = 196884;

/// Number of entries of the padded internal layout of a representation vector.
///
/// `word_count(MMV_ENTRIES)` is 7734 words for `p = 3`, 15468 for `p = 15`
/// and 30936 for `p = 31`.
pub const MMV_ENTRIES: usize = 247488;

/// Moduli instantiated by the surrounding system.
pub const SUPPORTED_MODULI: [u32; 7] = [3, 7, 15, 31, 63, 127, 255];

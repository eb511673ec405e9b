//! Open Extension Points (OEP) for backend crates.
//!
//! This module defines the `unsafe` trait layer that backend crates implement
//! to provide concrete packed-vector arithmetic. Each trait mirrors a
//! corresponding safe trait in the [`crate::api`] module, distinguished by an
//! `Impl` suffix (e.g., [`crate::api::MmvAddInplace`] is backed by
//! `MmvAddInplaceImpl`).
//!
//! All traits in this module are `unsafe` because implementations must uphold
//! the backend safety contract documented in [`crate::doc::backend_safety`].

mod mmv;
mod module;

pub use mmv::*;
pub use module::*;

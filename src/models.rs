//! Public Twine models.
//!
//! Models are grouped by domain. Each model module exposes an evaluator type
//! and a thin [`twine_core::Model`] adapter over it.
//!
//! The computation lives in an internal `core` submodule that is not part of
//! the public API; the model module re-exports the types callers need.

pub mod aero;

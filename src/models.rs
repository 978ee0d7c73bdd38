//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module. Where the computation is more than a
//! closed-form expression it sits in an internal `core` submodule, and the
//! [`twine_core::Model`] implementation is a thin adapter that delegates to it.
//! Core types that callers construct directly (a [`PeltierModule`], say) are
//! re-exported from the model module.
//!
//! [`PeltierModule`]: thermal::peltier::PeltierModule

pub mod thermal;

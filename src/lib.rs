//! Reconstruction of Shamir secrets from base-encoded shares
//!
//! Shares are decoded into exact big-integer points ([`codec`]), the `k`
//! points with the smallest x-coordinates are selected
//! ([`domain::PointSet::select_first`]) and the secret is recovered as `f(0)`
//! by exact Lagrange interpolation ([`interpolate`]).

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod interpolate;
pub mod record;

pub use commands::recover;
pub use error::{ArithmeticError, DecodeError, Error};

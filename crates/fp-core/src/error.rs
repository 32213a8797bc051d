//! Planner-wide base error type.
//!
//! Sub-crates define their own error enums and either convert into `FpError`
//! or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `fp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `fp-*` crates.
pub type FpResult<T> = Result<T, FpError>;

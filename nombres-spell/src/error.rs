//! Error types for spelling operations

use crate::Mode;
use thiserror::Error;

/// Errors that can occur while spelling out a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    /// A negative magnitude was given to an ordinal-producing mode
    #[error("cannot render -{magnitude} in {mode} mode: ordinals are never negative")]
    NegativeOrdinal { magnitude: u128, mode: Mode },

    /// Unknown option, flag or mode name
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Invalid or non-French locale tag
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}

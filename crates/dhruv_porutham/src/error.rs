//! Error types for nakshatra lookup and compatibility matching.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the porutham engine.
///
/// Only raised on the strict paths; the legacy entry points substitute the
/// default star instead of failing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PoruthamError {
    /// Name does not match any nakshatra in the registry.
    UnknownStar(String),
    /// Identifier outside 1..=27.
    InvalidId(u8),
}

impl Display for PoruthamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStar(name) => write!(f, "unknown nakshatra: {name:?}"),
            Self::InvalidId(id) => write!(f, "invalid nakshatra id: {id} (1-27)"),
        }
    }
}

impl Error for PoruthamError {}

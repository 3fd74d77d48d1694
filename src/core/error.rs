//! Error types for plane and deck generation.
//!
//! Every failure is surfaced to the caller; nothing is retried or
//! recovered internally because all stages are pure computations.

use thiserror::Error;

use crate::deck::DeckViolation;

/// Errors raised while generating a projective plane or a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneError {
    /// The modulus is below 2 or not prime, so the plane invariants do not hold.
    #[error("invalid modulus {modulus}: {reason}")]
    InvalidModulus {
        modulus: u32,
        reason: &'static str,
    },

    /// The plane for this modulus is too large to index.
    #[error("plane of modulus {modulus} overflows the index range")]
    ArithmeticOverflow { modulus: u32 },

    /// The canonicalizer produced the wrong number of points.
    #[error("expected {expected} canonical points, found {actual}")]
    PointCountMismatch { expected: usize, actual: usize },

    /// A generated deck failed verification.
    #[error("deck verification failed: {0}")]
    Violation(#[from] DeckViolation),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

//! Error types for field construction, arithmetic and the primitive search.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type FieldResult<T> = Result<T, FieldError>;

/// Precondition violations surfaced by the arithmetic core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The requested prime field order is not prime.
    #[error("field order {0} is not prime")]
    NotPrime(u64),

    /// The extension degree is zero.
    #[error("extension degree must be at least 1")]
    ZeroDegree,

    /// `p^m` does not fit in a `u64`.
    #[error("field order {p}^{m} does not fit in 64 bits")]
    OrderOverflow { p: u64, m: usize },

    /// Operands are bound to different field instances.
    #[error("operands belong to different fields")]
    FieldMismatch,

    /// Zero has no multiplicative inverse.
    #[error("zero has no multiplicative inverse")]
    ZeroInverse,

    /// Polynomial division by the zero polynomial.
    #[error("division by the zero polynomial")]
    ZeroDivisor,

    /// The remainder slot passed to `div` was not empty.
    #[error("remainder must start as the zero polynomial")]
    NonZeroRemainder,

    /// The modulus has the wrong degree.
    #[error("irreducible polynomial has {}, expected degree {expected}", degree_label(.got))]
    WrongDegree { expected: usize, got: Option<usize> },

    /// The modulus can only be set once.
    #[error("irreducible polynomial is already set")]
    ModulusAlreadySet,

    /// The operation needs a modulus and none was set.
    #[error("irreducible polynomial has not been set")]
    ModulusNotSet,

    /// Every candidate was tested and none generates the multiplicative group.
    #[error("no primitive element among {candidates} candidates; the modulus is not irreducible")]
    NoPrimitiveElement { candidates: u64 },

    /// A coefficient digit is not in `[0, p)`.
    #[error("coefficient {value} at position {position} is out of range for GF({prime})")]
    CoefficientOutOfRange {
        position: usize,
        value: u64,
        prime: u64,
    },
}

fn degree_label(degree: &Option<usize>) -> String {
    match degree {
        Some(d) => format!("degree {d}"),
        None => "no degree".to_string(),
    }
}

/// Errors raised while turning caller input into a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A character of the coefficient string is not a decimal digit.
    #[error("invalid coefficient digit '{ch}' at position {position}")]
    InvalidDigit { ch: char, position: usize },

    /// No coefficients were supplied.
    #[error("polynomial must have at least one coefficient")]
    EmptyPolynomial,

    /// The modulus needs exactly `m + 1` coefficients.
    #[error("expected {expected} coefficients, got {got}")]
    CoefficientCount { expected: usize, got: usize },

    #[error(transparent)]
    Field(#[from] FieldError),
}

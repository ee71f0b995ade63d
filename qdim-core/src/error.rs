//! Errors raised by the runtime side of the library.
//!
//! Statically typed code never sees these: a dimension mismatch between two [`crate::Quantity`] values is a
//! compile error. They only surface when a dimension is checked at run time, i.e. when downcasting an
//! [`crate::AnyQuantity`], deserializing with [`crate::serde_with_dimension`] or decoding a [`crate::Rational`].

use crate::DimensionVector;

/// Failure of a runtime dimension check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    /// A value carried a different dimension than the one requested.
    #[error("dimension mismatch: expected `{expected}`, found `{found}`")]
    Mismatch {
        /// Dimension the caller asked for.
        expected: DimensionVector,
        /// Dimension the value actually has.
        found: DimensionVector,
    },
    /// A rational exponent was decoded with a zero denominator.
    #[error("rational exponent {numer}/0 has a zero denominator")]
    ZeroDenominator {
        /// Numerator of the rejected exponent.
        numer: i32,
    },
    /// A rational exponent was decoded whose reduced form does not fit in `i32`.
    #[error("rational exponent {numer}/{denom} does not fit in i32 once reduced")]
    ExponentOverflow {
        /// Numerator of the rejected exponent.
        numer: i32,
        /// Denominator of the rejected exponent.
        denom: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_dimensions() {
        let err = DimensionError::Mismatch {
            expected: DimensionVector::from_integers([0, 1, 0, 0, 0, 0, 0, 0]),
            found: DimensionVector::from_integers([0, 0, 1, 0, 0, 0, 0, 0]),
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected `m`, found `s`"
        );
    }

    #[test]
    fn zero_denominator_message() {
        let err = DimensionError::ZeroDenominator { numer: 7 };
        assert_eq!(err.to_string(), "rational exponent 7/0 has a zero denominator");
    }

    #[test]
    fn exponent_overflow_message() {
        let err = DimensionError::ExponentOverflow {
            numer: i32::MIN,
            denom: -1,
        };
        assert_eq!(
            err.to_string(),
            "rational exponent -2147483648/-1 does not fit in i32 once reduced"
        );
    }
}

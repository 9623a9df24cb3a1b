// ============================================================================
// Number
// Dynamic numeric value: a signed integer or a double-precision float
// ============================================================================

use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric operand: either a signed integer or a floating-point value.
///
/// Operations preserve integer-ness where they can: adding two `Int`s
/// yields an `Int`, while any operand being a `Float` makes the result a
/// `Float`. Division always produces a `Float`, even when it divides
/// evenly, so `10 / 5` renders as `2.0`.
///
/// # Example
/// ```
/// use simple_calculator::numeric::Number;
///
/// let a = Number::from(10);
/// let b = Number::from(2.5);
/// assert!(a.is_int());
/// assert_eq!(b.to_string(), "2.5");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// Signed integer value
    Int(i64),
    /// Double-precision floating-point value
    Float(f64),
}

impl Number {
    /// Integer zero
    pub const ZERO: Self = Self::Int(0);

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is exactly zero.
    ///
    /// This is an exact-equality check, not a tolerance check: `Float(0.0)`
    /// and `Float(-0.0)` are zero, `Float(1e-300)` is not.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Check if the value is an integer variant.
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Check if the value is a floating-point variant.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Widen to `f64`.
    ///
    /// Lossless for floats; integers above 2^53 round to the nearest
    /// representable double.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Number {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Numeric equality across variants: `Int(2) == Float(2.0)`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            // i64::MIN has no i64 negation; spill to float like the
            // arithmetic operations do on overflow
            Self::Int(i) => match i.checked_neg() {
                Some(n) => Self::Int(n),
                None => Self::Float(-(i as f64)),
            },
            Self::Float(f) => Self::Float(-f),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            // Debug formatting keeps the trailing ".0" on whole floats,
            // matching the host's default float-to-text conversion
            Self::Float(x) => write!(f, "{:?}", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_display() {
        assert_eq!(Number::Int(15).to_string(), "15");
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Int(0).to_string(), "0");
    }

    #[test]
    fn test_float_display_keeps_fractional_point() {
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn test_is_zero_exact_equality() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(Number::Float(-0.0).is_zero());
        assert!(!Number::Float(1e-300).is_zero());
        assert!(!Number::Int(1).is_zero());
    }

    #[test]
    fn test_cross_variant_equality() {
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Int(2), Number::Float(2.1));
        assert_eq!(Number::Float(0.0), Number::Float(-0.0));
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Number::from(10), Number::Int(10));
        assert_eq!(Number::from(10i32), Number::Int(10));
        assert_eq!(Number::from(2.5), Number::Float(2.5));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Number::Int(5), Number::Int(-5));
        assert_eq!(-Number::Float(2.5), Number::Float(-2.5));
        assert_eq!(-Number::Int(i64::MIN), Number::Float(-(i64::MIN as f64)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let int = Number::Int(10);
        let float = Number::Float(2.5);

        let int_json = serde_json::to_string(&int).unwrap();
        let float_json = serde_json::to_string(&float).unwrap();

        assert_eq!(serde_json::from_str::<Number>(&int_json).unwrap(), int);
        assert_eq!(serde_json::from_str::<Number>(&float_json).unwrap(), float);
    }
}

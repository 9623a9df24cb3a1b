// ============================================================================
// Arithmetic Operations
// The four pure calculator operations
// ============================================================================

use crate::numeric::{CalcError, CalcResult, Number};

/// Add two numbers.
///
/// Integer operands stay integers; if the sum does not fit in `i64`, the
/// operands spill into `f64`.
#[inline]
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match x.checked_add(y) {
            Some(sum) => Number::Int(sum),
            None => Number::Float(x as f64 + y as f64),
        },
        _ => Number::Float(a.as_f64() + b.as_f64()),
    }
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match x.checked_sub(y) {
            Some(diff) => Number::Int(diff),
            None => Number::Float(x as f64 - y as f64),
        },
        _ => Number::Float(a.as_f64() - b.as_f64()),
    }
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    let (a, b) = (a.into(), b.into());
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => match x.checked_mul(y) {
            Some(product) => Number::Int(product),
            None => Number::Float(x as f64 * y as f64),
        },
        _ => Number::Float(a.as_f64() * b.as_f64()),
    }
}

/// Divide `a` by `b`.
///
/// Division is always floating-point, so `divide(10, 5)` is `2.0` rather
/// than `2`. The divisor is checked against zero with exact equality
/// (`Float(0.0)` and `Float(-0.0)` are rejected, near-zero values are not).
///
/// # Errors
/// Returns `DivisionByZero` when `b` is exactly zero. Never panics.
#[inline]
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        tracing::debug!(dividend = %a, "division by zero rejected");
        return Err(CalcError::DivisionByZero);
    }
    Ok(Number::Float(a.as_f64() / b.as_f64()))
}

// ============================================================================
// Numeric Module
// Dynamic numeric values for calculator operations
// ============================================================================
//
// This module provides:
// - Number: a signed integer or floating-point operand
// - CalcError: error type for the single recognized failure (zero divisor)
//
// Design principles:
// - Integer operands stay integers under add/subtract/multiply
// - Division is always floating-point
// - All fallible arithmetic returns Result (no panics)

mod errors;
mod number;

pub use errors::{CalcError, CalcResult};
pub use number::Number;

// ============================================================================
// Simple Calculator Library
// Four arithmetic operations plus a demonstration driver
// ============================================================================

//! # Simple Calculator
//!
//! A four-function calculator: four pure arithmetic operations and a
//! demonstration driver that prints a fixed report to standard output.
//!
//! ## Features
//!
//! - **Pure operations** — `add`, `subtract`, `multiply`, `divide`; no
//!   hidden state, safely callable from any number of callers
//! - **Host numeric semantics** — integer operands stay integers under
//!   add/subtract/multiply; division is always floating-point
//! - **No panics** — division by zero is the only failure condition, and it
//!   is returned as a value rather than raised
//!
//! ## Example
//!
//! ```rust
//! use simple_calculator::prelude::*;
//!
//! assert_eq!(add(10, 5), Number::Int(15));
//! assert_eq!(divide(10, 5), Ok(Number::Float(2.0)));
//!
//! // The zero-divisor case renders as a sentinel string, not a panic
//! let err = divide(10, 0).unwrap_err();
//! assert_eq!(err.to_string(), "Error: Division by zero");
//! ```

pub mod calculator;
pub mod demo;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{add, divide, multiply, subtract};
    pub use crate::numeric::{CalcError, CalcResult, Number};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_sample_inputs_end_to_end() {
        // The fixed inputs the demonstration driver uses
        assert_eq!(add(10, 5).to_string(), "15");
        assert_eq!(subtract(10, 5).to_string(), "5");
        assert_eq!(multiply(10, 5).to_string(), "50");
        assert_eq!(divide(10, 5).unwrap().to_string(), "2.0");
    }

    #[test]
    fn test_demo_report_text() {
        let mut buf = Vec::new();
        crate::demo::write_report(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Simple Calculator Test\n"));
        assert!(text.contains("\n10 / 5 = 2.0\n"));
        assert!(text.ends_with("\n\nCalculator test completed successfully!\n"));
    }

    #[test]
    fn test_divide_error_is_value_not_panic() {
        let result: CalcResult<Number> = divide(1, 0);
        assert_eq!(result, Err(CalcError::DivisionByZero));
    }
}

// ============================================================================
// Calculator Module
// Contains the four arithmetic operations
// ============================================================================

mod operations;

pub use operations::{add, divide, multiply, subtract};

// ============================================================================
// Numeric Module
// Error taxonomy shared by every numeral codec
// ============================================================================
//
// This module provides:
// - NumeralError: Error types for encode and decode
// - NumeralResult: Result alias used across the crate
//
// Design principles:
// - All conversions return Result (no panics)
// - Errors are Copy and carry no allocations

mod errors;

pub use errors::{NumeralError, NumeralResult};

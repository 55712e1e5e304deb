//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode and listing source tests
//! - `criteria`: Parsing filters and writing them into a store
//! - `validation`: Configuration consistency validation tests

mod helpers;

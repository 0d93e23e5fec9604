//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: Email format rule and validation CSS classes

pub mod console_macros;
pub mod validation;

pub use validation::*;

//! Sign-in wire format
//!
//! Handles request binding and the fixed JSON responses.

pub mod parser;
pub mod responses;

pub use parser::parse_sign_in;

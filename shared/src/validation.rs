//! Validation utilities for Brazilian postal codes
//!
//! Both services run these checks independently; the backend never trusts
//! the edge to have validated its input.

/// Length of a CEP without punctuation
pub const CEP_LENGTH: usize = 8;

/// True iff `code` is exactly eight ASCII decimal digits
pub fn is_valid_cep(code: &str) -> bool {
    code.len() == CEP_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

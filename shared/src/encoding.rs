//! Binary partition values as text

use base64::{engine::general_purpose::STANDARD, Engine};

/// Standard (RFC 4648, padded) base64 of `bytes`
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

//! LEB128 Format - Variable-length integer codec
//!
//! This crate encodes and decodes LEB128 (Little Endian Base 128) integers
//! as embedded in binary module and bytecode formats. It has no I/O
//! dependencies and carries no state between calls. It includes:
//!
//! - Bit layout constants
//! - Unsigned and signed 64-bit encode/decode
//! - Decode limits (length bound and continuation-chain validation)
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod limits;
pub mod varint;

// Re-export commonly used types
pub use error::{LebError, Result};
pub use limits::{Limits, Validation};
pub use varint::{
    decode_signed, decode_signed_with, decode_unsigned, decode_unsigned_with, encode_signed,
    encode_unsigned, encoded_len_signed, encoded_len_unsigned, write_signed, write_unsigned,
    Encoded,
};

//! Error types for LEB128 decoding

use thiserror::Error;

/// LEB128 error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LebError {
    /// Input is longer than the decode length bound allows.
    #[error("Length overflow: {len} bytes exceeds maximum of {max}")]
    LengthOverflow {
        /// Length of the rejected input.
        len: usize,
        /// Bound that was in effect.
        max: usize,
    },
    /// Input contained no bytes.
    #[error("Unexpected end of input")]
    UnexpectedEof,
    /// Strict mode: a byte before the last lacks the continuation bit.
    #[error("Missing continuation bit at byte {index}")]
    MissingContinuation {
        /// Position of the offending byte.
        index: usize,
    },
    /// Strict mode: the last byte still carries the continuation bit.
    #[error("Unterminated sequence: final byte has continuation bit set")]
    UnterminatedSequence,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LebError::LengthOverflow { len: 11, max: 10 };
        assert_eq!(
            err.to_string(),
            "Length overflow: 11 bytes exceeds maximum of 10"
        );
        assert_eq!(
            LebError::MissingContinuation { index: 2 }.to_string(),
            "Missing continuation bit at byte 2"
        );
    }
}

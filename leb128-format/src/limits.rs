//! Decode limits and validation policy

use crate::constants::{LEGACY_MAX_ENCODED_LEN, MAX_ENCODED_LEN_U64};

/// How decoders treat the continuation-bit chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Read the low 7 bits of every byte, ignoring the continuation bits.
    #[default]
    Permissive,
    /// Require 0x80 on every byte but the last, and a clear 0x80 on the last.
    Strict,
}

/// Limits applied when decoding a LEB128 sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum accepted input length in bytes (clamped to 1..=10)
    pub max_encoded_len: usize,
    /// Continuation-chain policy
    pub validation: Validation,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_encoded_len: MAX_ENCODED_LEN_U64,
            validation: Validation::Permissive,
        }
    }
}

impl Limits {
    /// The 8-byte cap older decoders enforced.
    ///
    /// Unsigned values from 2^56 up, and signed values outside
    /// -2^55..2^55, need more than 8 bytes and are rejected under these limits.
    pub fn legacy() -> Self {
        Self {
            max_encoded_len: LEGACY_MAX_ENCODED_LEN,
            ..Self::default()
        }
    }

    /// Full-width bound with continuation-chain validation.
    pub fn strict() -> Self {
        Self {
            validation: Validation::Strict,
            ..Self::default()
        }
    }

    /// Length bound actually enforced.
    pub fn effective_max_len(&self) -> usize {
        self.max_encoded_len.clamp(1, MAX_ENCODED_LEN_U64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.effective_max_len(), 10);
        assert_eq!(limits.validation, Validation::Permissive);
    }

    #[test]
    fn test_presets() {
        assert_eq!(Limits::legacy().effective_max_len(), 8);
        assert_eq!(Limits::legacy().validation, Validation::Permissive);
        assert_eq!(Limits::strict().effective_max_len(), 10);
        assert_eq!(Limits::strict().validation, Validation::Strict);
    }

    #[test]
    fn test_max_len_is_clamped() {
        let mut limits = Limits::default();
        limits.max_encoded_len = 0;
        assert_eq!(limits.effective_max_len(), 1);
        limits.max_encoded_len = 64;
        assert_eq!(limits.effective_max_len(), 10);
    }
}

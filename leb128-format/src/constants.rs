//! Bit layout constants for LEB128 groups

/// Continuation flag: set on every encoded byte except the last.
pub const CONTINUATION_BIT: u8 = 0x80;

/// Mask selecting the 7 payload bits of an encoded byte.
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Sign bit of a group's payload, used by signed LEB128.
pub const SIGN_BIT: u8 = 0x40;

/// Payload bits carried by each encoded byte.
pub const GROUP_BITS: u32 = 7;

/// Longest encoding of any 64-bit value: ceil(64 / 7).
pub const MAX_ENCODED_LEN_U64: usize = 10;

/// Historical decode cap. Stricter than [`MAX_ENCODED_LEN_U64`], so values
/// needing 9 or 10 bytes are rejected under it.
pub const LEGACY_MAX_ENCODED_LEN: usize = 8;

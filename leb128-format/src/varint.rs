//! Variable-length integer encoding (unsigned and signed LEB128)

use smallvec::SmallVec;
use tracing::debug;

use crate::constants::{CONTINUATION_BIT, GROUP_BITS, MAX_ENCODED_LEN_U64, PAYLOAD_MASK, SIGN_BIT};
use crate::error::{LebError, Result};
use crate::limits::{Limits, Validation};

/// Inline buffer large enough for any encoded 64-bit value
pub type Encoded = SmallVec<[u8; MAX_ENCODED_LEN_U64]>;

/// Encode a u64 as unsigned LEB128
pub fn encode_unsigned(value: u64) -> Encoded {
    let mut result = Encoded::new();
    let mut x = value;

    while x >= u64::from(CONTINUATION_BIT) {
        result.push((x as u8 & PAYLOAD_MASK) | CONTINUATION_BIT);
        x >>= GROUP_BITS;
    }
    result.push(x as u8);

    result
}

/// Encode an i64 as signed LEB128
///
/// Groups are taken from the two's-complement pattern with an arithmetic
/// shift. Emission stops once the remaining bits are pure sign extension and
/// the last group's 0x40 bit already shows that sign, so a nonnegative value
/// whose top group has 0x40 set gets one extra zero group.
pub fn encode_signed(value: i64) -> Encoded {
    let mut result = Encoded::new();
    let mut x = value;

    loop {
        let byte = x as u8 & PAYLOAD_MASK;
        x >>= GROUP_BITS;

        let negative_group = byte & SIGN_BIT != 0;
        if (x == 0 && !negative_group) || (x == -1 && negative_group) {
            result.push(byte);
            return result;
        }
        result.push(byte | CONTINUATION_BIT);
    }
}

/// Number of bytes [`encode_unsigned`] emits for `value`
pub fn encoded_len_unsigned(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    groups_for_bits(bits.max(1))
}

/// Number of bytes [`encode_signed`] emits for `value`
pub fn encoded_len_signed(value: i64) -> usize {
    // Magnitude bits plus one sign bit.
    let redundant = if value < 0 {
        value.leading_ones()
    } else {
        value.leading_zeros()
    };
    groups_for_bits(i64::BITS - redundant + 1)
}

fn groups_for_bits(bits: u32) -> usize {
    bits.div_ceil(GROUP_BITS) as usize
}

/// Append the unsigned encoding of `value` to `out`, returning bytes written
pub fn write_unsigned(out: &mut Vec<u8>, value: u64) -> usize {
    let encoded = encode_unsigned(value);
    out.extend_from_slice(&encoded);
    encoded.len()
}

/// Append the signed encoding of `value` to `out`, returning bytes written
pub fn write_signed(out: &mut Vec<u8>, value: i64) -> usize {
    let encoded = encode_signed(value);
    out.extend_from_slice(&encoded);
    encoded.len()
}

/// Decode unsigned LEB128 under the default [`Limits`]
pub fn decode_unsigned(bytes: &[u8]) -> Result<u64> {
    decode_unsigned_with(bytes, &Limits::default())
}

/// Decode unsigned LEB128 from exactly `bytes`
///
/// The whole slice is one encoded value; framing within a larger stream is
/// the caller's job. Payload bits beyond bit 63 are discarded.
pub fn decode_unsigned_with(bytes: &[u8], limits: &Limits) -> Result<u64> {
    check_framing(bytes, limits)?;
    Ok(concat_groups(bytes))
}

/// Decode signed LEB128 under the default [`Limits`]
pub fn decode_signed(bytes: &[u8]) -> Result<i64> {
    decode_signed_with(bytes, &Limits::default())
}

/// Decode signed LEB128 from exactly `bytes`
///
/// The sign comes from bit 0x40 of the last byte. A tenth byte only
/// contributes its lowest bit (bit 63), so there its 0x40 bit is discarded
/// payload and bit 63 alone decides the sign.
pub fn decode_signed_with(bytes: &[u8], limits: &Limits) -> Result<i64> {
    let last = check_framing(bytes, limits)?;
    let raw = concat_groups(bytes);

    if last & SIGN_BIT == 0 {
        return Ok(raw as i64);
    }

    // Sign-extend from the width covered by the groups. At 10 groups the
    // pattern already spans all 64 bits.
    let width = GROUP_BITS * bytes.len() as u32;
    let extended = if width < u64::BITS {
        raw | (u64::MAX << width)
    } else {
        raw
    };
    Ok(extended as i64)
}

/// Concatenate the 7-bit groups, most significant (last byte) first.
fn concat_groups(bytes: &[u8]) -> u64 {
    bytes.iter().rev().fold(0u64, |acc, &byte| {
        (acc << GROUP_BITS) | u64::from(byte & PAYLOAD_MASK)
    })
}

/// Enforce length and continuation rules, returning the final byte.
fn check_framing(bytes: &[u8], limits: &Limits) -> Result<u8> {
    let Some((&last, body)) = bytes.split_last() else {
        debug!("LEB128 decode of empty input");
        return Err(LebError::UnexpectedEof);
    };

    let max = limits.effective_max_len();
    if bytes.len() > max {
        debug!(len = bytes.len(), max, "LEB128 input exceeds length bound");
        return Err(LebError::LengthOverflow {
            len: bytes.len(),
            max,
        });
    }

    if limits.validation == Validation::Strict {
        if let Some(index) = body.iter().position(|&b| b & CONTINUATION_BIT == 0) {
            debug!(index, "LEB128 byte missing continuation bit");
            return Err(LebError::MissingContinuation { index });
        }
        if last & CONTINUATION_BIT != 0 {
            debug!(len = bytes.len(), "LEB128 final byte has continuation bit");
            return Err(LebError::UnterminatedSequence);
        }
    }

    Ok(last)
}

//! Interleave and deinterleave of two 32-bit values through the byte tables.

use crate::lut::{DEINTERLEAVE_TABLE, EVEN_BITS_MASK, INTERLEAVE_TABLE, ODD_BITS_MASK};

/// Spread the byte of `value` starting at bit `shift` into a 64-bit chunk.
#[inline(always)]
fn spread(value: u32, shift: u32) -> u64 {
    u64::from(INTERLEAVE_TABLE[((value >> shift) & 0xFF) as usize])
}

/// Gather the nibble selected by `mask` from the byte of `code` at bit `shift`.
#[inline(always)]
fn gather(code: u64, shift: u32, mask: u8) -> u32 {
    let byte = (code >> shift) as u8;
    u32::from(DEINTERLEAVE_TABLE[(byte & mask) as usize])
}

/// Interleaves two 32-bit values into one 64-bit Morton code.
///
/// Bit *i* of `value_a` becomes bit *2i* of the result and bit *i* of
/// `value_b` becomes bit *2i + 1*.
///
/// # Example
///
/// ```
/// use bit_interleave::interleave;
///
/// assert_eq!(interleave(1, 0), 0b01);
/// assert_eq!(interleave(0, 1), 0b10);
/// assert_eq!(interleave(0b11, 0b01), 0b0111);
/// ```
#[inline]
pub fn interleave(value_a: u32, value_b: u32) -> u64 {
    spread(value_a, 0)
        | (spread(value_a, 8) << 16)
        | (spread(value_a, 16) << 32)
        | (spread(value_a, 24) << 48)
        | (spread(value_b, 0) << 1)
        | (spread(value_b, 8) << 17)
        | (spread(value_b, 16) << 33)
        | (spread(value_b, 24) << 49)
}

/// Splits a 64-bit Morton code back into the two values it was built from.
///
/// Returns `(even, odd)`: the value whose bits sit on the even positions
/// first. This is the exact inverse of [`interleave`].
///
/// # Example
///
/// ```
/// use bit_interleave::{deinterleave, interleave};
///
/// assert_eq!(deinterleave(0b0111), (0b11, 0b01));
/// assert_eq!(deinterleave(interleave(0xDEAD_BEEF, 7)), (0xDEAD_BEEF, 7));
/// ```
#[inline]
pub fn deinterleave(code: u64) -> (u32, u32) {
    let mut value_a = 0u32;
    let mut value_b = 0u32;
    for k in 0..8u32 {
        value_a |= gather(code, 8 * k, EVEN_BITS_MASK) << (4 * k);
        value_b |= gather(code, 8 * k, ODD_BITS_MASK) << (4 * k);
    }
    (value_a, value_b)
}

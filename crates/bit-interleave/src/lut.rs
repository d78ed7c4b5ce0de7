//! Precomputed lookup tables for O(1) bit interleaving.
//!
//! Both tables are computed at compile time and stored in read-only memory.
//! They are pure functions of their index: calling [`interleave_table`] or
//! [`deinterleave_table`] again always yields byte-identical arrays.
//!
//! # Tables Provided
//!
//! - **Interleave (256 × u16)**: spreads 8 bits so bit *i* lands on bit *2i*
//! - **Deinterleave (256 × u8)**: collapses bit pairs back into a nibble
//!
//! # Example
//!
//! ```
//! use bit_interleave::lut::{gather_nibble, spread_byte, EVEN_BITS_MASK, ODD_BITS_MASK};
//!
//! assert_eq!(spread_byte(0b1111), 0b0101_0101);
//! assert_eq!(spread_byte(0xFF), 0x5555);
//!
//! // 0b1101_1000: even bits 0,0,1,1 and odd bits 0,1,0,1.
//! assert_eq!(gather_nibble(0b1101_1000 & EVEN_BITS_MASK), 0b1100);
//! assert_eq!(gather_nibble(0b1101_1000 & ODD_BITS_MASK), 0b1010);
//! ```

/// Selects bits 0, 2, 4 and 6 of a byte.
pub const EVEN_BITS_MASK: u8 = 0x55;

/// Selects bits 1, 3, 5 and 7 of a byte.
pub const ODD_BITS_MASK: u8 = 0xAA;

// ============================================================================
// Generators
// ============================================================================

/// Builds the interleave table.
///
/// Entry `x` holds the 8 bits of `x` with a zero bit inserted above each one,
/// so bit *i* of `x` becomes bit *2i* of the entry and every odd bit is clear.
pub const fn interleave_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0u16;
    while i < 256 {
        let mut spread = 0u16;
        let mut bit = 0;
        while bit < 8 {
            spread |= ((i >> bit) & 1) << (2 * bit);
            bit += 1;
        }
        table[i as usize] = spread;
        i += 1;
    }
    table
}

/// Builds the deinterleave table.
///
/// Bit *k* of entry `x` is set iff bit *2k* or bit *2k+1* of `x` is set.
/// Masking the index with [`EVEN_BITS_MASK`] therefore gathers the even bits
/// and masking with [`ODD_BITS_MASK`] gathers the odd bits.
pub const fn deinterleave_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        let mut nibble = 0u8;
        let mut k = 0;
        while k < 4 {
            if (i >> (2 * k)) & 0b11 != 0 {
                nibble |= 1 << k;
            }
            k += 1;
        }
        table[i as usize] = nibble;
        i += 1;
    }
    table
}

// ============================================================================
// Tables
// ============================================================================

/// Precomputed interleave table.
///
/// `INTERLEAVE_TABLE[x]` = `x` with its bits moved to the even positions.
/// Size: 512 bytes (fits in L1 cache).
pub static INTERLEAVE_TABLE: [u16; 256] = interleave_table();

/// Precomputed deinterleave table.
///
/// `DEINTERLEAVE_TABLE[x & 0x55]` gathers the even bits of `x`,
/// `DEINTERLEAVE_TABLE[x & 0xAA]` gathers the odd bits.
/// Size: 256 bytes (fits in L1 cache).
pub static DEINTERLEAVE_TABLE: [u8; 256] = deinterleave_table();

/// O(1) spread of one byte onto the even bit positions of a `u16`.
#[inline]
pub fn spread_byte(value: u8) -> u16 {
    INTERLEAVE_TABLE[value as usize]
}

/// O(1) collapse of a masked byte into its 4-bit nibble.
///
/// The caller masks with [`EVEN_BITS_MASK`] or [`ODD_BITS_MASK`] first;
/// unmasked input ORs each bit pair together.
#[inline]
pub fn gather_nibble(value: u8) -> u8 {
    DEINTERLEAVE_TABLE[value as usize]
}

//! Typed conformance findings.
//!
//! Validators collect [`Violation`]s and render them into the detail lines of
//! a failing [`TestResult`](crate::TestResult).

use thiserror::Error;

/// Which lookup table a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The 8 → 16 bit spreading table.
    Interleave,
    /// The 8 → 4 bit gathering table.
    Deinterleave,
}

impl core::fmt::Display for Table {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Table::Interleave => f.write_str("interleave"),
            Table::Deinterleave => f.write_str("deinterleave"),
        }
    }
}

/// Which input of `interleave` a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// First operand, stored on the even bit positions.
    A,
    /// Second operand, stored on the odd bit positions.
    B,
}

impl Operand {
    /// The operand sharing the code with this one.
    pub fn other(self) -> Operand {
        match self {
            Operand::A => Operand::B,
            Operand::B => Operand::A,
        }
    }
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operand::A => f.write_str("a"),
            Operand::B => f.write_str("b"),
        }
    }
}

/// A single broken law, with enough context to reproduce it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A static table entry differs from a fresh regeneration.
    #[error("{table} table entry {index:#04x}: static {actual:#x}, regenerated {expected:#x}")]
    TableEntry {
        /// Table the entry belongs to.
        table: Table,
        /// Byte index into the table.
        index: u8,
        /// Value stored in the static table.
        actual: u16,
        /// Value produced by the generator.
        expected: u16,
    },

    /// Gathering a spread byte did not give back its nibble.
    #[error("byte {byte:#04x} ({parity} bits, nibble {nibble}): gathered {actual:#x}, expected {expected:#x}")]
    TableComposition {
        /// Source byte fed through the interleave table.
        byte: u8,
        /// `"even"` or `"odd"`.
        parity: &'static str,
        /// 0 for the low nibble, 1 for the high nibble.
        nibble: u8,
        /// Nibble returned by the deinterleave table.
        actual: u8,
        /// Nibble of the source byte.
        expected: u8,
    },

    /// `deinterleave(interleave(a, b))` did not return `(a, b)`.
    #[error("round trip ({a:#010x}, {b:#010x}) -> {code:#018x} -> ({got_a:#010x}, {got_b:#010x})")]
    RoundTrip {
        /// Even-position input.
        a: u32,
        /// Odd-position input.
        b: u32,
        /// Interleaved code.
        code: u64,
        /// First value recovered from the code.
        got_a: u32,
        /// Second value recovered from the code.
        got_b: u32,
    },

    /// A single-bit input landed on the wrong output position.
    #[error("bit {bit} of {operand} produced {actual:#018x}, expected {expected:#018x}")]
    BitPlacement {
        /// Operand whose bit was set.
        operand: Operand,
        /// Input bit index.
        bit: u32,
        /// Code produced.
        actual: u64,
        /// Code with only the target bit set.
        expected: u64,
    },

    /// A fixed interleave vector produced the wrong code.
    #[error("{case}: interleave({a:#010x}, {b:#010x}) = {actual:#018x}, expected {expected:#018x}")]
    Interleave {
        /// Name of the fixed case.
        case: &'static str,
        /// Even-position input.
        a: u32,
        /// Odd-position input.
        b: u32,
        /// Code produced.
        actual: u64,
        /// Expected code.
        expected: u64,
    },

    /// A fixed deinterleave vector produced the wrong pair.
    #[error("{case}: deinterleave({code:#018x}) = {actual:x?}, expected {expected:x?}")]
    Deinterleave {
        /// Name of the fixed case.
        case: &'static str,
        /// Code decoded.
        code: u64,
        /// Pair produced.
        actual: (u32, u32),
        /// Expected pair.
        expected: (u32, u32),
    },

    /// Changing one operand moved bits on the other operand's parity.
    #[error(
        "changing only {changed} moved bits on {}'s parity: {before:#018x} -> {after:#018x} (leaked {leaked:#018x})",
        .changed.other()
    )]
    Independence {
        /// Operand that was re-drawn.
        changed: Operand,
        /// Code before the change.
        before: u64,
        /// Code after the change.
        after: u64,
        /// Differing bits on the other operand's parity.
        leaked: u64,
    },
}

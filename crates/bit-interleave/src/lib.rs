//! Bit Interleave - O(1) Morton (Z-order) coding of two 32-bit values
//!
//! Interleaving places the bits of two unsigned 32-bit values on alternating
//! positions of one unsigned 64-bit code. Sorting by that code keeps 2D
//! neighbours close together, which is what spatial indexes build on.
//!
//! # Bit Layout
//!
//! ```text
//! bit:    63  62  61  60  ...   3   2   1   0
//! code:   b31 a31 b30 a30 ...  b1  a1  b0  a0
//! ```
//!
//! The layout is a stable contract: downstream curve encoders depend on it.
//!
//! # Lookup Tables
//!
//! Both directions run on two 256-entry tables computed at compile time
//! (see [`lut`]). Interleave performs 8 table reads, deinterleave 16.
//! Nothing is allocated and nothing is mutated, so both functions are safe to
//! call from any number of threads.
//!
//! # Example
//!
//! ```
//! use bit_interleave::{deinterleave, interleave};
//!
//! let code = interleave(0x1234_5678, 0x9ABC_DEF0);
//! assert_eq!(code, 0x838C_8FB0_B3BC_BF40);
//! assert_eq!(deinterleave(code), (0x1234_5678, 0x9ABC_DEF0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs
)]

// Interleave / deinterleave kernels
mod interleave;

// Precomputed byte tables
pub mod lut;

pub use interleave::{deinterleave, interleave};

//! Bit-sliced AES-128 in CTR mode (FIPS 197 / NIST SP 800-38A).
//!
//! Four 16-byte blocks are processed together, packed into eight 64-bit
//! "bit plane" words ([`bitslice::Planes`]) rather than the usual byte
//! matrix, so that every AES round transformation (SubBytes, ShiftRows,
//! MixColumns, AddRoundKey) runs as plain word-wide bitwise logic with no
//! table lookups and no data-dependent branching or indexing.
//!
//! [`ctr`] is the public entry point; [`key_schedule`] exposes the expanded
//! round keys if callers need to reuse them across multiple [`ctr`] calls on
//! the same key.

pub mod bitslice;
pub mod ctr;
pub mod schedule;
pub mod sbox;

pub use ctr::{ctr, key_schedule};
pub use schedule::KeySchedule;

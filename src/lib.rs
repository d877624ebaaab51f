//! Bit-sliced AES-128-CTR and Poly1305: the two hard cryptographic cores of
//! a small-constant-time crypto toolkit, extracted on their own.
//!
//! - [`aes`] — an eight-block bit-sliced AES-128 implementation driving a
//!   CTR-mode stream cipher.
//! - [`poly1305`] — a one-time authenticator over GF(2^130 - 5), using a
//!   three-limb 44/44/42-bit saturated radix.
//!
//! The two modules share only [`util`]'s endian-aware word loads and have no
//! runtime coupling: a caller reaching for AES-CTR never pulls in Poly1305's
//! field arithmetic, and vice versa.

#[cfg(test)]
mod test;

pub mod aes;
pub mod poly1305;
mod util;

pub use aes::{ctr, key_schedule, KeySchedule};
pub use poly1305::{onetimeauth, Poly1305};

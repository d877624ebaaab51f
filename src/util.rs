//! Endian-aware word loads and stores from unaligned byte buffers.
//!
//! Both [`crate::aes`] and [`crate::poly1305`] are built on top of fixed-size
//! byte buffers; this module is the only place that reasons about byte order.

/// Load a big-endian 32-bit word from the first 4 bytes of `b`.
pub fn load32_be(b: &[u8]) -> u32 {
    u32::from_be_bytes(b[..4].try_into().unwrap())
}

/// Store `n` as a big-endian 32-bit word into the first 4 bytes of `b`.
pub fn store32_be(b: &mut [u8], n: u32) {
    b[..4].copy_from_slice(&n.to_be_bytes());
}

/// Load a little-endian 64-bit word from the first 8 bytes of `b`.
pub fn load64_le(b: &[u8]) -> u64 {
    u64::from_le_bytes(b[..8].try_into().unwrap())
}

/// Store `n` as a little-endian 64-bit word into the first 8 bytes of `b`.
pub fn store64_le(b: &mut [u8], n: u64) {
    b[..8].copy_from_slice(&n.to_le_bytes());
}

/// Load a little-endian 128-bit word from the first 16 bytes of `b`.
///
/// Poly1305's field arithmetic widens products of 44-bit limbs into 128-bit
/// lanes; Rust has a native `u128`, so unlike the reference implementation
/// (which emulates this with a 64+64 limb pair on platforms without one)
/// this is a direct load.
pub fn load128_le(b: &[u8]) -> u128 {
    u128::from_le_bytes(b[..16].try_into().unwrap())
}

/// Store `n` as a little-endian 128-bit word into the first 16 bytes of `b`.
pub fn store128_le(b: &mut [u8], n: u128) {
    b[..16].copy_from_slice(&n.to_le_bytes());
}

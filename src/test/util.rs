//! Tests for the shared endian-aware word loads/stores.

use crate::util::{load32_be, load64_le, store32_be, store64_le};

#[test]
fn be32_round_trips() {
    let mut buf = [0u8; 4];
    store32_be(&mut buf, 0x0102_0304);
    assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    assert_eq!(load32_be(&buf), 0x0102_0304);
}

#[test]
fn le64_round_trips() {
    let mut buf = [0u8; 8];
    store64_le(&mut buf, 0x0102_0304_0506_0708);
    assert_eq!(buf, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(load64_le(&buf), 0x0102_0304_0506_0708);
}

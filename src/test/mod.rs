//! Test vectors and invariant checks for both cores.
//!
//! One file per module under test, collected here rather than in a
//! top-level `tests/` directory, since these tests reach into private
//! helpers (`bitslice`, `field`) that a `tests/` integration binary could
//! not see.

mod poly1305;
mod util;

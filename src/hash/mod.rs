//! Hash functions shipped with the toolkit.
//!
//! Currently SHA-256 per FIPS 180-4. The hash sits beside the
//! arithmetic core rather than inside it: the only interaction is the
//! modular subtraction used to size the padding run.

pub mod sha256;

/// Re-exports of the SHA-256 entry points.
pub use sha256::core::{sha256, sha256_bits};

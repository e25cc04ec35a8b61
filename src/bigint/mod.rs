//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] stores a sign flag plus a little-endian sequence of 32-bit
//! limbs (radix 2³²). The representation is kept **normalized**: the limb
//! sequence is never empty, the most-significant limb is non-zero except
//! for the single-limb zero, and zero is never negative. Every value has
//! exactly one encoding.
//!
//! ## Provided operations
//!
//! - The full operator surface: `+ - * / % << >>`, unary `-`, the
//!   compound assignments, and total ordering. `*`, `/` and `%` also
//!   accept a `u64` right-hand side.
//! - Decimal I/O: [`FromStr`](std::str::FromStr) accepts an optional
//!   leading sign and ignores `,`, `'` and space separators; `Display`
//!   prints the canonical decimal form.
//! - Conversions from the primitive integers, and fallible conversions
//!   back via `TryFrom`.
//! - Structural helpers: bit length, trailing zeros, single-bit access,
//!   absolute value, power-of-two test, random generation.
//!
//! ## Semantics of division
//!
//! `/` and `%` truncate toward zero, exactly like Rust's primitive
//! integers: the quotient's sign is the XOR of the operand signs, the
//! remainder carries the dividend's sign, and
//! `(a / b) * b + (a % b) == a` holds for every `b != 0`.
//! [`BigInt::modulus`] is the number-theoretic reduction instead: it
//! rejects non-positive moduli and always returns a value in `[0, m)`.
//!
//! Division uses Knuth's Algorithm D; multiplication is the schoolbook
//! Algorithm M. See the `algorithms` submodule.

mod conv;
mod core;
mod ops;

pub(crate) mod algorithms;

pub use self::conv::{ParseBigIntError, TryFromBigIntError};
pub use self::core::{BigInt, BigIntError};

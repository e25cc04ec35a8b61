//! Pseudorandom number generation.
//!
//! The toolkit draws its randomness from a deterministic **MT19937-64**
//! Mersenne Twister, seeded once from operating-system entropy (or from a
//! caller-supplied seed for reproducible runs).
//!
//! Every randomized operation in the crate ([`crate::bigint::BigInt::random`],
//! the probabilistic tail of Miller–Rabin, Lenstra factorization) takes
//! `&mut Mt19937`, so the caller decides where the state lives and how it
//! is shared. A generator value is not safe for concurrent mutation; keep
//! one per thread or serialize access externally.
//!
//! # Security
//!
//! MT19937-64 is **not** cryptographically secure: its state can be
//! reconstructed from a modest amount of output. It is suitable for
//! randomized algorithms and tests, not for key material.

mod mt19937;

/// Re-export of the crate's standard generator.
pub use mt19937::Mt19937;

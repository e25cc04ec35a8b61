//! Number-theoretic and elliptic-curve building blocks.
//!
//! This crate provides a small, self-contained toolkit for integer and
//! elliptic-curve arithmetic. The focus is on **clarity, predictability,
//! and auditability** rather than on raw throughput: every algorithm is
//! written out explicitly, with well-defined semantics and no hidden
//! fast paths.
//!
//! # Module overview
//!
//! - `bigint`
//!   An arbitrary-precision signed integer (`BigInt`) stored as a sign
//!   flag plus little-endian 32-bit limbs. Supports the full arithmetic
//!   operator surface, Knuth's Algorithm D for division, bit-shifts,
//!   decimal parsing and formatting, and random generation.
//!
//! - `modmath`
//!   Modular arithmetic over `BigInt`: gcd, Bézout coefficients, modular
//!   inverse and exponentiation, the Euler totient, a Miller–Rabin
//!   primality test that is deterministic below the Sorenson–Webster
//!   bound, and Lenstra's elliptic-curve factorization.
//!
//! - `curve`
//!   Short Weierstrass curves `y² = x³ + ax + b` over a prime field,
//!   with the chord-and-tangent group law, scalar multiplication, and
//!   exhaustive point enumeration for small fields.
//!
//! - `hash`
//!   A FIPS 180-4 SHA-256 implementation operating on bit sequences.
//!   It is a collaborator of the arithmetic core, not part of it.
//!
//! - `rng`
//!   A deterministic MT19937-64 pseudorandom generator, seedable from
//!   operating-system entropy or from a caller-supplied seed. It is
//!   **not** a cryptographically secure generator.
//!
//! # Design goals
//!
//! - Explicit algorithms with stable, well-defined semantics
//! - Recoverable errors for every detectable misuse
//! - A dependency-free arithmetic core
//! - Single-threaded, synchronous operation; values are plain owned data
//!
//! The `montgomery` cargo feature switches modular exponentiation and
//! scalar multiplication to Montgomery-ladder schedules, which perform
//! the same operation sequence for every bit of the secret operand.

mod os;

pub mod bigint;
pub mod curve;
pub mod hash;
pub mod modmath;
pub mod rng;

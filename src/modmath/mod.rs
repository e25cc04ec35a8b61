//! Modular arithmetic over [`BigInt`].
//!
//! Free functions in the style of the underlying number theory: greatest
//! common divisor, Bézout coefficients, modular inverse, modular
//! subtraction and exponentiation, the Euler totient, Miller–Rabin
//! primality testing, and Lenstra's elliptic-curve factorization.
//!
//! All operations reduce into `[0, m)`; a zero modulus is
//! [`ModMathError::DivisionByZero`] and a negative one is
//! [`ModMathError::NegativeModulus`].
//!
//! With the `montgomery` cargo feature enabled, [`modexp`] runs a
//! Montgomery ladder instead of plain square-and-multiply: one multiply
//! and one square per exponent bit, regardless of the bit's value.

mod lenstra;
mod prime;

pub use self::lenstra::{lenstra_factorization, lenstra_factorization_with};
pub use self::prime::{miller_rabin, miller_rabin_with};

use crate::bigint::{BigInt, BigIntError};

/// Errors raised by modular arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModMathError {
    /// The modulus was zero.
    DivisionByZero,

    /// The modulus was negative.
    NegativeModulus,

    /// No inverse exists: the operand and the modulus share a factor.
    NotInvertible,
}

impl From<BigIntError> for ModMathError {
    fn from(err: BigIntError) -> Self {
        match err {
            BigIntError::DivisionByZero => Self::DivisionByZero,
            BigIntError::NegativeModulus => Self::NegativeModulus,
        }
    }
}

/// Greatest common divisor of the absolute values.
///
/// Iterative Euclidean descent: `gcd(a, b) = gcd(b mod a, a)`, with
/// `gcd(0, b) = |b|`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();

    while !a.is_zero() {
        let r = &b % &a;

        b = a;
        a = r;
    }

    b
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, s, t)` with `s·a + t·b = g = gcd(a, b)`.
fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut pr, mut r) = (a.clone(), b.clone());
    let (mut ps, mut s) = (BigInt::one(), BigInt::zero());
    let (mut pt, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &pr / &r;

        let next_r = &pr - &(&q * &r);
        pr = std::mem::replace(&mut r, next_r);

        let next_s = &ps - &(&q * &s);
        ps = std::mem::replace(&mut s, next_s);

        let next_t = &pt - &(&q * &t);
        pt = std::mem::replace(&mut t, next_t);
    }

    (pr, ps, pt)
}

/// Bézout coefficients `(s, t)` with `s·a + t·b = gcd(a, b)`.
///
/// When `b < a` the inputs are swapped before the descent, so the first
/// coefficient then belongs to `b`; the caller is responsible for
/// tracking which coefficient corresponds to which input.
pub fn bezout_coefficients(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (_, s, t) = if b < a { ext_gcd(b, a) } else { ext_gcd(a, b) };

    (s, t)
}

/// Modular inverse: the `v` in `[0, m)` with `n·v ≡ 1 (mod m)`.
///
/// # Errors
/// [`ModMathError::NotInvertible`] when `gcd(n, m) != 1`, plus the usual
/// modulus errors.
pub fn modinv(n: &BigInt, m: &BigInt) -> Result<BigInt, ModMathError> {
    let n = n.modulus(m)?;
    let (g, s, _) = ext_gcd(&n, m);

    if g != BigInt::one() {
        return Err(ModMathError::NotInvertible);
    }

    Ok(s.modulus(m)?)
}

/// Modular subtraction `(a − b) mod m` by repeated addition: `m` is
/// added to `a` until the difference is non-negative.
pub fn modsub(a: &BigInt, b: &BigInt, m: &BigInt) -> Result<BigInt, ModMathError> {
    if m.is_zero() {
        return Err(ModMathError::DivisionByZero);
    }

    if m.is_negative() {
        return Err(ModMathError::NegativeModulus);
    }

    if a == b {
        return Ok(BigInt::zero());
    }

    let mut a = a.clone();
    while a < *b {
        a += m;
    }

    Ok((&a - b).modulus(m)?)
}

/// Modular exponentiation `base^exp mod m` by square-and-multiply over
/// the exponent's bits, most significant first (or a Montgomery ladder
/// with the `montgomery` feature).
///
/// A negative exponent is resolved as `(base^|exp|)⁻¹ mod m` and fails
/// with [`ModMathError::NotInvertible`] when the inverse does not exist.
pub fn modexp(base: &BigInt, exp: &BigInt, m: &BigInt) -> Result<BigInt, ModMathError> {
    if m.is_zero() {
        return Err(ModMathError::DivisionByZero);
    }

    if m.is_negative() {
        return Err(ModMathError::NegativeModulus);
    }

    if exp.is_negative() {
        let positive = modexp(base, &exp.abs(), m)?;

        return modinv(&positive, m);
    }

    // 0^0 is taken as 1; every other power of a base ≡ 0 is 0.
    if exp.is_zero() {
        return Ok(BigInt::one().modulus(m)?);
    }

    let base = base.modulus(m)?;
    if base.is_zero() {
        return Ok(BigInt::zero());
    }

    // Short-circuit squaring.
    if *exp == BigInt::from(2u32) {
        return Ok((&base * &base).modulus(m)?);
    }

    Ok(modexp_reduced(&base, exp, m))
}

/// Exponentiation core. Requires `base` reduced and non-zero, `exp > 0`,
/// `m > 1`.
#[cfg(not(feature = "montgomery"))]
pub(crate) fn modexp_reduced(base: &BigInt, exp: &BigInt, m: &BigInt) -> BigInt {
    let mut acc = BigInt::one();

    for i in (0..exp.bit_length()).rev() {
        acc = reduce(&(&acc * &acc), m);

        if exp.bit(i) {
            acc = reduce(&(&acc * base), m);
        }
    }

    acc
}

/// Exponentiation core, Montgomery-ladder schedule: one multiply and one
/// square per bit, independent of the bit's value. Requires `base`
/// reduced and non-zero, `exp > 0`, `m > 1`.
#[cfg(feature = "montgomery")]
pub(crate) fn modexp_reduced(base: &BigInt, exp: &BigInt, m: &BigInt) -> BigInt {
    let mut acc = BigInt::one();
    let mut g = base.clone();

    for i in (0..exp.bit_length()).rev() {
        if exp.bit(i) {
            acc = reduce(&(&acc * &g), m);
            g = reduce(&(&g * &g), m);
        } else {
            g = reduce(&(&acc * &g), m);
            acc = reduce(&(&acc * &acc), m);
        }
    }

    acc
}

/// Euler's totient `ϕ(n)`.
///
/// Short-circuits: `ϕ(0) = 0`, `ϕ(1) = 1`, `ϕ(p) = p − 1` for primes.
/// Factors of two are stripped via multiplicativity,
/// `ϕ(2^k · r) = 2^(k−1) · ϕ(r)`. Odd composites fall back to counting
/// coprime residues, which is exponential in the size of `n` and only
/// acceptable for small values.
pub fn totient(n: &BigInt) -> BigInt {
    let n = n.abs();
    let one = BigInt::one();

    if n <= one {
        return n;
    }

    let k = n.trailing_zeros();
    if k > 0 {
        let r = &n >> k as i64;
        let halved = &one << (k - 1) as i64;

        if r == one {
            return halved;
        }

        return &halved * &totient(&r);
    }

    // miller_rabin answers "composite?"; an odd non-composite is prime.
    if !prime::miller_rabin(&n) {
        return &n - &one;
    }

    let mut count = one.clone();
    let mut i = BigInt::from(2u32);

    while i < n {
        if gcd(&i, &n) == one {
            count += &one;
        }

        i += &one;
    }

    count
}

/// Reduction into `[0, m)` for crate internals that have already
/// validated `m > 0`.
pub(crate) fn reduce(v: &BigInt, m: &BigInt) -> BigInt {
    let r = v % m;

    if r.is_negative() {
        r + m
    } else {
        r
    }
}

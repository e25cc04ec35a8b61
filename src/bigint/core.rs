//! `BigInt` representation and structural operations.

use std::cmp::Ordering;

use crate::bigint::algorithms::division;
use crate::rng::Mt19937;

/// Arbitrary-precision signed integer.
///
/// The value is stored as a sign flag plus 32-bit limbs in little-endian
/// order. All constructors and arithmetic re-normalize before returning,
/// so every value has exactly one representation; in particular zero is a
/// single zero limb with a positive sign.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Little-endian limbs, radix 2³². Never empty; the top limb is
    /// non-zero unless the value is zero.
    pub(crate) limbs: Vec<u32>,

    /// Sign flag. Always `false` for zero.
    pub(crate) negative: bool,
}

/// Errors raised by `BigInt` arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// Division or modulus by a zero divisor.
    DivisionByZero,

    /// The modulus operand of [`BigInt::modulus`] was negative.
    NegativeModulus,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        Self {
            limbs: vec![0],
            negative: false,
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self {
            limbs: vec![1],
            negative: false,
        }
    }

    /// Builds a non-negative integer from raw little-endian limbs.
    ///
    /// The sequence is normalized: trailing zero limbs are dropped and an
    /// empty sequence becomes zero.
    pub fn from_limbs(limbs: Vec<u32>) -> Self {
        let mut value = Self {
            limbs,
            negative: false,
        };

        value.normalize();
        value
    }

    /// Generates a uniformly random non-negative integer of at most
    /// `bits` bits.
    ///
    /// Whole limbs are filled from the generator and the top partial limb
    /// is masked down so the result never exceeds `bits` bits.
    pub fn random(bits: usize, rng: &mut Mt19937) -> Self {
        let mut limbs = Vec::with_capacity(bits / 32 + 1);

        for _ in 0..bits / 32 {
            limbs.push(rng.next_u32());
        }

        let rem = bits % 32;
        if rem != 0 {
            limbs.push(rng.next_u32() >> (32 - rem));
        }

        Self::from_limbs(limbs)
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Returns `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Bit length of the magnitude. Zero has bit length 0.
    pub fn bit_length(&self) -> usize {
        if self.is_zero() {
            return 0;
        }

        let top = *self.limbs.last().unwrap_or(&0);

        (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize)
    }

    /// Number of low zero bits in the magnitude. Zero reports 0.
    pub fn trailing_zeros(&self) -> usize {
        for (i, &limb) in self.limbs.iter().enumerate() {
            if limb != 0 {
                return i * 32 + limb.trailing_zeros() as usize;
            }
        }

        0
    }

    /// Returns bit `n` of the magnitude (bit 0 is least significant).
    ///
    /// Bits at or above the bit length read as `false`.
    pub fn bit(&self, n: usize) -> bool {
        match self.limbs.get(n / 32) {
            Some(&limb) => limb & (1u32 << (n % 32)) != 0,
            None => false,
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            limbs: self.limbs.clone(),
            negative: false,
        }
    }

    /// Returns `true` if the magnitude is a power of two.
    pub fn is_power_of_two(&self) -> bool {
        !self.is_zero() && self.trailing_zeros() == self.bit_length() - 1
    }

    /// Computes quotient and remainder in one pass.
    ///
    /// Truncating semantics: the quotient's sign is the XOR of the
    /// operand signs and the remainder carries the dividend's sign, so
    /// `q * rhs + r == self`.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), BigIntError> {
        if rhs.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }

        let (q_limbs, r_limbs) = division::div_rem_magnitudes(&self.limbs, &rhs.limbs);

        let mut q = Self {
            limbs: q_limbs,
            negative: self.negative ^ rhs.negative,
        };
        let mut r = Self {
            limbs: r_limbs,
            negative: self.negative,
        };

        q.normalize();
        r.normalize();

        Ok((q, r))
    }

    /// Number-theoretic modulus: the unique value in `[0, m)` congruent
    /// to `self` modulo `m`.
    ///
    /// # Errors
    /// [`BigIntError::DivisionByZero`] if `m` is zero,
    /// [`BigIntError::NegativeModulus`] if `m` is negative.
    pub fn modulus(&self, m: &Self) -> Result<Self, BigIntError> {
        if m.is_negative() {
            return Err(BigIntError::NegativeModulus);
        }

        let (_, mut r) = self.div_rem(m)?;

        if r.is_negative() {
            r += m;
        }

        Ok(r)
    }

    /// Drops trailing zero limbs and canonicalizes the zero sign.
    pub(crate) fn normalize(&mut self) {
        normalize_limbs(&mut self.limbs);

        if self.limbs == [0] {
            self.negative = false;
        }
    }

    /// Compares magnitudes, ignoring signs.
    pub(crate) fn cmp_magnitude(&self, other: &Self) -> Ordering {
        cmp_limbs(&self.limbs, &other.limbs)
    }
}

impl Default for BigInt {
    /// The value zero.
    fn default() -> Self {
        Self::zero()
    }
}

/// Removes leading (most-significant) zero limbs, leaving at least one.
pub(crate) fn normalize_limbs(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && *limbs.last().unwrap_or(&1) == 0 {
        limbs.pop();
    }

    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Compares two normalized magnitudes.
pub(crate) fn cmp_limbs(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }

    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x.cmp(y);
        }
    }

    Ordering::Equal
}

/// Adds two magnitudes with a 64-bit carry accumulator.
pub(crate) fn add_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;

    for (i, &limb) in long.iter().enumerate() {
        let mut sum = limb as u64 + carry;

        if let Some(&other) = short.get(i) {
            sum += other as u64;
        }

        out.push(sum as u32);
        carry = sum >> 32;
    }

    if carry != 0 {
        out.push(carry as u32);
    }

    out
}

/// Subtracts magnitudes with a signed borrow; requires `a >= b`.
pub(crate) fn sub_limbs(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp_limbs(a, b) != Ordering::Less);

    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;

    for (i, &limb) in a.iter().enumerate() {
        let mut diff = limb as i64 + borrow;

        if let Some(&other) = b.get(i) {
            diff -= other as i64;
        }

        out.push(diff as u32);
        borrow = diff >> 32;
    }

    out
}

/// Shifts a magnitude left: prepend whole limbs, then carry bits upward.
pub(crate) fn shl_limbs(limbs: &[u32], shift: usize) -> Vec<u32> {
    let s = shift % 32;
    let mut out = vec![0u32; shift / 32];

    if s == 0 {
        out.extend_from_slice(limbs);
        return out;
    }

    let mut carry = 0u32;
    for &limb in limbs {
        out.push((limb << s) | carry);
        carry = limb >> (32 - s);
    }

    if carry != 0 {
        out.push(carry);
    }

    out
}

/// Shifts a magnitude right: drop whole limbs, then carry bits downward.
pub(crate) fn shr_limbs(limbs: &[u32], shift: usize) -> Vec<u32> {
    let words = shift / 32;
    let s = shift % 32;

    if words >= limbs.len() {
        return vec![0];
    }

    let rest = &limbs[words..];

    if s == 0 {
        return rest.to_vec();
    }

    let mut out = Vec::with_capacity(rest.len());

    for (i, &limb) in rest.iter().enumerate() {
        let mut value = limb >> s;

        if let Some(&next) = rest.get(i + 1) {
            value |= next << (32 - s);
        }

        out.push(value);
    }

    out
}

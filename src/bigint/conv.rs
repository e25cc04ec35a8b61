//! Conversions between `BigInt`, primitive integers, and decimal text.
//!
//! Decimal text travels through base 10⁹, the largest power of ten that
//! fits a 32-bit limb. Parsing groups the digit string into nine-digit
//! blocks from the least-significant end and rebuilds the binary value
//! with repeated multiply-and-add; formatting runs the same conversion
//! in reverse.

use std::fmt;
use std::str::FromStr;

use crate::bigint::algorithms::multiplication;
use crate::bigint::core::BigInt;

/// Decimal block radix: 10⁹.
const RADIX: u32 = 1_000_000_000;

/// Decimal digits per block.
const RADIX_DIGITS: usize = 9;

/// Errors produced when parsing decimal text into a [`BigInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// No digits remained after stripping the sign and separators.
    Empty,

    /// A character other than a decimal digit was encountered.
    InvalidDigit(char),
}

/// Error produced when a [`BigInt`] does not fit the requested primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromBigIntError(pub(crate) ());

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses an optionally signed decimal string.
    ///
    /// `,`, `'` and space characters are accepted anywhere as digit
    /// separators and ignored. Any other non-digit character is an
    /// error, including trailing garbage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped: String = s.chars().filter(|c| !matches!(c, ',' | '\'' | ' ')).collect();

        let mut digits = stripped.as_str();
        let mut negative = false;

        if let Some(rest) = digits.strip_prefix('-') {
            negative = true;
            digits = rest;
        } else if let Some(rest) = digits.strip_prefix('+') {
            digits = rest;
        }

        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(bad));
        }

        // Nine-digit blocks, least-significant block first.
        let blocks: Vec<u32> = digits
            .as_bytes()
            .rchunks(RADIX_DIGITS)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, &b| acc * 10 + (b - b'0') as u32)
            })
            .collect();

        // Rebuild most-significant-first: acc = acc * 10⁹ + block.
        let mut acc = vec![0u32];
        for &block in blocks.iter().rev() {
            acc = multiplication::muladd(&acc, &[RADIX], &[block]);
        }

        let mut value = BigInt {
            limbs: acc,
            negative,
        };

        value.normalize();
        Ok(value)
    }
}

impl fmt::Display for BigInt {
    /// Canonical decimal form: `-` prefix for negatives, `0` for zero,
    /// no leading zeros otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }

        if self.limbs.len() == 1 {
            return write!(f, "{}", self.limbs[0]);
        }

        // Convert to base 10⁹, consuming limbs most-significant first:
        // blocks = blocks * 2³² + limb.
        let mut blocks: Vec<u32> = Vec::new();

        for &limb in self.limbs.iter().rev() {
            let mut carry = limb as u64;

            for block in blocks.iter_mut() {
                let acc = *block as u64 * 4_294_967_296 + carry;

                *block = (acc % RADIX as u64) as u32;
                carry = acc / RADIX as u64;
            }

            while carry != 0 {
                blocks.push((carry % RADIX as u64) as u32);
                carry /= RADIX as u64;
            }
        }

        // Top block prints bare; the rest are zero-padded to nine digits.
        let mut iter = blocks.iter().rev();

        match iter.next() {
            Some(top) => write!(f, "{top}")?,
            None => return write!(f, "0"),
        }

        for block in iter {
            write!(f, "{block:09}")?;
        }

        Ok(())
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let mut value = value as u128;
                    let mut limbs = Vec::with_capacity(4);

                    loop {
                        limbs.push(value as u32);
                        value >>= 32;

                        if value == 0 {
                            break;
                        }
                    }

                    Self::from_limbs(limbs)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let mut out = Self::from(value.unsigned_abs() as u128);

                    if value < 0 {
                        out.negative = true;
                    }

                    out
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64, u128, usize);
from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<&BigInt> for u64 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.negative || value.limbs.len() > 2 {
            return Err(TryFromBigIntError(()));
        }

        let low = value.limbs[0] as u64;
        let high = value.limbs.get(1).copied().unwrap_or(0) as u64;

        Ok(high << 32 | low)
    }
}

impl TryFrom<&BigInt> for u32 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.negative || value.limbs.len() > 1 {
            return Err(TryFromBigIntError(()));
        }

        Ok(value.limbs[0])
    }
}

impl TryFrom<&BigInt> for usize {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let wide = u64::try_from(value)?;

        usize::try_from(wide).map_err(|_| TryFromBigIntError(()))
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let magnitude = u64::try_from(&value.abs())?;

        if value.negative {
            if magnitude > i64::MIN.unsigned_abs() {
                return Err(TryFromBigIntError(()));
            }

            Ok((magnitude as i64).wrapping_neg())
        } else {
            i64::try_from(magnitude).map_err(|_| TryFromBigIntError(()))
        }
    }
}

macro_rules! try_from_owned {
    ($($t:ty),*) => {
        $(
            impl TryFrom<BigInt> for $t {
                type Error = TryFromBigIntError;

                fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

try_from_owned!(u32, u64, usize, i64);

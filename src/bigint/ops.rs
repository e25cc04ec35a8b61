//! Operator implementations for `BigInt`.
//!
//! The by-reference impls hold the arithmetic; by-value forms forward to
//! them. Signed dispatch reduces every case to unsigned magnitude
//! operations: addition of mixed signs becomes subtraction of the
//! smaller magnitude from the larger, subtraction of a negative becomes
//! addition, and multiplicative signs combine by XOR.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use crate::bigint::algorithms::multiplication;
use crate::bigint::core::{add_limbs, shl_limbs, shr_limbs, sub_limbs, BigInt};

macro_rules! forward_binop {
    (impl $imp:ident < $rhs:ty >, $method:ident) => {
        impl $imp<$rhs> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: $rhs) -> BigInt {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&$rhs> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &$rhs) -> BigInt {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<$rhs> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: $rhs) -> BigInt {
                $imp::$method(self, &rhs)
            }
        }
    };
}

/// Signed addition over magnitudes.
///
/// Equal signs add magnitudes and keep the sign; differing signs
/// subtract the smaller magnitude from the larger, the result taking the
/// sign of the larger operand.
fn add_signed(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let mut out = if lhs.negative == rhs.negative {
        BigInt {
            limbs: add_limbs(&lhs.limbs, &rhs.limbs),
            negative: lhs.negative,
        }
    } else {
        match lhs.cmp_magnitude(rhs) {
            Ordering::Equal => return BigInt::zero(),
            Ordering::Greater => BigInt {
                limbs: sub_limbs(&lhs.limbs, &rhs.limbs),
                negative: lhs.negative,
            },
            Ordering::Less => BigInt {
                limbs: sub_limbs(&rhs.limbs, &lhs.limbs),
                negative: rhs.negative,
            },
        }
    };

    out.normalize();
    out
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add_signed(self, rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let negated = BigInt {
            limbs: rhs.limbs.clone(),
            negative: !rhs.negative,
        };

        add_signed(self, &negated)
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut out = BigInt {
            limbs: multiplication::multiply(&self.limbs, &rhs.limbs),
            negative: self.negative ^ rhs.negative,
        };

        out.normalize();
        out
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncating division.
    ///
    /// # Panics
    /// Panics on a zero divisor; use [`BigInt::div_rem`] for a
    /// recoverable error.
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncating remainder, carrying the dividend's sign.
    ///
    /// # Panics
    /// Panics on a zero divisor; use [`BigInt::div_rem`] for a
    /// recoverable error.
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("division by zero"),
        }
    }
}

forward_binop!(impl Add<BigInt>, add);
forward_binop!(impl Sub<BigInt>, sub);
forward_binop!(impl Mul<BigInt>, mul);
forward_binop!(impl Div<BigInt>, div);
forward_binop!(impl Rem<BigInt>, rem);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut out = BigInt {
            limbs: self.limbs.clone(),
            negative: !self.negative,
        };

        out.normalize();
        out
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -&self
    }
}

/// Single-multiplier fast path.
impl Mul<u64> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: u64) -> BigInt {
        let mut out = BigInt {
            limbs: multiplication::multiply_u64(&self.limbs, rhs),
            negative: self.negative,
        };

        out.normalize();
        out
    }
}

impl Mul<u64> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: u64) -> BigInt {
        &self * rhs
    }
}

impl Div<u64> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: u64) -> BigInt {
        self / &BigInt::from(rhs)
    }
}

impl Div<u64> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: u64) -> BigInt {
        &self / &BigInt::from(rhs)
    }
}

impl Rem<u64> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: u64) -> BigInt {
        self % &BigInt::from(rhs)
    }
}

impl Rem<u64> for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: u64) -> BigInt {
        &self % &BigInt::from(rhs)
    }
}

fn shl_magnitude(value: &BigInt, shift: usize) -> BigInt {
    let mut out = BigInt {
        limbs: shl_limbs(&value.limbs, shift),
        negative: value.negative,
    };

    out.normalize();
    out
}

fn shr_magnitude(value: &BigInt, shift: usize) -> BigInt {
    let mut out = BigInt {
        limbs: shr_limbs(&value.limbs, shift),
        negative: value.negative,
    };

    out.normalize();
    out
}

/// Left shift of the magnitude; the sign is preserved. A negative shift
/// count reverses direction.
impl Shl<i64> for &BigInt {
    type Output = BigInt;

    fn shl(self, rhs: i64) -> BigInt {
        if rhs < 0 {
            shr_magnitude(self, rhs.unsigned_abs() as usize)
        } else {
            shl_magnitude(self, rhs as usize)
        }
    }
}

/// Right shift of the magnitude; shifting by at least the bit length
/// yields zero. A negative shift count reverses direction.
impl Shr<i64> for &BigInt {
    type Output = BigInt;

    fn shr(self, rhs: i64) -> BigInt {
        if rhs < 0 {
            shl_magnitude(self, rhs.unsigned_abs() as usize)
        } else {
            shr_magnitude(self, rhs as usize)
        }
    }
}

impl Shl<i64> for BigInt {
    type Output = BigInt;

    fn shl(self, rhs: i64) -> BigInt {
        &self << rhs
    }
}

impl Shr<i64> for BigInt {
    type Output = BigInt;

    fn shr(self, rhs: i64) -> BigInt {
        &self >> rhs
    }
}

macro_rules! forward_assign {
    (impl $imp:ident < $rhs:ty >, $method:ident, $op:tt) => {
        impl $imp<&$rhs> for BigInt {
            fn $method(&mut self, rhs: &$rhs) {
                *self = &*self $op rhs;
            }
        }

        impl $imp<$rhs> for BigInt {
            fn $method(&mut self, rhs: $rhs) {
                *self = &*self $op &rhs;
            }
        }
    };
}

forward_assign!(impl AddAssign<BigInt>, add_assign, +);
forward_assign!(impl SubAssign<BigInt>, sub_assign, -);
forward_assign!(impl MulAssign<BigInt>, mul_assign, *);
forward_assign!(impl DivAssign<BigInt>, div_assign, /);
forward_assign!(impl RemAssign<BigInt>, rem_assign, %);

impl ShlAssign<i64> for BigInt {
    fn shl_assign(&mut self, rhs: i64) {
        *self = &*self << rhs;
    }
}

impl ShrAssign<i64> for BigInt {
    fn shr_assign(&mut self, rhs: i64) {
        *self = &*self >> rhs;
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Total order: differing signs decide first, then magnitudes are
    /// compared (reversed when both operands are negative).
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

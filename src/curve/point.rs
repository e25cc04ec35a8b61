//! The chord-and-tangent group law and scalar multiplication.

use std::ops::Neg;

use crate::bigint::BigInt;
use crate::curve::core::{Coordinate, CurveError, Point};
use crate::modmath::{modinv, reduce};

impl Point {
    /// The group inverse: `−(x, y) = (x, p − y)`, and `−O = O`.
    pub fn negate(&self) -> Self {
        match &self.coord {
            Coordinate::Infinity => self.clone(),
            Coordinate::Affine { x, y } => {
                let p = self.curve.field();
                let flipped = reduce(&(p - y), p);

                Self::affine_unchecked(x.clone(), flipped, self.curve.clone())
            }
        }
    }

    /// Adds two points on the same curve.
    ///
    /// The special cases come first: identities pass the other operand
    /// through, a vertical chord (distinct points sharing an x) and a
    /// vertical tangent (doubling a point with `y = 0`) collapse to the
    /// identity. Otherwise the chord or tangent slope λ is formed, and
    /// `x₃ = λ² − x₁ − x₂`, `y₃ = λ(x₁ − x₃) − y₁`.
    ///
    /// Over a composite field size the law can fail in two ways, neither
    /// of which is possible over a prime field: a slope denominator with
    /// no inverse surfaces as [`CurveError::NonInvertible`], and a sum
    /// drifting off the curve collapses to the identity. Lenstra
    /// factorization relies on the former.
    ///
    /// # Errors
    /// [`CurveError::CurveMismatch`] when the operands carry different
    /// curves; [`CurveError::NonInvertible`] as above.
    pub fn add(&self, rhs: &Self) -> Result<Self, CurveError> {
        if self.curve != rhs.curve {
            return Err(CurveError::CurveMismatch);
        }

        let (x1, y1) = match &self.coord {
            Coordinate::Infinity => return Ok(rhs.clone()),
            Coordinate::Affine { x, y } => (x, y),
        };

        let (x2, y2) = match &rhs.coord {
            Coordinate::Infinity => return Ok(self.clone()),
            Coordinate::Affine { x, y } => (x, y),
        };

        let curve = &self.curve;
        let p = curve.field();
        let doubling = self.coord == rhs.coord;

        // Distinct points on a vertical chord sum to the identity.
        if !doubling && x1 == x2 {
            return Ok(Self::infinity(curve.clone()));
        }

        let (numerator, denominator) = if doubling {
            // The tangent at a 2-torsion point is vertical.
            if y1.is_zero() {
                return Ok(Self::infinity(curve.clone()));
            }

            (
                reduce(&(&(&(x1 * x1) * 3u64) + curve.a()), p),
                reduce(&(y1 * 2u64), p),
            )
        } else {
            (reduce(&(y2 - y1), p), reduce(&(x2 - x1), p))
        };

        let inverse = match modinv(&denominator, p) {
            Ok(inverse) => inverse,
            Err(_) => return Err(CurveError::NonInvertible(denominator)),
        };

        let lambda = reduce(&(&numerator * &inverse), p);

        let x3 = reduce(&(&(&(&lambda * &lambda) - x1) - x2), p);
        let y3 = reduce(&(&(&lambda * &(x1 - &x3)) - y1), p);

        if !curve.contains(&x3, &y3) {
            return Ok(Self::infinity(curve.clone()));
        }

        Ok(Self::affine_unchecked(x3, y3, curve.clone()))
    }

    /// Subtracts a point: `P − Q = P + (−Q)`.
    ///
    /// # Errors
    /// As for [`Point::add`].
    pub fn sub(&self, rhs: &Self) -> Result<Self, CurveError> {
        self.add(&rhs.negate())
    }

    /// Scalar multiplication `k·P` by the binary method over the bits of
    /// `k`, most significant first (or a Montgomery ladder with the
    /// `montgomery` feature).
    ///
    /// A negative scalar multiplies the negated point; `k ∈ {0, 1, −1}`
    /// are answered directly.
    ///
    /// # Errors
    /// As for [`Point::add`], which can only occur over a composite
    /// field size.
    pub fn scalar_mul(&self, k: &BigInt) -> Result<Self, CurveError> {
        if k.is_zero() {
            return Ok(Self::infinity(self.curve.clone()));
        }

        let one = BigInt::one();
        if *k == one {
            return Ok(self.clone());
        }

        let (base, k) = if k.is_negative() {
            (self.negate(), k.abs())
        } else {
            (self.clone(), k.clone())
        };

        if k == one {
            return Ok(base);
        }

        scalar_mul_loop(&base, &k)
    }
}

/// Double-and-add: double the accumulator for every bit, add the base
/// for every set bit.
#[cfg(not(feature = "montgomery"))]
fn scalar_mul_loop(base: &Point, k: &BigInt) -> Result<Point, CurveError> {
    let mut acc = Point::infinity(base.curve.clone());

    for i in (0..k.bit_length()).rev() {
        acc = acc.add(&acc)?;

        if k.bit(i) {
            acc = acc.add(base)?;
        }
    }

    Ok(acc)
}

/// Montgomery ladder: one addition and one doubling per bit, whatever
/// the bit's value.
#[cfg(feature = "montgomery")]
fn scalar_mul_loop(base: &Point, k: &BigInt) -> Result<Point, CurveError> {
    let mut r0 = Point::infinity(base.curve.clone());
    let mut r1 = base.clone();

    for i in (0..k.bit_length()).rev() {
        if k.bit(i) {
            r0 = r0.add(&r1)?;
            r1 = r1.add(&r1)?;
        } else {
            r1 = r1.add(&r0)?;
            r0 = r0.add(&r0)?;
        }
    }

    Ok(r0)
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

//! Curve and point representations.

use std::fmt;

use crate::bigint::BigInt;
use crate::modmath::reduce;

/// Short Weierstrass curve parameters `(a, b, p)`.
///
/// Equality is componentwise; two points may only be combined when their
/// curves are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
}

/// Position of a point on its curve.
///
/// The identity of the group, the point at infinity, carries no
/// coordinates; an affine point carries `(x, y)` reduced into `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coordinate {
    /// The point at infinity.
    Infinity,

    /// An affine point satisfying the curve equation.
    Affine { x: BigInt, y: BigInt },
}

/// A point on a specific curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub(crate) curve: Curve,
    pub(crate) coord: Coordinate,
}

/// Errors raised by curve and point operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// The points lie on different curves.
    CurveMismatch,

    /// The coordinates do not satisfy the curve equation.
    NotOnCurve { x: BigInt, y: BigInt },

    /// A slope denominator has no inverse modulo the field size. Carries
    /// the denominator; Lenstra factorization extracts a factor from it.
    NonInvertible(BigInt),

    /// Point enumeration was requested over a field too large to sweep.
    FieldTooLarge,
}

impl Curve {
    /// Builds the curve `y² = x³ + ax + b` over `Z/pZ`.
    ///
    /// # Panics
    /// Panics if `p` is not positive.
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Self {
        assert!(p > BigInt::zero(), "field modulus must be positive");

        Self { a, b, p }
    }

    /// The coefficient `a`.
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// The coefficient `b`.
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The field modulus `p`.
    pub fn field(&self) -> &BigInt {
        &self.p
    }

    /// Whether `(x, y)` satisfies `y² ≡ x³ + ax + b (mod p)`.
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        let lhs = reduce(&(y * y), &self.p);
        let rhs = reduce(&(&(&(&(x * x) * x) + &(&self.a * x)) + &self.b), &self.p);

        lhs == rhs
    }
}

impl Point {
    /// Builds the affine point `(x, y)` on `curve`.
    ///
    /// Coordinates are reduced into `[0, p)` first.
    ///
    /// # Errors
    /// [`CurveError::NotOnCurve`] when the reduced coordinates fail the
    /// curve equation.
    pub fn new(x: BigInt, y: BigInt, curve: Curve) -> Result<Self, CurveError> {
        let x = reduce(&x, curve.field());
        let y = reduce(&y, curve.field());

        if !curve.contains(&x, &y) {
            return Err(CurveError::NotOnCurve { x, y });
        }

        Ok(Self {
            curve,
            coord: Coordinate::Affine { x, y },
        })
    }

    /// The point at infinity on `curve`.
    pub fn infinity(curve: Curve) -> Self {
        Self {
            curve,
            coord: Coordinate::Infinity,
        }
    }

    /// Constructor for coordinates already known to satisfy the curve
    /// equation.
    pub(crate) fn affine_unchecked(x: BigInt, y: BigInt, curve: Curve) -> Self {
        Self {
            curve,
            coord: Coordinate::Affine { x, y },
        }
    }

    /// Whether this is the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.coord == Coordinate::Infinity
    }

    /// The affine x-coordinate, or `None` at infinity.
    pub fn x(&self) -> Option<&BigInt> {
        match &self.coord {
            Coordinate::Infinity => None,
            Coordinate::Affine { x, .. } => Some(x),
        }
    }

    /// The affine y-coordinate, or `None` at infinity.
    pub fn y(&self) -> Option<&BigInt> {
        match &self.coord {
            Coordinate::Infinity => None,
            Coordinate::Affine { y, .. } => Some(y),
        }
    }

    /// The curve this point lives on.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Re-checks the curve equation. Infinity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        match &self.coord {
            Coordinate::Infinity => true,
            Coordinate::Affine { x, y } => self.curve.contains(x, y),
        }
    }
}

impl fmt::Display for Point {
    /// `inf` for the identity, `(x, y)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coord {
            Coordinate::Infinity => write!(f, "inf"),
            Coordinate::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

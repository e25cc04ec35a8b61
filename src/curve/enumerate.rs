//! Exhaustive point enumeration over small fields.

use crate::bigint::BigInt;
use crate::curve::core::{Curve, CurveError, Point};
use crate::modmath::reduce;

/// A curve together with a lazily computed list of all its affine
/// points.
///
/// The sweep is `O(p²)`: for every `y` the residue `y² mod p` is
/// matched against `x³ + ax + b` for every `x`. It is only offered when
/// `p` fits a 32-bit word and exists for the tiny curves used in
/// examples and tests.
#[derive(Clone, Debug)]
pub struct EllipticCurve {
    curve: Curve,
    points: Option<Vec<Point>>,
}

impl EllipticCurve {
    /// Builds the curve `y² = x³ + ax + b` over `Z/pZ`.
    ///
    /// # Panics
    /// Panics if `p` is not positive, as for [`Curve::new`].
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Self {
        Self::from_curve(Curve::new(a, b, p))
    }

    /// Wraps an existing curve.
    pub fn from_curve(curve: Curve) -> Self {
        Self {
            curve,
            points: None,
        }
    }

    /// The underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// All affine points of the curve, computed on first use and cached.
    ///
    /// The point at infinity is not part of the enumeration.
    ///
    /// # Errors
    /// [`CurveError::FieldTooLarge`] when `p` does not fit a 32-bit
    /// word.
    pub fn points(&mut self) -> Result<&[Point], CurveError> {
        if self.points.is_none() {
            self.points = Some(generate(&self.curve)?);
        }

        Ok(self.points.as_deref().unwrap_or(&[]))
    }
}

fn generate(curve: &Curve) -> Result<Vec<Point>, CurveError> {
    let p = match u32::try_from(curve.field()) {
        Ok(p) => p as u64,
        Err(_) => return Err(CurveError::FieldTooLarge),
    };

    let a = match u32::try_from(&reduce(curve.a(), curve.field())) {
        Ok(a) => a as u64,
        Err(_) => return Err(CurveError::FieldTooLarge),
    };

    let b = match u32::try_from(&reduce(curve.b(), curve.field())) {
        Ok(b) => b as u64,
        Err(_) => return Err(CurveError::FieldTooLarge),
    };

    let mut points = Vec::new();

    for y in 0..p {
        // Quadratic residue this row of points must hit.
        let y_squared = y * y % p;

        for x in 0..p {
            let cube = x * x % p * x % p;
            let value = (cube + a * x % p + b) % p;

            if value == y_squared {
                points.push(Point::affine_unchecked(
                    BigInt::from(x),
                    BigInt::from(y),
                    curve.clone(),
                ));
            }
        }
    }

    Ok(points)
}

//! Elliptic curves in short Weierstrass form over a prime field.
//!
//! A [`Curve`] is the parameter triple `(a, b, p)` of
//! `E: y² ≡ x³ + ax + b (mod p)`; curves are immutable and compared
//! componentwise. A [`Point`] pairs a curve with a [`Coordinate`] that
//! is either the point at infinity (the group identity) or an affine
//! pair `(x, y)` satisfying the curve equation.
//!
//! The group law is the standard chord-and-tangent construction, with
//! every special case handled explicitly: identities, vertical chords,
//! tangents at 2-torsion points. Points on different curves never mix;
//! the attempt is [`CurveError::CurveMismatch`]. Scalar multiplication
//! is the binary double-and-add method, or a Montgomery ladder with the
//! `montgomery` cargo feature.
//!
//! [`EllipticCurve`] additionally enumerates every affine point of a
//! curve, an `O(p²)` sweep that is only offered for fields small
//! enough to make it meaningful.
//!
//! Over a *composite* "field" the construction is not a group; the law
//! then reports denominators with no modular inverse through
//! [`CurveError::NonInvertible`], which is exactly the failure Lenstra
//! factorization harvests.

mod core;
mod enumerate;
mod point;

pub use self::core::{Coordinate, Curve, CurveError, Point};
pub use self::enumerate::EllipticCurve;

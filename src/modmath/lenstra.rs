//! Lenstra elliptic-curve factorization.
//!
//! A random "curve" is drawn over `Z/nZ`. Because `n` is composite the
//! construction is not actually a group, and that is the point: sooner
//! or later the chord-and-tangent law needs an inverse that does not
//! exist modulo `n`. The failing denominator shares a factor with `n`,
//! and `gcd` extracts it. The method shines when `n = p·q` with `q`
//! much smaller than `p`.

use super::{gcd, reduce};
use crate::bigint::BigInt;
use crate::curve::{Curve, CurveError, Point};
use crate::rng::Mt19937;

/// Multiples of the base point tried per random curve before drawing a
/// fresh one.
const STEPS_PER_CURVE: usize = 10_000;

/// Finds a nontrivial factor of a composite `n`, using a generator
/// seeded from the operating system.
///
/// Does not terminate when `n` is prime; callers screen with
/// [`super::miller_rabin`] first.
pub fn lenstra_factorization(n: &BigInt) -> BigInt {
    lenstra_factorization_with(n, &mut Mt19937::from_os())
}

/// [`lenstra_factorization`] with a caller-supplied generator.
pub fn lenstra_factorization_with(n: &BigInt, rng: &mut Mt19937) -> BigInt {
    let one = BigInt::one();
    let two = BigInt::from(2u32);

    if !n.bit(0) {
        return two;
    }

    let bits = n.bit_length();

    loop {
        let a = reduce(&BigInt::random(bits, rng), n);
        let x = reduce(&BigInt::random(bits, rng), n);
        let y = reduce(&BigInt::random(bits, rng), n);

        // b is chosen so that (x, y) satisfies y² = x³ + ax + b.
        let x_cubed = &(&x * &x) * &x;
        let b = reduce(&(&(&(&y * &y) - &x_cubed) - &(&a * &x)), n);

        let curve = Curve::new(a, b, n.clone());
        let p = match Point::new(x, y, curve) {
            Ok(p) => p,
            Err(_) => continue,
        };

        // Walk Q = j·P incrementally; a failing inverse betrays a factor.
        let mut q = p.clone();

        for _ in 2..=STEPS_PER_CURVE {
            q = match q.add(&p) {
                Ok(next) => next,
                Err(CurveError::NonInvertible(denominator)) => {
                    let g = gcd(&denominator, n);

                    if g > one && g < *n {
                        return g;
                    }

                    break;
                }
                Err(_) => break,
            };

            // The whole subgroup was walked without a failing inverse;
            // this curve is a dud.
            if q.is_infinity() {
                break;
            }
        }
    }
}

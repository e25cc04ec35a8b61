//! Miller–Rabin primality testing.
//!
//! The test writes `n − 1 = 2^r · d` with `d` odd and probes witness
//! bases. Sorenson and Webster (doi:10.1090/mcom/3134) showed that for
//! composite `n < 3,317,044,064,679,887,385,961,981` at least one base
//! in `{2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43}` is a
//! witness, so below that bound the test is deterministic. Above it, the
//! small primes up to 97 are tried as well, followed by a batch of
//! random bases one bit shorter than `n`.

use super::{modexp_reduced, reduce};
use crate::bigint::BigInt;
use crate::rng::Mt19937;

/// Witness set that is deterministic below the Sorenson–Webster bound.
const FIXED_BASES: [u32; 14] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43];

/// Additional small-prime bases probed above the bound.
const EXTENDED_BASES: [u32; 11] = [47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97];

/// Random bases probed above the bound.
const RANDOM_ROUNDS: usize = 25;

/// 3,317,044,064,679,887,385,961,981 as limbs.
fn sorenson_webster_bound() -> BigInt {
    BigInt::from_limbs(vec![0x2410_a5fd, 0x51ad_c5b2, 0x0002_be69])
}

/// Miller–Rabin compositeness test.
///
/// Returns `true` when `n` is **composite** and `false` when it is
/// probably prime, deterministically so below the Sorenson–Webster
/// bound. Values below 2 are reported composite.
///
/// Random bases, when needed, come from a generator seeded from the
/// operating system; use [`miller_rabin_with`] to supply one.
pub fn miller_rabin(n: &BigInt) -> bool {
    miller_rabin_impl(n, None)
}

/// [`miller_rabin`] with a caller-supplied generator for the
/// probabilistic rounds above the deterministic bound.
pub fn miller_rabin_with(n: &BigInt, rng: &mut Mt19937) -> bool {
    miller_rabin_impl(n, Some(rng))
}

fn miller_rabin_impl(n: &BigInt, rng: Option<&mut Mt19937>) -> bool {
    let two = BigInt::from(2u32);

    if *n < two {
        return true;
    }

    if *n == two {
        return false;
    }

    if !n.bit(0) {
        return true;
    }

    // n − 1 = 2^r · d with d odd.
    let n_minus_1 = n - &BigInt::one();
    let r = n_minus_1.trailing_zeros();
    let d = &n_minus_1 >> r as i64;

    for base in FIXED_BASES {
        let base = BigInt::from(base);

        // A base equal to n itself proves nothing; skip it.
        if base == *n {
            continue;
        }

        if is_witness(&base, n, &n_minus_1, &d, r) {
            return true;
        }
    }

    if *n < sorenson_webster_bound() {
        return false;
    }

    for base in EXTENDED_BASES {
        if is_witness(&BigInt::from(base), n, &n_minus_1, &d, r) {
            return true;
        }
    }

    let mut local;
    let rng = match rng {
        Some(rng) => rng,
        None => {
            local = Mt19937::from_os();
            &mut local
        }
    };

    for _ in 0..RANDOM_ROUNDS {
        let base = BigInt::random(n.bit_length() - 1, rng);

        if base <= BigInt::one() {
            continue;
        }

        if is_witness(&base, n, &n_minus_1, &d, r) {
            return true;
        }
    }

    false
}

/// Tests a single base. `n` must be odd and at least 3.
fn is_witness(base: &BigInt, n: &BigInt, n_minus_1: &BigInt, d: &BigInt, r: usize) -> bool {
    let base = reduce(base, n);

    // A base sharing all of n with zero residue can only happen for
    // composite n here, since equal bases are skipped.
    if base.is_zero() {
        return true;
    }

    let mut x = modexp_reduced(&base, d, n);

    if x == BigInt::one() || x == *n_minus_1 {
        return false;
    }

    for _ in 0..r {
        x = reduce(&(&x * &x), n);

        if x == *n_minus_1 {
            return false;
        }
    }

    true
}

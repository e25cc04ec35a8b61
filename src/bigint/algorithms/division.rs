//! Long division (Knuth's Algorithm D).
//!
//! The Art of Computer Programming vol. 2, 3rd ed., pg. 272, with the
//! 32-bit-limb formulation of Hacker's Delight `divmnu64`.

use std::cmp::Ordering;

use crate::bigint::core::{cmp_limbs, normalize_limbs, shl_limbs, shr_limbs};

/// Divides one magnitude by another, returning `(quotient, remainder)`.
///
/// Both inputs must be normalized and the divisor non-zero.
pub(crate) fn div_rem_magnitudes(x: &[u32], y: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(y.len() > 1 || y[0] != 0);

    if y.len() == 1 {
        return div_rem_single(x, y[0]);
    }

    match cmp_limbs(x, y) {
        Ordering::Less => return (vec![0], x.to_vec()),
        Ordering::Equal => return (vec![1], vec![0]),
        Ordering::Greater => {}
    }

    // D1: shift both operands left so the divisor's top limb has its high
    // bit set; required for the q̂ estimate to be within 2 of the truth.
    let s = y.last().map_or(0, |top| top.leading_zeros() as usize);

    let mut u = shl_limbs(x, s);
    let mut v = shl_limbs(y, s);

    normalize_limbs(&mut u);
    normalize_limbs(&mut v);

    u.push(0); // |u| = m + n + 1

    let n = v.len();
    let m = u.len() - n;

    let mut q = vec![0u32; m];

    for j in (0..m).rev() {
        // D3: estimate q̂ from the top two dividend limbs.
        let head = (u[n + j] as u64) << 32 | u[n + j - 1] as u64;
        let mut qhat = head / v[n - 1] as u64;
        let mut rhat = head % v[n - 1] as u64;

        while qhat >> 32 != 0
            || qhat * v[n - 2] as u64 > (rhat << 32 | u[n + j - 2] as u64)
        {
            qhat -= 1;
            rhat += v[n - 1] as u64;

            if rhat >> 32 != 0 {
                break;
            }
        }

        // D4: multiply and subtract, tracking a signed borrow.
        let mut borrow = 0i64;
        for i in 0..n {
            let p = qhat * v[i] as u64;
            let t = u[i + j] as i64 - (p as u32) as i64 - borrow;

            u[i + j] = t as u32;
            borrow = (p >> 32) as i64 - (t >> 32);
        }

        let t = u[n + j] as i64 - borrow;
        u[n + j] = t as u32;

        q[j] = qhat as u32;

        // D6: q̂ was one too large (frequency ≲ 2/2³²); add the divisor
        // back into the window.
        if t < 0 {
            q[j] -= 1;

            let mut carry = 0u64;
            for i in 0..n {
                let sum = u[i + j] as u64 + v[i] as u64 + carry;

                u[i + j] = sum as u32;
                carry = sum >> 32;
            }

            u[n + j] = u[n + j].wrapping_add(carry as u32);
        }
    }

    // D8: the low n limbs hold the remainder, still scaled by 2^s.
    let mut r = shr_limbs(&u[..n], s);

    normalize_limbs(&mut q);
    normalize_limbs(&mut r);

    (q, r)
}

/// Degenerate single-limb divisor: walk the dividend most-significant
/// limb first, carrying a 64-bit remainder.
pub(crate) fn div_rem_single(x: &[u32], y: u32) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(y != 0);

    let mut q = vec![0u32; x.len()];
    let mut k = 0u64;

    for j in (0..x.len()).rev() {
        let t = k << 32 | x[j] as u64;

        q[j] = (t / y as u64) as u32;
        k = t % y as u64;
    }

    normalize_limbs(&mut q);

    (q, vec![k as u32])
}

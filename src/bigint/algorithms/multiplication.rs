//! Schoolbook multiplication (Knuth's Algorithm M).

use crate::bigint::core::normalize_limbs;

/// Multiplies two magnitudes.
pub(crate) fn multiply(x: &[u32], y: &[u32]) -> Vec<u32> {
    muladd(x, y, &[])
}

/// Computes `x * y + addend` over magnitudes in a single pass.
///
/// With an empty addend this is plain Algorithm M: for each limb of `x`,
/// walk the limbs of `y` accumulating `x[i]·y[j] + z[i+j] + carry` in a
/// 64-bit register, storing the low half and carrying the high half.
/// Base conversion feeds the decimal radix through here as `y`.
pub(crate) fn muladd(x: &[u32], y: &[u32], addend: &[u32]) -> Vec<u32> {
    let mut z = vec![0u32; x.len() + y.len() + addend.len()];
    z[..addend.len()].copy_from_slice(addend);

    for i in 0..x.len() {
        let mut carry = 0u64;

        for j in 0..y.len() {
            let acc = x[i] as u64 * y[j] as u64 + z[i + j] as u64 + carry;

            z[i + j] = acc as u32;
            carry = acc >> 32;
        }

        // Fold the leftover carry upward; the slot above y's top limb may
        // already hold a value from the addend or an earlier row.
        let mut k = i + y.len();
        while carry != 0 {
            if k == z.len() {
                z.push(carry as u32);
                break;
            }

            let acc = z[k] as u64 + carry;

            z[k] = acc as u32;
            carry = acc >> 32;
            k += 1;
        }
    }

    normalize_limbs(&mut z);

    z
}

/// Single-multiplier specialization for a full 64-bit factor.
///
/// The 128-bit accumulator absorbs the widest possible limb product plus
/// carry without overflow.
pub(crate) fn multiply_u64(x: &[u32], m: u64) -> Vec<u32> {
    let mut out = Vec::with_capacity(x.len() + 2);
    let mut carry = 0u128;

    for &limb in x {
        let acc = limb as u128 * m as u128 + carry;

        out.push(acc as u32);
        carry = acc >> 32;
    }

    while carry != 0 {
        out.push(carry as u32);
        carry >>= 32;
    }

    normalize_limbs(&mut out);

    out
}

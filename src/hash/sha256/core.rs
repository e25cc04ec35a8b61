//! Message padding and block iteration.

use super::computations::all_rounds;
use super::H256_INIT;
use crate::bigint::BigInt;
use crate::modmath::modsub;

/// Hashes a bit sequence, most significant bit first, returning the
/// digest as eight 32-bit words.
///
/// Padding follows FIPS 180-4 §5.1.1: a single one bit, then `k` zero
/// bits with `k = (512 − (L + 65)) mod 512`, then the message length as
/// a 64-bit big-endian integer, bringing the total to a multiple of
/// 512 bits. The zero-run length is computed with the toolkit's modular
/// subtraction.
pub fn sha256_bits(message: &[bool]) -> [u32; 8] {
    let length = message.len();

    let zeros = modsub(
        &BigInt::from(512u32),
        &BigInt::from(length as u64 + 65),
        &BigInt::from(512u32),
    )
    .expect("512 is a positive modulus");
    let zeros = usize::try_from(&zeros).expect("padding run is below 512");

    let mut padded = Vec::with_capacity(length + 65 + zeros);
    padded.extend_from_slice(message);
    padded.push(true);
    padded.extend(std::iter::repeat(false).take(zeros));

    let bit_length = length as u64;
    for i in (0..64).rev() {
        padded.push(bit_length >> i & 1 == 1);
    }

    debug_assert!(padded.len() % 512 == 0);

    let mut state = H256_INIT;

    for block in padded.chunks(512) {
        let mut w = [0u32; 16];

        for (i, &bit) in block.iter().enumerate() {
            if bit {
                w[i / 32] |= 1 << (31 - i % 32);
            }
        }

        all_rounds(&mut state, w);
    }

    state
}

/// Hashes a byte slice by expanding it to bits, most significant bit of
/// each byte first.
pub fn sha256(input: &[u8]) -> [u32; 8] {
    let mut bits = Vec::with_capacity(input.len() * 8);

    for &byte in input {
        for i in (0..8).rev() {
            bits.push(byte >> i & 1 == 1);
        }
    }

    sha256_bits(&bits)
}

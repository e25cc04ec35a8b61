use numera::hash::{sha256, sha256_bits};

fn bits_of(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);

    for &byte in bytes {
        for i in (0..8).rev() {
            bits.push(byte >> i & 1 == 1);
        }
    }

    bits
}

#[test]
fn empty_message() {
    assert_eq!(
        sha256(b""),
        [
            0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c, 0xa495991b,
            0x7852b855,
        ]
    );
}

#[test]
fn abc() {
    assert_eq!(
        sha256(b"abc"),
        [
            0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
            0xf20015ad,
        ]
    );
}

#[test]
fn two_block_message() {
    assert_eq!(
        sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
        [
            0x248d6a61, 0xd20638b8, 0xe5c02693, 0x0c3e6039, 0xa33ce459, 0x64ff2167, 0xf6ecedd4,
            0x19db06c1,
        ]
    );
}

#[test]
fn million_a() {
    let input = vec![b'a'; 1_000_000];

    assert_eq!(
        sha256(&input),
        [
            0xcdc76e5c, 0x9914fb92, 0x81a1c7e2, 0x84d73e67, 0xf1809a48, 0xa497200e, 0x046d39cc,
            0xc7112cd0,
        ]
    );
}

#[test]
fn bit_interface_matches_byte_interface() {
    for message in [&b""[..], b"a", b"abc", b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789"] {
        assert_eq!(sha256_bits(&bits_of(message)), sha256(message));
    }
}

#[test]
fn message_length_on_block_boundary() {
    // 55, 56 and 64 bytes straddle the point where the length field no
    // longer fits the current block.
    for len in [55usize, 56, 63, 64, 65] {
        let input = vec![0x61u8; len];
        let digest = sha256(&input);

        assert_eq!(digest, sha256_bits(&bits_of(&input)));
    }
}

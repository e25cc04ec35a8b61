use numera::bigint::{BigInt, BigIntError, ParseBigIntError};
use numera::rng::Mt19937;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn parse_and_format_roundtrip() {
    for s in [
        "0",
        "1",
        "-1",
        "4294967296",
        "123456789012345678901234567890",
        "-987654321098765432109876543210",
        "1000000000000000000",
    ] {
        assert_eq!(big(s).to_string(), s);
    }
}

#[test]
fn parse_ignores_separators() {
    let value = big("-1,000'000 000");

    assert_eq!(value, BigInt::from(-1_000_000_000i64));
    assert_eq!(value.to_string(), "-1000000000");
}

#[test]
fn parse_accepts_leading_plus_and_zeros() {
    assert_eq!(big("+42"), BigInt::from(42u32));
    assert_eq!(big("00042").to_string(), "42");
    assert_eq!(big("-0"), BigInt::zero());
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!("".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!("-".parse::<BigInt>(), Err(ParseBigIntError::Empty));
    assert_eq!(
        "123x456".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit('x'))
    );
    assert_eq!(
        "123456789012345678901234567890abc".parse::<BigInt>(),
        Err(ParseBigIntError::InvalidDigit('a'))
    );
}

#[test]
fn addition_identities() {
    let a = big("123456789012345678901234567890");

    assert_eq!(&a + &BigInt::zero(), a);
    assert_eq!(&a - &a, BigInt::zero());
    assert_eq!(&(&a + &a) - &a, a);
}

#[test]
fn signed_addition_dispatch() {
    let a = big("1000000000000000000000");
    let b = big("-999999999999999999999");

    assert_eq!(&a + &b, BigInt::one());
    assert_eq!(&b + &a, BigInt::one());
    assert_eq!(&b - &a, big("-1999999999999999999999"));
    assert_eq!(-&(&a - &b), &b - &a);
}

#[test]
fn addition_carries_across_limbs() {
    let a = big("4294967295");

    assert_eq!(&a + &BigInt::one(), big("4294967296"));
    assert_eq!(big("4294967296") - BigInt::one(), a);

    let top = big("18446744073709551615");
    assert_eq!(&top + &BigInt::one(), big("18446744073709551616"));
}

#[test]
fn multiplication_identities() {
    let a = big("123456789012345678901234567890");

    assert_eq!(&a * &BigInt::one(), a);
    assert_eq!(&a * &BigInt::zero(), BigInt::zero());
    assert_eq!(&a * &big("-1"), -&a);
}

#[test]
fn multiplication_known_product() {
    let a = big("123456789012345678901234567890");
    let b = big("987654321098765432109876543210");

    assert_eq!(
        &a * &b,
        big("121932631137021795226185032733622923332237463801111263526900")
    );
}

#[test]
fn multiplication_by_u64() {
    let a = big("123456789012345678901234567890");

    assert_eq!(&a * 0u64, BigInt::zero());
    assert_eq!(&a * 1u64, a.clone());
    assert_eq!(
        &a * u64::MAX,
        &a * &big("18446744073709551615")
    );
}

#[test]
fn division_single_limb() {
    let a = big("123456789012345678901234567890");

    let (q, r) = a.div_rem(&BigInt::from(97u32)).unwrap();

    assert_eq!(&(&q * &BigInt::from(97u32)) + &r, a);
    assert!(r < BigInt::from(97u32));
}

#[test]
fn division_multi_limb() {
    let x = big("123456789012345678901234567890123456789012345678901234567890");
    let y = big("987654321098765432109876543");

    let (q, r) = x.div_rem(&y).unwrap();

    assert_eq!(q, big("124999998860937500014238281276525"));
    assert_eq!(r, big("144432646889470175040514815"));
}

#[test]
fn division_normalization_and_correction() {
    // Divisors with a high top limb exercise the q̂ correction loop.
    let x = big("39614081275578912861891592192");
    let y = big("9223372041149743103");

    let (q, r) = x.div_rem(&y).unwrap();

    assert_eq!(q, big("4294967295"));
    assert_eq!(r, big("9223372036854775807"));

    // And a dividend one short of the next quotient digit.
    let x = big("39614081247908796764212166656");
    let y = big("9223372039002259458");

    let (q, r) = x.div_rem(&y).unwrap();

    assert_eq!(q, big("4294967294"));
    assert_eq!(r, big("4"));
}

#[test]
fn division_truncates_toward_zero() {
    let a = big("-7");
    let b = big("2");

    let (q, r) = a.div_rem(&b).unwrap();

    assert_eq!(q, big("-3"));
    assert_eq!(r, big("-1"));
    assert_eq!(&(&q * &b) + &r, a);
}

#[test]
fn division_near_equal_operands() {
    let y = big("987654321098765432109876543");

    assert_eq!(y.div_rem(&y).unwrap(), (BigInt::one(), BigInt::zero()));

    let (q, r) = (&y - &BigInt::one()).div_rem(&y).unwrap();
    assert_eq!(q, BigInt::zero());
    assert_eq!(r, &y - &BigInt::one());
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(
        big("5").div_rem(&BigInt::zero()),
        Err(BigIntError::DivisionByZero)
    );
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_by_zero_panics() {
    let _ = big("5") / BigInt::zero();
}

#[test]
fn modulus_is_always_in_range() {
    let m = big("97");

    assert_eq!(big("-7").modulus(&m).unwrap(), big("90"));
    assert_eq!(big("7").modulus(&m).unwrap(), big("7"));
    assert_eq!(big("97").modulus(&m).unwrap(), BigInt::zero());
    assert_eq!(big("-97").modulus(&m).unwrap(), BigInt::zero());
}

#[test]
fn modulus_rejects_bad_moduli() {
    assert_eq!(
        big("5").modulus(&BigInt::zero()),
        Err(BigIntError::DivisionByZero)
    );
    assert_eq!(
        big("5").modulus(&big("-3")),
        Err(BigIntError::NegativeModulus)
    );
}

#[test]
fn shifts_match_powers_of_two() {
    let a = big("123456789012345678901234567890");

    assert_eq!(&a << 37, big("16967771880870298596087029859591735214080"));
    assert_eq!(&(&a << 37) >> 37, a);
    assert_eq!(&a << 0, a);

    let two_pow_64 = &BigInt::one() << 64;
    assert_eq!(two_pow_64, big("18446744073709551616"));
    assert_eq!(&a << 64, &a * &two_pow_64);
}

#[test]
fn shift_by_bit_length_or_more_is_zero() {
    let a = big("123456789");

    assert_eq!(&a >> a.bit_length() as i64, BigInt::zero());
    assert_eq!(&a >> 4096, BigInt::zero());
}

#[test]
fn negative_shift_reverses_direction() {
    let a = big("123456789012345678901234567890");

    assert_eq!(&a << -3, &a >> 3);
    assert_eq!(&a >> -3, &a << 3);
}

#[test]
fn comparison_total_order() {
    let values = [
        big("-123456789012345678901234567890"),
        big("-4294967296"),
        big("-1"),
        BigInt::zero(),
        big("1"),
        big("4294967295"),
        big("4294967296"),
        big("123456789012345678901234567890"),
    ];

    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a < b, i < j, "{a} < {b}");
            assert_eq!(a == b, i == j, "{a} == {b}");
            assert_eq!(a > b, i > j, "{a} > {b}");
        }
    }
}

#[test]
fn zero_is_never_negative() {
    let zero = &big("5") - &big("5");

    assert!(!zero.is_negative());
    assert_eq!(-&BigInt::zero(), BigInt::zero());
    assert_eq!(zero, BigInt::zero());
}

#[test]
fn structural_helpers() {
    assert_eq!(BigInt::zero().bit_length(), 0);
    assert_eq!(BigInt::one().bit_length(), 1);
    assert_eq!(big("4294967296").bit_length(), 33);

    assert_eq!(big("4294967296").trailing_zeros(), 32);
    assert_eq!(big("12").trailing_zeros(), 2);

    assert!(big("4294967296").is_power_of_two());
    assert!(!big("12").is_power_of_two());
    assert!(!BigInt::zero().is_power_of_two());

    let a = big("4294967296");
    assert!(a.bit(32));
    assert!(!a.bit(31));
    assert!(!a.bit(1000));

    assert_eq!(big("-42").abs(), big("42"));
}

#[test]
fn compound_assignment() {
    let mut a = big("100");

    a += &big("23");
    assert_eq!(a, big("123"));

    a -= &big("3");
    assert_eq!(a, big("120"));

    a *= &big("1000000000000");
    assert_eq!(a, big("120000000000000"));

    a /= &big("7");
    assert_eq!(a, big("17142857142857"));

    a %= &big("1000");
    assert_eq!(a, big("857"));

    a <<= 4;
    assert_eq!(a, big("13712"));

    a >>= 4;
    assert_eq!(a, big("857"));
}

#[test]
fn primitive_conversions() {
    assert_eq!(BigInt::from(0u32), BigInt::zero());
    assert_eq!(BigInt::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInt::from(i64::MIN).to_string(), "-9223372036854775808");
    assert_eq!(
        BigInt::from(u128::MAX).to_string(),
        "340282366920938463463374607431768211455"
    );

    assert_eq!(u64::try_from(&big("18446744073709551615")), Ok(u64::MAX));
    assert!(u64::try_from(&big("18446744073709551616")).is_err());
    assert!(u64::try_from(&big("-1")).is_err());

    assert_eq!(u32::try_from(&big("4294967295")), Ok(u32::MAX));
    assert!(u32::try_from(&big("4294967296")).is_err());

    assert_eq!(i64::try_from(&big("-9223372036854775808")), Ok(i64::MIN));
    assert!(i64::try_from(&big("9223372036854775808")).is_err());
}

#[test]
fn random_respects_bit_limit() {
    let mut rng = Mt19937::from_seed(7);

    for bits in [1, 31, 32, 33, 64, 100, 255] {
        for _ in 0..10 {
            let value = BigInt::random(bits, &mut rng);

            assert!(value.bit_length() <= bits);
            assert!(!value.is_negative());
        }
    }

    assert_eq!(BigInt::random(0, &mut rng), BigInt::zero());
}

#[test]
fn from_limbs_normalizes() {
    assert_eq!(BigInt::from_limbs(vec![]), BigInt::zero());
    assert_eq!(BigInt::from_limbs(vec![0, 0, 0]), BigInt::zero());
    assert_eq!(BigInt::from_limbs(vec![5, 0, 0]), big("5"));
    assert_eq!(
        BigInt::from_limbs(vec![0, 1]),
        big("4294967296")
    );
}

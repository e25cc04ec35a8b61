use numera::rng::Mt19937;

#[test]
fn reference_sequence_default_seed() {
    // First outputs of the MT19937-64 reference implementation for the
    // conventional seed 5489.
    let mut rng = Mt19937::from_seed(5489);

    assert_eq!(rng.next_u64(), 14514284786278117030);
    assert_eq!(rng.next_u64(), 4620546740167642908);
    assert_eq!(rng.next_u64(), 13109570281517897720);
}

#[test]
fn reference_sequence_other_seed() {
    let mut rng = Mt19937::from_seed(42);

    assert_eq!(rng.next_u64(), 13930160852258120406);
    assert_eq!(rng.next_u64(), 11788048577503494824);
}

#[test]
fn next_u32_takes_the_high_half() {
    let mut rng = Mt19937::from_seed(5489);

    assert_eq!(rng.next_u32(), (14514284786278117030u64 >> 32) as u32);
}

#[test]
fn same_seed_same_stream() {
    let mut a = Mt19937::from_seed(123);
    let mut b = Mt19937::from_seed(123);

    for _ in 0..1000 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Mt19937::from_seed(1);
    let mut b = Mt19937::from_seed(2);

    let same = (0..64).filter(|_| a.next_u64() == b.next_u64()).count();

    assert!(same < 4);
}

#[test]
fn os_seeding_produces_output() {
    let mut rng = Mt19937::from_os();

    // Weak check on purpose: three consecutive equal draws from a
    // healthy generator are vanishingly unlikely.
    let (a, b, c) = (rng.next_u64(), rng.next_u64(), rng.next_u64());

    assert!(!(a == b && b == c));
}

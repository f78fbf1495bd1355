/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Numeric seeds are used as-is, anything else is hashed (FNV-1a) so shared
/// links like `#--seed=friday` replay the same board. The hash only has to be
/// stable across runs, it is not meant to be strong.
pub(crate) fn seed_from_str(seed: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    seed.parse().unwrap_or_else(|_| {
        seed.bytes()
            .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_is_used_verbatim() {
        assert_eq!(seed_from_str("1234"), 1234);
    }

    #[test]
    fn word_seed_is_stable_and_distinct() {
        assert_eq!(seed_from_str("friday"), seed_from_str("friday"));
        assert_ne!(seed_from_str("friday"), seed_from_str("monday"));
        assert_eq!(seed_from_str(""), 0xcbf2_9ce4_8422_2325);
    }
}

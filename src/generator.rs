//! Strong password generator.

use rand::Rng;
use std::ops::RangeInclusive;

/// Uppercase, lowercase, digits and `!@#$%^&*`.
pub const ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

pub const LENGTH_RANGE: RangeInclusive<usize> = 12..=16;

/// Generates a fresh suggestion using the thread-local RNG.
pub fn generate_strong_password() -> String {
    generate_strong_password_with(&mut rand::thread_rng())
}

/// Generates a suggestion from the given RNG.
///
/// Each character is drawn uniformly and independently from [`ALPHABET`], so
/// the result is not guaranteed to contain every character class.
pub fn generate_strong_password_with<R: Rng>(rng: &mut R) -> String {
    let length = rng.gen_range(LENGTH_RANGE);
    (0..length)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_has_seventy_unique_symbols() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 70);
    }

    #[test]
    fn test_generated_passwords_respect_policy() {
        for _ in 0..1_000 {
            let pwd = generate_strong_password();
            assert!(LENGTH_RANGE.contains(&pwd.len()), "bad length {}", pwd.len());
            assert!(pwd.bytes().all(|b| ALPHABET.contains(&b)), "bad char in {}", pwd);
        }
    }

    #[test]
    fn test_length_distribution_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 5];
        for _ in 0..10_000 {
            let pwd = generate_strong_password_with(&mut rng);
            counts[pwd.len() - 12] += 1;
        }
        for (offset, count) in counts.iter().enumerate() {
            assert!(
                (1_700..=2_300).contains(count),
                "length {} drawn {} times",
                offset + 12,
                count
            );
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_strong_password_with(&mut StdRng::seed_from_u64(42));
        let b = generate_strong_password_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}

use super::alphabet::ALPHABET;
use super::validation::VALID_LENGTH;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Length of codes produced when no length is requested
pub const DEFAULT_LENGTH: usize = 7;

/// Uniform draw over the join code alphabet
struct JoinCodeChar {
    range: Uniform<usize>,
}

impl JoinCodeChar {
    fn new() -> Self {
        Self {
            range: Uniform::new(0, ALPHABET.len()),
        }
    }
}

impl Distribution<char> for JoinCodeChar {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(ALPHABET[self.range.sample(rng)])
    }
}

/// Produces random join codes of a fixed length.
///
/// Characters are drawn independently and uniformly, with replacement.
/// Nothing prevents two calls from returning the same code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinCodeGenerator {
    length: usize,
}

impl Default for JoinCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl JoinCodeGenerator {
    pub fn new(length: usize) -> Self {
        if length != VALID_LENGTH {
            tracing::warn!(
                "Generating {}-character codes; only {}-character codes pass validation",
                length,
                VALID_LENGTH
            );
        }
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether codes from this generator will pass `is_valid`
    pub fn produces_valid_codes(&self) -> bool {
        self.length == VALID_LENGTH
    }

    /// Generate a code using the calling thread's random source
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a code from an explicit random source
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        draw_code(rng, self.length)
    }
}

/// Generate a random join code of `n` characters
pub fn generate_join_code(n: usize) -> String {
    draw_code(&mut rand::thread_rng(), n)
}

fn draw_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(JoinCodeChar::new()).take(length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::is_allowed;
    use crate::core::validation::is_valid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_join_code_creates_requested_length() {
        for n in [0, 1, 6, 7, 8, 32] {
            assert_eq!(generate_join_code(n).chars().count(), n);
        }
    }

    #[test]
    fn test_generate_join_code_zero_length_is_empty() {
        assert_eq!(generate_join_code(0), "");
    }

    #[test]
    fn test_generate_join_code_uses_only_alphabet() {
        for _ in 0..200 {
            assert!(generate_join_code(16).chars().all(is_allowed));
        }
    }

    #[test]
    fn test_default_length_codes_are_valid() {
        for _ in 0..100 {
            assert!(is_valid(generate_join_code(DEFAULT_LENGTH).as_str()));
        }
    }

    #[test]
    fn test_mismatched_length_codes_are_invalid() {
        assert!(!is_valid(generate_join_code(6).as_str()));
        assert!(!is_valid(generate_join_code(8).as_str()));
    }

    #[test]
    fn test_generate_with_same_seed_is_deterministic() {
        let generator = JoinCodeGenerator::default();
        let a = generator.generate_with(&mut StdRng::seed_from_u64(42));
        let b = generator.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_and_free_function_draw_the_same_way() {
        let generator = JoinCodeGenerator::new(12);
        let from_generator = generator.generate_with(&mut StdRng::seed_from_u64(3));
        let from_draw = draw_code(&mut StdRng::seed_from_u64(3), 12);
        assert_eq!(from_generator, from_draw);
    }

    #[test]
    fn test_generate_with_reaches_every_character() {
        let generator = JoinCodeGenerator::new(64);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.extend(generator.generate_with(&mut rng).chars());
        }
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_produces_valid_codes_tracks_length() {
        assert!(JoinCodeGenerator::default().produces_valid_codes());
        assert!(!JoinCodeGenerator::new(10).produces_valid_codes());
        assert_eq!(JoinCodeGenerator::new(10).length(), 10);
    }
}

use crate::Generator;
use rand::Rng;
use snip_core::shortcode::{ALPHABET, MAX_LENGTH, MIN_LENGTH};
use snip_core::{RegistryError, ShortCode};

pub const DEFAULT_LENGTH: usize = 6;

/// Draws every symbol uniformly from the 62-letter alphanumeric alphabet.
///
/// With the default length of 6 there are 62^6 (about 5.7e10) codes, so
/// collisions are rare but possible; callers are expected to retry.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new(length: usize) -> Result<Self, RegistryError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(RegistryError::InvalidInput(format!(
                "code length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, length
            )));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}

use crate::Generator;
use snip_core::shortcode::MAX_LENGTH;
use snip_core::{RegistryError, ShortCode};
use std::sync::atomic::{AtomicU64, Ordering};

/// A deterministic generator producing `prefix` followed by a zero-padded counter.
///
/// The counter wraps around after `10^width` codes, so the sequence
/// eventually repeats. That makes it handy for reproducible tests,
/// collision handling included, but unsuitable for production use.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
    prefix: String,
    width: usize,
    modulus: u64,
}

impl SeqGenerator {
    /// Creates a sequential generator with a prefix and a six-digit counter.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self, RegistryError> {
        Self::new(prefix, 6, 0)
    }

    /// Creates a sequential generator starting at `offset` with `width` counter digits.
    pub fn new(prefix: impl Into<String>, width: usize, offset: u64) -> Result<Self, RegistryError> {
        let prefix = prefix.into();
        if !prefix.bytes().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RegistryError::InvalidInput(format!(
                "generator prefix must be alphanumeric: '{}'",
                prefix
            )));
        }
        if width == 0 || prefix.len() + width > MAX_LENGTH {
            return Err(RegistryError::InvalidInput(format!(
                "prefix '{}' with {} counter digits does not fit in {} characters",
                prefix, width, MAX_LENGTH
            )));
        }

        Ok(Self {
            counter: AtomicU64::new(offset),
            prefix,
            width,
            modulus: 10_u64.pow(width as u32),
        })
    }
}

impl Generator for SeqGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let count = self.counter.fetch_add(1, Ordering::SeqCst) % self.modulus;
        let code = format!("{}{:0width$}", self.prefix, count, width = self.width);
        ShortCode::new_unchecked(code)
    }
}

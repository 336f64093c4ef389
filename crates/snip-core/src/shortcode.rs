use crate::error::RegistryError;
use smol_str::SmolStr;
use std::fmt::Display;

/// A validated short code identifying a shortened link.
///
/// Short codes are 1-10 characters long and contain only ASCII letters
/// (either case) and digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 10;

/// Every symbol a short code may contain.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl AsRef<str>) -> std::result::Result<Self, RegistryError> {
        let code = code.as_ref();
        Self::validate(code)?;
        Ok(Self(SmolStr::new(code)))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. generators drawing from [`ALPHABET`]).
    pub fn new_unchecked(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Generates the full short link based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), RegistryError> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(RegistryError::InvalidInput(format!(
                "short code length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.bytes().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RegistryError::InvalidInput(format!(
                "short code must contain only letters and digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

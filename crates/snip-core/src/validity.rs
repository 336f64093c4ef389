use crate::error::{RegistryError, Result};
use jiff::{SignedDuration, Timestamp};

/// How long a short link stays resolvable after creation, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Validity(u32);

impl Validity {
    /// 30 minutes.
    pub const DEFAULT: Validity = Validity(30);

    /// Ten years.
    pub const MAX_MINUTES: i64 = 10 * 366 * 24 * 60;

    /// Creates a validity window of `minutes`, which must be strictly positive.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if minutes < 1 {
            return Err(RegistryError::InvalidInput(format!(
                "validity must be a positive number of minutes, got {}",
                minutes
            )));
        }
        if minutes > Self::MAX_MINUTES {
            return Err(RegistryError::InvalidInput(format!(
                "validity must not exceed {} minutes, got {}",
                Self::MAX_MINUTES,
                minutes
            )));
        }
        Ok(Self(minutes as u32))
    }

    /// Parses a validity given as decimal text, e.g. `"45"`.
    ///
    /// Anything that is not a whole number of minutes is rejected rather than
    /// falling back to the default.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let minutes = trimmed.parse::<i64>().map_err(|_| {
            RegistryError::InvalidInput(format!(
                "validity must be a whole number of minutes, got '{}'",
                input
            ))
        })?;
        Self::from_minutes(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_duration(&self) -> SignedDuration {
        SignedDuration::from_mins(i64::from(self.0))
    }

    /// Computes the expiry of a link created at `created_at`.
    pub fn expires_at(&self, created_at: Timestamp) -> Result<Timestamp> {
        created_at.checked_add(self.as_duration()).map_err(|e| {
            RegistryError::InvalidInput(format!("validity overflows the timestamp range: {}", e))
        })
    }
}

impl Default for Validity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_thirty_minutes() {
        assert_eq!(Validity::default().minutes(), 30);
        assert_eq!(Validity::DEFAULT.as_duration(), SignedDuration::from_mins(30));
    }

    #[test]
    fn parse_accepts_whole_minutes() {
        assert_eq!(Validity::parse("45").unwrap().minutes(), 45);
        assert_eq!(Validity::parse(" 5 ").unwrap().minutes(), 5);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        for input in ["abc", "", "1.5", "15abc", "NaN"] {
            let err = Validity::parse(input).unwrap_err();
            assert!(
                matches!(err, RegistryError::InvalidInput(_)),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_positive_is_rejected() {
        assert!(Validity::from_minutes(0).is_err());
        assert!(Validity::from_minutes(-10).is_err());
        assert!(Validity::parse("0").is_err());
    }

    #[test]
    fn upper_bound() {
        assert!(Validity::from_minutes(Validity::MAX_MINUTES).is_ok());
        assert!(Validity::from_minutes(Validity::MAX_MINUTES + 1).is_err());
    }

    #[test]
    fn expires_after_creation() {
        let created_at = Timestamp::from_second(1_700_000_000).unwrap();
        let validity = Validity::from_minutes(1).unwrap();

        let expires_at = validity.expires_at(created_at).unwrap();
        assert!(expires_at > created_at);
        assert_eq!(expires_at.as_second() - created_at.as_second(), 60);
    }
}

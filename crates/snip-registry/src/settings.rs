use snip_core::{ShortCode, Validity};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Tunables for an [`InMemoryRegistry`](crate::InMemoryRegistry).
#[derive(Debug, Clone, TypedBuilder)]
pub struct RegistrySettings {
    /// Validity applied when a creation request does not specify one.
    #[builder(default = Validity::DEFAULT)]
    pub default_validity: Validity,
    /// How many generated codes to try before giving up with
    /// `ExhaustedCapacity`. Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_GENERATION_ATTEMPTS)]
    pub max_generation_attempts: u32,
    /// Codes that can never be registered, e.g. because a route shadows them.
    #[builder(default)]
    pub reserved_codes: Vec<ShortCode>,
}

impl RegistrySettings {
    pub fn is_reserved(&self, code: &ShortCode) -> bool {
        self.reserved_codes.contains(code)
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

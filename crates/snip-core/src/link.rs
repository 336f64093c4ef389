use crate::shortcode::ShortCode;
use crate::validity::Validity;
use jiff::Timestamp;
use std::net::IpAddr;
use typed_builder::TypedBuilder;

/// Parameters for creating a short link.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateLink {
    /// The URL the short link redirects to.
    #[builder(setter(into))]
    pub original_url: String,
    /// How long the link stays resolvable; the registry default when `None`.
    #[builder(default, setter(strip_option))]
    pub validity: Option<Validity>,
    /// A caller-chosen code, used verbatim when present.
    #[builder(default, setter(strip_option))]
    pub requested_code: Option<ShortCode>,
}

/// The outcome of a successful creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedLink {
    pub short_code: ShortCode,
    pub expires_at: Timestamp,
}

/// What the caller knows about a visitor at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option, into)))]
pub struct VisitMetadata {
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub source_address: Option<IpAddr>,
}

/// One successful resolution of a short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub timestamp: Timestamp,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub source_address: Option<IpAddr>,
}

impl Visit {
    pub fn new(timestamp: Timestamp, metadata: VisitMetadata) -> Self {
        Self {
            timestamp,
            referrer: metadata.referrer,
            user_agent: metadata.user_agent,
            source_address: metadata.source_address,
        }
    }
}

/// A point-in-time snapshot of a link and its click history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub original_url: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    /// Visits in the order they happened.
    pub visits: Vec<Visit>,
}

impl LinkStats {
    pub fn total_clicks(&self) -> usize {
        self.visits.len()
    }
}

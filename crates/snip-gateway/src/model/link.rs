use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use snip_core::{CreateLink, LinkStats, RegistryError, ShortCode, Validity, Visit};

/// Top-level paths served by the gateway itself. A short code equal to one
/// of these would never be reachable.
pub const RESERVED_CODES: &[&str] = &["health", "shorturls"];

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: Option<String>,
    pub validity: Option<ValidityInput>,
    pub shortcode: Option<String>,
}

/// Validity in minutes, sent either as a JSON number or as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ValidityInput {
    Minutes(serde_json::Number),
    Text(String),
}

impl ValidityInput {
    pub fn into_validity(self) -> Result<Validity, RegistryError> {
        match self {
            ValidityInput::Minutes(number) => match number.as_i64() {
                Some(minutes) => Validity::from_minutes(minutes),
                None => Err(RegistryError::InvalidInput(format!(
                    "validity must be a whole number of minutes, got {}",
                    number
                ))),
            },
            ValidityInput::Text(text) => Validity::parse(&text),
        }
    }
}

impl CreateLinkRequest {
    /// Converts the wire request into registry parameters.
    ///
    /// An empty `shortcode` means "generate one", as does a missing one.
    pub fn into_params(self) -> Result<CreateLink, RegistryError> {
        let original_url = self
            .url
            .ok_or_else(|| RegistryError::InvalidInput("url is required".to_string()))?;

        let validity = self.validity.map(ValidityInput::into_validity).transpose()?;

        let requested_code = match self.shortcode.as_deref() {
            None | Some("") => None,
            Some(code) if RESERVED_CODES.contains(&code) => {
                return Err(RegistryError::InvalidInput(format!(
                    "short code '{}' is reserved",
                    code
                )));
            }
            Some(code) => Some(ShortCode::new(code)?),
        };

        Ok(CreateLink {
            original_url,
            validity,
            requested_code,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub short_link: String,
    pub expiry: Timestamp,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickDetail {
    pub timestamp: Timestamp,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl From<Visit> for ClickDetail {
    fn from(visit: Visit) -> Self {
        Self {
            timestamp: visit.timestamp,
            referrer: visit.referrer,
            user_agent: visit.user_agent,
            ip: visit.source_address.map(|addr| addr.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatsResponse {
    pub total_clicks: usize,
    pub original_url: String,
    pub created_at: Timestamp,
    pub expiry: Timestamp,
    pub click_details: Vec<ClickDetail>,
}

impl From<LinkStats> for LinkStatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            total_clicks: stats.total_clicks(),
            original_url: stats.original_url,
            created_at: stats.created_at,
            expiry: stats.expires_at,
            click_details: stats.visits.into_iter().map(ClickDetail::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

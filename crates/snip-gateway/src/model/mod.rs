mod health;
mod link;

pub use health::HealthResponse;
pub use link::{
    ClickDetail, CreateLinkRequest, CreateLinkResponse, ErrorResponse, LinkStatsResponse,
    ValidityInput, RESERVED_CODES,
};

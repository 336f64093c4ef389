mod health;
mod link;

pub use health::health_handler;
pub use link::{create_link_handler, link_stats_handler, resolve_link_handler};

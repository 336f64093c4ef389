//! Core types and traits for the Snip URL shortener.
//!
//! This crate provides the domain types shared by the code generators,
//! the in-memory link registry and the HTTP gateway.

pub mod clock;
pub mod error;
pub mod link;
pub mod registry;
pub mod shortcode;
pub mod validity;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{RegistryError, Result};
pub use link::{CreateLink, CreatedLink, LinkStats, Visit, VisitMetadata};
pub use registry::LinkRegistry;
pub use shortcode::ShortCode;
pub use validity::Validity;

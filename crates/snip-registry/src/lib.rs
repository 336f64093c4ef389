//! In-memory link registry.
//!
//! This crate provides [`InMemoryRegistry`], the single source of truth for
//! short links in a Snip process. It maps short codes to link records,
//! enforces code uniqueness, expires links lazily on resolution and keeps
//! an append-only visit log per link.
//!
//! # Example
//!
//! ```rust
//! use snip_core::{CreateLink, LinkRegistry, VisitMetadata};
//! use snip_generator::RandomGenerator;
//! use snip_registry::InMemoryRegistry;
//!
//! # fn example() -> Result<(), snip_core::RegistryError> {
//! let registry = InMemoryRegistry::new(RandomGenerator::default());
//!
//! let created = registry.create(
//!     CreateLink::builder()
//!         .original_url("https://example.com")
//!         .build(),
//! )?;
//!
//! let url = registry.resolve(&created.short_code, VisitMetadata::default())?;
//! assert_eq!(url, "https://example.com");
//! assert_eq!(registry.stats(&created.short_code)?.total_clicks(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod memory;
pub mod settings;

pub use memory::InMemoryRegistry;
pub use settings::RegistrySettings;

use crate::error::Result;
use crate::link::{CreateLink, CreatedLink, LinkStats, VisitMetadata};
use crate::shortcode::ShortCode;

/// A keyed store of short links with click analytics.
///
/// Every operation works on in-memory state only and never blocks on I/O,
/// so the trait is synchronous and can be called directly from async
/// request handlers.
pub trait LinkRegistry: Send + Sync + 'static {
    /// Registers a new short link.
    ///
    /// Fails with `InvalidInput` for a malformed URL, `CodeConflict` when the
    /// requested code is taken (even by an expired link) and
    /// `ExhaustedCapacity` when no free code could be generated.
    fn create(&self, params: CreateLink) -> Result<CreatedLink>;

    /// Resolves a short code to its original URL and records the visit.
    ///
    /// Fails with `NotFound` or `Expired`; failed lookups record nothing.
    fn resolve(&self, code: &ShortCode, metadata: VisitMetadata) -> Result<String>;

    /// Returns a snapshot of a link and its visits, expired or not.
    fn stats(&self, code: &ShortCode) -> Result<LinkStats>;

    /// Number of stored links, expired ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

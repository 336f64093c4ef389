use crate::settings::RegistrySettings;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use jiff::Timestamp;
use parking_lot::Mutex;
use snip_core::{
    Clock, CreateLink, CreatedLink, LinkRegistry, LinkStats, RegistryError, Result, ShortCode,
    SystemClock, Visit, VisitMetadata,
};
use snip_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// In-memory storage entry for a short link.
///
/// Everything but the visit log is fixed at creation. The visit log has its
/// own lock so that recording a click never holds a map shard.
#[derive(Debug)]
struct Entry {
    original_url: String,
    created_at: Timestamp,
    expires_at: Timestamp,
    visits: Mutex<Vec<Visit>>,
}

impl Entry {
    fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

/// In-memory implementation of [`LinkRegistry`] using DashMap.
///
/// DashMap shards its locks, so creations and lookups of different codes
/// rarely contend. Entries are handed out as `Arc`s and the shard guard is
/// released before a visit is appended or a snapshot is taken.
///
/// Expired links are never removed: their codes stay taken for the life of
/// the registry.
pub struct InMemoryRegistry<G, C = SystemClock> {
    links: DashMap<ShortCode, Arc<Entry>>,
    generator: G,
    clock: C,
    settings: RegistrySettings,
}

impl<G: Generator> InMemoryRegistry<G, SystemClock> {
    /// Creates an empty registry with default settings and the wall clock.
    pub fn new(generator: G) -> Self {
        Self::with_settings(generator, RegistrySettings::default())
    }

    /// Creates an empty registry with the given settings and the wall clock.
    pub fn with_settings(generator: G, settings: RegistrySettings) -> Self {
        Self::with_clock(generator, SystemClock, settings)
    }
}

impl<G: Generator, C: Clock> InMemoryRegistry<G, C> {
    pub fn with_clock(generator: G, clock: C, settings: RegistrySettings) -> Self {
        Self {
            links: DashMap::new(),
            generator,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Validates that the URL uses the http or https scheme and has something after it.
    ///
    /// The URL ends up verbatim in a redirect's `Location` header, so only
    /// printable ASCII without spaces is accepted.
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(RegistryError::InvalidInput(
                "URL cannot be empty".to_string(),
            ));
        }

        if let Some(position) = url.bytes().position(|c| !c.is_ascii_graphic()) {
            return Err(RegistryError::InvalidInput(format!(
                "URL must be printable ASCII without spaces (percent-encode other characters), \
                 found {:?} at byte {}",
                url[position..].chars().next().unwrap_or_default(),
                position
            )));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(RegistryError::InvalidInput(format!(
                "URL must start with http:// or https://: {}",
                url
            )));
        };

        let scheme = scheme.to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(RegistryError::InvalidInput(format!(
                "URL scheme must be http or https: {}",
                scheme
            )));
        }

        if rest.trim().is_empty() {
            return Err(RegistryError::InvalidInput(format!(
                "URL must have a host: {}",
                url
            )));
        }

        Ok(())
    }

    /// Inserts `entry` under `code` unless the code is already taken.
    ///
    /// The check and the insert happen under the same shard lock.
    fn try_insert(&self, code: &ShortCode, entry: &Arc<Entry>) -> bool {
        match self.links.entry(code.clone()) {
            MapEntry::Occupied(_) => false,
            MapEntry::Vacant(slot) => {
                slot.insert(Arc::clone(entry));
                true
            }
        }
    }

    fn insert_generated(&self, entry: &Arc<Entry>) -> Result<ShortCode> {
        let attempts = self.settings.max_generation_attempts.max(1);

        for attempt in 1..=attempts {
            let code: ShortCode = self.generator.generate().into();
            if self.settings.is_reserved(&code) {
                debug!(code = %code, attempt, "generated short code is reserved, retrying");
                continue;
            }
            if self.try_insert(&code, entry) {
                return Ok(code);
            }
            debug!(code = %code, attempt, "generated short code collided, retrying");
        }

        warn!(attempts, "failed to generate a free short code");
        Err(RegistryError::ExhaustedCapacity { attempts })
    }

    fn get(&self, code: &ShortCode) -> Result<Arc<Entry>> {
        trace!(code = %code, "looking up short code");
        self.links
            .get(code)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }
}

impl<G: Generator, C: Clock> LinkRegistry for InMemoryRegistry<G, C> {
    fn create(&self, params: CreateLink) -> Result<CreatedLink> {
        Self::validate_url(&params.original_url)?;

        let validity = params.validity.unwrap_or(self.settings.default_validity);
        let created_at = self.clock.now();
        let expires_at = validity.expires_at(created_at)?;

        let entry = Arc::new(Entry {
            original_url: params.original_url,
            created_at,
            expires_at,
            visits: Mutex::new(Vec::new()),
        });

        let short_code = match params.requested_code {
            Some(code) => {
                if self.settings.is_reserved(&code) {
                    return Err(RegistryError::InvalidInput(format!(
                        "short code '{}' is reserved",
                        code
                    )));
                }
                if !self.try_insert(&code, &entry) {
                    debug!(code = %code, "requested short code is taken");
                    return Err(RegistryError::CodeConflict(code.to_string()));
                }
                code
            }
            None => self.insert_generated(&entry)?,
        };

        info!(
            code = %short_code,
            url = %entry.original_url,
            expires_at = %expires_at,
            "created short link"
        );

        Ok(CreatedLink {
            short_code,
            expires_at,
        })
    }

    fn resolve(&self, code: &ShortCode, metadata: VisitMetadata) -> Result<String> {
        let entry = self.get(code)?;

        // Read the clock under the visit lock so the log stays in time order.
        let mut visits = entry.visits.lock();
        let now = self.clock.now();
        if entry.is_expired_at(now) {
            debug!(code = %code, expires_at = %entry.expires_at, "short link has expired");
            return Err(RegistryError::Expired(code.to_string()));
        }
        visits.push(Visit::new(now, metadata));
        drop(visits);

        debug!(code = %code, url = %entry.original_url, "resolved short code");
        Ok(entry.original_url.clone())
    }

    fn stats(&self, code: &ShortCode) -> Result<LinkStats> {
        let entry = self.get(code)?;
        let visits = entry.visits.lock().clone();

        Ok(LinkStats {
            original_url: entry.original_url.clone(),
            created_at: entry.created_at,
            expires_at: entry.expires_at,
            visits,
        })
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}

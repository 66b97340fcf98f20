//! MatchSlotsHandler - Query handler recommending slots to a solo traveler.
//!
//! Takes a relaxed-consistency snapshot of open slots, joins each with its
//! package, and hands the set to the pure match engine. Stale reads may miss
//! a slot that just opened, but a slot that is full as of the snapshot is
//! never ranked as available.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::matching::{CandidateSlot, MatchCandidate, MatchEngine, MatchPreferences};
use crate::ports::{PackageCatalog, SlotRegistry};

/// Query for ranked slot recommendations.
#[derive(Debug, Clone)]
pub struct MatchSlotsQuery {
    pub prefs: MatchPreferences,
    /// Requested result count; clamped to the configured maximum.
    pub limit: Option<usize>,
}

/// Handler for matching queries.
pub struct MatchSlotsHandler {
    slot_registry: Arc<dyn SlotRegistry>,
    package_catalog: Arc<dyn PackageCatalog>,
    engine: MatchEngine,
    default_limit: usize,
    max_limit: usize,
}

impl MatchSlotsHandler {
    pub fn new(
        slot_registry: Arc<dyn SlotRegistry>,
        package_catalog: Arc<dyn PackageCatalog>,
        engine: MatchEngine,
        default_limit: usize,
        max_limit: usize,
    ) -> Self {
        Self {
            slot_registry,
            package_catalog,
            engine,
            default_limit,
            max_limit,
        }
    }

    pub async fn handle(
        &self,
        query: MatchSlotsQuery,
    ) -> Result<Vec<MatchCandidate>, DomainError> {
        let open_slots = self.slot_registry.list_open().await?;

        let mut candidates = Vec::with_capacity(open_slots.len());
        for slot in open_slots {
            match self.package_catalog.get(&slot.package_id).await? {
                Some(package) => candidates.push(CandidateSlot { slot, package }),
                // A slot whose package vanished from the catalog cannot be
                // scored; leave it out rather than rank it blind.
                None => warn!(
                    slot_id = %slot.id,
                    package_id = %slot.package_id,
                    "slot references a package missing from the catalog"
                ),
            }
        }

        let mut ranked = self
            .engine
            .rank(candidates, &query.prefs, Timestamp::now());

        let limit = query
            .limit
            .unwrap_or(self.default_limit)
            .min(self.max_limit);
        ranked.truncate(limit);

        debug!(results = ranked.len(), "match query served");
        Ok(ranked)
    }
}

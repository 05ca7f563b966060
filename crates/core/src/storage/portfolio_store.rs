use super::backend::StorageBackend;
use crate::errors::CoreError;
use crate::models::lot::Lot;

/// Durable key holding the full serialized lot list.
pub const PORTFOLIO_KEY: &str = "portfolio";

/// CRUD over the persisted portfolio: the exclusive owner of the lot
/// list in durable storage.
///
/// Stateless by design — every operation reads the full list from the
/// backend and, on mutation, writes the full list back. There is no
/// partial update and no append-only log, so the only race between two
/// near-simultaneous mutations is last-writer-wins.
pub struct PortfolioStore {
    backend: Box<dyn StorageBackend>,
}

impl PortfolioStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// All lots in storage-read order. Never fails: a missing key yields
    /// an empty list, and corrupt/unparseable storage is logged and
    /// treated as empty.
    #[must_use]
    pub fn list(&self) -> Vec<Lot> {
        let Some(raw) = self.backend.get(PORTFOLIO_KEY) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Corrupt portfolio storage, treating as empty: {e}");
            Vec::new()
        })
    }

    /// Append a lot and persist the full list.
    ///
    /// No uniqueness check is performed — duplicate composite keys are
    /// accepted and will later be removed together.
    pub fn add(&mut self, lot: Lot) -> Result<(), CoreError> {
        let mut lots = self.list();
        lots.push(lot);
        self.persist(&lots)
    }

    /// Remove every lot whose (asset id, purchase timestamp) pair matches
    /// and persist the result. Silent no-op when nothing matches, and
    /// therefore idempotent.
    pub fn remove(&mut self, asset_id: &str, purchased_at: &str) -> Result<(), CoreError> {
        let lots: Vec<Lot> = self
            .list()
            .into_iter()
            .filter(|lot| !lot.matches(asset_id, purchased_at))
            .collect();
        self.persist(&lots)
    }

    fn persist(&mut self, lots: &[Lot]) -> Result<(), CoreError> {
        let raw = serde_json::to_string(lots)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        self.backend.set(PORTFOLIO_KEY, &raw)
    }
}

impl std::fmt::Debug for PortfolioStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioStore")
            .field("lots", &self.list().len())
            .finish()
    }
}

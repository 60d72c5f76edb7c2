//! Persistence of monthly summary rows.
//!
//! A [`SummaryStore`] is constructed once by the caller and handed to
//! whatever needs it (the HTTP state, the CLI); there is no global
//! connection. Two implementations are provided: an in-memory store for
//! tests and single-session use, and a JSON file store.

mod json_file;
mod memory;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::SummaryRow;

pub use json_file::JsonFileSummaryStore;
pub use memory::InMemorySummaryStore;

/// Storage for saved summary rows, keyed by their opaque id.
pub trait SummaryStore: Send + Sync {
    /// Persists a row and returns it as stored.
    fn save(&self, row: SummaryRow) -> EngineResult<SummaryRow>;

    /// Returns every stored row in save order.
    fn list(&self) -> EngineResult<Vec<SummaryRow>>;

    /// Returns one row, or `SummaryNotFound`.
    fn get(&self, id: Uuid) -> EngineResult<SummaryRow>;

    /// Removes one row, or returns `SummaryNotFound`.
    fn delete(&self, id: Uuid) -> EngineResult<()>;
}

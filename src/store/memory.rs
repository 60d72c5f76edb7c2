//! In-memory summary store.

use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::SummaryRow;

use super::SummaryStore;

/// Keeps rows in process memory; contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemorySummaryStore {
    rows: RwLock<Vec<SummaryRow>>,
}

impl InMemorySummaryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> EngineError {
    EngineError::StoreError {
        message: "summary store lock poisoned".to_string(),
    }
}

impl SummaryStore for InMemorySummaryStore {
    fn save(&self, row: SummaryRow) -> EngineResult<SummaryRow> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.push(row.clone());
        Ok(row)
    }

    fn list(&self) -> EngineResult<Vec<SummaryRow>> {
        Ok(self.rows.read().map_err(|_| poisoned())?.clone())
    }

    fn get(&self, id: Uuid) -> EngineResult<SummaryRow> {
        self.rows
            .read()
            .map_err(|_| poisoned())?
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(|| EngineError::SummaryNotFound { id: id.to_string() })
    }

    fn delete(&self, id: Uuid) -> EngineResult<()> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() == before {
            return Err(EngineError::SummaryNotFound { id: id.to_string() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn row(name: &str) -> SummaryRow {
        SummaryRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: "E1".to_string(),
            extra_time: "01:30".to_string(),
            earned_days: 0,
            absents: 1,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_then_list_in_order() {
        let store = InMemorySummaryStore::new();
        store.save(row("first")).unwrap();
        store.save(row("second")).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_get_by_id() {
        let store = InMemorySummaryStore::new();
        let saved = store.save(row("a")).unwrap();
        assert_eq!(store.get(saved.id).unwrap(), saved);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = InMemorySummaryStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(EngineError::SummaryNotFound { .. })
        ));
    }

    #[test]
    fn test_delete_removes_only_that_row() {
        let store = InMemorySummaryStore::new();
        let a = store.save(row("a")).unwrap();
        let b = store.save(row("b")).unwrap();

        store.delete(a.id).unwrap();
        assert_eq!(store.list().unwrap(), vec![b]);
        assert!(matches!(
            store.delete(a.id),
            Err(EngineError::SummaryNotFound { .. })
        ));
    }
}

//! Authoritative in-memory collection for one entity type.

use contracts::domain::common::{MasterRecord, RecordId};

use super::error::ApiError;

/// Sequence number handed out by [`RecordStore::begin_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Replaced { count: usize },
    /// A newer fetch was issued after this one started
    Superseded,
    /// The previous collection is kept
    Failed(ApiError),
    /// The owning page is gone
    Closed,
}

#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
    issued: u64,
    revision: u64,
    loaded: bool,
    closed: bool,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            issued: 0,
            revision: 0,
            loaded: false,
            closed: false,
        }
    }
}

impl<R: MasterRecord> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Last issued ticket wins; everything older is dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<R>, ApiError>,
    ) -> FetchOutcome {
        if self.closed {
            log::debug!("{}: response after close dropped", R::collection_name());
            return FetchOutcome::Closed;
        }
        if ticket.0 != self.issued {
            log::debug!(
                "{}: superseded response #{} dropped (latest #{})",
                R::collection_name(),
                ticket.0,
                self.issued
            );
            return FetchOutcome::Superseded;
        }
        match result {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.revision += 1;
                self.loaded = true;
                log::debug!("{}: loaded {} records", R::collection_name(), count);
                FetchOutcome::Replaced { count }
            }
            Err(e) => {
                log::warn!(
                    "{}: fetch failed, keeping {} records: {}",
                    R::collection_name(),
                    self.records.len(),
                    e
                );
                FetchOutcome::Failed(e)
            }
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Bumped on every successful replace.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// At least one fetch has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_brand::aggregate::Brand;

    fn brand(id: i64, name: &str) -> Brand {
        Brand {
            id: RecordId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_replace_and_get() {
        let mut store = RecordStore::new();
        let ticket = store.begin_fetch();
        let outcome = store.complete_fetch(ticket, Ok(vec![brand(1, "Alpha"), brand(2, "Beta")]));
        assert_eq!(outcome, FetchOutcome::Replaced { count: 2 });
        assert!(store.is_loaded());
        assert_eq!(store.revision(), 1);
        assert_eq!(store.get(RecordId(2)).map(|b| b.name.as_str()), Some("Beta"));
        assert!(store.get(RecordId(3)).is_none());
    }

    #[test]
    fn test_failure_keeps_previous_collection() {
        let mut store = RecordStore::new();
        let ticket = store.begin_fetch();
        store.complete_fetch(ticket, Ok(vec![brand(1, "Alpha")]));

        let ticket = store.begin_fetch();
        let outcome = store.complete_fetch(ticket, Err(ApiError::Transport("offline".into())));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_superseded_response_is_ignored() {
        let mut store = RecordStore::new();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        let outcome = store.complete_fetch(second, Ok(vec![brand(1, "New")]));
        assert_eq!(outcome, FetchOutcome::Replaced { count: 1 });
        let outcome = store.complete_fetch(first, Ok(vec![brand(1, "Old"), brand(2, "Gone")]));
        assert_eq!(outcome, FetchOutcome::Superseded);
        assert_eq!(store.records(), &[brand(1, "New")]);
    }

    #[test]
    fn test_late_response_after_close_is_ignored() {
        let mut store: RecordStore<Brand> = RecordStore::new();
        let ticket = store.begin_fetch();
        store.close();
        let outcome = store.complete_fetch(ticket, Ok(vec![brand(1, "Alpha")]));
        assert_eq!(outcome, FetchOutcome::Closed);
        assert!(store.records().is_empty());
        assert!(!store.is_loaded());
    }
}

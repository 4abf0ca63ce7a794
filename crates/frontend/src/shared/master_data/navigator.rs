use contracts::domain::common::{MasterRecord, RecordId};

use super::mode::{ModeRouter, Navigate};

/// Previous/next stepping through the ordered view while editing.
///
/// Build it from the same ordered view the list renders, every time;
/// a cached copy goes stale after a refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordNavigator {
    ids: Vec<RecordId>,
    active: RecordId,
}

impl RecordNavigator {
    pub fn new<R: MasterRecord>(ordered: &[R], active: RecordId) -> Self {
        Self {
            ids: ordered.iter().map(MasterRecord::id).collect(),
            active,
        }
    }

    /// 0-based index of the active record, `None` if it is filtered out.
    pub fn position(&self) -> Option<usize> {
        self.ids.iter().position(|id| *id == self.active)
    }

    pub fn previous_id(&self) -> Option<RecordId> {
        let pos = self.position()?;
        pos.checked_sub(1).map(|i| self.ids[i])
    }

    pub fn next_id(&self) -> Option<RecordId> {
        let pos = self.position()?;
        self.ids.get(pos + 1).copied()
    }

    pub fn total(&self) -> usize {
        self.ids.len()
    }

    /// Stepping is only worth showing with somewhere to go.
    pub fn is_visible(&self) -> bool {
        self.ids.len() > 1 && self.position().is_some()
    }

    pub fn label(&self) -> String {
        match self.position() {
            Some(pos) => format!("Record {} / {}", pos + 1, self.ids.len()),
            None => format!("Record - / {}", self.ids.len()),
        }
    }

    /// Returns whether a navigation was issued.
    pub fn go_previous<N: Navigate>(&self, router: &ModeRouter<N>) -> bool {
        self.previous_id().map(|id| router.go_to_edit(id)).is_some()
    }

    pub fn go_next<N: Navigate>(&self, router: &ModeRouter<N>) -> bool {
        self.next_id().map(|id| router.go_to_edit(id)).is_some()
    }
}

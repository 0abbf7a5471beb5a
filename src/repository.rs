use crate::models::{Entry, EntryId, NewEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("entry {0} not found")]
    NotFound(EntryId),
    #[error("no entry ids left to assign")]
    IdsExhausted,
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Owned entry arena keyed by id. `next_id` is persisted with the records so
/// ids are never handed out twice, even after a delete or a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryStore {
    next_id: EntryId,
    entries: BTreeMap<EntryId, Entry>,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl EntryStore {
    /// Entries in id order, which is insertion order.
    pub fn list_entries(&self) -> Vec<Entry> {
        self.entries.values().cloned().collect()
    }

    pub fn get_entry(&self, id: EntryId) -> Option<Entry> {
        self.entries.get(&id).cloned()
    }

    pub fn add_entry(&mut self, entry: NewEntry) -> RepoResult<Entry> {
        // Guard against a hand-edited data file whose counter lags its records.
        let floor = match self.entries.keys().next_back() {
            Some(last) => last.checked_add(1).ok_or(RepoError::IdsExhausted)?,
            None => 1,
        };
        let id = self.next_id.max(floor);
        self.next_id = id.checked_add(1).ok_or(RepoError::IdsExhausted)?;

        let stored = entry.with_id(id);
        self.entries.insert(id, stored.clone());
        Ok(stored)
    }

    pub fn update_entry(&mut self, entry: Entry) -> RepoResult<()> {
        match self.entries.get_mut(&entry.id) {
            Some(slot) => {
                *slot = entry;
                Ok(())
            }
            None => Err(RepoError::NotFound(entry.id)),
        }
    }

    pub fn delete_entry(&mut self, id: EntryId) -> RepoResult<Entry> {
        self.entries.remove(&id).ok_or(RepoError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use crate::model::Document;
use log::{debug, warn};
use std::path::PathBuf;

pub const DEFAULT_SLOT_KEY: &str = "simple_todo_v1";
pub const DEFAULT_SEED_LISTS: [&str; 2] = ["Personal", "Work"];

/// Whole-document persistence over a single slot of a [`StorageBackend`].
pub struct SlotStore<B: StorageBackend> {
    pub(crate) backend: B,
    key: String,
    seed_lists: Vec<String>,
}

impl<B: StorageBackend> SlotStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_SLOT_KEY.to_string(),
            seed_lists: DEFAULT_SEED_LISTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub fn with_seed_lists(mut self, names: Vec<String>) -> Self {
        self.seed_lists = names;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.slot_location(&self.key)
    }

    /// Reads the document from the slot.
    ///
    /// An absent or unreadable slot yields a freshly seeded document (not written
    /// back until the first mutation). A slot whose contents cannot be decoded
    /// or parsed is an error: silently reseeding would discard the user's data
    /// on the next save.
    pub fn load(&self) -> Result<Document> {
        let raw = match self.backend.read_slot(&self.key) {
            Ok(raw) => raw,
            Err(e @ TodoError::Corrupt(_)) => return Err(e),
            Err(e) => {
                warn!("slot {} is unreadable ({}), starting fresh", self.key, e);
                None
            }
        };

        match raw {
            Some(raw) => {
                let doc: Document = serde_json::from_str(&raw).map_err(TodoError::Serialization)?;
                debug!("loaded {} lists from slot {}", doc.lists.len(), self.key);
                Ok(doc)
            }
            None => Ok(Document::seeded(&self.seed_lists)),
        }
    }

    /// Overwrites the slot with the full document.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let encoded = serde_json::to_string(doc).map_err(TodoError::Serialization)?;
        self.backend.write_slot(&self.key, &encoded)?;
        debug!("saved {} lists to slot {}", doc.lists.len(), self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Task, TodoList};
    use crate::store::mem_backend::MemBackend;

    fn sample_doc() -> Document {
        let mut list = TodoList::new("l1".into(), "Groceries".into());
        list.tasks.push(Task {
            id: "t1".into(),
            title: "Buy milk".into(),
            desc: "2 litres".into(),
            due: Some("2024-05-01T09:30".into()),
            completed: true,
            created_at: 1_714_550_000_000,
        });
        list.tasks.push(Task {
            id: "t2".into(),
            title: "Bread".into(),
            desc: String::new(),
            due: None,
            completed: false,
            created_at: 1_714_550_100_000,
        });
        Document {
            lists: vec![list, TodoList::new("l2".into(), "Chores".into())],
            selected_list_id: Some("l2".into()),
        }
    }

    #[test]
    fn fresh_load_seeds_personal_and_work() {
        let store = SlotStore::new(MemBackend::new());
        let doc = store.load().unwrap();

        assert_eq!(doc.lists.len(), 2);
        assert_eq!(doc.lists[0].name, "Personal");
        assert_eq!(doc.lists[1].name, "Work");
        assert!(doc.lists.iter().all(|l| l.tasks.is_empty()));
        assert_eq!(doc.selected_list_id, Some(doc.lists[0].id.clone()));
    }

    #[test]
    fn fresh_load_does_not_write_the_seed() {
        let store = SlotStore::new(MemBackend::new());
        store.load().unwrap();
        assert!(store.backend().raw(DEFAULT_SLOT_KEY).is_none());
    }

    #[test]
    fn custom_seed_lists_are_used() {
        let store = SlotStore::new(MemBackend::new()).with_seed_lists(vec!["Inbox".into()]);
        let doc = store.load().unwrap();
        assert_eq!(doc.lists.len(), 1);
        assert_eq!(doc.lists[0].name, "Inbox");
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SlotStore::new(MemBackend::new());
        let doc = sample_doc();
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn save_uses_configured_key() {
        let store = SlotStore::new(MemBackend::new()).with_key("other");
        store.save(&sample_doc()).unwrap();
        assert!(store.backend().raw("other").is_some());
        assert!(store.backend().raw(DEFAULT_SLOT_KEY).is_none());
    }

    #[test]
    fn malformed_slot_is_an_error() {
        let store = SlotStore::new(MemBackend::with_slot(DEFAULT_SLOT_KEY, "{not json"));
        let result = store.load();
        assert!(matches!(result, Err(TodoError::Serialization(_))));
    }

    #[test]
    fn unreadable_slot_falls_back_to_seed() {
        let backend = MemBackend::with_slot(DEFAULT_SLOT_KEY, "{}");
        backend.set_simulate_read_error(true);
        let store = SlotStore::new(backend);
        let doc = store.load().unwrap();
        assert_eq!(doc.lists.len(), 2);
    }

    #[test]
    fn write_failure_is_reported() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let store = SlotStore::new(backend);
        let result = store.save(&sample_doc());
        assert!(matches!(result, Err(TodoError::Storage(_))));
    }

    #[test]
    fn persisted_value_uses_wire_names() {
        let store = SlotStore::new(MemBackend::new());
        store.save(&sample_doc()).unwrap();
        let raw = store.backend().raw(DEFAULT_SLOT_KEY).unwrap();
        assert!(raw.contains("\"selectedListId\":\"l2\""));
        assert!(raw.contains("\"createdAt\":1714550000000"));
    }
}

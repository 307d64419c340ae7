//! # Snapshots
//!
//! Export and import of the whole document as human-readable JSON. The export
//! shape is exactly the persisted one, so an exported file imports back
//! id-for-id and order-for-order.
//!
//! Import is all-or-nothing: the text is parsed and validated into a complete
//! [`Document`] before anything is replaced. Validation covers:
//! - the value is an object with a `lists` array
//! - every list and task has the expected fields and types
//! - list ids are unique, and task ids are unique within their list
//!
//! A missing or dangling `selectedListId` is repaired to the first list rather
//! than rejected.

use crate::error::{Result, TodoError};
use crate::model::Document;
use crate::state::{Outcome, TodoStore};
use crate::store::backend::StorageBackend;
use log::info;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE: &str = "todo-export.json";

/// Pretty-printed JSON of the document, suitable for saving to a file.
pub fn export_snapshot(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).map_err(TodoError::Serialization)
}

/// Parses and validates snapshot text into a document ready to install.
pub fn import_snapshot(text: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| TodoError::InvalidSnapshot(format!("not valid JSON: {}", e)))?;

    let Some(object) = value.as_object() else {
        return Err(TodoError::InvalidSnapshot(
            "expected a JSON object at the top level".to_string(),
        ));
    };
    if !object.get("lists").is_some_and(Value::is_array) {
        return Err(TodoError::InvalidSnapshot(
            "missing `lists` array".to_string(),
        ));
    }

    let mut doc: Document = serde_json::from_value(value)
        .map_err(|e| TodoError::InvalidSnapshot(format!("malformed list or task: {}", e)))?;

    check_unique_ids(&doc)?;
    repair_selection(&mut doc);
    Ok(doc)
}

pub fn export_to_file(doc: &Document, path: &Path) -> Result<()> {
    let text = export_snapshot(doc)?;
    fs::write(path, text).map_err(TodoError::Io)?;
    info!("exported {} lists to {}", doc.lists.len(), path.display());
    Ok(())
}

pub fn import_from_file(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(TodoError::Io)?;
    import_snapshot(&text)
}

fn check_unique_ids(doc: &Document) -> Result<()> {
    let mut list_ids = HashSet::new();
    for list in &doc.lists {
        if !list_ids.insert(list.id.as_str()) {
            return Err(TodoError::InvalidSnapshot(format!(
                "duplicate list id: {}",
                list.id
            )));
        }
        let mut task_ids = HashSet::new();
        for task in &list.tasks {
            if !task_ids.insert(task.id.as_str()) {
                return Err(TodoError::InvalidSnapshot(format!(
                    "duplicate task id {} in list {}",
                    task.id, list.name
                )));
            }
        }
    }
    Ok(())
}

fn repair_selection(doc: &mut Document) {
    let dangling = match doc.selected_list_id.as_deref() {
        Some(id) => doc.list(id).is_none(),
        None => true,
    };
    if dangling {
        doc.selected_list_id = doc.lists.first().map(|l| l.id.clone());
    }
}

impl<B: StorageBackend> TodoStore<B> {
    pub fn export_snapshot(&self) -> Result<String> {
        export_snapshot(self.document())
    }

    /// Replaces the whole document with the one in `text`. On any rejection the
    /// current document is left exactly as it was.
    pub fn import_snapshot(&mut self, text: &str) -> Result<Outcome> {
        let doc = import_snapshot(text)?;
        let lists = doc.lists.len();
        let outcome = self.replace_document(doc)?;
        info!("imported snapshot with {} lists", lists);
        Ok(outcome)
    }
}

//! # State Store
//!
//! [`TodoStore`] owns the in-memory [`Document`] and is the only thing allowed to
//! mutate it. Every operation is synchronous and runs to completion.
//!
//! ## Outcomes
//!
//! Mutators return `Result<Outcome>`:
//! - `Ok(Outcome::Applied)`: the document changed and the slot was rewritten.
//!   This is the caller's cue to re-render.
//! - `Ok(Outcome::Ignored)`: a precondition did not hold (empty name, unknown id,
//!   move past either end). Nothing changed and nothing was written.
//! - `Err(_)`: the slot write failed. The document is rolled back to what it was
//!   before the call, so memory never runs ahead of storage.
//!
//! Task operations act on the *selected* list only.

use crate::error::Result;
use crate::model::{new_id, normalize_due, Direction, Document, Task, TodoList};
use crate::store::backend::StorageBackend;
use crate::store::slot::SlotStore;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

pub struct TodoStore<B: StorageBackend> {
    doc: Document,
    slot: SlotStore<B>,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Loads the document from `slot` (seeding it on first run).
    pub fn open(slot: SlotStore<B>) -> Result<Self> {
        let doc = slot.load()?;
        Ok(Self { doc, slot })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn lists(&self) -> &[TodoList] {
        &self.doc.lists
    }

    pub fn selected_list(&self) -> Option<&TodoList> {
        self.doc.selected()
    }

    pub fn find_list(&self, id: &str) -> Option<&TodoList> {
        self.doc.list(id)
    }

    /// Looks a task up within the selected list.
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.doc.selected().and_then(|l| l.task(task_id))
    }

    pub fn slot(&self) -> &SlotStore<B> {
        &self.slot
    }

    pub fn create_list(&mut self, name: &str) -> Result<Outcome> {
        if name.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.mutate(|doc| {
            let id = new_id(|candidate| doc.list(candidate).is_some());
            doc.lists.push(TodoList::new(id.clone(), name.to_string()));
            doc.selected_list_id = Some(id);
            true
        })
    }

    /// Selects an existing list. Unknown ids are ignored rather than stored, so
    /// the selection always points at a real list.
    pub fn select_list(&mut self, id: &str) -> Result<Outcome> {
        self.mutate(|doc| {
            if doc.list(id).is_none() {
                return false;
            }
            doc.selected_list_id = Some(id.to_string());
            true
        })
    }

    pub fn rename_list(&mut self, id: &str, new_name: &str) -> Result<Outcome> {
        if new_name.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.mutate(|doc| match doc.list_mut(id) {
            Some(list) => {
                list.name = new_name.to_string();
                true
            }
            None => false,
        })
    }

    /// Removes a list and all of its tasks. The caller is responsible for asking
    /// the user first.
    pub fn delete_list(&mut self, id: &str) -> Result<Outcome> {
        self.mutate(|doc| {
            let Some(idx) = doc.lists.iter().position(|l| l.id == id) else {
                return false;
            };
            doc.lists.remove(idx);
            doc.selected_list_id = doc.lists.first().map(|l| l.id.clone());
            true
        })
    }

    pub fn add_task(&mut self, title: &str, desc: &str, due: Option<&str>) -> Result<Outcome> {
        if title.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.mutate(|doc| {
            let Some(list) = doc.selected_mut() else {
                return false;
            };
            let id = new_id(|candidate| list.task(candidate).is_some());
            list.tasks.push(Task::new(
                id,
                title.to_string(),
                desc.to_string(),
                due.map(str::to_string),
            ));
            true
        })
    }

    pub fn toggle_complete(&mut self, task_id: &str) -> Result<Outcome> {
        self.mutate(|doc| match selected_task_mut(doc, task_id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        })
    }

    /// Overwrites title, description and due date. `id` and `created_at` are
    /// never touched. An empty title is ignored.
    pub fn edit_task(
        &mut self,
        task_id: &str,
        title: &str,
        desc: &str,
        due: Option<&str>,
    ) -> Result<Outcome> {
        if title.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.mutate(|doc| match selected_task_mut(doc, task_id) {
            Some(task) => {
                task.title = title.to_string();
                task.desc = desc.to_string();
                task.due = normalize_due(due.map(str::to_string));
                true
            }
            None => false,
        })
    }

    pub fn delete_task(&mut self, task_id: &str) -> Result<Outcome> {
        self.mutate(|doc| {
            let Some(list) = doc.selected_mut() else {
                return false;
            };
            match list.task_position(task_id) {
                Some(idx) => {
                    list.tasks.remove(idx);
                    true
                }
                None => false,
            }
        })
    }

    /// Swaps a task with its neighbour. Moving the first task up or the last
    /// task down is ignored.
    pub fn move_task(&mut self, task_id: &str, direction: Direction) -> Result<Outcome> {
        self.mutate(|doc| {
            let Some(list) = doc.selected_mut() else {
                return false;
            };
            let Some(idx) = list.task_position(task_id) else {
                return false;
            };
            let Some(target) = idx.checked_add_signed(direction.offset()) else {
                return false;
            };
            if target >= list.tasks.len() {
                return false;
            }
            list.tasks.swap(idx, target);
            true
        })
    }

    /// Installs a whole document, e.g. one accepted by
    /// [`crate::snapshot::import_snapshot`].
    pub fn replace_document(&mut self, doc: Document) -> Result<Outcome> {
        self.mutate(move |current| {
            *current = doc;
            true
        })
    }

    /// Runs `change` against the document and persists it if it reports a
    /// change. On a failed write the previous document is restored.
    fn mutate<F>(&mut self, change: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Document) -> bool,
    {
        let before = self.doc.clone();
        if !change(&mut self.doc) {
            return Ok(Outcome::Ignored);
        }
        if let Err(e) = self.slot.save(&self.doc) {
            self.doc = before;
            return Err(e);
        }
        debug!("document updated ({} lists)", self.doc.lists.len());
        Ok(Outcome::Applied)
    }
}

fn selected_task_mut<'a>(doc: &'a mut Document, task_id: &str) -> Option<&'a mut Task> {
    doc.selected_mut()?
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id)
}

//! # Data Model
//!
//! The whole application state is one [`Document`]: an ordered sequence of
//! [`TodoList`]s plus the id of the selected one. Every list owns an ordered
//! sequence of [`Task`]s.
//!
//! Field names on the wire are fixed (`selectedListId`, `createdAt`, ...) so that
//! snapshots written by other clients of the same format load unchanged.
//!
//! ## Ordering
//!
//! Both `lists` and `tasks` are *user-meaningful* orders. Sorting for display is
//! a projection (see [`crate::view`]) and never writes back here.
//!
//! ## Identifiers
//!
//! Ids are random v4 UUIDs rendered as strings. [`new_id`] re-draws on the
//! (astronomically unlikely) collision with an id already in scope, so ids minted
//! by this crate are unique within their scope without exception.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    pub fn new(id: String, title: String, desc: String, due: Option<String>) -> Self {
        Self {
            id,
            title,
            desc,
            due: normalize_due(due),
            completed: false,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TodoList {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn task_position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub lists: Vec<TodoList>,
    #[serde(rename = "selectedListId", default)]
    pub selected_list_id: Option<String>,
}

impl Document {
    pub fn empty() -> Self {
        Self {
            lists: Vec::new(),
            selected_list_id: None,
        }
    }

    /// First-run document: one empty list per name, the first one selected.
    pub fn seeded<S: AsRef<str>>(names: &[S]) -> Self {
        let mut doc = Self::empty();
        for name in names {
            let id = new_id(|candidate| doc.list(candidate).is_some());
            doc.lists.push(TodoList::new(id, name.as_ref().to_string()));
        }
        doc.selected_list_id = doc.lists.first().map(|l| l.id.clone());
        doc
    }

    pub fn list(&self, id: &str) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn list_mut(&mut self, id: &str) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    pub fn selected(&self) -> Option<&TodoList> {
        self.selected_list_id.as_deref().and_then(|id| self.list(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut TodoList> {
        let id = self.selected_list_id.clone()?;
        self.list_mut(&id)
    }
}

/// Direction of a manual reorder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Mints a fresh id, re-drawing while `taken` reports a collision.
pub fn new_id<F: Fn(&str) -> bool>(taken: F) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}

/// Empty or blank due values mean "no due date".
pub fn normalize_due(due: Option<String>) -> Option<String> {
    due.filter(|d| !d.trim().is_empty())
}

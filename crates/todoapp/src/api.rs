//! # API Facade
//!
//! The API layer is a **thin facade** over the [`TodoStore`]. It serves as the
//! single entry point for UI clients, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs**: trims text, maps an empty due value to none, and
//!   resolves user-facing positions (`2`, or a list name) to stable ids
//! - **Dispatches** to the store, snapshot and view functions
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs to the store
//! - **I/O for presentation**: no stdout or stderr, no confirmation prompts
//!
//! ## Positions
//!
//! Lists are addressed by their 1-based position in the sidebar order, or by
//! name (case-insensitive). Tasks are addressed by their 1-based position in
//! the *displayed* order of the selected list, which depends on the facade's
//! [`SortOrder`]. Positions are resolved to ids before calling the store, so a
//! sorted view never reorders stored tasks.
//!
//! A position that matches nothing is reported as a warning message, never as
//! an error: it is the same silent no-op the store applies to unknown ids.

use crate::error::Result;
use crate::model::{Direction, Task};
use crate::snapshot;
use crate::state::{Outcome, TodoStore};
use crate::store::backend::StorageBackend;
use crate::view::{self, SortOrder, TaskCounts};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A list as shown in a sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub selected: bool,
    pub counts: TaskCounts,
}

/// A task paired with its display position.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayTask {
    pub index: usize,
    pub task: Task,
    pub overdue: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_lists: Vec<ListSummary>,
    pub listed_tasks: Vec<DisplayTask>,
    /// Name of the selected list, when the result shows its tasks.
    pub current_list: Option<String>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }
}

/// Changes to apply to a task. `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub due: DueEdit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DueEdit {
    #[default]
    Keep,
    Clear,
    Set(String),
}

pub struct TodoApi<B: StorageBackend> {
    store: TodoStore<B>,
    sort: SortOrder,
}

impl<B: StorageBackend> TodoApi<B> {
    pub fn new(store: TodoStore<B>) -> Self {
        Self {
            store,
            sort: SortOrder::Manual,
        }
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    pub fn lists(&self) -> CmdResult {
        let now = Utc::now();
        let selected = self.store.document().selected_list_id.as_deref();
        let listed_lists = self
            .store
            .lists()
            .iter()
            .enumerate()
            .map(|(i, list)| ListSummary {
                index: i + 1,
                id: list.id.clone(),
                name: list.name.clone(),
                selected: selected == Some(list.id.as_str()),
                counts: view::counts(list, now),
            })
            .collect();
        CmdResult {
            listed_lists,
            ..Default::default()
        }
    }

    /// Tasks of the selected list in the facade's sort order.
    pub fn show(&self) -> CmdResult {
        let Some(list) = self.store.selected_list() else {
            return CmdResult::default()
                .with_message(CmdMessage::info("No list selected. Create one first."));
        };
        let now = Utc::now();
        let listed_tasks = view::sorted_tasks(list, self.sort)
            .into_iter()
            .enumerate()
            .map(|(i, task)| DisplayTask {
                index: i + 1,
                task: task.clone(),
                overdue: view::is_overdue(task, now),
            })
            .collect();
        CmdResult {
            listed_tasks,
            current_list: Some(list.name.clone()),
            ..Default::default()
        }
    }

    pub fn create_list(&mut self, name: &str) -> Result<CmdResult> {
        let name = name.trim();
        let outcome = self.store.create_list(name)?;
        Ok(report(
            outcome,
            format!("List created: {}", name),
            "List name cannot be empty.",
        ))
    }

    pub fn select_list(&mut self, selector: &str) -> Result<CmdResult> {
        let Some((id, name)) = self.resolve_list(selector) else {
            return Ok(no_such_list(selector));
        };
        let outcome = self.store.select_list(&id)?;
        Ok(report(
            outcome,
            format!("Switched to {}", name),
            "List not found.",
        ))
    }

    pub fn rename_list(&mut self, selector: &str, new_name: &str) -> Result<CmdResult> {
        let Some((id, old_name)) = self.resolve_list(selector) else {
            return Ok(no_such_list(selector));
        };
        let new_name = new_name.trim();
        let outcome = self.store.rename_list(&id, new_name)?;
        Ok(report(
            outcome,
            format!("List renamed: {} -> {}", old_name, new_name),
            "List name cannot be empty.",
        ))
    }

    /// Deletes a list and all of its tasks. Asking the user is the caller's job.
    pub fn delete_list(&mut self, selector: &str) -> Result<CmdResult> {
        let Some((id, name)) = self.resolve_list(selector) else {
            return Ok(no_such_list(selector));
        };
        let outcome = self.store.delete_list(&id)?;
        Ok(report(
            outcome,
            format!("List deleted: {}", name),
            "List not found.",
        ))
    }

    pub fn add_task(&mut self, title: &str, desc: &str, due: Option<&str>) -> Result<CmdResult> {
        if self.store.selected_list().is_none() {
            return Ok(CmdResult::default()
                .with_message(CmdMessage::warning("No list selected. Create one first.")));
        }
        let title = title.trim();
        let due = due.map(str::trim).filter(|d| !d.is_empty());
        let outcome = self.store.add_task(title, desc.trim(), due)?;
        Ok(report(
            outcome,
            format!("Task added: {}", title),
            "Task title cannot be empty.",
        ))
    }

    pub fn toggle_task(&mut self, index: usize) -> Result<CmdResult> {
        let Some(task) = self.task_at(index) else {
            return Ok(no_such_task(index));
        };
        let outcome = self.store.toggle_complete(&task.id)?;
        let verb = if task.completed { "Reopened" } else { "Completed" };
        Ok(report(
            outcome,
            format!("{}: {}", verb, task.title),
            "Task not found.",
        ))
    }

    pub fn edit_task(&mut self, index: usize, edit: TaskEdit) -> Result<CmdResult> {
        let Some(task) = self.task_at(index) else {
            return Ok(no_such_task(index));
        };
        let title = edit
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or(&task.title)
            .to_string();
        let desc = edit
            .desc
            .as_deref()
            .map(str::trim)
            .unwrap_or(&task.desc)
            .to_string();
        let due = match &edit.due {
            DueEdit::Keep => task.due.clone(),
            DueEdit::Clear => None,
            DueEdit::Set(value) => Some(value.trim().to_string()),
        };
        let outcome = self
            .store
            .edit_task(&task.id, &title, &desc, due.as_deref())?;
        Ok(report(
            outcome,
            format!("Task updated: {}", title),
            "Task title cannot be empty.",
        ))
    }

    pub fn delete_task(&mut self, index: usize) -> Result<CmdResult> {
        let Some(task) = self.task_at(index) else {
            return Ok(no_such_task(index));
        };
        let outcome = self.store.delete_task(&task.id)?;
        Ok(report(
            outcome,
            format!("Task deleted: {}", task.title),
            "Task not found.",
        ))
    }

    /// Moves a task one step in the stored (manual) order.
    pub fn move_task(&mut self, index: usize, direction: Direction) -> Result<CmdResult> {
        let Some(task) = self.task_at(index) else {
            return Ok(no_such_task(index));
        };
        let outcome = self.store.move_task(&task.id, direction)?;
        let edge = match direction {
            Direction::Up => "first",
            Direction::Down => "last",
        };
        let mut result = report(
            outcome,
            format!("Moved: {}", task.title),
            format!("{} is already {}.", task.title, edge),
        );
        if outcome.is_applied() && self.sort != SortOrder::Manual {
            result.add_message(CmdMessage::info(format!(
                "Manual order changed; the {} view is unaffected.",
                self.sort
            )));
        }
        Ok(result)
    }

    pub fn export(&self, path: &Path) -> Result<CmdResult> {
        snapshot::export_to_file(self.store.document(), path)?;
        let mut result = CmdResult::default();
        result.paths.push(path.to_path_buf());
        result.add_message(CmdMessage::success(format!(
            "Exported to {}",
            path.display()
        )));
        Ok(result)
    }

    /// Replaces everything with the snapshot at `path`. A rejected file leaves
    /// the current data untouched and is returned as an error.
    pub fn import(&mut self, path: &Path) -> Result<CmdResult> {
        let text = fs::read_to_string(path)?;
        self.store.import_snapshot(&text)?;
        let lists = self.store.lists().len();
        let tasks: usize = self.store.lists().iter().map(|l| l.tasks.len()).sum();
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Imported {} lists, {} tasks",
            lists, tasks
        ))))
    }

    /// Location of the slot holding the data.
    pub fn data_path(&self) -> CmdResult {
        CmdResult {
            paths: vec![self.store.slot().location()],
            ..Default::default()
        }
    }

    fn resolve_list(&self, selector: &str) -> Option<(String, String)> {
        let lists = self.store.lists();
        let selector = selector.trim();
        // A number is a position first; a list named "2025" is still reachable by name.
        let by_position = selector
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| lists.get(i));
        let found = by_position.or_else(|| {
            lists
                .iter()
                .find(|l| l.name.eq_ignore_ascii_case(selector))
        });
        found.map(|l| (l.id.clone(), l.name.clone()))
    }

    fn task_at(&self, index: usize) -> Option<Task> {
        let list = self.store.selected_list()?;
        let tasks = view::sorted_tasks(list, self.sort);
        index
            .checked_sub(1)
            .and_then(|i| tasks.get(i))
            .map(|t| (*t).clone())
    }
}

fn report(outcome: Outcome, applied: String, ignored: impl Into<String>) -> CmdResult {
    let message = match outcome {
        Outcome::Applied => CmdMessage::success(applied),
        Outcome::Ignored => CmdMessage::warning(ignored),
    };
    CmdResult::default().with_message(message)
}

fn no_such_list(selector: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "No list matches '{}'.",
        selector
    )))
}

fn no_such_task(index: usize) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "No task at position {}.",
        index
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::slot::SlotStore;

    fn api() -> TodoApi<MemBackend> {
        TodoApi::new(TodoStore::open(SlotStore::new(MemBackend::new())).unwrap())
    }

    fn titles(result: &CmdResult) -> Vec<String> {
        result
            .listed_tasks
            .iter()
            .map(|dt| dt.task.title.clone())
            .collect()
    }

    fn last_level(result: &CmdResult) -> MessageLevel {
        result.messages.last().unwrap().level
    }

    #[test]
    fn lists_marks_selection() {
        let api = api();
        let result = api.lists();
        assert_eq!(result.listed_lists.len(), 2);
        assert!(result.listed_lists[0].selected);
        assert!(!result.listed_lists[1].selected);
        assert_eq!(result.listed_lists[1].index, 2);
    }

    #[test]
    fn select_by_position_or_name() {
        let mut api = api();
        api.select_list("2").unwrap();
        assert_eq!(api.show().current_list.as_deref(), Some("Work"));

        api.select_list("personal").unwrap();
        assert_eq!(api.show().current_list.as_deref(), Some("Personal"));
    }

    #[test]
    fn unknown_list_is_a_warning() {
        let mut api = api();
        let result = api.select_list("9").unwrap();
        assert_eq!(last_level(&result), MessageLevel::Warning);
        let result = api.delete_list("Nope").unwrap();
        assert_eq!(last_level(&result), MessageLevel::Warning);
        assert_eq!(api.lists().listed_lists.len(), 2);
    }

    #[test]
    fn create_list_trims_and_rejects_blank() {
        let mut api = api();
        let result = api.create_list("   ").unwrap();
        assert_eq!(last_level(&result), MessageLevel::Warning);

        api.create_list("  Errands ").unwrap();
        assert_eq!(api.show().current_list.as_deref(), Some("Errands"));
    }

    #[test]
    fn rename_and_delete_list() {
        let mut api = api();
        api.rename_list("Work", "Office").unwrap();
        assert_eq!(api.lists().listed_lists[1].name, "Office");

        api.delete_list("1").unwrap();
        let lists = api.lists().listed_lists;
        assert_eq!(lists.len(), 1);
        assert!(lists[0].selected);
    }

    #[test]
    fn add_and_show_tasks() {
        let mut api = api();
        api.add_task(" Buy milk ", "", Some("")).unwrap();
        api.add_task("Call mom", "Sunday", None).unwrap();

        let shown = api.show();
        assert_eq!(titles(&shown), vec!["Buy milk", "Call mom"]);
        assert_eq!(shown.listed_tasks[0].task.due, None);
        assert_eq!(shown.listed_tasks[1].index, 2);
    }

    #[test]
    fn add_task_without_selection_warns() {
        let mut api = api();
        api.delete_list("1").unwrap();
        api.delete_list("1").unwrap();
        let result = api.add_task("Orphan", "", None).unwrap();
        assert_eq!(last_level(&result), MessageLevel::Warning);
    }

    #[test]
    fn positions_follow_sort_order() {
        let store = TodoStore::open(SlotStore::new(MemBackend::new())).unwrap();
        let mut api = TodoApi::new(store).with_sort(SortOrder::Due);
        api.add_task("later", "", Some("2030-02-01T00:00")).unwrap();
        api.add_task("sooner", "", Some("2030-01-01T00:00")).unwrap();

        assert_eq!(titles(&api.show()), vec!["sooner", "later"]);

        api.toggle_task(1).unwrap();
        let shown = api.show();
        assert!(shown.listed_tasks[0].task.completed);
        assert_eq!(shown.listed_tasks[0].task.title, "sooner");

        let list = api.store().selected_list().unwrap();
        let stored: Vec<&str> = list.tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(stored, vec!["later", "sooner"]);
    }

    #[test]
    fn toggle_reports_direction() {
        let mut api = api();
        api.add_task("a", "", None).unwrap();
        let done = api.toggle_task(1).unwrap();
        assert!(done.messages[0].content.starts_with("Completed"));
        let reopened = api.toggle_task(1).unwrap();
        assert!(reopened.messages[0].content.starts_with("Reopened"));
    }

    #[test]
    fn edit_keeps_unspecified_fields() {
        let mut api = api();
        api.add_task("a", "details", Some("2030-01-01T10:00")).unwrap();

        api.edit_task(
            1,
            TaskEdit {
                title: Some("b".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let task = &api.show().listed_tasks[0].task;
        assert_eq!(task.title, "b");
        assert_eq!(task.desc, "details");
        assert_eq!(task.due.as_deref(), Some("2030-01-01T10:00"));

        api.edit_task(
            1,
            TaskEdit {
                due: DueEdit::Clear,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(api.show().listed_tasks[0].task.due, None);
    }

    #[test]
    fn unknown_task_position_is_a_warning() {
        let mut api = api();
        for result in [
            api.toggle_task(1).unwrap(),
            api.delete_task(0).unwrap(),
            api.move_task(3, Direction::Up).unwrap(),
        ] {
            assert_eq!(last_level(&result), MessageLevel::Warning);
        }
    }

    #[test]
    fn move_and_delete_by_position() {
        let mut api = api();
        for title in ["a", "b", "c"] {
            api.add_task(title, "", None).unwrap();
        }
        api.move_task(3, Direction::Up).unwrap();
        assert_eq!(titles(&api.show()), vec!["a", "c", "b"]);

        let edge = api.move_task(1, Direction::Up).unwrap();
        assert_eq!(last_level(&edge), MessageLevel::Warning);

        api.delete_task(2).unwrap();
        assert_eq!(titles(&api.show()), vec!["a", "b"]);
    }

    #[test]
    fn numeric_list_name_is_reachable_by_name() {
        let mut api = api();
        api.create_list("2025").unwrap();
        api.select_list("1").unwrap();

        let result = api.select_list("2025").unwrap();
        assert_eq!(last_level(&result), MessageLevel::Success);
        assert_eq!(api.show().current_list.as_deref(), Some("2025"));

        // In-range numbers still mean positions
        api.select_list("2").unwrap();
        assert_eq!(api.show().current_list.as_deref(), Some("Work"));

        api.rename_list("2025", "Archive").unwrap();
        assert_eq!(api.lists().listed_lists[2].name, "Archive");
    }

    #[test]
    fn import_replaces_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");

        let mut source = api();
        source.add_task("Carry over", "", None).unwrap();
        source.export(&path).unwrap();

        let mut target = api();
        target.delete_list("1").unwrap();
        let result = target.import(&path).unwrap();

        assert_eq!(result.messages[0].content, "Imported 2 lists, 1 tasks");
        assert_eq!(titles(&target.show()), vec!["Carry over"]);
        assert_eq!(target.store().document(), source.store().document());
    }

    #[test]
    fn rejected_import_keeps_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"foo": 1}"#).unwrap();

        let mut api = api();
        api.add_task("Keep me", "", None).unwrap();
        let before = api.store().document().clone();

        let result = api.import(&path);
        assert!(matches!(result, Err(crate::error::TodoError::InvalidSnapshot(_))));
        assert_eq!(api.store().document(), &before);
    }

    #[test]
    fn data_path_points_at_slot() {
        let api = api();
        let result = api.data_path();
        assert_eq!(result.paths, vec![PathBuf::from("memory://simple_todo_v1")]);
    }
}

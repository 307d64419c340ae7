//! Read-only projections for view layers: display sorting, overdue detection and
//! due-date formatting. Nothing here mutates the document.

use crate::model::{Task, TodoList};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// The stored, user-arranged order.
    #[default]
    Manual,
    Due,
    Created,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Manual => write!(f, "manual"),
            SortOrder::Due => write!(f, "due"),
            SortOrder::Created => write!(f, "created"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manual" => Ok(SortOrder::Manual),
            "due" => Ok(SortOrder::Due),
            "created" => Ok(SortOrder::Created),
            other => Err(format!(
                "unknown sort order '{}' (expected manual, due or created)",
                other
            )),
        }
    }
}

/// The list's tasks in display order.
///
/// `Due` compares the raw due strings, a missing due date counting as the empty
/// string, so undated tasks come first. Both sorts are stable: ties keep their
/// manual order.
pub fn sorted_tasks(list: &TodoList, order: SortOrder) -> Vec<&Task> {
    let mut tasks: Vec<&Task> = list.tasks.iter().collect();
    match order {
        SortOrder::Manual => {}
        SortOrder::Due => tasks.sort_by(|a, b| {
            a.due
                .as_deref()
                .unwrap_or("")
                .cmp(b.due.as_deref().unwrap_or(""))
        }),
        SortOrder::Created => tasks.sort_by_key(|t| t.created_at),
    }
    tasks
}

/// Interprets a stored due value.
///
/// Accepts RFC 3339 timestamps, local `YYYY-MM-DDTHH:MM[:SS]` values (the
/// shape date-time inputs produce) and bare dates, which count as UTC midnight.
pub fn parse_due(due: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(due) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(due, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }
    NaiveDate::parse_from_str(due, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    if task.completed {
        return false;
    }
    task.due
        .as_deref()
        .and_then(parse_due)
        .is_some_and(|due| due < now)
}

/// Due value for display in local time. Unparseable values are shown as stored.
pub fn format_due(due: &str) -> String {
    match parse_due(due) {
        Some(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => due.to_string(),
    }
}

/// `YYYY-MM-DDTHH:MM` in local time, the value an edit form is prefilled with.
pub fn to_datetime_local(due: Option<&str>) -> String {
    due.and_then(parse_due)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
}

pub fn counts(list: &TodoList, now: DateTime<Utc>) -> TaskCounts {
    list.tasks.iter().fold(TaskCounts::default(), |mut acc, task| {
        acc.total += 1;
        if task.completed {
            acc.completed += 1;
        }
        if is_overdue(task, now) {
            acc.overdue += 1;
        }
        acc
    })
}

use chrono::{DateTime, Utc};
use colored::Colorize;
use todoapp::api::{CmdMessage, CmdResult, DisplayTask, ListSummary, MessageLevel};
use todoapp::view::format_due;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const SELECTED_MARKER: &str = "▸";
const DONE_MARKER: &str = "✓";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_lists(lists: &[ListSummary]) {
    if lists.is_empty() {
        println!("No lists yet. Create one with `todo list new <name>`.");
        return;
    }

    for list in lists {
        let marker = if list.selected { SELECTED_MARKER } else { " " };
        let counts = format!(
            "{} tasks, {} done",
            list.counts.total, list.counts.completed
        );
        let name = if list.selected {
            list.name.bold().to_string()
        } else {
            list.name.clone()
        };
        let mut line = format!("{} {}. {}  {}", marker, list.index, name, counts.dimmed());
        if list.counts.overdue > 0 {
            line.push_str(&format!("  {}", format!("{} overdue", list.counts.overdue).red()));
        }
        println!("{}", line);
    }
}

pub(super) fn print_tasks(result: &CmdResult) {
    if let Some(name) = &result.current_list {
        println!("{}", name.bold().underline());
    }
    if result.current_list.is_some() && result.listed_tasks.is_empty() {
        println!("{}", "No tasks. Add one with `todo add <title>`.".dimmed());
    }

    let now = Utc::now();
    for dt in &result.listed_tasks {
        println!("{}", task_line(dt, now));
        if !dt.task.desc.is_empty() {
            println!("      {}", dt.task.desc.dimmed());
        }
        if let Some(due) = &dt.task.due {
            let text = format!("due {}", format_due(due));
            if dt.overdue {
                println!("      {}", format!("{} (overdue)", text).red());
            } else {
                println!("      {}", text.cyan());
            }
        }
    }
}

pub(super) fn print_paths(result: &CmdResult) {
    for path in &result.paths {
        println!("{}", path.display());
    }
}

fn task_line(dt: &DisplayTask, now: DateTime<Utc>) -> String {
    let idx = format!("{:>3}. ", dt.index);
    let check = if dt.task.completed {
        format!("[{}] ", DONE_MARKER)
    } else {
        "[ ] ".to_string()
    };
    let added = format_time_ago(dt.task.created_at, now);

    let prefix_width = idx.width() + check.width();
    let title_room = LINE_WIDTH.saturating_sub(prefix_width + TIME_WIDTH + 1);
    let title = truncate_to_width(&dt.task.title, title_room);
    let padding = title_room.saturating_sub(title.width()) + 1;

    let title = if dt.task.completed {
        title.dimmed().strikethrough().to_string()
    } else if dt.overdue {
        title.red().to_string()
    } else {
        title
    };

    format!(
        "{}{}{}{}{:>width$}",
        idx.yellow(),
        check,
        title,
        " ".repeat(padding),
        added.dimmed(),
        width = TIME_WIDTH
    )
}

fn format_time_ago(created_at_ms: i64, now: DateTime<Utc>) -> String {
    let Some(created) = DateTime::<Utc>::from_timestamp_millis(created_at_ms) else {
        return String::new();
    };
    let elapsed = now.signed_duration_since(created).to_std().unwrap_or_default();
    Formatter::new().convert(elapsed)
}

fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

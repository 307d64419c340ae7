use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use todoapp::view::SortOrder;

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    bin_name = "todo",
    version,
    disable_help_subcommand = true,
    about = "Named task lists in your terminal",
    long_about = None,
    after_help = "Tasks are addressed by their position in `todo show` (1, 2, ...).\nLists are addressed by position in `todo lists` or by name."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Task order used for display and for task positions
    #[arg(short, long, global = true, value_enum, help_heading = "Options")]
    pub sort: Option<SortArg>,

    /// Directory holding the data file (overrides configuration)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Manual,
    Due,
    Created,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Manual => SortOrder::Manual,
            SortArg::Due => SortOrder::Due,
            SortArg::Created => SortOrder::Created,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the tasks of the selected list (default)
    #[command(alias = "ls", display_order = 1)]
    Show,

    /// Add a task to the selected list
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Task title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Longer description
        #[arg(short, long, default_value = "")]
        desc: String,

        /// Due date, e.g. 2024-05-01T09:30 or an RFC 3339 timestamp
        #[arg(long)]
        due: Option<String>,
    },

    /// Toggle completion of a task
    #[command(alias = "x", display_order = 3)]
    Done {
        /// Position of the task
        index: usize,
    },

    /// Edit a task's title, description or due date
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position of the task
        index: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        desc: Option<String>,

        /// New due date
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Delete a task
    #[command(alias = "delete", display_order = 5)]
    Rm {
        /// Position of the task
        index: usize,
    },

    /// Move a task up in the manual order
    #[command(display_order = 6)]
    Up {
        /// Position of the task
        index: usize,
    },

    /// Move a task down in the manual order
    #[command(display_order = 7)]
    Down {
        /// Position of the task
        index: usize,
    },

    /// Show all lists
    #[command(display_order = 10)]
    Lists,

    /// Create, select, rename or delete lists
    #[command(display_order = 11)]
    List {
        #[command(subcommand)]
        action: ListCommands,
    },

    /// Write all lists and tasks to a JSON file
    #[command(display_order = 20)]
    Export {
        /// Target file (defaults to the configured export file)
        path: Option<PathBuf>,
    },

    /// Replace all lists and tasks with a JSON export
    #[command(display_order = 21)]
    Import {
        /// File produced by `todo export`
        path: PathBuf,
    },

    /// Print the path of the data file
    #[command(display_order = 30)]
    Path,

    /// Print a shell completion script
    #[command(display_order = 31)]
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Create a list and select it
    #[command(alias = "create")]
    New {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Make a list the current one
    #[command(alias = "use")]
    Select {
        /// Position or name of the list
        list: String,
    },

    /// Rename a list
    Rename {
        /// Position or name of the list
        list: String,

        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Delete a list and all of its tasks
    #[command(alias = "rm")]
    Delete {
        /// Position or name of the list
        list: String,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn build_command() -> clap::Command {
    Cli::command()
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

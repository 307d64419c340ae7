//! # CLI Behavior
//!
//! This is **one possible UI client** for todoapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`todo`)
//!
//! Running `todo` with no arguments defaults to `todo show`: the tasks of the
//! selected list.
//!
//! ### Positions
//!
//! Tasks are addressed by the number printed next to them in `todo show`.
//! Because that number follows the active sort (`--sort due`), pass the same
//! `--sort` to a mutating command as to the `show` you read the number from.
//!
//! ### Destructive Commands
//!
//! `todo list delete` removes a list with every task in it and therefore
//! requires `--yes`.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers that call the API
//! - `render`: Output formatting (colors, alignment, messages)
//! - `setup`: Argument parsing via clap, help text

mod commands;
mod render;
pub mod setup;

pub use commands::run;

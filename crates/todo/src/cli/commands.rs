//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Load configuration, open the store, build the API
//! 3. **Dispatch**: Route commands to the API facade
//! 4. **Output Formatting**: Hand results to `render`

use super::render::{print_lists, print_messages, print_paths, print_tasks};
use super::setup::{build_command, parse_cli, Cli, Commands, ListCommands};
use anyhow::Context;
use log::debug;
use std::io;
use std::path::PathBuf;
use todoapp::api::{CmdMessage, CmdResult, DueEdit, TaskEdit, TodoApi};
use todoapp::config::{default_config_dir, TodoConfig};
use todoapp::model::Direction;
use todoapp::state::TodoStore;
use todoapp::store::fs_backend::FsBackend;
use todoapp::store::slot::SlotStore;

/// Overrides the config directory, mostly so tests never read the user's file.
const CONFIG_DIR_ENV: &str = "TODO_CONFIG_DIR";

struct AppContext {
    api: TodoApi<FsBackend>,
    config: TodoConfig,
}

pub fn run() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    // Completions don't need the store
    if let Some(Commands::Completions { shell }) = &cli.command {
        clap_complete::generate(*shell, &mut build_command(), "todo", &mut io::stdout());
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Show) => {
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Add { title, desc, due }) => {
            let result = ctx.api.add_task(&title.join(" "), &desc, due.as_deref())?;
            print_messages(&result.messages);
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Done { index }) => {
            let result = ctx.api.toggle_task(index)?;
            print_messages(&result.messages);
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Edit {
            index,
            title,
            desc,
            due,
            clear_due,
        }) => {
            let due = match (due, clear_due) {
                (_, true) => DueEdit::Clear,
                (Some(value), false) => DueEdit::Set(value),
                (None, false) => DueEdit::Keep,
            };
            let result = ctx.api.edit_task(index, TaskEdit { title, desc, due })?;
            print_messages(&result.messages);
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Rm { index }) => {
            let result = ctx.api.delete_task(index)?;
            print_messages(&result.messages);
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Up { index }) => {
            let result = ctx.api.move_task(index, Direction::Up)?;
            print_messages(&result.messages);
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Down { index }) => {
            let result = ctx.api.move_task(index, Direction::Down)?;
            print_messages(&result.messages);
            render_tasks(&ctx.api.show());
        }
        Some(Commands::Lists) => {
            print_lists(&ctx.api.lists().listed_lists);
        }
        Some(Commands::List { action }) => handle_list(&mut ctx, action)?,
        Some(Commands::Export { path }) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
            let result = ctx.api.export(&path)?;
            print_messages(&result.messages);
        }
        Some(Commands::Import { path }) => {
            let result = ctx
                .api
                .import(&path)
                .with_context(|| format!("could not import {}", path.display()))?;
            print_messages(&result.messages);
            print_lists(&ctx.api.lists().listed_lists);
        }
        Some(Commands::Path) => {
            print_paths(&ctx.api.data_path());
        }
        Some(Commands::Completions { .. }) => unreachable!("handled before context init"),
    }

    Ok(())
}

fn handle_list(ctx: &mut AppContext, action: ListCommands) -> anyhow::Result<()> {
    let result = match action {
        ListCommands::New { name } => ctx.api.create_list(&name.join(" "))?,
        ListCommands::Select { list } => ctx.api.select_list(&list)?,
        ListCommands::Rename { list, name } => ctx.api.rename_list(&list, &name.join(" "))?,
        ListCommands::Delete { list, yes } => {
            if !yes {
                print_messages(&[CmdMessage::warning(format!(
                    "Deleting '{}' removes all of its tasks. Re-run with --yes to confirm.",
                    list
                ))]);
                return Ok(());
            }
            ctx.api.delete_list(&list)?
        }
    };
    print_messages(&result.messages);
    print_lists(&ctx.api.lists().listed_lists);
    Ok(())
}

fn render_tasks(result: &CmdResult) {
    print_messages(&result.messages);
    print_tasks(result);
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn init_context(cli: &Cli) -> anyhow::Result<AppContext> {
    let config_dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(default_config_dir);
    let config =
        TodoConfig::load(config_dir.as_deref()).context("failed to load configuration")?;

    let sort = match cli.sort {
        Some(arg) => arg.into(),
        None => config.sort_order()?,
    };
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolve_data_dir()?,
    };
    debug!("data dir: {}, sort: {}", data_dir.display(), sort);

    let slot = SlotStore::new(FsBackend::new(data_dir))
        .with_key(&config.slot_key)
        .with_seed_lists(config.seed_lists.clone());
    let store = TodoStore::open(slot)?;

    Ok(AppContext {
        api: TodoApi::new(store).with_sort(sort),
        config,
    })
}

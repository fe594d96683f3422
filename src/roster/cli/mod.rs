//! # CLI Layer
//!
//! One possible UI client for roster. This is the only place that knows about
//! stdin/stdout, logging setup and exit codes.
//!
//! ## Naked Execution (`roster`)
//!
//! Running `roster` with no subcommand starts the interactive menu. The
//! subcommands (`add`, `list`, `view`, `update`, `delete`, `search`) run one
//! operation and exit, which makes them scriptable.
//!
//! ## Module Structure
//!
//! - `args`: Argument parsing via clap
//! - `handlers`: Per-command handlers that call the API and print results
//! - `menu`: The interactive loop
//! - `print`: Record and message formatting

mod args;
mod handlers;
mod menu;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use handlers::AppContext;
use roster::config::RosterPaths;
use roster::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = RosterPaths::resolve(cli.file.clone())?;
    log::debug!("Using data file {}", paths.data_file.display());

    // These never touch the record file
    match &cli.command {
        Some(Commands::Path) => return handlers::handle_path(&paths),
        Some(Commands::Config { key, value }) => {
            return handlers::handle_config(&paths, key.clone(), value.clone())
        }
        _ => {}
    }

    let mut ctx = AppContext::open(paths)?;

    match cli.command {
        Some(Commands::Add {
            name,
            age,
            major,
            gpa,
            email,
        }) => handlers::handle_add(&mut ctx, name, age, major, gpa, email),
        Some(Commands::List) => handlers::handle_list(&ctx),
        Some(Commands::View { id }) => handlers::handle_view(&ctx, &id),
        Some(Commands::Update {
            id,
            name,
            age,
            major,
            gpa,
            email,
        }) => handlers::handle_update(&mut ctx, &id, name, age, major, gpa, email),
        Some(Commands::Delete { id }) => handlers::handle_delete(&mut ctx, &id),
        Some(Commands::Search { query }) => handlers::handle_search(&ctx, &query),
        Some(Commands::Menu) | None => handlers::handle_menu(&mut ctx),
        Some(Commands::Path) | Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

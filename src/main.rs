use anyhow::Context;
use clap::Parser;

mod cli;
mod crypto;
mod db;
mod generator;
mod models;

use crate::cli::{handlers, menu, Args, CliCommand};
use crate::db::CredentialStore;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let store = CredentialStore::open(&args.store)
        .with_context(|| format!("opening credential store at '{}'", args.store))?;
    log::debug!("using {} backend at {}", store.backend_name(), args.store);

    match args.command {
        Some(CliCommand::Generate {
            length,
            digits,
            special,
            uppercase,
            service,
        }) => handlers::handle_generate(
            &store,
            length,
            digits,
            special,
            uppercase,
            service.as_deref(),
        ),
        Some(CliCommand::Find { service }) => handlers::handle_find(&store, &service),
        Some(CliCommand::List) => handlers::handle_list(&store),
        Some(CliCommand::Delete { service }) => handlers::handle_delete(&store, &service),
        Some(CliCommand::Interactive) | None => menu::run_menu(&store),
    }
}

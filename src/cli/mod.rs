// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Store location: `sqlite:<path>` for the SQLite backend, any other
    /// value is a path to the JSON file backend
    #[arg(
        long,
        short,
        env = "PASSFORGE_STORE",
        default_value = "sqlite:./data/passforge.db"
    )]
    pub store: String,

    /// Command to execute; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a new password
    Generate {
        /// Password length
        #[arg(short, long, default_value_t = 12)]
        length: i64,

        /// Include digits
        #[arg(short, long)]
        digits: bool,

        /// Include special characters
        #[arg(short, long)]
        special: bool,

        /// Include uppercase letters
        #[arg(short, long)]
        uppercase: bool,

        /// Service to store the password hash under
        #[arg(long)]
        service: Option<String>,
    },

    /// Find the stored password hash for a service
    Find {
        /// Service name
        #[arg(required = true)]
        service: String,
    },

    /// List all stored services and their hashes
    List,

    /// Delete the stored hash for a service
    Delete {
        /// Service name
        #[arg(required = true)]
        service: String,
    },

    /// Interactive menu
    Interactive,
}

// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, Select, Text};

use crate::db::CredentialStore;
use crate::generator::{generate_password, validate_length};
use crate::models::GenerationOptions;

const MENU_GENERATE: &str = "Generate a new password";
const MENU_FIND: &str = "Find a stored password";
const MENU_LIST: &str = "List stored services";
const MENU_DELETE: &str = "Delete a stored password";
const MENU_QUIT: &str = "Quit";

/// Interactive menu loop. Runs until the user quits; per-action failures are
/// shown and the menu keeps going, so one bad input never ends the session.
pub fn run_menu(store: &CredentialStore) -> Result<()> {
    println!("🔑 Welcome to passforge!");
    println!("========================================");

    loop {
        println!();
        let choice = Select::new(
            "What would you like to do?",
            vec![MENU_GENERATE, MENU_FIND, MENU_LIST, MENU_DELETE, MENU_QUIT],
        )
        .prompt()?;

        let outcome = match choice {
            MENU_GENERATE => generate_interactive(store),
            MENU_FIND => find_interactive(store),
            MENU_LIST => crate::cli::handlers::handle_list(store),
            MENU_DELETE => delete_interactive(store),
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        };

        if let Err(e) = outcome {
            println!("❌ {e}");
        }
    }
}

fn generate_interactive(store: &CredentialStore) -> Result<()> {
    let length = prompt_length()?;

    let use_digits = Confirm::new("Include digits?")
        .with_default(true)
        .prompt()?;
    let use_special = Confirm::new("Include special characters? (!@#$%...)")
        .with_default(true)
        .prompt()?;
    let use_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let password = generate_password(&GenerationOptions {
        length,
        use_digits,
        use_special,
        use_uppercase,
    })?;

    println!("✅ Your new password: {password}");

    let save = Confirm::new("Store this password for a service?")
        .with_default(false)
        .prompt()?;
    if save {
        let service = Text::new("Service name (e.g. gmail, yandex):").prompt()?;
        let service = service.trim();
        if service.is_empty() {
            println!("Service name cannot be empty.");
        } else {
            store.save(service, &password)?;
            println!("✅ Password for '{service}' saved (as a one-way hash).");
        }
    }

    Ok(())
}

// Re-prompts until the input parses and passes the minimum-length check,
// matching the retry behavior of the rest of the menu.
fn prompt_length() -> Result<usize> {
    loop {
        let raw = Text::new("Password length:")
            .with_default("12")
            .prompt()?;
        let length: i64 = match raw.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("❌ '{}' is not a number. Try again.", raw.trim());
                continue;
            }
        };
        match validate_length(length) {
            Ok(()) => return Ok(length as usize),
            Err(e) => println!("❌ {e}. Try again."),
        }
    }
}

fn find_interactive(store: &CredentialStore) -> Result<()> {
    let service = Text::new("Which service are you looking for?").prompt()?;
    let service = service.trim();
    if service.is_empty() {
        println!("Service name cannot be empty.");
        return Ok(());
    }
    crate::cli::handlers::handle_find(store, service)
}

fn delete_interactive(store: &CredentialStore) -> Result<()> {
    let service = Text::new("Which service should be deleted?").prompt()?;
    let service = service.trim();
    if service.is_empty() {
        println!("Service name cannot be empty.");
        return Ok(());
    }

    let confirmed = Confirm::new(&format!("Really delete the record for '{service}'?"))
        .with_default(false)
        .prompt()?;
    if confirmed {
        crate::cli::handlers::handle_delete(store, service)
    } else {
        println!("Nothing deleted.");
        Ok(())
    }
}

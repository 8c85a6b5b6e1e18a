// src/cli/handlers.rs
//
// Handlers for CLI subcommands. All user-facing text lives here and in the
// menu; the core modules only return values and typed errors.
use anyhow::Result;

use crate::db::CredentialStore;
use crate::generator::{generate_password, validate_length};
use crate::models::GenerationOptions;

pub fn handle_generate(
    store: &CredentialStore,
    length: i64,
    digits: bool,
    special: bool,
    uppercase: bool,
    service: Option<&str>,
) -> Result<()> {
    validate_length(length)?;

    let options = GenerationOptions {
        length: length as usize,
        use_digits: digits,
        use_special: special,
        use_uppercase: uppercase,
    };
    let password = generate_password(&options)?;

    println!("Generated password: {password}");

    if let Some(service) = service {
        store.save(service, &password)?;
        println!("✅ Password for '{service}' saved (as a one-way hash).");
    }

    Ok(())
}

pub fn handle_find(store: &CredentialStore, service: &str) -> Result<()> {
    match store.find(service)? {
        Some(digest) => {
            println!("Found password hash for '{service}': {digest}");
            println!("⚠️  The password is stored as a one-way hash and cannot be recovered.");
        }
        None => println!("No password found for '{service}'."),
    }
    Ok(())
}

pub fn handle_list(store: &CredentialStore) -> Result<()> {
    let all = store.list_all()?;
    if all.is_empty() {
        println!("No passwords stored yet.");
        return Ok(());
    }

    println!("Stored services ({}):", all.len());
    for (service, digest) in all {
        println!("  {service}: {digest}");
    }
    Ok(())
}

pub fn handle_delete(store: &CredentialStore, service: &str) -> Result<()> {
    if store.delete(service)? {
        println!("✅ Password for '{service}' deleted.");
    } else {
        println!("No password found for '{service}'.");
    }
    Ok(())
}

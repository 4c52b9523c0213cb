use crate::{
    cli::{self, command::Cli, command::Command},
    prelude::{AppError, ContactManager, LoadStatus, storage},
};
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    let storage = storage::parse_storage_type(cli.storage_choice, &cli.file)?;
    log::info!(
        "storage choice is {} ({})",
        cli.storage_choice.is_which(),
        cli.file.display()
    );

    let (mut manager, status) = ContactManager::open(storage)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    if status == LoadStatus::Corrupted {
        writeln!(output, "Error: The contacts file is corrupted. Starting fresh.")?;
    }

    run_menu(&mut manager, &mut input, &mut output)
}

/// Drives the interactive menu until the operator exits or input runs out.
/// Both endings save the book one final time.
pub fn run_menu<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    output: &mut W,
) -> Result<(), AppError> {
    loop {
        cli::show_menu(output)?;

        let Some(choice) = cli::prompt(input, output, "Choose an option (1-5): ")? else {
            return finish(manager, output);
        };

        let command = match choice.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{e}")?;
                continue;
            }
        };

        let keep_going = match command {
            Command::AddContact => add_contact(manager, input, output)?,
            Command::ViewContacts => {
                view_contacts(manager, output)?;
                true
            }
            Command::EditContact => edit_contact(manager, input, output)?,
            Command::DeleteContact => delete_contact(manager, input, output)?,
            Command::Exit => false,
        };

        if !keep_going {
            return finish(manager, output);
        }
    }
}

// Each handler returns false when input ran out mid-prompt.

fn add_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    let Some(name) = cli::prompt(input, output, "Enter name: ")? else {
        return Ok(false);
    };

    // Checked before asking for the rest of the fields
    if name.is_empty() {
        let err = AppError::Validation("Name cannot be empty".to_string());
        writeln!(output, "{err}")?;
        return Ok(true);
    }
    if manager.contains(&name) {
        writeln!(output, "{}", AppError::AlreadyExists(name))?;
        return Ok(true);
    }

    let Some(phone) = cli::prompt(input, output, "Enter phone number: ")? else {
        return Ok(false);
    };
    let Some(email) = cli::prompt(input, output, "Enter email address: ")? else {
        return Ok(false);
    };

    let result = manager.add_contact(&name, &phone, &email);
    report(manager, output, result, || {
        format!("Contact '{name}' added successfully!")
    })?;
    Ok(true)
}

fn view_contacts<W: Write>(manager: &ContactManager, output: &mut W) -> Result<(), AppError> {
    if !manager.mem.is_empty() {
        writeln!(output)?;
    }
    for line in manager.listing() {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

fn edit_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    let Some(name) = cli::prompt(input, output, "Enter the name of the contact to edit: ")? else {
        return Ok(false);
    };

    let Some(current) = manager.get(&name).cloned() else {
        writeln!(output, "{}", AppError::NotFound(name))?;
        return Ok(true);
    };

    writeln!(output, "Leave a field blank if you don't want to change it.")?;

    let phone_prompt = format!("Enter new phone number (current: {}): ", current.phone);
    let Some(phone) = cli::prompt(input, output, &phone_prompt)? else {
        return Ok(false);
    };

    let email_prompt = format!("Enter new email address (current: {}): ", current.email);
    let Some(email) = cli::prompt(input, output, &email_prompt)? else {
        return Ok(false);
    };

    let result = manager.edit_contact(&name, Some(&phone), Some(&email));
    report(manager, output, result, || {
        format!("Contact '{name}' updated successfully!")
    })?;
    Ok(true)
}

fn delete_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    let Some(name) = cli::prompt(input, output, "Enter the name of the contact to delete: ")?
    else {
        return Ok(false);
    };

    let result = manager.delete_contact(&name);
    report(manager, output, result, || {
        format!("Contact '{name}' deleted successfully!")
    })?;
    Ok(true)
}

/// Operator mistakes are printed and the menu carries on; anything else is returned.
fn report<W: Write, F: FnOnce() -> String>(
    manager: &ContactManager,
    output: &mut W,
    result: Result<(), AppError>,
    success: F,
) -> Result<(), AppError> {
    match result {
        Ok(()) => {
            writeln!(output, "{}", saved_notice(manager))?;
            writeln!(output, "{}", success())?;
            Ok(())
        }
        Err(e) if e.is_user_error() => {
            writeln!(output, "{e}")?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn saved_notice(manager: &ContactManager) -> &'static str {
    match manager.storage.get_medium() {
        "mem" => "Contacts kept in memory only; nothing was written to disk.",
        _ => "Contacts saved successfully to file.",
    }
}

fn finish<W: Write>(manager: &ContactManager, output: &mut W) -> Result<(), AppError> {
    manager.save()?;
    writeln!(output, "{}", saved_notice(manager))?;
    writeln!(output, "Have a good day!")?;
    output.flush()?;
    Ok(())
}

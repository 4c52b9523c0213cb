use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn contact_book(file: &std::path::Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("STORAGE_CHOICE", "json").arg("--file").arg(file);
    Ok(cmd)
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    // Add a contact
    contact_book(&file)?
        .write_stdin("1\nAlice\n555-1234\na@x.com\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' added successfully!"))
        .stdout(predicate::str::contains("Contacts saved successfully to file."))
        .stdout(predicate::str::contains("Have a good day!"));

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file)?)?;
    assert_eq!(saved["Alice"]["phone"], "555-1234");
    assert_eq!(saved["Alice"]["email"], "a@x.com");

    // Restart and confirm newly added contact exist
    contact_book(&file)?
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: Alice, Phone: 555-1234, Email: a@x.com",
        ));

    Ok(())
}

#[test]
fn duplicate_contact_is_refused() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    contact_book(&file)?
        .write_stdin("1\nAlice\n555-1234\na@x.com\n5\n")
        .assert()
        .success();

    // Attempt to Add duplicate contacts
    contact_book(&file)?
        .write_stdin("1\nAlice\n2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' already exists."))
        .stdout(predicate::str::contains(
            "Name: Alice, Phone: 555-1234, Email: a@x.com",
        ))
        .stdout(predicate::str::contains("Enter phone number: ").not());

    Ok(())
}

#[test]
fn unicode_and_blank_fields_survive_restart() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    contact_book(&file)?
        .write_stdin("1\nZoë Ångström\n\nzoë@exämple.com\n5\n")
        .assert()
        .success();

    contact_book(&file)?
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: Zoë Ångström, Phone: , Email: zoë@exämple.com",
        ));

    Ok(())
}

pub mod command;
pub mod run;

pub use run::{run_app, run_menu};

use crate::errors::AppError;
use std::io::{BufRead, Write};

// OUTPUT FUNCTIONS
pub fn show_menu<W: Write>(output: &mut W) -> Result<(), AppError> {
    writeln!(output, "\nContact Manager")?;
    writeln!(output, "1. Add Contact")?;
    writeln!(output, "2. View Contacts")?;
    writeln!(output, "3. Edit Contact")?;
    writeln!(output, "4. Delete Contact")?;
    writeln!(output, "5. Exit")?;
    Ok(())
}

// INPUT FUNCTIONS

/// Prints `prompt` and reads one trimmed line. `None` once input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

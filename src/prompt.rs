use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

// Cancellation (Esc, 'q', or Ctrl-C) comes back as None. Anything else
// wrong with the terminal is fatal.

pub fn select(prompt: &str, items: &[&str]) -> Option<usize> {
    let result = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt();

    finish(result)
}

pub fn confirm(prompt: &str, default: bool) -> Option<bool> {
    let result = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_opt();

    finish(result)
}

fn finish<T>(result: dialoguer::Result<Option<T>>) -> Option<T> {
    match result {
        Ok(answer) => answer,
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => None,
        Err(e) => {
            eprintln!("Prompt failed: {}", e);
            std::process::exit(1);
        }
    }
}

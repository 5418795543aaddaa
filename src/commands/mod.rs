mod bees;
mod config_cmd;
mod screen;
mod types;

pub use bees::BeesCommand;
pub use config_cmd::ConfigCommand;
pub use screen::render_screen;
pub use types::TypesCommand;

use clap::ValueEnum;
use std::io::{self, Write};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Asks a yes/no question on stdin; anything but `y` is a no.
fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

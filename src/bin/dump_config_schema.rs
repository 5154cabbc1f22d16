use anyhow::{Context, Result};
use std::path::PathBuf;

/// Prints the config file JSON schema, or writes it to the path given as the first argument.
fn main() -> Result<()> {
    let schema = gullwings::Config::json_schema();
    let rendered = serde_json::to_string_pretty(&schema)?;

    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => std::fs::write(&path, rendered + "\n")
            .with_context(|| format!("Failed to write schema to {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

use anyhow::Context;
use named_args::{global, Store};
use std::path::Path;

pub const DEFAULTS_FILE: &str = "nargs.toml";

pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Store> {
    let defaults = std::fs::read_to_string(path)?;
    toml::from_str(&defaults).context("Failed to read defaults toml file")
}

/// Loads default arguments into the global store.
///
/// Without an explicit path, `nargs.toml` in the working directory is used if
/// it exists.
pub fn load(path: Option<&Path>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None if Path::new(DEFAULTS_FILE).exists() => Path::new(DEFAULTS_FILE),
        None => {
            tracing::debug!("No {DEFAULTS_FILE} found, starting without defaults");
            return Ok(());
        }
    };
    let store = from_file(path)
        .with_context(|| format!("Failed to load defaults from {}", path.display()))?;
    tracing::info!(
        "Loaded {} default arguments from {}",
        store.len(),
        path.display()
    );
    global().extend(store);
    Ok(())
}

pub mod compare;
pub mod generate;
pub mod send;
pub mod status;
pub mod submit;
pub mod vendor;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Inline text flag or file path, whichever the caller supplied. Empty input
/// is a caller error, not an extraction failure.
fn read_text_input(
    inline: Option<String>,
    file: Option<PathBuf>,
    what: &str,
) -> Result<String> {
    let text = match (inline, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {what} file: {}", path.display()))?,
        (None, None) => bail!("missing {what}"),
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        bail!("{what} must not be empty");
    }
    Ok(trimmed.to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}

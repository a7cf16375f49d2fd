//! Thread input from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use mailsift_core::EmailThread;
use serde::de::DeserializeOwned;

/// Reads a JSON array of threads.
pub fn read_threads(path: Option<&Path>) -> Result<Vec<EmailThread>> {
    parse(&read_source(path)?, path)
}

/// Reads a single JSON thread.
pub fn read_thread(path: Option<&Path>) -> Result<EmailThread> {
    parse(&read_source(path)?, path)
}

/// Rejects a thread with a blank body.
pub fn ensure_content(thread: &EmailThread) -> Result<()> {
    if thread.body.trim().is_empty() {
        bail!("No email content found");
    }
    Ok(())
}

fn parse<T: DeserializeOwned>(json: &str, path: Option<&Path>) -> Result<T> {
    serde_json::from_str(json).with_context(|| format!("Invalid JSON in {}", describe(path)))
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn describe(path: Option<&Path>) -> String {
    match path {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}

use crate::extract;
use crate::{Context, Result};
use std::path::Path;

/// Dump the raw extracted text so a surprising parse can be inspected
pub fn run(transcript: &Path) -> Result<()> {
    let text = extract::extract_text(transcript)
        .with_context(|| format!("Failed to extract text from {}", transcript.display()))?;
    print!("{}", text);
    Ok(())
}

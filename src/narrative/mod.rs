pub mod client;
pub mod prompt;

use crate::error::Result;
use crate::types::config::NarrativeConfig;
use std::path::Path;

/// Produces free-form review text for the file at `path`.
///
/// Unlike the static-analyzer side there is no recovery here: if the
/// service produces no text at all, scoring cannot continue and the
/// error propagates to the caller.
pub fn review(path: &Path, config: &NarrativeConfig) -> Result<String> {
    let source_code = std::fs::read_to_string(path)?;
    let template_path = config.prompt_template.as_deref().map(Path::new);
    let prompt = prompt::render(&source_code, template_path)?;

    let client = client::ReviewClient::from_env(&config.model)?;
    let text = client.generate(&prompt)?;
    tracing::debug!(review_bytes = text.len(), "review text received");
    Ok(text)
}

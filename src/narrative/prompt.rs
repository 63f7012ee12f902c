use crate::error::{CodegradeError, Result};
use std::path::Path;

/// Placeholder token substituted with the literal file contents.
pub const SOURCE_PLACEHOLDER: &str = "{source_code}";

/// Used when no template file is configured. Asks for a labeled score so
/// the highest-priority extraction pattern can pick it up.
pub const DEFAULT_TEMPLATE: &str = "\
You are reviewing a piece of source code for overall quality: correctness, \
readability, maintainability, and robustness.

Review the following code and finish with a single line of the form \
`Score: N/100` where N is an integer between 0 and 100.

```
{source_code}
```
";

/// Renders the review prompt for a piece of source code, from a template
/// file when one is configured and from the embedded default otherwise.
pub fn render(source_code: &str, template_path: Option<&Path>) -> Result<String> {
    let template = match template_path {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|err| CodegradeError::PromptRead {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?
        }
        None => DEFAULT_TEMPLATE.to_string(),
    };
    Ok(template.replace(SOURCE_PLACEHOLDER, source_code))
}

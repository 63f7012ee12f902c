pub mod json;
pub mod md;
pub mod text;

use crate::error::CodegradeError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, CodegradeError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(CodegradeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

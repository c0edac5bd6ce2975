//! Rendering of rewrite results for the terminal

use crate::config::OutputFormat;
use crate::error::NeurolensError;
use crate::rewrite::RewriteResult;

/// Render results in `format`
///
/// JSON renders a single result as an object and several as an array.
pub fn render(results: &[RewriteResult], format: OutputFormat) -> Result<String, NeurolensError> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => render_json(results),
    }
}

fn render_text(results: &[RewriteResult]) -> String {
    results
        .iter()
        .map(|result| {
            format!(
                "[{}] {}\n{}",
                result.tone.display_name(),
                result.tone.description(),
                result.rewritten_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_json(results: &[RewriteResult]) -> Result<String, NeurolensError> {
    let rendered = match results {
        [single] => serde_json::to_string_pretty(single)?,
        _ => serde_json::to_string_pretty(results)?,
    };
    Ok(rendered)
}

/// Render a single result as one compact line (for streaming)
pub fn render_line(result: &RewriteResult, format: OutputFormat) -> Result<String, NeurolensError> {
    match format {
        OutputFormat::Text => Ok(result.rewritten_text.replace('\n', " ")),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

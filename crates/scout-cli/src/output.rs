use std::fmt::Write;

use scout_research::{RunOutcome, RunStatus};
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON summary: the outcome plus its derived counts.
#[derive(Serialize)]
struct Summary<'a> {
    #[serde(flatten)]
    outcome: &'a RunOutcome,
    accepted: usize,
    status: RunStatus,
    exit_code: i32,
}

/// Render the end-of-run summary.
pub fn render(outcome: &RunOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let summary = Summary {
                outcome,
                accepted: outcome.accepted(),
                status: outcome.status(),
                exit_code: outcome.exit_code(),
            };
            Ok(serde_json::to_string_pretty(&summary)?)
        }
        OutputFormat::Text => Ok(render_text(outcome)),
    }
}

fn render_text(outcome: &RunOutcome) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Research complete!");
    let _ = writeln!(text, "Generated {} citations", outcome.accepted());
    let _ = write!(text, "Saved to: {}", outcome.note_path.display());

    if outcome.test_mode {
        let sample = outcome
            .citations
            .first()
            .map_or("No citations generated", |c| c.trim_end());
        let _ = write!(text, "\n\nSample citation:\n{sample}");
    }
    text
}

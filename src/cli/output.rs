//! Output formatting for suggestions
//!
//! Suggestions render as human-readable text by default, or as JSON/YAML
//! for machine consumption. Logs go to stderr; formatted output is the only
//! thing written to stdout.

use anyhow::{Context, Result};

use crate::detectors::Suggestion;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted text
    Human,
    /// JSON format (machine-readable)
    Json,
    /// YAML format (version-control friendly)
    Yaml,
}

/// Formatter for analyzer suggestions
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_suggestions(&self, suggestions: &[Suggestion]) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(self.format_human(suggestions)),
            OutputFormat::Json => serde_json::to_string_pretty(suggestions)
                .context("Failed to serialize suggestions to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(suggestions)
                .context("Failed to serialize suggestions to YAML"),
        }
    }

    fn format_human(&self, suggestions: &[Suggestion]) -> String {
        if suggestions.is_empty() {
            return "No applicable workflows detected.".to_string();
        }

        let mut out = format!("{} applicable workflow(s) detected:\n", suggestions.len());
        for suggestion in suggestions {
            out.push_str(&format!(
                "  {:<14} {}\n",
                suggestion.kind.id(),
                suggestion.reason
            ));
        }
        out.push_str("\nRun `gabo generate --for <option>` to create a workflow.");
        out
    }
}

//! Run reports and their renderings
use crate::error::{Result, SolidError};
use crate::example::{Principle, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleReport {
    pub id: String,
    pub principle: Principle,
    pub title: String,
    pub variant: Variant,
    pub lines: Vec<String>,
    /// `blake3:<hex>` over the newline-joined lines
    pub transcript_hash: String,
    pub deterministic: bool,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Banner per scenario followed by its lines
    #[default]
    Plain,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Markdown => f.write_str("markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SolidError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(SolidError::UnknownFormat(s.to_string())),
        }
    }
}

pub fn transcript_hash(lines: &[String]) -> String {
    format!("blake3:{}", blake3::hash(lines.join("\n").as_bytes()))
}

pub fn render(reports: &[ExampleReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Markdown => Ok(render_markdown(reports)),
    }
}

/// The banner is printed once per scenario, before its first variant.
fn render_plain(reports: &[ExampleReport]) -> String {
    let mut output = String::new();
    let mut last_id: Option<&str> = None;

    for report in reports {
        if last_id != Some(report.id.as_str()) {
            output.push_str(&format!("===== {} =====\n", report.title));
            last_id = Some(report.id.as_str());
        }
        for line in &report.lines {
            output.push_str(line);
            output.push('\n');
        }
    }

    output
}

fn render_markdown(reports: &[ExampleReport]) -> String {
    let mut output = String::new();
    let mut last_principle: Option<Principle> = None;

    for report in reports {
        if last_principle != Some(report.principle) {
            output.push_str(&format!("# {}\n\n", report.principle.name()));
            output.push_str(&format!("> {}\n\n", report.principle.statement()));
            last_principle = Some(report.principle);
        }
        output.push_str(&format!("## {} ({})\n\n", report.title, report.variant));
        output.push_str("```text\n");
        for line in &report.lines {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str("```\n\n");
        output.push_str(&format!(
            "- id: `{}`\n- transcript: `{}`\n- deterministic: {}\n\n",
            report.id, report.transcript_hash, report.deterministic
        ));
    }

    output
}

//! Output formatting for detected URLs.
//!
//! Text and JSON print the distinct URLs in sorted order. JSON Lines, and any
//! format combined with `--positions`, print one record per occurrence in
//! input order.

use std::collections::BTreeSet;
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use is_terminal::IsTerminal;
use serde::Serialize;
use urlsift_core::{AbsoluteUrl, Detection};

/// Output format for detected URLs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// One URL per line (default for terminals).
    #[default]
    Text,
    /// A JSON array (default for pipes).
    Json,
    /// JSON Lines, one object per occurrence.
    Jsonl,
}

impl OutputFormat {
    /// Check if this format is machine-readable (JSON or JSONL).
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }

    /// Returns `Text` for interactive terminals, `Json` for pipes/redirects.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Text
        } else {
            Self::Json
        }
    }
}

/// Detections found in one input.
#[derive(Debug)]
pub struct SourceDetections {
    /// File path, or `-` for stdin.
    pub source: String,
    /// Occurrences in input order.
    pub detections: Vec<Detection>,
}

#[derive(Serialize)]
struct Occurrence<'a> {
    url: &'a AbsoluteUrl,
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<usize>,
}

fn occurrences(
    sources: &[SourceDetections],
    positions: bool,
) -> impl Iterator<Item = Occurrence<'_>> {
    sources.iter().flat_map(move |source| {
        source.detections.iter().map(move |detection| Occurrence {
            url: &detection.url,
            source: &source.source,
            start: positions.then_some(detection.start),
            end: positions.then_some(detection.end),
        })
    })
}

fn distinct(sources: &[SourceDetections]) -> BTreeSet<&AbsoluteUrl> {
    sources
        .iter()
        .flat_map(|source| source.detections.iter().map(|d| &d.url))
        .collect()
}

/// Write the detections in `format`.
pub fn render(
    out: &mut impl Write,
    sources: &[SourceDetections],
    format: OutputFormat,
    positions: bool,
) -> Result<()> {
    match (format, positions) {
        (OutputFormat::Text, false) => {
            for url in distinct(sources) {
                writeln!(out, "{url}")?;
            }
        },
        (OutputFormat::Text, true) => {
            for occurrence in occurrences(sources, true) {
                let location = format!(
                    "{}:{}-{}",
                    occurrence.source,
                    occurrence.start.unwrap_or_default(),
                    occurrence.end.unwrap_or_default()
                );
                writeln!(out, "{}\t{}", location.dimmed(), occurrence.url)?;
            }
        },
        (OutputFormat::Json, false) => {
            let urls: Vec<&str> = distinct(sources).into_iter().map(AbsoluteUrl::as_str).collect();
            serde_json::to_writer_pretty(&mut *out, &urls)?;
            writeln!(out)?;
        },
        (OutputFormat::Json, true) => {
            let records: Vec<_> = occurrences(sources, true).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
        (OutputFormat::Jsonl, positions) => {
            for occurrence in occurrences(sources, positions) {
                serde_json::to_writer(&mut *out, &occurrence)?;
                writeln!(out)?;
            }
        },
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use urlsift_core::UrlDetector;

    fn sources() -> Vec<SourceDetections> {
        let detector = UrlDetector::default();
        vec![
            SourceDetections {
                source: "a.txt".into(),
                detections: detector.detect("see https://b.example.com and example.org"),
            },
            SourceDetections {
                source: "-".into(),
                detections: detector.detect("again https://b.example.com"),
            },
        ]
    }

    fn rendered(format: OutputFormat, positions: bool) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render(&mut buf, &sources(), format, positions).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_is_sorted_and_distinct() {
        assert_eq!(
            rendered(OutputFormat::Text, false),
            "http://example.org\nhttps://b.example.com\n"
        );
    }

    #[test]
    fn test_text_positions() {
        let text = rendered(OutputFormat::Text, true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "a.txt:4-25\thttps://b.example.com",
                "a.txt:30-41\thttp://example.org",
                "-:6-27\thttps://b.example.com",
            ]
        );
    }

    #[test]
    fn test_json_array() {
        let value: serde_json::Value =
            serde_json::from_str(&rendered(OutputFormat::Json, false)).unwrap();
        assert_eq!(value, serde_json::json!(["http://example.org", "https://b.example.com"]));
    }

    #[test]
    fn test_jsonl_records() {
        let text = rendered(OutputFormat::Jsonl, false);
        let records: Vec<serde_json::Value> =
            text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["url"], "https://b.example.com");
        assert_eq!(records[0]["source"], "a.txt");
        assert!(records[0].get("start").is_none());

        let text = rendered(OutputFormat::Jsonl, true);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["start"], 4);
        assert_eq!(first["end"], 25);
    }

    #[test]
    fn test_machine_readable() {
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(OutputFormat::Jsonl.is_machine_readable());
        assert!(!OutputFormat::Text.is_machine_readable());
    }
}

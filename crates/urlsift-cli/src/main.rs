//! urlsift CLI - find URLs in free-form text
//!
//! Reads files or stdin, runs the detector over each input and prints the
//! URLs found. Errors in caller input (an invalid `--allow` host, an
//! unreadable file, a malformed config) exit with status 1.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use urlsift_core::{DetectorConfig, UrlDetector};

mod cli;
mod input;
mod logging;
mod output;

use cli::Cli;
use output::SourceDetections;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::initialize_logging(&cli)?;

    let detector = build_detector(&cli)?;
    let inputs = input::read_inputs(&cli.files)?;

    let sources: Vec<SourceDetections> = inputs
        .into_iter()
        .map(|input| {
            let detections = detector.detect(&input.text);
            info!(source = %input.source, found = detections.len(), "scanned input");
            SourceDetections {
                source: input.source,
                detections,
            }
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::render(&mut out, &sources, cli.output_format(), cli.positions)
}

/// Load the configuration and merge the command-line flags over it.
fn build_detector(cli: &Cli) -> Result<UrlDetector> {
    let mut config = match &cli.config {
        Some(path) => DetectorConfig::load(path)?,
        None => DetectorConfig::load_default()?,
    };
    merge_flags(&mut config, cli);
    debug!(?config, "effective configuration");

    UrlDetector::from_config(&config).context("Invalid host in allow or deny list")
}

fn merge_flags(config: &mut DetectorConfig, cli: &Cli) {
    config.options.extend(cli.options.iter().copied());
    if !cli.allow.is_empty() {
        config
            .allowed
            .get_or_insert_with(Vec::new)
            .extend(cli.allow.iter().cloned());
    }
    if !cli.deny.is_empty() {
        config
            .denied
            .get_or_insert_with(Vec::new)
            .extend(cli.deny.iter().cloned());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use urlsift_core::DetectorOption;

    #[test]
    fn test_flags_extend_config() {
        let mut config = DetectorConfig {
            options: vec![DetectorOption::Strict],
            allowed: Some(vec!["example.com".into()]),
            denied: None,
        };
        let cli = Cli::try_parse_from([
            "urlsift",
            "-o",
            "json",
            "--allow",
            "example.org",
            "--deny",
            "ads.example.com",
        ])
        .unwrap();

        merge_flags(&mut config, &cli);
        assert_eq!(config.options, [DetectorOption::Strict, DetectorOption::Json]);
        assert_eq!(
            config.allowed,
            Some(vec!["example.com".to_string(), "example.org".to_string()])
        );
        assert_eq!(config.denied, Some(vec!["ads.example.com".to_string()]));
    }

    #[test]
    fn test_no_flags_leave_lists_unset() {
        let mut config = DetectorConfig::default();
        let cli = Cli::try_parse_from(["urlsift"]).unwrap();
        merge_flags(&mut config, &cli);
        assert_eq!(config, DetectorConfig::default());
    }
}

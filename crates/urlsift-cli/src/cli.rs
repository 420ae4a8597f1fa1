//! # CLI Structure and Argument Parsing
//!
//! `urlsift` reads text from files or stdin and prints the URLs it finds.
//!
//! ```bash
//! # Scan a file
//! urlsift README.md
//!
//! # Only URLs with an explicit scheme, as JSON
//! urlsift --option strict --format json notes.txt
//!
//! # Keep example.com (and its subdomains) but drop one host
//! cat log.txt | urlsift --allow example.com --deny ads.example.com
//!
//! # Every occurrence with its byte range
//! urlsift --positions --format jsonl page.html
//! ```
//!
//! Allow and deny entries given on the command line are added to the ones
//! from the configuration file, as are options.

use std::path::PathBuf;

use clap::Parser;
use urlsift_core::DetectorOption;

use crate::output::OutputFormat;

/// Command-line arguments for `urlsift`.
#[derive(Parser, Clone, Debug)]
#[command(name = "urlsift")]
#[command(version)]
#[command(about = "urlsift - Find URLs in free-form text", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files to scan; reads stdin when none are given or for `-`
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Detector option (repeatable): default, strict, allow-single-level-domain,
    /// bracket-match, single-quote-match, json, javascript, xml, html
    #[arg(short = 'o', long = "option", value_name = "OPTION")]
    pub options: Vec<DetectorOption>,

    /// Only keep URLs on this host or its subdomains (repeatable)
    #[arg(long = "allow", value_name = "HOST")]
    pub allow: Vec<String>,

    /// Drop URLs on this host or its subdomains (repeatable)
    #[arg(long = "deny", value_name = "HOST")]
    pub deny: Vec<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", env = "URLSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format; text for terminals, json for pipes
    #[arg(short = 'f', long, value_enum, env = "URLSIFT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Report every occurrence with its byte range
    #[arg(long)]
    pub positions: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Only show errors
    #[arg(short = 'q', long, conflicts_with_all = ["verbose", "debug"])]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The output format, detected from the terminal when not given.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(OutputFormat::detect)
    }
}

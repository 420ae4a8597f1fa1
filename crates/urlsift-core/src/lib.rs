//! # urlsift-core
//!
//! Finds URLs in free-form text.
//!
//! The detector scans text in a single pass, recognises URLs with or without
//! a scheme, validates their hosts, trims punctuation that belongs to the
//! surrounding sentence and returns the distinct URLs in absolute form,
//! optionally filtered by host allow and deny lists.
//!
//! ## Architecture
//!
//! - **Characters** ([`chars`]): URL character classes
//! - **Hosts** ([`host`]): IPv4, IPv6 and domain validation plus the [`Host`] type
//! - **Scanning** ([`scanner`], [`trim`]): the candidate state machine and
//!   trailing punctuation trimming
//! - **Filtering** ([`filter`]): allow/deny lists with subdomain matching
//! - **Detection** ([`detector`]): the [`UrlDetector`] facade
//! - **Configuration** ([`config`]): TOML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use urlsift_core::UrlDetector;
//!
//! let detector = UrlDetector::default();
//! let urls = detector.extract("Read https://example.com/guide. Mirror: example.org");
//!
//! let mut rendered: Vec<_> = urls.iter().map(ToString::to_string).collect();
//! rendered.sort();
//! assert_eq!(rendered, ["http://example.org", "https://example.com/guide"]);
//! ```
//!
//! ## Error Handling
//!
//! Extraction never fails. Errors only come from caller input such as host
//! lists and configuration files:
//!
//! ```rust
//! use urlsift_core::{Error, Host};
//!
//! match Host::parse("not a host") {
//!     Ok(host) => println!("host: {host}"),
//!     Err(Error::InvalidHost(msg)) => eprintln!("rejected: {msg}"),
//!     Err(e) => eprintln!("{} error: {e}", e.category()),
//! }
//! ```
//!
//! ## Thread Safety
//!
//! [`UrlDetector`] is immutable and `Send + Sync`; share one instance across
//! threads without locking.

/// URL character classes
pub mod chars;
/// Detector configuration files
pub mod config;
/// The detector facade
pub mod detector;
/// Error types and result aliases
pub mod error;
/// Allow/deny host filtering
pub mod filter;
/// Host validation
pub mod host;
/// Detector options
pub mod options;
/// Candidate scanning
pub mod scanner;
/// Trailing punctuation trimming
pub mod trim;
/// The absolute URL output type
pub mod url;

pub use crate::url::AbsoluteUrl;
pub use config::DetectorConfig;
pub use detector::{Detection, UrlDetector};
pub use error::{Error, Result};
pub use filter::{HostFilter, HostSet};
pub use host::{Host, HostKind};
pub use options::{DetectorOption, DetectorOptions};
pub use scanner::{CandidateSpan, Scanner};

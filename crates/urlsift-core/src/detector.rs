//! The [`UrlDetector`] facade.
//!
//! A detector is an immutable bundle of options and host filters. Every
//! `with_*` method returns a new detector; none of them touch the receiver,
//! so one detector can be shared freely across threads.
//!
//! ```rust
//! use urlsift_core::{DetectorOption, Host, UrlDetector};
//!
//! let detector = UrlDetector::default();
//! let urls = detector.extract("See https://example.com/page. Or www.example.org!");
//! assert_eq!(urls.len(), 2);
//!
//! let strict = detector
//!     .with_options(DetectorOption::Strict)
//!     .with_denied([Host::parse("example.com")?]);
//! assert!(strict.extract("https://docs.example.com and https://other.net")
//!     .iter()
//!     .all(|url| url.host().as_str() == "other.net"));
//! # Ok::<(), urlsift_core::Error>(())
//! ```

use std::collections::HashSet;
use std::ops::Range;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DetectorConfig;
use crate::filter::{HostFilter, HostSet};
use crate::options::DetectorOptions;
use crate::scanner::Scanner;
use crate::url::AbsoluteUrl;
use crate::{Host, Result};

/// One accepted URL occurrence in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// The URL in absolute form.
    pub url: AbsoluteUrl,
    /// Byte offset of the first character in the input.
    pub start: usize,
    /// Byte offset one past the last character in the input.
    pub end: usize,
}

impl Detection {
    /// Byte range of the occurrence in the input.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Finds URLs in free-form text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlDetector {
    options: DetectorOptions,
    filter: HostFilter,
}

impl UrlDetector {
    /// Create a detector.
    ///
    /// `None` leaves the corresponding filter unconfigured. An allow set that
    /// is present but empty admits no URL at all.
    pub fn new(
        options: impl Into<DetectorOptions>,
        allowed: Option<HashSet<Host>>,
        denied: Option<HashSet<Host>>,
    ) -> Self {
        let allowed = allowed.map(HostSet::new);
        if allowed.as_ref().is_some_and(HostSet::is_empty) {
            warn!("allow list is empty; no URL will be accepted");
        }
        Self {
            options: options.into(),
            filter: HostFilter::new(allowed, denied.map(HostSet::new)),
        }
    }

    /// Create a detector from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Fails when an allow or deny entry is not a valid host.
    pub fn from_config(config: &DetectorConfig) -> Result<Self> {
        let detector = Self::new(
            config.detector_options(),
            config.allowed_hosts()?,
            config.denied_hosts()?,
        );
        debug!(options = %detector.options, "detector configured");
        Ok(detector)
    }

    /// A copy with different options and the same filters.
    #[must_use]
    pub fn with_options(&self, options: impl Into<DetectorOptions>) -> Self {
        Self {
            options: options.into(),
            filter: self.filter.clone(),
        }
    }

    /// A copy with the allow list replaced.
    #[must_use]
    pub fn with_allowed(&self, allowed: impl IntoIterator<Item = Host>) -> Self {
        let allowed = HostSet::new(allowed);
        if allowed.is_empty() {
            warn!("allow list is empty; no URL will be accepted");
        }
        Self {
            options: self.options,
            filter: self.filter.with_allowed(Some(allowed)),
        }
    }

    /// A copy with the deny list replaced.
    #[must_use]
    pub fn with_denied(&self, denied: impl IntoIterator<Item = Host>) -> Self {
        Self {
            options: self.options,
            filter: self.filter.with_denied(Some(HostSet::new(denied))),
        }
    }

    /// The detector's options.
    pub const fn options(&self) -> DetectorOptions {
        self.options
    }

    /// The allow list, when configured.
    pub fn allowed(&self) -> Option<HashSet<Host>> {
        self.filter.allowed().map(HostSet::to_hash_set)
    }

    /// The deny list, when configured.
    pub fn denied(&self) -> Option<HashSet<Host>> {
        self.filter.denied().map(HostSet::to_hash_set)
    }

    /// Every accepted URL occurrence in `text`, in text order.
    ///
    /// Unlike [`extract`](Self::extract) this keeps duplicates and reports
    /// where each occurrence sits in the input.
    pub fn detect(&self, text: &str) -> Vec<Detection> {
        Scanner::new(text, self.options)
            .filter(|span| self.filter.accepts(&span.host))
            .map(|span| Detection {
                url: AbsoluteUrl::from_span(&span),
                start: span.start,
                end: span.end,
            })
            .collect()
    }

    /// The set of distinct URLs in `text`.
    ///
    /// Never fails; text without URLs yields an empty set.
    pub fn extract(&self, text: &str) -> HashSet<AbsoluteUrl> {
        Scanner::new(text, self.options)
            .filter(|span| self.filter.accepts(&span.host))
            .map(|span| AbsoluteUrl::from_span(&span))
            .collect()
    }
}

//! Detector options.
//!
//! Options are a closed set of named presets. Callers pick them by name and
//! combine them with `|`; internally each preset expands to a handful of
//! behaviour flags.
//!
//! ```rust
//! use urlsift_core::{DetectorOption, DetectorOptions};
//!
//! let options = DetectorOption::Strict | DetectorOption::AllowSingleLevelDomain;
//! assert!(options.requires_scheme());
//! assert!(options.allows_single_level_domain());
//! assert!(!DetectorOptions::default().requires_scheme());
//!
//! let parsed: DetectorOption = "bracket-match".parse()?;
//! assert_eq!(parsed, DetectorOption::BracketMatch);
//! # Ok::<(), urlsift_core::Error>(())
//! ```

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Error;

bitflags! {
    /// Behaviour switches the presets expand to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct Flags: u8 {
        /// Only `scheme://` and `scheme:` anchors are recognised.
        const SCHEME_REQUIRED = 1;
        /// Hosts made of a single label are valid.
        const SINGLE_LEVEL_DOMAIN = 1 << 1;
        /// Brackets end a URL instead of being kept when balanced.
        const BRACKET_MATCH = 1 << 2;
        /// Single quotes end a URL.
        const SINGLE_QUOTE_MATCH = 1 << 3;
    }
}

/// A named detector option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorOption {
    /// Schemeless detection with the standard punctuation rules.
    Default,
    /// Only URLs written with an explicit scheme are detected.
    Strict,
    /// Accept single-label hosts such as `localhost` or `intranet`.
    AllowSingleLevelDomain,
    /// Treat `()[]{}` as delimiters around URLs.
    BracketMatch,
    /// Treat `'` as a delimiter around URLs.
    SingleQuoteMatch,
    /// Text is JSON: brackets and braces delimit URLs.
    Json,
    /// Text is JavaScript: brackets and single quotes delimit URLs.
    Javascript,
    /// Text is XML: single-quoted attributes delimit URLs.
    Xml,
    /// Text is HTML: union of the XML and JavaScript rules.
    Html,
}

impl DetectorOption {
    /// Every option, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Strict,
        Self::AllowSingleLevelDomain,
        Self::BracketMatch,
        Self::SingleQuoteMatch,
        Self::Json,
        Self::Javascript,
        Self::Xml,
        Self::Html,
    ];

    /// The option's canonical `snake_case` name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::AllowSingleLevelDomain => "allow_single_level_domain",
            Self::BracketMatch => "bracket_match",
            Self::SingleQuoteMatch => "single_quote_match",
            Self::Json => "json",
            Self::Javascript => "javascript",
            Self::Xml => "xml",
            Self::Html => "html",
        }
    }

    pub(crate) const fn flags(self) -> Flags {
        match self {
            Self::Default => Flags::empty(),
            Self::Strict => Flags::SCHEME_REQUIRED,
            Self::AllowSingleLevelDomain => Flags::SINGLE_LEVEL_DOMAIN,
            Self::BracketMatch | Self::Json => Flags::BRACKET_MATCH,
            Self::SingleQuoteMatch | Self::Xml => Flags::SINGLE_QUOTE_MATCH,
            Self::Javascript | Self::Html => {
                Flags::BRACKET_MATCH.union(Flags::SINGLE_QUOTE_MATCH)
            },
        }
    }
}

impl fmt::Display for DetectorOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DetectorOption {
    type Err = Error;

    /// Parse an option name; case-insensitive, `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|option| option.name() == normalized)
            .ok_or_else(|| Error::Config(format!("unknown detector option '{s}'")))
    }
}

/// An immutable combination of [`DetectorOption`]s.
///
/// The default value is equivalent to [`DetectorOption::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<DetectorOption>", into = "Vec<DetectorOption>")]
pub struct DetectorOptions {
    flags: Flags,
}

impl DetectorOptions {
    /// Options equivalent to [`DetectorOption::Default`].
    pub const fn new() -> Self {
        Self {
            flags: Flags::empty(),
        }
    }

    /// A copy of these options with `option` added.
    #[must_use]
    pub const fn with(self, option: DetectorOption) -> Self {
        Self {
            flags: self.flags.union(option.flags()),
        }
    }

    /// Whether every behaviour of `option` is enabled.
    pub const fn contains(self, option: DetectorOption) -> bool {
        self.flags.contains(option.flags())
    }

    /// Only explicit-scheme URLs are detected.
    pub const fn requires_scheme(self) -> bool {
        self.flags.contains(Flags::SCHEME_REQUIRED)
    }

    /// Single-label hosts are accepted.
    pub const fn allows_single_level_domain(self) -> bool {
        self.flags.contains(Flags::SINGLE_LEVEL_DOMAIN)
    }

    /// Brackets terminate a URL.
    pub const fn brackets_delimit(self) -> bool {
        self.flags.contains(Flags::BRACKET_MATCH)
    }

    /// Single quotes terminate a URL.
    pub const fn single_quotes_delimit(self) -> bool {
        self.flags.contains(Flags::SINGLE_QUOTE_MATCH)
    }

    /// The minimal list of named options that reproduces these options.
    pub fn to_options(self) -> Vec<DetectorOption> {
        let basic = [
            DetectorOption::Strict,
            DetectorOption::AllowSingleLevelDomain,
            DetectorOption::BracketMatch,
            DetectorOption::SingleQuoteMatch,
        ];
        let options: Vec<_> = basic.into_iter().filter(|o| self.contains(*o)).collect();
        if options.is_empty() {
            vec![DetectorOption::Default]
        } else {
            options
        }
    }
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DetectorOption> for DetectorOptions {
    fn from(option: DetectorOption) -> Self {
        Self::new().with(option)
    }
}

impl FromIterator<DetectorOption> for DetectorOptions {
    fn from_iter<I: IntoIterator<Item = DetectorOption>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl From<Vec<DetectorOption>> for DetectorOptions {
    fn from(options: Vec<DetectorOption>) -> Self {
        options.into_iter().collect()
    }
}

impl From<DetectorOptions> for Vec<DetectorOption> {
    fn from(options: DetectorOptions) -> Self {
        options.to_options()
    }
}

impl BitOr for DetectorOption {
    type Output = DetectorOptions;

    fn bitor(self, rhs: Self) -> DetectorOptions {
        DetectorOptions::from(self).with(rhs)
    }
}

impl BitOr<DetectorOption> for DetectorOptions {
    type Output = Self;

    fn bitor(self, rhs: DetectorOption) -> Self {
        self.with(rhs)
    }
}

impl fmt::Display for DetectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.to_options().iter().map(|o| o.name()).collect();
        f.write_str(&names.join(" | "))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_flags() {
        let options = DetectorOptions::default();
        assert!(!options.requires_scheme());
        assert!(!options.allows_single_level_domain());
        assert!(!options.brackets_delimit());
        assert!(!options.single_quotes_delimit());
        assert!(options.contains(DetectorOption::Default));
        assert_eq!(options, DetectorOption::Default.into());
    }

    #[test]
    fn test_presets_expand() {
        let json = DetectorOptions::from(DetectorOption::Json);
        assert!(json.brackets_delimit());
        assert!(!json.single_quotes_delimit());

        let js = DetectorOptions::from(DetectorOption::Javascript);
        assert!(js.brackets_delimit() && js.single_quotes_delimit());

        let html = DetectorOptions::from(DetectorOption::Html);
        assert!(html.contains(DetectorOption::Xml));
        assert!(html.contains(DetectorOption::Javascript));
        assert!(!html.requires_scheme());
    }

    #[test]
    fn test_combination_is_value_semantics() {
        let base = DetectorOptions::from(DetectorOption::Strict);
        let combined = base | DetectorOption::AllowSingleLevelDomain;
        assert!(!base.allows_single_level_domain());
        assert!(combined.requires_scheme() && combined.allows_single_level_domain());
    }

    #[test]
    fn test_parse_names() {
        for option in DetectorOption::ALL {
            assert_eq!(option.name().parse::<DetectorOption>().unwrap(), option);
        }
        assert_eq!(
            "Allow-Single-Level-Domain".parse::<DetectorOption>().unwrap(),
            DetectorOption::AllowSingleLevelDomain
        );
        assert!(matches!(
            "lenient".parse::<DetectorOption>(),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_serde_list_form() {
        let options = DetectorOption::Strict | DetectorOption::Json;
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"["strict","bracket_match"]"#);
        let back: DetectorOptions = serde_json::from_str(r#"["strict","json"]"#).unwrap();
        assert_eq!(back, options);

        let default_json = serde_json::to_string(&DetectorOptions::default()).unwrap();
        assert_eq!(default_json, r#"["default"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(DetectorOptions::default().to_string(), "default");
        assert_eq!(
            (DetectorOption::Strict | DetectorOption::SingleQuoteMatch).to_string(),
            "strict | single_quote_match"
        );
    }
}

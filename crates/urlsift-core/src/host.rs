//! Host validation and the [`Host`] value type.
//!
//! A candidate host found in text is accepted when it is an IPv4 literal, a
//! bracketed IPv6 literal, or a domain name whose last label looks like a
//! top-level domain. TLDs are checked by shape rather than against a list so
//! new TLDs keep working; [`is_plausible_tld`] is the single place that
//! decides.
//!
//! The same type doubles as an allow/deny entry. An entry without an explicit
//! subdomain covers its whole registrable domain:
//!
//! ```rust
//! use urlsift_core::Host;
//!
//! let pattern = Host::parse("example.com")?;
//! assert!(pattern.matches(&Host::parse("mail.example.com")?));
//! assert!(pattern.matches(&Host::parse("www.example.com")?));
//!
//! let exact = Host::parse("mail.example.com")?;
//! assert!(!exact.matches(&Host::parse("example.com")?));
//! # Ok::<(), urlsift_core::Error>(())
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv6Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chars::is_host_label_char;
use crate::{Error, Result};

/// Maximum length of a full domain name.
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Second-level labels under two-letter country TLDs that are registries in
/// their own right (`example.co.uk`, `example.com.au`).
const PUBLIC_SECOND_LEVELS: &[&str] = &[
    "ac", "co", "com", "edu", "gob", "go", "gov", "ltd", "mil", "ne", "net", "nom", "or", "org",
    "plc", "sch",
];

/// The syntactic kind of a validated host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKind {
    /// A registered domain name such as `docs.example.com`.
    Domain,
    /// A dotted-quad IPv4 literal.
    Ipv4,
    /// A bracketed IPv6 literal.
    Ipv6,
}

/// A validated host in canonical lowercase form.
///
/// Equality, ordering and hashing use the canonical name only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Host {
    kind: HostKind,
    /// Lowercase name; IPv6 literals are stored without brackets.
    name: String,
    /// Byte offset in `name` where the registrable domain starts.
    registrable_start: usize,
}

impl Host {
    /// Parse a caller-supplied host, e.g. an allow or deny entry.
    ///
    /// Accepts domains (single-label names included), IPv4 literals and
    /// IPv6 literals with or without brackets. A trailing root `.` is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty string and
    /// [`Error::InvalidHost`] for anything that is not a valid host.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::Config("host must not be empty".into()));
        }
        if trimmed.contains("://") {
            return Err(Error::InvalidHost(format!(
                "'{trimmed}' looks like a URL; pass only the host name"
            )));
        }

        let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
        let host = if trimmed.starts_with('[') {
            validate_ipv6(trimmed)
        } else if trimmed.contains(':') {
            validate_ipv6(&format!("[{trimmed}]"))
        } else {
            validate_host(trimmed, true)
        };

        host.ok_or_else(|| Error::InvalidHost(format!("'{trimmed}' is not a valid host")))
    }

    /// The syntactic kind of this host.
    pub const fn kind(&self) -> HostKind {
        self.kind
    }

    /// Whether this host is an IP literal rather than a domain.
    pub const fn is_ip(&self) -> bool {
        matches!(self.kind, HostKind::Ipv4 | HostKind::Ipv6)
    }

    /// Canonical lowercase name. IPv6 literals are returned without brackets.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The registrable domain, e.g. `example.co.uk` for `www.example.co.uk`.
    ///
    /// IP literals and single-label hosts are their own registrable domain.
    pub fn registrable_domain(&self) -> &str {
        &self.name[self.registrable_start..]
    }

    /// The explicit subdomain chain in front of the registrable domain.
    pub fn subdomain(&self) -> Option<&str> {
        if self.registrable_start == 0 {
            None
        } else {
            Some(&self.name[..self.registrable_start - 1])
        }
    }

    /// Key under which this host is stored when used as a filter entry.
    ///
    /// A bare or `www` entry covers the whole registrable domain, any other
    /// subdomain only itself.
    pub(crate) fn match_key(&self) -> &str {
        match self.subdomain() {
            None | Some("www") => self.registrable_domain(),
            Some(_) => &self.name,
        }
    }

    /// Whether this host, read as a filter entry, covers `candidate`.
    ///
    /// IP literals match only themselves. A domain entry without an explicit
    /// subdomain matches the bare domain and every subdomain of it; an entry
    /// with an explicit subdomain matches only that exact host.
    pub fn matches(&self, candidate: &Self) -> bool {
        if self.is_ip() || candidate.is_ip() {
            return self.kind == candidate.kind && self.name == candidate.name;
        }
        match self.subdomain() {
            None | Some("www") => {
                is_same_or_subdomain(&candidate.name, self.registrable_domain())
            },
            Some(_) => candidate.name == self.name,
        }
    }
}

/// `host == domain` or `host` ends with `.domain`.
pub(crate) fn is_same_or_subdomain(host: &str, domain: &str) -> bool {
    host.strip_suffix(domain)
        .is_some_and(|prefix| prefix.is_empty() || prefix.ends_with('.'))
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Host {}

impl Hash for Host {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Host {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Host {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HostKind::Ipv6 => write!(f, "[{}]", self.name),
            HostKind::Domain | HostKind::Ipv4 => f.write_str(&self.name),
        }
    }
}

impl FromStr for Host {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Host {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Host> for String {
    fn from(host: Host) -> Self {
        host.to_string()
    }
}

/// Validate any host form found after a scheme or at a bare anchor.
pub fn validate_host(text: &str, allow_single_level: bool) -> Option<Host> {
    if text.starts_with('[') {
        validate_ipv6(text)
    } else {
        validate_ipv4(text).or_else(|| validate_domain(text, allow_single_level))
    }
}

/// Validate a dotted-quad IPv4 literal such as `192.168.1.1`.
///
/// Each octet is one to three decimal digits in `0..=255`; leading zeros are
/// tolerated.
pub fn validate_ipv4(text: &str) -> Option<Host> {
    let mut octets = 0;
    for part in text.split('.') {
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse::<u8>().ok()?;
        octets += 1;
    }
    (octets == 4).then(|| Host {
        kind: HostKind::Ipv4,
        name: text.to_string(),
        registrable_start: 0,
    })
}

/// Validate a bracketed IPv6 literal such as `[2001:db8::1]`.
///
/// The address is stored in its canonical compressed form.
pub fn validate_ipv6(text: &str) -> Option<Host> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    let addr: Ipv6Addr = inner.parse().ok()?;
    Some(Host {
        kind: HostKind::Ipv6,
        name: addr.to_string(),
        registrable_start: 0,
    })
}

/// Validate a domain name.
///
/// Labels are 1–63 host-label characters and may not start or end with `-`.
/// A multi-label name needs a plausible top-level label; a single label is
/// only accepted when `allow_single_level` is set and it is not purely
/// numeric.
pub fn validate_domain(text: &str, allow_single_level: bool) -> Option<Host> {
    if text.is_empty() || text.chars().count() > MAX_DOMAIN_LEN {
        return None;
    }

    let labels: Vec<&str> = text.split('.').collect();
    if !labels.iter().all(|label| is_valid_label(label)) {
        return None;
    }

    match labels.as_slice() {
        [] => return None,
        [single] => {
            if !allow_single_level || single.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
        },
        [.., tld] => {
            if !is_plausible_tld(tld) {
                return None;
            }
        },
    }

    let name = text.to_lowercase();
    let registrable_start = registrable_start(&name);
    Some(Host {
        kind: HostKind::Domain,
        name,
        registrable_start,
    })
}

fn is_valid_label(label: &str) -> bool {
    let len = label.chars().count();
    (1..=MAX_LABEL_LEN).contains(&len)
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(is_host_label_char)
}

/// Shape check for a top-level label: 2–63 ASCII letters, or an `xn--` IDN label.
pub fn is_plausible_tld(label: &str) -> bool {
    let lower = label.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("xn--") {
        return !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    }
    let len = label.chars().count();
    (2..=MAX_LABEL_LEN).contains(&len) && label.chars().all(|c| c.is_ascii_alphabetic())
}

/// Byte offset of the registrable domain inside a lowercase domain name.
fn registrable_start(name: &str) -> usize {
    let labels: Vec<&str> = name.split('.').collect();
    let count = labels.len();
    let keep = match labels.as_slice() {
        [.., second, tld]
            if count >= 3 && tld.len() == 2 && PUBLIC_SECOND_LEVELS.contains(second) =>
        {
            3
        },
        _ => 2,
    };
    if count <= keep {
        return 0;
    }
    labels[..count - keep].iter().map(|l| l.len() + 1).sum()
}

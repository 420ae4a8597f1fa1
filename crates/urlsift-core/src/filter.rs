//! Allow/deny host filtering.
//!
//! Filter entries are [`Host`] values. An entry without an explicit
//! subdomain (or with only `www`) covers its registrable domain and every
//! subdomain of it; any other entry covers exactly one host. IP literals only
//! ever match themselves.
//!
//! Lookups walk the candidate's label suffixes against a map keyed by each
//! entry's match key, so a check costs one lookup per label instead of one
//! comparison per entry.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tracing::trace;

use crate::{Host, Result};

/// An immutable set of filter entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostSet {
    hosts: BTreeSet<Host>,
    /// Match key → whether the entry also covers subdomains of the key.
    keys: HashMap<String, bool>,
}

impl HostSet {
    /// Build a set from validated hosts.
    pub fn new(hosts: impl IntoIterator<Item = Host>) -> Self {
        let hosts: BTreeSet<Host> = hosts.into_iter().collect();
        let mut keys = HashMap::with_capacity(hosts.len());
        for host in &hosts {
            let broad = !host.is_ip() && host.match_key() == host.registrable_domain();
            let entry = keys.entry(host.match_key().to_string()).or_insert(false);
            *entry |= broad;
        }
        Self { hosts, keys }
    }

    /// Parse host strings into a set.
    ///
    /// # Errors
    ///
    /// Returns the first [`Host::parse`] error.
    pub fn parse<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = entries
            .into_iter()
            .map(|entry| Host::parse(entry.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(hosts))
    }

    /// Whether any entry covers `candidate`.
    pub fn matches(&self, candidate: &Host) -> bool {
        let name = candidate.as_str();
        if candidate.is_ip() {
            return self.keys.contains_key(name)
                && self.hosts.iter().any(|h| h.is_ip() && h.as_str() == name);
        }

        let mut suffix = name;
        loop {
            if let Some(&broad) = self.keys.get(suffix) {
                if broad || suffix.len() == name.len() {
                    return true;
                }
            }
            match suffix.split_once('.') {
                Some((_, rest)) => suffix = rest,
                None => return false,
            }
        }
    }

    /// The entries, in sorted order.
    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// The entries as a `HashSet`.
    pub fn to_hash_set(&self) -> HashSet<Host> {
        self.hosts.iter().cloned().collect()
    }
}

impl FromIterator<Host> for HostSet {
    fn from_iter<I: IntoIterator<Item = Host>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Allow/deny filter applied to every accepted candidate.
///
/// Host sets sit behind `Arc`, so cloning a filter (and the detector that
/// owns it) never copies the sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostFilter {
    allowed: Option<Arc<HostSet>>,
    denied: Option<Arc<HostSet>>,
}

impl HostFilter {
    /// Create a filter. `None` leaves that side unconfigured.
    pub fn new(allowed: Option<HostSet>, denied: Option<HostSet>) -> Self {
        Self {
            allowed: allowed.map(Arc::new),
            denied: denied.map(Arc::new),
        }
    }

    /// A copy with the allow side replaced.
    #[must_use]
    pub fn with_allowed(&self, allowed: Option<HostSet>) -> Self {
        Self {
            allowed: allowed.map(Arc::new),
            denied: self.denied.clone(),
        }
    }

    /// A copy with the deny side replaced.
    #[must_use]
    pub fn with_denied(&self, denied: Option<HostSet>) -> Self {
        Self {
            allowed: self.allowed.clone(),
            denied: denied.map(Arc::new),
        }
    }

    /// The allow set, when configured.
    pub fn allowed(&self) -> Option<&HostSet> {
        self.allowed.as_deref()
    }

    /// The deny set, when configured.
    pub fn denied(&self) -> Option<&HostSet> {
        self.denied.as_deref()
    }

    /// Whether no filtering is configured.
    pub const fn is_pass_through(&self) -> bool {
        self.allowed.is_none() && self.denied.is_none()
    }

    /// Decide whether a URL on `host` is kept. Deny wins over allow.
    pub fn accepts(&self, host: &Host) -> bool {
        if self.denied.as_ref().is_some_and(|denied| denied.matches(host)) {
            trace!(host = %host, "host denied");
            return false;
        }
        if let Some(allowed) = &self.allowed {
            let keep = allowed.matches(host);
            if !keep {
                trace!(host = %host, "host not in allow list");
            }
            return keep;
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn host(s: &str) -> Host {
        Host::parse(s).unwrap()
    }

    fn set(entries: &[&str]) -> HostSet {
        HostSet::parse(entries).unwrap()
    }

    #[test]
    fn test_broad_entry_covers_subdomains() {
        let hosts = set(&["example.com"]);
        for candidate in ["example.com", "www.example.com", "mail.example.com", "a.b.example.com"] {
            assert!(hosts.matches(&host(candidate)), "{candidate}");
        }
        assert!(!hosts.matches(&host("example.org")));
        assert!(!hosts.matches(&host("badexample.com")));
    }

    #[test]
    fn test_exact_entry() {
        let hosts = set(&["mail.example.com"]);
        assert!(hosts.matches(&host("mail.example.com")));
        assert!(!hosts.matches(&host("example.com")));
        assert!(!hosts.matches(&host("www.example.com")));
        assert!(!hosts.matches(&host("x.mail.example.com")));
    }

    #[test]
    fn test_mixed_entries_share_key() {
        let hosts = set(&["mail.example.com", "www.example.com"]);
        assert!(hosts.matches(&host("docs.example.com")));
        assert!(hosts.matches(&host("mail.example.com")));
    }

    #[test]
    fn test_country_code_second_level() {
        let hosts = set(&["example.co.uk"]);
        assert!(hosts.matches(&host("shop.example.co.uk")));
        assert!(!hosts.matches(&host("other.co.uk")));
    }

    #[test]
    fn test_ip_entries() {
        let hosts = set(&["10.0.0.1", "::1"]);
        assert!(hosts.matches(&host("10.0.0.1")));
        assert!(hosts.matches(&host("[::1]")));
        assert!(!hosts.matches(&host("10.0.0.2")));
    }

    #[test]
    fn test_agrees_with_host_matches() {
        let entries = ["example.com", "mail.example.org", "www.example.net", "10.1.1.1"];
        let candidates = [
            "example.com",
            "x.example.com",
            "mail.example.org",
            "example.org",
            "www.example.org",
            "api.example.net",
            "10.1.1.1",
            "10.1.1.2",
        ];
        let hosts = set(&entries);
        for candidate in candidates {
            let candidate = host(candidate);
            let expected = entries.iter().any(|e| host(e).matches(&candidate));
            assert_eq!(hosts.matches(&candidate), expected, "{candidate}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!(HostSet::parse(["example.com", ""]).is_err());
        assert!(HostSet::parse(["not a host"]).is_err());
    }

    #[test]
    fn test_deny_wins() {
        let filter = HostFilter::new(Some(set(&["example.com"])), Some(set(&["bad.example.com"])));
        assert!(filter.accepts(&host("good.example.com")));
        assert!(!filter.accepts(&host("bad.example.com")));
        assert!(!filter.accepts(&host("other.com")));
    }

    #[test]
    fn test_pass_through_and_empty_allow() {
        let filter = HostFilter::default();
        assert!(filter.is_pass_through());
        assert!(filter.accepts(&host("anything.org")));

        let nothing = filter.with_allowed(Some(HostSet::default()));
        assert!(!nothing.accepts(&host("anything.org")));
        assert!(filter.accepts(&host("anything.org")));
    }
}

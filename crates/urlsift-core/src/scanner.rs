//! Single-pass URL scanner.
//!
//! The scanner walks the text left to right looking for anchors: an
//! accepted scheme (`https://`, `ftp:`) or, unless a scheme is required, a
//! host-shaped token at a word boundary. From an anchor it runs a small
//! state machine over the URL grammar, always taking the longest legal run
//! for each component, validates the host and port, trims trailing
//! punctuation and yields a [`CandidateSpan`].
//!
//! A rejected anchor moves the search one character forward, except that a
//! rejected `scheme://` anchor skips its whole authority run so no host is
//! carved out of it. An accepted anchor moves the search past the candidate.
//! No region is scanned more than a bounded number of times, so the pass is
//! linear in the input length.
//!
//! Characters outside the ASCII URL tables end a URL and count as word
//! boundaries, which lets URLs be found in text written without spaces.
//!
//! ```rust
//! use urlsift_core::DetectorOptions;
//! use urlsift_core::scanner::Scanner;
//!
//! let text = "docs at https://example.com/guide, mirror at example.org.";
//! let spans: Vec<_> = Scanner::new(text, DetectorOptions::default())
//!     .map(|span| &text[span.start..span.end])
//!     .collect();
//! assert_eq!(spans, ["https://example.com/guide", "example.org"]);
//! ```

use std::fmt;

use tracing::trace;

use crate::chars::{
    is_bracket, is_host_char, is_host_label_char, is_pchar, is_percent_encoded_triple,
    is_scheme_char, is_unreserved, is_userinfo_char,
};
use crate::host::{Host, HostKind, validate_host, validate_ipv6};
use crate::options::DetectorOptions;
use crate::trim::trim_trailing;

/// Schemes that start a URL. Matching is case-insensitive.
pub const SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "sftp", "ws", "wss"];

/// A URL found in text, with its components borrowed from the input.
///
/// Offsets are byte positions into the scanned text; `end` is already
/// trimmed of trailing punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpan<'a> {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// The scheme as written, when the text had one.
    pub scheme: Option<&'a str>,
    /// Userinfo before the `@`, without the `@`.
    pub userinfo: Option<&'a str>,
    /// Host as written (IPv6 literals keep their brackets).
    pub host_text: &'a str,
    /// The validated host.
    pub host: Host,
    /// Port number, when present.
    pub port: Option<u16>,
    /// Path including its leading `/`; empty when absent.
    pub path: &'a str,
    /// Query without the leading `?`.
    pub query: Option<&'a str>,
    /// Fragment without the leading `#`.
    pub fragment: Option<&'a str>,
}

impl CandidateSpan<'_> {
    /// Whether the source text carried an explicit scheme.
    pub const fn has_explicit_scheme(&self) -> bool {
        self.scheme.is_some()
    }
}

/// Why an anchor did not produce a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    NoAnchor,
    EmptyHost,
    InvalidHost,
    InvalidPort,
    NotDelimited,
    EmailAddress,
    SingleLevelWithoutPath,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoAnchor => "no anchor",
            Self::EmptyHost => "empty host",
            Self::InvalidHost => "invalid host",
            Self::InvalidPort => "invalid port",
            Self::NotDelimited => "host runs into a non-delimiter",
            Self::EmailAddress => "e-mail address",
            Self::SingleLevelWithoutPath => "single-label host without port or path",
        })
    }
}

/// Scanner states, one per URL component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scheme,
    AuthorityUserinfo,
    AuthorityHost,
    AuthorityPort,
    Path,
    Query,
    Fragment,
    Done,
}

/// Extent of the last userinfo look-ahead run and the rightmost `@` in it.
///
/// Every anchor inside one run shares the run's end, so the look-ahead is
/// done once per run instead of once per anchor.
#[derive(Debug, Clone, Copy)]
struct RunCache {
    start: usize,
    end: usize,
    last_at: Option<usize>,
}

/// Component pieces collected while the state machine runs.
#[derive(Debug, Default)]
struct Parts<'a> {
    scheme: Option<&'a str>,
    userinfo: Option<&'a str>,
    host: Option<(&'a str, Host)>,
    port: Option<u16>,
    /// End of the host or port digits; trimming never cuts below it.
    authority_end: usize,
    /// Start of path, query and fragment (after an empty port's `:`).
    tail_start: usize,
}

/// Iterator over the URL candidates in a text.
#[derive(Debug)]
pub struct Scanner<'a> {
    text: &'a str,
    options: DetectorOptions,
    pos: usize,
    run_cache: Option<RunCache>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `text`.
    pub const fn new(text: &'a str, options: DetectorOptions) -> Self {
        Self {
            text,
            options,
            pos: 0,
            run_cache: None,
        }
    }

    /// Whether a schemeless authority may end right before `i`.
    fn bare_authority_ends_at(&self, i: usize) -> Result<(), Rejection> {
        match self.char_at(i) {
            Some('@') => Err(Rejection::EmailAddress),
            Some(c) if !is_token_boundary(c) && !matches!(c, '/' | ':' | '?' | '#' | '.') => {
                Err(Rejection::NotDelimited)
            },
            _ => Ok(()),
        }
    }

    fn char_at(&self, i: usize) -> Option<char> {
        self.text.get(i..)?.chars().next()
    }

    fn char_before(&self, i: usize) -> Option<char> {
        self.text.get(..i)?.chars().next_back()
    }

    fn is_anchor_position(&self, i: usize) -> bool {
        self.char_before(i).is_none_or(is_token_boundary)
    }

    /// Characters that end a URL regardless of component.
    fn is_delimiter_by_option(&self, c: char) -> bool {
        (self.options.brackets_delimit() && is_bracket(c))
            || (self.options.single_quotes_delimit() && c == '\'')
    }

    /// If an accepted scheme starts at `start`, returns the end of the
    /// scheme and the start of the authority.
    fn scheme_at(&self, start: usize) -> Option<(usize, usize)> {
        let rest = &self.text[start..];
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let scheme_len = rest.find(|c: char| !is_scheme_char(c))?;
        if !rest[scheme_len..].starts_with(':') {
            return None;
        }
        let scheme = &rest[..scheme_len];
        if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
            return None;
        }

        let scheme_end = start + scheme_len;
        let after_colon = scheme_end + 1;
        if self.text[after_colon..].starts_with("//") {
            return Some((scheme_end, after_colon + 2));
        }
        // `scheme:host` without slashes
        self.char_at(after_colon)
            .filter(|&c| is_host_label_char(c))
            .map(|_| (scheme_end, after_colon))
    }

    /// Position of the rightmost `@` in the userinfo run starting at `start`.
    fn userinfo_at(&mut self, start: usize) -> Option<usize> {
        if let Some(cache) = self.run_cache {
            if cache.start <= start && start < cache.end {
                return cache.last_at.filter(|&at| at >= start);
            }
        }

        let bytes = self.text.as_bytes();
        let mut i = start;
        let mut last_at = None;
        while let Some(c) = self.char_at(i) {
            let legal = match c {
                '@' => {
                    last_at = Some(i);
                    true
                },
                '%' => is_percent_encoded_triple(bytes, i),
                _ => is_userinfo_char(c) && !self.is_delimiter_by_option(c),
            };
            if !legal {
                break;
            }
            i += c.len_utf8();
        }

        self.run_cache = Some(RunCache {
            start,
            end: i,
            last_at,
        });
        last_at
    }

    /// End of the host starting at `start`.
    fn host_end(&self, start: usize, explicit: bool) -> Result<usize, Rejection> {
        let rest = &self.text[start..];
        if rest.starts_with('[') {
            if !explicit {
                return Err(Rejection::InvalidHost);
            }
            let close = rest
                .find(|c: char| !(c.is_ascii_hexdigit() || matches!(c, '[' | ':' | '.')))
                .filter(|&i| rest[i..].starts_with(']'))
                .ok_or(Rejection::InvalidHost)?;
            return Ok(start + close + 1);
        }

        let run = rest.find(|c: char| !is_host_char(c)).unwrap_or(rest.len());
        let host = rest[..run].trim_end_matches('.');
        if host.is_empty() {
            return Err(Rejection::EmptyHost);
        }
        Ok(start + host.len())
    }

    /// End of the authority-shaped run starting at `start`.
    fn authority_run_end(&self, start: usize) -> usize {
        let rest = &self.text[start..];
        rest.find(|c: char| {
            !(is_unreserved(c)
                || matches!(c, ':' | '@' | '%' | '[' | ']')
                || (!c.is_ascii() && c.is_alphanumeric()))
        })
        .map_or(self.text.len(), |i| start + i)
    }

    /// Consume component characters from `start` until one is not legal.
    ///
    /// `extra` lists structural characters legal inside this component.
    fn consume(&self, start: usize, extra: &[char]) -> usize {
        let bytes = self.text.as_bytes();
        let mut i = start;
        while let Some(c) = self.char_at(i) {
            let legal = if c == '%' {
                is_percent_encoded_triple(bytes, i)
            } else {
                (is_pchar(c) || extra.contains(&c)) && !self.is_delimiter_by_option(c)
            };
            if !legal {
                break;
            }
            i += c.len_utf8();
        }
        i
    }

    fn state_after_authority(&self, i: usize) -> Result<State, Rejection> {
        Ok(match self.char_at(i) {
            Some(':') => match self.char_at(i + 1) {
                Some(c) if c.is_ascii_digit() || matches!(c, '/' | '?' | '#') => {
                    State::AuthorityPort
                },
                Some(c) if c.is_ascii_alphanumeric() => return Err(Rejection::InvalidPort),
                _ => State::Done,
            },
            Some('/') => State::Path,
            Some('?') => State::Query,
            Some('#') => State::Fragment,
            _ => State::Done,
        })
    }

    /// Run the state machine from an anchor at `start`.
    fn scan_from(&mut self, start: usize) -> Result<CandidateSpan<'a>, Rejection> {
        let text = self.text;
        let explicit = self.scheme_at(start);
        if explicit.is_none()
            && (self.options.requires_scheme()
                || !self.char_at(start).is_some_and(is_host_label_char))
        {
            return Err(Rejection::NoAnchor);
        }

        let mut parts = Parts::default();
        let mut cursor = start;
        // schemeless candidates never carry userinfo
        let mut state = if explicit.is_some() {
            State::Scheme
        } else {
            State::AuthorityHost
        };

        loop {
            state = match state {
                State::Scheme => {
                    let (scheme_end, authority_start) = explicit.ok_or(Rejection::NoAnchor)?;
                    parts.scheme = Some(&text[start..scheme_end]);
                    cursor = authority_start;
                    State::AuthorityUserinfo
                },
                State::AuthorityUserinfo => {
                    if let Some(at) = self.userinfo_at(cursor).filter(|&at| at > cursor) {
                        parts.userinfo = Some(&text[cursor..at]);
                        cursor = at + 1;
                    }
                    State::AuthorityHost
                },
                State::AuthorityHost => {
                    let end = self.host_end(cursor, explicit.is_some())?;
                    let host_text = &text[cursor..end];
                    let host = if host_text.starts_with('[') {
                        validate_ipv6(host_text)
                    } else {
                        validate_host(host_text, self.options.allows_single_level_domain())
                    }
                    .ok_or(Rejection::InvalidHost)?;

                    if explicit.is_none() {
                        self.bare_authority_ends_at(end)?;
                    }

                    parts.host = Some((host_text, host));
                    cursor = end;
                    parts.authority_end = end;
                    parts.tail_start = end;
                    self.state_after_authority(cursor)?
                },
                State::AuthorityPort => {
                    let digits_start = cursor + 1;
                    let digits_end = text[digits_start..]
                        .find(|c: char| !c.is_ascii_digit())
                        .map_or(text.len(), |i| digits_start + i);
                    if self.char_at(digits_end).is_some_and(|c| c.is_ascii_alphanumeric()) {
                        return Err(Rejection::InvalidPort);
                    }
                    let digits = &text[digits_start..digits_end];
                    if digits.len() > 5 {
                        return Err(Rejection::InvalidPort);
                    }
                    if explicit.is_none() {
                        self.bare_authority_ends_at(digits_end)?;
                    }
                    // an empty port is the same as no port
                    if !digits.is_empty() {
                        parts.port = Some(digits.parse().map_err(|_| Rejection::InvalidPort)?);
                        parts.authority_end = digits_end;
                    }
                    cursor = digits_end;
                    parts.tail_start = digits_end;
                    match self.char_at(cursor) {
                        Some('/') => State::Path,
                        Some('?') => State::Query,
                        Some('#') => State::Fragment,
                        _ => State::Done,
                    }
                },
                State::Path => {
                    cursor = self.consume(cursor, &['/']);
                    match self.char_at(cursor) {
                        Some('?') => State::Query,
                        Some('#') => State::Fragment,
                        _ => State::Done,
                    }
                },
                State::Query => {
                    cursor = self.consume(cursor + 1, &['/', '?']);
                    if self.char_at(cursor) == Some('#') {
                        State::Fragment
                    } else {
                        State::Done
                    }
                },
                State::Fragment => {
                    cursor = self.consume(cursor + 1, &['/', '?']);
                    State::Done
                },
                State::Done => break,
            };
        }

        let (host_text, host) = parts.host.ok_or(Rejection::EmptyHost)?;
        let min_len = parts.authority_end - start;
        let mut end = start + trim_trailing(&text[start..cursor], min_len);
        // a quote that opened right before the URL closes it
        if self.char_before(start) == Some('\'')
            && end > parts.authority_end
            && text[..end].ends_with('\'')
        {
            end = start + trim_trailing(&text[start..end - 1], min_len);
        }
        let tail = text.get(parts.tail_start..end).unwrap_or_default();
        let (path, query, fragment) = split_tail(tail);

        if explicit.is_none() {
            let single_label = host.kind() == HostKind::Domain && !host.as_str().contains('.');
            if single_label && parts.port.is_none() && path.len() <= 1 && query.is_none() {
                return Err(Rejection::SingleLevelWithoutPath);
            }
        }

        Ok(CandidateSpan {
            start,
            end,
            scheme: parts.scheme,
            userinfo: parts.userinfo,
            host_text,
            host,
            port: parts.port,
            path,
            query,
            fragment,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = CandidateSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(c) = self.char_at(self.pos) {
            let start = self.pos;
            if c.is_ascii_alphanumeric() && self.is_anchor_position(start) {
                match self.scan_from(start) {
                    Ok(span) => {
                        self.pos = span.end.max(start + c.len_utf8());
                        return Some(span);
                    },
                    Err(Rejection::NoAnchor) => {},
                    Err(reason) => {
                        trace!(offset = start, %reason, "rejected URL candidate");
                        if let Some((_, authority_start)) = self.scheme_at(start) {
                            self.pos = self.authority_run_end(authority_start);
                            continue;
                        }
                    },
                }
            }
            self.pos = start + c.len_utf8();
        }
        None
    }
}

/// Whether `c` can sit directly before an anchor.
///
/// Characters that could continue a host, scheme or userinfo token are not
/// boundaries, so an anchor is never found in the middle of a word. Non-ASCII
/// characters are boundaries.
pub(crate) fn is_token_boundary(c: char) -> bool {
    !(is_host_label_char(c)
        || matches!(
            c,
            '.' | '@' | '_' | '%' | '/' | '\\' | '+' | '~' | '&' | '#' | '$' | '*'
        ))
}

/// Split the text after the authority into path, query and fragment.
fn split_tail(tail: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match tail.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (tail, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    (path, query, fragment)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::options::DetectorOption;

    fn spans(text: &str) -> Vec<&str> {
        spans_with(text, DetectorOptions::default())
    }

    fn spans_with(text: &str, options: DetectorOptions) -> Vec<&str> {
        Scanner::new(text, options)
            .map(|span| &text[span.start..span.end])
            .collect()
    }

    fn single(text: &str) -> CandidateSpan<'_> {
        let mut all: Vec<_> = Scanner::new(text, DetectorOptions::default()).collect();
        assert_eq!(all.len(), 1, "expected exactly one candidate in {text:?}");
        all.remove(0)
    }

    #[test]
    fn test_full_component_breakdown() {
        let span = single("go to https://user:pw@Example.com:8443/a/b?x=1&y=2#top now");
        assert_eq!(span.scheme, Some("https"));
        assert_eq!(span.userinfo, Some("user:pw"));
        assert_eq!(span.host_text, "Example.com");
        assert_eq!(span.host.as_str(), "example.com");
        assert_eq!(span.port, Some(8443));
        assert_eq!(span.path, "/a/b");
        assert_eq!(span.query, Some("x=1&y=2"));
        assert_eq!(span.fragment, Some("top"));
        assert!(span.has_explicit_scheme());
    }

    #[test]
    fn test_schemeless_anchor() {
        let span = single("visit example.com today");
        assert_eq!(span.scheme, None);
        assert_eq!(span.host.as_str(), "example.com");
        assert_eq!(span.path, "");
        assert_eq!(spans("www.example.org/docs"), ["www.example.org/docs"]);
    }

    #[test]
    fn test_strict_ignores_bare_hosts() {
        let strict = DetectorOptions::from(DetectorOption::Strict);
        assert!(spans_with("visit example.com today", strict).is_empty());
        assert_eq!(
            spans_with("visit http://example.com today", strict),
            ["http://example.com"]
        );
    }

    #[test]
    fn test_scheme_without_slashes() {
        let span = single("see https:example.com/x");
        assert_eq!(span.scheme, Some("https"));
        assert_eq!(span.path, "/x");
    }

    #[test]
    fn test_unknown_scheme_is_not_an_anchor() {
        assert!(spans("gopher://example").is_empty());
        assert!(spans("javascript:void(0)").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        assert_eq!(spans("See https://example.com/page."), ["https://example.com/page"]);
        assert_eq!(spans("(https://example.com/path)"), ["https://example.com/path"]);
        assert_eq!(spans("https://example.com/a(b)"), ["https://example.com/a(b)"]);
        assert_eq!(spans("Visit example.com."), ["example.com"]);
        assert_eq!(spans("is it example.com?"), ["example.com"]);
    }

    #[test]
    fn test_bracket_match_option() {
        let options = DetectorOptions::from(DetectorOption::BracketMatch);
        assert_eq!(
            spans_with("https://example.com/a(b)", options),
            ["https://example.com/a"]
        );
    }

    #[test]
    fn test_single_quote_option() {
        let text = "href='https://example.com/it's'";
        assert_eq!(spans(text), ["https://example.com/it's"]);
        let options = DetectorOptions::from(DetectorOption::SingleQuoteMatch);
        assert_eq!(spans_with(text, options), ["https://example.com/it"]);
    }

    #[test]
    fn test_userinfo_uses_rightmost_at() {
        let span = single("http://a@b@example.com/");
        assert_eq!(span.userinfo, Some("a@b"));
        assert_eq!(span.host.as_str(), "example.com");
    }

    #[test]
    fn test_email_addresses_are_not_urls() {
        assert!(spans("mail foo@example.com please").is_empty());
        assert!(spans("contact me at foo@bar").is_empty());
        assert_eq!(spans("ftp://foo@example.com"), ["ftp://foo@example.com"]);
    }

    #[test]
    fn test_ports() {
        assert_eq!(single("http://192.168.1.1:8080/x").port, Some(8080));
        assert!(spans("http://example.com:99999/").is_empty());
        assert!(spans("http://example.com:80abc").is_empty());
        assert!(spans("example.com:port").is_empty());
        assert_eq!(spans("at example.com: the best"), ["example.com"]);
    }

    #[test]
    fn test_ipv6_requires_scheme() {
        let span = single("http://[2001:db8::1]:8080/");
        assert_eq!(span.host_text, "[2001:db8::1]");
        assert_eq!(span.host.to_string(), "[2001:db8::1]");
        assert_eq!(span.port, Some(8080));
        assert!(spans("[2001:db8::1]").is_empty());
        assert!(spans("http://[zz::1]/").is_empty());
    }

    #[test]
    fn test_single_level_domains() {
        assert!(spans("http://localhost:3000/").is_empty());
        let options = DetectorOptions::from(DetectorOption::AllowSingleLevelDomain);
        assert_eq!(
            spans_with("http://localhost:3000/", options),
            ["http://localhost:3000/"]
        );
        assert_eq!(spans_with("run localhost:3000 now", options), ["localhost:3000"]);
        assert!(spans_with("hello world", options).is_empty());
    }

    #[test]
    fn test_no_anchor_inside_words() {
        assert!(spans("version 1.2.3 shipped").is_empty());
        assert!(spans("foo_example.com").is_empty());
        assert!(spans("e.g. this").is_empty());
    }

    #[test]
    fn test_resumes_after_failed_anchor() {
        assert_eq!(spans("note:example.com"), ["example.com"]);
        assert_eq!(spans("a.com,b.org"), ["a.com", "b.org"]);
    }

    #[test]
    fn test_invalid_percent_ends_component() {
        assert_eq!(spans("http://example.com/a%zz"), ["http://example.com/a"]);
        assert_eq!(spans("http://example.com/a%20b"), ["http://example.com/a%20b"]);
    }

    #[test]
    fn test_unsupported_scheme_is_not_userinfo() {
        assert!(spans("write to mailto:foo@example.com please").is_empty());
        assert!(spans("tel:555@example.com").is_empty());
        assert!(spans("login user:pw@example.com/admin").is_empty());

        let lenient = DetectorOptions::from(DetectorOption::AllowSingleLevelDomain);
        assert!(spans_with("write to mailto:foo@example.com please", lenient).is_empty());
        assert!(spans_with("tel:555@example.com", lenient).is_empty());
    }

    #[test]
    fn test_schemeless_spans_have_no_userinfo() {
        let text = "mailto:foo@example.com, then example.org/x";
        let found: Vec<_> = Scanner::new(text, DetectorOptions::default()).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].userinfo, None);
        assert_eq!(found[0].host.as_str(), "example.org");
    }

    #[test]
    fn test_empty_port() {
        let span = single("http://example.com:/path");
        assert_eq!(&"http://example.com:/path"[span.start..span.end], "http://example.com:/path");
        assert_eq!(span.port, None);
        assert_eq!(span.path, "/path");

        assert_eq!(spans("http://example.com:?q=1"), ["http://example.com:?q=1"]);
        assert_eq!(spans("at example.com:/docs now"), ["example.com:/docs"]);
        assert_eq!(spans("is it http://example.com:?"), ["http://example.com"]);
        assert_eq!(spans("see http://example.com:."), ["http://example.com"]);
    }

    #[test]
    fn test_rejected_scheme_anchor_leaves_no_host_behind() {
        assert!(spans("http://evil.com:80abc.example.com").is_empty());
        assert!(spans("https://evil.com:99999.example.com/x").is_empty());
        assert_eq!(
            spans("http://evil.com:80abc.example.com and example.org"),
            ["example.org"]
        );
    }

    #[test]
    fn test_non_ascii_text_ends_and_separates_urls() {
        assert_eq!(spans("请访问example.com了解更多"), ["example.com"]);
        assert_eq!(
            spans("見てくださいhttps://example.com/ページ。"),
            ["https://example.com/"]
        );
        assert_eq!(spans("端口example.com:8080。"), ["example.com:8080"]);
        assert_eq!(spans("Grüße von example.org/ü"), ["example.org/"]);
    }

    #[test]
    fn test_internationalized_hosts_need_punycode() {
        assert!(spans("siehe https://bücher.de/straße!").is_empty());
        assert_eq!(
            spans("siehe https://xn--bcher-kva.de/stra%C3%9Fe!"),
            ["https://xn--bcher-kva.de/stra%C3%9Fe"]
        );
    }

    #[test]
    fn test_split_tail() {
        assert_eq!(split_tail("/p?q#f"), ("/p", Some("q"), Some("f")));
        assert_eq!(split_tail("?a?b"), ("", Some("a?b"), None));
        assert_eq!(split_tail("#f?x"), ("", None, Some("f?x")));
        assert_eq!(split_tail(""), ("", None, None));
    }
}

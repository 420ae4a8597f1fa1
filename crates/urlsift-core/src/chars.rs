//! Character classes of the URL generic syntax.
//!
//! Every component of the scanner consults these predicates, so a character
//! is either legal everywhere it is expected or nowhere. The tables are the
//! ASCII ranges of RFC 3986; any other character, non-ASCII included, ends
//! the component it appears in. Internationalized hosts are recognized in
//! their `xn--` form.

/// `ALPHA / DIGIT / "-" / "." / "_" / "~"`
#[must_use]
pub const fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// `"!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="`
#[must_use]
pub const fn is_sub_delim(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// Characters allowed inside a single domain label.
#[must_use]
pub const fn is_host_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Characters that may appear in a host token, label separators included.
#[must_use]
pub const fn is_host_char(c: char) -> bool {
    c == '.' || is_host_label_char(c)
}

/// Characters allowed in a scheme after its leading letter.
#[must_use]
pub const fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

/// Characters allowed in the userinfo component (`%` is checked separately).
#[must_use]
pub const fn is_userinfo_char(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || c == ':'
}

/// Path characters: `unreserved / pct-encoded / sub-delims / ":" / "@"`.
///
/// The `%` sign is accepted here; callers validate the triple with
/// [`is_percent_encoded_triple`].
#[must_use]
pub const fn is_pchar(c: char) -> bool {
    is_unreserved(c) || is_sub_delim(c) || matches!(c, ':' | '@' | '%')
}

/// Whether `bytes[i..i + 3]` is a `%XX` escape with two hex digits.
#[must_use]
pub fn is_percent_encoded_triple(bytes: &[u8], i: usize) -> bool {
    matches!(
        bytes.get(i..i + 3),
        Some([b'%', hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
    )
}

/// Brackets that pair up inside a URL: `(`/`)`, `[`/`]`, `{`/`}`.
#[must_use]
pub const fn is_bracket(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Opening counterpart of a closing bracket.
#[must_use]
pub const fn opener_for(c: char) -> Option<char> {
    match c {
        ')' => Some('('),
        ']' => Some('['),
        '}' => Some('{'),
        _ => None,
    }
}

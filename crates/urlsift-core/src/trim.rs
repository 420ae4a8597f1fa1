//! Trailing punctuation trimming.
//!
//! A URL that ends a sentence or sits inside parentheses picks up characters
//! that are legal URL characters on their own but belong to the prose around
//! it. Trimming walks back from the end of a span and drops them until it
//! reaches a character that has to stay.

use crate::chars::opener_for;

/// Punctuation that never ends a URL.
const SENTENCE_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Running open/close counts for the characters that must balance.
#[derive(Debug, Default)]
struct Balance {
    parens: (usize, usize),
    squares: (usize, usize),
    braces: (usize, usize),
    single_quotes: usize,
    double_quotes: usize,
}

impl Balance {
    fn of(span: &str) -> Self {
        let mut balance = Self::default();
        for c in span.chars() {
            balance.count(c, 1);
        }
        balance
    }

    fn pair_mut(&mut self, c: char) -> Option<&mut (usize, usize)> {
        match c {
            '(' | ')' => Some(&mut self.parens),
            '[' | ']' => Some(&mut self.squares),
            '{' | '}' => Some(&mut self.braces),
            _ => None,
        }
    }

    fn count(&mut self, c: char, delta: isize) {
        let apply = |n: &mut usize| *n = n.saturating_add_signed(delta);
        match c {
            '\'' => apply(&mut self.single_quotes),
            '"' => apply(&mut self.double_quotes),
            '(' | '[' | '{' => {
                if let Some(pair) = self.pair_mut(c) {
                    apply(&mut pair.0);
                }
            },
            ')' | ']' | '}' => {
                if let Some(pair) = self.pair_mut(c) {
                    apply(&mut pair.1);
                }
            },
            _ => {},
        }
    }

    /// A closer with more closers than openers in the span is unmatched.
    fn is_unmatched_closer(&mut self, c: char) -> bool {
        opener_for(c).is_some()
            && self
                .pair_mut(c)
                .is_some_and(|(open, close)| *close > *open)
    }

    fn is_unmatched_quote(&self, c: char) -> bool {
        match c {
            '\'' => self.single_quotes % 2 == 1,
            '"' => self.double_quotes % 2 == 1,
            _ => false,
        }
    }
}

/// Length of `span` once trailing sentence punctuation is removed.
///
/// Never retracts below `min_len`, which protects the scheme and authority.
/// Strips `. , ; : ! ?` unconditionally, closing brackets that have no
/// opener inside the span, and quotes whose count in the span is odd.
///
/// ```rust
/// use urlsift_core::trim::trim_trailing;
///
/// let span = "https://example.com/page).";
/// assert_eq!(&span[..trim_trailing(span, 19)], "https://example.com/page");
///
/// let balanced = "https://example.com/a(b)";
/// assert_eq!(trim_trailing(balanced, 19), balanced.len());
/// ```
pub fn trim_trailing(span: &str, min_len: usize) -> usize {
    let mut balance = Balance::of(span);
    let mut len = span.len();

    while len > min_len {
        let Some(last) = span[..len].chars().next_back() else {
            break;
        };
        let strip = SENTENCE_PUNCTUATION.contains(&last)
            || balance.is_unmatched_closer(last)
            || balance.is_unmatched_quote(last);
        if !strip {
            break;
        }
        balance.count(last, -1);
        len -= last.len_utf8();
    }

    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimmed(span: &str, min_len: usize) -> &str {
        &span[..trim_trailing(span, min_len)]
    }

    #[test]
    fn test_strips_sentence_punctuation() {
        assert_eq!(trimmed("example.com/page.", 11), "example.com/page");
        assert_eq!(trimmed("example.com/page?!", 11), "example.com/page");
        assert_eq!(trimmed("example.com/a,;:", 11), "example.com/a");
    }

    #[test]
    fn test_unmatched_closer_is_stripped() {
        assert_eq!(trimmed("example.com/path)", 11), "example.com/path");
        assert_eq!(trimmed("example.com/path))", 11), "example.com/path");
        assert_eq!(trimmed("example.com/path).", 11), "example.com/path");
        assert_eq!(trimmed("example.com/path]", 11), "example.com/path");
    }

    #[test]
    fn test_balanced_closer_is_kept() {
        assert_eq!(trimmed("example.com/a(b)", 11), "example.com/a(b)");
        assert_eq!(trimmed("example.com/a(b)).", 11), "example.com/a(b)");
        let wiki = "example.com/wiki/Rust_(language)";
        assert_eq!(trimmed(wiki, 11), wiki);
    }

    #[test]
    fn test_quotes() {
        assert_eq!(trimmed("example.com/it's", 11), "example.com/it's");
        assert_eq!(trimmed("example.com/page'", 11), "example.com/page");
        assert_eq!(trimmed("example.com/'quoted'", 11), "example.com/'quoted'");
    }

    #[test]
    fn test_never_retracts_into_authority() {
        assert_eq!(trimmed("example.com", 11), "example.com");
        assert_eq!(trimmed("example.com/", 11), "example.com/");
        assert_eq!(trimmed("example.com?", 11), "example.com");
    }

    #[test]
    fn test_stops_at_first_ineligible_character() {
        assert_eq!(trimmed("example.com/a.b.", 11), "example.com/a.b");
        assert_eq!(trimmed("example.com/%20.", 11), "example.com/%20");
    }
}

//! Report tokenization
//!
//! Breaks a raw report into whitespace-delimited tokens, locates the `RMK`
//! boundary, and joins a mixed-number visibility (`1 1/2SM`) back into a
//! single token so every group reaches the classifier as exactly one token.

use std::borrow::Cow;

use crate::constants::{REMARKS_MARKER, VISIBILITY_SUFFIX};
use crate::error::{MetarError, Result};

/// Ordered tokens of one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Cow<'a, str>>,
    remarks_index: Option<usize>,
}

impl<'a> TokenStream<'a> {
    /// All tokens, including the `RMK` marker and the remarks
    pub fn tokens(&self) -> &[Cow<'a, str>] {
        &self.tokens
    }

    /// Position of the `RMK` token, if present
    pub fn remarks_index(&self) -> Option<usize> {
        self.remarks_index
    }

    /// Tokens before the remarks boundary
    pub fn body(&self) -> &[Cow<'a, str>] {
        match self.remarks_index {
            Some(index) => &self.tokens[..index],
            None => &self.tokens,
        }
    }

    /// Remarks text after `RMK`, tokens rejoined by single spaces
    pub fn remarks(&self) -> Option<String> {
        self.remarks_index
            .map(|index| self.tokens[index + 1..].join(" "))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split a raw report into a token stream
pub fn split(raw: &str) -> Result<TokenStream<'_>> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(MetarError::EmptyInput);
    }

    let boundary = tokens.iter().position(|t| *t == REMARKS_MARKER);
    let (body, remarks) = match boundary {
        Some(index) => tokens.split_at(index),
        None => (tokens.as_slice(), &[][..]),
    };

    let mut merged = merge_mixed_visibility(body);
    let remarks_index = boundary.map(|_| merged.len());
    merged.extend(remarks.iter().map(|t| Cow::Borrowed(*t)));

    Ok(TokenStream {
        tokens: merged,
        remarks_index,
    })
}

/// Join a bare whole number with a following fractional visibility token
///
/// `["2", "1/4SM"]` becomes `["2 1/4SM"]`. Only the body of a report is
/// passed here; remarks are never merged.
pub fn merge_mixed_visibility<'a>(tokens: &[&'a str]) -> Vec<Cow<'a, str>> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        match tokens.get(i + 1) {
            Some(next) if is_bare_integer(token) && is_fraction_visibility(next) => {
                merged.push(Cow::Owned(format!("{} {}", token, next)));
                i += 2;
            }
            _ => {
                merged.push(Cow::Borrowed(token));
                i += 1;
            }
        }
    }

    merged
}

fn is_bare_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// `N/DSM` with no qualifier prefix
fn is_fraction_visibility(token: &str) -> bool {
    match token.strip_suffix(VISIBILITY_SUFFIX) {
        Some(value) => match value.split_once('/') {
            Some((numerator, denominator)) => {
                is_bare_integer(numerator) && is_bare_integer(denominator)
            }
            None => false,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fraction_visibility() {
        assert!(is_fraction_visibility("1/2SM"));
        assert!(is_fraction_visibility("3/16SM"));
        assert!(!is_fraction_visibility("10SM"));
        assert!(!is_fraction_visibility("M1/4SM"));
        assert!(!is_fraction_visibility("05/01"));
    }

    #[test]
    fn test_is_bare_integer() {
        assert!(is_bare_integer("1"));
        assert!(is_bare_integer("10"));
        assert!(!is_bare_integer(""));
        assert!(!is_bare_integer("10SM"));
    }
}

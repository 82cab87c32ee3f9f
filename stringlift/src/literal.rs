//! Quoted-literal detection and substitution-marker extraction on a single
//! source line.
//!
//! Detection is regex-based on one line of text, not AST-based; the pattern
//! matches the first double- or single-quoted run on the line.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Double-quoted form is tried first, mirroring the order literals are
    // usually written in Dart sources.
    static ref LITERAL_REGEX: Regex = Regex::new(r#"(".*"|'.*')"#).unwrap();
    static ref MARKER_REGEX: Regex = Regex::new(r"\$[^ ]+").unwrap();
}

/// The first quoted literal found on a source line.
///
/// `start..end` is the byte range of the full literal within the line,
/// quote characters included. `inner` is the text between the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralMatch {
    /// Byte offset of the opening quote.
    pub start: usize,
    /// Byte offset one past the closing quote.
    pub end: usize,
    /// Content between the quotes.
    pub inner: String,
}

impl LiteralMatch {
    /// Length of the full literal, quotes included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds the first quoted literal on `line`, if any.
pub fn find_literal(line: &str) -> Option<LiteralMatch> {
    let m = LITERAL_REGEX.find(line)?;
    let full = m.as_str();
    // Inner range excludes exactly the first and last character (the quotes).
    let inner = full[1..full.len() - 1].to_string();
    Some(LiteralMatch {
        start: m.start(),
        end: m.end(),
        inner,
    })
}

/// A `$`-prefixed variable reference embedded inside a literal's text,
/// e.g. `$name` or `${count}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    token: String,
}

impl Marker {
    /// The matched token, leading `$` included.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The token with its leading `$` and any enclosing braces stripped,
    /// suitable as an accessor-call argument.
    pub fn argument_name(&self) -> String {
        self.token
            .chars()
            .filter(|c| !matches!(c, '$' | '{' | '}'))
            .collect()
    }
}

/// Finds the first substitution marker in a literal's inner text: a `$`
/// followed by a contiguous run of non-space characters.
pub fn find_marker(inner: &str) -> Option<Marker> {
    MARKER_REGEX.find(inner).map(|m| Marker {
        token: m.as_str().to_string(),
    })
}

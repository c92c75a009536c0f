//! Minimal inline `**bold**` emphasis segmentation.
//!
//! The webhook marks emphasised words with doubled asterisks. This module
//! splits a rhyme into alternating plain/emphasised segments; the result
//! card renders emphasised segments as `<strong>`. Nested emphasis is not
//! supported and unbalanced markers stay plain text verbatim.

#[cfg(test)]
#[path = "emphasis_test.rs"]
mod emphasis_test;

/// A run of text with a single emphasis flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            emphasized: true,
        }
    }
}

/// Split `text` on balanced `**…**` pairs.
///
/// A pair counts only when the delimited run is non-empty and contains no
/// further `*`. Everything else — unbalanced markers, empty `****` pairs,
/// line breaks — passes through as plain text verbatim.
#[must_use]
pub fn parse_emphasis(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(rel_open) = text[cursor..].find("**") {
        let open = cursor + rel_open;
        let body_start = open + 2;
        let Some(rel_close) = text[body_start..].find("**") else {
            break;
        };
        let close = body_start + rel_close;
        let inner = &text[body_start..close];
        if inner.is_empty() || inner.contains('*') {
            // Not a balanced pair; the closing marker may still open a
            // later pair, so resume scanning from it.
            cursor = close;
        } else {
            if plain_start < open {
                segments.push(Segment::plain(&text[plain_start..open]));
            }
            segments.push(Segment::emphasized(inner));
            plain_start = close + 2;
            cursor = plain_start;
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

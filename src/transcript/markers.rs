//! Prompt marker scanning
//!
//! A transcript line is classified by the markers it carries: the primary
//! prompt `>>>`, its HTML-entity-escaped form (pages captured from rendered
//! HTML keep the escaped text), and the continuation prompt `...`.
//!
//! Scanning uses a vanilla logos lexer. Markers are searched positionally,
//! not only at column 0, because captured transcripts may carry accidental
//! leading text before the prompt. When a line contains markers of more
//! than one kind, the escaped form wins over the raw form (a raw `>>>`
//! inside an escaped line is a low-confidence match), and `...` is
//! considered last.

use logos::Logos;
use std::ops::Range;

/// The HTML-entity-escaped spelling of `>>>`.
pub const ESCAPED_PROMPT: &str = "&gt;&gt;&gt;";

/// The raw primary prompt.
pub const PROMPT: &str = ">>>";

/// The continuation prompt.
pub const CONTINUATION: &str = "...";

/// A prompt/continuation marker token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    #[token("&gt;&gt;&gt;")]
    EscapedPrompt,

    #[token(">>>")]
    Prompt,

    #[token("...")]
    Continuation,
}

/// Find the marker that governs a line, with its byte range.
///
/// Returns the first occurrence of the highest-priority marker present:
/// escaped `>>>` before raw `>>>` before `...`. Returns `None` for lines
/// with no marker at all (output lines in a captured session).
pub fn find_marker(line: &str) -> Option<(Marker, Range<usize>)> {
    let mut hits: Vec<(Marker, Range<usize>)> = Vec::new();
    for (result, span) in Marker::lexer(line).spanned() {
        if let Ok(marker) = result {
            hits.push((marker, span));
        }
    }

    for wanted in [Marker::EscapedPrompt, Marker::Prompt, Marker::Continuation] {
        if let Some((marker, span)) = hits.iter().find(|(m, _)| *m == wanted) {
            return Some((*marker, span.clone()));
        }
    }
    None
}

/// Whether any line of `text` carries a marker.
pub fn contains_marker(text: &str) -> bool {
    Marker::lexer(text)
        .spanned()
        .any(|(result, _)| result.is_ok())
}

//! The transcript-to-clean-code transform
//!
//! Reconstructs a runnable code listing from an interactive-session
//! transcript without a Python tokenizer: every line is classified on its
//! own by the marker it carries.
//!
//! Caveat: a stripped line carries no marker, so feeding the output of
//! `strip` back into `strip` classifies everything as session output and
//! deletes it. `strip` is not chainable on its own output; callers must
//! always restripe from the cached original text (see
//! [`BlockRegistry`](crate::transcript::registry::BlockRegistry)).

use crate::transcript::markers::{find_marker, CONTINUATION, ESCAPED_PROMPT, PROMPT};

/// How a single transcript line is handled by [`strip`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind {
    /// Trimmed content is exactly a marker: stands for a blank line in the
    /// original snippet.
    BareMarker,
    /// No marker anywhere: printed output from the session, dropped.
    Output,
    /// A prompted statement; carries the statement body.
    Source(String),
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed == PROMPT || trimmed == ESCAPED_PROMPT || trimmed == CONTINUATION {
        return LineKind::BareMarker;
    }

    let Some((_, span)) = find_marker(line) else {
        return LineKind::Output;
    };

    // Everything up to and including the marker goes; one conventional
    // space after the prompt goes too, further indentation is real.
    let rest = &line[span.end..];
    let body = rest.strip_prefix(' ').unwrap_or(rest);
    if body.trim().is_empty() {
        LineKind::Output
    } else {
        LineKind::Source(body.to_string())
    }
}

/// Strip prompts and session output from a transcript.
///
/// - bare-marker lines become empty lines (blank-line structure survives);
/// - lines without any marker are session output and are removed;
/// - marked lines lose the marker, everything before it, and at most one
///   space after it.
///
/// Total over all inputs; `strip("")` is `""`.
pub fn strip(text: &str) -> String {
    let mut kept: Vec<String> = Vec::new();
    for line in text.lines() {
        match classify(line) {
            LineKind::BareMarker => kept.push(String::new()),
            LineKind::Output => {}
            LineKind::Source(body) => kept.push(body),
        }
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_session() {
        let input = ">>> x = 1\n>>> y = 2\n3\n... print(x+y)";
        assert_eq!(strip(input), "x = 1\ny = 2\nprint(x+y)");
    }

    #[test]
    fn test_escaped_prompt() {
        assert_eq!(strip("&gt;&gt;&gt; x = 1"), "x = 1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(strip(""), "");
    }

    #[test]
    fn test_bare_markers_keep_blank_lines() {
        let input = ">>> def f():\n...     return 1\n...\n>>> f()\n1";
        assert_eq!(strip(input), "def f():\n    return 1\n\nf()");
    }

    #[test]
    fn test_single_space_after_prompt_removed() {
        // One space is the prompt convention; the rest is indentation.
        assert_eq!(strip("...     return 1"), "    return 1");
        assert_eq!(strip(">>> x"), "x");
    }

    #[test]
    fn test_marker_not_at_column_zero() {
        assert_eq!(strip("  >>> x = 1"), "x = 1");
    }

    #[test]
    fn test_marked_line_with_blank_body_dropped() {
        // ">>> " trims to a bare marker and yields a blank line, but a
        // marker followed by only whitespace beyond that one space is noise.
        assert_eq!(strip(">>> \n>>> x = 1"), "\nx = 1");
        assert_eq!(strip("lead >>>   \n>>> x = 1"), "x = 1");
    }

    #[test]
    fn test_output_only_transcript_strips_to_empty() {
        assert_eq!(strip("Traceback (most recent call last):\n  boom"), "");
    }

    #[test]
    fn test_no_trailing_newline_added() {
        assert_eq!(strip(">>> x = 1\n"), "x = 1");
    }
}

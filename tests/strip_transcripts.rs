//! Unit tests for the transcript-to-clean-code transform
//!
//! Content comes from the verified samples in `transcript::testing`; edge
//! cases around marker spelling and spacing are parameterized with rstest.

use docstrip::transcript::strip::strip;
use docstrip::transcript::testing::Samples;
use rstest::rstest;

#[test]
fn test_basic_session_drops_output_and_prompts() {
    let input = Samples::get_str("session-basic").unwrap();
    assert_eq!(strip(input), "x = 1\ny = 2\nprint(x+y)");
}

#[test]
fn test_escaped_session() {
    let input = Samples::get_str("session-escaped").unwrap();
    assert_eq!(strip(input), "x = 1\nx");
}

#[test]
fn test_definition_keeps_blank_line_structure() {
    let input = Samples::get_str("session-def").unwrap();
    assert_eq!(strip(input), "def f():\n    return 1\n\nf()");
}

#[test]
fn test_output_only_strips_to_empty() {
    let input = Samples::get_str("session-output-only").unwrap();
    assert_eq!(strip(input), "");
}

#[test]
fn test_empty_input() {
    assert_eq!(strip(""), "");
}

#[rstest]
// One conventional space after the marker goes; deeper indentation stays.
#[case(">>> x = 1", "x = 1")]
#[case(">>>  x = 1", " x = 1")]
#[case("...     return 1", "    return 1")]
// Markers need not sit at column 0.
#[case("  >>> x = 1", "x = 1")]
#[case("noise >>> x = 1", "x = 1")]
// Escaped prompt, including one with a raw >>> later in the line.
#[case("&gt;&gt;&gt; x = 1", "x = 1")]
#[case("&gt;&gt;&gt; print('>>>')", "print('>>>')")]
// Bare markers stand for blank lines.
#[case(">>>", "")]
#[case("...", "")]
#[case("&gt;&gt;&gt;", "")]
fn test_single_line_cases(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(strip(input), expected);
}

#[rstest]
// Unmarked lines are session output, dropped wherever they appear.
#[case("1\n>>> x = 1", "x = 1")]
#[case(">>> x = 1\n1\n1\n1", "x = 1")]
#[case("no markers at all", "")]
fn test_output_line_elimination(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(strip(input), expected);
}

#[test]
fn test_restriping_from_original_is_stable() {
    // The toggle restripes from the cached original, never from its own
    // output; stripping the same original twice must agree.
    let input = Samples::get_str("session-def").unwrap();
    assert_eq!(strip(input), strip(input));
}

//! Property-based tests for the transcript transform
//!
//! These properties pin down the per-line contract: marked lines survive
//! with their markers removed, unmarked lines never survive, and the
//! transform is total over arbitrary input.

use proptest::prelude::*;

use docstrip::transcript::strip::strip;

/// Statement bodies: non-blank, and free of every marker character so a
/// body can never be mistaken for a marker or an escape.
fn body_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 =+_()]{0,18}"
}

/// Session output lines: non-empty and marker-free by construction.
fn output_strategy() -> impl Strategy<Value = String> {
    "[A-Z0-9][A-Za-z0-9 :,]{0,18}"
}

/// A transcript line paired with what `strip` should make of it.
fn line_strategy() -> impl Strategy<Value = (String, Option<String>)> {
    prop_oneof![
        // Primary prompt line
        body_strategy().prop_map(|body| (format!(">>> {}", body), Some(body))),
        // Continuation line
        body_strategy().prop_map(|body| (format!("... {}", body), Some(body))),
        // Escaped prompt line
        body_strategy().prop_map(|body| (format!("&gt;&gt;&gt; {}", body), Some(body))),
        // Bare marker: stands for a blank line
        Just((">>>".to_string(), Some(String::new()))),
        Just(("...".to_string(), Some(String::new()))),
        // Output line: dropped
        output_strategy().prop_map(|out| (out, None)),
    ]
}

proptest! {
    #[test]
    fn prop_marked_lines_survive_in_order(lines in prop::collection::vec(line_strategy(), 0..16)) {
        let transcript: Vec<&str> = lines.iter().map(|(raw, _)| raw.as_str()).collect();
        let expected: Vec<&str> = lines
            .iter()
            .filter_map(|(_, kept)| kept.as_deref())
            .collect();

        prop_assert_eq!(strip(&transcript.join("\n")), expected.join("\n"));
    }

    #[test]
    fn prop_unmarked_lines_are_absent(outputs in prop::collection::vec(output_strategy(), 1..10)) {
        prop_assert_eq!(strip(&outputs.join("\n")), "");
    }

    #[test]
    fn prop_total_over_arbitrary_input(input in any::<String>()) {
        let once = strip(&input);
        // Each input line yields at most one output line.
        prop_assert!(once.lines().count() <= input.lines().count());
        // Re-stripping stripped text must not panic either (it is lossy by
        // design and only ever run against cached originals).
        let _ = strip(&once);
    }
}

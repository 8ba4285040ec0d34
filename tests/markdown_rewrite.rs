//! Integration tests for markdown processing and the file-level API
//!
//! Reads the sample documents under docs/samples/ the way the CLI would.

use docstrip::transcript::markdown::rewrite_markdown;
use docstrip::transcript::process::{blocks_report, strip_file, OutputFormat};
use docstrip::transcript::testing::Samples;
use std::fs;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs/samples")
        .join(name)
}

#[test]
fn test_rewrite_cheatsheet_page() {
    let content = Samples::get_str("page-cheatsheet").unwrap();
    let rewritten = rewrite_markdown(content);
    assert_eq!(
        rewritten,
        "# Text Processing\n\
         \n\
         `str.maketrans` builds a translation table:\n\
         \n\
         ```python\n\
         table = str.maketrans('ab', 'AB')\n\
         'abc'.translate(table)\n\
         ```\n\
         \n\
         The same page also shows non-Python code:\n\
         \n\
         ```console\n\
         $ pip install docstrip\n\
         ```\n\
         \n\
         ```python\n\
         import math\n\
         math.floor(1.5)\n\
         ```\n"
    );
}

#[test]
fn test_strip_file_markdown() {
    let fixture = sample_path("cheatsheet.md");
    let stripped = strip_file(&fixture).unwrap();
    let expected = rewrite_markdown(&fs::read_to_string(&fixture).unwrap());
    assert_eq!(stripped, expected);
    assert!(stripped.contains("```python\ntable = str.maketrans"));
    assert!(!stripped.contains(">>>"));
}

#[test]
fn test_strip_file_raw_transcript() {
    let stripped = strip_file(sample_path("session.txt")).unwrap();
    assert_eq!(stripped, "def add(a, b):\n    return a + b\n\nadd(1, 2)");
}

#[test]
fn test_blocks_report_json() {
    let report = blocks_report(sample_path("cheatsheet.md"), OutputFormat::Json).unwrap();
    insta::assert_snapshot!(report, @r#"
[
  {
    "id": "code-block-0",
    "language": "python",
    "lines": 3,
    "clean_lines": 2
  },
  {
    "id": "code-block-1",
    "language": "python",
    "lines": 3,
    "clean_lines": 2
  }
]
"#);
}

#[test]
fn test_blocks_report_text() {
    let report = blocks_report(sample_path("cheatsheet.md"), OutputFormat::Text).unwrap();
    assert_eq!(
        report,
        "code-block-0  language=python  lines=3  clean=2\n\
         code-block-1  language=python  lines=3  clean=2\n"
    );
}

//! Markdown content loading and rewriting
//!
//! Documentation pages arrive as markdown with fenced code blocks. This
//! module is the content-loader side of the crate: it builds an in-memory
//! [`PageSurface`] from the fenced blocks of a document, and it can rewrite
//! a whole document with every transcript block replaced by its clean
//! rendition (re-fenced as `python`).
//!
//! Fence handling is deliberately line-oriented, not a markdown parser:
//! any line whose trimmed form starts with a backtick fence toggles
//! code-block state, and the token right after the backticks is the
//! language tag.

use crate::transcript::registry::is_transcript_block;
use crate::transcript::strip::strip;
use crate::transcript::surface::{PageBlock, PageSurface};
use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled fence pattern; group 1 captures the info-string token.
static FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*```+\s*(\S*)").expect("fence regex is valid"));

/// Language written on re-emitted fences for cleaned blocks.
const CLEAN_FENCE_LANGUAGE: &str = "python";

/// If `line` opens or closes a fence, return its info-string token
/// (empty for a bare fence).
fn fence_info(line: &str) -> Option<String> {
    FENCE_REGEX
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// One fenced code block as found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FencedBlock {
    language: Option<String>,
    body: String,
}

fn collect_blocks(content: &str) -> Vec<FencedBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<(Option<String>, Vec<&str>)> = None;

    for line in content.lines() {
        if let Some(info) = fence_info(line) {
            match open.take() {
                Some((language, inner)) => blocks.push(FencedBlock {
                    language,
                    body: inner.join("\n"),
                }),
                None => {
                    let language = if info.is_empty() { None } else { Some(info) };
                    open = Some((language, Vec::new()));
                }
            }
        } else if let Some((_, inner)) = open.as_mut() {
            inner.push(line);
        }
    }

    // An unterminated fence at EOF yields no block, same as the scan the
    // original pages were produced with.
    blocks
}

/// Build a rendering surface from the fenced code blocks of a document.
///
/// Every fenced block becomes a candidate; qualification happens later, at
/// discovery time.
pub fn page_from_markdown(content: &str) -> PageSurface {
    let content = content.replace("\r\n", "\n");
    let blocks = collect_blocks(&content)
        .into_iter()
        .map(|block| PageBlock::new(block.language, block.body))
        .collect();
    PageSurface::new(blocks)
}

/// Rewrite a document with every transcript block stripped.
///
/// Qualifying blocks are replaced by their clean rendition behind a
/// ```` ```python ```` fence; everything else (prose, non-transcript
/// blocks) passes through unchanged. CRLF is normalized to LF. Content
/// after an unterminated fence passes through verbatim.
pub fn rewrite_markdown(content: &str) -> String {
    let content = content.replace("\r\n", "\n");
    let mut out: Vec<String> = Vec::new();
    let mut open: Option<(String, Option<String>, Vec<String>)> = None;

    for line in content.lines() {
        if let Some(info) = fence_info(line) {
            match open.take() {
                Some((open_line, language, inner)) => {
                    let body = inner.join("\n");
                    if is_transcript_block(language.as_deref(), &body) {
                        out.push(format!("```{}", CLEAN_FENCE_LANGUAGE));
                        let stripped = strip(&body);
                        if !stripped.is_empty() {
                            out.extend(stripped.lines().map(str::to_string));
                        }
                        out.push("```".to_string());
                    } else {
                        out.push(open_line);
                        out.extend(inner);
                        out.push(line.to_string());
                    }
                }
                None => {
                    let language = if info.is_empty() { None } else { Some(info) };
                    open = Some((line.to_string(), language, Vec::new()));
                }
            }
        } else if let Some((_, _, inner)) = open.as_mut() {
            inner.push(line.to_string());
        } else {
            out.push(line.to_string());
        }
    }

    if let Some((open_line, _, inner)) = open {
        out.push(open_line);
        out.extend(inner);
    }

    let mut result = out.join("\n");
    if content.ends_with('\n') && !result.is_empty() {
        result.push('\n');
    }
    result
}

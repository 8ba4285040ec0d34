//! Rendering surface and highlight collaborator capabilities
//!
//! The core never talks to a concrete page technology. It needs exactly
//! this from whatever renders the blocks:
//! - enumerate candidate code blocks in document order
//! - read a block's language tag and text
//! - write a block's text
//! - store / resolve an identity slot
//! - flag a block as needing re-highlight
//! - display a mode-indicator label
//!
//! Re-highlighting itself is an injected [`Highlighter`] capability. It is
//! optional in spirit: callers that have none inject [`NoopHighlighter`].

use crate::transcript::registry::BlockId;
use std::fmt;

/// Error raised by a highlight collaborator.
///
/// Highlighting is best-effort everywhere in this crate: the caller logs
/// the failure and moves on, already-applied text mutations stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightError(pub String);

impl fmt::Display for HighlightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "highlight failed: {}", self.0)
    }
}

impl std::error::Error for HighlightError {}

/// The optional re-highlighting collaborator.
pub trait Highlighter {
    /// Re-highlight every block on the surface.
    fn highlight_all(&mut self) -> Result<(), HighlightError>;

    /// Re-highlight a single block.
    fn highlight_one(&mut self, id: &BlockId) -> Result<(), HighlightError>;
}

/// A highlighter that does nothing, for callers without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHighlighter;

impl Highlighter for NoopHighlighter {
    fn highlight_all(&mut self) -> Result<(), HighlightError> {
        Ok(())
    }

    fn highlight_one(&mut self, _id: &BlockId) -> Result<(), HighlightError> {
        Ok(())
    }
}

/// Minimal capability set a rendering surface must provide.
///
/// Blocks are addressed by position during discovery; once an id has been
/// assigned to a block's identity slot, later operations resolve through
/// [`RenderSurface::resolve`].
pub trait RenderSurface {
    /// Number of candidate code blocks, in document order.
    fn block_count(&self) -> usize;

    /// Declared language tag of the block at `index`, if any.
    fn language_tag(&self, index: usize) -> Option<&str>;

    /// Current rendered text of the block at `index`.
    fn text(&self, index: usize) -> &str;

    /// Replace the rendered text of the block at `index`.
    fn set_text(&mut self, index: usize, text: &str);

    /// Store `id` in the block's identity slot.
    fn assign_id(&mut self, index: usize, id: &BlockId);

    /// Resolve a previously assigned id back to a block position.
    fn resolve(&self, id: &BlockId) -> Option<usize>;

    /// Flag the block at `index` as needing re-highlight.
    fn mark_needs_highlight(&mut self, index: usize);

    /// Update the page-level mode-indicator label.
    fn set_mode_label(&mut self, label: &str);
}

/// One code block on an in-memory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlock {
    pub language: Option<String>,
    pub text: String,
    pub id: Option<BlockId>,
    pub needs_highlight: bool,
}

impl PageBlock {
    pub fn new(language: Option<String>, text: String) -> Self {
        PageBlock {
            language,
            text,
            id: None,
            needs_highlight: false,
        }
    }
}

/// In-memory rendering surface used by the CLI, the TUI viewer, and tests.
#[derive(Debug, Default, Clone)]
pub struct PageSurface {
    blocks: Vec<PageBlock>,
    mode_label: String,
}

impl PageSurface {
    pub fn new(blocks: Vec<PageBlock>) -> Self {
        PageSurface {
            blocks,
            mode_label: String::new(),
        }
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    pub fn mode_label(&self) -> &str {
        &self.mode_label
    }

    /// Clear all needs-highlight flags, returning how many were set.
    pub fn take_highlight_flags(&mut self) -> usize {
        let mut cleared = 0;
        for block in &mut self.blocks {
            if block.needs_highlight {
                block.needs_highlight = false;
                cleared += 1;
            }
        }
        cleared
    }
}

impl RenderSurface for PageSurface {
    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn language_tag(&self, index: usize) -> Option<&str> {
        self.blocks[index].language.as_deref()
    }

    fn text(&self, index: usize) -> &str {
        &self.blocks[index].text
    }

    fn set_text(&mut self, index: usize, text: &str) {
        self.blocks[index].text = text.to_string();
    }

    fn assign_id(&mut self, index: usize, id: &BlockId) {
        self.blocks[index].id = Some(id.clone());
    }

    fn resolve(&self, id: &BlockId) -> Option<usize> {
        self.blocks
            .iter()
            .position(|block| block.id.as_ref() == Some(id))
    }

    fn mark_needs_highlight(&mut self, index: usize) {
        self.blocks[index].needs_highlight = true;
    }

    fn set_mode_label(&mut self, label: &str) {
        self.mode_label = label.to_string();
    }
}

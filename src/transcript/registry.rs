//! Block discovery and the original-text cache
//!
//! A discovery pass walks the rendering surface once per content load,
//! decides which candidate blocks are transcripts, hands each one a stable
//! id, and captures its exact text before anything mutates it. The cache
//! maps id to that captured text and is only ever bulk-invalidated: ids
//! never outlive the content surface they were discovered on.

use crate::transcript::markers::contains_marker;
use crate::transcript::surface::RenderSurface;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Language tags that mark a block as an interactive-Python transcript
/// regardless of its content.
const PYTHON_TAGS: &[&str] = &["python", "py", "pycon", "python3"];

/// Opaque, stable identity of a transcript block within one discovery pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BlockId(String);

impl BlockId {
    pub fn from_index(index: usize) -> Self {
        BlockId(format!("code-block-{}", index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a candidate block qualifies as a transcript block.
///
/// Non-empty text, and either a Python language tag or at least one prompt
/// marker somewhere in the text.
pub fn is_transcript_block(language: Option<&str>, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let tagged = language
        .map(|tag| PYTHON_TAGS.iter().any(|p| tag.eq_ignore_ascii_case(p)))
        .unwrap_or(false);
    tagged || contains_marker(text)
}

/// The original-text cache, keyed by block identity.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    originals: HashMap<BlockId, String>,
    order: Vec<BlockId>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        BlockRegistry::default()
    }

    /// Empty the cache. Must run before every fresh discovery pass so a
    /// stale id can never resolve against the wrong original text.
    pub fn clear(&mut self) {
        self.originals.clear();
        self.order.clear();
    }

    /// Walk the surface, register every qualifying block, and capture its
    /// text. Each registered block gets a sequential id written into its
    /// identity slot. Non-qualifying blocks are left untouched.
    ///
    /// Returns the ids in document order.
    pub fn discover(&mut self, surface: &mut dyn RenderSurface) -> Vec<BlockId> {
        self.clear();

        for index in 0..surface.block_count() {
            let qualifies = {
                let text = surface.text(index);
                is_transcript_block(surface.language_tag(index), text)
            };
            if !qualifies {
                continue;
            }

            let id = BlockId::from_index(self.order.len());
            let original = surface.text(index).to_string();
            surface.assign_id(index, &id);
            self.originals.insert(id.clone(), original);
            self.order.push(id);
        }

        self.order.clone()
    }

    /// Cached original text for `id`. Absent is an expected outcome for
    /// ids this registry did not create; callers treat it as a no-op.
    pub fn get(&self, id: &BlockId) -> Option<&str> {
        self.originals.get(id).map(String::as_str)
    }

    /// Registered ids in document order.
    pub fn ids(&self) -> &[BlockId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

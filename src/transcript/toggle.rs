//! Display-mode state machine
//!
//! One `ToggleController` per page session owns the global display mode,
//! the block registry, and the injected highlight capability. It is the
//! only writer of the rendered text of registered blocks and of the global
//! mode. A block's own visible state is never stored; it is inferred from
//! whether its rendered text still carries a prompt marker.

use crate::transcript::markers::contains_marker;
use crate::transcript::registry::{BlockId, BlockRegistry};
use crate::transcript::strip::strip;
use crate::transcript::surface::{Highlighter, RenderSurface};
use tracing::warn;

/// The process-wide display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Prompts and session output visible, as captured.
    WithPrefix,
    /// Clean code: prompts and output stripped.
    WithoutPrefix,
}

impl DisplayMode {
    pub fn opposite(self) -> Self {
        match self {
            DisplayMode::WithPrefix => DisplayMode::WithoutPrefix,
            DisplayMode::WithoutPrefix => DisplayMode::WithPrefix,
        }
    }

    /// Label for the action that would switch *away* from this mode. The
    /// mode indicator always advertises the opposite rendition.
    pub fn action_label(self) -> &'static str {
        match self {
            DisplayMode::WithPrefix => "Hide prompts & output",
            DisplayMode::WithoutPrefix => "Show prompts & output",
        }
    }
}

/// State machine governing rendered text per block and globally.
pub struct ToggleController {
    registry: BlockRegistry,
    mode: DisplayMode,
    highlighter: Box<dyn Highlighter>,
}

impl ToggleController {
    pub fn new(highlighter: Box<dyn Highlighter>) -> Self {
        ToggleController {
            registry: BlockRegistry::new(),
            mode: DisplayMode::WithPrefix,
            highlighter,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Run a discovery pass for freshly loaded content.
    ///
    /// Clears the cache first and resets the global mode to `WithPrefix`;
    /// stale ids must never resolve against new content.
    pub fn discover(&mut self, surface: &mut dyn RenderSurface) -> Vec<BlockId> {
        self.mode = DisplayMode::WithPrefix;
        let ids = self.registry.discover(surface);
        surface.set_mode_label(self.mode.action_label());
        ids
    }

    /// Flip a single block between its two renditions.
    ///
    /// Independent of the global mode and does not update it. Silently a
    /// no-op for ids this controller's registry does not know.
    pub fn toggle_one(&mut self, surface: &mut dyn RenderSurface, id: &BlockId) {
        let Some(original) = self.registry.get(id) else {
            return;
        };
        let Some(index) = surface.resolve(id) else {
            return;
        };

        let rendered = if contains_marker(surface.text(index)) {
            strip(original)
        } else {
            original.to_string()
        };
        surface.set_text(index, &rendered);
        surface.mark_needs_highlight(index);

        if let Err(e) = self.highlighter.highlight_one(id) {
            warn!(block = %id, error = %e, "re-highlight of block failed");
        }
    }

    /// Set the global mode and render every registered block accordingly.
    ///
    /// All blocks are updated before the single `highlight_all` request, so
    /// highlighting never observes a partially updated surface. The
    /// highlight call is best-effort; text mutation is never rolled back.
    pub fn apply_mode(&mut self, surface: &mut dyn RenderSurface, mode: DisplayMode) {
        self.mode = mode;

        for id in self.registry.ids() {
            let Some(original) = self.registry.get(id) else {
                continue;
            };
            let Some(index) = surface.resolve(id) else {
                continue;
            };
            let rendered = match mode {
                DisplayMode::WithPrefix => original.to_string(),
                DisplayMode::WithoutPrefix => strip(original),
            };
            surface.set_text(index, &rendered);
            surface.mark_needs_highlight(index);
        }

        surface.set_mode_label(self.mode.action_label());

        if let Err(e) = self.highlighter.highlight_all() {
            warn!(error = %e, "page-wide re-highlight failed");
        }
    }
}

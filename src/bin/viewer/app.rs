//! Viewer application state and event handling
//!
//! The App struct brings together:
//! - The page surface built from the loaded document
//! - The ToggleController owning mode state and the block cache
//! - Selection state (which registered block has focus)
//! - Global key handling (quit, navigation, toggling)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docstrip::transcript::registry::BlockId;
use docstrip::transcript::surface::{NoopHighlighter, PageSurface};
use docstrip::transcript::toggle::ToggleController;

/// The viewer application
pub struct App {
    /// The rendering surface for the loaded page
    pub surface: PageSurface,

    /// Mode state machine and original-text cache
    pub controller: ToggleController,

    /// Registered block ids, in document order
    pub ids: Vec<BlockId>,

    /// Index into `ids` of the focused block
    pub selected: usize,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create an application for a freshly loaded page surface.
    ///
    /// Runs the initial discovery pass; the page starts in the as-captured
    /// rendition.
    pub fn new(mut surface: PageSurface) -> Self {
        let mut controller = ToggleController::new(Box::new(NoopHighlighter));
        let ids = controller.discover(&mut surface);
        App {
            surface,
            controller,
            ids,
            selected: 0,
            should_quit: false,
        }
    }

    /// The id of the focused block, if the page has any transcripts.
    pub fn selected_id(&self) -> Option<&BlockId> {
        self.ids.get(self.selected)
    }

    /// Handle a keyboard event.
    ///
    /// Returns whether the state changed (needed for re-rendering).
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('p') => self.toggle_page(),
            _ => false,
        }
    }

    fn select_previous(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }

    fn select_next(&mut self) -> bool {
        if self.selected + 1 < self.ids.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Flip the focused block between its two renditions.
    fn toggle_selected(&mut self) -> bool {
        let Some(id) = self.ids.get(self.selected).cloned() else {
            return false;
        };
        self.controller.toggle_one(&mut self.surface, &id);
        true
    }

    /// Flip the whole page to the opposite mode.
    fn toggle_page(&mut self) -> bool {
        let next = self.controller.mode().opposite();
        self.controller.apply_mode(&mut self.surface, next);
        true
    }
}

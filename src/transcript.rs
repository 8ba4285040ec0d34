//! Main module for transcript functionality
//!
//! The pipeline consists of:
//! 1. Marker scanning using a logos lexer (`markers`)
//! 2. The pure transcript-to-clean-code transform (`strip`)
//! 3. Block discovery and the original-text cache (`registry`)
//! 4. The display-mode state machine (`toggle`)
//!
//! The rendering surface and the highlight collaborator are capability
//! traits in `surface`; `markdown` builds an in-memory surface from a
//! markdown document's fenced code blocks, and `process` is the file-level
//! API the CLI sits on.

pub mod markdown;
pub mod markers;
pub mod process;
pub mod registry;
pub mod strip;
pub mod surface;
pub mod testing;
pub mod toggle;

pub use markers::{contains_marker, find_marker, Marker};
pub use registry::{BlockId, BlockRegistry};
pub use strip::strip;
pub use surface::{HighlightError, Highlighter, NoopHighlighter, PageSurface, RenderSurface};
pub use toggle::{DisplayMode, ToggleController};

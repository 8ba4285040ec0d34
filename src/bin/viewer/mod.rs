//! Interactive TUI viewer for documentation pages with transcripts
//!
//! Blocks are listed on the left; the selected block's current rendition is
//! shown on the right and can be flipped per block or page-wide.

pub mod app;
pub mod ui;
pub mod viewer_main;

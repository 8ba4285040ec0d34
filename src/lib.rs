//! # docstrip
//!
//! Documentation pages often carry Python interactive-session transcripts:
//! code mixed with `>>>`/`...` prompts and the output those statements
//! printed. This crate turns such transcripts back into runnable listings
//! and keeps an arbitrary number of code blocks consistently toggleable
//! between the two renditions.
//!
//! ## Testing
//!
//! Tests use the centralized samples in [`transcript::testing`] rather than
//! ad-hoc transcript strings. See that module for the guidelines.

pub mod transcript;

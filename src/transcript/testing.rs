//! Testing utilities: centralized samples and surface assertions
//!
//! # Transcript Testing Guidelines
//!
//! Transcript edge cases are easy to get subtly wrong when retyped (one
//! space after a prompt, escaped vs raw markers, bare continuation lines).
//! Tests must therefore pull content from the verified [`Samples`]
//! collection instead of writing transcripts inline, and should verify
//! surfaces through [`assert_page`] rather than hand-indexing blocks.

use crate::transcript::surface::{PageBlock, PageSurface};

/// Verified sample transcripts and pages, keyed by name.
pub struct Samples;

impl Samples {
    /// Look up a sample by name. Unknown names return `None`.
    pub fn get_str(name: &str) -> Option<&'static str> {
        match name {
            // A short session: two statements, one output line, one
            // continuation statement.
            "session-basic" => Some(">>> x = 1\n>>> y = 2\n3\n... print(x+y)"),

            // Captured from rendered HTML: prompts survive entity-escaped.
            "session-escaped" => Some("&gt;&gt;&gt; x = 1\n&gt;&gt;&gt; x\n1"),

            // A function definition with a bare continuation line standing
            // for the blank line that ends the suite.
            "session-def" => Some(">>> def f():\n...     return 1\n...\n>>> f()\n1"),

            // Output only; stripping leaves nothing.
            "session-output-only" => Some("Traceback (most recent call last):\n  boom"),

            // A documentation page with transcript and non-transcript
            // blocks side by side.
            "page-cheatsheet" => Some(
                "# Text Processing\n\
                 \n\
                 `str.maketrans` builds a translation table:\n\
                 \n\
                 ```python\n\
                 >>> table = str.maketrans('ab', 'AB')\n\
                 >>> 'abc'.translate(table)\n\
                 'ABc'\n\
                 ```\n\
                 \n\
                 The same page also shows non-Python code:\n\
                 \n\
                 ```console\n\
                 $ pip install docstrip\n\
                 ```\n\
                 \n\
                 ```python\n\
                 >>> import math\n\
                 >>> math.floor(1.5)\n\
                 1\n\
                 ```\n",
            ),

            _ => None,
        }
    }

    /// Build a ready-made two-block session surface.
    pub fn session_page() -> PageSurface {
        PageSurface::new(vec![
            PageBlock::new(
                Some("python".to_string()),
                Samples::get_str("session-basic").expect("known sample").to_string(),
            ),
            PageBlock::new(
                None,
                Samples::get_str("session-def").expect("known sample").to_string(),
            ),
        ])
    }
}

/// Entry point for fluent surface assertions.
pub fn assert_page(surface: &PageSurface) -> PageAssertion<'_> {
    PageAssertion { surface }
}

/// Fluent assertions over a whole page surface.
pub struct PageAssertion<'a> {
    surface: &'a PageSurface,
}

impl<'a> PageAssertion<'a> {
    pub fn block_count(self, expected: usize) -> Self {
        assert_eq!(
            self.surface.blocks().len(),
            expected,
            "expected {} blocks, surface has {}",
            expected,
            self.surface.blocks().len()
        );
        self
    }

    pub fn mode_label(self, expected: &str) -> Self {
        assert_eq!(self.surface.mode_label(), expected);
        self
    }

    pub fn block<F>(self, index: usize, f: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self
            .surface
            .blocks()
            .get(index)
            .unwrap_or_else(|| panic!("no block at index {}", index));
        f(BlockAssertion { block, index });
        self
    }
}

/// Fluent assertions over a single block.
pub struct BlockAssertion<'a> {
    block: &'a PageBlock,
    index: usize,
}

impl BlockAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.block.text, expected,
            "block {} text mismatch",
            self.index
        );
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        assert!(
            self.block.text.contains(needle),
            "block {} text does not contain {:?}: {:?}",
            self.index,
            needle,
            self.block.text
        );
        self
    }

    pub fn language(self, expected: &str) -> Self {
        assert_eq!(
            self.block.language.as_deref(),
            Some(expected),
            "block {} language mismatch",
            self.index
        );
        self
    }

    pub fn registered(self) -> Self {
        assert!(
            self.block.id.is_some(),
            "block {} has no identity assigned",
            self.index
        );
        self
    }

    pub fn unregistered(self) -> Self {
        assert!(
            self.block.id.is_none(),
            "block {} unexpectedly has an identity",
            self.index
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_samples_resolve() {
        for name in [
            "session-basic",
            "session-escaped",
            "session-def",
            "session-output-only",
            "page-cheatsheet",
        ] {
            assert!(Samples::get_str(name).is_some(), "missing sample {}", name);
        }
        assert!(Samples::get_str("no-such-sample").is_none());
    }

    #[test]
    fn test_assert_page_fluent_api() {
        let surface = Samples::session_page();
        assert_page(&surface)
            .block_count(2)
            .block(0, |block| {
                block.language("python").text_contains(">>> x = 1");
            })
            .block(1, |block| {
                block.text_contains("def f():").unregistered();
            });
    }
}

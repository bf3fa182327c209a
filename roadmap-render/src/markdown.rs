//! Markdown to HTML rendering.

use pulldown_cmark::{Options, Parser, html};

use crate::content::Content;

/// Renders a content unit to an HTML fragment.
pub trait MarkdownRenderer {
    /// Render `content` to HTML.
    fn render(&self, content: &Content) -> String;
}

/// `CommonMark` renderer backed by `pulldown-cmark`.
///
/// Tables, footnotes, strikethrough and task lists are enabled by default.
#[derive(Debug, Clone, Copy)]
pub struct CmarkRenderer {
    options: Options,
}

impl CmarkRenderer {
    /// Creates a renderer with the default extension set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES
                | Options::ENABLE_FOOTNOTES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Creates a renderer with explicit parser options.
    #[must_use]
    pub const fn with_options(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, content: &Content) -> String {
        let parser = Parser::new_ext(&content.markdown, self.options);
        let mut out = String::with_capacity(content.markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}

//! Markup projection.
//!
//! The search core never parses markup. It asks a [`MarkupProjector`] for the
//! plain-text equivalent of the content, once per content value. The markdown
//! projector derives that text from the same parse that produces the rendered
//! lines, so an offset into the projection addresses the same character in
//! the rendered output.

use ratatui::text::{Line, Span};

/// Markup-to-plain-text projection.
pub trait MarkupProjector {
    /// Plain text of `markup`, with formatting removed.
    fn strip(&self, markup: &str) -> String;
}

/// Rendered content and its plain-text projection.
///
/// The projection is the concatenation of every span of every line, with
/// lines joined by `'\n'`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedContent {
    lines: Vec<Line<'static>>,
    line_starts: Vec<usize>,
    plain: String,
}

impl RenderedContent {
    /// Content from already rendered lines.
    pub fn from_lines(lines: Vec<Line<'static>>) -> Self {
        let mut plain = String::new();
        let mut line_starts = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                plain.push('\n');
            }
            line_starts.push(plain.len());
            for span in &line.spans {
                plain.push_str(&span.content);
            }
        }
        Self {
            lines,
            line_starts,
            plain,
        }
    }

    /// Rendered lines.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Projection offset at which each line starts.
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }

    /// Plain-text projection.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Index of the line containing projection `offset`.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert) => insert.saturating_sub(1),
        }
    }
}

/// Markdown projector backed by `tui-markdown`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownProjector;

impl MarkdownProjector {
    /// Render markdown into owned lines plus their projection.
    pub fn render(&self, markdown: &str) -> RenderedContent {
        let text = tui_markdown::from_str(markdown);
        let lines = text
            .lines
            .into_iter()
            .map(|line| {
                let owned_spans: Vec<Span<'static>> = line
                    .spans
                    .into_iter()
                    .map(|span| Span::styled(span.content.into_owned(), span.style))
                    .collect();
                Line::from(owned_spans).style(line.style)
            })
            .collect();
        RenderedContent::from_lines(lines)
    }
}

impl MarkupProjector for MarkdownProjector {
    fn strip(&self, markup: &str) -> String {
        self.render(markup).plain
    }
}

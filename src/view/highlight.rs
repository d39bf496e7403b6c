//! Paint search decorations onto rendered lines.
//!
//! Decoration offsets address the plain-text projection. Each rendered line
//! starts at a known projection offset and its spans follow each other with
//! no gaps, so a span's projection range is its running byte offset.
//!
//! Only the requested window of lines is painted. Matches are sorted and
//! never overlap, so the first one touching the window is found by binary
//! search and the rest are walked with a single cursor.

use crate::markup::RenderedContent;
use crate::search::{MatchSpan, SearchDecorations};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::ops::Range;

/// Styles applied on top of a span's own style.
#[derive(Debug, Clone, Copy)]
pub struct HighlightStyles {
    /// Patch for every match.
    pub search_match: Style,
    /// Patch for the focused match, applied instead of `search_match`.
    pub search_focus: Style,
}

/// Lines `visible` of the rendered content with every decoration painted in.
///
/// The window is clamped to the document; lines outside it are not returned.
pub fn highlighted_lines(
    content: &RenderedContent,
    decorations: &SearchDecorations,
    visible: Range<usize>,
    styles: HighlightStyles,
) -> Vec<Line<'static>> {
    let lines = content.lines();
    let end = visible.end.min(lines.len());
    let start = visible.start.min(end);
    let window = &lines[start..end];
    let starts = &content.line_starts()[start..end];

    let matches = decorations.matches();
    if matches.is_empty() {
        return window.to_vec();
    }
    let focus = decorations.focus();

    let mut first = 0;
    let mut painted = Vec::with_capacity(window.len());
    for (line, &line_start) in window.iter().zip(starts) {
        let line_end = line_start + line_len(line);
        first += matches[first..].partition_point(|d| d.span.end <= line_start);
        let last = first + matches[first..].partition_point(|d| d.span.start < line_end);
        let overlapping = &matches[first..last];
        if overlapping.is_empty() {
            painted.push(line.clone());
        } else {
            let spans: Vec<MatchSpan> = overlapping.iter().map(|d| d.span).collect();
            painted.push(paint_line(line, line_start, &spans, focus, styles));
        }
    }
    painted
}

fn line_len(line: &Line<'_>) -> usize {
    line.spans.iter().map(|s| s.content.len()).sum()
}

fn paint_line(
    line: &Line<'static>,
    line_start: usize,
    matches: &[MatchSpan],
    focus: Option<MatchSpan>,
    styles: HighlightStyles,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.spans.len() + matches.len() * 2);
    let mut offset = line_start;
    let mut next = 0;

    for span in &line.spans {
        let text: &str = &span.content;
        let span_end = offset + text.len();
        let mut pos = offset;

        while pos < span_end {
            while matches.get(next).is_some_and(|m| m.end <= pos) {
                next += 1;
            }
            let (piece_end, style) = match matches.get(next) {
                Some(m) if m.start <= pos => {
                    let patch = if focus == Some(*m) {
                        styles.search_focus
                    } else {
                        styles.search_match
                    };
                    (m.end.min(span_end), span.style.patch(patch))
                }
                Some(m) => (m.start.min(span_end), span.style),
                None => (span_end, span.style),
            };
            let mut local = piece_end - offset;
            while !text.is_char_boundary(local) {
                local += 1;
            }
            spans.push(Span::styled(text[pos - offset..local].to_string(), style));
            pos = offset + local;
        }
        offset = span_end;
    }

    let mut painted = Line::from(spans).style(line.style);
    painted.alignment = line.alignment;
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MatchSpan;
    use ratatui::style::{Color, Modifier};

    fn styles() -> HighlightStyles {
        HighlightStyles {
            search_match: Style::default().bg(Color::Yellow),
            search_focus: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    fn texts(line: &Line<'_>) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn no_decorations_returns_lines_untouched() {
        let content = RenderedContent::from_lines(vec![Line::from("abc")]);

        let lines = highlighted_lines(&content, &SearchDecorations::new(), 0..usize::MAX, styles());

        assert_eq!(lines, content.lines());
    }

    #[test]
    fn match_inside_span_splits_it() {
        let content = RenderedContent::from_lines(vec![Line::from("say hello there")]);
        let mut decorations = SearchDecorations::new();
        decorations.apply(&[MatchSpan::new(4, 9)], 5);

        let lines = highlighted_lines(&content, &decorations, 0..usize::MAX, styles());

        assert_eq!(texts(&lines[0]), vec!["say ", "hello", " there"]);
        assert_eq!(lines[0].spans[1].style.bg, Some(Color::Yellow));
        assert_eq!(lines[0].spans[0].style.bg, None);
    }

    #[test]
    fn match_across_span_boundary_keeps_both_styles() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let content = RenderedContent::from_lines(vec![Line::from(vec![
            Span::raw("ab"),
            Span::styled("cd", bold),
        ])]);
        let mut decorations = SearchDecorations::new();
        decorations.apply(&[MatchSpan::new(1, 3)], 0);

        let lines = highlighted_lines(&content, &decorations, 0..usize::MAX, styles());

        assert_eq!(texts(&lines[0]), vec!["a", "b", "c", "d"]);
        let focused = &lines[0].spans[2];
        assert!(focused.style.add_modifier.contains(Modifier::BOLD));
        assert!(focused.style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn second_line_offsets_account_for_newline() {
        let content = RenderedContent::from_lines(vec![Line::from("one"), Line::from("two")]);
        let mut decorations = SearchDecorations::new();
        // "one\ntwo": "two" starts at 4.
        decorations.apply(&[MatchSpan::new(4, 7)], 0);

        let lines = highlighted_lines(&content, &decorations, 0..usize::MAX, styles());

        assert_eq!(texts(&lines[0]), vec!["one"]);
        assert_eq!(texts(&lines[1]), vec!["two"]);
        assert!(lines[1].spans[0]
            .style
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn only_the_visible_window_is_returned() {
        let content = RenderedContent::from_lines(vec![
            Line::from("one"),
            Line::from("two"),
            Line::from("three"),
        ]);
        let mut decorations = SearchDecorations::new();
        decorations.apply(&[MatchSpan::new(0, 3), MatchSpan::new(8, 13)], 1);

        let lines = highlighted_lines(&content, &decorations, 1..10, styles());

        assert_eq!(lines.len(), 2);
        assert_eq!(texts(&lines[0]), vec!["two"]);
        assert!(lines[1].spans[0]
            .style
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn match_spanning_a_newline_paints_both_lines() {
        let content = RenderedContent::from_lines(vec![Line::from("ab"), Line::from("cd")]);
        let mut decorations = SearchDecorations::new();
        // "ab\ncd"
        decorations.apply(&[MatchSpan::new(1, 4)], 5);

        let lines = highlighted_lines(&content, &decorations, 0..2, styles());

        assert_eq!(texts(&lines[0]), vec!["a", "b"]);
        assert_eq!(texts(&lines[1]), vec!["c", "d"]);
        assert_eq!(lines[0].spans[1].style.bg, Some(Color::Yellow));
        assert_eq!(lines[1].spans[0].style.bg, Some(Color::Yellow));
        assert_eq!(lines[1].spans[1].style.bg, None);
    }

    #[test]
    fn dense_matches_in_a_long_document_paint_quickly() {
        let lines: Vec<Line<'static>> = (0..40_000)
            .map(|i| {
                if i % 2 == 0 {
                    Line::from("the gentle breeze")
                } else {
                    Line::default()
                }
            })
            .collect();
        let content = RenderedContent::from_lines(lines);
        let spans = crate::search::find_matches(content.plain(), "e");
        assert_eq!(spans.len(), 20_000 * 6);
        let mut decorations = SearchDecorations::new();
        decorations.apply(&spans, spans.len() / 2);

        let started = std::time::Instant::now();
        for top in [0, 20_000, 39_980] {
            let lines = highlighted_lines(&content, &decorations, top..top + 40, styles());
            assert!(lines.len() <= 40);
        }

        assert!(
            started.elapsed() < std::time::Duration::from_millis(250),
            "painting three windows took {:?}",
            started.elapsed()
        );
    }
}

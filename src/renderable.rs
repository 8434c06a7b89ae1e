// Renderable content items
//
// Anything added to a ScrollbackLog implements `Renderable`: given a target
// width and a base style, produce the styled lines to append to the buffer.
// Conversion is deferred until draw time, so the width passed here is the
// width of the viewport the lines will actually appear in.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthChar;

/// Capability for content that can be logged.
///
/// One method: turn the item into styled lines at a given width. The base
/// style is the log's configured style; pre-styled content should layer its
/// own styling on top of it rather than replace it.
pub trait Renderable {
    fn render_lines(&self, width: u16, style: Style) -> Vec<Line<'static>>;
}

impl Renderable for String {
    fn render_lines(&self, width: u16, style: Style) -> Vec<Line<'static>> {
        styled_text_lines(self, width, style)
    }
}

impl Renderable for &'static str {
    fn render_lines(&self, width: u16, style: Style) -> Vec<Line<'static>> {
        styled_text_lines(self, width, style)
    }
}

impl Renderable for Line<'static> {
    fn render_lines(&self, _width: u16, style: Style) -> Vec<Line<'static>> {
        let mut line = self.clone();
        line.style = style.patch(line.style);
        vec![line]
    }
}

impl Renderable for Text<'static> {
    fn render_lines(&self, _width: u16, style: Style) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .map(|l| {
                let mut line = l.clone();
                line.style = style.patch(line.style);
                line
            })
            .collect()
    }
}

/// Adapter for logging one-off content without defining a newtype.
///
/// Wraps a closure producing lines from a width and base style.
pub struct RenderFn<F>(pub F);

impl<F> Renderable for RenderFn<F>
where
    F: Fn(u16, Style) -> Vec<Line<'static>>,
{
    fn render_lines(&self, width: u16, style: Style) -> Vec<Line<'static>> {
        (self.0)(width, style)
    }
}

/// Split text on newlines and wrap each logical line to the display width,
/// producing one uniformly styled span per output line.
pub(crate) fn styled_text_lines(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for logical in text.split('\n') {
        for chunk in wrap_to_width(logical, width) {
            lines.push(Line::from(Span::styled(chunk, style)));
        }
    }
    lines
}

/// Greedy character wrap at display-width boundaries.
///
/// Counts columns with unicode-width so CJK and emoji wrap where the terminal
/// would actually break them. Width 0 disables wrapping (the draw pass clips
/// instead). Empty input still yields one empty chunk: an empty log message
/// occupies a blank row, the same as an empty println.
pub(crate) fn wrap_to_width(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }

    let width = width as usize;
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += char_width;
    }
    chunks.push(current);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn test_wrap_plain_ascii() {
        assert_eq!(wrap_to_width("hello world", 5), vec!["hello", " worl", "d"]);
        assert_eq!(wrap_to_width("hi", 5), vec!["hi"]);
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // Each CJK character is two columns, so width 2 fits one per line
        assert_eq!(wrap_to_width("你好", 2), vec!["你", "好"]);
        assert_eq!(wrap_to_width("你好", 4), vec!["你好"]);
    }

    #[test]
    fn test_wrap_zero_width_passes_through() {
        assert_eq!(wrap_to_width("unclipped", 0), vec!["unclipped"]);
    }

    #[test]
    fn test_empty_string_is_a_blank_row() {
        let lines = styled_text_lines("", 10, Style::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "");
    }

    #[test]
    fn test_newlines_split_logical_lines() {
        let lines = styled_text_lines("one\ntwo\nthree", 80, Style::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_prestyled_line_keeps_its_style_over_base() {
        let styled = Line::styled("x", Style::default().fg(Color::Red));
        let base = Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        let out = styled.render_lines(80, base);
        assert_eq!(out.len(), 1);
        // Base fg is overridden by the line's own fg; the modifier survives
        assert_eq!(out[0].style.fg, Some(Color::Red));
        assert!(out[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_render_fn_adapter() {
        let item = RenderFn(|width, style| {
            vec![Line::from(Span::styled(format!("w={width}"), style))]
        });
        let lines = item.render_lines(42, Style::default());
        assert_eq!(lines[0].to_string(), "w=42");
    }
}

// LogView widget - host display integration
//
// A borrowing ratatui widget over a ScrollbackLog. Each render snapshots the
// log at the dimensions of the area it was given (the inner area when a
// surrounding block is set), so the viewport height and wrap width always
// come from the layout region the log is actually drawn into.

use crate::log::ScrollbackLog;
use crate::style::{Palette, StyleResolver};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Widget};

/// Widget that draws the visible window of a [`ScrollbackLog`].
///
/// ```ignore
/// let view = LogView::new(&log)
///     .block(Block::bordered().title(" Log "))
///     .resolver(&palette);
/// frame.render_widget(view, area);
/// ```
pub struct LogView<'a> {
    log: &'a ScrollbackLog,
    resolver: &'a dyn StyleResolver,
    block: Option<Block<'a>>,
}

impl<'a> LogView<'a> {
    /// Create a view over `log`, resolving named styles with the built-in
    /// palette.
    pub fn new(log: &'a ScrollbackLog) -> Self {
        Self {
            log,
            resolver: Palette::shared_default(),
            block: None,
        }
    }

    /// Resolve named styles through a custom resolver.
    pub fn resolver(mut self, resolver: &'a dyn StyleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Surround the log with a block (borders, title).
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for LogView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines = self
            .log
            .render_lines(inner.width, inner.height as usize, self.resolver);
        for (i, line) in lines.iter().enumerate() {
            buf.set_line(inner.x, inner.y + i as u16, line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Borders;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_renders_most_recent_lines_top_down() {
        let log = ScrollbackLog::new();
        for i in 0..5 {
            log.add(format!("line {i}"));
        }

        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        LogView::new(&log).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "line 3");
        assert_eq!(row(&buf, 1), "line 4");
    }

    #[test]
    fn test_block_shrinks_viewport() {
        let log = ScrollbackLog::new();
        for i in 0..5 {
            log.add(format!("{i}"));
        }

        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        LogView::new(&log)
            .block(Block::default().borders(Borders::ALL))
            .render(area, &mut buf);

        // Two inner rows between the borders hold the last two lines
        assert_eq!(row(&buf, 1), "│3     │");
        assert_eq!(row(&buf, 2), "│4     │");
    }

    #[test]
    fn test_zero_height_inner_area_renders_nothing() {
        let log = ScrollbackLog::new();
        log.add("hidden");

        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        LogView::new(&log)
            .block(Block::default().borders(Borders::ALL))
            .render(area, &mut buf);

        // Borders only; the single inner row of a 2-high block is zero
        assert_eq!(log.pending_count(), 1);
    }

    #[test]
    fn test_width_comes_from_render_time_area() {
        let log = ScrollbackLog::new();
        log.add("abcdef");

        // Narrow viewport wraps the item into two rows
        let area = Rect::new(0, 0, 3, 4);
        let mut buf = Buffer::empty(area);
        LogView::new(&log).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "abc");
        assert_eq!(row(&buf, 1), "def");
    }
}

// ScrollbackLog - bounded scrollback buffer with deferred rendering
//
// Content items queue up via `add` and are converted to styled lines on the
// next draw pass, using the width current at draw time. The line buffer keeps
// at most `scrollback` lines; the draw pass returns the most recent lines
// that fit the viewport. A single mutex guards both structures so producers
// and the draw loop never observe a half-flushed state.

use crate::renderable::Renderable;
use crate::style::{StyleRef, StyleResolver};
use ratatui::text::Line;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Default number of retained lines, matching a typical terminal scrollback.
const DEFAULT_SCROLLBACK: usize = 1000;

struct Inner {
    /// Items added but not yet converted to lines
    pending: VecDeque<Box<dyn Renderable + Send>>,
    /// Rendered lines, oldest first
    lines: VecDeque<Line<'static>>,
}

/// A scrolling log of renderables.
///
/// Cheap to clone; all clones share the same buffer, so one handle can live
/// with a producer loop while another lives with the draw loop. Items are
/// rendered exactly once, in the order they were added.
///
/// With `scrollback` set to `None` the buffer grows without bound. That is a
/// deliberate tradeoff for hosts that want full history and accept the
/// memory cost.
#[derive(Clone)]
pub struct ScrollbackLog {
    inner: Arc<Mutex<Inner>>,
    scrollback: Option<usize>,
    style: StyleRef,
}

impl ScrollbackLog {
    /// Create a log retaining the default 1000 lines, styled as "log".
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                pending: VecDeque::new(),
                lines: VecDeque::new(),
            })),
            scrollback: Some(DEFAULT_SCROLLBACK),
            style: StyleRef::from("log"),
        }
    }

    /// Set the retention limit. `None` keeps every line ever rendered.
    pub fn with_scrollback(mut self, scrollback: Option<usize>) -> Self {
        self.scrollback = scrollback;
        self
    }

    /// Set the base style applied when rendering items.
    pub fn with_style(mut self, style: impl Into<StyleRef>) -> Self {
        self.style = style.into();
        self
    }

    /// Add a renderable to the log.
    ///
    /// Nothing is rendered here; conversion is deferred to the next draw
    /// pass so it can use the viewport width current at draw time rather
    /// than at insertion time (the two can differ across a resize or when
    /// the log moves between layout regions).
    pub fn add<R: Renderable + Send + 'static>(&self, item: R) {
        self.lock().pending.push_back(Box::new(item));
    }

    /// Flush pending items and return the visible window.
    ///
    /// Under one lock acquisition: render each pending item at `width` with
    /// the configured style (FIFO), trim the buffer front down to the
    /// retention limit, and return owned copies of the last `height` lines
    /// (fewer when the buffer is shorter). The returned lines are snapshots;
    /// later `add` calls never change them.
    pub fn render_lines(
        &self,
        width: u16,
        height: usize,
        resolver: &dyn StyleResolver,
    ) -> Vec<Line<'static>> {
        let style = resolver.resolve(&self.style);
        let mut inner = self.lock();

        if !inner.pending.is_empty() {
            let pending: Vec<_> = inner.pending.drain(..).collect();
            for item in pending {
                inner.lines.extend(item.render_lines(width, style));
            }
        }

        if let Some(limit) = self.scrollback {
            while inner.lines.len() > limit {
                inner.lines.pop_front();
            }
        }

        let start = inner.lines.len().saturating_sub(height);
        inner.lines.iter().skip(start).cloned().collect()
    }

    /// Number of rendered lines currently retained.
    pub fn line_count(&self) -> usize {
        self.lock().lines.len()
    }

    /// Number of items waiting for the next draw pass.
    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// Drop all pending items and rendered lines.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.pending.clear();
        inner.lines.clear();
    }

    /// A panicking producer must not take the log view down with it, so a
    /// poisoned lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ScrollbackLog {
    fn default() -> Self {
        Self::new()
    }
}

// Capture bridge - feed tracing events into a ScrollbackLog
//
// A custom tracing layer that formats each event and adds it to a log view.
// This keeps diagnostics from breaking through a TUI's alternate screen
// buffer and garbling the display: the subscriber sink becomes the scrollback
// widget instead of stdout.

use crate::log::ScrollbackLog;
use crate::renderable::{styled_text_lines, Renderable};
use crate::style::{Palette, StyleRef, StyleResolver};
use chrono::Local;
use ratatui::style::Style;
use ratatui::text::Line;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Tracing layer that captures events into a [`ScrollbackLog`].
///
/// Events are formatted as `[HH:MM:SS] LEVEL message` and styled per level.
/// Level styles are resolved once at construction (by name: "error", "warn",
/// "info", "debug", "trace") so capture itself needs no palette.
pub struct ScrollbackLayer {
    log: ScrollbackLog,
    level_styles: [Style; 5],
}

impl ScrollbackLayer {
    /// Create a layer writing to `log`, with level styles from the built-in
    /// palette.
    pub fn new(log: ScrollbackLog) -> Self {
        Self::with_palette(log, Palette::shared_default())
    }

    /// Create a layer with level styles resolved through `palette`.
    pub fn with_palette(log: ScrollbackLog, palette: &Palette) -> Self {
        let style_for = |name: &str| palette.resolve(&StyleRef::from(name));
        Self {
            log,
            level_styles: [
                style_for("error"),
                style_for("warn"),
                style_for("info"),
                style_for("debug"),
                style_for("trace"),
            ],
        }
    }

    fn level_style(&self, level: &Level) -> Style {
        let index = match *level {
            Level::ERROR => 0,
            Level::WARN => 1,
            Level::INFO => 2,
            Level::DEBUG => 3,
            Level::TRACE => 4,
        };
        self.level_styles[index]
    }
}

/// A formatted event waiting in the pending queue.
///
/// Carries its level style along so the deferred draw pass can wrap it at
/// the then-current width without consulting a palette.
struct CapturedEntry {
    text: String,
    style: Style,
}

impl Renderable for CapturedEntry {
    fn render_lines(&self, width: u16, style: Style) -> Vec<Line<'static>> {
        styled_text_lines(&self.text, width, style.patch(self.style))
    }
}

impl<S> Layer<S> for ScrollbackLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Extract the message using a visitor
        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        let text = format!(
            "[{}] {:5} {}",
            Local::now().format("%H:%M:%S"),
            level_label(metadata.level()),
            message
        );
        self.log.add(CapturedEntry {
            text,
            style: self.level_style(metadata.level()),
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Capture all levels - filtering happens at subscriber level
        true
    }
}

fn level_label(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Remove the quotes that Debug adds
            if self.0.starts_with('"') && self.0.ends_with('"') {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use tracing_subscriber::layer::SubscriberExt;

    fn render(log: &ScrollbackLog) -> Vec<Line<'static>> {
        log.render_lines(120, 20, Palette::shared_default())
    }

    #[test]
    fn test_events_reach_the_log() {
        let log = ScrollbackLog::new();
        let subscriber = tracing_subscriber::registry().with(ScrollbackLayer::new(log.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("service started");
            tracing::warn!("low disk");
        });

        let lines = render(&log);
        assert_eq!(lines.len(), 2);
        let first = lines[0].to_string();
        assert!(first.contains("INFO"), "got {first:?}");
        assert!(first.contains("service started"));
        assert!(lines[1].to_string().contains("low disk"));
    }

    #[test]
    fn test_level_styles_applied() {
        let log = ScrollbackLog::new();
        let subscriber = tracing_subscriber::registry().with(ScrollbackLayer::new(log.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("boom");
        });

        let lines = render(&log);
        assert_eq!(lines[0].spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_fields_formatted_into_message() {
        let log = ScrollbackLog::new();
        let subscriber = tracing_subscriber::registry().with(ScrollbackLayer::new(log.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("handled {} requests", 7);
        });

        assert!(render(&log)[0].to_string().contains("handled 7 requests"));
    }
}

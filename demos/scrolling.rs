// Scrolling log demo
//
// Runs an alternate-screen TUI with a single LogView. A producer thread adds
// content directly while tracing events arrive through the capture layer.
// Resize the terminal while it runs: pending items wrap at the width current
// at draw time. Press q or Esc to quit.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Block, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui_scrollback::{LogView, ScrollbackLayer, ScrollbackLog};

fn main() -> Result<()> {
    let log = ScrollbackLog::new().with_scrollback(Some(500));

    // Route all tracing output into the log so nothing hits stdout while the
    // alternate screen is active
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(ScrollbackLayer::new(log.clone()))
        .init();

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_loop(&mut terminal, &log);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    log: &ScrollbackLog,
) -> Result<()> {
    let producer = {
        let log = log.clone();
        std::thread::spawn(move || {
            for i in 0.. {
                log.add(format!("tick {i}: anything renderable goes in the log"));
                if i % 10 == 0 {
                    tracing::info!("ten more ticks ({i} total)");
                }
                std::thread::sleep(Duration::from_millis(200));
            }
        })
    };

    let started = Instant::now();
    loop {
        terminal.draw(|frame| {
            let view = LogView::new(log).block(
                Block::bordered().title(format!(" Log ({:?} elapsed) ", started.elapsed())),
            );
            frame.render_widget(view, frame.area());
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
            }
        }
    }
    drop(producer); // detached; process exit reclaims it
    Ok(())
}

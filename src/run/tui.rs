use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::{HttpSource, Query};
use crate::config::Config;
use crate::ui::app::App;
use crate::view::TransactionListView;

/// Input poll interval while a fetch is outstanding, so its result shows up promptly.
const BUSY_TICK: Duration = Duration::from_millis(50);
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Must run inside a tokio runtime context.
pub(crate) fn as_tui(config: &Config) -> Result<()> {
    let source = HttpSource::new(config.endpoint.clone(), config.timeout)?;
    let view = TransactionListView::new(Arc::new(source), Query::default());
    let mut app = App::new(view, config.endpoint.as_str());
    app.view.mount();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    app.view.unmount();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(fetches = app.view.fetch_count(), "leaving TUI");
    if let Err(ref e) = result {
        tracing::error!("TUI exited with error: {e:?}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.poll_fetch();

        terminal.draw(|f| {
            app.visible_rows = crate::ui::screens::transactions::page_rows(app, f.area().height);
            crate::ui::render::render(f, app);
        })?;

        let tick = if app.view.is_fetching() {
            BUSY_TICK
        } else {
            IDLE_TICK
        };
        if !event::poll(tick)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            handle_normal_input(key, app);
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Char('c') => app.cycle_category(1),
        KeyCode::Char('C') => app.cycle_category(-1),
        KeyCode::Char('s') => app.cycle_status(1),
        KeyCode::Char('S') => app.cycle_status(-1),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('f') => app.fetch_with_filters(),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        _ => {}
    }
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::theme;
use super::util::option_label;
use crate::view::FetchState;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title + filter selectors
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    super::screens::transactions::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_message_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let filter = app.view.filter();
    let selector = |label: &'static str, value: String| {
        vec![
            Span::styled(label, Style::default().fg(theme::TEXT_DIM)),
            Span::styled(
                format!("[{value}]"),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    };

    let mut spans = vec![Span::styled(
        " Transaction Manager ",
        Style::default()
            .fg(theme::HEADER_FG)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::styled(" | ", Style::default().fg(theme::OVERLAY)));
    spans.extend(selector(
        "Category ",
        option_label(&filter.category, "All Categories").to_string(),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(theme::OVERLAY)));
    spans.extend(selector(
        "Status ",
        option_label(&filter.status, "All Statuses").to_string(),
    ));
    spans.push(Span::styled(
        format!("  {}", app.endpoint),
        theme::dim_style(),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(bar, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let state = app.view.state();
    let label = format!(" {} ", state.label());
    let label_bg = match state {
        FetchState::Idle => theme::OVERLAY,
        FetchState::Loading { .. } => theme::YELLOW,
        FetchState::Loaded(_) => theme::GREEN,
        FetchState::Failed { .. } => theme::RED,
    };
    let label_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(label_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} shown | {} fetched",
        app.view.visible().len(),
        app.view.total()
    );
    let right = " c/s filter | f server filter | r reload | ? help ";

    let available = area.width as usize;
    let used = label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.view.state().is_loading() && app.status_message.is_empty() {
        Line::from(Span::styled(
            format!(" Fetching transactions from {}", app.endpoint),
            theme::dim_style(),
        ))
    } else if app.status_message.is_empty() {
        Line::from(Span::styled(
            " Press ? for help, q to quit",
            theme::dim_style(),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            theme::normal_style(),
        ))
    };
    f.render_widget(Paragraph::new(content), area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " Transaction Manager Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Navigation"),
        entry("  j/k or Up/Down   Move cursor           g/G        Top/Bottom"),
        entry("  q or Ctrl-q      Quit"),
        Line::from(""),
        section(" Filters"),
        entry("  c/C              Next/Prev category    s/S        Next/Prev status"),
        entry("  x                Clear both filters"),
        Line::from(""),
        section(" Fetching"),
        entry("  r                Reload the list"),
        entry("  f                Fetch with filters applied by the server"),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

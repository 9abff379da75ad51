use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Transaction;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};
use crate::view::FetchState;

/// Table rows that fit on screen for the branch being rendered.
/// Chrome: 1 header + 1 status + 1 message + 2 borders + 1 table header,
/// plus the error line when the fetch failed.
pub(crate) fn page_rows(app: &App, frame_height: u16) -> usize {
    let chrome = if app.view.state().error().is_some() { 7 } else { 6 };
    (frame_height.saturating_sub(chrome) as usize).max(1)
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.view.state() {
        FetchState::Idle => render_message(
            f,
            area,
            vec![Line::from(Span::styled(
                "No transactions fetched yet",
                theme::dim_style(),
            ))],
        ),
        FetchState::Loading { .. } => render_message(
            f,
            area,
            vec![Line::from(Span::styled(
                "Loading transactions...",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ))],
        ),
        FetchState::Loaded(_) => render_table(f, area, app),
        FetchState::Failed { error, .. } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(3)])
                .split(area);
            let line = Line::from(Span::styled(
                format!(" {}", error.message),
                theme::error_style(),
            ));
            f.render_widget(Paragraph::new(line), chunks[0]);
            render_table(f, chunks[1], app);
        }
    }
}

fn render_message(f: &mut Frame, area: Rect, body: Vec<Line>) {
    let mut lines = vec![Line::from("")];
    lines.extend(body);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Transactions ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    f.render_widget(Paragraph::new(lines).centered().block(block), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let visible = app.view.visible();

    let header_cells = ["Amount", "Category", "Status", "Actions"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .skip(app.row_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.row_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            transaction_row(txn).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(16),
    ];

    let filter_note = if app.view.filter().is_active() {
        format!(" of {}", app.view.total())
    } else {
        String::new()
    };

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                format!(" Transactions ({}{filter_note}) ", visible.len()),
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

fn transaction_row(txn: &Transaction) -> Row<'static> {
    // Edit and Delete are placeholders with no key binding
    let actions = Line::from(vec![
        Span::styled("[Edit]", theme::dim_style()),
        Span::raw(" "),
        Span::styled("[Delete]", theme::dim_style()),
    ]);

    Row::new(vec![
        Cell::from(format_amount(txn.amount)),
        Cell::from(truncate(&txn.category, 32)),
        Cell::from(Span::styled(
            txn.status.as_str(),
            theme::status_style(txn.status),
        )),
        Cell::from(actions),
    ])
}

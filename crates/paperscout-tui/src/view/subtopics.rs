use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use paperscout_core::ViewModel;

use crate::app::App;
use crate::view::truncate;

/// Render the subtopic list with a description pane for the cursor row.
pub fn render(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Min(4),   // table
        Constraint::Length(6), // description of the highlighted subtopic
    ])
    .split(area);

    render_table(f, chunks[0], vm, app);
    render_description(f, chunks[1], vm, app);
}

fn render_table(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let theme = &app.theme;

    let header = Row::new(vec![
        Cell::from("#").style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::from("Keyword").style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .height(1);

    let rows: Vec<Row> = vm
        .subtopics
        .iter()
        .enumerate()
        .map(|(i, subtopic)| {
            let title = truncate(&subtopic.title, (area.width as usize).saturating_sub(8));
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(theme.dim)),
                Cell::from(title).style(Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(4), Constraint::Min(20)])
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Subtopics "),
        )
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    state.select(Some(app.subtopic_cursor));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_description(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let theme = &app.theme;
    let text = vm
        .subtopics
        .get(app.subtopic_cursor)
        .map(|s| s.description.clone())
        .unwrap_or_default();

    let description = Paragraph::new(text)
        .style(Style::default().fg(theme.dim))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" About this subtopic "),
        );
    f.render_widget(description, area);
}

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use paperscout_core::ViewModel;

use crate::app::App;
use crate::view::truncate;

/// Abstracts are long; show at most this much in the preview pane.
const SUMMARY_PREVIEW_CHARS: usize = 300;

/// Render the search results: checkbox table plus a preview of the paper
/// under the cursor. An empty result set gets a message instead.
pub fn render(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    if vm.papers.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Min(5),    // table
        Constraint::Length(8), // preview of the highlighted paper
    ])
    .split(area);

    render_table(f, chunks[0], vm, app);
    render_preview(f, chunks[1], vm, app);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  No papers found for this topic.",
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            "  Press Esc to pick another subtopic.",
            Style::default().fg(theme.dim),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Papers "),
    );
    f.render_widget(message, area);
}

fn render_table(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let theme = &app.theme;
    let wide = area.width >= 100;

    let header_cells = if wide {
        vec!["", "#", "Title", "Authors", "Published"]
    } else {
        vec!["", "#", "Title", "Published"]
    };
    let header = Row::new(header_cells.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows: Vec<Row> = vm
        .papers
        .iter()
        .enumerate()
        .map(|(i, paper)| {
            let row_style = if paper.selected {
                Style::default().fg(theme.selected)
            } else {
                Style::default().fg(theme.text)
            };
            let checkbox = if paper.selected { "[x]" } else { "[ ]" };
            let title = truncate(
                &paper.title,
                (area.width as usize).saturating_sub(if wide { 50 } else { 25 }),
            );

            let mut cells = vec![
                Cell::from(checkbox).style(row_style.add_modifier(Modifier::BOLD)),
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(theme.dim)),
                Cell::from(title).style(row_style),
            ];
            if wide {
                cells.push(
                    Cell::from(truncate(&paper.authors, 28)).style(Style::default().fg(theme.dim)),
                );
            }
            cells.push(Cell::from(paper.published.clone()).style(Style::default().fg(theme.dim)));

            Row::new(cells)
        })
        .collect();

    let widths = if wide {
        vec![
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(30),
            Constraint::Length(12),
        ]
    } else {
        vec![
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(15),
            Constraint::Length(12),
        ]
    };

    let table = Table::new(rows, &widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(format!(
                    " Papers — {}/{} selected ",
                    vm.selection_count,
                    vm.papers.len()
                )),
        )
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    state.select(Some(app.paper_cursor));
    f.render_stateful_widget(table, area, &mut state);
}

fn render_preview(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let theme = &app.theme;

    let mut lines: Vec<Line> = Vec::new();
    if let Some(paper) = vm.papers.get(app.paper_cursor) {
        lines.push(Line::from(vec![
            Span::styled("Authors: ", Style::default().fg(theme.dim)),
            Span::styled(paper.authors.clone(), Style::default().fg(theme.text)),
        ]));
        if let Some(pdf_url) = &paper.pdf_url {
            lines.push(Line::from(vec![
                Span::styled("PDF: ", Style::default().fg(theme.dim)),
                Span::styled(pdf_url.clone(), Style::default().fg(theme.active)),
            ]));
        }
        lines.push(Line::from(Span::styled(
            truncate(&paper.summary, SUMMARY_PREVIEW_CHARS),
            Style::default().fg(theme.dim),
        )));
    }

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" Abstract "),
        );
    f.render_widget(preview, area);
}

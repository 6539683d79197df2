use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use paperscout_core::{Notice, Stage, ViewModel};

use crate::app::{App, InputMode};
use crate::theme::Theme;
use crate::view::spinner_char;

/// Render the one-line header with the app badge and current stage.
pub fn render_header(f: &mut Frame, area: Rect, vm: &ViewModel, theme: &Theme) {
    let stage_label = match vm.stage {
        Stage::Idle => "new search",
        Stage::Expanding => "expanding topic",
        Stage::SubtopicsReady => "pick a subtopic",
        Stage::SearchingPapers => "searching papers",
        Stage::PapersReady => "select papers",
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" PAPERSCOUT ", theme.header_style()),
        Span::styled(
            format!(" {stage_label}"),
            Style::default().fg(theme.dim),
        ),
    ]));
    f.render_widget(header, area);
}

/// Render the query input line; the border lights up while editing.
pub fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Editing;

    let border_style = if editing {
        Style::default().fg(theme.active)
    } else {
        theme.border_style()
    };

    let mut text = app.input.clone();
    if editing {
        text.push('▏');
    }

    let input = Paragraph::new(text)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Research topic "),
        );
    f.render_widget(input, area);
}

/// Render the status line: a transient notice if one is pending, otherwise
/// the currently searched topic.
pub fn render_status(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let theme = &app.theme;

    let line = if let Some(notice) = &vm.notice {
        let text = match notice {
            Notice::Info(msg) | Notice::Error(msg) => msg.as_str(),
        };
        Line::from(Span::styled(
            format!(" {text}"),
            theme.notice_style(notice),
        ))
    } else if let Some(topic) = &vm.current_topic {
        Line::from(vec![
            Span::styled(" topic: ", Style::default().fg(theme.dim)),
            Span::styled(
                topic.clone(),
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from("")
    };

    f.render_widget(Paragraph::new(line), area);
}

/// Render the in-flight body while an expansion or search is pending.
pub fn render_loading(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let theme = &app.theme;
    let what = match vm.stage {
        Stage::Expanding => "expanding your topic into subtopics",
        _ => "searching the paper index",
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ),
        Span::styled(format!("{what}..."), Style::default().fg(theme.dim)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style()),
    );
    f.render_widget(paragraph, area);
}

/// Render the idle body before the first expansion.
pub fn render_welcome(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Type a research topic and press Enter.",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "  The topic is expanded into focused subtopics; pick one to search for papers.",
            Style::default().fg(theme.dim),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style()),
        );
    f.render_widget(paragraph, area);
}

/// Render the context-dependent key hints.
pub fn render_footer(f: &mut Frame, area: Rect, vm: &ViewModel, app: &App) {
    let hints = if app.input_mode == InputMode::Editing {
        " enter search · esc browse results · ctrl+c quit".to_string()
    } else {
        match vm.stage {
            Stage::SubtopicsReady => {
                " enter search subtopic · j/k move · / edit query · ? help · q quit".to_string()
            }
            Stage::PapersReady => format!(
                " space select · a {} · d download ({}) · esc back · ? help · q quit",
                vm.select_all_label, vm.selection_count
            ),
            _ => " ? help · q quit".to_string(),
        }
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(app.theme.dim),
    )));
    f.render_widget(footer, area);
}

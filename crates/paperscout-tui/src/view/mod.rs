pub mod help;
pub mod papers;
pub mod search;
pub mod subtopics;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use paperscout_core::ViewModel;

use crate::app::App;

/// Spinner frames for animated progress indication.
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "…" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Render one frame: header, query line, status line, the stage-dependent
/// body, and the footer hints, plus the help overlay when toggled.
pub fn render(f: &mut Frame, vm: &ViewModel, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(3), // query input
        Constraint::Length(1), // status / current topic
        Constraint::Min(5),    // stage body
        Constraint::Length(1), // footer
    ])
    .split(f.area());

    search::render_header(f, chunks[0], vm, &app.theme);
    search::render_input(f, chunks[1], app);
    search::render_status(f, chunks[2], vm, app);

    if vm.loading {
        search::render_loading(f, chunks[3], vm, app);
    } else if vm.show_subtopics {
        subtopics::render(f, chunks[3], vm, app);
    } else if vm.show_papers {
        papers::render(f, chunks[3], vm, app);
    } else {
        search::render_welcome(f, chunks[3], app);
    }

    search::render_footer(f, chunks[4], vm, app);

    if app.show_help {
        help::render(f, &app.theme);
    }
}

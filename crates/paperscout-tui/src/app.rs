use paperscout_core::{Command, Explorer, GatewayEvent, Stage, ViewModel};

use crate::action::Action;
use crate::theme::Theme;
use crate::view;

/// Whether keystrokes edit the query line or drive the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Browsing,
}

/// Terminal front end around the core [`Explorer`]: query line buffer, list
/// cursors and overlay flags. All workflow decisions stay in the core; this
/// struct only translates actions and keeps cursors in bounds.
pub struct App {
    pub explorer: Explorer,
    pub input: String,
    pub input_mode: InputMode,
    pub subtopic_cursor: usize,
    pub paper_cursor: usize,
    pub tick: usize,
    pub theme: Theme,
    pub should_quit: bool,
    pub show_help: bool,
    /// Height of the visible list area (set on resize, used for paging).
    pub visible_rows: usize,
}

impl App {
    pub fn new(max_results: usize, theme: Theme) -> Self {
        Self {
            explorer: Explorer::new(max_results),
            input: String::new(),
            input_mode: InputMode::Editing,
            subtopic_cursor: 0,
            paper_cursor: 0,
            tick: 0,
            theme,
            should_quit: false,
            show_help: false,
            visible_rows: 20,
        }
    }

    /// Process a user action. Returns the gateway command to run, if the
    /// action triggered one.
    pub fn update(&mut self, action: Action) -> Option<Command> {
        // When the help overlay is shown, only allow a few actions through
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Tick => self.tick = self.tick.wrapping_add(1),
                Action::Resize(_w, h) => self.visible_rows = (h as usize).saturating_sub(8),
                _ => {} // swallow everything else
            }
            return None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::StartEditing => {
                self.input_mode = InputMode::Editing;
            }
            Action::StopEditing => {
                // Nothing to browse before the first expansion finished.
                if self.explorer.stage() != Stage::Idle {
                    self.input_mode = InputMode::Browsing;
                }
            }
            Action::InputChar(c) => {
                if self.input_mode == InputMode::Editing {
                    self.input.push(c);
                }
            }
            Action::InputBackspace => {
                if self.input_mode == InputMode::Editing {
                    self.input.pop();
                }
            }
            Action::SubmitQuery => {
                let command = self.explorer.submit(&self.input);
                if command.is_some() {
                    self.input_mode = InputMode::Browsing;
                    self.subtopic_cursor = 0;
                    self.paper_cursor = 0;
                }
                return command;
            }
            Action::MoveDown => self.move_cursor(1),
            Action::MoveUp => self.move_cursor(-1),
            Action::PageDown => self.move_cursor(self.visible_rows.max(1) as isize),
            Action::PageUp => self.move_cursor(-(self.visible_rows.max(1) as isize)),
            Action::GoTop => match self.explorer.stage() {
                Stage::PapersReady => self.paper_cursor = 0,
                _ => self.subtopic_cursor = 0,
            },
            Action::GoBottom => match self.explorer.stage() {
                Stage::PapersReady => {
                    self.paper_cursor = self.explorer.papers().len().saturating_sub(1);
                }
                _ => {
                    self.subtopic_cursor = self.explorer.subtopics().len().saturating_sub(1);
                }
            },
            Action::Choose => {
                let command = self.explorer.choose_subtopic(self.subtopic_cursor);
                if command.is_some() {
                    self.paper_cursor = 0;
                }
                return command;
            }
            Action::ToggleSelect => {
                if let Some(id) = self
                    .explorer
                    .papers()
                    .get(self.paper_cursor)
                    .map(|p| p.id.clone())
                {
                    self.explorer.toggle_paper(&id);
                }
            }
            Action::ToggleSelectAll => {
                self.explorer.toggle_select_all();
            }
            Action::Download => {
                return self.explorer.request_download();
            }
            Action::NavigateBack => {
                if !self.explorer.back() {
                    // Nowhere further back; return focus to the query line.
                    self.input_mode = InputMode::Editing;
                }
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(_w, h) => {
                self.visible_rows = (h as usize).saturating_sub(8);
            }
            Action::None => {}
        }
        None
    }

    /// Fold a gateway completion into the core and keep cursors in bounds.
    pub fn handle_gateway_event(&mut self, event: GatewayEvent) {
        self.explorer.apply(event);
        self.subtopic_cursor = self
            .subtopic_cursor
            .min(self.explorer.subtopics().len().saturating_sub(1));
        self.paper_cursor = self
            .paper_cursor
            .min(self.explorer.papers().len().saturating_sub(1));
        // An expansion failure lands back on an empty screen; reopen the
        // query line so the user can just type again.
        if self.explorer.stage() == Stage::Idle {
            self.input_mode = InputMode::Editing;
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.explorer.stage() {
            Stage::PapersReady => (&mut self.paper_cursor, self.explorer.papers().len()),
            _ => (&mut self.subtopic_cursor, self.explorer.subtopics().len()),
        };
        if len == 0 {
            return;
        }
        if delta > 0 {
            *cursor = (*cursor + delta as usize).min(len - 1);
        } else {
            *cursor = cursor.saturating_sub(delta.unsigned_abs());
        }
    }

    /// Render the current frame.
    pub fn view(&self, f: &mut ratatui::Frame) {
        let vm = ViewModel::project(&self.explorer);
        view::render(f, &vm, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperscout_core::{ExportShape, Paper, Subtopic};

    fn test_app() -> App {
        App::new(20, Theme::ink())
    }

    fn subtopic(title: &str) -> Subtopic {
        Subtopic {
            title: title.to_string(),
            description: format!("about {title}"),
        }
    }

    fn paper(id: &str) -> Paper {
        Paper {
            id: id.to_string(),
            title: format!("Paper {id}"),
            authors: "A. Author".to_string(),
            published: "2024-05-01".to_string(),
            summary: "An abstract.".to_string(),
            pdf_url: None,
        }
    }

    fn type_query(app: &mut App, query: &str) {
        for c in query.chars() {
            app.update(Action::InputChar(c));
        }
    }

    /// Type a query, submit it, and complete expansion with `subtopics`.
    fn expand(app: &mut App, subtopics: Vec<Subtopic>) {
        type_query(app, "graph neural networks");
        let seq = match app.update(Action::SubmitQuery) {
            Some(Command::Expand { seq, .. }) => seq,
            other => panic!("expected expand command, got {other:?}"),
        };
        app.handle_gateway_event(GatewayEvent::Expanded {
            seq,
            result: Ok(subtopics),
        });
    }

    /// Choose the subtopic under the cursor and complete the search.
    fn search(app: &mut App, papers: Vec<Paper>) {
        let seq = match app.update(Action::Choose) {
            Some(Command::Search { seq, .. }) => seq,
            other => panic!("expected search command, got {other:?}"),
        };
        app.handle_gateway_event(GatewayEvent::Searched {
            seq,
            result: Ok(papers),
        });
    }

    #[test]
    fn typing_builds_the_query_line() {
        let mut app = test_app();
        type_query(&mut app, "vlm");
        app.update(Action::InputBackspace);
        assert_eq!(app.input, "vl");
    }

    #[test]
    fn submitting_an_empty_query_issues_nothing() {
        let mut app = test_app();
        type_query(&mut app, "   ");
        assert!(app.update(Action::SubmitQuery).is_none());
        assert_eq!(app.explorer.stage(), Stage::Idle);
        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.explorer.notice().is_some());
    }

    #[test]
    fn submit_switches_to_browsing_and_issues_expand() {
        let mut app = test_app();
        type_query(&mut app, "vlm alignment");
        let command = app.update(Action::SubmitQuery);
        assert!(matches!(command, Some(Command::Expand { .. })));
        assert_eq!(app.input_mode, InputMode::Browsing);
        assert_eq!(app.explorer.stage(), Stage::Expanding);
    }

    #[test]
    fn choose_searches_with_the_subtopic_under_the_cursor() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one"), subtopic("two"), subtopic("three")]);
        app.update(Action::MoveDown);
        let command = app.update(Action::Choose);
        match command {
            Some(Command::Search { topic, max_results, .. }) => {
                assert_eq!(topic, "two");
                assert_eq!(max_results, 20);
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn space_toggles_the_paper_under_the_cursor() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one")]);
        search(&mut app, vec![paper("p1"), paper("p2")]);

        app.update(Action::MoveDown);
        app.update(Action::ToggleSelect);
        assert!(app.explorer.selection().contains("p2"));
        app.update(Action::ToggleSelect);
        assert!(!app.explorer.selection().contains("p2"));
    }

    #[test]
    fn select_all_then_download_exports_every_paper() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one")]);
        search(&mut app, vec![paper("p1"), paper("p2"), paper("p3")]);

        app.update(Action::ToggleSelectAll);
        let command = app.update(Action::Download);
        match command {
            Some(Command::Download { plan, .. }) => {
                assert_eq!(plan.shape, ExportShape::Archive);
                assert_eq!(plan.paper_ids.len(), 3);
            }
            other => panic!("expected download command, got {other:?}"),
        }
    }

    #[test]
    fn download_without_selection_issues_nothing() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one")]);
        search(&mut app, vec![paper("p1")]);
        assert!(app.update(Action::Download).is_none());
    }

    #[test]
    fn esc_on_papers_returns_to_subtopics() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one"), subtopic("two")]);
        search(&mut app, vec![paper("p1")]);

        app.update(Action::NavigateBack);
        assert_eq!(app.explorer.stage(), Stage::SubtopicsReady);
        assert_eq!(app.explorer.subtopics().len(), 2);
        // A second Esc has nowhere to go and refocuses the query line.
        app.update(Action::NavigateBack);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn cursor_stays_in_bounds_when_a_shorter_list_arrives() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one"), subtopic("two"), subtopic("three")]);
        app.update(Action::GoBottom);
        assert_eq!(app.subtopic_cursor, 2);

        // Re-submit (the query line still holds the text) and come back
        // with a shorter subtopic list than the cursor position.
        let seq = match app.update(Action::SubmitQuery) {
            Some(Command::Expand { seq, .. }) => seq,
            other => panic!("expected expand command, got {other:?}"),
        };
        app.handle_gateway_event(GatewayEvent::Expanded {
            seq,
            result: Ok(vec![subtopic("only")]),
        });
        assert_eq!(app.subtopic_cursor, 0);
    }

    #[test]
    fn help_overlay_swallows_list_actions() {
        let mut app = test_app();
        expand(&mut app, vec![subtopic("one"), subtopic("two")]);
        app.update(Action::ToggleHelp);
        assert!(app.show_help);
        assert!(app.update(Action::Choose).is_none());
        assert_eq!(app.explorer.stage(), Stage::SubtopicsReady);
        app.update(Action::ToggleHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn expansion_failure_refocuses_the_query_line() {
        let mut app = test_app();
        type_query(&mut app, "q");
        let seq = match app.update(Action::SubmitQuery) {
            Some(Command::Expand { seq, .. }) => seq,
            other => panic!("expected expand command, got {other:?}"),
        };
        app.handle_gateway_event(GatewayEvent::Expanded {
            seq,
            result: Err(paperscout_core::CoreError::Network(
                "expansion failed: no response from service".to_string(),
            )),
        });
        assert_eq!(app.explorer.stage(), Stage::Idle);
        assert_eq!(app.input_mode, InputMode::Editing);
    }
}

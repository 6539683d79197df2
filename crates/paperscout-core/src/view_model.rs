use crate::controller::{Explorer, Notice, Stage};
use crate::model::Subtopic;

/// One paper row as the UI should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRow {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub published: String,
    pub summary: String,
    pub pdf_url: Option<String>,
    pub selected: bool,
}

/// A renderable projection of the workflow state: which sections are
/// visible, the list contents with per-paper selection flags, and the
/// enabled/disabled state of the bulk actions.
///
/// Strictly a function of the explorer — it originates no state of its own
/// and needs no transport or terminal, which is what makes it testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub stage: Stage,
    pub loading: bool,
    pub show_subtopics: bool,
    pub show_papers: bool,
    pub subtopics: Vec<Subtopic>,
    pub papers: Vec<PaperRow>,
    pub current_topic: Option<String>,
    pub selection_count: usize,
    pub download_enabled: bool,
    pub select_all_label: &'static str,
    pub notice: Option<Notice>,
}

impl ViewModel {
    pub fn project(explorer: &Explorer) -> Self {
        let stage = explorer.stage();
        let selection = explorer.selection();
        let all_ids: Vec<String> = explorer.papers().iter().map(|p| p.id.clone()).collect();

        let papers: Vec<PaperRow> = explorer
            .papers()
            .iter()
            .map(|p| PaperRow {
                id: p.id.clone(),
                title: p.title.clone(),
                authors: p.authors.clone(),
                published: p.published.clone(),
                summary: p.summary.clone(),
                pdf_url: p.pdf_url.clone(),
                selected: selection.contains(&p.id),
            })
            .collect();

        Self {
            stage,
            loading: matches!(stage, Stage::Expanding | Stage::SearchingPapers),
            show_subtopics: stage == Stage::SubtopicsReady,
            show_papers: stage == Stage::PapersReady,
            subtopics: explorer.subtopics().to_vec(),
            papers,
            current_topic: explorer.current_topic().map(str::to_string),
            selection_count: selection.count(),
            download_enabled: stage == Stage::PapersReady && selection.count() > 0,
            select_all_label: if selection.is_all_selected(&all_ids) {
                "deselect all"
            } else {
                "select all"
            },
            notice: explorer.notice().cloned(),
        }
    }
}

use crate::error::CoreError;
use crate::export::{resolve_export, ExportPayload, ExportPlan};
use crate::model::{Paper, Subtopic};
use crate::selection::SelectionSet;

/// The workflow's current phase. Exactly one is active at a time and it
/// gates which user actions are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Expanding,
    SubtopicsReady,
    SearchingPapers,
    PapersReady,
}

/// Async work the caller must run against the gateway on the controller's
/// behalf. Each command carries the sequence number of its slot; the matching
/// [`GatewayEvent`] must echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Expand {
        query: String,
        seq: u64,
    },
    Search {
        topic: String,
        max_results: usize,
        seq: u64,
    },
    Download {
        plan: ExportPlan,
        seq: u64,
    },
}

/// Completions flowing back from gateway tasks to the controller.
#[derive(Debug)]
pub enum GatewayEvent {
    Expanded {
        seq: u64,
        result: Result<Vec<Subtopic>, CoreError>,
    },
    Searched {
        seq: u64,
        result: Result<Vec<Paper>, CoreError>,
    },
    Downloaded {
        seq: u64,
        result: Result<ExportPayload, CoreError>,
    },
}

/// Transient status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

/// The stage controller: owns the workflow stage, the displayed subtopic and
/// paper lists, and the selection set, and sequences the four-stage flow
/// (expand → pick subtopic → search → select/download).
///
/// User-entry methods mutate state synchronously and hand back the async
/// [`Command`] (if any) the caller must execute; [`apply`](Explorer::apply)
/// folds the completion back in. Requests are tagged with a per-slot
/// monotonically increasing sequence number, and a completion is dropped
/// unless it matches the latest sequence issued for its slot — a superseded
/// in-flight request simply has no further effect, even if its response
/// arrives out of order.
pub struct Explorer {
    stage: Stage,
    query: String,
    subtopics: Vec<Subtopic>,
    current_topic: Option<String>,
    papers: Vec<Paper>,
    selection: SelectionSet,
    notice: Option<Notice>,
    export_ready: Option<ExportPayload>,
    max_results: usize,
    expand_seq: u64,
    search_seq: u64,
    download_seq: u64,
}

impl Explorer {
    pub fn new(max_results: usize) -> Self {
        Self {
            stage: Stage::Idle,
            query: String::new(),
            subtopics: Vec::new(),
            current_topic: None,
            papers: Vec::new(),
            selection: SelectionSet::new(),
            notice: None,
            export_ready: None,
            max_results,
            expand_seq: 0,
            search_seq: 0,
            download_seq: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn subtopics(&self) -> &[Subtopic] {
        &self.subtopics
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.current_topic.as_deref()
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Submit a fresh query for expansion. Valid from any stage: all
    /// subtopic, paper and selection state is discarded and any in-flight
    /// search is superseded. Whitespace-only queries never leave the current
    /// stage and never reach the service.
    pub fn submit(&mut self, raw_query: &str) -> Option<Command> {
        let query = raw_query.trim();
        if query.is_empty() {
            self.notice = Some(Notice::Error("enter a search topic first".to_string()));
            return None;
        }

        self.query = query.to_string();
        self.subtopics.clear();
        self.papers.clear();
        self.selection.clear();
        self.current_topic = None;
        self.notice = None;
        self.stage = Stage::Expanding;

        self.expand_seq += 1;
        // A fresh expansion also invalidates any search still in flight.
        self.search_seq += 1;

        Some(Command::Expand {
            query: self.query.clone(),
            seq: self.expand_seq,
        })
    }

    /// Drive a literature search with the subtopic at `index`. Valid while
    /// the subtopic list is displayed, or while a previous search is still
    /// in flight — in which case the new search supersedes it.
    pub fn choose_subtopic(&mut self, index: usize) -> Option<Command> {
        if !matches!(self.stage, Stage::SubtopicsReady | Stage::SearchingPapers) {
            return None;
        }
        let topic = self.subtopics.get(index)?.title.clone();

        self.current_topic = Some(topic.clone());
        self.notice = None;
        self.stage = Stage::SearchingPapers;

        self.search_seq += 1;
        Some(Command::Search {
            topic,
            max_results: self.max_results,
            seq: self.search_seq,
        })
    }

    /// Return from the paper list to the subtopic list, discarding the paper
    /// list and clearing the selection atomically. Returns false if there is
    /// no paper list to leave.
    pub fn back(&mut self) -> bool {
        if self.stage != Stage::PapersReady {
            return false;
        }
        self.papers.clear();
        self.selection.clear();
        self.current_topic = None;
        self.notice = None;
        self.stage = Stage::SubtopicsReady;
        true
    }

    /// Toggle the selection checkbox of one displayed paper.
    pub fn toggle_paper(&mut self, id: &str) {
        if self.stage != Stage::PapersReady {
            return;
        }
        let current_ids = self.paper_ids();
        if let Err(err) = self.selection.toggle(id, &current_ids) {
            self.notice = Some(Notice::Error(err.to_string()));
        }
    }

    /// Select all papers, or deselect all when everything is already
    /// selected — the same flip the select-all button label follows.
    pub fn toggle_select_all(&mut self) {
        if self.stage != Stage::PapersReady || self.papers.is_empty() {
            return;
        }
        let all_ids = self.paper_ids();
        if self.selection.is_all_selected(&all_ids) {
            self.selection.clear();
        } else {
            self.selection.select_all(&all_ids);
        }
    }

    /// Resolve the export for the current selection and issue the download.
    /// With nothing selected this surfaces a validation error and issues
    /// nothing; the UI disables the action in that case anyway.
    pub fn request_download(&mut self) -> Option<Command> {
        if self.stage != Stage::PapersReady {
            return None;
        }
        match resolve_export(&self.selection) {
            Ok(plan) => {
                self.notice = Some(Notice::Info(format!("downloading {}...", plan.file_name)));
                self.download_seq += 1;
                Some(Command::Download {
                    plan,
                    seq: self.download_seq,
                })
            }
            Err(err) => {
                self.notice = Some(Notice::Error(err.to_string()));
                None
            }
        }
    }

    /// Fold a gateway completion back into the workflow. Stale completions
    /// (sequence number no longer current for their slot) are dropped.
    pub fn apply(&mut self, event: GatewayEvent) {
        match event {
            GatewayEvent::Expanded { seq, result } => {
                if seq != self.expand_seq {
                    log::debug!("dropping stale expansion response (seq {seq})");
                    return;
                }
                match result {
                    Ok(subtopics) => {
                        self.subtopics = subtopics;
                        self.stage = Stage::SubtopicsReady;
                    }
                    Err(err) => {
                        self.subtopics.clear();
                        self.stage = Stage::Idle;
                        self.notice = Some(Notice::Error(err.to_string()));
                    }
                }
            }
            GatewayEvent::Searched { seq, result } => {
                if seq != self.search_seq {
                    log::debug!("dropping stale search response (seq {seq})");
                    return;
                }
                match result {
                    Ok(papers) => {
                        self.papers = papers;
                        self.selection.clear();
                        self.stage = Stage::PapersReady;
                    }
                    Err(err) => {
                        // Subtopics stay visible; the user can retry.
                        self.papers.clear();
                        self.selection.clear();
                        self.current_topic = None;
                        self.stage = Stage::SubtopicsReady;
                        self.notice = Some(Notice::Error(err.to_string()));
                    }
                }
            }
            GatewayEvent::Downloaded { seq, result } => {
                if seq != self.download_seq {
                    log::debug!("dropping stale download response (seq {seq})");
                    return;
                }
                // Either way the stage and selection are untouched, so a
                // failed download can be retried immediately.
                match result {
                    Ok(payload) => {
                        self.export_ready = Some(payload);
                    }
                    Err(err) => {
                        self.notice = Some(Notice::Error(err.to_string()));
                    }
                }
            }
        }
    }

    /// Take a completed export, if one is waiting to be persisted.
    pub fn take_export(&mut self) -> Option<ExportPayload> {
        self.export_ready.take()
    }

    /// Record where a completed export was saved.
    pub fn note_export_saved(&mut self, destination: &str) {
        self.notice = Some(Notice::Info(format!("saved {destination}")));
    }

    /// Record that persisting a completed export failed. The stage and
    /// selection are untouched, so the download can be retried.
    pub fn note_export_failed(&mut self, reason: &str) {
        self.notice = Some(Notice::Error(format!("saving export failed: {reason}")));
    }

    fn paper_ids(&self) -> Vec<String> {
        self.papers.iter().map(|p| p.id.clone()).collect()
    }
}

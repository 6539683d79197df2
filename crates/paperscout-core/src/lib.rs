pub mod controller;
pub mod error;
pub mod export;
pub mod gateway;
pub mod model;
pub mod selection;
pub mod view_model;

pub use controller::{Command, Explorer, GatewayEvent, Notice, Stage};
pub use error::CoreError;
pub use export::{resolve_export, ExportPayload, ExportPlan, ExportShape};
pub use gateway::RemoteGateway;
pub use model::{Paper, Subtopic};
pub use selection::SelectionSet;
pub use view_model::ViewModel;

/// Configuration for the exploration client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the companion exploration service.
    pub base_url: String,
    /// Timeout for expansion and search requests.
    pub request_timeout_secs: u64,
    /// Timeout for export downloads, which can carry large payloads.
    pub download_timeout_secs: u64,
    /// How many papers to request per search. Fixed policy, not exposed
    /// per-query in the UI.
    pub max_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            request_timeout_secs: 30,
            download_timeout_secs: 120,
            max_results: 20,
        }
    }
}

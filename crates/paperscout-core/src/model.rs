use serde::Deserialize;

/// A generative-service refinement of the user's free-text query.
///
/// Lives only inside the currently displayed subtopic list; discarded when a
/// new expansion is requested or a subtopic is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subtopic {
    pub title: String,
    pub description: String,
}

/// A bibliographic record returned by the literature-search service.
///
/// Each search replaces the paper list wholesale; results from different
/// searches are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Paper {
    /// Unique within one search result set.
    pub id: String,
    pub title: String,
    /// Pre-joined display string, e.g. "A. Author, B. Author".
    pub authors: String,
    pub published: String,
    pub summary: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// Wire envelope of the expansion endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ExpandResponse {
    pub subtopics: Vec<Subtopic>,
}

/// Wire envelope of the search endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub papers: Vec<Paper>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_response_deserializes() {
        let body = r#"{
            "subtopics": [
                {"title": "GNN message passing", "description": "How nodes aggregate."},
                {"title": "graph attention", "description": "Attention over edges."}
            ]
        }"#;
        let resp: ExpandResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.subtopics.len(), 2);
        assert_eq!(resp.subtopics[0].title, "GNN message passing");
    }

    #[test]
    fn search_response_deserializes_with_and_without_pdf_url() {
        let body = r#"{
            "papers": [
                {
                    "id": "2301.00001",
                    "title": "A Paper",
                    "authors": "A. Author, B. Author",
                    "published": "2023-01-01",
                    "summary": "Abstract text.",
                    "pdf_url": "https://arxiv.org/pdf/2301.00001.pdf"
                },
                {
                    "id": "2301.00002",
                    "title": "Another Paper",
                    "authors": "C. Author",
                    "published": "2023-01-02",
                    "summary": "More text."
                }
            ],
            "total": 2
        }"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.papers.len(), 2);
        assert!(resp.papers[0].pdf_url.is_some());
        assert!(resp.papers[1].pdf_url.is_none());
    }
}

use crate::error::CoreError;
use crate::selection::SelectionSet;

/// Fixed file name used whenever more than one paper is exported.
pub const ARCHIVE_FILE_NAME: &str = "papers-export.zip";

/// Shape of an export: one PDF, or an archive bundling several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportShape {
    SinglePdf,
    Archive,
}

/// What to ask the download endpoint for, and what to call the result.
///
/// The resolver only decides shape and name; fetching the bytes is the
/// gateway's job, and packaging them is the backing service's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    pub shape: ExportShape,
    pub file_name: String,
    pub paper_ids: Vec<String>,
}

/// A completed export: opaque payload plus the name to save it under.
/// Persisting it to disk is the caller's capability, not the core's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Decide the export shape and suggested file name for the current selection.
///
/// An empty selection is a validation error; callers are expected to disable
/// the download action before ever reaching this point.
pub fn resolve_export(selection: &SelectionSet) -> Result<ExportPlan, CoreError> {
    let paper_ids = selection.ids();
    match paper_ids.len() {
        0 => Err(CoreError::Validation(
            "select at least one paper to download".to_string(),
        )),
        1 => Ok(ExportPlan {
            shape: ExportShape::SinglePdf,
            file_name: format!("{}.pdf", paper_ids[0]),
            paper_ids,
        }),
        _ => Ok(ExportPlan {
            shape: ExportShape::Archive,
            file_name: ARCHIVE_FILE_NAME.to_string(),
            paper_ids,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(ids: &[&str]) -> SelectionSet {
        let all: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        let mut sel = SelectionSet::new();
        sel.select_all(&all);
        sel
    }

    #[test]
    fn single_selection_is_a_pdf_named_after_the_id() {
        let plan = resolve_export(&selection_of(&["abc123"])).unwrap();
        assert_eq!(plan.shape, ExportShape::SinglePdf);
        assert_eq!(plan.file_name, "abc123.pdf");
        assert_eq!(plan.paper_ids, vec!["abc123".to_string()]);
    }

    #[test]
    fn multi_selection_is_an_archive_with_the_fixed_name() {
        let plan = resolve_export(&selection_of(&["p1", "p2", "p3"])).unwrap();
        assert_eq!(plan.shape, ExportShape::Archive);
        assert_eq!(plan.file_name, ARCHIVE_FILE_NAME);
        assert_eq!(plan.paper_ids.len(), 3);
    }

    #[test]
    fn archive_name_does_not_depend_on_which_ids() {
        let a = resolve_export(&selection_of(&["x", "y", "z"])).unwrap();
        let b = resolve_export(&selection_of(&["p9", "p8", "p7"])).unwrap();
        assert_eq!(a.file_name, b.file_name);
    }

    #[test]
    fn empty_selection_is_a_validation_error() {
        let err = resolve_export(&SelectionSet::new()).unwrap_err();
        assert!(err.is_validation());
    }
}

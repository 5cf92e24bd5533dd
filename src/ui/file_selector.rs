// SPDX-License-Identifier: MPL-2.0
//! Bookkeeping for the single selected document.
//!
//! The form tracks zero-or-one file. Selection can come from the file dialog,
//! a window file-drop, or a CLI argument; all three funnel through
//! [`FileSelector::select`]. The submission flow clears the selection through
//! [`FileSelector::reset`] after a successful send so the visible name
//! disappears without user action.

use std::path::{Path, PathBuf};

/// Display name used when a path has no representable file name.
const FALLBACK_NAME: &str = "document";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelector {
    selected: Option<SelectedFile>,
}

impl FileSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection event. `None` (a cancelled dialog) clears the
    /// current selection, mirroring a file input resolving to zero files.
    pub fn select(&mut self, path: Option<PathBuf>) {
        self.selected = path.map(|path| SelectedFile {
            name: display_name(&path),
            path,
        });
    }

    /// Explicit clear from the form's remove affordance.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Reset hook for the submission flow: clears the selection after a
    /// successful send. Selecting the same file again afterwards works.
    pub fn reset(&mut self) {
        self.clear();
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|file| file.name.as_str())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_selection() {
        let selector = FileSelector::new();
        assert!(selector.selected().is_none());
        assert!(selector.display_name().is_none());
    }

    #[test]
    fn selecting_records_name_and_path() {
        let mut selector = FileSelector::new();
        selector.select(Some(PathBuf::from("/tmp/report.pdf")));

        let file = selector.selected().expect("file should be selected");
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.path, PathBuf::from("/tmp/report.pdf"));
    }

    #[test]
    fn cancelled_dialog_clears_the_selection() {
        let mut selector = FileSelector::new();
        selector.select(Some(PathBuf::from("/tmp/report.pdf")));
        selector.select(None);
        assert!(selector.selected().is_none());
    }

    #[test]
    fn clear_then_reselect_the_same_file_works() {
        let mut selector = FileSelector::new();
        let path = PathBuf::from("/tmp/report.pdf");

        selector.select(Some(path.clone()));
        selector.clear();
        assert!(selector.selected().is_none());

        selector.select(Some(path));
        assert_eq!(selector.display_name(), Some("report.pdf"));
    }

    #[test]
    fn reset_behaves_like_clear() {
        let mut selector = FileSelector::new();
        selector.select(Some(PathBuf::from("/tmp/report.pdf")));
        selector.reset();
        assert!(selector.selected().is_none());
    }

    #[test]
    fn a_new_selection_replaces_the_previous_one() {
        let mut selector = FileSelector::new();
        selector.select(Some(PathBuf::from("/tmp/a.pdf")));
        selector.select(Some(PathBuf::from("/tmp/b.pdf")));
        assert_eq!(selector.display_name(), Some("b.pdf"));
    }

    #[test]
    fn nameless_paths_fall_back_to_a_generic_label() {
        let mut selector = FileSelector::new();
        selector.select(Some(PathBuf::from("/")));
        assert_eq!(selector.display_name(), Some(FALLBACK_NAME));
    }
}

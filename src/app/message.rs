// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::webhook::SubmitError;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`. Every interaction and every async
/// result funnels through this single entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Header light/dark toggle was pressed.
    ThemeToggled,
    CopiesDecremented,
    CopiesIncremented,
    /// Keystroke-level edit of the copies field.
    CopiesEdited(String),
    /// The copies field was committed (Enter), the blur equivalent.
    CopiesCommitted,
    /// Open the document picker.
    ChooseFilePressed,
    /// Result from the document picker (`None` when cancelled).
    FileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The remove affordance next to the selected file name.
    FileCleared,
    /// The send button was pressed.
    SubmitPressed,
    /// Outcome of the in-flight print-job request.
    SubmitFinished(Result<(), SubmitError>),
    /// Manual dismiss of the status banner.
    StatusDismissed,
    Tick(Instant), // Periodic tick for status auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional document path to preselect on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<PathBuf>,
}

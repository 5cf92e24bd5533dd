// SPDX-License-Identifier: MPL-2.0
//! Update logic: form event handlers and the submission state machine.
//!
//! A submission moves Idle → Validating → Sending → (Succeeded | Failed) and
//! back to Idle once the banner is dismissed or superseded. Validation and
//! admission live in [`App::begin_submission`]; every outcome, including
//! transport failures, lands in [`App::finish_submission`] which always
//! restores the interactive idle state.

use super::{App, Message};
use crate::config;
use crate::ui::status::StatusLine;
use crate::webhook::{self, SubmitError, SubmitRequest};
use iced::Task;

/// Status shown when the endpoint configuration is incomplete.
pub const MISSING_CONFIG_MESSAGE: &str =
    "Error: Missing configuration. Please check your .env.local file.";

/// Progress status shown while the request is in flight.
pub const UPLOADING_MESSAGE: &str = "Uploading and sending to printer...";

/// Status shown when the webhook accepts the job.
pub const SUCCESS_MESSAGE: &str = "Success! Print job sent.";

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ThemeToggled => {
            app.theme_mode = app.theme_mode.toggled();
            persist_theme(app);
            Task::none()
        }
        Message::CopiesDecremented => {
            app.copies.decrement();
            Task::none()
        }
        Message::CopiesIncremented => {
            app.copies.increment();
            Task::none()
        }
        Message::CopiesEdited(text) => {
            app.copies.edit(&text);
            Task::none()
        }
        Message::CopiesCommitted => {
            app.copies.commit_edit();
            Task::none()
        }
        Message::ChooseFilePressed => open_file_dialog(),
        Message::FileDialogResult(path) => {
            app.file.select(path);
            Task::none()
        }
        Message::FileDropped(path) => {
            app.file.select(Some(path));
            Task::none()
        }
        Message::FileCleared => {
            app.file.clear();
            Task::none()
        }
        Message::SubmitPressed => match app.begin_submission() {
            Some(request) => {
                Task::perform(webhook::send_print_job(request), Message::SubmitFinished)
            }
            None => Task::none(),
        },
        Message::SubmitFinished(result) => {
            app.finish_submission(result);
            Task::none()
        }
        Message::StatusDismissed => {
            app.status = None;
            Task::none()
        }
        Message::Tick(now) => {
            if app.status.as_ref().is_some_and(|s| s.is_expired_at(now)) {
                app.status = None;
            }
            Task::none()
        }
    }
}

/// Persists the current theme choice to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the toggle
/// logic by calling the update function directly.
fn persist_theme(app: &App) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load(app.config_dir.as_deref()).unwrap_or_default();
    cfg.theme_mode = app.theme_mode;

    if let Err(error) = config::save(&cfg, app.config_dir.as_deref()) {
        tracing::warn!("failed to save preferences: {error}");
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Choose a document")
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

impl App {
    /// Validation and admission step of a submission.
    ///
    /// Returns the request to dispatch, or `None` when nothing must be sent:
    /// a request is already in flight, no document is selected, or the
    /// endpoint configuration is incomplete. The configuration case raises
    /// the error status without any network I/O and is never retried.
    pub(crate) fn begin_submission(&mut self) -> Option<SubmitRequest> {
        if self.is_loading {
            return None;
        }

        // An in-progress copies edit commits here, exactly as it would on blur.
        self.copies.commit_edit();

        let Some(endpoint) = self.webhook.endpoint() else {
            self.status = Some(StatusLine::error(MISSING_CONFIG_MESSAGE));
            return None;
        };

        let Some(file) = self.file.selected().cloned() else {
            // The send button is disabled without a selection; nothing to do.
            return None;
        };

        self.is_loading = true;
        self.status = Some(StatusLine::info(UPLOADING_MESSAGE));

        Some(SubmitRequest {
            endpoint,
            file_path: file.path,
            file_name: file.name,
            copies: self.copies.committed(),
        })
    }

    /// Terminal step of a submission; runs on every outcome.
    pub(crate) fn finish_submission(&mut self, result: Result<(), SubmitError>) {
        // Whatever happened, the form returns to an interactive state.
        self.is_loading = false;

        match result {
            Ok(()) => {
                self.status = Some(StatusLine::success(SUCCESS_MESSAGE));
                self.copies.reset();
                self.file.reset();
            }
            Err(error) => {
                tracing::warn!("print job submission failed: {error}");
                self.status = Some(StatusLine::error(error.user_message()));
            }
        }
    }
}

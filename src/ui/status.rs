// SPDX-License-Identifier: MPL-2.0
//! Transient status line shown under the form.
//!
//! A status is raised by the submission flow and either replaced by the next
//! lifecycle event or, for terminal kinds, cleared automatically once it has
//! been visible for [`AUTO_DISMISS`]. Expiry is always computed against the
//! status's own timestamp: replacing a status re-arms the clock, so a stale
//! tick can never clear a newer message.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long success and error banners stay on screen.
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);

/// Severity of a status line, mapped to the banner accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Progress feedback while a request is in flight (blue).
    Info,
    /// The webhook accepted the job (green).
    Success,
    /// The submission failed (red).
    Error,
}

impl StatusKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            StatusKind::Info => palette::INFO_500,
            StatusKind::Success => palette::SUCCESS_500,
            StatusKind::Error => palette::ERROR_500,
        }
    }

    /// Terminal kinds expire on their own; info lines are always superseded
    /// by a terminal status from the same request.
    #[must_use]
    pub fn auto_dismisses(self) -> bool {
        matches!(self, StatusKind::Success | StatusKind::Error)
    }
}

/// One user-facing status message plus its severity and arming instant.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    kind: StatusKind,
    raised_at: Instant,
}

impl StatusLine {
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            raised_at: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, message)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Returns when this status was raised.
    #[must_use]
    pub fn raised_at(&self) -> Instant {
        self.raised_at
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.kind.auto_dismisses()
    }

    /// Whether the auto-dismiss delay has elapsed at `now`. Info lines never
    /// expire.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.kind.auto_dismisses() && now.duration_since(self.raised_at) >= AUTO_DISMISS
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Bounded copy-count stepper with manual-edit tolerance.
//!
//! The field tracks two things: the text as the user typed it and the value
//! it parses to. Emptying the field is allowed while editing (so the user can
//! retype), and no lower bound is enforced during typing; the invariant
//! `value >= min` only holds for [`CopiesInput::committed`], which is what
//! the submission flow reads.

/// Smallest copy count the portal will send.
pub const MIN_COPIES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiesInput {
    min: u32,
    /// `None` while the field is in the transient empty editing state.
    value: Option<u32>,
    /// What the entry field displays.
    text: String,
}

impl Default for CopiesInput {
    fn default() -> Self {
        Self::new(MIN_COPIES)
    }
}

impl CopiesInput {
    #[must_use]
    pub fn new(min: u32) -> Self {
        Self {
            min,
            value: Some(min),
            text: min.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The value the submission flow sends. An empty or below-minimum edit
    /// state reads as `min`.
    #[must_use]
    pub fn committed(&self) -> u32 {
        self.value.unwrap_or(self.min).max(self.min)
    }

    /// Steps down, never below the minimum.
    pub fn decrement(&mut self) {
        let current = self.committed();
        self.set(current.saturating_sub(1).max(self.min));
    }

    /// Steps up. There is no upper bound; the webhook owns any real limit.
    pub fn increment(&mut self) {
        let current = self.committed();
        self.set(current.saturating_add(1));
    }

    /// Applies a keystroke-level edit of the field.
    ///
    /// Empty text enters the transient empty state; integer text replaces the
    /// value without bound enforcement; anything else is rejected and the
    /// field keeps its previous contents.
    pub fn edit(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.value = None;
            self.text.clear();
        } else if let Ok(parsed) = trimmed.parse::<u32>() {
            self.value = Some(parsed);
            self.text = text.to_string();
        }
    }

    /// Commits the in-progress edit (the blur equivalent): an empty or
    /// below-minimum field is coerced to the minimum.
    pub fn commit_edit(&mut self) {
        let committed = self.committed();
        self.set(committed);
    }

    /// Returns the field to its default count.
    pub fn reset(&mut self) {
        self.set(self.min);
    }

    fn set(&mut self, value: u32) {
        self.value = Some(value);
        self.text = value.to_string();
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and the submission flow wiring.
//!
//! The `App` struct owns everything the window shows: the immutable webhook
//! configuration read at startup, the theme preference, the two form fields,
//! and the submission status. All mutation happens in the update loop, one
//! message at a time; the only async work is the outbound request and the
//! file dialog, both driven through `Task`s.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::copies_input::CopiesInput;
use crate::ui::file_selector::FileSelector;
use crate::ui::status::StatusLine;
use crate::ui::theming::ThemeMode;
use crate::webhook::{WebhookConfig, DEFAULT_APP_TITLE};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 440;

/// Root Iced application state for the portal form.
pub struct App {
    webhook: WebhookConfig,
    theme_mode: ThemeMode,
    copies: CopiesInput,
    file: FileSelector,
    /// Current status banner, absent when idle.
    status: Option<StatusLine>,
    /// True only while a print-job request is in flight.
    is_loading: bool,
    /// Config directory override from `--config-dir`.
    config_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_loading", &self.is_loading)
            .field("has_file", &self.file.selected().is_some())
            .field("copies", &self.copies.committed())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            webhook: WebhookConfig::new(None, None, DEFAULT_APP_TITLE),
            theme_mode: ThemeMode::System,
            copies: CopiesInput::default(),
            file: FileSelector::new(),
            status: None,
            is_loading: false,
            config_dir: None,
        }
    }
}

impl App {
    /// Initializes application state from the persisted preferences, the
    /// process environment, and the launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let prefs = config::load(flags.config_dir.as_deref()).unwrap_or_default();

        let mut app = App {
            webhook: WebhookConfig::from_env(),
            theme_mode: prefs.theme_mode,
            config_dir: flags.config_dir,
            ..Self::default()
        };

        if let Some(path) = flags.file_path {
            app.file.select(Some(PathBuf::from(path)));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.webhook.app_title.clone()
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

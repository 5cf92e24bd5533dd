// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: window file drops and the status auto-dismiss tick.

use super::{App, Message};
use crate::ui::status::StatusLine;
use iced::{event, time, Subscription};
use std::time::Duration;

pub fn subscription(app: &App) -> Subscription<Message> {
    Subscription::batch([file_drop_subscription(), tick_subscription(app)])
}

/// Dropping a file on the window selects it, same as the picker.
fn file_drop_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
            Some(Message::FileDropped(path))
        } else {
            None
        }
    })
}

/// Creates a periodic tick subscription for status auto-dismiss.
///
/// Armed only while a terminal (success/error) banner is on screen; info
/// banners are superseded by the request outcome instead of expiring.
fn tick_subscription(app: &App) -> Subscription<Message> {
    if app.status.as_ref().is_some_and(StatusLine::is_terminal) {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

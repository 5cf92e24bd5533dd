// SPDX-License-Identifier: MPL-2.0
//! View rendering for the portal form.

use super::{App, Message};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::status::StatusLine;
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row, Space};
use iced::{alignment, Element, Length, Theme};

/// Renders the whole window: header, form card, and the status banner when
/// one is present.
pub fn view(app: &App) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(header(app))
        .push(form_card(app));

    if let Some(status) = &app.status {
        content = content.push(status_banner(status));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn header(app: &App) -> Element<'_, Message> {
    let title = text(&app.webhook.app_title).size(typography::TITLE_MD);

    let toggle_label = if app.theme_mode.is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };
    let theme_toggle = button(text(toggle_label).size(typography::BODY_SM))
        .on_press(Message::ThemeToggled)
        .padding([spacing::XXS, spacing::XS]);

    Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(theme_toggle)
        .into()
}

fn form_card(app: &App) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(document_section(app))
        .push(copies_section(app))
        .push(send_button(app));

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::form_card)
        .into()
}

fn document_section(app: &App) -> Element<'_, Message> {
    let label = text("Document").size(typography::BODY_SM);

    let choose = button(text("Choose document...").size(typography::BODY))
        .on_press(Message::ChooseFilePressed)
        .padding([spacing::XXS, spacing::XS]);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(choose);

    match app.file.display_name() {
        Some(name) => {
            row = row
                .push(
                    container(text(name).size(typography::BODY)).width(Length::Fill),
                )
                .push(
                    button(text("Remove").size(typography::BODY_SM))
                        .on_press(Message::FileCleared)
                        .padding(spacing::XXS)
                        .style(styles::dismiss_button),
                );
        }
        None => {
            row = row.push(
                container(
                    text("No document selected")
                        .size(typography::BODY)
                        .style(|theme: &Theme| text::Style {
                            color: Some(theme.extended_palette().background.strong.color),
                        }),
                )
                .width(Length::Fill),
            );
        }
    }

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(row)
        .into()
}

fn copies_section(app: &App) -> Element<'_, Message> {
    let label = text("Copies").size(typography::BODY_SM);

    let decrement = button(text("-").center())
        .on_press(Message::CopiesDecremented)
        .padding([spacing::XXS, spacing::XS]);

    let count = text_input("1", app.copies.text())
        .on_input(Message::CopiesEdited)
        .on_submit(Message::CopiesCommitted)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::COPIES_INPUT_WIDTH));

    let increment = button(text("+").center())
        .on_press(Message::CopiesIncremented)
        .padding([spacing::XXS, spacing::XS]);

    let stepper = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(decrement)
        .push(count)
        .push(increment);

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(stepper)
        .into()
}

fn send_button(app: &App) -> Element<'_, Message> {
    let label = if app.is_loading {
        "Sending..."
    } else {
        "Send to printer"
    };

    let btn = button(text(label).size(typography::BODY_LG).center())
        .padding(spacing::SM)
        .width(Length::Fill);

    // Disabled while a request is in flight (one submission at a time) and
    // until a document is selected.
    if !app.is_loading && app.file.selected().is_some() {
        btn.on_press(Message::SubmitPressed).into()
    } else {
        btn.into()
    }
}

fn status_banner(status: &StatusLine) -> Element<'_, Message> {
    let accent_color = status.kind().color();

    let message = text(status.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss = button(text("Dismiss").size(typography::BODY_SM))
        .on_press(Message::StatusDismissed)
        .padding(spacing::XXS)
        .style(styles::dismiss_button);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            container(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    container(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::status_banner(theme, accent_color))
        .into()
}

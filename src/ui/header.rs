// SPDX-License-Identifier: MPL-2.0
//! Top bar: heading, selection status and selection actions.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selected_count: usize,
    pub custom_selection_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleCustomSelection,
    ClearSelection,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleCustomSelection,
    ClearSelection,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleCustomSelection => Event::ToggleCustomSelection,
        Message::ClearSelection => Event::ClearSelection,
    }
}

/// "{n} row(s) selected across all pages".
#[must_use]
pub fn selection_status(i18n: &I18n, selected_count: usize) -> String {
    i18n.tr_with_args("selection-status", &[("count", &selected_count.to_string())])
}

/// Render the header.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("header-subtitle"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        );

    let status = Text::new(selection_status(ctx.i18n, ctx.selected_count))
        .size(typography::CAPTION);

    let custom = button(Text::new(ctx.i18n.tr("selection-custom-open")).size(typography::BODY))
        .on_press(Message::ToggleCustomSelection)
        .padding([spacing::XXS, spacing::SM])
        .style(if ctx.custom_selection_open {
            styles::button::primary
        } else {
            styles::button::secondary
        });

    let clear = button(Text::new(ctx.i18n.tr("selection-clear")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);
    let clear = if ctx.selected_count > 0 {
        clear.on_press(Message::ClearSelection)
    } else {
        clear
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(status)
        .push(custom)
        .push(clear);

    Container::new(row).width(Length::Fill).into()
}

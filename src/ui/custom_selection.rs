// SPDX-License-Identifier: MPL-2.0
//! "Select the first N rows" panel.
//!
//! Input is validated here; only a positive count ever reaches the
//! selection model.

use crate::app::config::{CUSTOM_SELECTION_PLACEHOLDER_COUNT, MAX_CUSTOM_SELECTION};
use crate::domain::SelectionCount;
use crate::error::SelectionInputError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Parses the text of the custom selection field.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// [`SelectionInputError::Empty`] for blank input,
/// [`SelectionInputError::NotPositive`] for zero or negative whole numbers,
/// [`SelectionInputError::TooLarge`] above [`MAX_CUSTOM_SELECTION`] and
/// [`SelectionInputError::NotANumber`] for anything else.
pub fn parse_selection_count(input: &str) -> Result<SelectionCount, SelectionInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SelectionInputError::Empty);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value <= 0 => Err(SelectionInputError::NotPositive),
        Ok(value) if value > i64::from(MAX_CUSTOM_SELECTION) => {
            Err(SelectionInputError::TooLarge {
                max: MAX_CUSTOM_SELECTION,
            })
        }
        Ok(value) => u32::try_from(value)
            .ok()
            .and_then(SelectionCount::new)
            .ok_or_else(|| SelectionInputError::NotANumber(trimmed.to_string())),
        Err(_) => Err(SelectionInputError::NotANumber(trimmed.to_string())),
    }
}

/// Panel state owned by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub open: bool,
    pub input: String,
    pub error: Option<SelectionInputError>,
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the panel.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Apply(SelectionCount),
}

/// Opens a closed panel and closes an open one, discarding any input.
pub fn toggle(state: &mut State) {
    let open = !state.open;
    *state = State {
        open,
        ..State::default()
    };
}

/// Process a panel message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::InputChanged(value) => {
            state.input = value;
            state.error = None;
            Event::None
        }
        Message::Submit => match parse_selection_count(&state.input) {
            Ok(count) => {
                *state = State::default();
                Event::Apply(count)
            }
            Err(err) => {
                state.error = Some(err);
                Event::None
            }
        },
        Message::Cancel => {
            *state = State::default();
            Event::None
        }
    }
}

/// Localized text for an input error.
#[must_use]
pub fn error_text(i18n: &I18n, error: &SelectionInputError) -> String {
    match error {
        SelectionInputError::NotANumber(input) => {
            i18n.tr_with_args(error.i18n_key(), &[("input", input)])
        }
        SelectionInputError::TooLarge { max } => {
            i18n.tr_with_args(error.i18n_key(), &[("max", &max.to_string())])
        }
        _ => i18n.tr(error.i18n_key()),
    }
}

/// Render the panel. Returns nothing visible when closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.state.open {
        return None;
    }

    let placeholder = ctx.i18n.tr_with_args(
        "selection-custom-placeholder",
        &[("example", &CUSTOM_SELECTION_PLACEHOLDER_COUNT.to_string())],
    );
    let input = text_input(placeholder.as_str(), &ctx.state.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(sizing::SELECTION_INPUT_WIDTH);

    let apply = button(text(ctx.i18n.tr("selection-custom-apply")).size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    let cancel = button(text(ctx.i18n.tr("selection-custom-cancel")).size(typography::BODY))
        .on_press(Message::Cancel)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(apply)
        .push(cancel);

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("selection-custom-label")).size(typography::BODY_SM))
        .push(controls);

    if let Some(error) = &ctx.state.error {
        content = content.push(
            Text::new(error_text(ctx.i18n, error))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    Some(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::panel)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: u32) -> SelectionCount {
        SelectionCount::new(n).expect("non-zero count")
    }

    #[test]
    fn parses_positive_integers() {
        assert_eq!(parse_selection_count("25"), Ok(count(25)));
        assert_eq!(parse_selection_count("  7 "), Ok(count(7)));
        assert_eq!(parse_selection_count("+3"), Ok(count(3)));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(parse_selection_count(""), Err(SelectionInputError::Empty));
        assert_eq!(parse_selection_count("   "), Err(SelectionInputError::Empty));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(parse_selection_count("0"), Err(SelectionInputError::NotPositive));
        assert_eq!(parse_selection_count("-4"), Err(SelectionInputError::NotPositive));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(
            parse_selection_count("abc"),
            Err(SelectionInputError::NotANumber("abc".into()))
        );
        assert_eq!(
            parse_selection_count("2.5"),
            Err(SelectionInputError::NotANumber("2.5".into()))
        );
        assert!(matches!(
            parse_selection_count("99999999999999999999"),
            Err(SelectionInputError::NotANumber(_))
        ));
    }

    #[test]
    fn rejects_counts_above_the_limit() {
        let too_large = Err(SelectionInputError::TooLarge {
            max: MAX_CUSTOM_SELECTION,
        });
        assert_eq!(parse_selection_count(&u32::MAX.to_string()), too_large);
        assert_eq!(parse_selection_count("99999999999"), too_large);
        assert_eq!(
            parse_selection_count(&(MAX_CUSTOM_SELECTION + 1).to_string()),
            too_large
        );
        assert_eq!(
            parse_selection_count(&MAX_CUSTOM_SELECTION.to_string()),
            Ok(count(MAX_CUSTOM_SELECTION))
        );
    }

    #[test]
    fn oversized_submit_never_applies() {
        let mut state = State {
            open: true,
            input: "4294967295".into(),
            error: None,
        };
        assert_eq!(update(&mut state, Message::Submit), Event::None);
        assert!(state.open);
        assert_eq!(
            state.error,
            Some(SelectionInputError::TooLarge {
                max: MAX_CUSTOM_SELECTION
            })
        );
    }

    #[test]
    fn valid_submit_clears_and_closes() {
        let mut state = State {
            open: true,
            input: "10".into(),
            error: None,
        };
        let event = update(&mut state, Message::Submit);
        assert_eq!(event, Event::Apply(count(10)));
        assert_eq!(state, State::default());
    }

    #[test]
    fn invalid_submit_keeps_panel_open_with_error() {
        let mut state = State {
            open: true,
            input: "zero".into(),
            error: None,
        };
        let event = update(&mut state, Message::Submit);
        assert_eq!(event, Event::None);
        assert!(state.open);
        assert_eq!(state.input, "zero");
        assert_eq!(
            state.error,
            Some(SelectionInputError::NotANumber("zero".into()))
        );

        update(&mut state, Message::InputChanged("3".into()));
        assert!(state.error.is_none());
    }

    #[test]
    fn cancel_and_toggle_reset_input() {
        let mut state = State::default();
        toggle(&mut state);
        assert!(state.open);
        update(&mut state, Message::InputChanged("12".into()));

        update(&mut state, Message::Cancel);
        assert_eq!(state, State::default());

        toggle(&mut state);
        update(&mut state, Message::InputChanged("12".into()));
        toggle(&mut state);
        assert_eq!(state, State::default());
    }

    #[test]
    fn error_text_is_localized() {
        let i18n = I18n::new(Some("en-US".into()), &Default::default());
        assert_eq!(
            error_text(&i18n, &SelectionInputError::NotANumber("x1".into())),
            "\"x1\" is not a whole number."
        );
        assert_eq!(
            error_text(&i18n, &SelectionInputError::NotPositive),
            "Please enter a number greater than zero."
        );
        assert_eq!(
            error_text(&i18n, &SelectionInputError::TooLarge { max: 100_000 }),
            "Please enter at most 100000 rows."
        );
    }

    #[test]
    fn closed_panel_renders_nothing() {
        let i18n = I18n::default();
        let state = State::default();
        assert!(view(ViewContext {
            i18n: &i18n,
            state: &state,
        })
        .is_none());
    }
}

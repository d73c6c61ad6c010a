mod tiles;

use iced::{
    alignment::Vertical,
    widget::{
        button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
        Column,
    },
    Element, Font, Length, Theme,
};
use iced_aw::quad;
use tiles::{tile_grid_view, to_iced_color};

use crate::{
    message::Message,
    state::{Dialogue, Feedback, GameState, Phase},
};

const STEELBLUE: iced::Color = iced::Color::from_rgb(
    70.0 / 255.0,
    130.0 / 255.0,
    180.0 / 255.0,
);
const FEEDBACK_GREEN: iced::Color = iced::Color::from_rgb(0.0, 0.6, 0.0);
const FEEDBACK_RED: iced::Color = iced::Color::from_rgb(0.8, 0.0, 0.0);

fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        iced::Color {
                            a: 0.5,
                            ..iced::Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

pub fn modal_background_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: iced::border::rounded(4)
            .color(palette.background.weak.color)
            .width(1.0),
        ..container::Style::default()
    }
}

fn horizontal_separator() -> quad::Quad {
    quad::Quad {
        quad_color: iced::Color::from([0.5; 3]).into(),
        quad_border: iced::Border {
            radius: iced::border::Radius::new(1.0),
            ..Default::default()
        },
        inner_bounds: iced_aw::widget::InnerBounds::Ratio(1.0, 1.0),
        height: Length::Fixed(1.0),
        ..Default::default()
    }
}

pub fn help_view(_state: &GameState) -> Element<Message> {
    let controls = vec![
        ("n", "New colors", "discard the round and draw a fresh palette"),
        ("h", "Help", "show this dialogue"),
        ("Esc", "Close", "dismiss the open dialogue"),
        ("Tab", "Focus", "move focus between controls"),
    ];
    let mut col = Column::new();
    col = col.push(text("Find the tile matching the RGB value shown above."));
    col = col.push(text("Keyboard controls:"));
    for (key, name, desc) in controls {
        col = col.push(
            row![
                text(key).width(40).font(Font {
                    weight: iced::font::Weight::ExtraBold,
                    ..Default::default()
                }),
                text(format!("{}: {}", name, desc)).width(400),
            ]
            .align_y(Vertical::Center),
        );
    }

    container(col.spacing(10))
        .width(480)
        .padding(25)
        .style(modal_background_style)
        .into()
}

fn heading_view(state: &GameState) -> Element<Message> {
    // The heading takes on the target color once the round is solved.
    let background = match state.phase {
        Phase::Solved => to_iced_color(state.puzzle.target_color()),
        Phase::Active => STEELBLUE,
    };
    container(
        column![
            text("The Great Color Guessing Game").size(24),
            text(state.puzzle.target_color().to_string()).size(36),
        ]
        .spacing(5)
        .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(15)
    .align_x(iced::alignment::Horizontal::Center)
    .style(move |_theme| container::Style {
        background: Some(background.into()),
        text_color: Some(iced::Color::WHITE),
        ..container::Style::default()
    })
    .into()
}

fn status_view(state: &GameState) -> Element<Message> {
    let feedback: Element<Message> = match state.feedback {
        Feedback::None => text("").into(),
        Feedback::TryAgain => text("Try Again").color(FEEDBACK_RED).into(),
        Feedback::Correct => text("Correct").color(FEEDBACK_GREEN).into(),
    };
    let reset_label = match state.phase {
        Phase::Solved => "Play Again?",
        Phase::Active => "New Colors",
    };
    row![
        feedback,
        horizontal_space(),
        button(text(reset_label)).on_press(Message::NewPuzzle),
        button(text("\u{F505}").font(iced_fonts::BOOTSTRAP_FONT))
            .style(button::secondary)
            .on_press(Message::HelpDialogue),
    ]
    .spacing(10)
    .align_y(Vertical::Center)
    .into()
}

pub fn view_dialogue<'a>(
    state: &'a GameState,
    main_view: Element<'a, Message>,
) -> Element<'a, Message> {
    if let Some(dialogue) = &state.dialogue {
        match dialogue {
            Dialogue::Help => modal(main_view, help_view(state), Message::HideModal),
        }
    } else {
        main_view
    }
}

pub fn view(state: &GameState) -> Element<Message> {
    let main_view: Element<Message> = column![
        heading_view(state),
        container(
            column![
                tile_grid_view(state),
                horizontal_separator(),
                status_view(state),
            ]
            .spacing(15)
            .width(Length::Shrink),
        )
        .padding(20)
        .center_x(Length::Fill),
    ]
    .into();

    view_dialogue(state, main_view)
}

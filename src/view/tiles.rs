// Module for displaying the clickable tile grid
use iced::{
    mouse,
    widget::{canvas, Column, Row},
    Element, Size,
};
use itertools::Itertools;

use crate::{
    message::Message,
    puzzle::TileIdx,
    state::{GameState, Phase},
};

pub const TILES_PER_ROW: usize = 3;

// Wrong guesses are hidden by repainting the tile in the page background.
pub const SUPPRESSED_BACKGROUND: iced::Color =
    iced::Color::from_rgb(0x23 as f32 / 255.0, 0x23 as f32 / 255.0, 0x23 as f32 / 255.0);

pub fn to_iced_color(c: crate::puzzle::Color) -> iced::Color {
    iced::Color::from_rgb8(c.red, c.green, c.blue)
}

#[derive(Debug)]
struct ColorBox {
    color: iced::Color,
    thickness: f32,
    enabled: bool,
    tile_idx: TileIdx,
}

impl canvas::Program<Message> for ColorBox {
    // No internal state
    type State = ();

    fn update(
        &self,
        _interaction: &mut Self::State,
        event: canvas::Event,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if cursor.position_in(bounds).is_none() {
            return (canvas::event::Status::Ignored, None);
        };

        match event {
            canvas::Event::Mouse(mouse_event) => match mouse_event {
                mouse::Event::ButtonPressed(mouse::Button::Left) => {
                    let message = if self.enabled {
                        Some(Message::ClickTile(self.tile_idx))
                    } else {
                        None
                    };
                    (canvas::event::Status::Captured, message)
                }
                _ => (canvas::event::Status::Ignored, None),
            },
            _ => (canvas::event::Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &(),
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let thickness = self.thickness;
        let size = Size {
            width: frame.size().width - 2.0 * thickness,
            height: frame.size().height - 2.0 * thickness,
        };
        frame.fill_rectangle(
            iced::Point {
                x: thickness,
                y: thickness,
            },
            size,
            self.color,
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _interaction: &Self::State,
        bounds: iced::Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.enabled && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

pub fn tile_grid_view(state: &GameState) -> Element<Message> {
    let solved = state.phase == Phase::Solved;
    let target = state.puzzle.target_color();
    let size = 110.0;

    let mut col = Column::new().spacing(10);
    for chunk in &state
        .puzzle
        .palette()
        .iter()
        .enumerate()
        .chunks(TILES_PER_ROW)
    {
        let mut tile_row = Row::new().spacing(10);
        for (i, &color) in chunk {
            let suppressed = state.suppressed[i];
            let fill = if solved {
                // On a win the whole board takes on the target color.
                to_iced_color(target)
            } else if suppressed {
                SUPPRESSED_BACKGROUND
            } else {
                to_iced_color(color)
            };
            tile_row = tile_row.push(
                canvas(ColorBox {
                    color: fill,
                    thickness: 2.0,
                    enabled: !solved && !suppressed,
                    tile_idx: i,
                })
                .width(size)
                .height(size),
            );
        }
        col = col.push(tile_row);
    }
    col.into()
}

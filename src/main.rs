use anyhow::Result;
use clap::Parser;
use iced::{Task, Theme};
use state::{GameConfig, GameState, DEFAULT_PALETTE_SIZE};

mod message;
mod puzzle;
mod state;
mod update;
mod view;

#[derive(Parser, Debug)]
struct Args {
    /// Number of tiles in the palette
    #[arg(long, default_value_t = DEFAULT_PALETTE_SIZE)]
    size: usize,

    /// Seed for a reproducible sequence of puzzles
    #[arg(long)]
    seed: Option<u64>,
}

fn theme(_state: &GameState) -> Theme {
    match dark_light::detect().unwrap_or(dark_light::Mode::Unspecified) {
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Dark | dark_light::Mode::Unspecified => Theme::Dark,
    }
}

fn subscription(_state: &GameState) -> iced::Subscription<message::Message> {
    iced::event::listen().map(message::Message::Event)
}

pub fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let initial_state = state::get_initial_state(GameConfig {
        palette_size: args.size,
        seed: args.seed,
    })?;
    iced::application("Color Guess", update::update, view::view)
        .font(iced_fonts::REQUIRED_FONT_BYTES)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .theme(theme)
        .subscription(subscription)
        .run_with(move || (initial_state, Task::none()))?;
    Ok(())
}

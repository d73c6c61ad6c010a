use iced::{
    keyboard::{self, key},
    widget, Event, Task,
};
use log::{error, info, warn};

use crate::{
    message::Message,
    puzzle::TileIdx,
    state::{Dialogue, Feedback, GameState, Phase},
};

pub fn update(state: &mut GameState, message: Message) -> Task<Message> {
    match message {
        Message::Event(event) => match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Tab),
                modifiers,
                ..
            }) => {
                if modifiers.shift() {
                    return widget::focus_previous();
                } else {
                    return widget::focus_next();
                }
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => {
                state.dialogue = None;
            }
            Event::Keyboard(keyboard::Event::KeyPressed { modified_key, .. }) => {
                if modified_key == keyboard::Key::Character("n".into()) {
                    start_new_round(state);
                } else if modified_key == keyboard::Key::Character("h".into()) {
                    state.dialogue = Some(Dialogue::Help);
                }
            }
            _ => {}
        },
        Message::ClickTile(idx) => {
            handle_guess(state, idx);
        }
        Message::NewPuzzle => {
            start_new_round(state);
        }
        Message::HelpDialogue => {
            state.dialogue = Some(Dialogue::Help);
        }
        Message::HideModal => {
            state.dialogue = None;
        }
    }
    Task::none()
}

fn handle_guess(state: &mut GameState, idx: TileIdx) {
    if state.phase == Phase::Solved {
        // The board stays frozen until an explicit reset.
        return;
    }
    if state.suppressed.get(idx).copied().unwrap_or(false) {
        warn!("Ignoring click on already-suppressed tile {}", idx);
        return;
    }
    match state.puzzle.evaluate_guess(idx) {
        Ok(outcome) if outcome.correct => {
            info!("Tile {} matched the target {}", idx, outcome.revealed);
            state.phase = Phase::Solved;
            state.feedback = Feedback::Correct;
        }
        Ok(_) => {
            state.suppressed[idx] = true;
            state.feedback = Feedback::TryAgain;
        }
        Err(e) => {
            // Only reachable if the view wired a tile to a bad index.
            error!("Ignoring guess: {}", e);
        }
    }
}

fn start_new_round(state: &mut GameState) {
    if let Err(e) = state.new_puzzle() {
        error!("Error generating new puzzle: {}", e);
        return;
    }
    info!(
        "Generated a new palette of {} colors",
        state.config.palette_size
    );
}

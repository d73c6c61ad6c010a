use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::puzzle::{PuzzleError, PuzzleState};

pub const DEFAULT_PALETTE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub palette_size: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            seed: None,
        }
    }
}

/// The round is either still accepting guesses or already solved. A solved
/// round only goes back to active through an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Solved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    TryAgain,
    Correct,
}

pub enum Dialogue {
    Help,
}

pub struct GameState {
    pub config: GameConfig,
    pub rng: ChaCha8Rng,

    // Current round:
    pub puzzle: PuzzleState,

    // Temporary presentation state:
    pub suppressed: Vec<bool>, // tiles hidden by wrong guesses this round
    pub phase: Phase,
    pub feedback: Feedback,
    pub dialogue: Option<Dialogue>,
}

impl GameState {
    /// Discards the current round and generates a fresh one with the same
    /// configured palette size.
    pub fn new_puzzle(&mut self) -> Result<(), PuzzleError> {
        self.puzzle = PuzzleState::generate_with(self.config.palette_size, &mut self.rng)?;
        self.suppressed = vec![false; self.config.palette_size];
        self.phase = Phase::Active;
        self.feedback = Feedback::None;
        Ok(())
    }
}

pub fn get_initial_state(config: GameConfig) -> Result<GameState> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let puzzle = PuzzleState::generate_with(config.palette_size, &mut rng)
        .context("Unable to generate the initial puzzle.")?;
    Ok(GameState {
        config,
        rng,
        puzzle,
        suppressed: vec![false; config.palette_size],
        phase: Phase::Active,
        feedback: Feedback::None,
        dialogue: None,
    })
}

use std::fmt;

use rand::Rng;
use thiserror::Error;

pub type Channel = u8; // Color channel value (0-255)
pub type TileIdx = usize; // Index into the puzzle palette

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("palette size must be positive (got {0})")]
    InvalidSize(usize),
    #[error("guess index {index} out of range for palette of {len}")]
    InvalidIndex { index: TileIdx, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
}

impl Color {
    pub fn rgb(red: Channel, green: Channel, blue: Channel) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Result of evaluating one guess. `revealed` is the color at the guessed
/// index, regardless of whether the guess was correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub correct: bool,
    pub revealed: Color,
}

/// One round of the game: an ordered palette of candidate colors and the
/// index of the one the player must find. Replaced wholesale on reset;
/// guesses only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    palette: Vec<Color>,
    target_index: TileIdx,
}

impl PuzzleState {
    /// Generates a fresh puzzle from the thread RNG.
    pub fn generate(size: usize) -> Result<Self, PuzzleError> {
        Self::generate_with(size, &mut rand::rng())
    }

    /// Generates a fresh puzzle from the given RNG. Each channel is drawn
    /// independently and uniformly from 0-255, then the target index is
    /// drawn uniformly from the palette. Duplicate colors are allowed; the
    /// target is identified by index, so a duplicate of the target color
    /// elsewhere in the palette is still a wrong answer.
    pub fn generate_with<R: Rng>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        if size == 0 {
            return Err(PuzzleError::InvalidSize(size));
        }
        let palette: Vec<Color> = (0..size)
            .map(|_| Color::rgb(rng.random(), rng.random(), rng.random()))
            .collect();
        let target_index = rng.random_range(0..size);
        Ok(Self {
            palette,
            target_index,
        })
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn target_index(&self) -> TileIdx {
        self.target_index
    }

    pub fn target_color(&self) -> Color {
        self.palette[self.target_index]
    }

    /// Evaluates a guessed palette index. Correctness is index equality
    /// with the target, not color-value equality.
    pub fn evaluate_guess(&self, guessed_index: TileIdx) -> Result<GuessOutcome, PuzzleError> {
        let Some(&revealed) = self.palette.get(guessed_index) else {
            return Err(PuzzleError::InvalidIndex {
                index: guessed_index,
                len: self.palette.len(),
            });
        };
        Ok(GuessOutcome {
            correct: guessed_index == self.target_index,
            revealed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// RNG that replays a fixed sequence of words, for pinning down the
    /// channel order of generated palettes.
    struct ScriptedRng {
        words: Vec<u32>,
        pos: usize,
    }

    impl ScriptedRng {
        fn new(words: &[u32]) -> Self {
            Self {
                words: words.to_vec(),
                pos: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let word = self.words[self.pos % self.words.len()];
            self.pos += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            let hi = self.next_u32() as u64;
            let lo = self.next_u32() as u64;
            (hi << 32) | lo
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for b in dst.iter_mut() {
                *b = self.next_u32() as u8;
            }
        }
    }

    #[test]
    fn generate_respects_size_and_target_bounds() {
        for size in [1, 2, 6, 17] {
            let puzzle = PuzzleState::generate(size).unwrap();
            assert_eq!(puzzle.palette().len(), size);
            assert!(puzzle.target_index() < size);
        }
    }

    #[test]
    fn generate_rejects_zero_size() {
        assert_eq!(
            PuzzleState::generate(0).unwrap_err(),
            PuzzleError::InvalidSize(0)
        );
    }

    #[test]
    fn generate_is_reproducible_from_a_seed() {
        let a = PuzzleState::generate_with(6, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = PuzzleState::generate_with(6, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn channels_are_drawn_in_palette_order() {
        let mut rng = ScriptedRng::new(&[10, 20, 30, 200, 100, 50, 0]);
        let puzzle = PuzzleState::generate_with(2, &mut rng).unwrap();
        assert_eq!(puzzle.palette()[0], Color::rgb(10, 20, 30));
        assert_eq!(puzzle.palette()[1], Color::rgb(200, 100, 50));
        assert!(puzzle.target_index() < 2);
        assert_eq!(puzzle.palette()[0].to_string(), "rgb(10, 20, 30)");
    }

    #[test]
    fn guessing_the_target_index_is_correct() {
        let puzzle = PuzzleState {
            palette: vec![
                Color::rgb(1, 2, 3),
                Color::rgb(4, 5, 6),
                Color::rgb(7, 8, 9),
            ],
            target_index: 2,
        };
        let outcome = puzzle.evaluate_guess(2).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.revealed, Color::rgb(7, 8, 9));
    }

    #[test]
    fn guessing_another_index_is_incorrect_and_reveals_that_color() {
        let puzzle = PuzzleState {
            palette: vec![
                Color::rgb(1, 2, 3),
                Color::rgb(4, 5, 6),
                Color::rgb(7, 8, 9),
            ],
            target_index: 2,
        };
        let outcome = puzzle.evaluate_guess(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.revealed, Color::rgb(1, 2, 3));
    }

    #[test]
    fn duplicate_of_the_target_color_is_still_wrong() {
        let dup = Color::rgb(40, 40, 40);
        let puzzle = PuzzleState {
            palette: vec![dup, Color::rgb(9, 9, 9), dup],
            target_index: 2,
        };
        assert!(!puzzle.evaluate_guess(0).unwrap().correct);
        assert!(puzzle.evaluate_guess(2).unwrap().correct);
    }

    #[test]
    fn evaluate_guess_never_mutates_the_puzzle() {
        let puzzle = PuzzleState::generate_with(6, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let before = puzzle.clone();
        for i in 0..6 {
            puzzle.evaluate_guess(i).unwrap();
        }
        assert_eq!(puzzle, before);
    }

    #[test]
    fn out_of_range_guess_fails() {
        let puzzle = PuzzleState::generate(3).unwrap();
        assert_eq!(
            puzzle.evaluate_guess(3).unwrap_err(),
            PuzzleError::InvalidIndex { index: 3, len: 3 }
        );
    }
}

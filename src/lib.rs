#![doc = include_str!("../README.md")]

use thiserror::Error;

pub mod game;
pub use game::{DifficultySpec, Game, GameEngine, LengthSpec, Status};

pub mod supply;
pub use supply::{WordBank, WordCounts, WordSupply};

pub mod words;

pub mod leaderboard;
pub use leaderboard::{Entry, LeaderboardStore};

#[cfg(test)]
pub(crate) mod mock;

/// A convenient `Result` type fixed on [`HangmanError`].
pub type Result<T, E = HangmanError> = std::result::Result<T, E>;

/// The errors that `hangman_rs` can produce.
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("game encountered error")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("leaderboard store encountered error")]
    Store {
        #[from]
        kind: StoreError,
    },
}

/// Errors arising from starting or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The resolved (difficulty, length) bucket contains no words.
    ///
    /// The caller must pick a different length or difficulty; the engine
    /// never retries a different bucket on its own.
    #[error("no words available at difficulty {difficulty} for lengths {min_length}..{max_length}")]
    WordUnavailable {
        difficulty: u8,
        min_length: usize,
        max_length: usize,
    },

    /// A guess was submitted after the game reached [`Won`](Status::Won) or
    /// [`Lost`](Status::Lost).
    #[error("the game is already over")]
    GameOver,

    /// The guess was neither a single letter nor a whole word of the target's
    /// length.
    #[error("guess of {got} letters is neither a letter nor a {expected}-letter word")]
    InvalidGuess { got: usize, expected: usize },
}

/// Errors arising from committing the leaderboard to disk.
///
/// Reads never produce these: a missing or corrupt leaderboard file falls
/// back to an empty board (see
/// [`LeaderboardStore::open()`](leaderboard::LeaderboardStore::open)).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write leaderboard file")]
    Io(#[from] std::io::Error),

    #[error("trouble serializing leaderboard entries")]
    Serde(#[from] serde_json::Error),
}

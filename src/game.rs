//! The Hangman game engine.
//!
//! A [`GameEngine`] owns a [`WordSupply`] and hands out [`Game`] values; each
//! [`Game`] is one session of guessing, mutated only through
//! [`guess()`](Game::guess). Finished games are dropped and replaced by
//! another [`start()`](GameEngine::start) call; there is no in-place reset.

use std::collections::HashMap;
use std::fmt::Display;

use itertools::Itertools;
use rand::Rng;

use crate::supply::{
    WordCounts, WordSupply, MAX_DIFFICULTY, MAX_WORD_LENGTH, MIN_DIFFICULTY, MIN_WORD_LENGTH,
};
use crate::{GameError, Result};

/// How many wrong guesses a game allows before it is lost.
pub const STARTING_GUESSES: u8 = 6;

/// Where a game stands.
///
/// `Won` and `Lost` are terminal: once a game leaves `InProgress`, every
/// further [`guess()`](Game::guess) fails with [`GameError::GameOver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::Won => write!(f, "won"),
            Status::Lost => write!(f, "lost"),
        }
    }
}

/// A target word length request, resolved by [`GameEngine::start()`].
///
/// The named buckets cover length ranges: `Short` is 2 to 4 letters, `Medium`
/// 5 to 7, `Long` 8 to 10, and `Random` anything from 2 to 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthSpec {
    Random,
    Short,
    Medium,
    Long,
    Exactly(usize),
}

impl LengthSpec {
    /// Resolves to a `(min_length, max_length)` range, upper bound exclusive.
    pub(crate) fn resolve(self) -> (usize, usize) {
        match self {
            LengthSpec::Random => (MIN_WORD_LENGTH, MAX_WORD_LENGTH + 1),
            LengthSpec::Short => (2, 5),
            LengthSpec::Medium => (5, 8),
            LengthSpec::Long => (8, 11),
            LengthSpec::Exactly(n) => (n, n + 1),
        }
    }
}

/// A target word difficulty request, resolved by [`GameEngine::start()`].
///
/// The named buckets draw uniformly from difficulty sets: `Easy` from
/// {1, 2, 3}, `Medium` from {4, 5, 6, 7}, `Hard` from {8, 9, 10}, and
/// `Random` from the full 1 to 10 range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DifficultySpec {
    Random,
    Easy,
    Medium,
    Hard,
    Exactly(u8),
}

impl DifficultySpec {
    pub(crate) fn resolve(self, rng: &mut impl Rng) -> u8 {
        match self {
            DifficultySpec::Random => rng.gen_range(MIN_DIFFICULTY..=MAX_DIFFICULTY),
            DifficultySpec::Easy => rng.gen_range(1..=3),
            DifficultySpec::Medium => rng.gen_range(4..=7),
            DifficultySpec::Hard => rng.gen_range(8..=10),
            DifficultySpec::Exactly(d) => d,
        }
    }
}

/// One session of Hangman.
///
/// Holds the target word, the partially revealed pattern, the letters still
/// hidden, and the remaining guess budget. Obtain one from
/// [`GameEngine::start()`]; constructing directly with [`new()`](Game::new)
/// is mostly useful when the target word should be known in advance.
///
/// # Examples
///
/// ```rust
/// use hangman_rs::{Game, Status};
///
/// let mut game = Game::new("cat", 2);
/// assert_eq!(game.to_string(), "___");
///
/// assert!(game.guess("a")?);
/// assert!(!game.guess("x")?);
/// assert!(game.guess("c")?);
/// assert!(game.guess("t")?);
///
/// assert_eq!(game.status(), Status::Won);
/// assert_eq!(game.to_string(), "cat");
/// assert_eq!(game.score(), 2 * 3 * 5);
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    target: String,
    pattern: Vec<Option<char>>,
    letters: HashMap<char, Vec<usize>>,
    remaining_guesses: u8,
    status: Status,
    difficulty: u8,
}

impl Game {
    /// Creates a fresh game over `target` at `difficulty`.
    ///
    /// The game starts [`InProgress`](Status::InProgress) with
    /// [`STARTING_GUESSES`] guesses and a fully hidden pattern.
    pub fn new(target: impl Into<String>, difficulty: u8) -> Self {
        let target = target.into();
        let letters = target
            .chars()
            .enumerate()
            .map(|(index, c)| (c.to_ascii_lowercase(), index))
            .into_group_map();

        Game {
            pattern: vec![None; target.chars().count()],
            letters,
            target,
            remaining_guesses: STARTING_GUESSES,
            status: Status::InProgress,
            difficulty,
        }
    }

    /// Checks a guess against the target word.
    ///
    /// A single-character guess is a letter guess, matched without case
    /// sensitivity: a hit reveals every position of that letter and returns
    /// `true`, a miss spends one remaining guess and returns `false`. A guess
    /// as long as the target word is a whole-word guess, matched exactly
    /// (case included); a hit wins outright, a miss spends one remaining
    /// guess. Revealing the last hidden letter or matching the whole word
    /// moves the game to [`Won`](Status::Won); spending the last remaining
    /// guess moves it to [`Lost`](Status::Lost).
    ///
    /// Guesses of any other length fail with [`GameError::InvalidGuess`],
    /// and guesses after the game is over fail with [`GameError::GameOver`].
    /// Neither spends a remaining guess.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hangman_rs::{Game, HangmanError, Status};
    ///
    /// let mut game = Game::new("banana", 4);
    ///
    /// // One letter guess reveals every occurrence.
    /// assert!(game.guess("A")?);
    /// assert_eq!(game.to_string(), "_a_a_a");
    ///
    /// // Wrong-length input is rejected without spending a guess.
    /// assert!(game.guess("bananas").is_err());
    /// assert_eq!(game.remaining_guesses(), 6);
    ///
    /// // A whole-word guess can win outright.
    /// assert!(game.guess("banana")?);
    /// assert_eq!(game.status(), Status::Won);
    /// #
    /// # Ok::<_, HangmanError>(())
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<bool> {
        if self.status != Status::InProgress {
            return Err(GameError::GameOver.into());
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(self.guess_letter(letter)),
            _ if input.chars().count() == self.pattern.len() => Ok(self.guess_word(input)),
            _ => Err(GameError::InvalidGuess {
                got: input.chars().count(),
                expected: self.pattern.len(),
            }
            .into()),
        }
    }

    fn guess_letter(&mut self, letter: char) -> bool {
        match self.letters.remove(&letter.to_ascii_lowercase()) {
            Some(indices) => {
                for (index, c) in self.target.chars().enumerate() {
                    if indices.contains(&index) {
                        self.pattern[index] = Some(c);
                    }
                }
                if self.letters.is_empty() {
                    self.status = Status::Won;
                }
                true
            }
            None => {
                self.miss();
                false
            }
        }
    }

    fn guess_word(&mut self, word: &str) -> bool {
        if word == self.target {
            for (index, c) in self.target.chars().enumerate() {
                self.pattern[index] = Some(c);
            }
            self.letters.clear();
            self.status = Status::Won;
            true
        } else {
            self.miss();
            false
        }
    }

    fn miss(&mut self) {
        self.remaining_guesses -= 1;
        if self.remaining_guesses == 0 {
            self.status = Status::Lost;
        }
    }

    /// The score for this game: `difficulty * word_length * remaining_guesses`
    /// once the game is [`Won`](Status::Won), and zero otherwise.
    pub fn score(&self) -> u32 {
        match self.status {
            Status::Won => {
                u32::from(self.difficulty)
                    * self.pattern.len() as u32
                    * u32::from(self.remaining_guesses)
            }
            Status::InProgress | Status::Lost => 0,
        }
    }

    /// The target word.
    ///
    /// A UI will usually only show this once the game is over.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The pattern of revealed letters, `None` where still hidden.
    pub fn revealed(&self) -> &[Option<char>] {
        &self.pattern
    }

    /// Where the game stands.
    pub fn status(&self) -> Status {
        self.status
    }

    /// How many wrong guesses are left before the game is lost.
    pub fn remaining_guesses(&self) -> u8 {
        self.remaining_guesses
    }

    /// The resolved difficulty of the target word.
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// The length of the target word.
    pub fn word_length(&self) -> usize {
        self.pattern.len()
    }
}

/// Renders the revealed pattern, using `_` for hidden letters.
impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.pattern {
            write!(f, "{}", c.unwrap_or('_'))?;
        }
        Ok(())
    }
}

/// Starts games against a [`WordSupply`].
///
/// Building the engine queries the supply once for the full availability
/// matrix (see [`WordCounts`]); after that, each
/// [`start()`](GameEngine::start) costs a single word fetch.
#[derive(Debug)]
pub struct GameEngine<S: WordSupply> {
    supply: S,
    counts: WordCounts,
}

impl<S: WordSupply> GameEngine<S> {
    /// Creates an engine over `supply`, counting its words per bucket.
    pub fn new(supply: S) -> Self {
        let counts = WordCounts::build(&supply);
        GameEngine { supply, counts }
    }

    /// Starts a fresh game, resolving `length` and `difficulty` to a concrete
    /// bucket and drawing one word from it at random.
    ///
    /// Fails with [`GameError::WordUnavailable`] when the resolved bucket has
    /// no words (for example, difficulty 1 at length 10 in the embedded
    /// bank). The engine never re-resolves on its own; pick a different
    /// length or difficulty and call again.
    ///
    /// This is also the reset path: to restart, drop the old [`Game`] and
    /// start another.
    pub fn start(&mut self, length: LengthSpec, difficulty: DifficultySpec) -> Result<Game> {
        let mut rng = rand::thread_rng();
        let (min_length, max_length) = length.resolve();
        let difficulty = difficulty.resolve(&mut rng);

        let available = self.counts.available(difficulty, min_length, max_length);
        if available == 0 {
            return Err(GameError::WordUnavailable {
                difficulty,
                min_length,
                max_length,
            }
            .into());
        }

        let start = rng.gen_range(0..available);
        let word = self
            .supply
            .fetch_word(min_length, max_length, difficulty, start, 1)
            .ok_or(GameError::WordUnavailable {
                difficulty,
                min_length,
                max_length,
            })?;

        Ok(Game::new(word, difficulty))
    }

    /// The availability matrix built from the supply.
    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }

    /// Re-queries the supply for a fresh availability matrix.
    pub fn reload_counts(&mut self) {
        self.counts.rebuild(&self.supply);
    }
}

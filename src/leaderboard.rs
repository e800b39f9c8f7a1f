//! The persistent per-player leaderboard.
//!
//! A [`LeaderboardStore`] keeps one [`Entry`] per player and rewrites its
//! whole JSON file after every recorded game, so each
//! [`add_game()`](LeaderboardStore::add_game) is a durable commit. Opening a
//! store never fails: a missing or unreadable file just starts an empty
//! board.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, StoreError};

/// How many entries [`top_scoreboard()`](LeaderboardStore::top_scoreboard)
/// shows by default.
pub const SCOREBOARD_SIZE: usize = 10;

/// One player's aggregate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub player: String,
    pub games_played: u32,
    pub games_won: u32,
    pub total_score: u32,
}

impl Entry {
    fn new(player: &str) -> Self {
        Entry {
            player: player.to_string(),
            games_played: 0,
            games_won: 0,
            total_score: 0,
        }
    }

    /// The player's win rate, formatted like `"66.67%"`.
    ///
    /// Returns `"0%"` when no games have been played, so the formatting
    /// never divides by zero.
    pub fn win_percentage(&self) -> String {
        if self.games_played == 0 {
            return "0%".to_string();
        }
        let rate = f64::from(self.games_won) / f64::from(self.games_played) * 100.0;
        format!("{:.2}%", rate)
    }
}

/// Per-player aggregate stats, persisted to a JSON file.
///
/// # Examples
///
/// ```rust,no_run
/// use hangman_rs::LeaderboardStore;
///
/// let mut board = LeaderboardStore::open("history.json");
/// board.add_game("alice", 30)?;
/// board.add_game("alice", 0)?;
///
/// assert_eq!(board.player_stats("alice"), ("50.00%".to_string(), 30));
/// #
/// # Ok::<_, hangman_rs::HangmanError>(())
/// ```
#[derive(Debug)]
pub struct LeaderboardStore {
    path: PathBuf,
    entries: HashMap<String, Entry>,
}

impl LeaderboardStore {
    /// Opens the store at `path`, loading any previously persisted entries.
    ///
    /// A missing file means a fresh board. A file that exists but does not
    /// parse also means a fresh board (with a warning in the log); the game
    /// must not die over a damaged history file. Records that parse but
    /// claim more wins than games played are dropped the same way, so every
    /// loaded entry satisfies `games_won <= games_played`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        LeaderboardStore { path, entries }
    }

    fn load(path: &Path) -> HashMap<String, Entry> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return HashMap::new(),
        };

        match serde_json::from_str::<Vec<Entry>>(&contents) {
            Ok(list) => list
                .into_iter()
                .filter(|entry| {
                    if entry.games_won > entry.games_played {
                        log::warn!(
                            "leaderboard file {} has an impossible record for {} \
                             ({} wins in {} games), dropping it",
                            path.display(),
                            entry.player,
                            entry.games_won,
                            entry.games_played
                        );
                        return false;
                    }
                    true
                })
                .map(|entry| (entry.player.clone(), entry))
                .collect(),
            Err(err) => {
                log::warn!(
                    "leaderboard file {} is corrupt ({}), starting empty",
                    path.display(),
                    err
                );
                HashMap::new()
            }
        }
    }

    /// Records a finished game for `player` and commits the whole board.
    ///
    /// Increments the player's games played, counts the game as won iff
    /// `score > 0`, and adds `score` to their total. First-time players get
    /// a fresh entry. The full entry set is rewritten to disk before this
    /// returns, so a crash after [`add_game()`](Self::add_game) loses
    /// nothing.
    pub fn add_game(&mut self, player: &str, score: u32) -> Result<()> {
        let entry = self
            .entries
            .entry(player.to_string())
            .or_insert_with(|| Entry::new(player));

        entry.games_played += 1;
        if score > 0 {
            entry.games_won += 1;
        }
        entry.total_score += score;

        self.save()?;
        Ok(())
    }

    fn save(&self) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(&self.ranked())?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// The player's `(win_percentage, total_score)`.
    ///
    /// Unknown players (and entries that somehow recorded zero games) get
    /// the `("0%", 0)` sentinel rather than an error.
    pub fn player_stats(&self, player: &str) -> (String, u32) {
        match self.entries.get(player) {
            Some(entry) if entry.games_played > 0 => {
                (entry.win_percentage(), entry.total_score)
            }
            _ => ("0%".to_string(), 0),
        }
    }

    /// The top `n` entries by total score, descending.
    ///
    /// Ties order alphabetically by player so the board is stable between
    /// calls. [`SCOREBOARD_SIZE`] is the conventional display size.
    pub fn top_scoreboard(&self, n: usize) -> Vec<&Entry> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    fn ranked(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.values().collect();
        entries.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.player.cmp(&b.player))
        });
        entries
    }

    /// How many players have recorded games.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no games have ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The file this store commits to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::TempDir;

    /// Creates a temp dir (must stay in scope to keep the path alive) and a
    /// history file path inside it.
    fn scratch() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("history.json");
        (dir, path)
    }

    #[test]
    fn missing_file_starts_empty() {
        let (_dir, path) = scratch();
        let board = LeaderboardStore::open(&path);
        assert!(board.is_empty());
        assert_eq!(board.player_stats("anyone"), ("0%".to_string(), 0));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let (_dir, path) = scratch();
        fs::write(&path, "{ not json ]").unwrap();
        let board = LeaderboardStore::open(&path);
        assert!(board.is_empty());
    }

    #[test]
    fn impossible_records_are_dropped_on_load() {
        let (_dir, path) = scratch();
        fs::write(
            &path,
            r#"[
                {"player":"mallory","games_played":2,"games_won":5,"total_score":10},
                {"player":"alice","games_played":2,"games_won":1,"total_score":30}
            ]"#,
        )
        .unwrap();

        let board = LeaderboardStore::open(&path);
        assert_eq!(board.len(), 1);
        assert_eq!(board.player_stats("mallory"), ("0%".to_string(), 0));
        assert_eq!(board.player_stats("alice"), ("50.00%".to_string(), 30));
    }

    #[test]
    fn add_game_aggregates_per_player() {
        let (_dir, path) = scratch();
        let mut board = LeaderboardStore::open(&path);

        board.add_game("alice", 30).unwrap();
        board.add_game("alice", 0).unwrap();

        let entry = &board.top_scoreboard(1)[0];
        assert_eq!(entry.player, "alice");
        assert_eq!(entry.games_played, 2);
        assert_eq!(entry.games_won, 1);
        assert_eq!(entry.total_score, 30);
        assert_eq!(board.player_stats("alice"), ("50.00%".to_string(), 30));
    }

    #[test]
    fn zero_score_counts_as_a_loss() {
        let (_dir, path) = scratch();
        let mut board = LeaderboardStore::open(&path);
        board.add_game("bob", 0).unwrap();
        assert_eq!(board.player_stats("bob"), ("0.00%".to_string(), 0));
    }

    #[test]
    fn every_game_is_a_durable_commit() {
        let (_dir, path) = scratch();

        {
            let mut board = LeaderboardStore::open(&path);
            board.add_game("alice", 42).unwrap();
            board.add_game("bob", 7).unwrap();
        }

        let board = LeaderboardStore::open(&path);
        assert_eq!(board.len(), 2);
        assert_eq!(board.player_stats("alice"), ("100.00%".to_string(), 42));
        assert_eq!(board.player_stats("bob"), ("100.00%".to_string(), 7));
    }

    #[test]
    fn stats_are_idempotent_between_games() {
        let (_dir, path) = scratch();
        let mut board = LeaderboardStore::open(&path);
        board.add_game("carol", 12).unwrap();
        assert_eq!(board.player_stats("carol"), board.player_stats("carol"));
    }

    #[test]
    fn scoreboard_ranks_by_total_score() {
        let (_dir, path) = scratch();
        let mut board = LeaderboardStore::open(&path);

        board.add_game("low", 5).unwrap();
        board.add_game("high", 90).unwrap();
        board.add_game("mid", 40).unwrap();
        board.add_game("also-mid", 40).unwrap();

        let names: Vec<&str> = board
            .top_scoreboard(SCOREBOARD_SIZE)
            .iter()
            .map(|entry| entry.player.as_str())
            .collect();
        assert_eq!(names, ["high", "also-mid", "mid", "low"]);

        assert_eq!(board.top_scoreboard(2).len(), 2);
    }

    #[test]
    fn won_never_exceeds_played() {
        let (_dir, path) = scratch();
        let mut board = LeaderboardStore::open(&path);
        for score in [0, 10, 0, 3, 0] {
            board.add_game("dave", score).unwrap();
        }
        let entry = &board.top_scoreboard(1)[0];
        assert!(entry.games_won <= entry.games_played);
        assert_eq!(entry.games_played, 5);
        assert_eq!(entry.games_won, 2);
    }
}

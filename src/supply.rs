//! Supplying target words by length and difficulty.
//!
//! The game engine never knows where words come from. It talks to a
//! [`WordSupply`], asking for word counts per (difficulty, length) bucket and
//! fetching single words by offset into a bucket. [`WordBank`] is the
//! batteries-included implementation backed by the table in
//! [`words`](crate::words); anything else (a word API client, a dictionary
//! file) can implement the trait instead.

use crate::words::WORDS;

/// The lowest word difficulty a supply can be asked for.
pub const MIN_DIFFICULTY: u8 = 1;

/// The highest word difficulty a supply can be asked for.
pub const MAX_DIFFICULTY: u8 = 10;

/// The shortest word length a supply can be asked for.
pub const MIN_WORD_LENGTH: usize = 2;

/// The longest word length a supply can be asked for.
pub const MAX_WORD_LENGTH: usize = 10;

/// A source of target words.
///
/// Both operations are plain blocking calls. A supply signals that it has no
/// word for a request by returning `None` from
/// [`fetch_word()`](WordSupply::fetch_word); it is never the supply's job to
/// retry or substitute a different bucket.
pub trait WordSupply {
    /// Fetches one word with length in `min_length..max_length` (upper bound
    /// exclusive) at exactly `difficulty`.
    ///
    /// `start` is an offset into the supply's enumeration of the matching
    /// words, and `count` is the size of the window the caller wants; the
    /// first word of the window is returned. The engine always asks for a
    /// window of one, with `start` drawn at random from the counted bucket
    /// size.
    fn fetch_word(
        &self,
        min_length: usize,
        max_length: usize,
        difficulty: u8,
        start: usize,
        count: usize,
    ) -> Option<String>;

    /// Reports how many words of exactly `length` exist at `difficulty`.
    fn count_available(&self, difficulty: u8, length: usize) -> usize;
}

/// A [`WordSupply`] backed by the embedded table in [`words`](crate::words).
///
/// Enumeration order is table order, so fetches are deterministic for a given
/// `(bucket, start)` pair.
#[derive(Debug, Clone, Copy)]
pub struct WordBank {
    table: &'static [(&'static str, u8)],
}

impl WordBank {
    /// Creates a bank over the full embedded word table.
    pub fn new() -> Self {
        WordBank { table: WORDS }
    }

    /// Creates a bank over a caller-provided `(word, difficulty)` table.
    pub fn with_table(table: &'static [(&'static str, u8)]) -> Self {
        WordBank { table }
    }

    fn bucket(
        &self,
        min_length: usize,
        max_length: usize,
        difficulty: u8,
    ) -> impl Iterator<Item = &'static str> + '_ {
        self.table
            .iter()
            .filter(move |(word, d)| {
                *d == difficulty && word.len() >= min_length && word.len() < max_length
            })
            .map(|(word, _)| *word)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSupply for WordBank {
    fn fetch_word(
        &self,
        min_length: usize,
        max_length: usize,
        difficulty: u8,
        start: usize,
        count: usize,
    ) -> Option<String> {
        if count == 0 {
            return None;
        }
        self.bucket(min_length, max_length, difficulty)
            .skip(start)
            .take(count)
            .map(str::to_string)
            .next()
    }

    fn count_available(&self, difficulty: u8, length: usize) -> usize {
        self.bucket(length, length + 1, difficulty).count()
    }
}

/// The per-(difficulty, length) word availability matrix.
///
/// Built once from a supply and owned by the [`GameEngine`](crate::GameEngine)
/// so that starting a game costs a single [`fetch_word()`] call instead of a
/// bucket scan. Buckets outside the supported difficulty and length ranges
/// always count zero.
///
/// [`fetch_word()`]: WordSupply::fetch_word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounts {
    counts: [[usize; MAX_WORD_LENGTH + 1]; MAX_DIFFICULTY as usize + 1],
}

impl WordCounts {
    /// Queries `supply` for every supported (difficulty, length) bucket.
    pub fn build(supply: &impl WordSupply) -> Self {
        let mut counts = [[0; MAX_WORD_LENGTH + 1]; MAX_DIFFICULTY as usize + 1];
        let mut total = 0;
        for difficulty in MIN_DIFFICULTY..=MAX_DIFFICULTY {
            for length in MIN_WORD_LENGTH..=MAX_WORD_LENGTH {
                let n = supply.count_available(difficulty, length);
                counts[difficulty as usize][length] = n;
                total += n;
            }
        }
        log::debug!("word counts built, {} words indexed", total);
        WordCounts { counts }
    }

    /// Re-queries the supply, replacing the matrix in place.
    pub fn rebuild(&mut self, supply: &impl WordSupply) {
        *self = Self::build(supply);
    }

    /// The number of words of exactly `length` at `difficulty`.
    pub fn count(&self, difficulty: u8, length: usize) -> usize {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty)
            || !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length)
        {
            return 0;
        }
        self.counts[difficulty as usize][length]
    }

    /// The number of words at `difficulty` with length in
    /// `min_length..max_length` (upper bound exclusive).
    pub fn available(&self, difficulty: u8, min_length: usize, max_length: usize) -> usize {
        (min_length..max_length)
            .map(|length| self.count(difficulty, length))
            .sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static TINY: &[(&str, u8)] = &[("at", 1), ("cat", 1), ("dog", 1), ("cart", 2)];

    #[test]
    fn bank_counts_exact_lengths() {
        let bank = WordBank::with_table(TINY);
        assert_eq!(bank.count_available(1, 3), 2);
        assert_eq!(bank.count_available(1, 4), 0);
        assert_eq!(bank.count_available(2, 4), 1);
        assert_eq!(bank.count_available(3, 3), 0);
    }

    #[test]
    fn bank_fetches_by_offset_in_table_order() {
        let bank = WordBank::with_table(TINY);
        assert_eq!(bank.fetch_word(3, 4, 1, 0, 1).as_deref(), Some("cat"));
        assert_eq!(bank.fetch_word(3, 4, 1, 1, 1).as_deref(), Some("dog"));
        assert_eq!(bank.fetch_word(3, 4, 1, 2, 1), None);
        assert_eq!(bank.fetch_word(3, 4, 1, 0, 0), None);
    }

    #[test]
    fn bank_respects_exclusive_upper_bound() {
        let bank = WordBank::with_table(TINY);
        assert_eq!(bank.fetch_word(2, 4, 1, 0, 1).as_deref(), Some("at"));
        assert_eq!(bank.fetch_word(4, 5, 1, 0, 1), None);
        assert_eq!(bank.fetch_word(4, 5, 2, 0, 1).as_deref(), Some("cart"));
    }

    #[test]
    fn counts_matrix_matches_supply() {
        let bank = WordBank::with_table(TINY);
        let counts = WordCounts::build(&bank);
        assert_eq!(counts.count(1, 2), 1);
        assert_eq!(counts.count(1, 3), 2);
        assert_eq!(counts.available(1, 2, 5), 3);
        assert_eq!(counts.available(2, 2, 11), 1);
    }

    #[test]
    fn counts_outside_supported_ranges_are_zero() {
        let counts = WordCounts::build(&WordBank::with_table(TINY));
        assert_eq!(counts.count(0, 3), 0);
        assert_eq!(counts.count(11, 3), 0);
        assert_eq!(counts.count(1, 1), 0);
        assert_eq!(counts.count(1, 64), 0);
        assert_eq!(counts.available(1, 0, 100), 3);
    }

    #[test]
    fn embedded_table_has_no_easy_ten_letter_words() {
        // The documented zero-word bucket from the word table: difficulty 1
        // offers nothing at length 10.
        let counts = WordCounts::build(&WordBank::new());
        assert_eq!(counts.count(1, 10), 0);
        assert!(counts.available(1, 2, 10) > 0);
    }

    #[test]
    fn embedded_table_is_well_formed() {
        for (word, difficulty) in crate::words::WORDS {
            assert!(
                (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()),
                "{word} has an unsupported length"
            );
            assert!(
                (MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(difficulty),
                "{word} has an unsupported difficulty"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "{word} is not lowercase ascii"
            );
        }
    }
}

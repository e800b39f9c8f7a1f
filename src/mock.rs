use crate::supply::WordSupply;

/// A scripted word supply for unit tests.
#[derive(Debug, Clone)]
pub(crate) struct Mock {
    words: Option<Vec<(&'static str, u8)>>,
}

impl Mock {
    pub(crate) fn new(words: impl Into<Option<Vec<(&'static str, u8)>>>) -> Self {
        Self {
            words: words.into(),
        }
    }

    fn table(&self) -> &[(&'static str, u8)] {
        match &self.words {
            None => &[
                ("ox", 1),
                ("cat", 1),
                ("dog", 2),
                ("bird", 3),
                ("horse", 4),
                ("rabbit", 5),
                ("panther", 6),
                ("squirrel", 7),
                ("porcupine", 8),
                ("chimpanzee", 9),
                ("salamander", 10),
            ],
            Some(v) => v.as_slice(),
        }
    }
}

impl WordSupply for Mock {
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
        self.table()
            .iter()
            .filter(|(word, d)| {
                *d == difficulty && word.len() >= min_length && word.len() < max_length
            })
            .skip(start)
            .take(count)
            .map(|(word, _)| (*word).to_string())
            .next()
    }

    fn count_available(&self, difficulty: u8, length: usize) -> usize {
        self.table()
            .iter()
            .filter(|(word, d)| *d == difficulty && word.len() == length)
            .count()
    }
}

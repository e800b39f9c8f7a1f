//! The embedded word table backing [`WordBank`](crate::supply::WordBank).
//!
//! Each entry pairs a lowercase word with its difficulty, 1 (everyday
//! vocabulary) through 10 (dictionary deep cuts). Word lengths run from 2 to
//! 10 letters. Note that difficulty 1 has no 10-letter words at all; that
//! bucket is genuinely empty, and callers asking for it get
//! [`GameError::WordUnavailable`](crate::GameError::WordUnavailable).

/// Every word the embedded bank can serve, as `(word, difficulty)` pairs.
///
/// Sorted by difficulty, then alphabetically. The enumeration order of this
/// table is the bucket enumeration order that
/// [`WordSupply::fetch_word`](crate::supply::WordSupply::fetch_word) offsets
/// index into.
pub static WORDS: &[(&str, u8)] = &[
    // difficulty 1
    ("at", 1),
    ("be", 1),
    ("book", 1),
    ("cat", 1),
    ("dog", 1),
    ("fish", 1),
    ("friend", 1),
    ("garden", 1),
    ("house", 1),
    ("morning", 1),
    ("sun", 1),
    ("sunshine", 1),
    ("water", 1),
    ("wonderful", 1),
    // difficulty 2
    ("adventure", 2),
    ("bread", 2),
    ("icy", 2),
    ("journey", 2),
    ("mountain", 2),
    ("oak", 2),
    ("ox", 2),
    ("planet", 2),
    ("pond", 2),
    ("stone", 2),
    ("watermelon", 2),
    // difficulty 3
    ("ash", 3),
    ("blacksmith", 3),
    ("crisp", 3),
    ("gaze", 3),
    ("harvest", 3),
    ("lantern", 3),
    ("meadow", 3),
    ("nightfall", 3),
    ("splendid", 3),
    ("twilight", 3),
    // difficulty 4
    ("dilettante", 4),
    ("ebb", 4),
    ("flux", 4),
    ("gossamer", 4),
    ("juxtapose", 4),
    ("knack", 4),
    ("labyrinth", 4),
    ("paradox", 4),
    ("quagmire", 4),
    ("zephyr", 4),
    // difficulty 5
    ("awry", 5),
    ("candor", 5),
    ("ephemeral", 5),
    ("halcyon", 5),
    ("iconoclast", 5),
    ("quixotic", 5),
    ("tacit", 5),
    ("vex", 5),
    // difficulty 6
    ("axiom", 6),
    ("enclave", 6),
    ("koan", 6),
    ("panegyric", 6),
    ("paragon", 6),
    ("sycophancy", 6),
    ("zenith", 6),
    // difficulty 7
    ("adze", 7),
    ("anathema", 7),
    ("bijou", 7),
    ("ephemera", 7),
    ("lacuna", 7),
    ("obloquy", 7),
    ("phantasmal", 7),
    ("qi", 7),
    ("soliloquy", 7),
    // difficulty 8
    ("apothegm", 8),
    ("cwm", 8),
    ("exegete", 8),
    ("ka", 8),
    ("obsequies", 8),
    ("ogee", 8),
    ("palimpsest", 8),
    ("synecdoche", 8),
    ("threnody", 8),
    ("umbra", 8),
    // difficulty 9
    ("caesura", 9),
    ("exordium", 9),
    ("objurgate", 9),
    ("orrery", 9),
    ("qoph", 9),
    ("triskelion", 9),
    ("ullage", 9),
    ("wayzgoose", 9),
    ("welkin", 9),
    ("zax", 9),
    // difficulty 10
    ("bezique", 10),
    ("logomachy", 10),
    ("mythopoeia", 10),
    ("pleonasm", 10),
    ("qat", 10),
    ("xebec", 10),
    ("yclept", 10),
    ("za", 10),
    ("zeugma", 10),
];

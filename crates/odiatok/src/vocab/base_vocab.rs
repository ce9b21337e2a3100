//! # Odia Base Vocabulary
//!
//! The fixed single-character seed set shared by every trained vocabulary.
//!
//! Enumeration order is significant: it fixes the base token ids,
//! which start directly after the special tokens.

use crate::vocab::SPECIAL_TOKEN_COUNT;

/// Independent vowels.
pub const VOWELS: [char; 12] = [
    'ଅ', 'ଆ', 'ଇ', 'ଈ', 'ଉ', 'ଊ', 'ଋ', 'ୠ', 'ଏ', 'ଐ', 'ଓ', 'ଔ',
];

/// Consonants, by class: gutturals, palatals, cerebrals, dentals, labials.
pub const CONSONANT_CLASSES: [[char; 5]; 5] = [
    ['କ', 'ଖ', 'ଗ', 'ଘ', 'ଙ'],
    ['ଚ', 'ଛ', 'ଜ', 'ଝ', 'ଞ'],
    ['ଟ', 'ଠ', 'ଡ', 'ଢ', 'ଣ'],
    ['ତ', 'ଥ', 'ଦ', 'ଧ', 'ନ'],
    ['ପ', 'ଫ', 'ବ', 'ଭ', 'ମ'],
];

/// Semi-vowels.
pub const SEMI_VOWELS: [char; 5] = ['ଯ', 'ର', 'ଲ', 'ଵ', 'ଳ'];

/// Sibilants.
pub const SIBILANTS: [char; 3] = ['ଶ', 'ଷ', 'ସ'];

/// Aspirate.
pub const ASPIRATE: [char; 1] = ['ହ'];

/// Odia digits, zero through nine.
pub const DIGITS: [char; 10] = ['୦', '୧', '୨', '୩', '୪', '୫', '୬', '୭', '୮', '୯'];

/// Dependent vowel signs.
pub const VOWEL_SIGNS: [char; 10] = [
    '\u{0B3F}', '\u{0B40}', '\u{0B41}', '\u{0B42}', '\u{0B43}', '\u{0B44}', '\u{0B47}',
    '\u{0B48}', '\u{0B4B}', '\u{0B4C}',
];

/// Candrabindu, anusvara, visarga, and virama.
pub const SPECIAL_MARKS: [char; 4] = ['\u{0B01}', '\u{0B02}', '\u{0B03}', '\u{0B4D}'];

/// Danda, double danda, and isshar.
pub const PUNCTUATION: [char; 3] = ['।', '॥', '୰'];

/// Whitespace-like separators.
pub const SEPARATORS: [char; 4] = [' ', '\n', '\t', '-'];

/// The number of base characters.
pub const BASE_VOCAB_SIZE: usize = 77;

/// Every base character, in id order.
pub const ODIA_BASE_CHARS: [char; BASE_VOCAB_SIZE] = {
    let mut chars = [' '; BASE_VOCAB_SIZE];
    let mut n = 0;

    macro_rules! push_all {
        ($group:expr) => {{
            let group = $group;
            let mut i = 0;
            while i < group.len() {
                chars[n] = group[i];
                n += 1;
                i += 1;
            }
        }};
    }

    push_all!(VOWELS);
    let mut c = 0;
    while c < CONSONANT_CLASSES.len() {
        push_all!(CONSONANT_CLASSES[c]);
        c += 1;
    }
    push_all!(SEMI_VOWELS);
    push_all!(SIBILANTS);
    push_all!(ASPIRATE);
    push_all!(DIGITS);
    push_all!(VOWEL_SIGNS);
    push_all!(SPECIAL_MARKS);
    push_all!(PUNCTUATION);
    push_all!(SEPARATORS);

    assert!(n == BASE_VOCAB_SIZE);
    chars
};

/// The id of the first base character.
pub const FIRST_BASE_ID: usize = SPECIAL_TOKEN_COUNT;

/// Iterate ``(id, char)`` for the base characters.
pub fn base_entries() -> impl Iterator<Item = (usize, char)> {
    ODIA_BASE_CHARS
        .iter()
        .enumerate()
        .map(|(i, &c)| (FIRST_BASE_ID + i, c))
}

/// Is `c` in the base set?
pub fn is_base_char(c: char) -> bool {
    ODIA_BASE_CHARS.contains(&c)
}

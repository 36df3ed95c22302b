//! Random string sampling over ASCII alphanumerics or multi-script Unicode.
//!
//! Every sampler takes the RNG by `&mut` so callers decide whether output is
//! reproducible (seeded `StdRng`) or not.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Inclusive code-point ranges used for multi-script sampling.
///
/// CJK ideographs, Hiragana, Katakana, Hangul, Cyrillic, Devanagari, Arabic, Hebrew.
pub const UNICODE_RANGES: [(u32, u32); 8] = [
    (0x4E00, 0x9FFF),
    (0x3040, 0x309F),
    (0x30A0, 0x30FF),
    (0xAC00, 0xD7AF),
    (0x0400, 0x04FF),
    (0x0900, 0x097F),
    (0x0600, 0x06FF),
    (0x0590, 0x05FF),
];

/// Character source for [`random_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// `A-Z`, `a-z`, `0-9`.
    Plain,
    /// One of [`UNICODE_RANGES`] per character.
    Unicode,
}

impl Alphabet {
    /// `Unicode` when multilingual output is requested, `Plain` otherwise.
    pub fn for_multilingual(multilingual: bool) -> Self {
        if multilingual {
            Alphabet::Unicode
        } else {
            Alphabet::Plain
        }
    }
}

/// Returns a string of exactly `len` characters drawn from `alphabet`.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize, alphabet: Alphabet) -> String {
    match alphabet {
        Alphabet::Plain => rng
            .sample_iter(Alphanumeric)
            .take(len)
            .map(char::from)
            .collect(),
        Alphabet::Unicode => (0..len).map(|_| random_script_char(rng)).collect(),
    }
}

/// Returns `len` ASCII digits; leading zeros are kept.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn random_script_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    let (start, end) = UNICODE_RANGES[rng.random_range(0..UNICODE_RANGES.len())];
    let cp = rng.random_range(start..=end);
    // None of the ranges touch the surrogate block.
    char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER)
}

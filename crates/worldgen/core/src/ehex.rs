//! Extended hex ("ehex") digits.
//!
//! Values 0-33 fit in one character: `0-9`, then `A-Z` without `I` and `O`
//! (too easily confused with `1` and `0`).

use core::fmt;

/// Largest value an ehex digit can hold.
pub const EHEX_MAX: u8 = 33;

/// Character emitted for values that cannot be encoded.
pub const OUT_OF_RANGE: char = '?';

const ALPHABET: [char; 34] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J',
    'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Encodes `value` as a single ehex character, or [`OUT_OF_RANGE`] if it is
/// outside `0..=33`.
pub fn encode(value: i32) -> char {
    match u8::try_from(value) {
        Ok(v) if v <= EHEX_MAX => ALPHABET[v as usize],
        _ => OUT_OF_RANGE,
    }
}

/// Decodes an ehex character (case-insensitive).
///
/// Returns `None` for anything outside the 34-symbol alphabet.
pub fn decode(ch: char) -> Option<u8> {
    let upper = ch.to_ascii_uppercase();
    match upper {
        '0'..='9' => Some(upper as u8 - b'0'),
        'I' | 'O' => None,
        'A'..='H' => Some(upper as u8 - b'A' + 10),
        'J'..='N' => Some(upper as u8 - b'J' + 18),
        'P'..='Z' => Some(upper as u8 - b'P' + 23),
        _ => None,
    }
}

/// A validated ehex digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ehex(u8);

impl Ehex {
    /// Parses one ehex character.
    pub fn from_char(ch: char) -> Option<Self> {
        decode(ch).map(Self)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        ALPHABET[self.0 as usize]
    }
}

impl TryFrom<i32> for Ehex {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v <= EHEX_MAX => Ok(Self(v)),
            _ => Err(value),
        }
    }
}

impl From<Ehex> for i32 {
    fn from(value: Ehex) -> Self {
        value.0 as i32
    }
}

impl fmt::Display for Ehex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

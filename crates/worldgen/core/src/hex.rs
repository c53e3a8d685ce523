//! Hex locations on sector and subsector maps.
//!
//! A sector is 32 hexes wide and 40 tall, split into 16 subsectors of 8x10
//! laid out like this:
//!
//! ```text
//!  /---------------\
//!  | A | B | C | D |
//!  |---+---+---+---|
//!  | E | F | G | H |
//!  |---+---+---+---|
//!  | I | J | K | L |
//!  |---+---+---+---|
//!  | M | N | O | P |
//!  \---------------/
//! ```

use core::cmp::Ordering;
use core::fmt;

use crate::error::{ErrorSeverity, WorldgenError};

/// Sector map width in hexes.
pub const SECTOR_WIDTH: u8 = 32;
/// Sector map height in hexes.
pub const SECTOR_HEIGHT: u8 = 40;
/// Subsector map width in hexes.
pub const SUBSECTOR_WIDTH: u8 = 8;
/// Subsector map height in hexes.
pub const SUBSECTOR_HEIGHT: u8 = 10;

/// Whether a location is relative to a whole sector or a single subsector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    Sector,
    Subsector,
}

impl Scale {
    const fn bounds(self) -> (u8, u8) {
        match self {
            Scale::Sector => (SECTOR_WIDTH, SECTOR_HEIGHT),
            Scale::Subsector => (SUBSECTOR_WIDTH, SUBSECTOR_HEIGHT),
        }
    }
}

/// Subsector letter within a sector, row-major over the 4x4 layout.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum SubsectorIndex {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
}

impl SubsectorIndex {
    /// Number of subsectors in a sector.
    pub const COUNT: usize = 16;

    /// Position in the 0-15 ordering ("A" is 0, "E" is 4).
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Column (0-3) of this subsector in the sector layout.
    pub const fn column(self) -> u8 {
        self as u8 % 4
    }

    /// Row (0-3) of this subsector in the sector layout.
    pub const fn row(self) -> u8 {
        self as u8 / 4
    }
}

/// Errors produced while parsing, converting or comparing hex locations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexLocError {
    /// The text is not exactly four decimal digits.
    #[error("hex location '{0}' must be four digits (XXYY)")]
    Malformed(String),

    /// The coordinates fall outside the map for this scale.
    #[error("hex location {x:02}{y:02} is outside the {scale:?} map")]
    OutOfRange { x: u8, y: u8, scale: Scale },

    /// Conversion between scales was requested from the wrong scale.
    #[error("cannot convert a {0:?} location this way")]
    WrongScale(Scale),

    /// Sector and subsector locations were compared.
    #[error("cannot compare sector and subsector locations")]
    ScaleMismatch,
}

impl WorldgenError for HexLocError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            HexLocError::Malformed(_) => "HEX_MALFORMED",
            HexLocError::OutOfRange { .. } => "HEX_OUT_OF_RANGE",
            HexLocError::WrongScale(_) => "HEX_WRONG_SCALE",
            HexLocError::ScaleMismatch => "HEX_SCALE_MISMATCH",
        }
    }
}

/// A map location, formatted as "XXYY".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexLoc {
    x: u8,
    y: u8,
    scale: Scale,
}

impl HexLoc {
    /// Creates a location from coordinates, validating them against `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`HexLocError::OutOfRange`] if either coordinate is off the map.
    pub fn new(x: u8, y: u8, scale: Scale) -> Result<Self, HexLocError> {
        let (width, height) = scale.bounds();
        if !(1..=width).contains(&x) || !(1..=height).contains(&y) {
            return Err(HexLocError::OutOfRange { x, y, scale });
        }
        Ok(Self { x, y, scale })
    }

    /// Parses a four digit "XXYY" string.
    ///
    /// # Errors
    ///
    /// Returns [`HexLocError::Malformed`] unless the text is exactly four
    /// ASCII digits, or [`HexLocError::OutOfRange`] for coordinates off the map.
    pub fn parse(text: &str, scale: Scale) -> Result<Self, HexLocError> {
        let bytes = text.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(HexLocError::Malformed(text.to_owned()));
        }
        let x = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let y = (bytes[2] - b'0') * 10 + (bytes[3] - b'0');
        Self::new(x, y, scale)
    }

    #[inline]
    pub const fn x(&self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> u8 {
        self.y
    }

    #[inline]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    #[inline]
    pub const fn is_sector(&self) -> bool {
        matches!(self.scale, Scale::Sector)
    }

    /// Subsector letter containing this location; `None` for subsector-scale
    /// locations.
    pub fn index(&self) -> Option<SubsectorIndex> {
        if !self.is_sector() {
            return None;
        }
        let idx = 4 * ((self.y - 1) / SUBSECTOR_HEIGHT) + (self.x - 1) / SUBSECTOR_WIDTH;
        SubsectorIndex::from_repr(idx)
    }

    /// Converts a subsector location into the sector location it occupies in
    /// subsector `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HexLocError::WrongScale`] if this is already a sector location.
    pub fn to_sector(&self, index: SubsectorIndex) -> Result<HexLoc, HexLocError> {
        if self.is_sector() {
            return Err(HexLocError::WrongScale(self.scale));
        }
        Self::new(
            index.column() * SUBSECTOR_WIDTH + self.x,
            index.row() * SUBSECTOR_HEIGHT + self.y,
            Scale::Sector,
        )
    }

    /// Converts a sector location into its position inside its own subsector.
    ///
    /// # Errors
    ///
    /// Returns [`HexLocError::WrongScale`] if this is already a subsector location.
    pub fn to_subsector(&self) -> Result<HexLoc, HexLocError> {
        if !self.is_sector() {
            return Err(HexLocError::WrongScale(self.scale));
        }
        let x = match self.x % SUBSECTOR_WIDTH {
            0 => SUBSECTOR_WIDTH,
            x => x,
        };
        let y = match self.y % SUBSECTOR_HEIGHT {
            0 => SUBSECTOR_HEIGHT,
            y => y,
        };
        Self::new(x, y, Scale::Subsector)
    }

    /// Orders two locations the way sector listings do.
    ///
    /// Sector locations order first by subsector letter, then by `x*10 + y`
    /// inside the subsector, so 0110 is followed by 0201 and subsector G ends
    /// before H starts (2420 -> 2511). This is a listing order, not a global
    /// row/column order across the sector.
    ///
    /// # Errors
    ///
    /// Returns [`HexLocError::ScaleMismatch`] when comparing a sector location
    /// with a subsector location.
    pub fn compare(a: &HexLoc, b: &HexLoc) -> Result<Ordering, HexLocError> {
        if a.scale != b.scale {
            return Err(HexLocError::ScaleMismatch);
        }
        if a.is_sector() {
            let by_subsector = a.index().cmp(&b.index());
            if by_subsector != Ordering::Equal {
                return Ok(by_subsector);
            }
        }
        Ok(a.linear().cmp(&b.linear()))
    }

    fn linear(&self) -> u32 {
        self.x as u32 * 10 + self.y as u32
    }
}

impl PartialOrd for HexLoc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        HexLoc::compare(self, other).ok()
    }
}

impl fmt::Display for HexLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.x, self.y)
    }
}

/// Sorts same-scale locations into listing order (see [`HexLoc::compare`]).
///
/// Mixed-scale input keeps the relative order of incomparable pairs.
pub fn sort_listing(locs: &mut [HexLoc]) {
    locs.sort_by(|a, b| HexLoc::compare(a, b).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sector(s: &str) -> HexLoc {
        HexLoc::parse(s, Scale::Sector).unwrap()
    }

    #[test]
    fn every_valid_sector_location_round_trips() {
        for x in 1..=SECTOR_WIDTH {
            for y in 1..=SECTOR_HEIGHT {
                let text = format!("{x:02}{y:02}");
                assert_eq!(sector(&text).to_string(), text);
            }
        }
    }

    #[test]
    fn every_valid_subsector_location_round_trips() {
        for x in 1..=SUBSECTOR_WIDTH {
            for y in 1..=SUBSECTOR_HEIGHT {
                let text = format!("{x:02}{y:02}");
                let loc = HexLoc::parse(&text, Scale::Subsector).unwrap();
                assert_eq!(loc.to_string(), text);
            }
        }
    }

    #[test]
    fn rejects_malformed_and_out_of_range() {
        assert!(matches!(
            HexLoc::parse("101", Scale::Sector),
            Err(HexLocError::Malformed(_))
        ));
        assert!(matches!(
            HexLoc::parse("1a10", Scale::Sector),
            Err(HexLocError::Malformed(_))
        ));
        assert!(matches!(
            HexLoc::parse("+110", Scale::Sector),
            Err(HexLocError::Malformed(_))
        ));
        assert!(matches!(
            HexLoc::parse("0000", Scale::Sector),
            Err(HexLocError::OutOfRange { .. })
        ));
        assert!(HexLoc::parse("3340", Scale::Sector).is_err());
        assert!(HexLoc::parse("3241", Scale::Sector).is_err());
        assert!(HexLoc::parse("0911", Scale::Subsector).is_err());
        assert!(HexLoc::parse("0810", Scale::Subsector).is_ok());
    }

    #[test]
    fn subsector_index_letters() {
        assert_eq!(sector("0101").index(), Some(SubsectorIndex::A));
        assert_eq!(sector("0910").index(), Some(SubsectorIndex::B));
        assert_eq!(sector("0111").index(), Some(SubsectorIndex::E));
        assert_eq!(sector("1910").index(), Some(SubsectorIndex::C));
        assert_eq!(sector("3240").index(), Some(SubsectorIndex::P));
        assert_eq!(
            HexLoc::parse("0101", Scale::Subsector).unwrap().index(),
            None
        );
    }

    #[test]
    fn scale_conversions_are_inverse() {
        for index in SubsectorIndex::iter() {
            for x in 1..=SUBSECTOR_WIDTH {
                for y in 1..=SUBSECTOR_HEIGHT {
                    let local = HexLoc::new(x, y, Scale::Subsector).unwrap();
                    let global = local.to_sector(index).unwrap();
                    assert_eq!(global.index(), Some(index));
                    assert_eq!(global.to_subsector().unwrap(), local);
                }
            }
        }
    }

    #[test]
    fn conversions_reject_wrong_scale() {
        assert_eq!(
            sector("1910").to_sector(SubsectorIndex::A),
            Err(HexLocError::WrongScale(Scale::Sector))
        );
        let local = HexLoc::parse("0203", Scale::Subsector).unwrap();
        assert_eq!(
            local.to_subsector(),
            Err(HexLocError::WrongScale(Scale::Subsector))
        );
    }

    #[test]
    fn compare_orders_by_subsector_then_column() {
        assert_eq!(
            HexLoc::compare(&sector("0101"), &sector("0102")),
            Ok(Ordering::Less)
        );
        assert_eq!(
            HexLoc::compare(&sector("0110"), &sector("0201")),
            Ok(Ordering::Less)
        );
        assert_eq!(
            HexLoc::compare(&sector("2420"), &sector("2511")),
            Ok(Ordering::Less)
        );
        // 0111 sits in E, 3201 in D: subsector letter wins over coordinates.
        assert_eq!(
            HexLoc::compare(&sector("0111"), &sector("3201")),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            HexLoc::compare(&sector("1910"), &sector("1910")),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn compare_rejects_mixed_scales() {
        let local = HexLoc::parse("0101", Scale::Subsector).unwrap();
        assert_eq!(
            HexLoc::compare(&sector("0101"), &local),
            Err(HexLocError::ScaleMismatch)
        );
        assert_eq!(sector("0101").partial_cmp(&local), None);
    }

    #[test]
    fn sort_listing_uses_listing_order() {
        let mut locs = vec![sector("0911"), sector("0111"), sector("0901"), sector("0102")];
        sort_listing(&mut locs);
        let listed: Vec<String> = locs.iter().map(ToString::to_string).collect();
        assert_eq!(listed, ["0102", "0901", "0111", "0911"]);
    }
}

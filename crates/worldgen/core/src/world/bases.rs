use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Bases present in a system, written in listing order "NSMDKW".
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Bases: u8 {
        const NAVY        = 1 << 0;
        const SCOUT       = 1 << 1;
        const MILITARY    = 1 << 2;
        const DEPOT       = 1 << 3;
        const NAVAL_BASE  = 1 << 4;
        const WAY_STATION = 1 << 5;
    }
}

const CODES: [(Bases, char); 6] = [
    (Bases::NAVY, 'N'),
    (Bases::SCOUT, 'S'),
    (Bases::MILITARY, 'M'),
    (Bases::DEPOT, 'D'),
    (Bases::NAVAL_BASE, 'K'),
    (Bases::WAY_STATION, 'W'),
];

impl Bases {
    /// Reads a listing code such as "NS". Unknown letters are logged and ignored.
    pub fn from_code(code: &str) -> Self {
        code.trim()
            .chars()
            .fold(Bases::empty(), |bases, ch| match Self::from_char(ch) {
                Some(base) => bases | base,
                None => {
                    tracing::warn!(base = %ch, "unknown base code; ignored");
                    bases
                }
            })
    }

    pub fn from_char(ch: char) -> Option<Self> {
        CODES
            .iter()
            .find(|(_, code)| *code == ch)
            .map(|(base, _)| *base)
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (base, code) in CODES {
            if self.contains(base) {
                write!(f, "{code}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_listing_order() {
        let bases = Bases::WAY_STATION | Bases::SCOUT | Bases::NAVY;
        assert_eq!(bases.to_string(), "NSW");
        assert_eq!(Bases::empty().to_string(), "");
    }

    #[test]
    fn parses_codes() {
        assert_eq!(Bases::from_code("SN"), Bases::NAVY | Bases::SCOUT);
        assert_eq!(Bases::from_code("K?"), Bases::NAVAL_BASE);
        assert_eq!(Bases::from_code(""), Bases::empty());
    }
}

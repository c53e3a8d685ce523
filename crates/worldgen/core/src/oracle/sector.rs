use crate::hex::SubsectorIndex;

/// Names and abbreviations of known sectors and their subsectors.
pub trait SectorOracle: Send + Sync {
    fn subsector(&self, sector: &str, index: SubsectorIndex) -> Option<Subsector>;

    /// Four letter abbreviation used in listings, e.g. "Spin" for the
    /// Spinward Marches.
    fn abbreviation(&self, sector: &str) -> Option<String>;
}

/// Metadata for one subsector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subsector {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub remarks: String,
}

impl Subsector {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remarks: String::new(),
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }
}

/// Abbreviation used when no oracle knows the sector: its first four characters.
pub fn fallback_abbreviation(sector: &str) -> String {
    sector.chars().take(4).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_takes_four_characters() {
        assert_eq!(fallback_abbreviation("Spinward Marches"), "Spin");
        assert_eq!(fallback_abbreviation("Dé"), "Dé");
        assert_eq!(fallback_abbreviation(""), "");
    }
}

/// Travel zone advisory for a world.
///
/// Listings write Green as an empty field, Amber as "A" and Red as "R".
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum TravelZone {
    #[default]
    #[strum(to_string = "", serialize = "G", serialize = "Green")]
    Green,
    #[strum(to_string = "A", serialize = "Amber")]
    Amber,
    #[strum(to_string = "R", serialize = "Red")]
    Red,
}

impl TravelZone {
    /// Listing code: "", "A" or "R".
    pub fn code(self) -> &'static str {
        match self {
            TravelZone::Green => "",
            TravelZone::Amber => "A",
            TravelZone::Red => "R",
        }
    }

    pub const fn desc(self) -> &'static str {
        match self {
            TravelZone::Green => "Green",
            TravelZone::Amber => "Amber",
            TravelZone::Red => "Red",
        }
    }
}

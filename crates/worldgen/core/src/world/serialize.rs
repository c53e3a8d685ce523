//! Tab-separated listing lines, as read by sector map tools.
//!
//! The number of fields identifies the variant: 8 for Basic, 10 for
//! Extended and 17 for Second Survey worlds.

use core::fmt::Display;
use core::str::FromStr;

use super::bases::Bases;
use super::uwp::{Starport, Uwp};
use super::classification::TradeCodes;
use super::variant::Variant;
use super::zone::TravelZone;
use super::World;
use crate::allegiance;
use crate::ehex;
use crate::error::{ErrorSeverity, WorldgenError};
use crate::hex::{HexLoc, HexLocError, Scale, SubsectorIndex};
use crate::stellar::{StarSystem, parse_stars};

const BASIC_HEADER: &str = "Sector\tSS\tHex\tName\tUWP\tBases\tRemarks\tZone";
const EXTENDED_FIELDS: &str = "\tPBG\tAllegiance";
const SURVEY_FIELDS: &str = "\tStars\t{Ix}\t(Ex)\t[Cx]\tNobility\tW\tRU";

/// Column header for `variant` listings.
pub fn header(variant: Variant) -> String {
    let mut header = String::from(BASIC_HEADER);
    if variant != Variant::Basic {
        header.push_str(EXTENDED_FIELDS);
    }
    if variant == Variant::SecondSurvey {
        header.push_str(SURVEY_FIELDS);
    }
    header
}

/// A listing line that cannot become a world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    #[error("expected 8, 10 or 17 tab-separated fields, found {0}")]
    FieldCount(usize),

    #[error("bad hex location: {0}")]
    Hex(#[from] HexLocError),
}

impl WorldgenError for ParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ParseError::FieldCount(_) => "PARSE_FIELD_COUNT",
            ParseError::Hex(_) => "PARSE_HEX",
        }
    }
}

impl World {
    /// The world as one listing line in its variant's layout.
    pub fn to_tab_line(&self) -> String {
        self.to_tab_line_as(self.variant)
    }

    /// The world in the listing layout of `variant`. Fields the world's own
    /// rules never produced come out at their defaults.
    pub fn to_tab_line_as(&self, variant: Variant) -> String {
        let mut fields = vec![
            self.sector_abbrev.clone(),
            self.subsector_index.to_string(),
            self.hex.to_string(),
            self.name.clone(),
            self.uwp.to_string(),
            self.bases.to_string(),
            self.trade_codes.to_string(),
            self.zone.code().to_owned(),
        ];
        if variant != Variant::Basic {
            fields.push(self.pbg.to_string());
            fields.push(self.allegiance.clone());
        }
        if variant == Variant::SecondSurvey {
            let ext = &self.extensions;
            fields.extend([
                self.stars.listing(),
                ext.importance.to_string(),
                ext.economic.to_string(),
                ext.cultural.to_string(),
                self.nobility.clone(),
                self.worlds.to_string(),
                self.resource_units.to_string(),
            ]);
        }
        fields.join("\t")
    }

    /// Reads a listing line written by [`World::to_tab_line`] or a sector
    /// map tool.
    ///
    /// Only the field count and hex location are required to be valid.
    /// Unreadable profiles, stars, remarks and extensions are logged and
    /// left at their defaults. The sector name is not part of a listing, so
    /// the abbreviation stands in for it.
    ///
    /// # Errors
    ///
    /// [`ParseError::FieldCount`] for a line with the wrong number of
    /// fields, [`ParseError::Hex`] for a bad hex location.
    pub fn from_tab_line(line: &str) -> Result<World, ParseError> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        let variant =
            Variant::from_field_count(fields.len()).ok_or(ParseError::FieldCount(fields.len()))?;

        let hex = HexLoc::parse(fields[2].trim(), Scale::Sector)?;
        let mut world = World::new(variant, fields[3].trim(), hex)?;

        world.sector_abbrev = fields[0].trim().to_owned();
        world.sector = world.sector_abbrev.clone();
        match SubsectorIndex::from_str(fields[1].trim()) {
            Ok(index) if index == world.subsector_index => {}
            _ => tracing::warn!(
                listed = fields[1],
                hex = %world.hex,
                "subsector letter does not match hex; using the hex"
            ),
        }
        world.uwp = read_uwp(fields[4]);
        world.bases = Bases::from_code(fields[5]);
        world.trade_codes = TradeCodes::from_remarks(fields[6]);
        world.zone = parse_or_warn::<TravelZone>("zone", fields[7].trim());

        if variant == Variant::Basic {
            world.allegiance = allegiance::DEFAULT_CODE.to_owned();
            return Ok(world);
        }
        world.pbg = parse_or_warn("PBG", fields[8]);
        world.allegiance = fields[9].trim().to_owned();

        if variant == Variant::SecondSurvey {
            world.stars = StarSystem::from_flat(parse_stars(fields[10]));
            world.extensions.importance = parse_or_warn("importance", fields[11]);
            world.extensions.economic = parse_or_warn("economic", fields[12]);
            world.extensions.cultural = parse_or_warn("cultural", fields[13]);
            world.nobility = fields[14].trim().to_owned();
            world.worlds = parse_or_warn("world count", fields[15].trim());
            world.resource_units = parse_or_warn("resource units", fields[16].trim());
        }
        Ok(world)
    }
}

/// Reads a UWP one field at a time, so one bad digit only blanks that
/// field. A string not shaped like a UWP is left blank as a whole.
fn read_uwp(text: &str) -> Uwp {
    let chars: Vec<char> = text.trim().chars().collect();
    if chars.len() != 9 || chars[7] != '-' {
        tracing::warn!(field = "UWP", text, "unreadable field; left blank");
        return Uwp::default();
    }

    let starport = Starport::from_str(chars[0].encode_utf8(&mut [0; 4])).unwrap_or_else(|_| {
        tracing::warn!(text, starport = %chars[0], "unknown starport; left blank");
        Starport::default()
    });
    let digit = |field: &'static str, ch: char| {
        ehex::decode(ch).unwrap_or_else(|| {
            tracing::warn!(field, text, digit = %ch, "non-ehex UWP digit; left blank");
            0
        })
    };

    Uwp {
        starport,
        size: digit("size", chars[1]),
        atmosphere: digit("atmosphere", chars[2]),
        hydrographics: digit("hydrographics", chars[3]),
        population: digit("population", chars[4]),
        government: digit("government", chars[5]),
        law: digit("law", chars[6]),
        tech: digit("tech", chars[8]),
    }
}

fn parse_or_warn<T>(field: &'static str, text: &str) -> T
where
    T: FromStr + Default,
    T::Err: Display,
{
    text.parse().unwrap_or_else(|error: T::Err| {
        tracing::warn!(field, text, %error, "unreadable field; left blank");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::PcgDice;
    use crate::world::{WorldGenerator, WorldRequest};

    #[test]
    fn headers_grow_with_variant() {
        assert_eq!(header(Variant::Basic).split('\t').count(), 8);
        assert_eq!(header(Variant::Extended).split('\t').count(), 10);
        let survey = header(Variant::SecondSurvey);
        assert_eq!(survey.split('\t').count(), 17);
        assert!(survey.ends_with("Stars\t{Ix}\t(Ex)\t[Cx]\tNobility\tW\tRU"));
    }

    #[test]
    fn generated_lines_match_their_header() {
        let generator = WorldGenerator::default();
        for variant in [Variant::Basic, Variant::Extended, Variant::SecondSurvey] {
            let request = WorldRequest::new(variant, "Regina", "1910", "Spinward Marches");
            let world = generator.generate(&mut PcgDice::new(5), &request).unwrap();
            let line = world.to_tab_line();
            assert_eq!(line.split('\t').count(), variant.field_count());
            assert!(line.starts_with("Spin\tC\t1910\tRegina\t"));
        }
    }

    #[test]
    fn reads_a_survey_line() {
        let line = "Spin\tC\t1910\tRegina\tA788899-C\tNS\tRi Pa Ph An Cp\t\t703\tImDd\tF7 V BD M3 V\t{ +4 }\t(D7E+5)\t[9C6D]\tBcCeF\t8\t2401";
        let world = World::from_tab_line(line).unwrap();
        assert_eq!(world.variant, Variant::SecondSurvey);
        assert_eq!(world.name, "Regina");
        assert_eq!(world.uwp.starport, Starport::A);
        assert_eq!(world.bases, Bases::NAVY | Bases::SCOUT);
        // "An" and "Cp" are not generated codes and are dropped
        assert_eq!(world.trade_codes.to_string(), "Ri Pa Ph");
        assert_eq!(world.zone, TravelZone::Green);
        assert_eq!(world.pbg.to_string(), "703");
        assert_eq!(world.stars.star_count(), 3);
        assert_eq!(world.extensions.importance.value(), 4);
        assert_eq!(world.extensions.economic.efficiency, 5);
        assert_eq!(world.extensions.cultural.acceptance, 12);
        assert_eq!(world.worlds, 8);
        assert_eq!(world.resource_units, 2401);
    }

    #[test]
    fn bad_tokens_are_skipped() {
        let line = "Spin\tC\t1910\tRegina\tA78?899-C\tNQ\tXx Ag\tR";
        let world = World::from_tab_line(line).unwrap();
        assert_eq!(world.variant, Variant::Basic);
        assert_eq!(world.uwp.to_string(), "A780899-C");
        assert_eq!(world.bases, Bases::NAVY);
        assert_eq!(world.trade_codes.to_string(), "Ag");
        assert_eq!(world.zone, TravelZone::Red);
        assert_eq!(world.allegiance, "Im");
    }

    #[test]
    fn bad_uwp_digit_keeps_the_other_fields() {
        let line = "Spin\tC\t1910\tRegina\tA78?899-C\tNQ\tAg\tG";
        let uwp = World::from_tab_line(line).unwrap().uwp;
        assert_eq!(uwp.starport, Starport::A);
        assert_eq!(uwp.size, 7);
        assert_eq!(uwp.atmosphere, 8);
        assert_eq!(uwp.hydrographics, 0);
        assert_eq!(uwp.population, 8);
        assert_eq!(uwp.government, 9);
        assert_eq!(uwp.law, 9);
        assert_eq!(uwp.tech, 12);
    }

    #[test]
    fn bad_starport_keeps_the_digits() {
        assert_eq!(read_uwp("Q788899-C").to_string(), "X788899-C");
        assert_eq!(read_uwp("A7888-C"), Uwp::default());
    }

    #[test]
    fn structural_errors() {
        assert_eq!(
            World::from_tab_line("Spin\tC\t1910"),
            Err(ParseError::FieldCount(3))
        );
        assert!(matches!(
            World::from_tab_line("Spin\tC\t19x0\tRegina\tA788899-C\t\t\t"),
            Err(ParseError::Hex(HexLocError::Malformed(_)))
        ));
    }

    #[test]
    fn generated_lines_read_back() {
        let generator = WorldGenerator::default();
        for seed in 0..50 {
            let request =
                WorldRequest::new(Variant::SecondSurvey, "Regina", "1910", "Spinward Marches");
            let world = generator.generate(&mut PcgDice::new(seed), &request).unwrap();
            let line = world.to_tab_line();
            let read = World::from_tab_line(&line).unwrap();
            assert_eq!(read.to_tab_line(), line);
        }
    }
}

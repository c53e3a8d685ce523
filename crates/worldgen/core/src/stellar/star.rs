use core::fmt;

use arrayvec::ArrayVec;

/// Spectral class of a star, hottest first.
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
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

/// Luminosity (size) class of a normal star.
///
/// White dwarfs are not listed here; they are a separate [`StarKind`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Luminosity {
    Ia,
    Ib,
    II,
    III,
    IV,
    V,
    VI,
}

impl Luminosity {
    pub const fn description(self) -> &'static str {
        match self {
            Luminosity::Ia => "Bright Supergiant",
            Luminosity::Ib => "Supergiant",
            Luminosity::II => "Bright Giant",
            Luminosity::III => "Giant",
            Luminosity::IV => "Sub-giant",
            Luminosity::V => "Main Sequence",
            Luminosity::VI => "Sub-dwarf",
        }
    }
}

/// What kind of body a star is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarKind {
    /// A classified star such as "G2 V".
    Normal {
        class: SpectralClass,
        /// Spectral decimal, 0-9.
        decimal: u8,
        luminosity: Luminosity,
    },
    /// A white dwarf, "D" optionally followed by its class letter.
    WhiteDwarf { class: Option<SpectralClass> },
    /// A brown dwarf, "BD".
    BrownDwarf,
}

/// A star, optionally with a companion.
///
/// `orbit` is the orbit number in the primary's system and is `None` for the
/// primary itself, for companions, and for stars read back from a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Star {
    pub kind: StarKind,
    pub orbit: Option<i32>,
    pub companion: Option<Box<Star>>,
}

impl Star {
    pub fn new(kind: StarKind) -> Self {
        Self {
            kind,
            orbit: None,
            companion: None,
        }
    }

    pub fn normal(class: SpectralClass, decimal: u8, luminosity: Luminosity) -> Self {
        Self::new(StarKind::Normal {
            class,
            decimal,
            luminosity,
        })
    }

    /// Spectral class, if the star has one. Brown dwarfs and bare "D" do not.
    pub fn spectral_class(&self) -> Option<SpectralClass> {
        match self.kind {
            StarKind::Normal { class, .. } => Some(class),
            StarKind::WhiteDwarf { class } => class,
            StarKind::BrownDwarf => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self.kind {
            StarKind::Normal { luminosity, .. } => luminosity.description(),
            StarKind::WhiteDwarf { .. } => "White Dwarf",
            StarKind::BrownDwarf => "Brown Dwarf",
        }
    }

    pub fn with_orbit(mut self, orbit: i32) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_companion(mut self, companion: Star) -> Self {
        self.companion = Some(Box::new(companion));
        self
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StarKind::Normal {
                class,
                decimal,
                luminosity,
            } => write!(f, "{class}{decimal} {luminosity}"),
            StarKind::WhiteDwarf { class: Some(class) } => write!(f, "D{class}"),
            StarKind::WhiteDwarf { class: None } => f.write_str("D"),
            StarKind::BrownDwarf => f.write_str("BD"),
        }
    }
}

/// Primary plus close, near and far stars.
const TOP_LEVEL_SLOTS: usize = 4;

/// Top-level stars of a system: primary, then close, near and far stars.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarSystem {
    stars: ArrayVec<Star, TOP_LEVEL_SLOTS>,
}

impl StarSystem {
    pub const MAX_TOP_LEVEL: usize = TOP_LEVEL_SLOTS;
    /// Every top-level star with a companion.
    pub const MAX_STARS: usize = Self::MAX_TOP_LEVEL * 2;

    pub fn new(primary: Star) -> Self {
        let mut stars = ArrayVec::new();
        stars.push(primary);
        Self { stars }
    }

    /// Rebuilds a system from a flat listing as produced by [`StarSystem::listing`].
    ///
    /// A listing carries no orbits and does not mark companions. Stars beyond
    /// the four top-level slots are treated as companions of the leading
    /// entries, which reproduces the listing text exactly. Anything past
    /// [`StarSystem::MAX_STARS`] is dropped with a warning.
    pub fn from_flat(flat: Vec<Star>) -> Self {
        let total = flat.len();
        if total > Self::MAX_STARS {
            tracing::warn!(
                count = total,
                "star listing exceeds {} stars; extra stars dropped",
                Self::MAX_STARS
            );
        }
        let companions = total.saturating_sub(Self::MAX_TOP_LEVEL).min(Self::MAX_TOP_LEVEL);

        let mut system = Self::default();
        let mut iter = flat.into_iter();
        while !system.stars.is_full() {
            let Some(mut star) = iter.next() else {
                break;
            };
            if system.stars.len() < companions {
                if let Some(companion) = iter.next() {
                    star.companion = Some(Box::new(companion));
                }
            }
            system.stars.push(star);
        }
        system
    }

    /// Appends a top-level star; returns it back if the system is full.
    pub fn push(&mut self, star: Star) -> Result<(), Star> {
        self.stars.try_push(star).map_err(|err| err.element())
    }

    pub fn primary(&self) -> Option<&Star> {
        self.stars.first()
    }

    pub fn primary_mut(&mut self) -> Option<&mut Star> {
        self.stars.first_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Top-level stars in order.
    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    /// Every star including companions, in listing order.
    pub fn all(&self) -> impl Iterator<Item = &Star> {
        self.stars
            .iter()
            .flat_map(|star| core::iter::once(star).chain(star.companion.as_deref()))
    }

    pub fn star_count(&self) -> usize {
        self.all().count()
    }

    /// Space-separated listing: each top-level star followed by its companion.
    pub fn listing(&self) -> String {
        self.all()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

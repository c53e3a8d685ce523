use crate::world::{Traffic, Variant};

/// How thickly a generated sector is populated.
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
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum StarDensity {
    Rift,
    Sparse,
    Scattered,
    #[default]
    Standard,
    Dense,
}

impl StarDensity {
    /// Chance, out of 100, that a hex holds a world.
    pub const fn percentage(self) -> u32 {
        match self {
            Self::Rift => 3,
            Self::Sparse => 16,
            Self::Scattered => 33,
            Self::Standard => 50,
            Self::Dense => 66,
        }
    }
}

/// Generator settings shared by single-world and sector generation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GeneratorConfig {
    pub variant: Variant,
    pub traffic: Traffic,
    pub density: StarDensity,
    /// Fixed seed for reproducible output. Entropy seeded when absent.
    pub seed: Option<u64>,
    pub allegiance: String,
}

impl GeneratorConfig {
    pub const DEFAULT_ALLEGIANCE: &'static str = crate::allegiance::DEFAULT_CODE;

    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            traffic: Traffic::default(),
            density: StarDensity::default(),
            seed: None,
            allegiance: Self::DEFAULT_ALLEGIANCE.to_owned(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_density(mut self, density: StarDensity) -> Self {
        self.density = density;
        self
    }

    pub fn with_traffic(mut self, traffic: Traffic) -> Self {
        self.traffic = traffic;
        self
    }

    pub fn with_allegiance(mut self, allegiance: impl Into<String>) -> Self {
        self.allegiance = allegiance.into();
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

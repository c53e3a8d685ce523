//! Stars and star systems.
//!
//! Only the mainworld's system is modelled: a primary with up to three further
//! stars (close, near and far), each of which may have one companion.
mod generation;
mod parse;
mod star;

pub use generation::{
    MainworldType, SatelliteOrbit, determine_habitable_zone_variance, determine_mainworld_type,
    determine_satellite_orbit, determine_star, generate_system_stars,
};
pub use parse::parse_stars;
pub use star::{Luminosity, SpectralClass, Star, StarKind, StarSystem};

//! Subcommands.

mod extend;
mod sector;
mod world;

pub use extend::ExtendCommand;
pub use sector::SectorCommand;
pub use world::WorldCommand;

pub mod params;
pub mod builder;
pub mod presets;

pub use builder::CartridgeBuilder;
pub use params::Cartridge;
pub use presets::preset;

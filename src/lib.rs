//! Interior ballistics of small-arms cartridges.
//!
//! A [`Cartridge`] describes one round; [`simulate`] integrates bullet travel,
//! chamber pressure and case/bolt force from ignition until the horizon in
//! [`SimConfig`].

pub mod physics;
pub mod cartridge;
pub mod dynamics;
pub mod sim;
pub mod error;

pub use cartridge::{Cartridge, CartridgeBuilder};
pub use dynamics::state::{SimConfig, State};
pub use error::{SimError, Violation};
pub use physics::curves::sigmoid;
pub use sim::{simulate, simulate_with, Trajectory};

pub mod units {
    pub use crate::physics::units::*;
}

pub mod presets {
    pub use crate::cartridge::presets::*;
}

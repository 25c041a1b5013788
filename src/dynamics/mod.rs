pub mod state;
pub mod chamber;

pub use chamber::{chamber_loads, derivatives, ChamberLoads};
pub use state::{Deriv, SimConfig, State};

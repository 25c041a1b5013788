pub mod integrator;
pub mod runner;
pub mod trajectory;
pub mod event;

pub use integrator::{ForwardEuler, Rk4, Stepper};
pub use runner::{simulate, simulate_with};
pub use trajectory::Trajectory;

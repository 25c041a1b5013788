use thiserror::Error;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// A single violated constraint on a cartridge or simulation setting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("{field} is required but was not set")]
    Missing { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("chamber diameter ({chamber} m) is smaller than case diameter ({case} m)")]
    ChamberNarrowerThanCase { chamber: f64, case: f64 },

    #[error("case inside length ({inside} m) exceeds case length ({outside} m)")]
    CaseInsideLongerThanCase { inside: f64, outside: f64 },

    #[error("ultimate strength ({ultimate} Pa) is below yield strength ({yield_strength} Pa)")]
    UltimateBelowYield { ultimate: f64, yield_strength: f64 },

    #[error("horizon ({max_time} s) is shorter than one time step ({dt} s)")]
    InvalidTimeStep { dt: f64, max_time: f64 },

    #[error("horizon / time step gives {steps:e} samples, limit is {max}")]
    TooManySteps { steps: f64, max: usize },
}

/// Errors produced while building a cartridge or running a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// One or more inputs violate their invariants. Raised before any stepping.
    #[error("invalid configuration: {}", join(.0))]
    Configuration(Vec<Violation>),

    /// A state component became NaN or infinite during integration.
    #[error("numerical instability at step {step} (t = {time:e} s): {quantity} is not finite")]
    NumericalInstability {
        step: usize,
        time: f64,
        quantity: &'static str,
    },

    #[error("unknown cartridge preset '{0}'")]
    UnknownPreset(String),
}

impl SimError {
    /// Violations carried by a configuration error, empty otherwise.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SimError::Configuration(v) => v,
            _ => &[],
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects violations and turns them into a single error at the end.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    violations: Vec<Violation>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    /// NaN fails this check as well.
    pub fn positive(&mut self, field: &'static str, value: f64) {
        if !(value > 0.0) || !value.is_finite() {
            self.violations.push(Violation::NonPositive { field, value });
        }
    }

    pub fn in_range(&mut self, field: &'static str, value: f64, min: f64, max: f64) {
        if !(value >= min && value <= max) {
            self.violations.push(Violation::OutOfRange { field, value, min, max });
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn finish(self) -> Result<(), SimError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(SimError::Configuration(self.violations))
        }
    }
}

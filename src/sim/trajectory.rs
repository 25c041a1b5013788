use nalgebra::DMatrix;

use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Trajectory: uniformly spaced samples produced by one simulation run
// ---------------------------------------------------------------------------

/// Output of one simulation. Samples are spaced `dt` apart starting at `t = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<State>,
    dt: f64,
}

impl Trajectory {
    pub(crate) fn new(samples: Vec<State>, dt: f64) -> Self {
        Self { samples, dt }
    }

    pub fn samples(&self) -> &[State] {
        &self.samples
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&State> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.samples.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.column(|s| s.time)
    }

    pub fn positions(&self) -> Vec<f64> {
        self.column(|s| s.pos)
    }

    pub fn velocities(&self) -> Vec<f64> {
        self.column(|s| s.vel)
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.column(|s| s.pressure)
    }

    pub fn forces(&self) -> Vec<f64> {
        self.column(|s| s.force)
    }

    fn column(&self, f: impl Fn(&State) -> f64) -> Vec<f64> {
        self.samples.iter().map(f).collect()
    }

    /// 4×N state matrix, rows `[pos, vel, pressure, force]`, one column per sample.
    pub fn to_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(4, self.samples.len(), |row, col| {
            let s = &self.samples[col];
            match row {
                0 => s.pos,
                1 => s.vel,
                2 => s.pressure,
                _ => s.force,
            }
        })
    }

    /// Sample with the highest chamber pressure.
    pub fn peak_pressure(&self) -> Option<&State> {
        self.samples
            .iter()
            .max_by(|a, b| a.pressure.total_cmp(&b.pressure))
    }

    /// Sample with the highest case/bolt force.
    pub fn peak_force(&self) -> Option<&State> {
        self.samples.iter().max_by(|a, b| a.force.total_cmp(&b.force))
    }

    /// First sample with the bullet past `barrel_length`.
    pub fn muzzle_exit(&self, barrel_length: f64) -> Option<&State> {
        self.samples.iter().find(|s| s.pos > barrel_length)
    }

    /// Bolt impulse, N·s (rectangle rule over the samples).
    pub fn impulse(&self) -> f64 {
        self.samples.iter().map(|s| s.force).sum::<f64>() * self.dt
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

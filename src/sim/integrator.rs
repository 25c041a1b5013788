use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Integration strategy for the bullet kinematics [pos, vel]
// ---------------------------------------------------------------------------

/// Advances `y` by one fixed step `dt` given its derivative `f(y)`.
///
/// The chamber pressure that drives `f` is held constant over the step, so
/// the stepper only sees the kinematic part of the state.
pub trait Stepper {
    fn step(&self, y: &Vector2<f64>, dt: f64, f: &dyn Fn(&Vector2<f64>) -> Vector2<f64>) -> Vector2<f64>;

    /// Human-readable name for display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Explicit forward Euler: `y + f(y)·dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl Stepper for ForwardEuler {
    fn step(&self, y: &Vector2<f64>, dt: f64, f: &dyn Fn(&Vector2<f64>) -> Vector2<f64>) -> Vector2<f64> {
        y + f(y) * dt
    }

    fn name(&self) -> &str {
        "forward-euler"
    }
}

/// Classical 4th-order Runge-Kutta with the driving pressure frozen over the step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

impl Stepper for Rk4 {
    fn step(&self, y: &Vector2<f64>, dt: f64, f: &dyn Fn(&Vector2<f64>) -> Vector2<f64>) -> Vector2<f64> {
        let k1 = f(y);
        let k2 = f(&(y + k1 * (dt * 0.5)));
        let k3 = f(&(y + k2 * (dt * 0.5)));
        let k4 = f(&(y + k3 * dt));
        y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
    }

    fn name(&self) -> &str {
        "rk4"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Constant acceleration a: f([x, v]) = [v, a]
    fn constant_accel(a: f64) -> impl Fn(&Vector2<f64>) -> Vector2<f64> {
        move |y| Vector2::new(y[1], a)
    }

    #[test]
    fn euler_uses_start_of_step_velocity() {
        let y = Vector2::new(1.0, 10.0);
        let next = ForwardEuler.step(&y, 0.1, &constant_accel(100.0));
        assert!((next[0] - 2.0).abs() < 1e-12); // x + v·dt
        assert!((next[1] - 20.0).abs() < 1e-12); // v + a·dt
    }

    #[test]
    fn rk4_exact_for_constant_accel() {
        let y = Vector2::new(0.0, 0.0);
        let next = Rk4.step(&y, 0.1, &constant_accel(100.0));
        assert!((next[0] - 0.5).abs() < 1e-12); // a·dt²/2
        assert!((next[1] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn names() {
        assert_eq!(ForwardEuler.name(), "forward-euler");
        assert_eq!(Rk4.name(), "rk4");
    }
}

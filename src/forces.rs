//! External forcing applied to free particles before constraint resolution.

use crate::config::{DampingConfig, DangleConfig, WindConfig};
use crate::float::Float;
use crate::vec::Vec3;

/// Multiplicative velocity decay for particle `index`.
///
/// Decay grows toward the tail so the free end settles faster.
pub fn damping_factor<F: Float>(damping: &DampingConfig<F>, index: usize) -> F {
    damping.base - F::from_f32(index as f32) * damping.per_index
}

/// Wind impulse for particle `index` at global time `t`.
///
/// Added straight to velocity, not scaled by the step duration.
pub fn wind<F: Float>(wind: &WindConfig<F>, index: usize, t: F) -> Vec3<F> {
    let i = F::from_f32(index as f32);
    let sin_t = t.sin();
    let cos_4t = (t * F::from_f32(4.0)).cos();
    Vec3::new(
        i * wind.x_gain * (sin_t * (t * F::two()).sin() + F::one()),
        i * wind.y_gain * (cos_4t * cos_4t * sin_t),
        F::zero(),
    )
}

/// Velocity of particle `index` after gravity, damping and wind, in that order.
pub fn apply_external_forces<F: Float>(
    vel: Vec3<F>,
    index: usize,
    dt: F,
    t: F,
    config: &DangleConfig<F>,
) -> Vec3<F> {
    let vel = vel + config.gravity.scale(dt);
    let vel = vel.scale(damping_factor(&config.damping, index));
    vel + wind(&config.wind, index, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damping_grows_toward_tail() {
        let d: DampingConfig<f32> = DampingConfig::default();
        assert!((damping_factor(&d, 1) - 0.94).abs() < 1e-6);
        assert!((damping_factor(&d, 10) - 0.67).abs() < 1e-6);
        assert!(damping_factor(&d, 10) < damping_factor(&d, 1));
    }

    #[test]
    fn wind_at_time_zero_blows_along_x() {
        let w: WindConfig<f32> = WindConfig::default();
        let v = wind(&w, 4, 0.0);
        assert!((v.x - 2.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn wind_scales_with_index() {
        let w: WindConfig<f64> = WindConfig::default();
        let t = 0.7_f64;
        let one = wind(&w, 1, t);
        let five = wind(&w, 5, t);
        assert!((five.x - 5.0 * one.x).abs() < 1e-12);
        assert!((five.y - 5.0 * one.y).abs() < 1e-12);
        let expected_y = w.y_gain * (4.0 * t).cos().powi(2) * t.sin();
        assert!((one.y - expected_y).abs() < 1e-12);
        let expected_x = w.x_gain * (t.sin() * (2.0 * t).sin() + 1.0);
        assert!((one.x - expected_x).abs() < 1e-12);
    }

    #[test]
    fn no_wind_on_anchor_index() {
        let w: WindConfig<f32> = WindConfig::default();
        assert_eq!(wind(&w, 0, 1.3), Vec3::zero());
    }

    #[test]
    fn gravity_damping_then_wind() {
        let config: DangleConfig<f32> = DangleConfig::new();
        let dt = 0.1;
        let v = apply_external_forces(Vec3::zero(), 1, dt, 0.0, &config);
        // gravity: -15 in z, damped by 0.94; wind at t = 0 is 0.5 in x.
        assert!((v.z + 15.0 * 0.94).abs() < 1e-4);
        assert!((v.x - 0.5).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }
}

//! Angle math for the watch face
//!
//! Converts fractional time-of-day components into sweep angles and into
//! degrees-from-12-o'clock values for arc drawing.

use core::f32::consts::PI;

/// Full circle in radians.
pub const TWO_PI: f32 = 2.0 * PI;

/// Sweep angle in radians for a value within a period.
///
/// `value / period * 2π`, so a full period maps to a full circle.
/// The caller guarantees `period > 0` and `value` in `[0, period)`.
pub fn sweep_angle(value: f32, period: f32) -> f32 {
    value / period * TWO_PI
}

/// Express a sweep angle as degrees measured clockwise from 12 o'clock.
///
/// Used as the sweep parameter of arc draw operations, which start at the
/// 12 o'clock position.
pub fn degrees_from_twelve(angle: f32) -> f32 {
    angle * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_angle_stays_in_range() {
        for period in [12.0_f32, 60.0, 100.0] {
            let mut value = 0.0;
            while value < period {
                let a = sweep_angle(value, period);
                assert!((0.0..TWO_PI).contains(&a), "angle {a} out of range");
                value += period / 64.0;
            }
        }
    }

    #[test]
    fn sweep_angle_of_zero_is_zero() {
        assert_eq!(sweep_angle(0.0, 60.0), 0.0);
        assert_eq!(sweep_angle(0.0, 12.0), 0.0);
    }

    #[test]
    fn sweep_angle_is_monotonic() {
        let mut last = -1.0_f32;
        for i in 0..60 {
            let a = sweep_angle(i as f32, 60.0);
            assert!(a > last);
            last = a;
        }
    }

    #[test]
    fn degrees_reach_full_circle_at_period() {
        let mut last = -1.0_f32;
        for i in 0..100 {
            let d = degrees_from_twelve(sweep_angle(i as f32, 100.0));
            assert!(d > last);
            last = d;
        }
        let full = degrees_from_twelve(sweep_angle(99.999, 100.0));
        assert!((full - 360.0).abs() < 0.01);
    }

    #[test]
    fn half_past_seconds_scenario() {
        // 30.5s into the minute: just past the 6 o'clock position.
        let a = sweep_angle(30.5, 60.0);
        assert!((a - 3.1940).abs() < 1e-3);
        assert!((degrees_from_twelve(a) - 183.0).abs() < 1e-2);
    }

    #[test]
    fn battery_sweep_scenario() {
        let a = sweep_angle(45.0, 100.0);
        assert!((degrees_from_twelve(a) - 162.0).abs() < 1e-2);
    }
}

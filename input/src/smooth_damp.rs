//! Critically damped smoothing toward a target value.
//!
//! Based on the spring approximation from Game Programming Gems 4, chapter 1.10, which is what most
//! game engines ship as "SmoothDamp".
use std::time::Duration;

/// Smallest time constant used. Lower values would divide by (almost) zero.
pub const MIN_SMOOTH_TIME: f64 = 0.0001;

/// Moves `current` toward `target` and returns the new value.
///
/// `velocity` is the scratch accumulator that must be kept between calls for the same smoothed
/// value. `smooth_time` is roughly the time it takes to reach the target. The result never passes
/// the target: if it would, it is snapped to the target and `velocity` is reset. With a zero
/// `delta_time` the value stays where it is, but a value already at the target still resets
/// `velocity`.
pub fn smooth_damp(
    current: f64,
    target: f64,
    velocity: &mut f64,
    smooth_time: f64,
    delta_time: Duration,
) -> f64 {
    let dt = delta_time.as_secs_f64();
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);
    let change = current - target;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let output = target + (change + temp) * exp;

    // Overshoot?
    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }

    output
}

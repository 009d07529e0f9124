// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Move `value` toward `target` by at most `step`, never overshooting
pub fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value > target {
        (value - step).max(target)
    } else if value < target {
        (value + step).min(target)
    } else {
        value
    }
}

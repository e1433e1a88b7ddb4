//! Time calculation utilities for scroll glides
//!
//! Pure functions over the host-supplied virtual clock (seconds, monotonic).
//! Keeping the clock virtual makes glides fully deterministic under test.

/// Calculate glide progress (0.0 to 1.0) from start time and duration
///
/// Zero or negative durations complete immediately.
#[inline]
pub fn progress(started: f64, now: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((now - started) / duration).clamp(0.0, 1.0)
}

/// Check if a glide has run its full duration
#[inline]
pub fn is_complete(started: f64, now: f64, duration: f64) -> bool {
    now - started >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert!((progress(5.0, 5.0, 0.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamps() {
        assert!((progress(1.0, 0.5, 1.0) - 0.0).abs() < 0.001);
        assert!((progress(1.0, 3.0, 1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_is_complete() {
        assert!(!is_complete(0.0, 0.5, 1.0));
        assert!(is_complete(0.0, 1.0, 1.0));
    }
}

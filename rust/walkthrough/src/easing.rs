// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timing curves for camera interpolation

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Cubic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ease_in_out_cubic_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn ease_in_out_cubic_is_symmetric() {
        for t in [0.1, 0.2, 0.3, 0.45] {
            assert_relative_eq!(ease_in_out_cubic(t), 1.0 - ease_in_out_cubic(1.0 - t), epsilon = 1e-12);
        }
    }

    #[test]
    fn ease_in_out_cubic_slow_start() {
        assert_relative_eq!(ease_in_out_cubic(0.25), 0.0625);
        assert!(ease_in_out_cubic(0.25) < linear(0.25));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(ease_in_out_cubic(-1.0), 0.0);
        assert_eq!(ease_in_out_cubic(3.0), 1.0);
        assert_eq!(linear(2.0), 1.0);
    }
}

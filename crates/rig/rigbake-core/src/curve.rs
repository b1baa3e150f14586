//! Cubic Bezier easing used for keyframe interpolation timing.

use serde::{Deserialize, Serialize};

/// Interior control points of a normalized cubic Bezier on `[0,1]²`.
///
/// The full curve is `(0,0), (x0,y0), (x1,y1), (1,1)`, the authoring tool's
/// control-point convention. [`AnimationCurve::evaluate`] maps a linear time
/// fraction to the eased fraction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationCurve {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl AnimationCurve {
    /// The straight diagonal: evaluates to its input.
    pub const LINEAR: Self = Self {
        x0: 0.0,
        y0: 0.0,
        x1: 1.0,
        y1: 1.0,
    };

    /// Eased fraction for a linear fraction `u`, clamped to `[0,1]`.
    pub fn evaluate(&self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        // Bezier(0,0,1,1) is exactly linear.
        if *self == Self::LINEAR {
            return u;
        }
        // Invert the monotonic x polynomial by bisection, then evaluate y at
        // the recovered parameter.
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        let mut mid = u;
        for _ in 0..24 {
            let x = cubic_bezier(0.0, self.x0, self.x1, 1.0, mid);
            if (x - u).abs() < 1e-6 {
                break;
            }
            if x < u {
                lo = mid;
            } else {
                hi = mid;
            }
            mid = 0.5 * (lo + hi);
        }
        cubic_bezier(0.0, self.y0, self.y1, 1.0, mid)
    }
}

#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_curve_is_identity() {
        let curve = AnimationCurve::LINEAR;
        for i in 0..=10 {
            let u = i as f32 / 10.0;
            assert!((curve.evaluate(u) - u).abs() <= 1e-6);
        }
    }

    #[test]
    fn ease_in_out_pins_endpoints_and_midpoint() {
        let curve = AnimationCurve {
            x0: 0.42,
            y0: 0.0,
            x1: 0.58,
            y1: 1.0,
        };
        assert!((curve.evaluate(0.0) - 0.0).abs() <= 1e-4);
        assert!((curve.evaluate(1.0) - 1.0).abs() <= 1e-4);
        // Symmetric control points ease through the middle.
        assert!((curve.evaluate(0.5) - 0.5).abs() <= 1e-3);
        // Ease-in: early fractions fall under the diagonal.
        assert!(curve.evaluate(0.25) < 0.25);
        // Ease-out: late fractions rise over it.
        assert!(curve.evaluate(0.75) > 0.75);
    }

    #[test]
    fn evaluation_is_monotonic() {
        let curve = AnimationCurve {
            x0: 0.25,
            y0: 0.1,
            x1: 0.25,
            y1: 1.0,
        };
        let mut last = curve.evaluate(0.0);
        for i in 1..=20 {
            let next = curve.evaluate(i as f32 / 20.0);
            assert!(next + 1e-4 >= last, "curve regressed at step {i}");
            last = next;
        }
    }

    #[test]
    fn out_of_range_input_clamps() {
        let curve = AnimationCurve {
            x0: 0.42,
            y0: 0.0,
            x1: 0.58,
            y1: 1.0,
        };
        assert!((curve.evaluate(-1.0) - curve.evaluate(0.0)).abs() <= 1e-6);
        assert!((curve.evaluate(2.0) - curve.evaluate(1.0)).abs() <= 1e-6);
    }
}

//! Generic fixed-rate resampling of sparse keyframe tracks.
//!
//! One driver serves every property kind. The per-property policy (how a key
//! becomes an output sample, and how two keys combine) lives in a
//! [`PropertyBuilder`]; the driver walks a track's keys once, monotonically,
//! against a fixed sample clock and appends exactly one sample per tick.

use crate::builders::PropertyBuilder;
use crate::curve::AnimationCurve;

/// Key access the sampler needs; implemented by bone and slot keys.
pub trait SampleKey {
    fn time(&self) -> f32;

    /// Hold this key's value for its whole interval instead of interpolating.
    fn stepped(&self) -> bool {
        false
    }

    fn curve(&self) -> Option<&AnimationCurve> {
        None
    }
}

/// Number of samples a fixed-rate pass emits over `[0, duration]`.
///
/// The two extra samples guarantee the exact start and end instants are
/// covered regardless of rounding. Non-finite or negative durations count as
/// zero-length.
#[inline]
pub fn sample_count(duration: f32, sample_rate: f32) -> usize {
    let duration = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    };
    ((duration * sample_rate).ceil() as usize).saturating_add(2)
}

/// Resample `keys` at `sample_rate` over `[0, duration]`, appending exactly
/// [`sample_count`] samples to `builder`, in increasing time order.
///
/// Sample `i` is taken at `start_time + i / sample_rate`, clamped to
/// `[0, duration]`. Before the first key (and for an empty track) the supplied
/// `default` is appended; from the last key on, that key's value is held.
/// Between two keys the left key is held when `interpolate` is false, the key
/// is stepped, or the builder's value domain has no continuous interpolation;
/// otherwise the key's curve (linear when absent) eases the local fraction and
/// the builder combines the pair. The local fraction of a zero-length interval
/// is defined as zero. Keys sharing one timestamp resolve to the later key in
/// array order; the key cursor never rewinds within one pass.
///
/// Returns the number of samples appended.
pub fn sample_track<B: PropertyBuilder>(
    keys: &[B::Key],
    builder: &mut B,
    default: B::Sample,
    start_time: f32,
    duration: f32,
    sample_rate: f32,
    interpolate: bool,
) -> usize {
    let duration = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        0.0
    };
    let count = sample_count(duration, sample_rate);
    let spf = sample_rate.recip();

    let mut next_key = 0usize;
    let mut active: Option<usize> = None;
    for i in 0..count {
        let cursor = (start_time + i as f32 * spf).clamp(0.0, duration);
        // Advance past every key at or before the cursor; at duplicate
        // timestamps the later key wins.
        while next_key < keys.len() && keys[next_key].time() <= cursor {
            active = Some(next_key);
            next_key += 1;
        }
        let sample = match active {
            None => default,
            Some(k) if next_key >= keys.len() => builder.compose(&keys[k]),
            Some(k) => {
                let key = &keys[k];
                let next = &keys[next_key];
                if key.stepped() || !interpolate || !builder.interpolating() {
                    builder.compose(key)
                } else {
                    let span = next.time() - key.time();
                    let u = if span > 0.0 {
                        (cursor - key.time()) / span
                    } else {
                        0.0
                    };
                    let eased = match key.curve() {
                        Some(curve) => curve.evaluate(u),
                        None => u,
                    };
                    builder.interpolate(key, next, eased)
                }
            }
        };
        builder.append(sample);
    }
    count
}

// File: crates/barchart-core/src/scale.rs
// Summary: Linear value scale (with round-number snapping) and banded category scale.

use serde::{Deserialize, Serialize};

use crate::model::DataPoint;
use crate::types::{BAND_PADDING, NICE_TICK_COUNT};

/// Value Y coordinate (a measure).
pub type Value = f64;

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Affine map from a value domain onto a pixel range, unclamped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale for bar heights given the host bounds and the plot height.
    ///
    /// Domain is `[0, max(value_max, -value_min)]`; the range is the share of
    /// the plot height that magnitude takes out of the whole span. When the
    /// span or magnitude is not a positive finite number the range collapses
    /// to `[0, 0]` and every bar is flat.
    pub fn for_magnitudes(value_max: Value, value_min: Value, plot_height: f64) -> Self {
        let max = value_max.max(-value_min);
        let span = value_max - value_min;
        let usable = max.is_finite() && max > 0.0 && span.is_finite() && span > 0.0;
        if !usable || !(plot_height.is_finite() && plot_height > 0.0) {
            let top = if max.is_finite() && max > 0.0 { max } else { 1.0 };
            return Self::new((0.0, top), (0.0, 0.0));
        }
        let mut scale = Self::new((0.0, max), (0.0, plot_height * (max / span)));
        scale.nice(NICE_TICK_COUNT);
        scale
    }

    #[inline]
    pub fn apply(&self, v: Value) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    /// Widen the domain outward to multiples of a round tick step.
    ///
    /// Repeats until the step stops changing, at most ten rounds. The range
    /// is left untouched.
    pub fn nice(&mut self, count: usize) {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
    }
}

/// Round tick step for `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results encode `1 / -step`
/// for sub-unit steps so they stay exact. Zero means no usable step.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !(step.is_finite() && step > 0.0) {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Ordinal scale splitting a pixel range into equal bands, one per key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl<K: PartialEq + Clone> BandScale<K> {
    /// Bands over `range` with the same inner and outer `padding`, pixel
    /// snapped when `round` is set. Repeated keys share one band.
    pub fn new(keys: impl IntoIterator<Item = K>, range: (f64, f64), padding: f64, round: bool) -> Self {
        let mut domain: Vec<K> = Vec::new();
        for k in keys {
            if !domain.contains(&k) {
                domain.push(k);
            }
        }
        let padding = padding.clamp(0.0, 1.0);
        let mut s = Self {
            domain,
            range,
            padding_inner: padding,
            padding_outer: padding,
            align: 0.5,
            round,
            step: 0.0,
            bandwidth: 0.0,
            start: range.0,
        };
        s.rescale();
        s
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let mut step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        if self.round {
            step = step.floor();
        }
        let mut start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            start = start.round();
            bandwidth = bandwidth.round();
        }
        self.step = step;
        self.start = start;
        self.bandwidth = bandwidth;
    }

    /// Left edge of the band for `key`, `None` when the key is unknown.
    pub fn position(&self, key: &K) -> Option<f64> {
        let i = self.domain.iter().position(|k| k == key)?;
        let offset = self.step * i as f64;
        Some(if self.range.1 < self.range.0 {
            // reversed ranges hand out bands from the right
            self.start + self.step * (self.domain.len() - 1 - i) as f64
        } else {
            self.start + offset
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

impl BandScale<Option<String>> {
    /// Category bands across `[left, right]` for the given points.
    pub fn for_categories(points: &[DataPoint], left: f64, right: f64) -> Self {
        Self::new(points.iter().map(|p| p.category.clone()), (left, right), BAND_PADDING, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nice_rounds_domain_outward() {
        let mut s = LinearScale::new((0.0, 23_536_681.48), (0.0, 100.0));
        s.nice(10);
        assert_eq!(s.domain, (0.0, 24_000_000.0));
        assert_eq!(s.range, (0.0, 100.0));

        let mut s = LinearScale::new((0.0, 0.83), (0.0, 1.0));
        s.nice(10);
        assert_relative_eq!(s.domain.1, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn tick_increment_uses_round_factors() {
        assert_eq!(tick_increment(0.0, 10.0, 10), 1.0);
        assert_eq!(tick_increment(0.0, 23.0, 10), 2.0);
        assert_eq!(tick_increment(0.0, 45.0, 10), 5.0);
        assert_eq!(tick_increment(0.0, 0.5, 10), -20.0);
        assert_eq!(tick_increment(3.0, 3.0, 10), 0.0);
    }

    #[test]
    fn magnitude_scale_splits_plot_by_share() {
        // max = 30, span = 40 -> positive magnitude takes 3/4 of 400
        let s = LinearScale::for_magnitudes(30.0, -10.0, 400.0);
        assert_eq!(s.domain, (0.0, 30.0));
        assert_relative_eq!(s.range.1, 300.0);
        assert_relative_eq!(s.apply(15.0), 150.0);
    }

    #[test]
    fn degenerate_bounds_flatten_the_range() {
        for (max, min) in [(0.0, 0.0), (5.0, 5.0), (f64::NAN, 0.0), (-1.0, 2.0)] {
            let s = LinearScale::for_magnitudes(max, min, 300.0);
            assert_eq!(s.range, (0.0, 0.0));
            assert_eq!(s.apply(42.0), 0.0);
        }
        let s = LinearScale::for_magnitudes(10.0, -10.0, 0.0);
        assert_eq!(s.apply(10.0), 0.0);
    }

    #[test]
    fn bands_match_rounded_padding_layout() {
        let keys = ["a", "b", "c", "d", "e", "f", "g"];
        let s = BandScale::new(keys, (0.0, 500.0), 0.1, true);
        // step = floor(500 / 7.1) = 70, bandwidth = round(63) = 63
        assert_eq!(s.step(), 70.0);
        assert_eq!(s.bandwidth(), 63.0);
        // start = round((500 - 70 * 6.9) / 2) = round(8.5) = 9
        assert_eq!(s.position(&"a"), Some(9.0));
        assert_eq!(s.position(&"g"), Some(9.0 + 6.0 * 70.0));
        assert_eq!(s.position(&"z"), None);
    }

    #[test]
    fn repeated_keys_share_a_band() {
        let s = BandScale::new(["x", "y", "x"], (0.0, 100.0), 0.1, true);
        assert_eq!(s.domain(), &["x", "y"]);
    }

    #[test]
    fn empty_domain_has_no_positions() {
        let s: BandScale<&str> = BandScale::new([], (0.0, 100.0), 0.1, true);
        assert!(s.domain().is_empty());
        assert_eq!(s.position(&"a"), None);
    }
}

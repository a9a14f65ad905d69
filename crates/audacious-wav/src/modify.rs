//! Modification of existing sample data: volume scaling and mixing.
//!
//! Inputs are never modified; every function returns new samples.

use crate::error::{AudioError, AudioResult};
use crate::wave::{Sample, Wave};

/// Returns `samples` multiplied by `factor`.
pub fn volume(samples: &[Sample], factor: f32) -> Vec<Sample> {
    samples.iter().map(|s| s * factor).collect()
}

/// Converts a wide intermediate value to a sample, saturating at the
/// largest finite `f32` magnitudes.
#[inline]
pub fn clamp_to_sample(value: f64) -> Sample {
    value.clamp(f64::from(f32::MIN), f64::from(f32::MAX)) as Sample
}

/// Mixes two sample sequences.
///
/// `bias` runs from 0 (only `a`) to 1 (only `b`); 0.5 sums both at full
/// volume. Below 0.5 the second input is attenuated by `2 * bias`, above it
/// the first by `1 - 2 * (bias - 0.5)`. The shorter input is padded with
/// silence, and sums are taken in `f64` then clamped to the sample range.
///
/// # Errors
/// `InvalidParameter` if `bias` is outside `[0, 1]` or NaN.
pub fn mix(a: &[Sample], b: &[Sample], bias: f32) -> AudioResult<Vec<Sample>> {
    let (gain_a, gain_b) = mix_gains(bias)?;
    let len = a.len().max(b.len());

    Ok((0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0.0) * gain_a;
            let y = b.get(i).copied().unwrap_or(0.0) * gain_b;
            clamp_to_sample(f64::from(x) + f64::from(y))
        })
        .collect())
}

/// Mixes two waves channel by channel with the same bias.
pub fn mix_waves(a: &Wave, b: &Wave, bias: f32) -> AudioResult<Wave> {
    let left = mix(a.left(), b.left(), bias)?;
    let right = mix(a.right(), b.right(), bias)?;
    Ok(Wave::from_channels(left, right))
}

fn mix_gains(bias: f32) -> AudioResult<(f32, f32)> {
    if !(0.0..=1.0).contains(&bias) {
        return Err(AudioError::invalid_param(
            "bias",
            format!("must be between 0 and 1, got {}", bias),
        ));
    }

    if bias <= 0.5 {
        Ok((1.0, bias * 2.0))
    } else {
        Ok((1.0 - (bias - 0.5) * 2.0, 1.0))
    }
}

impl Wave {
    /// Returns a copy with both channels multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Wave {
        Wave::from_channels(volume(self.left(), factor), volume(self.right(), factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_volume() {
        assert_eq!(volume(&[1.0, -2.0, 4.0], 0.5), vec![0.5, -1.0, 2.0]);
        assert!(volume(&[], 3.0).is_empty());
    }

    #[test]
    fn test_clamp_to_sample() {
        assert_eq!(clamp_to_sample(1.5), 1.5);
        assert_eq!(clamp_to_sample(1e300), f32::MAX);
        assert_eq!(clamp_to_sample(-1e300), f32::MIN);
        assert_eq!(clamp_to_sample(f64::INFINITY), f32::MAX);
    }

    #[test]
    fn test_mix_equal_bias_sums_and_pads() {
        let mixed = mix(&[1.0, 2.0, 3.0], &[10.0], 0.5).unwrap();
        assert_eq!(mixed, vec![11.0, 2.0, 3.0]);

        let mixed = mix(&[1.0], &[10.0, 20.0], 0.5).unwrap();
        assert_eq!(mixed, vec![11.0, 20.0]);
    }

    #[test]
    fn test_mix_bias_extremes() {
        let a = [1.0, 2.0];
        let b = [10.0, 20.0, 30.0];
        assert_eq!(mix(&a, &b, 0.0).unwrap(), vec![1.0, 2.0, 0.0]);
        assert_eq!(mix(&a, &b, 1.0).unwrap(), b.to_vec());
    }

    #[test]
    fn test_mix_partial_bias() {
        let a = [4.0];
        let b = [8.0];
        assert_eq!(mix(&a, &b, 0.25).unwrap(), vec![8.0]);
        assert_eq!(mix(&a, &b, 0.75).unwrap(), vec![10.0]);
    }

    #[test]
    fn test_mix_clamps_overflow() {
        let mixed = mix(&[f32::MAX, f32::MIN], &[f32::MAX, f32::MIN], 0.5).unwrap();
        assert_eq!(mixed, vec![f32::MAX, f32::MIN]);
    }

    #[test]
    fn test_mix_rejects_bad_bias() {
        for bias in [-0.1, 1.1, f32::NAN] {
            let err = mix(&[1.0], &[1.0], bias).unwrap_err();
            assert!(matches!(err, AudioError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_mix_does_not_modify_inputs() {
        let a = vec![1.0, 2.0];
        let b = vec![3.0];
        let _ = mix(&a, &b, 0.3).unwrap();
        assert_eq!(a, vec![1.0, 2.0]);
        assert_eq!(b, vec![3.0]);
    }

    #[test]
    fn test_mix_waves_per_channel() {
        let a = Wave::from_channels(vec![1.0, 1.0], vec![2.0]);
        let b = Wave::from_channels(vec![10.0], vec![20.0, 20.0]);
        let mixed = mix_waves(&a, &b, 0.5).unwrap();
        assert_eq!(mixed.left(), &[11.0, 1.0]);
        assert_eq!(mixed.right(), &[22.0, 20.0]);
    }

    #[test]
    fn test_wave_scaled() {
        let wave = Wave::from_channels(vec![2.0, 4.0], vec![-8.0]);
        let scaled = wave.scaled(0.5);
        assert_eq!(scaled.left(), &[1.0, 2.0]);
        assert_eq!(scaled.right(), &[-4.0]);
        assert_eq!(wave.left(), &[2.0, 4.0]);
    }
}

//! Conversions between sample counts and time.

/// Milliseconds represented by `sample_count` interleaved samples.
///
/// Computed as `sample_count / ((sample_rate / 1000) * channels)` in `f32`.
/// A zero rate or channel count gives infinity (or NaN for zero samples).
pub fn time_by_samples(sample_count: usize, sample_rate: u32, channels: u16) -> f32 {
    sample_count as f32 / ((sample_rate as f32 / 1000.0) * f32::from(channels))
}

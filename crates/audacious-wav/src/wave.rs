//! Two-channel sample buffer.
//!
//! A [`Wave`] holds independently sized left and right channels of `f32`
//! samples. Channels may differ in length while being edited; the longer one
//! defines [`Wave::len`], and readers that need equal-length channels use
//! [`Wave::frame`], which treats missing samples as silence without writing
//! them back.

use std::ops::{Add, AddAssign};

use crate::error::{AudioError, AudioResult};

/// A single amplitude value. Not normalized to `[-1, 1]`.
pub type Sample = f32;

/// Left/right sample buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wave {
    left: Vec<Sample>,
    right: Vec<Sample>,
}

impl Wave {
    /// Creates an empty wave.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wave with `samples` copied into both channels.
    pub fn from_mono(samples: &[Sample]) -> Self {
        Self {
            left: samples.to_vec(),
            right: samples.to_vec(),
        }
    }

    /// Creates a wave that takes ownership of the given channel buffers.
    pub fn from_channels(left: Vec<Sample>, right: Vec<Sample>) -> Self {
        Self { left, right }
    }

    /// Left channel samples.
    pub fn left(&self) -> &[Sample] {
        &self.left
    }

    /// Right channel samples.
    pub fn right(&self) -> &[Sample] {
        &self.right
    }

    /// Consumes the wave, returning `(left, right)`.
    pub fn into_channels(self) -> (Vec<Sample>, Vec<Sample>) {
        (self.left, self.right)
    }

    /// Number of sample frames: the length of the longer channel.
    pub fn len(&self) -> usize {
        self.left.len().max(self.right.len())
    }

    /// Returns true if both channels are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Returns the `(left, right)` pair at `index`, reading past the end of a
    /// shorter channel as silence.
    #[inline]
    pub fn frame(&self, index: usize) -> (Sample, Sample) {
        (
            self.left.get(index).copied().unwrap_or(0.0),
            self.right.get(index).copied().unwrap_or(0.0),
        )
    }

    /// Appends `samples` to both channels.
    pub fn append(&mut self, samples: &[Sample]) {
        self.left.extend_from_slice(samples);
        self.right.extend_from_slice(samples);
    }

    /// Appends separate sample runs to each channel.
    pub fn append_stereo(&mut self, left: &[Sample], right: &[Sample]) {
        self.left.extend_from_slice(left);
        self.right.extend_from_slice(right);
    }

    /// Appends another wave channel by channel.
    pub fn append_wave(&mut self, other: &Wave) {
        self.append_stereo(&other.left, &other.right);
    }

    /// Appends to the left channel only.
    pub fn append_left(&mut self, samples: &[Sample]) {
        self.left.extend_from_slice(samples);
    }

    /// Appends to the right channel only.
    pub fn append_right(&mut self, samples: &[Sample]) {
        self.right.extend_from_slice(samples);
    }

    /// Inserts `samples` at `index` in both channels.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index` is past the end of either channel. Neither
    /// channel is modified on error.
    pub fn insert(&mut self, index: usize, samples: &[Sample]) -> AudioResult<()> {
        self.insert_stereo(index, samples, samples)
    }

    /// Inserts separate runs at `index` in the respective channels.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index` is past the end of either channel. Neither
    /// channel is modified on error.
    pub fn insert_stereo(
        &mut self,
        index: usize,
        left: &[Sample],
        right: &[Sample],
    ) -> AudioResult<()> {
        check_insert(index, left.len(), self.left.len())?;
        check_insert(index, right.len(), self.right.len())?;

        self.left.splice(index..index, left.iter().copied());
        self.right.splice(index..index, right.iter().copied());
        Ok(())
    }

    /// Inserts another wave at `index`, channel by channel.
    pub fn insert_wave(&mut self, index: usize, other: &Wave) -> AudioResult<()> {
        self.insert_stereo(index, &other.left, &other.right)
    }

    /// Copies `count` samples from each channel starting at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index + count` exceeds either channel's length.
    pub fn slice(&self, index: usize, count: usize) -> AudioResult<Wave> {
        let left = check_range(index, count, self.left.len())?;
        let right = check_range(index, count, self.right.len())?;

        Ok(Wave {
            left: self.left[left].to_vec(),
            right: self.right[right].to_vec(),
        })
    }

    /// Removes `count` samples from each channel starting at `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index + count` exceeds either channel's length.
    /// Neither channel is modified on error.
    pub fn remove(&mut self, index: usize, count: usize) -> AudioResult<()> {
        let left = check_range(index, count, self.left.len())?;
        let right = check_range(index, count, self.right.len())?;

        self.left.drain(left);
        self.right.drain(right);
        Ok(())
    }

    /// Empties both channels.
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }
}

fn check_insert(index: usize, count: usize, len: usize) -> AudioResult<()> {
    if index > len {
        return Err(AudioError::IndexOutOfRange { index, count, len });
    }
    Ok(())
}

fn check_range(index: usize, count: usize, len: usize) -> AudioResult<std::ops::Range<usize>> {
    match index.checked_add(count) {
        Some(end) if end <= len => Ok(index..end),
        _ => Err(AudioError::IndexOutOfRange { index, count, len }),
    }
}

impl From<Vec<Sample>> for Wave {
    /// Mono samples shared by both channels.
    fn from(samples: Vec<Sample>) -> Self {
        let right = samples.clone();
        Self {
            left: samples,
            right,
        }
    }
}

impl AddAssign<&Wave> for Wave {
    fn add_assign(&mut self, rhs: &Wave) {
        self.append_wave(rhs);
    }
}

impl AddAssign<&[Sample]> for Wave {
    fn add_assign(&mut self, rhs: &[Sample]) {
        self.append(rhs);
    }
}

impl Add<&Wave> for &Wave {
    type Output = Wave;

    fn add(self, rhs: &Wave) -> Wave {
        let mut result = self.clone();
        result.append_wave(rhs);
        result
    }
}

impl Add<Wave> for Wave {
    type Output = Wave;

    fn add(mut self, rhs: Wave) -> Wave {
        self.append_wave(&rhs);
        self
    }
}

impl Add<&[Sample]> for Wave {
    type Output = Wave;

    fn add(mut self, rhs: &[Sample]) -> Wave {
        self.append(rhs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stereo(left: &[f32], right: &[f32]) -> Wave {
        Wave::from_channels(left.to_vec(), right.to_vec())
    }

    #[test]
    fn test_new_is_empty() {
        let wave = Wave::new();
        assert!(wave.is_empty());
        assert_eq!(wave.len(), 0);
    }

    #[test]
    fn test_from_mono_copies_to_both_channels() {
        let wave = Wave::from_mono(&[1.0, 2.0, 3.0]);
        assert_eq!(wave.left(), &[1.0, 2.0, 3.0]);
        assert_eq!(wave.right(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_len_is_longest_channel() {
        let wave = stereo(&[1.0, 2.0], &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(wave.len(), 4);
        assert!(!wave.is_empty());
    }

    #[test]
    fn test_frame_pads_with_silence() {
        let wave = stereo(&[1.0], &[5.0, 6.0]);
        assert_eq!(wave.frame(0), (1.0, 5.0));
        assert_eq!(wave.frame(1), (0.0, 6.0));
        assert_eq!(wave.frame(7), (0.0, 0.0));
        // Reading padding never grows the buffers.
        assert_eq!(wave.left().len(), 1);
    }

    #[test]
    fn test_append_variants() {
        let mut wave = Wave::new();
        wave.append(&[1.0]);
        wave.append_stereo(&[2.0], &[3.0, 4.0]);
        wave.append_left(&[5.0]);
        wave.append_right(&[6.0]);
        wave.append_wave(&stereo(&[7.0], &[8.0]));

        assert_eq!(wave.left(), &[1.0, 2.0, 5.0, 7.0]);
        assert_eq!(wave.right(), &[1.0, 3.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_insert_at_start_middle_end() {
        let mut wave = Wave::from_mono(&[1.0, 4.0]);
        wave.insert(0, &[0.0]).unwrap();
        wave.insert(2, &[2.0, 3.0]).unwrap();
        wave.insert(5, &[5.0]).unwrap();
        assert_eq!(wave.left(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(wave.right(), wave.left());
    }

    #[test]
    fn test_insert_out_of_range_leaves_wave_untouched() {
        let mut wave = stereo(&[1.0, 2.0, 3.0], &[1.0]);
        let err = wave.insert(2, &[9.0]).unwrap_err();
        assert!(matches!(
            err,
            AudioError::IndexOutOfRange {
                index: 2,
                len: 1,
                ..
            }
        ));
        assert_eq!(wave.left(), &[1.0, 2.0, 3.0]);
        assert_eq!(wave.right(), &[1.0]);
    }

    #[test]
    fn test_insert_wave() {
        let mut wave = stereo(&[1.0, 2.0], &[3.0, 4.0]);
        wave.insert_wave(1, &stereo(&[9.0], &[8.0])).unwrap();
        assert_eq!(wave.left(), &[1.0, 9.0, 2.0]);
        assert_eq!(wave.right(), &[3.0, 8.0, 4.0]);
    }

    #[test]
    fn test_slice() {
        let wave = stereo(&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]);
        let part = wave.slice(1, 2).unwrap();
        assert_eq!(part.left(), &[2.0, 3.0]);
        assert_eq!(part.right(), &[6.0, 7.0]);

        let empty = wave.slice(4, 0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_slice_out_of_range() {
        let wave = stereo(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            wave.slice(1, 2),
            Err(AudioError::IndexOutOfRange { len: 2, .. })
        ));
        assert!(wave.slice(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_remove() {
        let mut wave = Wave::from_mono(&[1.0, 2.0, 3.0, 4.0]);
        wave.remove(1, 2).unwrap();
        assert_eq!(wave.left(), &[1.0, 4.0]);
        assert_eq!(wave.right(), &[1.0, 4.0]);

        assert!(wave.remove(1, 5).is_err());
        assert_eq!(wave.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut wave = stereo(&[1.0], &[2.0, 3.0]);
        wave.clear();
        assert!(wave.is_empty());
    }

    #[test]
    fn test_concatenation_operators() {
        let a = stereo(&[1.0], &[2.0]);
        let b = stereo(&[3.0, 4.0], &[5.0]);

        let joined = &a + &b;
        assert_eq!(joined.left(), &[1.0, 3.0, 4.0]);
        assert_eq!(joined.right(), &[2.0, 5.0]);
        // Operands are untouched.
        assert_eq!(a.left(), &[1.0]);

        let tail: &[Sample] = &[9.0];
        let mono_tail = a.clone() + tail;
        assert_eq!(mono_tail.left(), &[1.0, 9.0]);
        assert_eq!(mono_tail.right(), &[2.0, 9.0]);

        let mut acc = Wave::new();
        acc += &a;
        let more: &[Sample] = &[7.0];
        acc += more;
        assert_eq!(acc.left(), &[1.0, 7.0]);

        assert_eq!(a.clone() + b.clone(), joined);
    }

    #[test]
    fn test_from_vec() {
        let wave: Wave = vec![0.5, -0.5].into();
        assert_eq!(wave, Wave::from_mono(&[0.5, -0.5]));
    }

    #[test]
    fn test_into_channels_moves_buffers() {
        let (left, right) = stereo(&[1.0], &[2.0]).into_channels();
        assert_eq!(left, vec![1.0]);
        assert_eq!(right, vec![2.0]);
    }
}

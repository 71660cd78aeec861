//! Auto-advancing testimonial slider state.

use crate::error::SlideOutOfRange;

/// Index into a fixed sequence of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestimonialRotator {
    index: usize,
    len: usize,
}

impl TestimonialRotator {
    /// A rotator over `len` slides, starting at the first. `len` is clamped to 1.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Timer tick: move to the next slide, wrapping after the last.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Jump straight to a slide.
    pub fn select(&mut self, index: usize) -> Result<usize, SlideOutOfRange> {
        if index >= self.len {
            return Err(SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// CSS transform for the slide track.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.index * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn advance_wraps_modulo_len() {
        let mut rotator = TestimonialRotator::new(3);
        let seen: Vec<_> = (0..6).map(|_| rotator.advance()).collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn select_sets_index_regardless_of_prior_value() {
        let mut rotator = TestimonialRotator::new(3);
        for start in 0..3 {
            for target in 0..3 {
                rotator.select(start).expect("valid start");
                assert_eq!(rotator.select(target), Ok(target));
                assert_eq!(rotator.index(), target);
            }
        }
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut rotator = TestimonialRotator::new(3);
        rotator.advance();
        assert_eq!(rotator.select(3), Err(SlideOutOfRange { index: 3, len: 3 }));
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn track_transform_and_active_dot() {
        let mut rotator = TestimonialRotator::new(3);
        assert_eq!(rotator.track_transform(), "translateX(-0%)");
        rotator.select(2).expect("valid slide");
        assert_eq!(rotator.track_transform(), "translateX(-200%)");
        assert!(rotator.is_active(2));
        assert!(!rotator.is_active(0));
    }

    #[test]
    fn zero_len_is_clamped() {
        let mut rotator = TestimonialRotator::new(0);
        assert_eq!(rotator.slide_count(), 1);
        assert_eq!(rotator.advance(), 0);
    }
}

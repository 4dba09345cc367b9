//! Image slider state machine.
//!
//! The slider tracks one active index over a fixed number of slides. Every
//! slide is assigned exactly one [`SlidePosition`]; the neighbours of the
//! active slide wrap around both ends so the carousel reads as a ring.

/// Minimum horizontal travel, in CSS pixels, for a touch gesture to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SliderError {
    #[error("no slides to show")]
    NoSlides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Active,
    Prev,
    Next,
    Hidden,
}

impl SlidePosition {
    /// CSS class for the slide, empty for hidden slides.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Hidden => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    total: usize,
}

impl SliderState {
    /// Start at the first slide.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::NoSlides`] when `total` is zero.
    pub const fn new(total: usize) -> Result<Self, SliderError> {
        if total == 0 {
            return Err(SliderError::NoSlides);
        }
        Ok(Self { current: 0, total })
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    pub const fn next(&mut self) {
        self.current = (self.current + 1) % self.total;
    }

    pub const fn previous(&mut self) {
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jump to `index`; out-of-range indices leave the state untouched.
    pub const fn go_to(&mut self, index: usize) -> bool {
        if index < self.total {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub const fn apply(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        }
    }

    #[must_use]
    pub const fn position(&self, index: usize) -> SlidePosition {
        let prev = (self.current + self.total - 1) % self.total;
        let next = (self.current + 1) % self.total;
        if index == self.current {
            SlidePosition::Active
        } else if index == prev {
            SlidePosition::Prev
        } else if index == next {
            SlidePosition::Next
        } else {
            SlidePosition::Hidden
        }
    }

    #[must_use]
    pub fn positions(&self) -> Vec<SlidePosition> {
        (0..self.total).map(|i| self.position(i)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

impl SwipeDirection {
    /// Classify a horizontal touch gesture from its start and end X coordinates.
    #[must_use]
    pub fn classify(start_x: f64, end_x: f64) -> Option<Self> {
        if end_x < start_x - SWIPE_THRESHOLD {
            Some(Self::Next)
        } else if end_x > start_x + SWIPE_THRESHOLD {
            Some(Self::Previous)
        } else {
            None
        }
    }

    /// Map `ArrowLeft` / `ArrowRight` to a direction.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slider_is_rejected() {
        assert_eq!(SliderState::new(0), Err(SliderError::NoSlides));
    }

    #[test]
    fn next_and_previous_wrap_at_both_ends() {
        let mut s = SliderState::new(4).unwrap();
        s.previous();
        assert_eq!(s.current(), 3);
        s.next();
        assert_eq!(s.current(), 0);
        s.go_to(3);
        s.next();
        assert_eq!(s.current(), 0);
    }

    #[test]
    fn current_stays_in_range_for_any_sequence() {
        for total in 1..=6 {
            let mut s = SliderState::new(total).unwrap();
            for step in 0..50 {
                if step % 3 == 0 {
                    s.previous();
                } else {
                    s.next();
                }
                assert!(s.current() < total);
            }
        }
    }

    #[test]
    fn go_to_out_of_range_is_a_no_op() {
        let mut s = SliderState::new(3).unwrap();
        s.go_to(1);
        assert!(!s.go_to(3));
        assert!(!s.go_to(usize::MAX));
        assert_eq!(s.current(), 1);
        assert!(s.go_to(2));
        assert_eq!(s.current(), 2);
    }

    #[test]
    fn positions_assign_one_marker_per_slide_with_wraparound() {
        let s = SliderState::new(5).unwrap();
        assert_eq!(
            s.positions(),
            vec![
                SlidePosition::Active,
                SlidePosition::Next,
                SlidePosition::Hidden,
                SlidePosition::Hidden,
                SlidePosition::Prev,
            ]
        );
        let mut s = s;
        s.go_to(4);
        assert_eq!(s.position(0), SlidePosition::Next);
        assert_eq!(s.position(3), SlidePosition::Prev);
        assert_eq!(
            s.positions()
                .iter()
                .filter(|p| **p == SlidePosition::Active)
                .count(),
            1
        );
    }

    #[test]
    fn two_slides_prefer_prev_marker() {
        let mut s = SliderState::new(2).unwrap();
        assert_eq!(s.position(1), SlidePosition::Prev);
        s.next();
        assert_eq!(s.position(0), SlidePosition::Prev);
    }

    #[test]
    fn single_slide_is_only_active() {
        let s = SliderState::new(1).unwrap();
        assert_eq!(s.positions(), vec![SlidePosition::Active]);
    }

    #[test]
    fn swipe_requires_threshold() {
        assert_eq!(SwipeDirection::classify(200.0, 100.0), Some(SwipeDirection::Next));
        assert_eq!(SwipeDirection::classify(100.0, 200.0), Some(SwipeDirection::Previous));
        assert_eq!(SwipeDirection::classify(100.0, 150.0), None);
        assert_eq!(SwipeDirection::classify(100.0, 50.0), None);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(SwipeDirection::from_key("ArrowLeft"), Some(SwipeDirection::Previous));
        assert_eq!(SwipeDirection::from_key("ArrowRight"), Some(SwipeDirection::Next));
        assert_eq!(SwipeDirection::from_key("Enter"), None);
    }
}

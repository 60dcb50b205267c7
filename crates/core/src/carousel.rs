use std::time::Duration;

/// Cadence of automatic highlight rotation.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(6);

/// Cyclic cursor over a fixed catalog. Automatic ticks and manual navigation
/// share the same modular arithmetic, and manual moves never touch the
/// rotation schedule; the timer keeps firing on its original cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active: usize,
    count: usize,
}

impl Carousel {
    /// A carousel over `count` entries, starting at the first. Content
    /// validation rejects empty catalogs upstream; a zero count would make
    /// the modulus meaningless and is clamped to one.
    pub fn new(count: usize) -> Self {
        Self {
            active: 0,
            count: count.max(1),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.count;
    }

    pub fn step_back(&mut self) {
        self.active = (self.active + self.count - 1) % self.count;
    }

    /// Jump straight to `index`. Out-of-range requests leave the cursor
    /// where it is.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.count {
            self.active = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(1, 2)]
    #[case(2, 0)]
    fn advance_wraps_modulo_count(#[case] start: usize, #[case] expected: usize) {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(start);
        carousel.advance();
        assert_eq!(carousel.active(), expected);
    }

    #[rstest]
    #[case(0, 2)]
    #[case(1, 0)]
    #[case(2, 1)]
    fn step_back_wraps_without_underflow(#[case] start: usize, #[case] expected: usize) {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(start);
        carousel.step_back();
        assert_eq!(carousel.active(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn step_back_then_advance_is_identity(#[case] start: usize) {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(start);
        carousel.step_back();
        carousel.advance();
        assert_eq!(carousel.active(), start);

        carousel.advance();
        carousel.step_back();
        assert_eq!(carousel.active(), start);
    }

    #[test]
    fn index_stays_in_range_over_many_ticks() {
        let mut carousel = Carousel::new(3);
        for _ in 0..100 {
            carousel.advance();
            assert!(carousel.active() < carousel.count());
        }
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.jump_to(1);
        carousel.jump_to(3);
        assert_eq!(carousel.active(), 1);
        carousel.jump_to(usize::MAX);
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn single_entry_catalog_stays_put() {
        let mut carousel = Carousel::new(1);
        carousel.advance();
        carousel.step_back();
        assert_eq!(carousel.active(), 0);
    }
}

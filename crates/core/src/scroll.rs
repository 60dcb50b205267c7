/// Vertical offset beyond which the page counts as scrolled.
pub const SCROLL_THRESHOLD: f32 = 10.0;

/// Derives the scrolled display flag from the current vertical offset. Pure
/// recomputation on every observation, no hysteresis and no debounce; shells
/// feed the initial offset once at mount so the flag starts out correct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollWatch {
    scrolled: bool,
}

impl ScrollWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe an offset. Returns true when the flag flipped.
    pub fn observe(&mut self, offset: f32) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_follows_the_threshold_exactly() {
        let mut watch = ScrollWatch::new();
        let offsets = [0.0, 5.0, 11.0, 9.0, 100.0];
        let expected = [false, false, true, false, true];

        let observed: Vec<bool> = offsets
            .iter()
            .map(|offset| {
                watch.observe(*offset);
                watch.scrolled()
            })
            .collect();

        assert_eq!(observed, expected);
    }

    #[test]
    fn threshold_itself_does_not_count() {
        let mut watch = ScrollWatch::new();
        watch.observe(SCROLL_THRESHOLD);
        assert!(!watch.scrolled());
        watch.observe(SCROLL_THRESHOLD + 0.1);
        assert!(watch.scrolled());
    }

    #[test]
    fn observe_reports_flips_only() {
        let mut watch = ScrollWatch::new();
        assert!(!watch.observe(4.0));
        assert!(watch.observe(40.0));
        assert!(!watch.observe(80.0));
        assert!(watch.observe(0.0));
    }
}

use crate::gate::FrameGate;

/// Fraction of the remaining gap the eased point closes per step.
pub const GLIDE_FACTOR: f32 = 0.12;

/// Axis gap below which the eased point counts as caught up.
pub const SETTLE_EPSILON: f32 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Damped pointer tracking. The raw point jumps with every move event while
/// the eased point glides after it, one step per scheduled frame. A
/// [`FrameGate`] keeps at most one step pending under any event rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorTrail {
    raw: Point,
    eased: Point,
    gate: FrameGate,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position. Returns true when this observation armed
    /// the gate, i.e. the caller should schedule one animation step.
    pub fn observe(&mut self, x: f32, y: f32) -> bool {
        self.raw = Point::new(x, y);
        self.gate.arm()
    }

    /// Advance the eased point one step. Returns true while another step is
    /// wanted; once both axes are within [`SETTLE_EPSILON`] the gate settles
    /// and the next pointer move starts a fresh run. A step on an idle gate
    /// moves nothing.
    pub fn step(&mut self) -> bool {
        if !self.gate.is_armed() {
            return false;
        }
        self.eased.x += (self.raw.x - self.eased.x) * GLIDE_FACTOR;
        self.eased.y += (self.raw.y - self.eased.y) * GLIDE_FACTOR;
        let dx = self.raw.x - self.eased.x;
        let dy = self.raw.y - self.eased.y;
        if dx.abs() > SETTLE_EPSILON || dy.abs() > SETTLE_EPSILON {
            true
        } else {
            self.gate.settle();
            false
        }
    }

    /// Cancel the pending step, if any.
    pub fn halt(&mut self) {
        self.gate.settle();
    }

    pub fn raw(&self) -> Point {
        self.raw
    }

    pub fn eased(&self) -> Point {
        self.eased
    }

    pub fn animating(&self) -> bool {
        self.gate.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_geometrically_toward_the_raw_point() {
        let mut trail = CursorTrail::new();
        assert!(trail.observe(100.0, 100.0));

        let mut steps = 0;
        loop {
            let again = trail.step();
            steps += 1;
            let expected = 100.0 * (1.0 - 0.88_f32.powi(steps));
            assert!((trail.eased().x - expected).abs() < 0.01);
            assert!((trail.eased().y - expected).abs() < 0.01);
            if !again {
                break;
            }
            assert!(steps < 200, "trail never settled");
        }

        assert!(!trail.animating());
        assert!((100.0 - trail.eased().x).abs() <= SETTLE_EPSILON);
        assert!((100.0 - trail.eased().y).abs() <= SETTLE_EPSILON);
    }

    #[test]
    fn burst_of_moves_arms_exactly_one_step() {
        let mut trail = CursorTrail::new();
        let mut scheduled = 0;
        for i in 0..1000 {
            if trail.observe(i as f32, 0.0) {
                scheduled += 1;
            }
        }
        assert_eq!(scheduled, 1);
        assert!(trail.animating());
    }

    #[test]
    fn settles_within_epsilon_and_rearms_on_the_next_move() {
        let mut trail = CursorTrail::new();
        trail.observe(0.1, 0.0);
        assert!(!trail.step());
        assert!(!trail.animating());

        assert!(trail.observe(50.0, 50.0));
    }

    #[test]
    fn step_on_an_idle_gate_moves_nothing() {
        let mut trail = CursorTrail::new();
        assert!(!trail.step());
        assert_eq!(trail.eased(), Point::default());
    }

    #[test]
    fn halt_cancels_the_pending_step() {
        let mut trail = CursorTrail::new();
        trail.observe(40.0, 40.0);
        trail.halt();
        assert!(!trail.animating());
        assert!(!trail.step());
        assert_eq!(trail.eased(), Point::default());
    }
}

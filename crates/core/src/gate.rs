/// Coalesces repeated wake-up requests into at most one pending step.
///
/// Callers arm the gate whenever new work arrives; only the transition out of
/// idle reports true, so a single step stays pending no matter how often the
/// trigger fires. The step itself decides whether the gate stays armed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameGate {
    armed: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a step. Returns true only when the gate was idle; the caller
    /// that observes true owns scheduling the one pending step.
    pub fn arm(&mut self) -> bool {
        if self.armed {
            return false;
        }
        self.armed = true;
        true
    }

    /// Mark the pending step finished without rescheduling.
    pub fn settle(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_first_arm_schedules() {
        let mut gate = FrameGate::new();
        assert!(gate.arm());
        for _ in 0..999 {
            assert!(!gate.arm());
        }
        assert!(gate.is_armed());
    }

    #[test]
    fn settling_allows_rearming() {
        let mut gate = FrameGate::new();
        assert!(gate.arm());
        gate.settle();
        assert!(!gate.is_armed());
        assert!(gate.arm());
    }

    #[test]
    fn settle_on_idle_gate_is_harmless() {
        let mut gate = FrameGate::new();
        gate.settle();
        assert!(!gate.is_armed());
    }
}

/// Number of increments the primary counter takes from zero to its target.
pub const ANIMATION_STEPS: u64 = 50;

/// Cosmetic count-up animation for the primary visitor slot.
///
/// Purely presentational; the only contract is that it terminates showing
/// exactly the target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterAnimation {
    current: u64,
    target: u64,
    increment: u64,
    running: bool,
}

impl CounterAnimation {
    pub fn start(target: u64) -> Self {
        Self {
            current: 0,
            target,
            increment: target.div_ceil(ANIMATION_STEPS).max(1),
            running: target > 0,
        }
    }

    /// Advances one frame. Returns true on the frame that reaches the target.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.current = self.current.saturating_add(self.increment);
        if self.current >= self.target {
            self.current = self.target;
            self.running = false;
            return true;
        }
        false
    }

    /// Raises the target mid-flight. The displayed value never moves
    /// backwards, so a lower or equal target is ignored.
    pub fn raise_target(&mut self, target: u64) {
        if target > self.target {
            self.target = target;
            self.running = true;
        }
    }

    pub fn displayed(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

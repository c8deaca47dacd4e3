/// Easing factor applied to the follower each frame.
pub const FOLLOWER_EASE: f64 = 0.1;

/// Pixel offset that centres the follower ring on the pointer.
pub const FOLLOWER_OFFSET_PX: f64 = 20.0;

/// Scale applied to the cursor pair while hovering an interactive element.
pub const HOVER_SCALE: f64 = 1.5;

/// Trailing position of the cursor-follower ring.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowerState {
    pub x: f64,
    pub y: f64,
}

impl FollowerState {
    /// Moves one eased step toward the pointer position.
    pub fn step_toward(&mut self, pointer_x: f64, pointer_y: f64) {
        self.x += (pointer_x - self.x) * FOLLOWER_EASE;
        self.y += (pointer_y - self.y) * FOLLOWER_EASE;
    }

    /// CSS left/top values for the follower ring, offset to centre it.
    pub fn css_position(&self) -> (String, String) {
        (
            format!("{}px", self.x - FOLLOWER_OFFSET_PX),
            format!("{}px", self.y - FOLLOWER_OFFSET_PX),
        )
    }
}

/// Scale for the cursor pair given the current hover state.
pub fn cursor_scale(hovering: bool) -> f64 {
    if hovering {
        HOVER_SCALE
    } else {
        1.0
    }
}

/// Bounding box of a project card, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub width: f64,
    pub height: f64,
}

/// 3D tilt transform for a pointer at `(x, y)` inside the card.
///
/// The card rotates away from the pointer, one degree per ten pixels of
/// distance from the centre.
pub fn tilt_transform(rect: CardRect, x: f64, y: f64) -> String {
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    let rotate_x = (y - center_y) / 10.0;
    let rotate_y = (center_x - x) / 10.0;
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ(20px)")
}

/// Transform restoring a card to its resting pose.
pub fn tilt_reset() -> &'static str {
    "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)"
}

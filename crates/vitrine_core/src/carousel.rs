/// Slide index state for the image carousel.
///
/// Construction fails when the page has no slides; the feature is then
/// simply skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    total: usize,
}

impl CarouselState {
    pub fn new(total_slides: usize) -> Option<Self> {
        (total_slides > 0).then_some(Self {
            current: 0,
            total: total_slides,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.total;
    }

    pub fn prev(&mut self) {
        self.current = (self.current + self.total - 1) % self.total;
    }

    /// Jumps to the given slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
        }
    }

    /// CSS transform that slides the track to the current slide.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }

    /// Active flag per indicator dot, in slide order.
    pub fn indicator_states(&self) -> Vec<bool> {
        (0..self.total).map(|i| i == self.current).collect()
    }
}

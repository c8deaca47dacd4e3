use crate::carousel::CarouselState;
use crate::counter_anim::CounterAnimation;
use crate::metrics::{format_with_commas, VisitorMetrics};
use crate::pointer::{cursor_scale, FollowerState};
use crate::scroll::{self, SectionAnchor};
use crate::view_model::{CarouselView, PageViewModel};

/// Frames the counter widget stays emphasized after a new visitor lands.
/// Roughly two seconds at the platform's 40 ms tick cadence.
pub const FLASH_FRAMES: u8 = 50;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    carousel: Option<CarouselState>,
    metrics: Option<VisitorMetrics>,
    counter: CounterAnimation,
    displayed_total: u64,
    flash_frames: u8,
    pointer_x: f64,
    pointer_y: f64,
    follower: FollowerState,
    hovering: bool,
    scroll_y: f64,
    sections: Vec<SectionAnchor>,
    stats_hidden: bool,
    session_views: u32,
    dirty: bool,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PageViewModel {
        let (follower_left, follower_top) = self.follower.css_position();
        PageViewModel {
            counter_text: format_with_commas(self.displayed_total),
            today_text: self
                .metrics
                .map(|m| format_with_commas(m.today_visitors)),
            total_text: self
                .metrics
                .map(|m| format_with_commas(m.total_visitors)),
            page_views_text: self.metrics.map(|m| format_with_commas(m.page_views)),
            online_users_text: self.metrics.map(|m| format_with_commas(m.online_users)),
            footer_visitors_text: self
                .metrics
                .map(|m| format_with_commas(m.total_visitors)),
            footer_views_text: self.metrics.map(|m| format_with_commas(m.page_views)),
            flash_active: self.flash_frames > 0,
            carousel: self.carousel.map(|c| CarouselView {
                track_transform: c.track_transform(),
                indicators: c.indicator_states(),
            }),
            header: scroll::header_style(self.scroll_y),
            active_section: scroll::active_section(self.scroll_y, &self.sections)
                .map(str::to_owned),
            follower_left,
            follower_top,
            cursor_scale: cursor_scale(self.hovering),
            stats_visible: !self.stats_hidden,
            dirty: self.dirty,
        }
    }

    /// Value currently shown in the primary counter slot.
    pub fn displayed_total(&self) -> u64 {
        self.displayed_total
    }

    /// Page views recorded for this browsing session.
    pub fn session_views(&self) -> u32 {
        self.session_views
    }

    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn load_page(&mut self, slide_count: usize, sections: Vec<SectionAnchor>) {
        self.carousel = CarouselState::new(slide_count);
        self.sections = sections;
        self.session_views += 1;
        self.dirty = true;
    }

    pub(crate) fn carousel_next(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.next();
            self.dirty = true;
        }
    }

    pub(crate) fn carousel_prev(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.prev();
            self.dirty = true;
        }
    }

    pub(crate) fn carousel_go_to(&mut self, index: usize) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.go_to(index);
            self.dirty = true;
        }
    }

    /// Installs a fresh metrics snapshot and restarts the count-up animation.
    pub(crate) fn apply_metrics(&mut self, metrics: VisitorMetrics) {
        self.counter = CounterAnimation::start(metrics.total_visitors);
        self.displayed_total = self.counter.displayed();
        self.metrics = Some(metrics);
        self.dirty = true;
    }

    /// Applies a refreshed remote total.
    ///
    /// The displayed value is monotonically non-decreasing: a refresh that
    /// lands mid-animation raises the animation target instead of racing it,
    /// and a stale (lower) value is dropped.
    pub(crate) fn apply_latest_total(&mut self, value: u64) {
        if self.counter.is_running() {
            if value > self.counter.target() {
                self.counter.raise_target(value);
                self.bump_total_metric(value);
                self.dirty = true;
            }
            return;
        }
        if value > self.displayed_total {
            self.displayed_total = value;
            self.bump_total_metric(value);
            self.flash_frames = FLASH_FRAMES;
            self.dirty = true;
        }
    }

    fn bump_total_metric(&mut self, value: u64) {
        let mut metrics = self.metrics.unwrap_or_default();
        if value > metrics.total_visitors {
            metrics.total_visitors = value;
        }
        self.metrics = Some(metrics);
    }

    pub(crate) fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
        self.dirty = true;
    }

    pub(crate) fn set_hovering(&mut self, hovering: bool) {
        if self.hovering != hovering {
            self.hovering = hovering;
            self.dirty = true;
        }
    }

    pub(crate) fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
        self.dirty = true;
    }

    pub(crate) fn toggle_stats(&mut self) {
        self.stats_hidden = !self.stats_hidden;
        self.dirty = true;
    }

    /// Advances the per-frame animations: follower easing, counter count-up
    /// and the flash countdown.
    pub(crate) fn tick(&mut self) {
        let before = self.follower;
        self.follower.step_toward(self.pointer_x, self.pointer_y);
        if self.follower != before {
            self.dirty = true;
        }

        if self.counter.is_running() {
            let finished = self.counter.step();
            self.displayed_total = self.counter.displayed();
            if finished {
                self.flash_frames = FLASH_FRAMES;
            }
            self.dirty = true;
        }

        if self.flash_frames > 0 {
            self.flash_frames -= 1;
            if self.flash_frames == 0 {
                self.dirty = true;
            }
        }
    }
}

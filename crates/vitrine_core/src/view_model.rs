use crate::scroll::HeaderStyle;

/// Track transform plus active/inactive flags per indicator dot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselView {
    pub track_transform: String,
    pub indicators: Vec<bool>,
}

/// Everything the platform needs to render one frame of the page chrome.
///
/// Metric slots are `None` until the first snapshot arrives; the platform
/// skips absent slots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageViewModel {
    pub counter_text: String,
    pub today_text: Option<String>,
    pub total_text: Option<String>,
    pub page_views_text: Option<String>,
    pub online_users_text: Option<String>,
    pub footer_visitors_text: Option<String>,
    pub footer_views_text: Option<String>,
    pub flash_active: bool,
    pub carousel: Option<CarouselView>,
    pub header: HeaderStyle,
    pub active_section: Option<String>,
    pub follower_left: String,
    pub follower_top: String,
    pub cursor_scale: f64,
    pub stats_visible: bool,
    pub dirty: bool,
}

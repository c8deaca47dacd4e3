//! Slot names matching the page markup's element ids.

pub const VISITOR_COUNT: &str = "visitorCount";
pub const TODAY_VISITORS: &str = "todayVisitors";
pub const TOTAL_VISITORS: &str = "totalVisitors";
pub const PAGE_VIEWS: &str = "pageViews";
pub const ONLINE_USERS: &str = "onlineUsers";
pub const FOOTER_VISITORS: &str = "footerVisitors";
pub const FOOTER_VIEWS: &str = "footerViews";
pub const CAROUSEL_TRACK: &str = "carouselTrack";
pub const CAROUSEL_INDICATORS: &str = "carouselIndicators";
pub const STATS_PANEL: &str = "statsPanel";
pub const HEADER: &str = "header";
pub const NAV_ACTIVE: &str = "navActive";
pub const CURSOR_FOLLOWER: &str = "cursorFollower";

pub const ALL_SLOTS: &[&str] = &[
    VISITOR_COUNT,
    TODAY_VISITORS,
    TOTAL_VISITORS,
    PAGE_VIEWS,
    ONLINE_USERS,
    FOOTER_VISITORS,
    FOOTER_VIEWS,
    CAROUSEL_TRACK,
    CAROUSEL_INDICATORS,
    STATS_PANEL,
    HEADER,
    NAV_ACTIVE,
    CURSOR_FOLLOWER,
];

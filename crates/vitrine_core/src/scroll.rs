/// Scroll offset past which the header condenses.
pub const HEADER_CONDENSE_PX: f64 = 100.0;

/// Slack subtracted from a section top when deciding the active nav link.
pub const SECTION_SLACK_PX: f64 = 100.0;

/// Offset subtracted from a smooth-scroll target to clear the fixed header.
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

/// Per-index reveal delay for project cards, in seconds.
pub const CARD_STAGGER_SECS: f64 = 0.2;

/// Per-index reveal delay for skill items, in seconds.
pub const SKILL_STAGGER_SECS: f64 = 0.1;

/// Vertical anchor of a section element, used for nav highlighting.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f64,
}

/// Header rendering mode derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    #[default]
    Resting,
    Condensed,
}

pub fn header_style(scroll_y: f64) -> HeaderStyle {
    if scroll_y > HEADER_CONDENSE_PX {
        HeaderStyle::Condensed
    } else {
        HeaderStyle::Resting
    }
}

/// Id of the last section whose top, minus slack, has scrolled past.
pub fn active_section(scroll_y: f64, sections: &[SectionAnchor]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| scroll_y >= section.top - SECTION_SLACK_PX)
        .map(|section| section.id.as_str())
}

/// Parallax transform for a floating shape; later shapes move faster.
pub fn shape_parallax(scroll_y: f64, index: usize) -> String {
    let speed = 0.2 + index as f64 * 0.1;
    format!(
        "translateY({}px) rotate({}deg)",
        scroll_y * speed,
        scroll_y * 0.1
    )
}

/// Rotation transform for a profile ring tied to the scroll offset.
pub fn ring_rotation(scroll_y: f64, index: usize) -> String {
    format!("rotate({}deg)", scroll_y * (0.1 + index as f64 * 0.05))
}

/// Reveal transition delay for the element at `index`.
pub fn reveal_delay_secs(index: usize, stagger_secs: f64) -> f64 {
    index as f64 * stagger_secs
}

/// Scroll target that leaves room for the fixed header.
pub fn smooth_scroll_target(section_top: f64) -> f64 {
    (section_top - NAV_SCROLL_OFFSET_PX).max(0.0)
}

//! Vitrine core: pure page state machine and presentational math helpers.
mod carousel;
mod counter_anim;
mod effect;
mod metrics;
mod msg;
mod particle;
mod pointer;
mod scroll;
mod state;
mod tilt;
mod update;
mod view_model;

pub use carousel::CarouselState;
pub use counter_anim::{CounterAnimation, ANIMATION_STEPS};
pub use effect::Effect;
pub use metrics::{format_with_commas, VisitorMetrics};
pub use msg::Msg;
pub use particle::{particle_spec, ParticleKeyframe, ParticleSeed, ParticleSpec};
pub use pointer::{cursor_scale, FollowerState, FOLLOWER_EASE, FOLLOWER_OFFSET_PX, HOVER_SCALE};
pub use scroll::{
    active_section, header_style, reveal_delay_secs, ring_rotation, shape_parallax,
    smooth_scroll_target, HeaderStyle, SectionAnchor, CARD_STAGGER_SECS, HEADER_CONDENSE_PX,
    NAV_SCROLL_OFFSET_PX, SECTION_SLACK_PX, SKILL_STAGGER_SECS,
};
pub use state::{PageState, FLASH_FRAMES};
pub use tilt::{tilt_reset, tilt_transform, CardRect};
pub use update::update;
pub use view_model::{CarouselView, PageViewModel};

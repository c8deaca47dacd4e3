use vitrine_core::{HeaderStyle, PageViewModel};

use super::constants::*;
use crate::platform::dom::DomCommand;

/// Maps one view snapshot onto page mutations.
pub fn render(view: &PageViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetText {
        slot: VISITOR_COUNT,
        text: view.counter_text.clone(),
    });
    cmds.push(DomCommand::SetEmphasis {
        slot: VISITOR_COUNT,
        on: view.flash_active,
    });

    // Metric slots stay untouched until the first snapshot arrives.
    let metric_slots = [
        (TODAY_VISITORS, &view.today_text),
        (TOTAL_VISITORS, &view.total_text),
        (PAGE_VIEWS, &view.page_views_text),
        (ONLINE_USERS, &view.online_users_text),
        (FOOTER_VISITORS, &view.footer_visitors_text),
        (FOOTER_VIEWS, &view.footer_views_text),
    ];
    for (slot, text) in metric_slots {
        if let Some(text) = text {
            cmds.push(DomCommand::SetText {
                slot,
                text: text.clone(),
            });
        }
    }

    if let Some(carousel) = &view.carousel {
        cmds.push(DomCommand::SetTransform {
            slot: CAROUSEL_TRACK,
            transform: carousel.track_transform.clone(),
        });
        cmds.push(DomCommand::SetText {
            slot: CAROUSEL_INDICATORS,
            text: indicator_row(&carousel.indicators),
        });
    }

    cmds.push(DomCommand::SetEmphasis {
        slot: HEADER,
        on: view.header == HeaderStyle::Condensed,
    });
    cmds.push(DomCommand::SetText {
        slot: NAV_ACTIVE,
        text: view.active_section.clone().unwrap_or_default(),
    });
    cmds.push(DomCommand::SetTransform {
        slot: CURSOR_FOLLOWER,
        transform: format!(
            "translate({}, {}) scale({})",
            view.follower_left, view.follower_top, view.cursor_scale
        ),
    });
    cmds.push(DomCommand::SetVisible {
        slot: STATS_PANEL,
        visible: view.stats_visible,
    });

    cmds
}

fn indicator_row(indicators: &[bool]) -> String {
    indicators
        .iter()
        .map(|active| if *active { 'o' } else { '.' })
        .collect()
}

#[cfg(test)]
mod tests {
    use vitrine_core::CarouselView;

    use super::*;

    #[test]
    fn metric_slots_are_left_alone_before_the_first_snapshot() {
        let view = PageViewModel {
            counter_text: "0".to_string(),
            ..PageViewModel::default()
        };

        let cmds = render(&view);

        assert!(cmds.iter().all(|cmd| !matches!(
            cmd,
            DomCommand::SetText {
                slot: TODAY_VISITORS,
                ..
            }
        )));
        assert!(cmds.contains(&DomCommand::SetText {
            slot: VISITOR_COUNT,
            text: "0".to_string(),
        }));
    }

    #[test]
    fn flash_emphasizes_the_counter_slot() {
        let view = PageViewModel {
            flash_active: true,
            ..PageViewModel::default()
        };

        let cmds = render(&view);

        assert!(cmds.contains(&DomCommand::SetEmphasis {
            slot: VISITOR_COUNT,
            on: true,
        }));
    }

    #[test]
    fn carousel_renders_track_and_indicator_row() {
        let view = PageViewModel {
            carousel: Some(CarouselView {
                track_transform: "translateX(-100%)".to_string(),
                indicators: vec![false, true, false],
            }),
            ..PageViewModel::default()
        };

        let cmds = render(&view);

        assert!(cmds.contains(&DomCommand::SetTransform {
            slot: CAROUSEL_TRACK,
            transform: "translateX(-100%)".to_string(),
        }));
        assert!(cmds.contains(&DomCommand::SetText {
            slot: CAROUSEL_INDICATORS,
            text: ".o.".to_string(),
        }));
    }
}

use std::sync::Once;

use vitrine_core::{update, HeaderStyle, Msg, PageState, SectionAnchor};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(vitrine_logging::initialize_for_tests);
}

fn anchors() -> Vec<SectionAnchor> {
    vec![
        SectionAnchor {
            id: "home".to_string(),
            top: 0.0,
        },
        SectionAnchor {
            id: "projects".to_string(),
            top: 600.0,
        },
        SectionAnchor {
            id: "skills".to_string(),
            top: 1200.0,
        },
    ]
}

fn loaded_state() -> PageState {
    let (state, _) = update(
        PageState::new(),
        Msg::PageLoaded {
            slide_count: 0,
            sections: anchors(),
        },
    );
    state
}

#[test]
fn header_condenses_past_threshold() {
    init_logging();
    let state = loaded_state();
    let (state, _) = update(state, Msg::Scrolled { y: 50.0 });
    assert_eq!(state.view().header, HeaderStyle::Resting);

    let (state, _) = update(state, Msg::Scrolled { y: 150.0 });
    assert_eq!(state.view().header, HeaderStyle::Condensed);
}

#[test]
fn nav_highlight_tracks_last_passed_section() {
    init_logging();
    let state = loaded_state();
    assert_eq!(state.view().active_section.as_deref(), Some("home"));

    let (state, _) = update(state, Msg::Scrolled { y: 499.0 });
    assert_eq!(state.view().active_section.as_deref(), Some("home"));

    let (state, _) = update(state, Msg::Scrolled { y: 520.0 });
    assert_eq!(state.view().active_section.as_deref(), Some("projects"));

    let (state, _) = update(state, Msg::Scrolled { y: 1250.0 });
    assert_eq!(state.view().active_section.as_deref(), Some("skills"));
}

#[test]
fn follower_eases_toward_pointer() {
    init_logging();
    let state = loaded_state();
    let (mut state, _) = update(state, Msg::PointerMoved { x: 100.0, y: 40.0 });

    let mut previous_gap = f64::INFINITY;
    for _ in 0..60 {
        let (next, _) = update(state, Msg::Tick);
        state = next;
        let left = state
            .view()
            .follower_left
            .trim_end_matches("px")
            .parse::<f64>()
            .expect("numeric left");
        // css_position offsets by -20; undo it to recover the raw x.
        let x = left + 20.0;
        let gap = (100.0 - x).abs();
        assert!(gap < previous_gap, "follower must approach the pointer");
        previous_gap = gap;
    }
    assert!(previous_gap < 1.0);
}

#[test]
fn hover_scales_cursor_pair() {
    init_logging();
    let state = loaded_state();
    assert_eq!(state.view().cursor_scale, 1.0);

    let (state, _) = update(state, Msg::HoverChanged { hovering: true });
    assert_eq!(state.view().cursor_scale, 1.5);

    let (state, _) = update(state, Msg::HoverChanged { hovering: false });
    assert_eq!(state.view().cursor_scale, 1.0);
}

#[test]
fn widget_click_toggles_stats_panel() {
    init_logging();
    let state = loaded_state();
    assert!(state.view().stats_visible);

    let (state, _) = update(state, Msg::CounterWidgetClicked);
    assert!(!state.view().stats_visible);

    let (state, _) = update(state, Msg::CounterWidgetClicked);
    assert!(state.view().stats_visible);
}

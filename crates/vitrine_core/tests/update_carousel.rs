use std::sync::Once;

use vitrine_core::{update, Msg, PageState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(vitrine_logging::initialize_for_tests);
}

fn page_with_slides(slide_count: usize) -> PageState {
    let (state, _) = update(
        PageState::new(),
        Msg::PageLoaded {
            slide_count,
            sections: Vec::new(),
        },
    );
    state
}

fn active_index(state: &PageState) -> usize {
    let carousel = state.view().carousel.expect("carousel present");
    carousel
        .indicators
        .iter()
        .position(|active| *active)
        .expect("one indicator active")
}

#[test]
fn next_wraps_around() {
    init_logging();
    let mut state = page_with_slides(3);
    assert_eq!(active_index(&state), 0);

    for expected in [1, 2, 0, 1] {
        let (next, effects) = update(state, Msg::CarouselNextClicked);
        assert!(effects.is_empty());
        state = next;
        assert_eq!(active_index(&state), expected);
    }
}

#[test]
fn prev_wraps_around() {
    init_logging();
    let state = page_with_slides(3);
    let (state, _) = update(state, Msg::CarouselPrevClicked);
    assert_eq!(active_index(&state), 2);

    let view = state.view();
    assert_eq!(
        view.carousel.expect("carousel present").track_transform,
        "translateX(-200%)"
    );
}

#[test]
fn indicator_click_jumps_to_slide() {
    init_logging();
    let state = page_with_slides(4);
    let (state, _) = update(state, Msg::IndicatorClicked(2));
    assert_eq!(active_index(&state), 2);

    // Out-of-range indices are ignored.
    let (state, _) = update(state, Msg::IndicatorClicked(9));
    assert_eq!(active_index(&state), 2);
}

#[test]
fn missing_carousel_is_skipped() {
    init_logging();
    let state = page_with_slides(0);
    assert!(state.view().carousel.is_none());

    // Clicks against an absent carousel are normal no-ops.
    let (state, effects) = update(state, Msg::CarouselNextClicked);
    assert!(effects.is_empty());
    assert!(state.view().carousel.is_none());
}

#[test]
fn track_transform_follows_current_slide() {
    init_logging();
    let state = page_with_slides(3);
    let (state, _) = update(state, Msg::CarouselNextClicked);
    let view = state.view();
    assert_eq!(
        view.carousel.expect("carousel present").track_transform,
        "translateX(-100%)"
    );
}

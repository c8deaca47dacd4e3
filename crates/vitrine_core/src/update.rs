use crate::{Effect, Msg, PageState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded {
            slide_count,
            sections,
        } => {
            state.load_page(slide_count, sections);
            vec![Effect::LoadMetrics]
        }
        Msg::CarouselNextClicked => {
            state.carousel_next();
            Vec::new()
        }
        Msg::CarouselPrevClicked => {
            state.carousel_prev();
            Vec::new()
        }
        Msg::IndicatorClicked(index) => {
            state.carousel_go_to(index);
            Vec::new()
        }
        Msg::MetricsLoaded(metrics) => {
            state.apply_metrics(metrics);
            Vec::new()
        }
        Msg::LatestTotalFetched(value) => {
            state.apply_latest_total(value);
            Vec::new()
        }
        Msg::RefreshTimerFired => vec![Effect::FetchLatestCount],
        Msg::PointerMoved { x, y } => {
            state.set_pointer(x, y);
            Vec::new()
        }
        Msg::HoverChanged { hovering } => {
            state.set_hovering(hovering);
            Vec::new()
        }
        Msg::Scrolled { y } => {
            state.set_scroll(y);
            Vec::new()
        }
        Msg::CounterWidgetClicked => {
            state.toggle_stats();
            Vec::new()
        }
        Msg::PageUnloading => vec![Effect::ReportSessionEnd],
        Msg::Tick => {
            state.tick();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

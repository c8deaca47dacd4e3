use crate::metrics::VisitorMetrics;
use crate::scroll::SectionAnchor;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page finished loading; carries what the document actually contains.
    PageLoaded {
        slide_count: usize,
        sections: Vec<SectionAnchor>,
    },
    /// User clicked the carousel next arrow.
    CarouselNextClicked,
    /// User clicked the carousel previous arrow.
    CarouselPrevClicked,
    /// User clicked a carousel indicator dot.
    IndicatorClicked(usize),
    /// Initial metrics snapshot arrived from the counter engine.
    MetricsLoaded(VisitorMetrics),
    /// Periodic refresh fetched the latest remote total.
    LatestTotalFetched(u64),
    /// The periodic refresh timer fired.
    RefreshTimerFired,
    /// Pointer moved to page coordinates.
    PointerMoved { x: f64, y: f64 },
    /// Pointer entered or left an interactive element.
    HoverChanged { hovering: bool },
    /// Page scrolled to a new offset.
    Scrolled { y: f64 },
    /// User clicked the visitor counter widget.
    CounterWidgetClicked,
    /// The page is being torn down.
    PageUnloading,
    /// Frame tick driving the animations.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

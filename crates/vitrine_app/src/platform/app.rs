use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use vitrine_core::{update, Msg, PageState, SectionAnchor};
use vitrine_logging::{set_frame_tick, vitrine_info};

use super::dom::PageDom;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

const FRAME_INTERVAL: Duration = Duration::from_millis(40);
const REFRESH_INTERVAL: Duration = Duration::from_secs(120);
const SLIDE_COUNT: usize = 3;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone());
    let mut dom = PageDom::standard_page();
    let mut state = PageState::new();

    msg_tx.send(Msg::PageLoaded {
        slide_count: SLIDE_COUNT,
        sections: demo_sections(),
    })?;

    spawn_ticker(msg_tx.clone());
    spawn_refresh(msg_tx.clone());
    spawn_input(msg_tx);

    let mut frame: u64 = 0;
    while let Ok(msg) = msg_rx.recv() {
        if matches!(msg, Msg::Tick) {
            frame += 1;
            set_frame_tick(frame);
        }
        let unloading = matches!(msg, Msg::PageUnloading);

        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects, state.session_views());

        if state.consume_dirty() {
            dom.apply(ui::render::render(&state.view()));
        }
        if unloading {
            // Give the best-effort session report a moment to leave.
            thread::sleep(Duration::from_millis(200));
            break;
        }
    }

    vitrine_info!("page torn down");
    Ok(())
}

fn demo_sections() -> Vec<SectionAnchor> {
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
        SectionAnchor {
            id: "contact".to_string(),
            top: 1800.0,
        },
    ]
}

// Animation tick driving the follower easing, count-up and flash decay.
fn spawn_ticker(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(FRAME_INTERVAL);
        }
    });
}

fn spawn_refresh(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || loop {
        thread::sleep(REFRESH_INTERVAL);
        if msg_tx.send(Msg::RefreshTimerFired).is_err() {
            break;
        }
    });
}

/// Maps stdin lines onto page interactions: `n`/`p` page the carousel, a
/// bare number jumps to that slide, `m X Y` moves the pointer, `g Y`
/// scrolls, `h` toggles hover, `s` toggles the stats panel, `q` quits.
fn spawn_input(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        let mut hovering = false;
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let msg = match parse_command(line.trim(), &mut hovering) {
                Some(msg) => msg,
                None => continue,
            };
            let quit = matches!(msg, Msg::PageUnloading);
            if msg_tx.send(msg).is_err() || quit {
                break;
            }
        }
    });
}

fn parse_command(line: &str, hovering: &mut bool) -> Option<Msg> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "n" => Some(Msg::CarouselNextClicked),
        "p" => Some(Msg::CarouselPrevClicked),
        "s" => Some(Msg::CounterWidgetClicked),
        "q" => Some(Msg::PageUnloading),
        "h" => {
            *hovering = !*hovering;
            Some(Msg::HoverChanged {
                hovering: *hovering,
            })
        }
        "m" => {
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            Some(Msg::PointerMoved { x, y })
        }
        "g" => {
            let y = parts.next()?.parse().ok()?;
            Some(Msg::Scrolled { y })
        }
        slide => slide.parse::<usize>().ok().map(Msg::IndicatorClicked),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn commands_map_to_page_interactions() {
        let mut hovering = false;
        assert_eq!(
            parse_command("n", &mut hovering),
            Some(Msg::CarouselNextClicked)
        );
        assert_eq!(
            parse_command("2", &mut hovering),
            Some(Msg::IndicatorClicked(2))
        );
        assert_eq!(
            parse_command("m 120 300", &mut hovering),
            Some(Msg::PointerMoved { x: 120.0, y: 300.0 })
        );
        assert_eq!(
            parse_command("g 250", &mut hovering),
            Some(Msg::Scrolled { y: 250.0 })
        );
        assert_eq!(parse_command("q", &mut hovering), Some(Msg::PageUnloading));
        assert_eq!(parse_command("nonsense", &mut hovering), None);
        assert_eq!(parse_command("", &mut hovering), None);
    }

    #[test]
    fn hover_command_toggles() {
        let mut hovering = false;
        assert_eq!(
            parse_command("h", &mut hovering),
            Some(Msg::HoverChanged { hovering: true })
        );
        assert_eq!(
            parse_command("h", &mut hovering),
            Some(Msg::HoverChanged { hovering: false })
        );
    }
}

use std::env;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use mediaslider::{SliderControl, SliderEvent, config};

use crate::ui::TerminalBinder;

mod clock;
mod event_loop;
mod logging;
mod settings;

/// Capture band half-width for the terminal, in columns.
const DEMO_DRAG_CAPTURE_COLUMNS: f64 = 2.0;

/// Capture delta for the demo: the configured value, else a few columns.
pub fn capture_delta(settings: &config::Settings) -> f64 {
    settings
        .controls
        .drag_capture_delta_or(DEMO_DRAG_CAPTURE_COLUMNS)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.logging)?;

    let total_seconds = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .unwrap_or(settings.demo.total_seconds);

    let binder = TerminalBinder::new(settings.demo.label_width, settings.demo.knob_width);
    let mut slider = SliderControl::with_style(
        binder,
        settings.style.clone(),
        capture_delta(&settings),
    );
    let (event_tx, event_rx) = mpsc::channel::<SliderEvent>();
    slider.set_event_sender(event_tx);
    slider.set_total_time(Some(total_seconds));
    slider.set_current_time(Some(0.0));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(settings.demo.autoplay);
        event_loop::run(&mut terminal, &settings, &mut slider, &event_rx, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

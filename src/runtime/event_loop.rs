use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::{Terminal, backend::CrosstermBackend};

use mediaslider::config;
use mediaslider::format::format_time;
use mediaslider::{PointerTracking, SliderControl, SliderEvent};

use super::clock::{PlaybackClock, next_position};
use crate::ui::{self, StatusView, TerminalBinder};

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    pub clock: PlaybackClock,
    /// Last message shown in the status box.
    pub message: String,
    /// Whether the left button went down on the knob and is still held.
    pub pointer_captured: bool,
}

impl EventLoopState {
    pub fn new(autoplay: bool) -> Self {
        Self {
            clock: PlaybackClock::new(autoplay),
            message: String::new(),
            pointer_captured: false,
        }
    }
}

/// Main terminal event loop: advances the playback clock, routes mouse
/// input to the slider and redraws. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    slider: &mut SliderControl<TerminalBinder>,
    events: &mpsc::Receiver<SliderEvent>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick = Duration::from_millis(settings.demo.tick_ms);

    loop {
        let size = terminal.size()?;
        let areas = ui::layout(Rect::new(0, 0, size.width, size.height));
        if slider.binder_mut().set_track(areas.track_row()) {
            slider.geometry_changed();
        }

        if let Some(delta) = state.clock.advance(tick) {
            advance_playback(slider, state, delta);
        }

        while let Ok(ev) = events.try_recv() {
            handle_slider_event(ev, slider, state);
        }

        terminal.draw(|f| {
            let status = StatusView {
                playing: state.clock.playing,
                message: &state.message,
            };
            ui::draw(f, &areas, slider, &status)
        })?;

        if event::poll(Duration::from_millis(30))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key_event(key, slider, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, slider, state),
                Event::Resize(..) => {
                    // Picked up by `set_track` at the top of the next iteration.
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Moves the slider forward by `delta` seconds of playback. Held while the
/// pointer is captured, so the knob stays under a press until it moves.
pub(super) fn advance_playback(
    slider: &mut SliderControl<TerminalBinder>,
    state: &mut EventLoopState,
    delta: f64,
) {
    if delta <= 0.0 || state.pointer_captured {
        return;
    }
    let total = slider.total_time().unwrap_or(0.0);
    let current = slider.displayed_current_time();
    let (next, finished) = next_position(current, delta, total);
    slider.set_current_time(Some(next));
    if finished {
        state.clock.playing = false;
        state.message = "Reached the end".to_string();
    }
}

fn handle_slider_event(
    ev: SliderEvent,
    slider: &SliderControl<TerminalBinder>,
    state: &mut EventLoopState,
) {
    tracing::debug!(?ev, current = ?slider.current_time(), "slider event");
    match ev {
        SliderEvent::Pressed => state.message = "Scrubbing...".to_string(),
        SliderEvent::ValueChanged => {
            state.message = format!("Seeked to {}", format_time(slider.displayed_current_time()));
        }
        SliderEvent::Released => {
            if state.message.starts_with("Scrubbing") {
                state.message = "Seek cancelled".to_string();
            }
        }
    }
}

fn handle_mouse_event(
    mouse: MouseEvent,
    slider: &mut SliderControl<TerminalBinder>,
    state: &mut EventLoopState,
) {
    let x = slider.binder().local_x(mouse.column);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if slider.binder().contains_row(mouse.row) {
                state.pointer_captured = slider.on_press_start(x);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if state.pointer_captured {
                state.pointer_captured = slider.on_press_move(x);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.pointer_captured {
                state.pointer_captured = false;
                slider.on_press_end(Some(x));
            }
        }
        _ => {}
    }
}

/// Returns `true` when the user asked to quit.
fn handle_key_event(
    key: KeyEvent,
    slider: &mut SliderControl<TerminalBinder>,
    state: &mut EventLoopState,
) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            if state.pointer_captured {
                slider.on_press_end(None);
            }
            return true;
        }
        KeyCode::Esc => {
            // Stands in for a system interruption of the gesture.
            if state.pointer_captured {
                state.pointer_captured = false;
                slider.on_press_end(None);
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            if !state.clock.playing
                && slider.displayed_current_time() >= slider.total_time().unwrap_or(0.0)
            {
                slider.set_current_time(Some(0.0));
            }
            state.clock.toggle();
            state.message.clear();
        }
        _ => {}
    }

    false
}

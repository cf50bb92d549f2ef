//! Terminal rendering of the slider using `ratatui`.
//!
//! `TerminalBinder` is the demo's view binder: it measures the track row in
//! terminal columns and keeps whatever the control writes so `draw` can
//! paint it.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use mediaslider::geometry::TrackGeometry;
use mediaslider::style::{Color, StyleAttribute};
use mediaslider::{SliderControl, ViewBinder};

const CONTROLS_TEXT: &str =
    "[drag knob] seek | [esc] cancel drag | [space/p] play/pause | [q] quit";

/// Screen areas for one frame.
pub struct UiAreas {
    pub header: Rect,
    /// Three rows: top separator, track, bottom separator.
    pub slider: Rect,
    pub status: Rect,
    pub footer: Rect,
}

impl UiAreas {
    /// The single row holding labels, elapsed region and knob.
    pub fn track_row(&self) -> Rect {
        Rect {
            y: self.slider.y + 1,
            height: 1,
            ..self.slider
        }
    }
}

/// Split the terminal into header, slider, status and footer.
pub fn layout(area: Rect) -> UiAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);
    UiAreas {
        header: chunks[0],
        slider: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

/// What `draw` needs besides the slider itself.
pub struct StatusView<'a> {
    pub playing: bool,
    pub message: &'a str,
}

fn term_color(c: Color) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

/// View binder backed by one terminal row.
pub struct TerminalBinder {
    track: Rect,
    label_width: u16,
    knob_width: u16,

    elapsed_width: f64,
    elapsed_text: String,
    remaining_text: String,

    elapsed_region: TermColor,
    knob: TermColor,
    elapsed_text_color: TermColor,
    remaining_text_color: TermColor,
    top_separator: TermColor,
    bottom_separator: TermColor,
    background: TermColor,
    bold_labels: bool,
}

impl TerminalBinder {
    pub fn new(label_width: u16, knob_width: u16) -> Self {
        Self {
            track: Rect::default(),
            label_width,
            knob_width,
            elapsed_width: 0.0,
            elapsed_text: String::new(),
            remaining_text: String::new(),
            elapsed_region: TermColor::Gray,
            knob: TermColor::DarkGray,
            elapsed_text_color: TermColor::White,
            remaining_text_color: TermColor::DarkGray,
            top_separator: TermColor::Gray,
            bottom_separator: TermColor::Gray,
            background: TermColor::Black,
            bold_labels: false,
        }
    }

    /// Move the track row. Returns `true` when its geometry changed.
    pub fn set_track(&mut self, track: Rect) -> bool {
        let changed = self.track != track;
        self.track = track;
        changed
    }

    /// Control-local x of a terminal column, at the cell's center.
    pub fn local_x(&self, column: u16) -> f64 {
        f64::from(column) - f64::from(self.track.x) + 0.5
    }

    pub fn contains_row(&self, row: u16) -> bool {
        self.track.height > 0 && row == self.track.y
    }

    fn label_style(&self, fg: TermColor, bg: TermColor) -> Style {
        let style = Style::default().fg(fg).bg(bg);
        if self.bold_labels {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Spans for the track row: label, elapsed, knob, rest, label.
    fn track_line(&self) -> Line<'static> {
        let geometry = self.geometry();
        let available = geometry.available_width().floor() as usize;
        let elapsed = (self.elapsed_width.round().max(0.0) as usize).min(available);
        let rest = available - elapsed;
        let label_width = usize::from(self.label_width);

        Line::from(vec![
            Span::styled(
                format!("{:^label_width$}", self.elapsed_text),
                self.label_style(self.elapsed_text_color, self.elapsed_region),
            ),
            Span::styled(" ".repeat(elapsed), Style::default().bg(self.elapsed_region)),
            Span::styled(
                "█".repeat(usize::from(self.knob_width)),
                Style::default().fg(self.knob).bg(self.elapsed_region),
            ),
            Span::styled(
                "─".repeat(rest),
                Style::default()
                    .fg(self.bottom_separator)
                    .bg(self.background),
            ),
            Span::styled(
                format!("{:^label_width$}", self.remaining_text),
                self.label_style(self.remaining_text_color, self.background),
            ),
        ])
    }
}

impl ViewBinder for TerminalBinder {
    fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(
            f64::from(self.track.width),
            f64::from(self.label_width),
            f64::from(self.label_width),
            f64::from(self.knob_width),
        )
    }

    fn set_elapsed_width(&mut self, width: f64) {
        self.elapsed_width = width;
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.elapsed_text = text.to_string();
    }

    fn set_remaining_text(&mut self, text: &str) {
        self.remaining_text = text.to_string();
    }

    fn apply_style(&mut self, attribute: &StyleAttribute) {
        match attribute {
            StyleAttribute::ElapsedRegionColor(c) => self.elapsed_region = term_color(*c),
            StyleAttribute::KnobColor(c) => self.knob = term_color(*c),
            StyleAttribute::ElapsedTextColor(c) => self.elapsed_text_color = term_color(*c),
            StyleAttribute::RemainingTextColor(c) => self.remaining_text_color = term_color(*c),
            StyleAttribute::TopSeparatorColor(c) => self.top_separator = term_color(*c),
            StyleAttribute::BottomSeparatorColor(c) => self.bottom_separator = term_color(*c),
            StyleAttribute::BackgroundColor(c) => self.background = term_color(*c),
            // A terminal has no font family or size; only weight carries over.
            StyleAttribute::LabelFont(font) => self.bold_labels = font.bold,
        }
    }
}

/// Render the whole UI into `frame`.
pub fn draw(
    frame: &mut Frame,
    areas: &UiAreas,
    slider: &SliderControl<TerminalBinder>,
    status: &StatusView,
) {
    let binder = slider.binder();

    let header = Paragraph::new(" ~ scrub away ~ ")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" mediaslider ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, areas.header);

    let separator = |color: TermColor| {
        Paragraph::new("▔".repeat(usize::from(areas.slider.width)))
            .style(Style::default().fg(color))
    };
    let [top, track, bottom] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .areas(areas.slider);
    frame.render_widget(separator(binder.top_separator), top);
    frame.render_widget(Paragraph::new(binder.track_line()), track);
    frame.render_widget(separator(binder.bottom_separator), bottom);

    let mut parts: Vec<String> = Vec::new();
    parts.push(if status.playing { " Playing".to_string() } else { " Paused".to_string() });
    if slider.is_dragging() {
        parts.push("Scrubbing".to_string());
    }
    if !status.message.is_empty() {
        parts.push(status.message.to_string());
    }
    let status_par = Paragraph::new(parts.join(" • "))
        .block(Block::bordered().title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, areas.status);

    let footer = Paragraph::new(CONTROLS_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, areas.footer);
}

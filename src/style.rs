//! Visual configuration surface of the slider.
//!
//! Every option is a plain property that the control forwards to the view
//! binder as a [`StyleAttribute`]; nothing here affects seeking.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::StyleError;

/// An opaque RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_GRAY: Color = Color::rgb(85, 85, 85);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const ORANGE: Color = Color::rgb(255, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_name(name: &str) -> Option<Self> {
        // "dark-gray", "dark_gray", "DarkGray" and "darkgrey" all name the same color.
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let color = match key.replace("grey", "gray").as_str() {
            "black" => Self::BLACK,
            "darkgray" => Self::DARK_GRAY,
            "gray" => Self::GRAY,
            "lightgray" => Self::LIGHT_GRAY,
            "white" => Self::WHITE,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "yellow" => Self::YELLOW,
            "orange" => Self::ORANGE,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(hex: &str) -> Result<Self, StyleError> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StyleError::InvalidHex(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| StyleError::InvalidHex(hex.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        Self::from_name(s).ok_or_else(|| StyleError::UnknownColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Font shared by both time labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelFont {
    /// Font family; `None` leaves the host's default family in place.
    pub family: Option<String>,
    /// Point size.
    pub size: f32,
    pub bold: bool,
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: None,
            size: 12.0,
            bold: false,
        }
    }
}

/// One visual attribute pushed to the view binder.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleAttribute {
    /// Elapsed region, the left label's holder and the knob's inner fill.
    ElapsedRegionColor(Color),
    KnobColor(Color),
    ElapsedTextColor(Color),
    RemainingTextColor(Color),
    TopSeparatorColor(Color),
    BottomSeparatorColor(Color),
    /// Control background, also used behind the remaining-time label.
    BackgroundColor(Color),
    /// Applied to both labels.
    LabelFont(LabelFont),
}

/// Complete visual style of the control.
///
/// Defaults mirror a neutral media player look: gray elapsed region, dark
/// gray knob, white elapsed text and dark gray remaining text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    pub elapsed_region_color: Color,
    pub knob_color: Color,
    pub elapsed_text_color: Color,
    pub remaining_text_color: Color,
    pub top_separator_color: Color,
    pub bottom_separator_color: Color,
    pub background_color: Color,
    pub label_font: LabelFont,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            elapsed_region_color: Color::GRAY,
            knob_color: Color::DARK_GRAY,
            elapsed_text_color: Color::WHITE,
            remaining_text_color: Color::DARK_GRAY,
            top_separator_color: Color::GRAY,
            bottom_separator_color: Color::GRAY,
            background_color: Color::BLACK,
            label_font: LabelFont::default(),
        }
    }
}

impl SliderStyle {
    /// Every option as the attribute the binder receives, in a stable order.
    pub fn attributes(&self) -> Vec<StyleAttribute> {
        vec![
            StyleAttribute::BackgroundColor(self.background_color),
            StyleAttribute::ElapsedRegionColor(self.elapsed_region_color),
            StyleAttribute::KnobColor(self.knob_color),
            StyleAttribute::ElapsedTextColor(self.elapsed_text_color),
            StyleAttribute::RemainingTextColor(self.remaining_text_color),
            StyleAttribute::TopSeparatorColor(self.top_separator_color),
            StyleAttribute::BottomSeparatorColor(self.bottom_separator_color),
            StyleAttribute::LabelFont(self.label_font.clone()),
        ]
    }
}

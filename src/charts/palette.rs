use eframe::egui::Color32;
use serde::{Serialize, Serializer};

use crate::charts::ChartError;

/// An opaque RGB color. Serialises as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub fn parse(hex: &str) -> Result<Self, ChartError> {
        let color = colorgrad::Color::from_html(hex)
            .map_err(|e| ChartError::InvalidColor(format!("{}: {}", hex, e)))?;
        let [r, g, b, _] = color.to_rgba8();
        Ok(Self { r, g, b })
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// Positional palette: category `i` always gets `colors[i % len]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<RgbColor>,
}

impl Palette {
    pub fn from_hex(hex_colors: &[&str]) -> Result<Self, ChartError> {
        let colors = hex_colors
            .iter()
            .map(|hex| RgbColor::parse(hex))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_for(&self, index: usize) -> Option<RgbColor> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors[index % self.colors.len()])
        }
    }

    /// Colors for `count` categories. Wraps (with a warning) when the palette is
    /// shorter than the category list and fails when there is nothing to wrap.
    pub fn assign(&self, count: usize) -> Result<Vec<RgbColor>, ChartError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        if self.colors.len() < count {
            log::warn!(
                "Palette has {} colors for {} categories; colors will repeat",
                self.colors.len(),
                count
            );
        }
        Ok((0..count).filter_map(|i| self.color_for(i)).collect())
    }
}

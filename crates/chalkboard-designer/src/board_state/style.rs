//! Stroke and eraser setters. They apply to shapes drawn afterwards.

use super::BoardState;
use chalkboard_core::Color;

impl BoardState {
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke.color = color;
    }

    /// Sets the stroke width; non-positive or non-finite widths are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        if !(width.is_finite() && width > 0.0) {
            tracing::warn!("Ignoring invalid stroke width {}", width);
            return;
        }
        self.stroke.width = width;
    }

    /// Sets the eraser radius; negative or non-finite radii are ignored.
    pub fn set_eraser_radius(&mut self, radius: f64) {
        if !(radius.is_finite() && radius >= 0.0) {
            tracing::warn!("Ignoring invalid eraser radius {}", radius);
            return;
        }
        self.eraser.set_radius(radius);
    }
}

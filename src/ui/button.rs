use macroquad::prelude::*;

use crate::application::{Command, Layout};

/// Button UI component with hover and click detection.
/// Positions are in logical coordinates.
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    text: String,
    action: Command,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        text: impl Into<String>,
        action: Command,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            action,
            color: Color::from_rgba(255, 255, 255, 30),
            hover_color: Color::from_rgba(255, 255, 255, 60),
        }
    }

    /// The command this button triggers
    pub fn action(&self) -> Command {
        self.action
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if a logical point is over the button
    pub fn is_hovered(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, layout: &Layout, pointer: Option<(f32, f32)>) {
        let color = if pointer.is_some_and(|p| self.is_hovered(p)) {
            self.hover_color
        } else {
            self.color
        };

        let (sx, sy) = layout.to_screen(self.x, self.y);
        let (w, h) = (layout.scaled(self.width), layout.scaled(self.height));
        draw_rectangle(sx, sy, w, h, color);
        draw_rectangle_lines(sx, sy, w, h, layout.scaled(2.0), Color::from_rgba(255, 255, 255, 120));

        let font_size = layout.scaled(18.0);
        let text_size = measure_text(&self.text, None, font_size as u16, 1.0);
        draw_text(
            &self.text,
            sx + (w - text_size.width) / 2.0,
            sy + (h + text_size.height) / 2.0,
            font_size,
            WHITE,
        );
    }
}

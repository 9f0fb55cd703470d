//! Primitive types for 2D rendering

use glam::Vec2;

/// Linear RGBA color, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b, 1.0])
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }

    /// CSS `rgba()` string for canvas fill styles
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.0;
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("rgba({}, {}, {}, {})", channel(r), channel(g), channel(b), a.clamp(0.0, 1.0))
    }
}

/// Filled axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub min: Vec2,
    pub max: Vec2,
    pub color: Color,
}

impl Quad {
    pub fn new(min: Vec2, max: Vec2, color: Color) -> Self {
        Self { min, max, color }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn is_empty(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY: Color = Color::rgb(0.49, 0.83, 0.99);
    pub const GROUND: Color = Color::rgb(0.29, 0.78, 0.35);
    pub const OBSTACLE: Color = Color::rgb(0.13, 0.64, 0.26);
    pub const OBSTACLE_CAP: Color = Color::rgb(0.29, 0.85, 0.45);
    pub const BODY: Color = Color::rgb(0.98, 0.8, 0.08);
    pub const BODY_CRASHED: Color = Color::rgb(0.94, 0.27, 0.27);
    pub const OVERLAY: Color = Color::rgba(0.0, 0.0, 0.0, 0.5);
}

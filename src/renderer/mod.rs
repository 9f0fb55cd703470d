//! Rendering layer
//!
//! Turns a read-only [`crate::sim::Snapshot`] into a list of colored quads and
//! HUD text. Platform front-ends only paint what this produces.

pub mod quad;
pub mod shapes;

pub use quad::{Color, Quad, colors};
pub use shapes::{HudLine, TextSize, display_list, hud_text, obstacle_quads};

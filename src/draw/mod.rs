//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing types used to put a brace on screen:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Canvas`] / [`SurfaceLayout`]: per-container surfaces with density compensation
//! - [`render_brace`]: strokes a brace path onto a Cairo context

pub mod canvas;
pub mod color;
pub mod render;

pub use canvas::{Canvas, SurfaceLayout};
pub use color::Color;
pub use render::{render_brace, trace_path};

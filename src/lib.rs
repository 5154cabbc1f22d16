//! Draw curly-brace ("gullwing") decorations onto Cairo surfaces.
//!
//! A brace is described by a handful of [`settings::Settings`]: the side its
//! tips face, stroke thickness, pointer position, color, and corner sharpness.
//! [`renderer::render`] attaches one freshly drawn surface per container of a
//! [`host::Host`], and [`renderer::teardown`] removes them again.
//!
//! ```
//! use gullwings::document::Document;
//! use gullwings::host::Target;
//! use gullwings::renderer::{render, teardown};
//! use gullwings::settings::{Direction, Options};
//!
//! let mut doc = Document::new(640, 480).with_device_pixel_ratio(2.0);
//! let root = doc.root();
//! let total = doc.append_element(root, "div", 200, 100);
//! doc.add_class(total, "sum");
//!
//! let options = Options {
//!     direction: Some(Direction::Right),
//!     ..Options::default()
//! };
//! let surfaces = render(&mut doc, &Target::Selector(".sum"), &options).unwrap();
//! assert_eq!(surfaces.len(), 1);
//!
//! assert_eq!(teardown(&mut doc, None).unwrap(), 1);
//! ```

pub mod config;
pub mod document;
pub mod draw;
pub mod export;
pub mod geometry;
pub mod host;
pub mod renderer;
pub mod settings;
pub mod util;

pub use config::Config;
pub use renderer::{MARKER_CLASS, RenderError, render, render_settings, teardown};
pub use settings::{Options, Settings};

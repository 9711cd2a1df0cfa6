//! Lessons: one small program each, driven by the shared [`App`](crate::app::App)

pub mod clip;
pub mod geometry;
pub mod hello;
pub mod key_presses;
pub mod texture;

pub use clip::ClipLesson;
pub use geometry::GeometryLesson;
pub use hello::HelloLesson;
pub use key_presses::KeyPressesLesson;
pub use texture::TextureLesson;

use crate::config::SessionConfig;
use crate::core::{KeyPress, RenderContext};
use crate::error::Result;

/// Per-lesson behavior plugged into the event loop
pub trait Lesson {
    /// Load every image the lesson draws; called once after the session opens
    fn load_media(&mut self, ctx: &RenderContext, config: &SessionConfig) -> Result<()>;

    /// React to a key press
    fn handle_key(&mut self, _key: KeyPress) {}

    /// Draw one frame into the render context
    fn render(&self, ctx: &mut RenderContext);

    /// Free loaded media; called before the session closes
    fn release(&mut self);
}

/// Lesson selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LessonKind {
    /// Blit one bitmap at the origin
    Hello,
    /// Arrow keys swap the displayed bitmap
    KeyPresses,
    /// Render a PNG texture over the whole window
    Texture,
    /// Draw four sprite sheet clips in the window corners
    Clip,
    /// Draw rectangles, a line and dots
    #[default]
    Geometry,
}

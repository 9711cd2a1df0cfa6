pub mod canvas;
pub mod color;
pub mod gpu_context;
pub mod image_resource;
pub mod input;
pub mod rect;
pub mod render_context;
pub mod session;
pub mod surface_renderer;
pub mod texture;

pub use canvas::{Canvas, DrawOp};
pub use color::Color;
pub use image_resource::ImageResource;
pub use input::{KeyPress, KeySelector};
pub use rect::{ClipTable, Rect};
pub use render_context::{RenderContext, DEFAULT_MAX_TEXTURE_DIMENSION};
pub use session::DisplaySession;
pub use texture::{ContextId, Texture, TextureLedger};

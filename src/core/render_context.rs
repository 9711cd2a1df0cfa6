use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::canvas::{Canvas, DrawOp};
use super::color::Color;
use super::rect::Rect;
use super::texture::{ContextId, Texture, TextureLedger};
use crate::error::BindFailure;

/// wgpu's guaranteed minimum for `max_texture_dimension_2d`
pub const DEFAULT_MAX_TEXTURE_DIMENSION: u32 = 8192;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Headless half of a display session: the viewport frame buffer plus
/// renderer state that textures bind against
///
/// Drawing mirrors a classic immediate renderer: set a draw color, then
/// clear or draw primitives with it. Everything is a no-op once closed.
pub struct RenderContext {
    id: ContextId,
    canvas: Canvas,
    draw_color: Color,
    max_texture_dimension: u32,
    ledger: Rc<TextureLedger>,
    open: bool,
}

impl RenderContext {
    /// Create new render context for a `width` x `height` viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_max_texture_dimension(width, height, DEFAULT_MAX_TEXTURE_DIMENSION)
    }

    pub fn with_max_texture_dimension(width: u32, height: u32, max_texture_dimension: u32) -> Self {
        Self {
            id: ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed)),
            canvas: Canvas::new(width, height),
            draw_color: Color::BLACK,
            max_texture_dimension,
            ledger: Rc::new(TextureLedger::default()),
            open: true,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mark the context closed; textures bound to it stop drawing
    pub fn close(&mut self) {
        if self.open {
            log::debug!(
                "Closing render context {:?} with {} live textures",
                self.id,
                self.ledger.live()
            );
            self.open = false;
        }
    }

    /// Viewport dimensions in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn viewport_rect(&self) -> Rect {
        self.canvas.bounds()
    }

    pub fn max_texture_dimension(&self) -> u32 {
        self.max_texture_dimension
    }

    pub fn textures(&self) -> &TextureLedger {
        &self.ledger
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Bind decoded RGBA texels to this context
    pub fn create_texture(
        &self,
        texels: Vec<Color>,
        width: u32,
        height: u32,
    ) -> Result<Texture, BindFailure> {
        if !self.open {
            return Err(BindFailure::ContextClosed);
        }
        if width == 0 || height == 0 {
            return Err(BindFailure::Empty);
        }
        if width > self.max_texture_dimension || height > self.max_texture_dimension {
            return Err(BindFailure::TooLarge {
                width,
                height,
                max: self.max_texture_dimension,
            });
        }

        Ok(Texture::new(texels, width, height, self.id, self.ledger.clone()))
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    /// Fill the whole viewport with the draw color
    pub fn clear(&mut self) {
        self.apply(DrawOp::Clear(self.draw_color));
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        self.apply(DrawOp::FillRect {
            rect,
            color: self.draw_color,
        });
    }

    pub fn outline_rect(&mut self, rect: Rect) {
        self.apply(DrawOp::OutlineRect {
            rect,
            color: self.draw_color,
        });
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.apply(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: self.draw_color,
        });
    }

    pub fn point(&mut self, x: i32, y: i32) {
        self.apply(DrawOp::Point {
            x,
            y,
            color: self.draw_color,
        });
    }

    fn apply(&mut self, op: DrawOp) {
        if self.open {
            self.canvas.apply(&op);
        }
    }

    /// Copy `src` of `texture` into `dst`, scaling to fit.
    ///
    /// `src` is clipped to the texture bounds first. Returns false when
    /// nothing could be drawn because the context is closed or the texture
    /// belongs to another context.
    pub fn copy(&mut self, texture: &Texture, src: Option<Rect>, dst: Rect) -> bool {
        if !self.open {
            return false;
        }
        if texture.context() != self.id {
            log::warn!(
                "Texture bound to {:?} drawn on render context {:?}; skipping",
                texture.context(),
                self.id
            );
            return false;
        }

        let bounds = texture.bounds();
        let src = match src {
            Some(clip) => match clip.intersect(&bounds) {
                Some(clip) => clip,
                None => return true,
            },
            None => bounds,
        };

        self.canvas.blit(texture.texels(), texture.width(), src, dst);
        true
    }
}

use std::path::Path;

use super::color::Color;
use super::rect::Rect;
use super::render_context::RenderContext;
use super::texture::Texture;
use crate::error::{Error, Result};

/// One image file decoded and bound to a render context
///
/// Starts empty. `load` replaces the content, releasing the previous
/// texture before the new file is even opened, so a resource never holds
/// two textures at once. An empty resource has zero dimensions and every
/// draw on it is a no-op.
#[derive(Debug, Default)]
pub struct ImageResource {
    texture: Option<Texture>,
}

impl ImageResource {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Decode the image at `path` and bind it to `ctx`
    ///
    /// On failure the resource is left empty.
    pub fn load(&mut self, path: impl AsRef<Path>, ctx: &RenderContext) -> Result<()> {
        self.load_with_key(path.as_ref(), ctx, None)
    }

    /// Like [`load`](Self::load), but texels whose color matches `key` become
    /// fully transparent
    pub fn load_color_keyed(
        &mut self,
        path: impl AsRef<Path>,
        ctx: &RenderContext,
        key: Color,
    ) -> Result<()> {
        self.load_with_key(path.as_ref(), ctx, Some(key))
    }

    fn load_with_key(&mut self, path: &Path, ctx: &RenderContext, key: Option<Color>) -> Result<()> {
        self.release();

        let image = image::open(path)
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        let (width, height) = image.dimensions();

        let mut texels: Vec<Color> = bytemuck::cast_slice::<u8, Color>(image.as_raw()).to_vec();
        if let Some(key) = key {
            for texel in texels.iter_mut().filter(|t| t.same_rgb(key)) {
                *texel = Color::TRANSPARENT;
            }
        }

        let texture = ctx
            .create_texture(texels, width, height)
            .map_err(|source| Error::Bind {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Loaded {:?} ({}x{})", path, width, height);
        self.texture = Some(texture);
        Ok(())
    }

    /// Draw at (x, y), either the whole image or only `clip`
    ///
    /// A clip is drawn at its own size; parts of it outside the image are
    /// skipped.
    pub fn draw(&self, ctx: &mut RenderContext, x: i32, y: i32, clip: Option<Rect>) {
        let Some(texture) = &self.texture else {
            log::trace!("Draw on empty image resource ignored");
            return;
        };

        let bounds = texture.bounds();
        let (src, dst) = match clip {
            None => (bounds, Rect::new(x, y, bounds.width, bounds.height)),
            Some(clip) => {
                let Some(visible) = clip.intersect(&bounds) else {
                    return;
                };
                // Offsets are non-negative; a position past i32::MAX is off any canvas
                let shift = |at: i32, from: i32, to: i32| {
                    i32::try_from(at as i64 + to as i64 - from as i64).ok()
                };
                let (Some(dx), Some(dy)) =
                    (shift(x, clip.x, visible.x), shift(y, clip.y, visible.y))
                else {
                    return;
                };
                (visible, Rect::new(dx, dy, visible.width, visible.height))
            }
        };

        ctx.copy(texture, Some(src), dst);
    }

    /// Draw `clip` (or the whole image) scaled into `dest`, the full
    /// viewport when `dest` is `None`
    pub fn draw_stretched(&self, ctx: &mut RenderContext, clip: Option<Rect>, dest: Option<Rect>) {
        let Some(texture) = &self.texture else {
            log::trace!("Draw on empty image resource ignored");
            return;
        };

        let dest = dest.unwrap_or_else(|| ctx.viewport_rect());
        ctx.copy(texture, clip, dest);
    }

    /// Free the texture; idempotent
    pub fn release(&mut self) {
        if let Some(texture) = self.texture.take() {
            log::debug!("Released {}x{} texture", texture.width(), texture.height());
        }
    }

    /// True while a texture is held
    ///
    /// Being loaded does not make the resource drawable: once the context it
    /// was bound to closes, the texture is invalid and draws are no-ops,
    /// even though the resource still reports its dimensions until released.
    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    pub fn width(&self) -> u32 {
        self.texture.as_ref().map_or(0, Texture::width)
    }

    pub fn height(&self) -> u32 {
        self.texture.as_ref().map_or(0, Texture::height)
    }
}

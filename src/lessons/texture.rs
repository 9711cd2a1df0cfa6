use crate::config::SessionConfig;
use crate::core::{Color, ImageResource, RenderContext};
use crate::error::Result;

use super::Lesson;

/// Renders `texture.png` stretched over the whole viewport
#[derive(Debug, Default)]
pub struct TextureLesson {
    texture: ImageResource,
}

impl TextureLesson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texture(&self) -> &ImageResource {
        &self.texture
    }
}

impl Lesson for TextureLesson {
    fn load_media(&mut self, ctx: &RenderContext, config: &SessionConfig) -> Result<()> {
        self.texture.load(config.image_path("texture", "png"), ctx)
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.set_draw_color(Color::WHITE);
        ctx.clear();
        self.texture.draw_stretched(ctx, None, None);
    }

    fn release(&mut self) {
        self.texture.release();
    }
}

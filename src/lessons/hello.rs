use crate::config::SessionConfig;
use crate::core::{Color, ImageResource, RenderContext};
use crate::error::Result;

use super::Lesson;

/// Blits `hello_world.bmp` at the top-left corner
#[derive(Debug, Default)]
pub struct HelloLesson {
    image: ImageResource,
}

impl HelloLesson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> &ImageResource {
        &self.image
    }
}

impl Lesson for HelloLesson {
    fn load_media(&mut self, ctx: &RenderContext, config: &SessionConfig) -> Result<()> {
        self.image.load(config.image_path("hello_world", "bmp"), ctx)
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.set_draw_color(Color::WHITE);
        ctx.clear();
        self.image.draw(ctx, 0, 0, None);
    }

    fn release(&mut self) {
        self.image.release();
    }
}

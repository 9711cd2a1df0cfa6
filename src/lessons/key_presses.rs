use crate::config::SessionConfig;
use crate::core::{Color, ImageResource, KeyPress, KeySelector, RenderContext};
use crate::error::Result;

use super::Lesson;

/// Image file stem for each key press, in [`KeyPress::index`] order
const IMAGE_NAMES: [&str; KeyPress::TOTAL] = ["press", "up", "down", "left", "right"];

/// Shows `press.bmp` until an arrow key selects one of the directional
/// bitmaps; any other key goes back to `press.bmp`
#[derive(Debug, Default)]
pub struct KeyPressesLesson {
    images: [ImageResource; KeyPress::TOTAL],
    selector: KeySelector,
}

impl KeyPressesLesson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> KeyPress {
        self.selector.current()
    }

    pub fn image(&self, key: KeyPress) -> &ImageResource {
        &self.images[key.index()]
    }
}

impl Lesson for KeyPressesLesson {
    fn load_media(&mut self, ctx: &RenderContext, config: &SessionConfig) -> Result<()> {
        for key in KeyPress::ALL {
            let path = config.image_path(IMAGE_NAMES[key.index()], "bmp");
            self.images[key.index()].load(path, ctx)?;
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyPress) {
        self.selector.press(key);
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.set_draw_color(Color::WHITE);
        ctx.clear();
        self.selector.select(&self.images).draw(ctx, 0, 0, None);
    }

    fn release(&mut self) {
        for image in &mut self.images {
            image.release();
        }
    }
}

use crate::config::SessionConfig;
use crate::core::{ClipTable, Color, ImageResource, Rect, RenderContext};
use crate::error::Result;

use super::Lesson;

/// Side of one cell on the dots sprite sheet
pub const DOT_SIZE: u32 = 100;

/// Cuts `dots.png` into four cells and draws one in each window corner
///
/// Cyan is the sheet's background and is keyed out on load.
#[derive(Debug)]
pub struct ClipLesson {
    sheet: ImageResource,
    clips: ClipTable<4>,
}

impl ClipLesson {
    pub fn new() -> Self {
        Self {
            sheet: ImageResource::new(),
            clips: ClipTable::quadrants(DOT_SIZE),
        }
    }

    pub fn clips(&self) -> &ClipTable<4> {
        &self.clips
    }

    pub fn sheet(&self) -> &ImageResource {
        &self.sheet
    }

    /// Where each clip lands: top-left, top-right, bottom-left, bottom-right
    fn placements(&self, viewport: Rect) -> [(i32, i32); 4] {
        let right = |clip: &Rect| viewport.width as i32 - clip.width as i32;
        let bottom = |clip: &Rect| viewport.height as i32 - clip.height as i32;
        let [_, top_right, bottom_left, bottom_right] = self.clips.clips();

        [
            (0, 0),
            (right(top_right), 0),
            (0, bottom(bottom_left)),
            (right(bottom_right), bottom(bottom_right)),
        ]
    }
}

impl Default for ClipLesson {
    fn default() -> Self {
        Self::new()
    }
}

impl Lesson for ClipLesson {
    fn load_media(&mut self, ctx: &RenderContext, config: &SessionConfig) -> Result<()> {
        self.sheet
            .load_color_keyed(config.image_path("dots", "png"), ctx, Color::CYAN)
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.set_draw_color(Color::WHITE);
        ctx.clear();

        let placements = self.placements(ctx.viewport_rect());
        for (clip, (x, y)) in self.clips.iter().zip(placements) {
            self.sheet.draw(ctx, x, y, Some(*clip));
        }
    }

    fn release(&mut self) {
        self.sheet.release();
    }
}

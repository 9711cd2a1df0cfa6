use crate::config::SessionConfig;
use crate::core::{Color, Rect, RenderContext};
use crate::error::Result;

use super::Lesson;

const BACKGROUND: Color = Color::rgb(0, 0, 30);

/// Spacing of the dotted vertical line
const DOT_SPACING: usize = 4;

/// Primitive drawing: filled red quad, green outline, blue horizontal line
/// and a vertical line of yellow dots, all laid out relative to the viewport
#[derive(Debug, Default)]
pub struct GeometryLesson;

impl GeometryLesson {
    pub fn new() -> Self {
        Self
    }

    /// Filled quad covering the middle half of the viewport
    pub fn fill_rect(width: u32, height: u32) -> Rect {
        Rect::new((width / 4) as i32, (height / 4) as i32, width / 2, height / 2)
    }

    /// Outline covering the middle two thirds of the viewport
    pub fn outline_rect(width: u32, height: u32) -> Rect {
        Rect::new(
            (width / 6) as i32,
            (height / 6) as i32,
            width * 2 / 3,
            height * 2 / 3,
        )
    }
}

impl Lesson for GeometryLesson {
    fn load_media(&mut self, _ctx: &RenderContext, _config: &SessionConfig) -> Result<()> {
        Ok(())
    }

    fn render(&self, ctx: &mut RenderContext) {
        let (width, height) = ctx.viewport();
        let (w, h) = (width as i32, height as i32);

        ctx.set_draw_color(BACKGROUND);
        ctx.clear();

        ctx.set_draw_color(Color::RED);
        ctx.fill_rect(Self::fill_rect(width, height));

        ctx.set_draw_color(Color::GREEN);
        ctx.outline_rect(Self::outline_rect(width, height));

        ctx.set_draw_color(Color::BLUE);
        ctx.line(0, h / 2, w, h / 2);

        ctx.set_draw_color(Color::YELLOW);
        for y in (0..h).step_by(DOT_SPACING) {
            ctx.point(w / 2, y);
        }
    }

    fn release(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(width: u32, height: u32) -> RenderContext {
        let mut ctx = RenderContext::new(width, height);
        GeometryLesson::new().render(&mut ctx);
        ctx
    }

    #[test]
    fn layout_for_default_viewport() {
        assert_eq!(GeometryLesson::fill_rect(640, 480), Rect::new(160, 120, 320, 240));
        assert_eq!(GeometryLesson::outline_rect(640, 480), Rect::new(106, 80, 426, 320));
    }

    #[test]
    fn background_in_corner() {
        let ctx = rendered(640, 480);
        assert_eq!(ctx.canvas().pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn filled_quad_is_red() {
        let ctx = rendered(640, 480);
        assert_eq!(ctx.canvas().pixel(200, 150), Some(Color::RED));
    }

    #[test]
    fn outline_is_green_with_untouched_interior() {
        let ctx = rendered(640, 480);
        assert_eq!(ctx.canvas().pixel(106, 100), Some(Color::GREEN));
        assert_eq!(ctx.canvas().pixel(107, 100), Some(BACKGROUND));
    }

    #[test]
    fn horizontal_line_is_blue() {
        let ctx = rendered(640, 480);
        assert_eq!(ctx.canvas().pixel(0, 240), Some(Color::BLUE));
        assert_eq!(ctx.canvas().pixel(639, 240), Some(Color::BLUE));
    }

    #[test]
    fn dots_every_fourth_row() {
        let ctx = rendered(640, 480);
        assert_eq!(ctx.canvas().pixel(320, 0), Some(Color::YELLOW));
        assert_eq!(ctx.canvas().pixel(320, 4), Some(Color::YELLOW));
        assert_eq!(ctx.canvas().pixel(320, 2), Some(BACKGROUND));
        // dots are drawn last, over the red quad
        assert_eq!(ctx.canvas().pixel(320, 200), Some(Color::YELLOW));
        assert_eq!(ctx.canvas().pixel(320, 201), Some(Color::RED));
    }
}

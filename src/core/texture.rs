use std::cell::Cell;
use std::rc::Rc;

use super::color::Color;
use super::rect::Rect;

/// Identity of the render context a texture was created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub(crate) u64);

/// Live texture accounting for one render context
#[derive(Debug, Default)]
pub struct TextureLedger {
    live: Cell<usize>,
    peak: Cell<usize>,
}

impl TextureLedger {
    fn acquire(&self) {
        let live = self.live.get() + 1;
        self.live.set(live);
        self.peak.set(self.peak.get().max(live));
    }

    fn release(&self) {
        self.live.set(self.live.get().saturating_sub(1));
    }

    /// Textures currently alive
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Highest number of textures ever alive at the same time
    pub fn peak(&self) -> usize {
        self.peak.get()
    }
}

/// Decoded RGBA8 texels bound to a render context
///
/// Created only through [`RenderContext::create_texture`](super::RenderContext::create_texture);
/// dropping it returns its slot to the context's ledger.
pub struct Texture {
    texels: Vec<Color>,
    width: u32,
    height: u32,
    context: ContextId,
    ledger: Rc<TextureLedger>,
}

impl Texture {
    pub(crate) fn new(
        texels: Vec<Color>,
        width: u32,
        height: u32,
        context: ContextId,
        ledger: Rc<TextureLedger>,
    ) -> Self {
        debug_assert_eq!(texels.len(), width as usize * height as usize);
        ledger.acquire();
        Self {
            texels,
            width,
            height,
            context,
            ledger,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn texels(&self) -> &[Color] {
        &self.texels
    }

    pub fn context(&self) -> ContextId {
        self.context
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.ledger.release();
    }
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("context", &self.context)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(ledger: &Rc<TextureLedger>) -> Texture {
        Texture::new(vec![Color::RED; 6], 3, 2, ContextId(7), ledger.clone())
    }

    #[test]
    fn ledger_tracks_live_and_peak() {
        let ledger = Rc::new(TextureLedger::default());

        let a = texture(&ledger);
        let b = texture(&ledger);
        assert_eq!(ledger.live(), 2);
        assert_eq!(ledger.peak(), 2);

        drop(a);
        assert_eq!(ledger.live(), 1);
        drop(b);
        assert_eq!(ledger.live(), 0);
        assert_eq!(ledger.peak(), 2);
    }

    #[test]
    fn texture_reports_dimensions() {
        let ledger = Rc::new(TextureLedger::default());
        let tex = texture(&ledger);

        assert_eq!(tex.width(), 3);
        assert_eq!(tex.height(), 2);
        assert_eq!(tex.bounds(), Rect::new(0, 0, 3, 2));
        assert_eq!(tex.context(), ContextId(7));
    }
}

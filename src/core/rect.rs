/// Axis-aligned rectangle in pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.x as i64 && x < self.right() && y >= self.y as i64 && y < self.bottom()
    }

    /// Overlapping area of two rectangles, `None` when they do not overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = (self.x as i64).max(other.x as i64);
        let top = (self.y as i64).max(other.y as i64);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }

        Some(Rect::new(
            left as i32,
            top as i32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}

/// Fixed table of clip rectangles cutting one sprite sheet into cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipTable<const N: usize> {
    clips: [Rect; N],
}

impl<const N: usize> ClipTable<N> {
    pub const fn new(clips: [Rect; N]) -> Self {
        Self { clips }
    }

    pub fn get(&self, index: usize) -> Option<Rect> {
        self.clips.get(index).copied()
    }

    pub fn clips(&self) -> &[Rect; N] {
        &self.clips
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        self.clips.iter()
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }
}

impl ClipTable<4> {
    /// Split a `2 * cell` square sheet into top-left, top-right,
    /// bottom-left and bottom-right cells
    pub const fn quadrants(cell: u32) -> Self {
        let c = cell as i32;
        Self::new([
            Rect::new(0, 0, cell, cell),
            Rect::new(c, 0, cell, cell),
            Rect::new(0, c, cell, cell),
            Rect::new(c, c, cell, cell),
        ])
    }
}

/// RGBA8 color, laid out exactly as one texel of the frame buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Compare color channels only, ignoring alpha
    pub fn same_rgb(&self, other: Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Source-over composite of `self` onto `dst`
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => dst,
            255 => self,
            a => {
                let a = a as u32;
                let inv = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
                let out_a = a + (dst.a as u32 * inv + 127) / 255;

                Color {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: out_a.min(255) as u8,
                }
            }
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn over_opaque_replaces() {
        assert_eq!(Color::RED.over(Color::BLUE), Color::RED);
    }

    #[test]
    fn over_transparent_keeps_destination() {
        assert_eq!(Color::TRANSPARENT.over(Color::BLUE), Color::BLUE);
    }

    #[test]
    fn over_half_alpha_mixes() {
        let out = Color::rgba(255, 0, 0, 128).over(Color::rgb(0, 0, 255));
        assert!((out.r as i32 - 128).abs() <= 1);
        assert!((out.b as i32 - 127).abs() <= 1);
        assert_eq!(out.a, 255);
    }

    #[test]
    fn texel_layout_matches_bytes() {
        let texels = [Color::rgba(1, 2, 3, 4), Color::rgba(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&texels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn same_rgb_ignores_alpha() {
        assert!(Color::rgba(0, 255, 255, 0).same_rgb(Color::CYAN));
        assert!(!Color::WHITE.same_rgb(Color::CYAN));
    }
}

//! Packed 32-bit colors and the seed palette.
//!
//! Colors are stored as `0xAABBGGRR`: red lives in the lowest byte, so the
//! in-memory byte order of a little-endian `u32` is R, G, B, A.

use crate::error::ColorError;

/// A packed `0xAABBGGRR` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color32(pub u32);

impl Color32 {
    pub const WHITE: Color32 = Color32(0xFFFFFFFF);
    pub const BLACK: Color32 = Color32(0xFF000000);
    pub const RED: Color32 = Color32(0xFF0000FF);
    pub const GREEN: Color32 = Color32(0xFF00FF00);
    pub const BLUE: Color32 = Color32(0xFFFF0000);

    /// Dark grey used to clear the canvas before rendering.
    pub const BACKGROUND: Color32 = Color32(0xFF181818);

    /// Pack four channels into a color.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color32((a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | r as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The R, G, B bytes as written to a pixmap. Alpha is dropped.
    #[inline]
    pub const fn to_rgb_bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Normalized `[r, g, b, a]` for vertex attributes. No gamma conversion:
    /// the window renders to a non-sRGB surface, so the bytes come back as-is.
    pub fn to_linear(self) -> [f32; 4] {
        [
            self.r() as f32 / 255.0,
            self.g() as f32 / 255.0,
            self.b() as f32 / 255.0,
            self.a() as f32 / 255.0,
        ]
    }
}

/// Gruvbox bright colors, cycled over seed indices.
pub const PALETTE: [Color32; 7] = [
    Color32(0xFF3449FB), // red
    Color32(0xFF26BBB8), // green
    Color32(0xFF2FBDFA), // yellow
    Color32(0xFF98A583), // blue
    Color32(0xFF9B86D3), // purple
    Color32(0xFF7CC08E), // aqua
    Color32(0xFF1980FE), // orange
];

/// Palette entry for the seed at `index`, wrapping around.
#[inline]
pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Encode a pixel coordinate as a color: `x` in the low 16 bits, `y` in the
/// high 16 bits.
///
/// Both coordinates must be strictly below `u16::MAX`.
pub fn point_to_color(x: u32, y: u32) -> Result<Color32, ColorError> {
    if x >= u16::MAX as u32 || y >= u16::MAX as u32 {
        return Err(ColorError { x, y });
    }
    Ok(Color32(y << 16 | x))
}

/// Inverse of [`point_to_color`].
#[inline]
pub fn color_to_point(color: Color32) -> (u32, u32) {
    (color.0 & 0x0000FFFF, (color.0 & 0xFFFF0000) >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_layout() {
        assert_eq!(Color32::RED.to_rgb_bytes(), [255, 0, 0]);
        assert_eq!(Color32::GREEN.to_rgb_bytes(), [0, 255, 0]);
        assert_eq!(Color32::BLUE.to_rgb_bytes(), [0, 0, 255]);
        assert_eq!(Color32::BACKGROUND.to_rgb_bytes(), [0x18, 0x18, 0x18]);
        assert_eq!(Color32::BLACK.a(), 255);
    }

    #[test]
    fn test_from_rgba_matches_constants() {
        assert_eq!(Color32::from_rgba(255, 255, 255, 255), Color32::WHITE);
        assert_eq!(Color32::from_rgba(0xFB, 0x49, 0x34, 0xFF), PALETTE[0]);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), palette_color(7));
        assert_eq!(palette_color(3), palette_color(17));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_to_linear() {
        let c = Color32::from_rgba(255, 0, 51, 255).to_linear();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 0.2).abs() < 1e-6);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn test_point_color_roundtrip() {
        for &(x, y) in &[(0, 0), (799, 599), (1, 65534), (65534, 3)] {
            let c = point_to_color(x, y).unwrap();
            assert_eq!(color_to_point(c), (x, y));
        }
    }

    #[test]
    fn test_point_out_of_range() {
        assert_eq!(
            point_to_color(65535, 0),
            Err(ColorError { x: 65535, y: 0 })
        );
        assert!(point_to_color(0, 70_000).is_err());
    }
}

use serde::{Deserialize, Serialize};

/// Color with float channels in `[0, 1]`
///
/// Serialized as a `[r, g, b, a]` array in config and scene files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const MAGENTA: Rgba = Rgba::new(1.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Build from 8-bit channels, e.g. `Rgba::from_bytes(0x18, 0x18, 0x18, 0xff)`
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Scale the color channels by `factor`, alpha unchanged
    ///
    /// The result may leave `[0, 1]`; `to_bytes` clamps.
    pub fn brightness(self, factor: f32) -> Self {
        Rgba::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    pub fn to_bytes(self) -> [u8; 4] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).floor() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(color: Rgba) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

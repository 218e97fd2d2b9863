use anyhow::anyhow;
use anyhow::Result;
use colors_transform::Color;
use colors_transform::Rgb;
use glam::Vec4;

pub trait Vec4Color {
    fn new_rgb(r: u8, g: u8, b: u8, a: u8) -> Vec4;
    fn from_rgba8(rgba: [u8; 4]) -> Vec4;
    fn to_rgba8(self) -> [u8; 4];
}

pub trait RgbToVec4 {
    fn to_vec4(self) -> Vec4;
}

impl Vec4Color for Vec4 {
    fn new_rgb(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
        Vec4::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    fn from_rgba8(rgba: [u8; 4]) -> Vec4 {
        Vec4::new_rgb(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    fn to_rgba8(self) -> [u8; 4] {
        let clamped = self.clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
        [clamped.x.round() as u8, clamped.y.round() as u8, clamped.z.round() as u8, clamped.w.round() as u8]
    }
}

impl RgbToVec4 for Rgb {
    fn to_vec4(self) -> Vec4 {
        let (r, g, b) = self.as_tuple();
        Vec4::new(r / 255.0, g / 255.0, b / 255.0, 1.0)
    }
}

pub fn parse_color(hex: &str) -> Result<Vec4> {
    Ok(Rgb::from_hex_str(hex.trim()).map_err(|_| anyhow!("Failed to parse {} into RGB", hex))?.to_vec4())
}

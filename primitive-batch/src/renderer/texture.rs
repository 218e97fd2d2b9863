use super::sprite::TextureId;
use super::GraphicsDevice;
use crate::assets::RawTexture;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;
use log::info;

pub struct Texture {
    pub name: String,
    pub size: Vec2,
    data: Vec<u8>,
}

#[derive(Default)]
pub struct RectangleTexture {
    pub size: Vec2,
    pub texture_id: Option<TextureId>,
}

impl Texture {
    pub fn new(raw: &RawTexture) -> Result<Self> {
        let expected = raw.width() as usize * raw.height() as usize * 4;
        if raw.data.len() != expected {
            bail!("Texture {} has {} bytes, expected {}", raw.name, raw.data.len(), expected);
        }

        info!("Creating texture {} ({}x{}, {} bytes)", raw.name, raw.size.x, raw.size.y, raw.data.len());
        Ok(Self { name: raw.name.to_string(), size: Vec2::new(raw.width() as f32, raw.height() as f32), data: raw.data.clone() })
    }

    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let width = self.size.x as usize;
        let height = self.size.y as usize;
        if width == 0 || height == 0 {
            return Vec4::ZERO;
        }

        let x = ((uv.x * self.size.x) as usize).min(width - 1);
        let y = ((uv.y * self.size.y) as usize).min(height - 1);
        let index = (y * width + x) * 4;

        Vec4::new(
            self.data[index + 0] as f32 / 255.0,
            self.data[index + 1] as f32 / 255.0,
            self.data[index + 2] as f32 / 255.0,
            self.data[index + 3] as f32 / 255.0,
        )
    }
}

impl RectangleTexture {
    pub fn create_texture(&mut self, size: Vec2, device: &mut dyn GraphicsDevice) -> Result<TextureId> {
        self.size = size;

        let raw = RawTexture::new_filled("rectangle", size.x.max(0.0) as u32, size.y.max(0.0) as u32, [255, 255, 255, 255]);
        let texture_id = device.create_texture(&raw)?;
        self.texture_id = Some(texture_id);

        Ok(texture_id)
    }
}

use super::sprite::TextureId;
use super::GraphicsDevice;
use super::SpriteBatch;
use crate::assets::RawTexture;
use crate::shapes::Shape;
use anyhow::Result;
use log::info;

pub const WHITE_PIXEL_NAME: &str = "white_pixel";

pub struct PrimitiveBatch {
    white_pixel: TextureId,
}

impl PrimitiveBatch {
    pub fn new(device: &mut dyn GraphicsDevice) -> Result<Self> {
        let mut batch = Self { white_pixel: TextureId::default() };
        batch.create_textures(device)?;

        Ok(batch)
    }

    pub fn create_textures(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.white_pixel = device.create_texture(&RawTexture::new_filled(WHITE_PIXEL_NAME, 1, 1, [255, 255, 255, 255]))?;
        info!("Primitive batch uses white pixel texture {}", self.white_pixel.0);

        Ok(())
    }

    pub fn white_pixel(&self) -> TextureId {
        self.white_pixel
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch, shape: &dyn Shape) {
        shape.draw(batch, self);
    }

    pub fn draw_all(&self, batch: &mut dyn SpriteBatch, shapes: &[Box<dyn Shape>]) {
        for shape in shapes {
            shape.draw(batch, self);
        }
    }
}

use super::sprite::Sprite;
use super::sprite::TextureId;
use super::texture::Texture;
use super::GraphicsDevice;
use super::SpriteBatch;
use crate::assets::RawTexture;
use crate::error_return;
use crate::utils::color::Vec4Color;
use crate::utils::storage::Storage;
use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use glam::Vec4;
use log::info;
use png::BitDepth;
use png::ColorType;
use png::Encoder;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    textures: Storage<Texture>,
    draw_calls: usize,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("Invalid canvas size {}x{}", width, height);
        }

        info!("Creating canvas ({}x{})", width, height);
        Ok(Self { width, height, pixels: vec![0; width as usize * height as usize * 4], textures: Default::default(), draw_calls: 0 })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Vec4) {
        let rgba = color.to_rgba8();
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&rgba);
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let index = self.index(x, y)?;
        Some([self.pixels[index + 0], self.pixels[index + 1], self.pixels[index + 2], self.pixels[index + 3]])
    }

    pub fn count(&self, rgba: [u8; 4]) -> usize {
        self.pixels.chunks_exact(4).filter(|p| *p == rgba).count()
    }

    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    pub fn reset_stats(&mut self) {
        self.draw_calls = 0;
    }

    pub fn texture(&self, id: TextureId) -> Result<&Texture> {
        self.textures.get(id.0)
    }

    pub fn load_png(&mut self, name: &str, data: &[u8]) -> Result<TextureId> {
        let raw = RawTexture::from_png(name, data)?;
        self.create_texture(&raw)
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_png(&mut buffer)?;

        Ok(buffer)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Saving canvas ({}x{}) to {}", self.width, self.height, path.display());

        let file = File::create(path)?;
        self.write_png(BufWriter::new(file))
    }

    fn write_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut encoder = Encoder::new(writer, self.width, self.height);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;

        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    fn blend(&mut self, x: i32, y: i32, color: Vec4) {
        let Some(index) = self.index(x, y) else {
            return;
        };

        let destination = Vec4::from_rgba8([self.pixels[index + 0], self.pixels[index + 1], self.pixels[index + 2], self.pixels[index + 3]]);
        let alpha = color.w;
        let rgb = color.truncate() * alpha + destination.truncate() * (1.0 - alpha);
        let output = rgb.extend(alpha + destination.w * (1.0 - alpha));

        self.pixels[index..index + 4].copy_from_slice(&output.to_rgba8());
    }
}

impl GraphicsDevice for Canvas {
    fn create_texture(&mut self, raw: &RawTexture) -> Result<TextureId> {
        let texture = Texture::new(raw)?;
        Ok(TextureId(self.textures.store(texture)))
    }
}

impl SpriteBatch for Canvas {
    fn draw(&mut self, sprite: &Sprite) {
        self.draw_calls += 1;

        let texture = match self.textures.get(sprite.texture_id.0) {
            Ok(texture) => texture,
            Err(err) => error_return!("Skipping sprite draw ({})", err),
        };

        let texture_size = texture.size;
        let size = sprite.get_size(texture_size);
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }

        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for edge in sprite.get_edges(texture_size) {
            min = min.min(edge.a).min(edge.b);
            max = max.max(edge.a).max(edge.b);
        }

        let from_x = (min.x.floor() as i32).max(0);
        let from_y = (min.y.floor() as i32).max(0);
        let to_x = (max.x.ceil() as i32).min(self.width as i32 - 1);
        let to_y = (max.y.ceil() as i32).min(self.height as i32 - 1);

        let mut covered = Vec::new();
        for y in from_y..=to_y {
            for x in from_x..=to_x {
                let local = sprite.to_local(Vec2::new(x as f32 + 0.5, y as f32 + 0.5), texture_size);
                if local.x < 0.0 || local.y < 0.0 || local.x >= size.x || local.y >= size.y {
                    continue;
                }

                covered.push((x, y, texture.sample(local / size) * sprite.color));
            }
        }

        for (x, y, color) in covered {
            self.blend(x, y, color);
        }
    }
}

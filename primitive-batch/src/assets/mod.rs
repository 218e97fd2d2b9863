use anyhow::bail;
use anyhow::Result;
use glam::Vec2;
use png::ColorType;
use png::Decoder;
use png::Transformations;
use std::io::Cursor;

pub struct RawTexture {
    pub name: String,
    pub size: Vec2,
    pub data: Vec<u8>,
}

impl RawTexture {
    pub fn new(name: &str, size: Vec2, data: &[u8]) -> Self {
        Self { name: name.to_string(), size, data: data.to_vec() }
    }

    pub fn new_filled(name: &str, width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let data = rgba.repeat(width as usize * height as usize);
        Self { name: name.to_string(), size: Vec2::new(width as f32, height as f32), data }
    }

    pub fn from_png(name: &str, data: &[u8]) -> Result<Self> {
        let cursor = Cursor::new(data);
        let mut decoder = Decoder::new(cursor);
        decoder.set_transformations(Transformations::normalize_to_color8() | Transformations::ALPHA);

        let mut reader = decoder.read_info()?;
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;
        buffer.truncate(info.buffer_size());

        let data = match info.color_type {
            ColorType::Rgba => buffer,
            ColorType::GrayscaleAlpha => buffer.chunks_exact(2).flat_map(|p| [p[0], p[0], p[0], p[1]]).collect(),
            ColorType::Rgb => buffer.chunks_exact(3).flat_map(|p| [p[0], p[1], p[2], 255]).collect(),
            ColorType::Grayscale => buffer.iter().flat_map(|p| [*p, *p, *p, 255]).collect(),
            ColorType::Indexed => bail!("Indexed texture {} was not expanded", name),
        };

        Ok(Self { name: name.to_string(), size: Vec2::new(info.width as f32, info.height as f32), data })
    }

    pub fn width(&self) -> u32 {
        self.size.x as u32
    }

    pub fn height(&self) -> u32 {
        self.size.y as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_texture_repeats_color() {
        let texture = RawTexture::new_filled("white", 3, 2, [255, 255, 255, 255]);

        assert_eq!(texture.size, Vec2::new(3.0, 2.0));
        assert_eq!(texture.data.len(), 3 * 2 * 4);
        assert!(texture.data.iter().all(|p| *p == 255));
    }

    #[test]
    fn invalid_png_is_rejected() {
        assert!(RawTexture::from_png("broken", &[1, 2, 3, 4]).is_err());
    }
}

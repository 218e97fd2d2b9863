use self::sprite::Sprite;
use self::sprite::TextureId;
use crate::assets::RawTexture;
use anyhow::Result;
use glam::Vec2;

pub mod batch;
pub mod canvas;
pub mod sprite;
pub mod texture;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub a: Vec2,
    pub b: Vec2,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

pub trait GraphicsDevice {
    fn create_texture(&mut self, raw: &RawTexture) -> Result<TextureId>;
}

pub trait SpriteBatch {
    fn draw(&mut self, sprite: &Sprite);
}

impl Edge {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_vec2(position: Vec2, size: Vec2) -> Self {
        Self { x: position.x as i32, y: position.y as i32, width: size.x as i32, height: size.y as i32 }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl SpriteBatch for Vec<Sprite> {
    fn draw(&mut self, sprite: &Sprite) {
        self.push(sprite.clone());
    }
}

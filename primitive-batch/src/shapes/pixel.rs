use super::Shape;
use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::sprite::Sprite;
use crate::renderer::SpriteBatch;
use glam::Vec2;
use glam::Vec4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel {
    pub position: Vec2,
    pub color: Vec4,
}

impl Pixel {
    pub fn new(position: Vec2, color: Vec4) -> Self {
        Self { position, color }
    }
}

impl Shape for Pixel {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        batch.draw(&Sprite::new_at(primitives.white_pixel(), self.position, self.color));
    }
}

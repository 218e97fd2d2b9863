use super::*;
use arrayvec::ArrayVec;
use glam::Vec2;
use glam::Vec4;

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub position: Vec2,
    pub rotation: f32,
    pub size: Option<Vec2>,
    pub anchor: Vec2,
    pub color: Vec4,
    pub texture_id: TextureId,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

impl Sprite {
    pub fn new(texture_id: TextureId) -> Self {
        Self { position: Default::default(), rotation: 0.0, size: None, anchor: Vec2::ZERO, color: Vec4::ONE, texture_id }
    }

    pub fn new_stretched(texture_id: TextureId, destination: Rect, rotation: f32, color: Vec4) -> Self {
        Self { position: destination.position(), rotation, size: Some(destination.size()), anchor: Vec2::ZERO, color, texture_id }
    }

    pub fn new_at(texture_id: TextureId, position: Vec2, color: Vec4) -> Self {
        Self { position, rotation: 0.0, size: None, anchor: Vec2::ZERO, color, texture_id }
    }

    pub fn get_size(&self, texture_size: Vec2) -> Vec2 {
        self.size.unwrap_or(texture_size)
    }

    /// Maps a point from screen space into the quad's unrotated local space, where the quad covers `[0, size)`.
    pub fn to_local(&self, point: Vec2, texture_size: Vec2) -> Vec2 {
        let size = self.get_size(texture_size);
        let sin = self.rotation.sin();
        let cos = self.rotation.cos();
        let p = point - self.position;

        Vec2::new(p.x * cos + p.y * sin, p.y * cos - p.x * sin) + size * self.anchor
    }

    pub fn get_edges(&self, texture_size: Vec2) -> ArrayVec<Edge, 4> {
        let size = self.get_size(texture_size);
        let a = Vec2::new(0.0, 0.0) - size * self.anchor;
        let b = Vec2::new(size.x, 0.0) - size * self.anchor;
        let c = Vec2::new(size.x, size.y) - size * self.anchor;
        let d = Vec2::new(0.0, size.y) - size * self.anchor;

        let sin = self.rotation.sin();
        let cos = self.rotation.cos();

        let a = Vec2::new(a.x * cos - a.y * sin, a.y * cos + a.x * sin) + self.position;
        let b = Vec2::new(b.x * cos - b.y * sin, b.y * cos + b.x * sin) + self.position;
        let c = Vec2::new(c.x * cos - c.y * sin, c.y * cos + c.x * sin) + self.position;
        let d = Vec2::new(d.x * cos - d.y * sin, d.y * cos + d.x * sin) + self.position;

        ArrayVec::from([Edge::new(a, b), Edge::new(d, c), Edge::new(a, d), Edge::new(b, c)])
    }
}

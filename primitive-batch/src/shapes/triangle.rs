use super::Line;
use super::Shape;
use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::sprite::Sprite;
use crate::renderer::SpriteBatch;
use glam::IVec2;
use glam::Vec2;
use glam::Vec4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub position: Vec2,
    pub point2: Vec2,
    pub point3: Vec2,
    pub color: Vec4,
    pub filled: bool,
}

impl Triangle {
    pub fn new(point1: Vec2, point2: Vec2, point3: Vec2, color: Vec4) -> Self {
        Self { position: point1, point2, point3, color, filled: true }
    }

    pub fn new_outline(point1: Vec2, point2: Vec2, point3: Vec2, color: Vec4) -> Self {
        Self { position: point1, point2, point3, color, filled: false }
    }

    pub fn point1(&self) -> Vec2 {
        self.position
    }

    pub fn barycentric(&self, p: Vec2) -> Option<(f32, f32)> {
        let v0 = self.point2 - self.position;
        let v1 = self.point3 - self.position;
        let v2 = p - self.position;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        if denom == 0.0 {
            return None;
        }

        Some(((d11 * d20 - d01 * d21) / denom, (d00 * d21 - d01 * d20) / denom))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        match self.barycentric(p) {
            Some((a, b)) => a >= 0.0 && b >= 0.0 && a + b <= 1.0,
            None => false,
        }
    }

    pub fn fill_points(&self) -> Vec<IVec2> {
        let min = self.position.min(self.point2).min(self.point3);
        let max = self.position.max(self.point2).max(self.point3);
        let mut points = Vec::new();

        for y in (min.y as i32)..=(max.y as i32) {
            for x in (min.x as i32)..=(max.x as i32) {
                let p = IVec2::new(x, y);
                if self.contains(p.as_vec2()) {
                    points.push(p);
                }
            }
        }

        points
    }
}

impl Shape for Triangle {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        if self.filled {
            for point in self.fill_points() {
                batch.draw(&Sprite::new_at(primitives.white_pixel(), point.as_vec2(), self.color));
            }
        } else {
            Line::draw_segment(batch, primitives, self.position, self.point2, self.color, 1.0);
            Line::draw_segment(batch, primitives, self.point2, self.point3, self.color, 1.0);
            Line::draw_segment(batch, primitives, self.point3, self.position, self.color, 1.0);
        }
    }
}

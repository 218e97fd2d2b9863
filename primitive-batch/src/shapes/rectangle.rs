use super::Circle;
use super::Line;
use super::Quadrant;
use super::Shape;
use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::sprite::Sprite;
use crate::renderer::Rect;
use crate::renderer::SpriteBatch;
use glam::Vec2;
use glam::Vec4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub position: Vec2,
    pub size: Vec2,
    pub color: Vec4,
    pub filled: bool,
    pub edge_width: f32,
    pub edge_color: Vec4,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundedRectangle {
    pub position: Vec2,
    pub size: Vec2,
    pub corner_radius: f32,
    pub color: Vec4,
}

impl Rectangle {
    pub fn new(position: Vec2, size: Vec2, color: Vec4) -> Self {
        Self { position, size, color, filled: true, edge_width: 0.0, edge_color: color }
    }

    pub fn from_rect(rect: Rect, color: Vec4, filled: bool, edge_width: f32, edge_color: Option<Vec4>) -> Self {
        Self { position: rect.position(), size: rect.size(), color, filled, edge_width, edge_color: edge_color.unwrap_or(color) }
    }

    pub fn with_edge(mut self, width: f32, color: Vec4) -> Self {
        self.edge_width = width;
        self.edge_color = color;
        self
    }

    pub fn get_rect(&self) -> Rect {
        Rect::from_vec2(self.position, self.size)
    }
}

impl Shape for Rectangle {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        if self.filled {
            batch.draw(&Sprite::new_stretched(primitives.white_pixel(), self.get_rect(), 0.0, self.color));
        }

        if self.edge_width > 0.0 {
            let top_left = self.position;
            let top_right = self.position + Vec2::new(self.size.x, 0.0);
            let bottom_left = self.position + Vec2::new(0.0, self.size.y);
            let bottom_right = self.position + self.size;

            Line::draw_segment(batch, primitives, top_left, top_right, self.edge_color, self.edge_width);
            Line::draw_segment(batch, primitives, top_right, bottom_right, self.edge_color, self.edge_width);
            Line::draw_segment(batch, primitives, bottom_left, bottom_right, self.edge_color, self.edge_width);
            Line::draw_segment(batch, primitives, top_left, bottom_left, self.edge_color, self.edge_width);
        }
    }
}

impl RoundedRectangle {
    pub fn new(position: Vec2, size: Vec2, corner_radius: f32, color: Vec4) -> Self {
        Self { position, size, corner_radius, color }
    }

    /// Whole-pixel corner radius limited to half of the shorter side.
    pub fn get_corner_radius(&self) -> f32 {
        self.corner_radius.clamp(0.0, (self.size.x.min(self.size.y) / 2.0).max(0.0)).floor()
    }

    pub fn get_bands(&self) -> [Rectangle; 5] {
        let r = self.get_corner_radius();
        let inner = self.size - Vec2::splat(2.0 * r);
        let p = self.position;

        [
            Rectangle::new(p + Vec2::new(r, r), inner, self.color),
            Rectangle::new(p + Vec2::new(r, 0.0), Vec2::new(inner.x, r), self.color),
            Rectangle::new(p + Vec2::new(r, self.size.y - r), Vec2::new(inner.x, r), self.color),
            Rectangle::new(p + Vec2::new(0.0, r), Vec2::new(r, inner.y), self.color),
            Rectangle::new(p + Vec2::new(self.size.x - r, r), Vec2::new(r, inner.y), self.color),
        ]
    }

    pub fn get_corners(&self) -> [(Circle, Quadrant); 4] {
        let r = self.get_corner_radius();
        let p = self.position;
        let far = self.size - Vec2::splat(r + 1.0);

        [
            (Circle::new(p + Vec2::new(r, r), r, self.color), Quadrant::TopLeft),
            (Circle::new(p + Vec2::new(far.x, r), r, self.color), Quadrant::TopRight),
            (Circle::new(p + Vec2::new(r, far.y), r, self.color), Quadrant::BottomLeft),
            (Circle::new(p + far, r, self.color), Quadrant::BottomRight),
        ]
    }
}

impl Shape for RoundedRectangle {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        if self.get_corner_radius() == 0.0 {
            Rectangle::new(self.position, self.size, self.color).draw(batch, primitives);
            return;
        }

        for band in self.get_bands() {
            band.draw(batch, primitives);
        }

        for (corner, quadrant) in self.get_corners() {
            corner.draw_quadrant(batch, primitives, quadrant);
        }
    }
}

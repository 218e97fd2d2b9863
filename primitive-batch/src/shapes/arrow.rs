use super::Line;
use super::Shape;
use super::Triangle;
use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::SpriteBatch;
use glam::Vec2;
use glam::Vec4;

pub const DEFAULT_ARROW_WIDTH: f32 = 2.0;
pub const DEFAULT_HEAD_SIZE: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Arrow {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Vec4,
    pub width: f32,
    pub head_size: f32,
}

impl Arrow {
    pub fn new(start: Vec2, end: Vec2, color: Vec4) -> Self {
        Self { start, end, color, width: DEFAULT_ARROW_WIDTH, head_size: DEFAULT_HEAD_SIZE }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn get_shaft(&self) -> Line {
        Line::new(self.start, self.end, self.color, self.width)
    }

    pub fn get_head(&self) -> Option<Triangle> {
        let direction = (self.end - self.start).try_normalize()?;
        let perpendicular = direction.perp();
        let back = self.end - direction * self.head_size;
        let side = perpendicular * (self.head_size / 2.0);

        Some(Triangle::new(self.end, back + side, back - side, self.color))
    }
}

impl Shape for Arrow {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        self.get_shaft().draw(batch, primitives);

        if let Some(head) = self.get_head() {
            head.draw(batch, primitives);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::tests::*;

    #[test]
    fn head_points_along_direction() {
        let arrow = Arrow::new(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0), Vec4::ONE);
        let head = arrow.get_head().unwrap();

        assert_eq!(head.position, Vec2::new(20.0, 0.0));
        assert_eq!(head.point2, Vec2::new(10.0, 5.0));
        assert_eq!(head.point3, Vec2::new(10.0, -5.0));
        assert!(head.filled);
    }

    #[test]
    fn zero_length_arrow_has_no_head() {
        let (mut sprites, primitives) = recorder();
        let arrow = Arrow::new(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), Vec4::ONE);
        arrow.draw(&mut sprites, &primitives);

        assert!(arrow.get_head().is_none());
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].size, Some(Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn arrow_draws_shaft_then_head() {
        let (mut sprites, primitives) = recorder();
        let arrow = Arrow::new(Vec2::new(0.0, 20.0), Vec2::new(30.0, 20.0), Vec4::ONE).with_width(3.0);
        arrow.draw(&mut sprites, &primitives);

        assert_eq!(sprites[0].size, Some(Vec2::new(30.0, 3.0)));
        assert_eq!(sprites.len(), 1 + arrow.get_head().unwrap().fill_points().len());
    }

    #[test]
    fn arrow_on_canvas() {
        let (mut canvas, primitives) = canvas(48, 48);
        Arrow::new(Vec2::new(4.0, 24.0), Vec2::new(40.0, 24.0), Vec4::ONE).draw(&mut canvas, &primitives);

        assert_eq!(canvas.pixel(4, 24), Some(WHITE));
        assert_eq!(canvas.pixel(40, 24), Some(WHITE));
        assert_eq!(canvas.pixel(30, 19), Some(WHITE));
        assert_eq!(canvas.pixel(30, 29), Some(WHITE));
        assert_eq!(canvas.pixel(20, 19), Some([0, 0, 0, 0]));
    }
}

use super::Shape;
use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::sprite::Sprite;
use crate::renderer::Rect;
use crate::renderer::SpriteBatch;
use glam::Vec2;
use glam::Vec4;

pub const DEFAULT_PARTICLE_RADIUS: f32 = 5.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    pub position: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Vec4,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2, color: Vec4, width: f32) -> Self {
        Self { position: start, end, width, color }
    }

    pub fn from_angle(start: Vec2, angle: f32, distance: f32, color: Vec4, width: f32) -> Self {
        Self { position: start, end: start + Vec2::from_angle(angle) * distance, width, color }
    }

    pub fn draw_segment(batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch, start: Vec2, end: Vec2, color: Vec4, width: f32) {
        let edge = end - start;
        let angle = edge.y.atan2(edge.x);
        let destination = Rect::from_vec2(start, Vec2::new(edge.length(), width));

        batch.draw(&Sprite::new_stretched(primitives.white_pixel(), destination, angle, color));
    }

    /// Pushes `position` out to `particle_radius` on the left-hand side (normal `(-dir.y, dir.x)`) of the segment.
    pub fn constrain_to_side(position: Vec2, start: Vec2, end: Vec2, particle_radius: f32) -> Vec2 {
        let direction = end - start;
        let length = direction.length();

        if length < 0.001 {
            return position;
        }

        let direction = direction / length;
        let normal = Vec2::new(-direction.y, direction.x);
        let to_particle = position - start;

        let side = to_particle.dot(normal);
        let projection = to_particle.dot(direction).clamp(0.0, length);
        let closest = start + direction * projection;

        if side < particle_radius {
            closest + normal * particle_radius
        } else {
            position
        }
    }

    pub fn start(&self) -> Vec2 {
        self.position
    }
}

impl Shape for Line {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        Self::draw_segment(batch, primitives, self.position, self.end, self.color, self.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::tests::*;
    use std::f32::consts;

    #[test]
    fn draw_emits_one_rotated_sprite() {
        let (mut sprites, primitives) = recorder();
        Line::new(Vec2::new(10.7, 20.2), Vec2::new(10.7, 30.2), Vec4::ONE, 2.9).draw(&mut sprites, &primitives);

        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].position, Vec2::new(10.0, 20.0));
        assert_eq!(sprites[0].size, Some(Vec2::new(10.0, 2.0)));
        assert!((sprites[0].rotation - consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(sprites[0].anchor, Vec2::ZERO);
    }

    #[test]
    fn from_angle_offsets_from_start() {
        let line = Line::from_angle(Vec2::new(5.0, 5.0), 0.0, 10.0, Vec4::ONE, 1.0);
        assert_eq!(line.end, Vec2::new(15.0, 5.0));

        let line = Line::from_angle(Vec2::new(5.0, 5.0), consts::FRAC_PI_2, 4.0, Vec4::ONE, 1.0);
        assert!(line.end.distance(Vec2::new(5.0, 9.0)) < 1e-5);
    }

    #[test]
    fn horizontal_line_fills_row() {
        let (mut canvas, primitives) = canvas(20, 10);
        Line::new(Vec2::new(2.0, 3.0), Vec2::new(12.0, 3.0), Vec4::ONE, 1.0).draw(&mut canvas, &primitives);

        assert_eq!(canvas.count(WHITE), 10);
        assert_eq!(canvas.pixel(2, 3), Some(WHITE));
        assert_eq!(canvas.pixel(11, 3), Some(WHITE));
        assert_eq!(canvas.pixel(12, 3), Some([0, 0, 0, 0]));
    }

    #[test]
    fn particle_below_radius_is_pushed_out() {
        let start = Vec2::new(0.0, 0.0);
        let end = Vec2::new(10.0, 0.0);

        let pushed = Line::constrain_to_side(Vec2::new(4.0, 2.0), start, end, DEFAULT_PARTICLE_RADIUS);
        assert_eq!(pushed, Vec2::new(4.0, 5.0));

        let crossed = Line::constrain_to_side(Vec2::new(3.0, -7.0), start, end, DEFAULT_PARTICLE_RADIUS);
        assert_eq!(crossed, Vec2::new(3.0, 5.0));
    }

    #[test]
    fn particle_outside_radius_is_untouched() {
        let position = Vec2::new(4.0, 8.0);
        assert_eq!(Line::constrain_to_side(position, Vec2::ZERO, Vec2::new(10.0, 0.0), 5.0), position);
    }

    #[test]
    fn projection_is_clamped_to_segment() {
        let pushed = Line::constrain_to_side(Vec2::new(-6.0, 1.0), Vec2::ZERO, Vec2::new(10.0, 0.0), 5.0);
        assert_eq!(pushed, Vec2::new(0.0, 5.0));

        let pushed = Line::constrain_to_side(Vec2::new(16.0, 1.0), Vec2::ZERO, Vec2::new(10.0, 0.0), 5.0);
        assert_eq!(pushed, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn degenerate_segment_returns_position() {
        let position = Vec2::new(1.0, 1.0);
        assert_eq!(Line::constrain_to_side(position, Vec2::new(2.0, 2.0), Vec2::new(2.0005, 2.0), 5.0), position);
    }
}

use super::Shape;
use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::sprite::Sprite;
use crate::renderer::SpriteBatch;
use glam::IVec2;
use glam::Vec2;
use glam::Vec4;
use log::error;
use std::ops::RangeInclusive;

pub const MAX_RADIUS: i32 = 46340;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
    pub color: Vec4,
    pub filled: bool,
}

/// Quarter of a disk, named after the corner of the screen it points to (y grows downwards).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Circle {
    pub fn new(position: Vec2, radius: f32, color: Vec4) -> Self {
        Self { position, radius, color, filled: true }
    }

    pub fn new_outline(position: Vec2, radius: f32, color: Vec4) -> Self {
        Self { position, radius, color, filled: false }
    }

    pub fn outline_points(center: IVec2, radius: i32) -> Vec<IVec2> {
        let mut points = Vec::new();
        let mut x = 0;
        let mut y = radius;
        let mut d = 3 - 2 * radius as i64;

        while y >= x {
            points.extend_from_slice(&[
                center + IVec2::new(x, y),
                center + IVec2::new(-x, y),
                center + IVec2::new(x, -y),
                center + IVec2::new(-x, -y),
                center + IVec2::new(y, x),
                center + IVec2::new(-y, x),
                center + IVec2::new(y, -x),
                center + IVec2::new(-y, -x),
            ]);

            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) as i64 + 10;
            } else {
                d += 4 * x as i64 + 6;
            }
        }

        points
    }

    pub fn disk_points(center: IVec2, radius: i32) -> Vec<IVec2> {
        Self::disk_points_in(center, radius, -radius..=radius, -radius..=radius)
    }

    pub fn quadrant_points(center: IVec2, radius: i32, quadrant: Quadrant) -> Vec<IVec2> {
        let (columns, rows) = match quadrant {
            Quadrant::TopLeft => (-radius..=0, -radius..=0),
            Quadrant::TopRight => (0..=radius, -radius..=0),
            Quadrant::BottomLeft => (-radius..=0, 0..=radius),
            Quadrant::BottomRight => (0..=radius, 0..=radius),
        };

        Self::disk_points_in(center, radius, columns, rows)
    }

    pub fn draw_quadrant(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch, quadrant: Quadrant) {
        let Some((center, radius)) = self.get_grid() else {
            return;
        };

        self.plot(batch, primitives, &Self::quadrant_points(center, radius, quadrant));
    }

    fn disk_points_in(center: IVec2, radius: i32, columns: RangeInclusive<i32>, rows: RangeInclusive<i32>) -> Vec<IVec2> {
        let mut points = Vec::new();

        for i in columns {
            for j in rows.clone() {
                if (i as i64).pow(2) + (j as i64).pow(2) <= (radius as i64).pow(2) {
                    points.push(center + IVec2::new(i, j));
                }
            }
        }

        points
    }

    fn get_grid(&self) -> Option<(IVec2, i32)> {
        let radius = self.radius as i32;
        if radius < 0 {
            return None;
        }

        if radius > MAX_RADIUS {
            error!("Circle radius {} exceeds the maximum of {}", self.radius, MAX_RADIUS);
            return None;
        }

        let center = IVec2::new(self.position.x as i32, self.position.y as i32);
        let fits = |c: i32| c.checked_sub(radius).is_some() && c.checked_add(radius).is_some();
        if !fits(center.x) || !fits(center.y) {
            error!("Circle at {} with radius {} leaves the integer grid", self.position, self.radius);
            return None;
        }

        Some((center, radius))
    }

    fn plot(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch, points: &[IVec2]) {
        for point in points {
            batch.draw(&Sprite::new_at(primitives.white_pixel(), point.as_vec2(), self.color));
        }
    }
}

impl Shape for Circle {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch) {
        let Some((center, radius)) = self.get_grid() else {
            return;
        };

        self.plot(batch, primitives, &Self::outline_points(center, radius));

        if self.filled {
            self.plot(batch, primitives, &Self::disk_points(center, radius));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::tests::*;
    use std::collections::HashSet;

    #[test]
    fn outline_of_radius_three() {
        let points = Circle::outline_points(IVec2::ZERO, 3).into_iter().collect::<HashSet<_>>();
        let expected = [(0, 3), (1, 3), (2, 2), (3, 1), (3, 0)];

        for (x, y) in expected {
            for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                assert!(points.contains(&IVec2::new(x * sx, y * sy)), "missing ({}, {})", x * sx, y * sy);
            }
        }

        assert_eq!(points.len(), 16);
    }

    #[test]
    fn outline_points_lie_near_radius() {
        for radius in 1..20 {
            for point in Circle::outline_points(IVec2::new(5, -5), radius) {
                let distance = (point - IVec2::new(5, -5)).as_vec2().length();
                assert!((distance - radius as f32).abs() < 1.0, "radius {} point {:?}", radius, point);
            }
        }
    }

    #[test]
    fn zero_radius_plots_center() {
        let (mut sprites, primitives) = recorder();
        Circle::new(Vec2::new(4.6, 7.2), 0.0, Vec4::ONE).draw(&mut sprites, &primitives);

        assert_eq!(sprites.len(), 9);
        assert!(positions(&sprites).iter().all(|p| *p == (4, 7)));
    }

    #[test]
    fn negative_radius_draws_nothing() {
        let (mut sprites, primitives) = recorder();
        Circle::new(Vec2::new(4.0, 4.0), -3.0, Vec4::ONE).draw(&mut sprites, &primitives);

        assert!(sprites.is_empty());
    }

    #[test]
    fn outline_skips_fill() {
        let (mut sprites, primitives) = recorder();
        Circle::new_outline(Vec2::new(10.0, 10.0), 3.0, Vec4::ONE).draw(&mut sprites, &primitives);

        assert_eq!(sprites.len(), Circle::outline_points(IVec2::ZERO, 3).len());
    }

    #[test]
    fn filled_circle_covers_disk() {
        let (mut canvas, primitives) = canvas(32, 32);
        Circle::new(Vec2::new(16.0, 16.0), 5.0, Vec4::ONE).draw(&mut canvas, &primitives);

        let mut covered = Circle::disk_points(IVec2::ZERO, 5).into_iter().collect::<HashSet<_>>();
        covered.extend(Circle::outline_points(IVec2::ZERO, 5));

        assert_eq!(canvas.count(WHITE), covered.len());
        assert_eq!(canvas.pixel(16, 16), Some(WHITE));
        assert_eq!(canvas.pixel(21, 16), Some(WHITE));
        assert_eq!(canvas.pixel(20, 20), Some([0, 0, 0, 0]));
    }

    #[test]
    fn quadrants_split_the_disk() {
        let disk = Circle::disk_points(IVec2::ZERO, 6).into_iter().collect::<HashSet<_>>();
        let mut union = HashSet::new();

        for quadrant in [Quadrant::TopLeft, Quadrant::TopRight, Quadrant::BottomLeft, Quadrant::BottomRight] {
            let points = Circle::quadrant_points(IVec2::ZERO, 6, quadrant);
            assert!(points.iter().all(|p| disk.contains(p)));
            union.extend(points);
        }

        assert_eq!(union, disk);
        assert!(Circle::quadrant_points(IVec2::ZERO, 6, Quadrant::TopLeft).iter().all(|p| p.x <= 0 && p.y <= 0));
        assert!(Circle::quadrant_points(IVec2::ZERO, 6, Quadrant::BottomRight).iter().all(|p| p.x >= 0 && p.y >= 0));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let (mut sprites, primitives) = recorder();
        Circle::new_outline(Vec2::ZERO, 2.0e9, Vec4::ONE).draw(&mut sprites, &primitives);
        Circle::new(Vec2::ZERO, 50000.0, Vec4::ONE).draw(&mut sprites, &primitives);
        Circle::new(Vec2::ZERO, f32::INFINITY, Vec4::ONE).draw_quadrant(&mut sprites, &primitives, Quadrant::TopLeft);

        assert!(sprites.is_empty());
    }

    #[test]
    fn center_near_grid_limit_is_rejected() {
        let (mut sprites, primitives) = recorder();
        Circle::new_outline(Vec2::new(2.2e9, 0.0), 10.0, Vec4::ONE).draw(&mut sprites, &primitives);
        Circle::new_outline(Vec2::new(0.0, -2.2e9), 10.0, Vec4::ONE).draw(&mut sprites, &primitives);

        assert!(sprites.is_empty());
    }

    #[test]
    fn largest_radius_math_stays_in_range() {
        let points = Circle::outline_points(IVec2::ZERO, MAX_RADIUS);
        assert!(points.contains(&IVec2::new(0, MAX_RADIUS)));
        assert!(points.contains(&IVec2::new(-MAX_RADIUS, 0)));

        let edge = Circle::disk_points_in(IVec2::ZERO, MAX_RADIUS, MAX_RADIUS - 1..=MAX_RADIUS, 0..=1);
        assert_eq!(edge, vec![IVec2::new(MAX_RADIUS - 1, 0), IVec2::new(MAX_RADIUS - 1, 1), IVec2::new(MAX_RADIUS, 0)]);
    }
}

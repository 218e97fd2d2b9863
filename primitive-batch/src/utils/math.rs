use glam::Vec2;

pub trait Vec2MathUtils {
    fn distance_to_line(&self, a: Vec2, b: Vec2) -> f32;
    fn distance_to_segment(&self, a: Vec2, b: Vec2) -> f32;
    fn closest_point_on_segment(&self, a: Vec2, b: Vec2) -> Vec2;
}

impl Vec2MathUtils for Vec2 {
    fn distance_to_line(&self, a: Vec2, b: Vec2) -> f32 {
        let x = ((b.x - a.x) * (a.y - self.y) - (a.x - self.x) * (b.y - a.y)).abs();
        let y = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();

        x / y
    }

    fn distance_to_segment(&self, a: Vec2, b: Vec2) -> f32 {
        self.distance(self.closest_point_on_segment(a, b))
    }

    fn closest_point_on_segment(&self, a: Vec2, b: Vec2) -> Vec2 {
        let ab = b - a;
        let length_squared = ab.length_squared();
        if length_squared == 0.0 {
            return a;
        }

        let d = (*self - a).dot(ab) / length_squared;

        if d <= 0.0 {
            a
        } else if d >= 1.0 {
            b
        } else {
            a + d * ab
        }
    }
}

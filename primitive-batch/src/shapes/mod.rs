use crate::renderer::batch::PrimitiveBatch;
use crate::renderer::SpriteBatch;

pub mod arrow;
pub mod circle;
pub mod line;
pub mod pixel;
pub mod rectangle;
pub mod triangle;

pub use self::arrow::Arrow;
pub use self::circle::Circle;
pub use self::circle::Quadrant;
pub use self::line::Line;
pub use self::pixel::Pixel;
pub use self::rectangle::Rectangle;
pub use self::rectangle::RoundedRectangle;
pub use self::triangle::Triangle;

pub trait Shape {
    fn draw(&self, batch: &mut dyn SpriteBatch, primitives: &PrimitiveBatch);
}

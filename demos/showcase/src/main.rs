use primitive_batch::anyhow::Result;
use primitive_batch::error_continue;
use primitive_batch::glam::Vec2;
use primitive_batch::glam::Vec4;
use primitive_batch::log::info;
use primitive_batch::log::Level;
use primitive_batch::renderer::batch::PrimitiveBatch;
use primitive_batch::renderer::canvas::Canvas;
use primitive_batch::renderer::texture::RectangleTexture;
use primitive_batch::renderer::sprite::Sprite;
use primitive_batch::renderer::Rect;
use primitive_batch::renderer::SpriteBatch;
use primitive_batch::shapes::line::DEFAULT_PARTICLE_RADIUS;
use primitive_batch::shapes::Arrow;
use primitive_batch::shapes::Circle;
use primitive_batch::shapes::Line;
use primitive_batch::shapes::Pixel;
use primitive_batch::shapes::Rectangle;
use primitive_batch::shapes::RoundedRectangle;
use primitive_batch::shapes::Shape;
use primitive_batch::shapes::Triangle;
use primitive_batch::utils::color::parse_color;
use primitive_batch::utils::color::Vec4Color;
use primitive_batch::utils::math::Vec2MathUtils;
use primitive_batch::utils::settings::SettingsStorage;
use std::env;

struct ShowcaseSettings {
    width: u32,
    height: u32,
    output: String,
    background: Vec4,
    particles: u32,
    seed: u64,
}

fn main() -> Result<()> {
    simple_logger::init_with_level(Level::Info)?;

    let path = env::args().nth(1).unwrap_or_else(|| "showcase.cfg".to_string());
    let settings = load_settings(&path)?;

    let mut canvas = Canvas::new(settings.width, settings.height)?;
    let primitives = PrimitiveBatch::new(&mut canvas)?;
    canvas.clear(settings.background);

    draw_gallery(&mut canvas, &primitives, &settings)?;
    info!("Gallery drawn with {} sprite draws", canvas.draw_calls());

    canvas.reset_stats();
    simulate_particles(&mut canvas, &primitives, &settings);
    info!("Particles drawn with {} sprite draws", canvas.draw_calls());

    canvas.save_png(&settings.output)?;
    Ok(())
}

fn load_settings(path: &str) -> Result<ShowcaseSettings> {
    let mut storage = SettingsStorage::new(path);

    let width = storage.set("width", 480u32, false)?.unwrap_or(480);
    let height = storage.set("height", 320u32, false)?.unwrap_or(320);
    let output = storage.set("output", "showcase.png".to_string(), false)?.unwrap_or_else(|| "showcase.png".to_string());
    let background = storage.set("background", "#202028".to_string(), false)?.unwrap_or_else(|| "#202028".to_string());
    let particles = storage.set("particles", 48u32, false)?.unwrap_or(48);
    let seed = storage.set("seed", 7u64, false)?.unwrap_or(7);

    info!("Using settings from {} ({}x{}, {} particles)", path, width, height, particles);
    Ok(ShowcaseSettings { width, height, output, background: parse_color(&background)?, particles, seed })
}

fn draw_gallery(canvas: &mut Canvas, primitives: &PrimitiveBatch, settings: &ShowcaseSettings) -> Result<()> {
    let red = Vec4::new_rgb(230, 70, 70, 255);
    let green = Vec4::new_rgb(90, 200, 120, 255);
    let blue = Vec4::new_rgb(80, 140, 240, 255);
    let yellow = Vec4::new_rgb(240, 210, 90, 255);
    let white = Vec4::ONE;

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Line::new(Vec2::new(20.0, 20.0), Vec2::new(140.0, 60.0), white, 2.0)),
        Box::new(Line::from_angle(Vec2::new(20.0, 80.0), 0.3, 120.0, yellow, 1.0)),
        Box::new(Circle::new(Vec2::new(200.0, 50.0), 30.0, blue)),
        Box::new(Circle::new_outline(Vec2::new(280.0, 50.0), 30.0, green)),
        Box::new(Rectangle::new(Vec2::new(330.0, 20.0), Vec2::new(60.0, 40.0), red).with_edge(2.0, white)),
        Box::new(Rectangle::from_rect(Rect::new(400, 20, 60, 40), red, false, 1.0, None)),
        Box::new(RoundedRectangle::new(Vec2::new(20.0, 120.0), Vec2::new(120.0, 60.0), 14.0, green)),
        Box::new(Triangle::new(Vec2::new(170.0, 180.0), Vec2::new(230.0, 120.0), Vec2::new(260.0, 170.0), yellow)),
        Box::new(Triangle::new_outline(Vec2::new(280.0, 180.0), Vec2::new(330.0, 120.0), Vec2::new(360.0, 180.0), blue)),
        Box::new(Arrow::new(Vec2::new(380.0, 170.0), Vec2::new(450.0, 120.0), white)),
        Box::new(Pixel::new(Vec2::new(470.0, 190.0), red)),
    ];

    primitives.draw_all(canvas, &shapes);

    let mut swatch = RectangleTexture::default();
    let texture_id = swatch.create_texture(Vec2::new(8.0, 8.0), canvas)?;
    let swatches = settings.width.saturating_sub(20) / 12;
    for i in 0..swatches.min(16) {
        let tint = Vec4::new(i as f32 / 16.0, 0.5, 1.0 - i as f32 / 16.0, 1.0);
        canvas.draw(&Sprite::new_at(texture_id, Vec2::new(20.0 + i as f32 * 12.0, 200.0), tint));
    }

    Ok(())
}

fn simulate_particles(canvas: &mut Canvas, primitives: &PrimitiveBatch, settings: &ShowcaseSettings) {
    let mut rng = fastrand::Rng::with_seed(settings.seed);
    let floor_start = Vec2::new(settings.width as f32 - 20.0, settings.height as f32 - 30.0);
    let floor_end = Vec2::new(20.0, settings.height as f32 - 60.0);
    let floor = Line::new(floor_start, floor_end, Vec4::ONE, 2.0);
    floor.draw(canvas, primitives);

    let mut resting = 0;
    for _ in 0..settings.particles {
        let mut position = Vec2::new(rng.f32() * settings.width as f32, settings.height as f32 - 120.0 + rng.f32() * 40.0);
        for _ in 0..80 {
            position.y += 2.0;
            position = Line::constrain_to_side(position, floor.start(), floor.end, DEFAULT_PARTICLE_RADIUS);
        }

        if position.y >= settings.height as f32 {
            error_continue!("Particle fell through the floor at {}", position);
        }

        if position.distance_to_segment(floor.start(), floor.end) <= DEFAULT_PARTICLE_RADIUS + 0.01 {
            resting += 1;
        }

        Circle::new(position, DEFAULT_PARTICLE_RADIUS - 1.0, Vec4::new_rgb(240, 120, 60, 255)).draw(canvas, primitives);
    }

    info!("{} of {} particles resting on the floor", resting, settings.particles);
}

use crate::canvas::Canvas;
use crate::math::*;

use tracing::trace;

/// The twelve hour marks of a clock of the given radius, lying in the xz plane.
/// twelve o'clock is on +z, three o'clock on +x.
pub fn hour_marks(radius: f32) -> [Point4; 12] {
    let twelve = Point4::position(0.0, 0.0, 1.0);
    std::array::from_fn(|hour| {
        let transform = TransformStack::new()
            .rotate_y(hour as f32 * PI / 6.0)
            .scale(radius, radius, radius)
            .matrix();
        transform * twelve
    })
}

pub fn render(size: usize, radius_fraction: f32, color: RGBColor) -> Canvas {
    let mut canvas = Canvas::new(size, size);
    let center = size as f32 / 2.0;
    for mark in hour_marks(radius_fraction * size as f32) {
        if !mark.is_normal() {
            trace!("skipping non-finite hour mark {}", mark);
            continue;
        }
        let x = (center + mark.x()).round();
        let y = (center - mark.z()).round();
        if x < 0.0 || y < 0.0 || canvas.write_pixel(x as usize, y as usize, color).is_err() {
            trace!("hour mark {} falls outside the canvas", mark);
        }
    }
    canvas
}

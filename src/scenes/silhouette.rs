use crate::prelude::*;

use tracing::debug;

/// Shadow of a unit sphere cast onto a square wall, seen from a point light behind the sphere.
#[derive(Copy, Clone, Debug)]
pub struct Silhouette {
    pub ray_origin: Point4,
    pub size: usize,
    pub wall_z: f32,
    pub wall_size: f32,
    pub color: RGBColor,
    /// places the sphere in the world
    pub transform: Transform3,
}

impl Silhouette {
    pub fn new(size: usize, wall_z: f32, wall_size: f32, color: RGBColor) -> Self {
        Silhouette {
            ray_origin: Point4::position(0.0, 0.0, -5.0),
            size,
            wall_z,
            wall_size,
            color,
            transform: Transform3::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: Transform3) -> Self {
        self.transform = transform;
        self
    }

    fn pixel_size(&self) -> f32 {
        self.wall_size / self.size as f32
    }

    /// world space point on the wall behind the top-left corner of pixel (x, y).
    pub fn wall_point(&self, x: usize, y: usize) -> Point4 {
        let half = self.wall_size / 2.0;
        let world_x = -half + self.pixel_size() * x as f32;
        let world_y = half - self.pixel_size() * y as f32;
        Point4::position(world_x, world_y, self.wall_z)
    }

    pub fn is_shadowed(&self, sphere: &Sphere, x: usize, y: usize) -> bool {
        let direction = (self.wall_point(x, y) - self.ray_origin).normalized();
        let ray = Ray::new(self.ray_origin, direction);
        sphere.hit(&self.transform.to_local(ray)).is_some()
    }

    pub fn render(&self, sphere: &Sphere) -> Canvas {
        let rows: Vec<Vec<RGBColor>> = (0..self.size)
            .into_par_iter()
            .map(|y| {
                (0..self.size)
                    .map(|x| {
                        if self.is_shadowed(sphere, x, y) {
                            self.color
                        } else {
                            RGBColor::BLACK
                        }
                    })
                    .collect()
            })
            .collect();
        let pixels = Vec2D {
            buffer: rows.concat(),
            width: self.size,
            height: self.size,
        };
        debug!(
            "sphere {} covers {} of {} pixels",
            sphere.get_instance_id(),
            pixels.buffer.iter().filter(|c| **c != RGBColor::BLACK).count(),
            pixels.total_pixels()
        );
        Canvas::from_pixels(pixels)
    }
}

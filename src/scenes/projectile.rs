use crate::canvas::Canvas;
use crate::math::*;

use tracing::trace;

/// upper bound on simulation steps, for launches that never come back down.
pub const MAX_TICKS: usize = 10_000;

#[derive(Copy, Clone, Debug)]
pub struct Environment {
    pub gravity: Vec3,
    pub wind: Vec3,
}

#[derive(Copy, Clone, Debug)]
pub struct Projectile {
    pub position: Point3,
    pub velocity: Vec3,
}

impl Projectile {
    pub fn new(position: Point3, velocity: Vec3) -> Self {
        Projectile { position, velocity }
    }

    pub fn tick(&mut self, environment: &Environment) {
        self.position += self.velocity;
        self.velocity += environment.gravity + environment.wind;
    }
}

/// Every position the projectile occupies from launch until it drops below y = 0
/// or stops being finite. the launch position is always included.
pub fn trajectory(mut projectile: Projectile, environment: &Environment) -> Vec<Point3> {
    let mut positions = Vec::new();
    loop {
        positions.push(projectile.position);
        projectile.tick(environment);
        if !projectile.position.is_normal()
            || projectile.position.y() < 0.0
            || positions.len() >= MAX_TICKS
        {
            break;
        }
    }
    positions
}

/// y grows upwards in world space and downwards on the canvas.
pub fn plot(canvas: &mut Canvas, positions: &[Point3], color: RGBColor) {
    let bottom = canvas.height() as f32 - 1.0;
    for position in positions {
        if !position.is_normal() {
            trace!("skipping non-finite position {}", position);
            continue;
        }
        let x = position.x().round();
        let y = (bottom - position.y()).round();
        if x < 0.0 || y < 0.0 || canvas.write_pixel(x as usize, y as usize, color).is_err() {
            trace!("{} falls outside the canvas", position);
        }
    }
}

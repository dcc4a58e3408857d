pub mod clock;
pub mod projectile;
pub mod silhouette;

pub use projectile::{Environment, Projectile};
pub use silhouette::Silhouette;

use crate::canvas::Canvas;
use crate::config::{build_transform, SceneSettings};
use crate::geometry::{Sphere, SphereIds};
use crate::hittable::Hittable;
use crate::math::{MathError, Point3, RGBColor, Vec3};

use tracing::info;

pub fn render_scene(settings: &SceneSettings, ids: &SphereIds) -> Result<Canvas, MathError> {
    let canvas = match settings {
        SceneSettings::Projectile(data) => {
            let environment = Environment {
                gravity: Vec3::from(data.gravity),
                wind: Vec3::from(data.wind),
            };
            let velocity = Vec3::from(data.velocity).normalized() * data.velocity_scale;
            let positions = projectile::trajectory(
                Projectile::new(Point3::from(data.start), velocity),
                &environment,
            );
            info!("projectile landed after {} ticks", positions.len());
            let mut canvas = Canvas::new(data.width, data.height);
            projectile::plot(&mut canvas, &positions, RGBColor::from(data.color));
            canvas
        }
        SceneSettings::Clock(data) => {
            clock::render(data.size, data.radius_fraction, RGBColor::from(data.color))
        }
        SceneSettings::Silhouette(data) => {
            let transform = build_transform(&data.transforms)?;
            let sphere = Sphere::new(ids);
            info!(
                "casting {}x{} rays at sphere {}",
                data.size,
                data.size,
                sphere.get_instance_id()
            );
            Silhouette::new(data.size, data.wall_z, data.wall_size, RGBColor::from(data.color))
                .with_transform(transform)
                .render(&sphere)
        }
    };
    Ok(canvas)
}

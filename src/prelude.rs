pub use rayon::prelude::*;

pub use crate::canvas::{Canvas, CanvasError};
pub use crate::geometry::{Sphere, SphereIds};
pub use crate::hittable::{Hittable, Intersections};
pub use crate::math::*;
pub use crate::vec2d::Vec2D;

mod color;
mod error;
mod matrix;
mod misc;
mod point;
mod transform;
mod vec;

pub use color::RGBColor;
pub use error::MathError;
pub use matrix::{Mat1, Mat2, Mat3, Mat4, Matrix, IDENTITY1, IDENTITY2, IDENTITY3, IDENTITY4};
pub use misc::{approximately_equal, relatively_equal};
pub use point::{Point, Point2, Point3, Point4};
pub use std::f32::consts::PI;
pub use transform::{
    rotation_x, rotation_y, rotation_z, scaling, shearing, translation, Transform3, TransformStack,
};
pub use vec::{Vec2, Vec3, Vec4, Vector};

use std::ops::Mul;

/// Half-line in homogeneous coordinates, `origin + direction * t`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    origin: Point4,
    direction: Vec4,
}

impl Ray {
    pub const fn new(origin: Point4, direction: Vec4) -> Self {
        Ray { origin, direction }
    }

    pub fn origin(&self) -> Point4 {
        self.origin
    }

    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// negative `t` is allowed and walks backwards from the origin.
    pub fn position(&self, t: f32) -> Point4 {
        self.origin + self.direction * t
    }

    /// the direction is not renormalized, so `t` values stay comparable across spaces.
    pub fn transform(&self, matrix: &Mat4) -> Ray {
        Ray::new(*matrix * self.origin, *matrix * self.direction)
    }
}

impl Mul<Ray> for Mat4 {
    type Output = Ray;
    fn mul(self, rhs: Ray) -> Self::Output {
        rhs.transform(&self)
    }
}

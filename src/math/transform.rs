use crate::math::{Mat4, MathError, Point4, Ray, Vec4, IDENTITY4};

use std::ops::{Div, Mul};

pub fn translation(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY4;
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

pub fn scaling(x: f32, y: f32, z: f32) -> Mat4 {
    let mut m = IDENTITY4;
    m[(0, 0)] = x;
    m[(1, 1)] = y;
    m[(2, 2)] = z;
    m
}

pub fn rotation_x(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    let mut m = IDENTITY4;
    m[(1, 1)] = cos;
    m[(1, 2)] = -sin;
    m[(2, 1)] = sin;
    m[(2, 2)] = cos;
    m
}

pub fn rotation_y(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    let mut m = IDENTITY4;
    m[(0, 0)] = cos;
    m[(0, 2)] = sin;
    m[(2, 0)] = -sin;
    m[(2, 2)] = cos;
    m
}

pub fn rotation_z(radians: f32) -> Mat4 {
    let (sin, cos) = radians.sin_cos();
    let mut m = IDENTITY4;
    m[(0, 0)] = cos;
    m[(0, 1)] = -sin;
    m[(1, 0)] = sin;
    m[(1, 1)] = cos;
    m
}

/// `x_y` moves x in proportion to y, and so on for the other five.
pub fn shearing(x_y: f32, x_z: f32, y_x: f32, y_z: f32, z_x: f32, z_y: f32) -> Mat4 {
    let mut m = IDENTITY4;
    m[(0, 1)] = x_y;
    m[(0, 2)] = x_z;
    m[(1, 0)] = y_x;
    m[(1, 2)] = y_z;
    m[(2, 0)] = z_x;
    m[(2, 1)] = z_y;
    m
}

/// Fluent composition of transforms. each new transform is left-multiplied onto the
/// accumulated matrix, so the first one added is the first one applied to a point.
#[derive(Copy, Clone, Debug)]
pub struct TransformStack {
    matrix: Mat4,
}

impl TransformStack {
    pub const fn new() -> Self {
        TransformStack { matrix: IDENTITY4 }
    }

    pub fn then(mut self, transform: Mat4) -> Self {
        self.matrix = transform * self.matrix;
        self
    }

    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        self.then(translation(x, y, z))
    }

    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        self.then(scaling(x, y, z))
    }

    pub fn rotate_x(self, radians: f32) -> Self {
        self.then(rotation_x(radians))
    }

    pub fn rotate_y(self, radians: f32) -> Self {
        self.then(rotation_y(radians))
    }

    pub fn rotate_z(self, radians: f32) -> Self {
        self.then(rotation_z(radians))
    }

    pub fn shear(self, x_y: f32, x_z: f32, y_x: f32, y_z: f32, z_x: f32, z_y: f32) -> Self {
        self.then(shearing(x_y, x_z, y_x, y_z, z_x, z_y))
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        TransformStack::new()
    }
}

/// A transform together with its inverse. `*` maps into world space, `/` maps back to local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3 {
    pub forward: Mat4,
    pub reverse: Mat4,
}

impl Transform3 {
    pub fn new(forward: Mat4) -> Result<Self, MathError> {
        Ok(Transform3 {
            forward,
            reverse: forward.inverse()?,
        })
    }

    pub const fn new_from_raw(forward: Mat4, reverse: Mat4) -> Self {
        Transform3 { forward, reverse }
    }

    pub const IDENTITY: Transform3 = Transform3::new_from_raw(IDENTITY4, IDENTITY4);

    pub fn to_world<T>(&self, value: T) -> <Self as Mul<T>>::Output
    where
        Self: Mul<T>,
    {
        *self * value
    }

    pub fn to_local<T>(&self, value: T) -> <Self as Div<T>>::Output
    where
        Self: Div<T>,
    {
        *self / value
    }
}

impl TryFrom<TransformStack> for Transform3 {
    type Error = MathError;
    fn try_from(stack: TransformStack) -> Result<Self, Self::Error> {
        Transform3::new(stack.matrix())
    }
}

impl Mul<Vec4> for Transform3 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.forward * rhs
    }
}

impl Mul<Point4> for Transform3 {
    type Output = Point4;
    fn mul(self, rhs: Point4) -> Self::Output {
        self.forward * rhs
    }
}

impl Mul<Ray> for Transform3 {
    type Output = Ray;
    fn mul(self, rhs: Ray) -> Self::Output {
        rhs.transform(&self.forward)
    }
}

// applies rhs first, then self
impl Mul<Transform3> for Transform3 {
    type Output = Transform3;
    fn mul(self, rhs: Transform3) -> Self::Output {
        Transform3::new_from_raw(self.forward * rhs.forward, rhs.reverse * self.reverse)
    }
}

impl Div<Vec4> for Transform3 {
    type Output = Vec4;
    fn div(self, rhs: Vec4) -> Self::Output {
        self.reverse * rhs
    }
}

impl Div<Point4> for Transform3 {
    type Output = Point4;
    fn div(self, rhs: Point4) -> Self::Output {
        self.reverse * rhs
    }
}

impl Div<Ray> for Transform3 {
    type Output = Ray;
    fn div(self, rhs: Ray) -> Self::Output {
        rhs.transform(&self.reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    fn assert_close(actual: Point4, expected: Point4) {
        for i in 0..4 {
            assert!(
                (actual.at(i) - expected.at(i)).abs() < 1e-5,
                "{} != {}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_translation() {
        let transform = translation(5.0, -3.0, 2.0);
        let p = Point4::position(-3.0, 4.0, 5.0);
        assert_eq!(transform * p, Point4::position(2.0, 1.0, 7.0));
        assert_eq!(
            transform.inverse().unwrap() * p,
            Point4::position(-8.0, 7.0, 3.0)
        );

        let v = Vec4::direction(-3.0, 4.0, 5.0);
        assert_eq!(transform * v, v);
    }

    #[test]
    fn test_scaling() {
        let transform = scaling(2.0, 3.0, 4.0);
        assert_eq!(
            transform * Point4::position(-4.0, 6.0, 8.0),
            Point4::position(-8.0, 18.0, 32.0)
        );
        let v = Vec4::direction(-4.0, 6.0, 8.0);
        assert_eq!(transform * v, Vec4::direction(-8.0, 18.0, 32.0));
        assert_eq!(
            transform.inverse().unwrap() * v,
            Vec4::direction(-2.0, 2.0, 2.0)
        );
    }

    #[test]
    fn test_reflection() {
        let transform = scaling(-1.0, 1.0, 1.0);
        assert_eq!(
            transform * Point4::position(2.0, 3.0, 4.0),
            Point4::position(-2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_rotations() {
        let half = 2.0f32.sqrt() / 2.0;
        let p = Point4::position(0.0, 1.0, 0.0);
        let p_z = Point4::position(0.0, 0.0, 1.0);
        assert_eq!(rotation_x(PI / 4.0) * p, Point4::position(0.0, half, half));
        assert_eq!(rotation_y(PI / 4.0) * p_z, Point4::position(half, 0.0, half));
        assert_eq!(rotation_z(PI / 4.0) * p, Point4::position(-half, half, 0.0));

        // a quarter turn leaves a ~1e-8 residue in place of zero
        assert_close(rotation_x(PI / 2.0) * p, Point4::position(0.0, 0.0, 1.0));
        assert_close(rotation_y(PI / 2.0) * p_z, Point4::position(1.0, 0.0, 0.0));
        assert_close(rotation_z(PI / 2.0) * p, Point4::position(-1.0, 0.0, 0.0));
        assert_close(
            rotation_x(PI / 4.0).inverse().unwrap() * p,
            Point4::position(0.0, half, -half),
        );
    }

    #[test]
    fn test_shearing() {
        let p = Point4::position(2.0, 3.0, 4.0);
        let cases = [
            ([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Point4::position(5.0, 3.0, 4.0)),
            ([0.0, 1.0, 0.0, 0.0, 0.0, 0.0], Point4::position(6.0, 3.0, 4.0)),
            ([0.0, 0.0, 1.0, 0.0, 0.0, 0.0], Point4::position(2.0, 5.0, 4.0)),
            ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], Point4::position(2.0, 7.0, 4.0)),
            ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], Point4::position(2.0, 3.0, 6.0)),
            ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], Point4::position(2.0, 3.0, 7.0)),
        ];
        for ([xy, xz, yx, yz, zx, zy], expected) in cases {
            assert_eq!(shearing(xy, xz, yx, yz, zx, zy) * p, expected);
        }
    }

    #[test]
    fn test_stack_applies_in_insertion_order() {
        let p = Point4::position(1.0, 0.0, 1.0);
        let rotated = rotation_x(PI / 2.0) * p;
        let scaled = scaling(5.0, 5.0, 5.0) * rotated;
        let translated = translation(10.0, 5.0, 7.0) * scaled;
        assert_close(translated, Point4::position(15.0, 0.0, 7.0));

        let stacked = TransformStack::new()
            .rotate_x(PI / 2.0)
            .scale(5.0, 5.0, 5.0)
            .translate(10.0, 5.0, 7.0)
            .matrix();
        assert_close(stacked * p, translated);
    }

    #[test]
    fn test_empty_stack_is_identity() {
        assert_eq!(TransformStack::default().matrix(), IDENTITY4);
        let shear_only = TransformStack::new().shear(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(shear_only.matrix(), shearing(1.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        let turned = TransformStack::new().rotate_y(PI).rotate_z(PI);
        assert_close(
            turned.matrix() * Point4::position(1.0, 0.0, 0.0),
            Point4::position(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn test_transform3_round_trip() {
        let transform = Transform3::try_from(
            TransformStack::new()
                .scale(2.0, 2.0, 2.0)
                .translate(1.0, -1.0, 3.0),
        )
        .unwrap();
        let p = Point4::position(1.0, 2.0, 3.0);
        let world = transform.to_world(p);
        assert_eq!(world, Point4::position(3.0, 3.0, 9.0));
        assert_close(transform.to_local(world), p);

        let ray = Ray::new(Point4::ORIGIN, Vec4::Z);
        let local = transform / ray;
        assert_close(local.origin(), Point4::position(-0.5, 0.5, -1.5));
        assert_eq!(local.direction(), Vec4::direction(0.0, 0.0, 0.5));
        assert_eq!(transform * local, ray);
    }

    #[test]
    fn test_transform3_composition() {
        let a = Transform3::new(translation(1.0, 2.0, 3.0)).unwrap();
        let b = Transform3::new(scaling(2.0, 2.0, 2.0)).unwrap();
        let composed = a * b;
        let p = Point4::position(1.0, 1.0, 1.0);
        assert_eq!(composed * p, Point4::position(3.0, 4.0, 5.0));
        assert_close(composed / (composed * p), p);
        assert_eq!(Transform3::IDENTITY * p, p);
    }

    #[test]
    fn test_transform3_rejects_singular_matrix() {
        assert_eq!(
            Transform3::new(scaling(0.0, 1.0, 1.0)),
            Err(MathError::DegenerateInverse)
        );
    }
}

use crate::math::error::{check_index, or_panic};
use crate::math::misc::all_approximately_equal;
use crate::math::MathError;

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A direction in N-dimensional space. the homogeneous component of a `Vec4` is 0.
#[derive(Copy, Clone, Debug)]
pub struct Vector<const N: usize>([f32; N]);

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const N: usize> Vector<N> {
    pub const fn from_array(coordinates: [f32; N]) -> Self {
        const { assert!(2 <= N && N <= 4, "vectors are only supported for sizes 2 through 4") };
        Vector(coordinates)
    }
    pub const ZERO: Self = Self::from_array([0.0; N]);

    /// missing trailing coordinates are zero.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        if values.len() > N {
            return Err(MathError::TooManyElements {
                given: values.len(),
                capacity: N,
            });
        }
        let mut coordinates = [0.0; N];
        coordinates[..values.len()].copy_from_slice(values);
        Ok(Self::from_array(coordinates))
    }

    pub const fn as_array(&self) -> [f32; N] {
        self.0
    }

    pub fn try_at(&self, index: usize) -> Result<f32, MathError> {
        check_index(index, N)?;
        Ok(self.0[index])
    }

    #[track_caller]
    pub fn at(&self, index: usize) -> f32 {
        or_panic(self.try_at(index))
    }

    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut f32 {
        or_panic(check_index(index, N));
        &mut self.0[index]
    }

    pub fn x(&self) -> f32 {
        self.0[0]
    }
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    pub fn dot(&self, other: Vector<N>) -> f32 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn norm_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn magnitude(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// a zero vector normalizes to NaNs.
    pub fn normalized(&self) -> Self {
        *self / self.magnitude()
    }

    /// cross product for vectors of any size, only defined when `N == 3`.
    pub fn try_cross(&self, other: Vector<N>) -> Result<Self, MathError> {
        if N != 3 {
            return Err(MathError::UnsupportedOperation(
                "cross product is only implemented for vectors of size 3",
            ));
        }
        let lhs = Vec3::from_slice(&self.0)?;
        let rhs = Vec3::from_slice(&other.0)?;
        Vector::from_slice(&lhs.cross(rhs).0)
    }
}

impl Vector<2> {
    pub const fn new(x: f32, y: f32) -> Self {
        Vector::from_array([x, y])
    }
}

impl Vector<3> {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector::from_array([x, y, z])
    }
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub fn z(&self) -> f32 {
        self.0[2]
    }

    pub fn cross(&self, other: Vec3) -> Self {
        Vec3::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }
}

impl Vector<4> {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector::from_array([x, y, z, w])
    }
    /// homogeneous direction, w = 0.
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Vec4::new(x, y, z, 0.0)
    }
    pub const X: Vec4 = Vec4::direction(1.0, 0.0, 0.0);
    pub const Y: Vec4 = Vec4::direction(0.0, 1.0, 0.0);
    pub const Z: Vec4 = Vec4::direction(0.0, 0.0, 1.0);

    pub fn z(&self) -> f32 {
        self.0[2]
    }
    pub fn w(&self) -> f32 {
        self.0[3]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(coordinates: [f32; N]) -> Self {
        Vector::from_array(coordinates)
    }
}

impl From<Vec3> for Vec4 {
    fn from(v: Vec3) -> Vec4 {
        Vec4::direction(v.x(), v.y(), v.z())
    }
}

impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Self) -> bool {
        all_approximately_equal(&self.0, &other.0)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[track_caller]
    fn index(&self, index: usize) -> &f32 {
        or_panic(check_index(index, N));
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        self.at_mut(index)
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Vector<N>;
    fn add(self, other: Vector<N>) -> Vector<N> {
        Vector(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, other: Vector<N>) {
        *self = *self + other;
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Vector<N>;
    fn neg(self) -> Vector<N> {
        Vector(self.0.map(|c| -c))
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Vector<N>;
    fn sub(self, other: Vector<N>) -> Vector<N> {
        Vector(std::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, other: Vector<N>) {
        *self = *self - other;
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Vector<N>;
    fn mul(self, other: f32) -> Vector<N> {
        Vector(self.0.map(|c| c * other))
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;
    fn mul(self, other: Vector<N>) -> Vector<N> {
        other * self
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, other: f32) {
        *self = *self * other;
    }
}

// no zero check, dividing by 0 gives infinities just like the underlying floats
impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Vector<N>;
    fn div(self, other: f32) -> Vector<N> {
        Vector(self.0.map(|c| c / other))
    }
}

impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, other: f32) {
        *self = *self / other;
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

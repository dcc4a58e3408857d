use crate::math::error::{check_index, or_panic};
use crate::math::misc::all_approximately_equal;
use crate::math::{MathError, Vector};

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

/// A location in N-dimensional space. the homogeneous component of a `Point4` is 1.
#[derive(Copy, Clone, Debug)]
pub struct Point<const N: usize>([f32; N]);

pub type Point2 = Point<2>;
pub type Point3 = Point<3>;
pub type Point4 = Point<4>;

impl<const N: usize> Point<N> {
    pub const fn from_array(coordinates: [f32; N]) -> Self {
        const { assert!(2 <= N && N <= 4, "points are only supported for sizes 2 through 4") };
        Point(coordinates)
    }

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

    /// the coordinates reinterpreted as a displacement from the coordinate origin
    pub fn to_vector(self) -> Vector<N> {
        Vector::from_array(self.0)
    }

    pub fn is_normal(&self) -> bool {
        !self.0.iter().any(|c| c.is_nan() || c.is_infinite())
    }
}

impl Point<2> {
    pub const fn new(x: f32, y: f32) -> Self {
        Point::from_array([x, y])
    }
}

impl Point<3> {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point::from_array([x, y, z])
    }
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub fn z(&self) -> f32 {
        self.0[2]
    }
}

impl Point<4> {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Point::from_array([x, y, z, w])
    }
    /// homogeneous position, w = 1.
    pub const fn position(x: f32, y: f32, z: f32) -> Self {
        Point4::new(x, y, z, 1.0)
    }
    pub const ORIGIN: Point4 = Point4::position(0.0, 0.0, 0.0);

    pub fn z(&self) -> f32 {
        self.0[2]
    }
    pub fn w(&self) -> f32 {
        self.0[3]
    }
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Point::from_array([0.0; N])
    }
}

impl<const N: usize> From<[f32; N]> for Point<N> {
    fn from(coordinates: [f32; N]) -> Self {
        Point::from_array(coordinates)
    }
}

impl From<[f32; 3]> for Point4 {
    fn from(other: [f32; 3]) -> Point4 {
        Point4::position(other[0], other[1], other[2])
    }
}

impl<const N: usize> From<Vector<N>> for Point<N> {
    fn from(v: Vector<N>) -> Point<N> {
        Point::from_array(v.as_array())
    }
}

impl<const N: usize> PartialEq for Point<N> {
    fn eq(&self, other: &Self) -> bool {
        all_approximately_equal(&self.0, &other.0)
    }
}

impl<const N: usize> Index<usize> for Point<N> {
    type Output = f32;
    #[track_caller]
    fn index(&self, index: usize) -> &f32 {
        or_panic(check_index(index, N));
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Point<N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        self.at_mut(index)
    }
}

impl<const N: usize> Add<Vector<N>> for Point<N> {
    type Output = Point<N>;
    fn add(self, other: Vector<N>) -> Point<N> {
        let other = other.as_array();
        Point(std::array::from_fn(|i| self.0[i] + other[i]))
    }
}

impl<const N: usize> Add<Point<N>> for Vector<N> {
    type Output = Point<N>;
    fn add(self, other: Point<N>) -> Point<N> {
        other + self
    }
}

impl<const N: usize> AddAssign<Vector<N>> for Point<N> {
    fn add_assign(&mut self, other: Vector<N>) {
        *self = *self + other;
    }
}

impl<const N: usize> Sub<Vector<N>> for Point<N> {
    type Output = Point<N>;
    fn sub(self, other: Vector<N>) -> Point<N> {
        self + (-other)
    }
}

impl<const N: usize> SubAssign<Vector<N>> for Point<N> {
    fn sub_assign(&mut self, other: Vector<N>) {
        *self = *self - other;
    }
}

// don't implement adding two points, only the difference of two locations is meaningful.
impl<const N: usize> Sub for Point<N> {
    type Output = Vector<N>;
    fn sub(self, other: Point<N>) -> Vector<N> {
        Vector::from_array(std::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl<const N: usize> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

use crate::math::error::{check_index, or_panic};
use crate::math::misc::approximately_equal;
use crate::math::{MathError, Point, Vector};

use paste::paste;
use std::fmt;
use std::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign};

/// Square N x N matrix in row-major order, N from 1 through 4.
#[derive(Copy, Clone, Debug)]
pub struct Matrix<const N: usize>([[f32; N]; N]);

impl<const N: usize> Matrix<N> {
    pub const fn from_rows(rows: [[f32; N]; N]) -> Self {
        const { assert!(1 <= N && N <= 4, "matrices are only supported for sizes 1 through 4") };
        Matrix(rows)
    }

    pub const fn zero() -> Self {
        Self::from_rows([[0.0; N]; N])
    }

    pub const fn identity() -> Self {
        let mut elements = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            elements[i][i] = 1.0;
            i += 1;
        }
        Self::from_rows(elements)
    }

    /// builds a matrix from up to N*N values in row-major order, the rest are zero.
    pub fn from_slice(values: &[f32]) -> Result<Self, MathError> {
        if values.len() > N * N {
            return Err(MathError::TooManyElements {
                given: values.len(),
                capacity: N * N,
            });
        }
        let mut matrix = Self::zero();
        for (index, value) in values.iter().enumerate() {
            matrix.0[index / N][index % N] = *value;
        }
        Ok(matrix)
    }

    pub const fn rows(&self) -> [[f32; N]; N] {
        self.0
    }

    pub fn try_at(&self, row: usize, column: usize) -> Result<f32, MathError> {
        check_index(row, N)?;
        check_index(column, N)?;
        Ok(self.0[row][column])
    }

    pub fn try_at_mut(&mut self, row: usize, column: usize) -> Result<&mut f32, MathError> {
        check_index(row, N)?;
        check_index(column, N)?;
        Ok(&mut self.0[row][column])
    }

    #[track_caller]
    pub fn at(&self, row: usize, column: usize) -> f32 {
        or_panic(self.try_at(row, column))
    }

    #[track_caller]
    pub fn at_mut(&mut self, row: usize, column: usize) -> &mut f32 {
        or_panic(self.try_at_mut(row, column))
    }

    pub fn transpose(mut self) -> Self {
        for row in 0..N {
            for column in (row + 1)..N {
                let tmp = self.0[row][column];
                self.0[row][column] = self.0[column][row];
                self.0[column][row] = tmp;
            }
        }
        self
    }

    // callers guarantee M == N - 1 and both indices are in range.
    fn remove_row_and_column<const M: usize>(&self, row_to_delete: usize, column_to_delete: usize) -> Matrix<M> {
        debug_assert_eq!(M + 1, N);
        let mut result = Matrix::<M>::zero();
        for row in (0..N).filter(|&r| r != row_to_delete) {
            let target_row = if row > row_to_delete { row - 1 } else { row };
            for column in (0..N).filter(|&c| c != column_to_delete) {
                let target_column = if column > column_to_delete {
                    column - 1
                } else {
                    column
                };
                result.0[target_row][target_column] = self.0[row][column];
            }
        }
        result
    }
}

impl Matrix<1> {
    /// base case of the cofactor expansion.
    pub fn determinant(&self) -> f32 {
        self.0[0][0]
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    pub fn inverse(&self) -> Result<Self, MathError> {
        if !self.is_invertible() {
            return Err(MathError::DegenerateInverse);
        }
        Ok(Matrix::from_rows([[1.0 / self.determinant()]]))
    }
}

// determinant -> cofactor -> minor -> submatrix -> determinant of the next size down,
// bottoming out at Matrix<1>.
macro_rules! impl_cofactor_expansion {
    ($($n:literal => $m:literal),+ $(,)?) => {
        $(
            impl Matrix<$n> {
                pub fn try_submatrix(&self, row: usize, column: usize) -> Result<Matrix<$m>, MathError> {
                    check_index(row, $n)?;
                    check_index(column, $n)?;
                    Ok(self.remove_row_and_column::<$m>(row, column))
                }

                /// the matrix with `row` and `column` removed.
                #[track_caller]
                pub fn submatrix(&self, row: usize, column: usize) -> Matrix<$m> {
                    or_panic(self.try_submatrix(row, column))
                }

                #[track_caller]
                pub fn minor(&self, row: usize, column: usize) -> f32 {
                    self.submatrix(row, column).determinant()
                }

                #[track_caller]
                pub fn cofactor(&self, row: usize, column: usize) -> f32 {
                    let minor = self.minor(row, column);
                    if (row + column) % 2 == 1 {
                        -minor
                    } else {
                        minor
                    }
                }

                /// laplace expansion along the first row.
                pub fn determinant(&self) -> f32 {
                    let mut determinant = 0.0;
                    for column in 0..$n {
                        determinant += self.0[0][column] * self.cofactor(0, column);
                    }
                    determinant
                }

                /// exact comparison against zero, no tolerance.
                pub fn is_invertible(&self) -> bool {
                    self.determinant() != 0.0
                }

                /// transposed matrix of cofactors divided by the determinant.
                pub fn inverse(&self) -> Result<Self, MathError> {
                    let determinant = self.determinant();
                    if determinant == 0.0 {
                        return Err(MathError::DegenerateInverse);
                    }
                    let mut cofactors = Self::zero();
                    for row in 0..$n {
                        for column in 0..$n {
                            cofactors.0[row][column] = self.cofactor(row, column);
                        }
                    }
                    Ok(cofactors.transpose() / determinant)
                }
            }
        )+
    };
}

impl_cofactor_expansion!(2 => 1, 3 => 2, 4 => 3);

macro_rules! square_matrix_aliases {
    ($($n:literal),+) => {
        paste! {
            $(
                pub type [<Mat $n>] = Matrix<$n>;
                pub const [<IDENTITY $n>]: [<Mat $n>] = Matrix::<$n>::identity();
            )+
        }
    };
}

square_matrix_aliases!(1, 2, 3, 4);

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> PartialEq for Matrix<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(&a, &b)| approximately_equal(a, b))
    }
}

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;
    #[track_caller]
    fn index(&self, (row, column): (usize, usize)) -> &f32 {
        or_panic(check_index(row, N).and(check_index(column, N)));
        &self.0[row][column]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[track_caller]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut f32 {
        self.at_mut(row, column)
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Matrix<N>;
    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        let mut result = Self::zero();
        for row in 0..N {
            for column in 0..N {
                for k in 0..N {
                    result.0[row][column] += self.0[row][k] * rhs.0[k][column];
                }
            }
        }
        result
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    fn mul_assign(&mut self, rhs: Matrix<N>) {
        *self = *self * rhs;
    }
}

impl<const N: usize> Matrix<N> {
    // the homogeneous coordinate is treated like any other row
    fn apply(&self, coordinates: [f32; N]) -> [f32; N] {
        let mut result = [0.0; N];
        for row in 0..N {
            for k in 0..N {
                result[row] += self.0[row][k] * coordinates[k];
            }
        }
        result
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Self::Output {
        Vector::from_array(self.apply(rhs.as_array()))
    }
}

impl<const N: usize> Mul<Point<N>> for Matrix<N> {
    type Output = Point<N>;
    fn mul(self, rhs: Point<N>) -> Self::Output {
        Point::from_array(self.apply(rhs.as_array()))
    }
}

impl<const N: usize> Div<f32> for Matrix<N> {
    type Output = Matrix<N>;
    fn div(mut self, rhs: f32) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<const N: usize> DivAssign<f32> for Matrix<N> {
    fn div_assign(&mut self, rhs: f32) {
        for element in self.0.iter_mut().flatten() {
            *element /= rhs;
        }
    }
}

impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            write!(f, "|")?;
            for element in row {
                write!(f, "{} ", element)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

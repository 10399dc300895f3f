use super::{approx_eq, round_to, ApproxEq, MathError, Point3, Vec3};

use nalgebra::{DMatrix, Matrix4, Vector4};

use std::ops::{Index, Mul};

/// Row-major 4x4 affine matrix. Equality is approximate, within `EPSILON` per element.
#[derive(Debug, Copy, Clone)]
pub struct Matrix4x4(pub Matrix4<f64>);

impl Matrix4x4 {
    pub fn new(rows: [[f64; 4]; 4]) -> Self {
        Matrix4x4(Matrix4::from_fn(|r, c| rows[r][c]))
    }

    pub fn identity() -> Self {
        Matrix4x4(Matrix4::identity())
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = x;
        m[(1, 3)] = y;
        m[(2, 3)] = z;
        Matrix4x4(m)
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = x;
        m[(1, 1)] = y;
        m[(2, 2)] = z;
        Matrix4x4(m)
    }

    // rotations are right handed, angle in radians.
    pub fn rotation_x(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = cos;
        m[(1, 2)] = -sin;
        m[(2, 1)] = sin;
        m[(2, 2)] = cos;
        Matrix4x4(m)
    }

    pub fn rotation_y(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = cos;
        m[(0, 2)] = sin;
        m[(2, 0)] = -sin;
        m[(2, 2)] = cos;
        Matrix4x4(m)
    }

    pub fn rotation_z(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = cos;
        m[(0, 1)] = -sin;
        m[(1, 0)] = sin;
        m[(1, 1)] = cos;
        Matrix4x4(m)
    }

    /// Each coefficient moves one coordinate in proportion to another, e.g. `xy` moves x by y.
    pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 1)] = xy;
        m[(0, 2)] = xz;
        m[(1, 0)] = yx;
        m[(1, 2)] = yz;
        m[(2, 0)] = zx;
        m[(2, 1)] = zy;
        Matrix4x4(m)
    }

    /// World to camera transform for an eye at `from` looking at `to`.
    ///
    /// Panics if `from == to` or `up` is parallel to the view direction.
    pub fn view_transform(from: Point3, to: Point3, up: Vec3) -> Self {
        let forward = (to - from).normalized();
        let left = forward.cross(up.normalized());
        let true_up = left.cross(forward);
        let orientation = Matrix4x4::new([
            [left.x, left.y, left.z, 0.0],
            [true_up.x, true_up.y, true_up.z, 0.0],
            [-forward.x, -forward.y, -forward.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        orientation * Matrix4x4::translation(-from.x, -from.y, -from.z)
    }

    pub fn transpose(&self) -> Self {
        Matrix4x4(self.0.transpose())
    }

    /// Cofactor expansion along the first row, rounded to 5 decimals.
    pub fn determinant(&self) -> f64 {
        let dynamic = DMatrix::from_fn(4, 4, |r, c| self.0[(r, c)]);
        round_to(cofactor_determinant(&dynamic), 5)
    }

    /// Singular only when the exact determinant is zero. The rounded one is what gets reported.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        let dynamic = DMatrix::from_fn(4, 4, |r, c| self.0[(r, c)]);
        let exact = cofactor_determinant(&dynamic);
        let singular = MathError::SingularMatrix {
            determinant: round_to(exact, 5),
        };
        if exact == 0.0 || !exact.is_finite() {
            return Err(singular);
        }
        self.0.try_inverse().map(Matrix4x4).ok_or(singular)
    }

    /// Panics on a singular matrix; every transform handed to the renderer must be invertible.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(inverse) => inverse,
            Err(e) => panic!("{}: {:?}", e, self.0),
        }
    }
}

fn cofactor_determinant(m: &DMatrix<f64>) -> f64 {
    match m.nrows() {
        1 => m[(0, 0)],
        2 => m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
        n => (0..n)
            .map(|col| {
                let minor = cofactor_determinant(&m.clone().remove_row(0).remove_column(col));
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                m[(0, col)] * sign * minor
            })
            .sum(),
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::identity()
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f64;
    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

impl ApproxEq for Matrix4x4 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| approx_eq(*a, *b))
    }
}

impl PartialEq for Matrix4x4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;
    fn mul(self, rhs: Matrix4x4) -> Self::Output {
        Matrix4x4(self.0 * rhs.0)
    }
}

impl Mul<Point3> for Matrix4x4 {
    type Output = Point3;
    fn mul(self, rhs: Point3) -> Self::Output {
        let result = self.0 * Vector4::new(rhs.x, rhs.y, rhs.z, 1.0);
        Point3::new(result[0], result[1], result[2])
    }
}

impl Mul<Vec3> for Matrix4x4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        // w = 0, so translation never applies and the resulting w is dropped.
        let result = self.0 * Vector4::new(rhs.x, rhs.y, rhs.z, 0.0);
        Vec3::new(result[0], result[1], result[2])
    }
}

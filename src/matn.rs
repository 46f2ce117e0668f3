//a Imports
use serde::{Deserialize, Serialize};

use super::{matrix, transform, vector};
use super::{Float, Num, VecN};

//a Macros
//mi binary_op!
macro_rules! binary_op {
    { op_self, $t:ident, $trait_op:ident, $op:ident, $binop:tt, $trait_assign_op:ident, $assign_op:ident, $assign_binop:tt } => {
        impl <T:Num, const D:usize> std::ops::$trait_op<Self> for $t<T, D> {
            type Output = Self;
            fn $op(self, other: Self) -> Self {
                let mut data = [[T::zero();D];D];
                for c in 0..D {
                    for r in 0..D {
                        data[c][r] = self.data[c][r] $binop other.data[c][r];
                    }
                }
                Self { data }
            }
        }
        impl <T:Num, const D:usize> std::ops::$trait_assign_op<Self> for $t<T, D> {
            fn $assign_op(&mut self, other: Self) {
                for c in 0..D {
                    for r in 0..D {self.data[c][r] $assign_binop other.data[c][r];}
                }
            }
        }
    };
    { op_t, $t:ident, $trait_op:ident, $op:ident, $binop:tt, $trait_assign_op:ident, $assign_op:ident, $assign_binop:tt } => {
        impl <T:Num, const D:usize> std::ops::$trait_op<T> for $t<T, D> {
            type Output = Self;
            fn $op(self, other: T) -> Self {
                let mut data = [[T::zero();D];D];
                for c in 0..D {
                    for r in 0..D {
                        data[c][r] = self.data[c][r] $binop other;
                    }
                }
                Self { data }
            }
        }
        impl <T:Num, const D:usize> std::ops::$trait_assign_op<T> for $t<T, D> {
            fn $assign_op(&mut self, other: T) {
                for c in 0..D {
                    for r in 0..D {self.data[c][r] $assign_binop other;}
                }
            }
        }
    };
}

//a MatN
//tp MatN
/// The [MatN] is a column-major square matrix over [Num] elements,
/// stored as `D` column arrays of `D` scalars.
///
/// `m[c]` is column c as a `[T; D]`, and `m[c][r]` addresses the
/// scalar at column c, row r; literal construction is column-first
/// throughout. The matrix product and matrix-vector product follow
/// the usual linear-algebra convention with column vectors.
#[derive(Clone, Copy, Debug)]
pub struct MatN<T: Num, const D: usize> {
    data: [[T; D]; D],
}

//ip Serialize for MatN
impl<T: Num + serde::Serialize, const D: usize> Serialize for MatN<T, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut seq = serializer.serialize_tuple(D * D)?;
        for c in self.data.iter() {
            for e in c.iter() {
                seq.serialize_element(e)?;
            }
        }
        seq.end()
    }
}

//ip Deserialize for MatN
impl<'de, T: Num + serde::Deserialize<'de>, const D: usize> Deserialize<'de> for MatN<T, D> {
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
        DE: serde::Deserializer<'de>,
    {
        let array = Vec::<T>::deserialize(deserializer)?;
        if array.len() != D * D {
            return Err(serde::de::Error::invalid_length(
                array.len(),
                &"<D>*<D> scalars",
            ));
        }
        let mut m = Self::zero();
        for (i, d) in array.into_iter().enumerate() {
            m.data[i / D][i % D] = d;
        }
        Ok(m)
    }
}

//ip MatN operators
binary_op! { op_self, MatN, Add, add, +, AddAssign, add_assign, += }
binary_op! { op_self, MatN, Sub, sub, -, SubAssign, sub_assign, -= }
binary_op! { op_t, MatN, Mul, mul, *, MulAssign, mul_assign, *= }
binary_op! { op_t, MatN, Div, div, /, DivAssign, div_assign, /= }

//ip Index for MatN - a column of the matrix
impl<T: Num, const D: usize> std::ops::Index<usize> for MatN<T, D> {
    type Output = [T; D];
    fn index(&self, col: usize) -> &[T; D] {
        &self.data[col]
    }
}
impl<T: Num, const D: usize> std::ops::IndexMut<usize> for MatN<T, D> {
    fn index_mut(&mut self, col: usize) -> &mut [T; D] {
        &mut self.data[col]
    }
}

//ip Neg for MatN
impl<T: Num + std::ops::Neg<Output = T>, const D: usize> std::ops::Neg for MatN<T, D> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for c in self.data.iter_mut() {
            for d in c.iter_mut() {
                *d = -*d;
            }
        }
        self
    }
}

//ip Mul<Self> for MatN - the matrix product
impl<T: Num, const D: usize> std::ops::Mul<Self> for MatN<T, D> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self {
            data: matrix::multiply(&self.data, &other.data),
        }
    }
}

//ip MulAssign<Self> for MatN
impl<T: Num, const D: usize> std::ops::MulAssign<Self> for MatN<T, D> {
    fn mul_assign(&mut self, other: Self) {
        self.data = matrix::multiply(&self.data, &other.data);
    }
}

//ip Mul<VecN> for MatN - apply to a column vector
impl<T: Num, const D: usize> std::ops::Mul<VecN<T, D>> for MatN<T, D> {
    type Output = VecN<T, D>;
    fn mul(self, v: VecN<T, D>) -> VecN<T, D> {
        matrix::transform(&self.data, v.as_ref()).into()
    }
}

//ip Mul<MatN> for VecN - a row vector times the matrix
impl<T: Num, const D: usize> std::ops::Mul<MatN<T, D>> for VecN<T, D> {
    type Output = VecN<T, D>;
    fn mul(self, m: MatN<T, D>) -> VecN<T, D> {
        matrix::transform_row(self.as_ref(), &m.data).into()
    }
}

//ip Default for MatN
impl<T: Num, const D: usize> std::default::Default for MatN<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

//ip Display for MatN
impl<T: Num, const D: usize> std::fmt::Display for MatN<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        matrix::fmt(f, &self.data)
    }
}

//ip From<[[T;D];D]> for MatN
impl<T: Num, const D: usize> From<[[T; D]; D]> for MatN<T, D> {
    fn from(data: [[T; D]; D]) -> Self {
        Self { data }
    }
}

//ip From<MatN> for [[T;D];D]
impl<T: Num, const D: usize> From<MatN<T, D>> for [[T; D]; D] {
    fn from(s: MatN<T, D>) -> [[T; D]; D] {
        s.data
    }
}

//ip MatN
impl<T: Num, const D: usize> MatN<T, D> {
    //fp from_cols
    /// Create a matrix from an array of column arrays
    #[must_use]
    #[inline]
    pub fn from_cols(data: [[T; D]; D]) -> Self {
        Self { data }
    }

    //fp zero
    /// Create a zero matrix
    #[must_use]
    pub fn zero() -> Self {
        Self {
            data: matrix::zero(),
        }
    }

    //fp diagonal
    /// Create a matrix with the given value down the diagonal and
    /// zeros elsewhere; the identity when the value is one
    #[must_use]
    pub fn diagonal(s: T) -> Self {
        Self {
            data: matrix::diagonal(s),
        }
    }

    //fp identity
    /// Create an identity matrix
    #[must_use]
    pub fn identity() -> Self {
        Self {
            data: matrix::identity(),
        }
    }

    //mp into_cols
    /// Take the matrix apart into its column arrays
    #[must_use]
    #[inline]
    pub fn into_cols(self) -> [[T; D]; D] {
        self.data
    }

    //mp col
    /// Column c as a vector
    #[must_use]
    pub fn col(&self, c: usize) -> VecN<T, D> {
        self.data[c].into()
    }

    //mp set_col
    /// Replace column c
    pub fn set_col(&mut self, c: usize, v: &VecN<T, D>) {
        self.data[c] = *v.as_ref();
    }

    //mp is_zero
    /// Return true if the matrix is all zeros
    pub fn is_zero(&self) -> bool {
        for c in &self.data {
            if !vector::is_zero(c) {
                return false;
            }
        }
        true
    }

    //mp transpose
    /// Return the transpose matrix
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            data: matrix::transpose(&self.data),
        }
    }

    //mp transform
    /// Apply the matrix to a column vector
    #[must_use]
    pub fn transform(&self, v: &VecN<T, D>) -> VecN<T, D> {
        matrix::transform(&self.data, v.as_ref()).into()
    }

    //mp comp_mult
    /// Hadamard (component-wise) product with another matrix
    #[must_use]
    pub fn comp_mult(&self, other: &Self) -> Self {
        Self {
            data: matrix::comp_mult(&self.data, &other.data),
        }
    }

    //fp outer_product
    /// The rank-1 matrix c * transpose(r) of two vectors
    #[must_use]
    pub fn outer_product(c: &VecN<T, D>, r: &VecN<T, D>) -> Self {
        Self {
            data: matrix::outer_product(c.as_ref(), r.as_ref()),
        }
    }

    //mp equal
    /// Per-column comparison with another matrix; a column's bool is
    /// set when every component of the column matches
    pub fn equal(&self, other: &Self) -> [bool; D] {
        matrix::equal(&self.data, &other.data)
    }

    //mp not_equal
    /// Per-column complement of [MatN::equal]
    pub fn not_equal(&self, other: &Self) -> [bool; D] {
        matrix::not_equal(&self.data, &other.data)
    }
}

//ip MatN<Float>
impl<T: Float, const D: usize> MatN<T, D> {
    //mp equal_eps
    /// Per-column comparison within an absolute epsilon
    pub fn equal_eps(&self, other: &Self, epsilon: T) -> [bool; D] {
        matrix::equal_eps(&self.data, &other.data, epsilon)
    }

    //mp equal_ulps
    /// Per-column comparison within a bit-distance tolerance
    pub fn equal_ulps(&self, other: &Self, ulps: i32) -> [bool; D] {
        matrix::equal_ulps(&self.data, &other.data, ulps)
    }

    //mp mix
    /// Linear blend of this matrix toward another
    #[must_use]
    pub fn mix(&self, other: &Self, t: T) -> Self {
        Self {
            data: matrix::mix(&self.data, &other.data, t),
        }
    }
}

//ip MatN<T, 3>
impl<T: Num> MatN<T, 3> {
    //fp from_mat4
    /// The upper-left 3x3 of a 4x4 matrix
    #[must_use]
    pub fn from_mat4(m: &MatN<T, 4>) -> Self {
        Self {
            data: matrix::to_mat3(&m.data),
        }
    }
}

//ip MatN<Float, 3>
impl<T: Float> MatN<T, 3> {
    //mp determinant
    /// The determinant, by cofactor expansion
    pub fn determinant(&self) -> T {
        matrix::determinant3(&self.data)
    }

    //mp inverse
    /// The inverse as adjugate over determinant; singular input
    /// yields infinite or NaN entries
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            data: matrix::inverse3(&self.data),
        }
    }
}

//ip MatN<T, 4>
impl<T: Num> MatN<T, 4> {
    //fp from_mat3
    /// Embed a 3x3 matrix, padding with the identity row and column
    #[must_use]
    pub fn from_mat3(m: &MatN<T, 3>) -> Self {
        Self {
            data: matrix::from_mat3(&m.data),
        }
    }
}

//ip MatN<Float, 4>
impl<T: Float> MatN<T, 4> {
    //mp determinant
    /// The determinant, by expansion over 2x2 minors
    pub fn determinant(&self) -> T {
        matrix::determinant4(&self.data)
    }

    //mp inverse
    /// The inverse as adjugate over determinant; singular input
    /// yields infinite or NaN entries
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            data: matrix::inverse4(&self.data),
        }
    }

    //fp look_at
    /// The view matrix of a camera at eye looking at center with the
    /// given up direction
    #[must_use]
    pub fn look_at(eye: &VecN<T, 3>, center: &VecN<T, 3>, up: &VecN<T, 3>) -> Self {
        Self {
            data: transform::look_at(eye.as_ref(), center.as_ref(), up.as_ref()),
        }
    }

    //fp perspective
    /// A symmetric perspective projection, depth in [0, 1]
    #[must_use]
    pub fn perspective(fov_y: T, aspect: T, z_near: T, z_far: T) -> Self {
        Self {
            data: transform::perspective(fov_y, aspect, z_near, z_far),
        }
    }

    //fp translation
    /// The translation matrix for a vector
    #[must_use]
    pub fn translation(v: &VecN<T, 3>) -> Self {
        Self {
            data: transform::translation(v.as_ref()),
        }
    }

    //mp translate
    /// Postmultiply by the translation for a vector
    #[must_use]
    pub fn translate(&self, v: &VecN<T, 3>) -> Self {
        Self {
            data: transform::translate(&self.data, v.as_ref()),
        }
    }
}

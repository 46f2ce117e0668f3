/*a Copyright

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

  http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.

@file    matrix_op.rs
@brief   Square matrix operations - part of graphics math library
 */

//a Imports
use crate::vector_op as vector;
use crate::{Float, Num};

//a Notes on layout
// A matrix is an array of D column vectors, each a [V; D]; m[c][r]
// addresses column c, row r. Literal constructors therefore list
// their scalars column-first, and m * v treats v as a column vector.

//a Constructors
//fp zero
/// Create a zero matrix
pub fn zero<V: Num, const D: usize>() -> [[V; D]; D] {
    [[V::zero(); D]; D]
}

//fp diagonal
/// Create a matrix with the given value on the diagonal, zeros
/// elsewhere; the multiplicative identity when the value is one
pub fn diagonal<V: Num, const D: usize>(s: V) -> [[V; D]; D] {
    let mut m = zero();
    for i in 0..D {
        m[i][i] = s;
    }
    m
}

//fp identity
/// Create an identity matrix
///
/// # Example
///
/// ```
/// use gfx_nd::matrix;
/// let i = matrix::identity::<f32, 3>();
/// assert_eq!( i, [[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]] );
/// ```
pub fn identity<V: Num, const D: usize>() -> [[V; D]; D] {
    diagonal(V::one())
}

//fp from_mat3
/// Embed a 3x3 matrix in the upper-left of a 4x4, padding with the
/// identity row and column
pub fn from_mat3<V: Num>(m: &[[V; 3]; 3]) -> [[V; 4]; 4] {
    let mut r = identity();
    for c in 0..3 {
        for j in 0..3 {
            r[c][j] = m[c][j];
        }
    }
    r
}

//fp to_mat3
/// Take the upper-left 3x3 of a 4x4 matrix
pub fn to_mat3<V: Num>(m: &[[V; 4]; 4]) -> [[V; 3]; 3] {
    let mut r = zero();
    for c in 0..3 {
        for j in 0..3 {
            r[c][j] = m[c][j];
        }
    }
    r
}

//a Combinations
//cp transpose
/// Swap rows and columns
///
/// # Example
///
/// ```
/// use gfx_nd::matrix;
/// let m = [[1., 2.], [3., 4.]];
/// assert_eq!( matrix::transpose(&m), [[1., 3.], [2., 4.]] );
/// ```
pub fn transpose<V: Num, const D: usize>(m: &[[V; D]; D]) -> [[V; D]; D] {
    let mut r = zero();
    for c in 0..D {
        for j in 0..D {
            r[c][j] = m[j][c];
        }
    }
    r
}

//cp multiply
/// Multiply two matrices; column j of the result is a applied to
/// column j of b
pub fn multiply<V: Num, const D: usize>(a: &[[V; D]; D], b: &[[V; D]; D]) -> [[V; D]; D] {
    let mut m = zero();
    for c in 0..D {
        for r in 0..D {
            let mut v = V::zero();
            for x in 0..D {
                v = v + a[x][r] * b[c][x];
            }
            m[c][r] = v;
        }
    }
    m
}

//cp transform
/// Apply the matrix to a column vector
pub fn transform<V: Num, const D: usize>(m: &[[V; D]; D], v: &[V; D]) -> [V; D] {
    let mut r = vector::zero();
    for row in 0..D {
        let mut s = V::zero();
        for x in 0..D {
            s = s + m[x][row] * v[x];
        }
        r[row] = s;
    }
    r
}

//cp transform_row
/// Apply the matrix to a row vector on its left; equivalent to
/// transforming by the transpose
pub fn transform_row<V: Num, const D: usize>(v: &[V; D], m: &[[V; D]; D]) -> [V; D] {
    let mut r = vector::zero();
    for c in 0..D {
        r[c] = vector::dot(v, &m[c]);
    }
    r
}

//cp comp_mult
/// Hadamard (component-wise) product of two matrices
pub fn comp_mult<V: Num, const D: usize>(a: &[[V; D]; D], b: &[[V; D]; D]) -> [[V; D]; D] {
    let mut m = zero();
    for c in 0..D {
        m[c] = vector::comp_mult(a[c], &b[c]);
    }
    m
}

//cp outer_product
/// The rank-1 matrix with entries c[i]*r[j] at column j, row i
pub fn outer_product<V: Num, const D: usize>(c: &[V; D], r: &[V; D]) -> [[V; D]; D] {
    let mut m = zero();
    for j in 0..D {
        m[j] = vector::scale(*c, r[j]);
    }
    m
}

//a Determinants and inverses
//fp determinant3
/// Find the determinant of a 3x3 matrix by cofactor expansion along
/// the first column
pub fn determinant3<V: Num + std::ops::Neg<Output = V>>(m: &[[V; 3]; 3]) -> V {
    m[0][0] * (m[1][1] * m[2][2] - m[2][1] * m[1][2])
        - m[1][0] * (m[0][1] * m[2][2] - m[2][1] * m[0][2])
        + m[2][0] * (m[0][1] * m[1][2] - m[1][1] * m[0][2])
}

//fp inverse3
/// Find the inverse of a 3x3 matrix as the adjugate over the
/// determinant
///
/// A singular matrix divides by zero and so yields infinite or NaN
/// entries; the caller pre-checks the determinant if that matters.
///
/// # Example
///
/// ```
/// use gfx_nd::{matrix, vector};
/// let m = [[1., 3., 2.], [0., 2., 3.], [-1., 2., 3.]];
/// let mi = matrix::inverse3(&m);
/// let i = matrix::multiply(&mi, &m);
/// for c in 0..3 {
///     assert!( vector::distance(&i[c], &matrix::identity::<f64, 3>()[c]) < 1e-8 );
/// }
/// ```
pub fn inverse3<V: Float>(m: &[[V; 3]; 3]) -> [[V; 3]; 3] {
    let r_d = V::one() / determinant3(m);
    let mut r = zero();
    r[0][0] = (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * r_d;
    r[1][0] = -(m[1][0] * m[2][2] - m[2][0] * m[1][2]) * r_d;
    r[2][0] = (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * r_d;
    r[0][1] = -(m[0][1] * m[2][2] - m[2][1] * m[0][2]) * r_d;
    r[1][1] = (m[0][0] * m[2][2] - m[2][0] * m[0][2]) * r_d;
    r[2][1] = -(m[0][0] * m[2][1] - m[2][0] * m[0][1]) * r_d;
    r[0][2] = (m[0][1] * m[1][2] - m[1][1] * m[0][2]) * r_d;
    r[1][2] = -(m[0][0] * m[1][2] - m[1][0] * m[0][2]) * r_d;
    r[2][2] = (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * r_d;
    r
}

//fp determinant4
/// Find the determinant of a 4x4 matrix by expansion over 2x2 minors
pub fn determinant4<V: Num + std::ops::Neg<Output = V>>(m: &[[V; 4]; 4]) -> V {
    let sub00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
    let sub01 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
    let sub02 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
    let sub03 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
    let sub04 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
    let sub05 = m[2][0] * m[3][1] - m[3][0] * m[2][1];

    let cof0 = m[1][1] * sub00 - m[1][2] * sub01 + m[1][3] * sub02;
    let cof1 = -(m[1][0] * sub00 - m[1][2] * sub03 + m[1][3] * sub04);
    let cof2 = m[1][0] * sub01 - m[1][1] * sub03 + m[1][3] * sub05;
    let cof3 = -(m[1][0] * sub02 - m[1][1] * sub04 + m[1][2] * sub05);

    m[0][0] * cof0 + m[0][1] * cof1 + m[0][2] * cof2 + m[0][3] * cof3
}

//fp inverse4
/// Find the inverse of a 4x4 matrix as the adjugate over the
/// determinant; singular input yields infinite or NaN entries
pub fn inverse4<V: Float>(m: &[[V; 4]; 4]) -> [[V; 4]; 4] {
    let coef00 = m[2][2] * m[3][3] - m[3][2] * m[2][3];
    let coef02 = m[1][2] * m[3][3] - m[3][2] * m[1][3];
    let coef03 = m[1][2] * m[2][3] - m[2][2] * m[1][3];
    let coef04 = m[2][1] * m[3][3] - m[3][1] * m[2][3];
    let coef06 = m[1][1] * m[3][3] - m[3][1] * m[1][3];
    let coef07 = m[1][1] * m[2][3] - m[2][1] * m[1][3];
    let coef08 = m[2][1] * m[3][2] - m[3][1] * m[2][2];
    let coef10 = m[1][1] * m[3][2] - m[3][1] * m[1][2];
    let coef11 = m[1][1] * m[2][2] - m[2][1] * m[1][2];
    let coef12 = m[2][0] * m[3][3] - m[3][0] * m[2][3];
    let coef14 = m[1][0] * m[3][3] - m[3][0] * m[1][3];
    let coef15 = m[1][0] * m[2][3] - m[2][0] * m[1][3];
    let coef16 = m[2][0] * m[3][2] - m[3][0] * m[2][2];
    let coef18 = m[1][0] * m[3][2] - m[3][0] * m[1][2];
    let coef19 = m[1][0] * m[2][2] - m[2][0] * m[1][2];
    let coef20 = m[2][0] * m[3][1] - m[3][0] * m[2][1];
    let coef22 = m[1][0] * m[3][1] - m[3][0] * m[1][1];
    let coef23 = m[1][0] * m[2][1] - m[2][0] * m[1][1];

    let fac0 = [coef00, coef00, coef02, coef03];
    let fac1 = [coef04, coef04, coef06, coef07];
    let fac2 = [coef08, coef08, coef10, coef11];
    let fac3 = [coef12, coef12, coef14, coef15];
    let fac4 = [coef16, coef16, coef18, coef19];
    let fac5 = [coef20, coef20, coef22, coef23];

    let vec0 = [m[1][0], m[0][0], m[0][0], m[0][0]];
    let vec1 = [m[1][1], m[0][1], m[0][1], m[0][1]];
    let vec2 = [m[1][2], m[0][2], m[0][2], m[0][2]];
    let vec3 = [m[1][3], m[0][3], m[0][3], m[0][3]];

    let inv0 = vector::add(
        vector::sub(vector::comp_mult(vec1, &fac0), &vector::comp_mult(vec2, &fac1), V::one()),
        &vector::comp_mult(vec3, &fac2),
        V::one(),
    );
    let inv1 = vector::add(
        vector::sub(vector::comp_mult(vec0, &fac0), &vector::comp_mult(vec2, &fac3), V::one()),
        &vector::comp_mult(vec3, &fac4),
        V::one(),
    );
    let inv2 = vector::add(
        vector::sub(vector::comp_mult(vec0, &fac1), &vector::comp_mult(vec1, &fac3), V::one()),
        &vector::comp_mult(vec3, &fac5),
        V::one(),
    );
    let inv3 = vector::add(
        vector::sub(vector::comp_mult(vec0, &fac2), &vector::comp_mult(vec1, &fac4), V::one()),
        &vector::comp_mult(vec2, &fac5),
        V::one(),
    );

    let sign_a = [V::one(), -V::one(), V::one(), -V::one()];
    let sign_b = [-V::one(), V::one(), -V::one(), V::one()];
    let inverse = [
        vector::comp_mult(inv0, &sign_a),
        vector::comp_mult(inv1, &sign_b),
        vector::comp_mult(inv2, &sign_a),
        vector::comp_mult(inv3, &sign_b),
    ];

    let row0 = [inverse[0][0], inverse[1][0], inverse[2][0], inverse[3][0]];
    let r_d = V::one() / vector::dot(&m[0], &row0);

    let mut r = inverse;
    for c in &mut r {
        *c = vector::scale(*c, r_d);
    }
    r
}

//a Comparisons
//fp equal
/// Per-column comparison; a column matches when every one of its
/// components is equal
pub fn equal<V: Num, const D: usize>(a: &[[V; D]; D], b: &[[V; D]; D]) -> [bool; D] {
    let mut r = [false; D];
    for c in 0..D {
        r[c] = vector::all(&vector::equal(&a[c], &b[c]));
    }
    r
}

//fp not_equal
/// Per-column complement of [equal]
pub fn not_equal<V: Num, const D: usize>(a: &[[V; D]; D], b: &[[V; D]; D]) -> [bool; D] {
    vector::not(&equal(a, b))
}

//fp equal_eps
/// Per-column comparison within an absolute scalar epsilon
pub fn equal_eps<V: Float, const D: usize>(
    a: &[[V; D]; D],
    b: &[[V; D]; D],
    epsilon: V,
) -> [bool; D] {
    let mut r = [false; D];
    for c in 0..D {
        r[c] = vector::all(&vector::equal_eps(&a[c], &b[c], epsilon));
    }
    r
}

//fp equal_eps_vec
/// Per-column comparison with one epsilon per column
pub fn equal_eps_vec<V: Float, const D: usize>(
    a: &[[V; D]; D],
    b: &[[V; D]; D],
    epsilon: &[V; D],
) -> [bool; D] {
    let mut r = [false; D];
    for c in 0..D {
        r[c] = vector::all(&vector::equal_eps(&a[c], &b[c], epsilon[c]));
    }
    r
}

//fp not_equal_eps
/// Per-column complement of [equal_eps]
pub fn not_equal_eps<V: Float, const D: usize>(
    a: &[[V; D]; D],
    b: &[[V; D]; D],
    epsilon: V,
) -> [bool; D] {
    vector::not(&equal_eps(a, b, epsilon))
}

//fp equal_ulps
/// Per-column comparison within a bit-distance tolerance
pub fn equal_ulps<V: Float, const D: usize>(
    a: &[[V; D]; D],
    b: &[[V; D]; D],
    ulps: i32,
) -> [bool; D] {
    let mut r = [false; D];
    for c in 0..D {
        r[c] = vector::all(&vector::equal_ulps(&a[c], &b[c], ulps));
    }
    r
}

//fp not_equal_ulps
/// Per-column complement of [equal_ulps]
pub fn not_equal_ulps<V: Float, const D: usize>(
    a: &[[V; D]; D],
    b: &[[V; D]; D],
    ulps: i32,
) -> [bool; D] {
    vector::not(&equal_ulps(a, b, ulps))
}

//a Component-wise interpolation
//cp mix
/// Linear blend of two matrices by a scalar parameter
pub fn mix<V: Float, const D: usize>(a: &[[V; D]; D], b: &[[V; D]; D], t: V) -> [[V; D]; D] {
    let mut m = zero();
    for c in 0..D {
        m[c] = vector::mix(&a[c], &b[c], t);
    }
    m
}

//cp mix_mat
/// Component-wise blend of two matrices by a matrix of parameters
pub fn mix_mat<V: Float, const D: usize>(
    a: &[[V; D]; D],
    b: &[[V; D]; D],
    t: &[[V; D]; D],
) -> [[V; D]; D] {
    let mut m = zero();
    for c in 0..D {
        m[c] = vector::mix_vec(&a[c], &b[c], &t[c]);
    }
    m
}

//a Formatting
//mp fmt - format a matrix for display
/// Format the matrix for display, one column per group
///
/// # Example
///
/// ```
/// use gfx_nd::matrix;
/// struct Mat { c : [[f32; 2]; 2] }
/// impl std::fmt::Display for Mat {
///   fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result { matrix::fmt(f, &self.c) }
/// }
/// assert_eq!( format!("{}", &Mat{c:[[0., 1.], [2., 3.]]} ), "[0,1 2,3]" );
/// ```
pub fn fmt<V: Num, const D: usize>(f: &mut std::fmt::Formatter, m: &[[V; D]; D]) -> std::fmt::Result {
    for c in 0..D {
        for r in 0..D {
            if c == 0 && r == 0 {
                write!(f, "[{}", m[c][r])?;
            } else if r == 0 {
                write!(f, " {}", m[c][r])?;
            } else {
                write!(f, ",{}", m[c][r])?;
            }
        }
    }
    write!(f, "]")
}

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

@file    lib.rs
@brief   Graphics math library
 */

//a Documentation
#![warn(missing_docs)]
/*!

# Graphics math library

This library provides the fixed-size numeric aggregates of real-time
graphics code - vectors of length 2, 3 and 4, square column-major
matrices of order 3 and 4, and rotation quaternions - together with a
GLSL-flavoured scalar function library (rounding, interpolation,
trigonometry, comparisons with epsilon and ULP tolerances), graphics
constructors (perspective and orthographic projections in the Vulkan
depth convention including the reverse-Z forms, look-at, the
translate/rotate/scale family, matrix decomposition), and classic
Perlin noise.

The underlying type of a vector is \[Num; N\] and of a matrix
\[\[Num; N\]; N\] (an array of columns), so the data may be shared
simply with other libraries, including Vulkan and OpenGL.

Everything is a pure function on small value types: no allocation, no
shared state, no threads. Domain errors follow IEEE-754 - a singular
matrix inverse or a zero-vector normalization yields NaN or infinite
components rather than an error value - with the one exception of
[transform::decompose], which returns an `Option` because callers
genuinely branch on its failure.

The library operates on elements that support the [`Num`](Num) trait,
which requires basic arithmetic operations, copy, clone, debug and
display; some functions further require the [`Float`](Float) trait,
which also requires operations such as sqrt, sin/cos, etc, and others
the [`Int`](Int) trait for the bit-twiddling operations.

# Function operation

The functions for each family are provided in the [scalar], [vector],
[matrix], [quat], [transform] and [noise] modules, operating on bare
arrays.

## Basic operation

```
use gfx_nd::vector;
let y = [0., 1.];
let x = [1., 0.];
assert_eq!( vector::dot(&x, &y), 0., "Dot product of X and Y axis vectors is zero");
let xy = vector::add(x, &y, 2.);
assert_eq!( xy, [1., 2.], "x + 2*y");
assert_eq!( vector::length_sq(&xy), (5.), "|x + 2*y|^2 = 5");
assert_eq!( vector::length(&xy), (5.0f64).sqrt(), "|x + 2*y| = sqrt(5)");
```

# Provided types

The [VecN], [MatN] and [Quat] types wrap the bare arrays with
operators and methods; this is perhaps the simplest way to use the
library.

Vectors support negation, addition, subtraction, and component-wise
multiplication and division, against both another vector and their
scalar; integer element types additionally support `%`, the bit
operators and the shifts. Components are named `x, y, z, w` with
`r, g, b, a` and `s, t, p, q` aliases. Comparisons return a
`[bool; N]` which [vector::any], [vector::all] and [vector::not]
reduce.

Matrices are column-major: `m[c]` is column c and `m[c][r]` the
scalar at column c, row r; `A * B` and `A * v` follow the usual
column-vector convention, and `v * A` treats v as a row vector.
Matrix literals list their scalars column-first.

Quaternions hold (w, x, y, z) with the scalar part conceptually
first; `q1 * q2` is the Hamilton product and `q * v` rotates a
three-component vector.

## Three dimensions

```
use gfx_nd::Quat;
use gfx_nd::glsl::{Vec3f, Mat4f};

let x: Vec3f = [1., 0., 0.].into();
let y: Vec3f = [0., 1., 0.].into();
let z: Vec3f = [0., 0., 1.].into();

// qx rotates around the X axis by 90 degrees
// [X,0,0] is unchanged
// [0,1,0] maps to [0,0,1]
// [0,0,1] maps to [0,-1,0]
let qx = Quat::of_axis_angle(90.0_f32.to_radians(), &x);
assert!( z.distance(&(qx * y)) < 1.0e-6 );
assert!( y.distance(&(qx * -z)) < 1.0e-6 );
assert!( x.distance(&(qx * x)) < 1.0e-6 );

// The same rotation as a matrix maps the same vectors
let m = qx.mat3();
assert!( (m.transform(&y)).distance(&z) < 1.0e-6 );

// A camera at the origin looking down -Z is the identity view
let view = Mat4f::look_at(&[0., 0., 0.].into(), &[0., 0., -1.].into(), &y);
assert!( view.equal_eps(&Mat4f::identity(), 1.0e-6).iter().all(|b| *b) );
```
!*/

//a Imports
mod matrix_op;
mod noise_op;
mod quaternion_op;
mod scalar_op;
mod traits;
mod transform_op;
mod vector_op;

mod matn;
mod quatn;
mod vecn;

//a Exports
pub use matn::MatN;
pub use quatn::Quat;
pub use traits::{Float, Int, Num};
pub use vecn::VecN;

/// Scalar function module
///
/// This module provides the generic scalar primitives - min/max with
/// their deliberate NaN asymmetry, the rounding family, interpolation,
/// the exponential and trigonometric sets, and epsilon/ULP comparison.
pub mod scalar {
    pub use super::scalar_op::*;
}

/// Vector functions module
///
/// This module provides numerous vector operations operating on
/// \[Num; N\] (or \[Float; N\]), plus component-wise lifts of the
/// whole [scalar](crate::scalar) library.
pub mod vector {
    pub use super::vector_op::*;
}

/// Matrix library
///
/// Column-major square matrix functions operating on \[\[Num; N\]; N\]
/// arrays of columns.
pub mod matrix {
    pub use super::matrix_op::*;
}

/// Quaternion module
pub mod quat {
    pub use super::quaternion_op::*;
}

/// Graphics constructors
///
/// Projections (Vulkan depth range, standard and reverse-Z), the
/// look-at view matrix, the affine translate/rotate/scale family and
/// matrix decomposition, all over \[\[Float; 4\]; 4\].
pub mod transform {
    pub use super::transform_op::*;
}

/// Classic Perlin noise, plus the periodic (tiling) variants
pub mod noise {
    pub use super::noise_op::*;
}

//a Generic aliases
/// 2-component vector of a [Num] element
pub type Vec2<T> = VecN<T, 2>;
/// 3-component vector of a [Num] element
pub type Vec3<T> = VecN<T, 3>;
/// 4-component vector of a [Num] element
pub type Vec4<T> = VecN<T, 4>;
/// 3x3 column-major matrix of a [Num] element
pub type Mat3<T> = MatN<T, 3>;
/// 4x4 column-major matrix of a [Num] element
pub type Mat4<T> = MatN<T, 4>;

//a GLSL-compatible aliases
/// The [glsl] module provides concrete aliases named for their GLSL
/// counterparts
pub mod glsl {
    use super::{MatN, Quat, VecN};

    /// GLSL 2-component vector of float
    pub type Vec2f = VecN<f32, 2>;
    /// GLSL 3-component vector of float
    pub type Vec3f = VecN<f32, 3>;
    /// GLSL 4-component vector of float
    pub type Vec4f = VecN<f32, 4>;
    /// GLSL 2-component vector of double
    pub type Vec2d = VecN<f64, 2>;
    /// GLSL 3-component vector of double
    pub type Vec3d = VecN<f64, 3>;
    /// GLSL 4-component vector of double
    pub type Vec4d = VecN<f64, 4>;
    /// GLSL 2-component vector of signed integer
    pub type IVec2 = VecN<i32, 2>;
    /// GLSL 3-component vector of signed integer
    pub type IVec3 = VecN<i32, 3>;
    /// GLSL 4-component vector of signed integer
    pub type IVec4 = VecN<i32, 4>;
    /// GLSL 2-component vector of unsigned integer
    pub type UVec2 = VecN<u32, 2>;
    /// GLSL 3-component vector of unsigned integer
    pub type UVec3 = VecN<u32, 3>;
    /// GLSL 4-component vector of unsigned integer
    pub type UVec4 = VecN<u32, 4>;
    /// GLSL 3x3 floating-point matrix
    pub type Mat3f = MatN<f32, 3>;
    /// GLSL 4x4 floating-point matrix
    pub type Mat4f = MatN<f32, 4>;
    /// GLSL 3x3 double-precision matrix
    pub type Mat3d = MatN<f64, 3>;
    /// GLSL 4x4 double-precision matrix
    pub type Mat4d = MatN<f64, 4>;
    /// Single-precision rotation quaternion
    pub type Quatf = Quat<f32>;
    /// Double-precision rotation quaternion
    pub type Quatd = Quat<f64>;
}

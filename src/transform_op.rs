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

@file    transform_op.rs
@brief   Graphics constructors over 4x4 matrices - part of graphics math library
 */

//a Imports
use crate::matrix_op as matrix;
use crate::quaternion_op as quat;
use crate::scalar_op as scalar;
use crate::vector_op as vector;
use crate::Float;

//a Notes on conventions
// Right-handed eye space looking down -Z, clip-space depth in [0, 1]
// (the Vulkan convention). The reverse-Z constructors map the near
// plane to depth 1 and the far plane (or infinity) to 0.

//a Affine transforms
//fp translation
/// The translation matrix for a vector: identity with v in the
/// fourth column
pub fn translation<V: Float>(v: &[V; 3]) -> [[V; 4]; 4] {
    let mut m = matrix::identity();
    m[3][0] = v[0];
    m[3][1] = v[1];
    m[3][2] = v[2];
    m
}

//fp translate
/// Postmultiply a matrix by the translation for v
///
/// # Example
///
/// ```
/// use gfx_nd::{matrix, transform};
/// let m = transform::translate(&matrix::identity(), &[1., 2., 3.]);
/// assert_eq!( m[3], [1., 2., 3., 1.] );
/// ```
pub fn translate<V: Float>(m: &[[V; 4]; 4], v: &[V; 3]) -> [[V; 4]; 4] {
    let mut r = *m;
    for j in 0..4 {
        r[3][j] = m[0][j] * v[0] + m[1][j] * v[1] + m[2][j] * v[2] + m[3][j];
    }
    r
}

//fp rotation
/// The Rodrigues rotation matrix for an angle about an axis
///
/// The axis is normalized internally; a zero-length axis yields NaN
/// entries.
pub fn rotation<V: Float>(angle: V, axis: &[V; 3]) -> [[V; 4]; 4] {
    rotate(&matrix::identity(), angle, axis)
}

//fp rotate
/// Postmultiply a matrix by the rotation for an angle about an axis
pub fn rotate<V: Float>(m: &[[V; 4]; 4], angle: V, v: &[V; 3]) -> [[V; 4]; 4] {
    let c = angle.cos();
    let s = angle.sin();

    let axis = vector::normalize(*v);
    let temp = vector::scale(axis, V::one() - c);

    let mut rot = [[V::zero(); 3]; 3];
    rot[0][0] = c + temp[0] * axis[0];
    rot[0][1] = temp[0] * axis[1] + s * axis[2];
    rot[0][2] = temp[0] * axis[2] - s * axis[1];

    rot[1][0] = temp[1] * axis[0] - s * axis[2];
    rot[1][1] = c + temp[1] * axis[1];
    rot[1][2] = temp[1] * axis[2] + s * axis[0];

    rot[2][0] = temp[2] * axis[0] + s * axis[1];
    rot[2][1] = temp[2] * axis[1] - s * axis[0];
    rot[2][2] = c + temp[2] * axis[2];

    let mut r = *m;
    for k in 0..3 {
        for j in 0..4 {
            r[k][j] = m[0][j] * rot[k][0] + m[1][j] * rot[k][1] + m[2][j] * rot[k][2];
        }
    }
    r[3] = m[3];
    r
}

//fp scaling
/// The scale matrix for a vector of per-axis factors
pub fn scaling<V: Float>(v: &[V; 3]) -> [[V; 4]; 4] {
    let mut m = matrix::identity();
    m[0][0] = v[0];
    m[1][1] = v[1];
    m[2][2] = v[2];
    m
}

//fp scale
/// Postmultiply a matrix by the scale for v: its first three columns
/// scaled by the factors
pub fn scale<V: Float>(m: &[[V; 4]; 4], v: &[V; 3]) -> [[V; 4]; 4] {
    [
        vector::scale(m[0], v[0]),
        vector::scale(m[1], v[1]),
        vector::scale(m[2], v[2]),
        m[3],
    ]
}

//a Projections
//fp orthographic2d
/// Map the given rectangle to clip space, leaving depth alone
pub fn orthographic2d<V: Float>(left: V, right: V, bottom: V, top: V) -> [[V; 4]; 4] {
    let two = V::int(2);
    let mut m = matrix::identity();
    m[0][0] = two / (right - left);
    m[1][1] = two / (top - bottom);
    m[2][2] = -V::one();
    m[3][0] = -(right + left) / (right - left);
    m[3][1] = -(top + bottom) / (top - bottom);
    m
}

//fp orthographic
/// Map the given box to clip space with depth in [0, 1]: the near
/// plane to 0 and the far plane to 1
pub fn orthographic<V: Float>(left: V, right: V, bottom: V, top: V, z_near: V, z_far: V) -> [[V; 4]; 4] {
    let two = V::int(2);
    let mut m = matrix::identity();
    m[0][0] = two / (right - left);
    m[1][1] = two / (top - bottom);
    m[2][2] = -V::one() / (z_far - z_near);
    m[3][0] = -(right + left) / (right - left);
    m[3][1] = -(top + bottom) / (top - bottom);
    m[3][2] = -z_near / (z_far - z_near);
    m
}

//fp frustum
/// Off-axis perspective projection of the given near-plane window,
/// depth in [0, 1]
pub fn frustum<V: Float>(left: V, right: V, bottom: V, top: V, near_val: V, far_val: V) -> [[V; 4]; 4] {
    let two = V::int(2);
    let mut m = matrix::zero();
    m[0][0] = (two * near_val) / (right - left);
    m[1][1] = (two * near_val) / (top - bottom);
    m[2][0] = (right + left) / (right - left);
    m[2][1] = (top + bottom) / (top - bottom);
    m[2][2] = far_val / (near_val - far_val);
    m[2][3] = -V::one();
    m[3][2] = -(far_val * near_val) / (far_val - near_val);
    m
}

//fp perspective
/// Symmetric perspective projection from a vertical field of view and
/// aspect ratio, depth in [0, 1]
///
/// # Example
///
/// ```
/// use gfx_nd::transform;
/// let m = transform::perspective(std::f64::consts::FRAC_PI_4, 1., 0.1, 100.);
/// assert!( (m[0][0] - 2.4142135).abs() < 1e-6 );
/// assert!( (m[2][2] - -1.001001).abs() < 1e-6 );
/// assert_eq!( m[2][3], -1. );
/// assert!( (m[3][2] - -0.1001001).abs() < 1e-6 );
/// ```
pub fn perspective<V: Float>(fov_y: V, aspect: V, z_near: V, z_far: V) -> [[V; 4]; 4] {
    let tan_half_fov_y = (fov_y * V::frac(1, 2)).tan();
    let mut m = matrix::zero();
    m[0][0] = V::one() / (aspect * tan_half_fov_y);
    m[1][1] = V::one() / tan_half_fov_y;
    m[2][2] = z_far / (z_near - z_far);
    m[2][3] = -V::one();
    m[3][2] = -(z_far * z_near) / (z_far - z_near);
    m
}

//fp perspective_reverse_z
/// [perspective] with the depth range reversed: the near plane maps
/// to 1 and the far plane to 0, for better precision at distance
#[inline]
pub fn perspective_reverse_z<V: Float>(fov_y: V, aspect: V, z_near: V, z_far: V) -> [[V; 4]; 4] {
    perspective(fov_y, aspect, z_far, z_near)
}

//fp perspective_fov
/// Symmetric perspective projection from a field of view and the
/// width and height of the viewport
pub fn perspective_fov<V: Float>(fov: V, width: V, height: V, z_near: V, z_far: V) -> [[V; 4]; 4] {
    let half = V::frac(1, 2);
    let h = (fov * half).cos() / (fov * half).sin();
    let w = h * height / width;
    let mut m = matrix::zero();
    m[0][0] = w;
    m[1][1] = h;
    m[2][2] = z_far / (z_near - z_far);
    m[2][3] = -V::one();
    m[3][2] = -(z_far * z_near) / (z_far - z_near);
    m
}

//fp perspective_fov_reverse_z
/// [perspective_fov] with the depth range reversed
#[inline]
pub fn perspective_fov_reverse_z<V: Float>(fov: V, width: V, height: V, z_near: V, z_far: V) -> [[V; 4]; 4] {
    perspective_fov(fov, width, height, z_far, z_near)
}

//fp infinite_perspective
/// Perspective projection with the far plane at infinity; the limit
/// of [perspective] as the far plane recedes
pub fn infinite_perspective<V: Float>(fov_y: V, aspect: V, z_near: V) -> [[V; 4]; 4] {
    let range = (fov_y * V::frac(1, 2)).tan() * z_near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let two = V::int(2);
    let mut m = matrix::zero();
    m[0][0] = (two * z_near) / (right - left);
    m[1][1] = (two * z_near) / (top - bottom);
    m[2][2] = -V::one();
    m[2][3] = -V::one();
    m[3][2] = -z_near;
    m
}

//fp infinite_perspective_reverse_z
/// Infinite perspective with reversed depth: the near plane maps to 1
/// and infinity to 0; equal to the limit of a reverse-Z perspective
/// with an arbitrarily distant far plane
pub fn infinite_perspective_reverse_z<V: Float>(fov_y: V, aspect: V, z_near: V) -> [[V; 4]; 4] {
    let range = (fov_y * V::frac(1, 2)).tan() * z_near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let two = V::int(2);
    let mut m = matrix::zero();
    m[0][0] = (two * z_near) / (right - left);
    m[1][1] = (two * z_near) / (top - bottom);
    m[2][2] = V::zero();
    m[2][3] = -V::one();
    m[3][2] = z_near;
    m
}

//a Camera
//fp look_at
/// The view matrix of a camera at eye looking at center with the
/// given up direction
///
/// Degenerate inputs (eye at center, up parallel to the view
/// direction) produce NaN rows rather than an error.
pub fn look_at<V: Float>(eye: &[V; 3], center: &[V; 3], up: &[V; 3]) -> [[V; 4]; 4] {
    let f = vector::normalize(vector::sub(*center, eye, V::one()));
    let s = vector::normalize(vector::cross(&f, up));
    let u = vector::cross(&s, &f);

    let mut m = matrix::identity();
    m[0][0] = s[0];
    m[1][0] = s[1];
    m[2][0] = s[2];
    m[0][1] = u[0];
    m[1][1] = u[1];
    m[2][1] = u[2];
    m[0][2] = -f[0];
    m[1][2] = -f[1];
    m[2][2] = -f[2];
    m[3][0] = -vector::dot(&s, eye);
    m[3][1] = -vector::dot(&u, eye);
    m[3][2] = vector::dot(&f, eye);
    m
}

//a Decompose and recompose
//fi orthonormal_basis
/// Shared first phase of the decompositions: strip projective and
/// translation parts, extract per-column scale, and orient the basis
fn orthonormal_basis<V: Float>(m: &[[V; 4]; 4]) -> Option<([V; 3], [V; 3], [[V; 3]; 3])> {
    let mut local = *m;

    if scalar::abs(local[3][3]) < V::epsilon() {
        return None;
    }

    // Normalize to a unit w so scales come out in model units
    let inv_w = V::one() / local[3][3];
    for c in &mut local {
        *c = vector::scale(*c, inv_w);
    }

    // A perspective row is separated off and discarded
    if local[0][3] != V::zero() || local[1][3] != V::zero() || local[2][3] != V::zero() {
        local[0][3] = V::zero();
        local[1][3] = V::zero();
        local[2][3] = V::zero();
        local[3][3] = V::one();
    }

    let translation = [local[3][0], local[3][1], local[3][2]];

    let mut basis = [[V::zero(); 3]; 3];
    for c in 0..3 {
        basis[c] = [local[c][0], local[c][1], local[c][2]];
    }

    let mut scale = [V::zero(); 3];
    for c in 0..3 {
        scale[c] = vector::length(&basis[c]);
        if scale[c] < V::epsilon() {
            // Degenerate basis; no rotation to recover
            return None;
        }
        basis[c] = vector::reduce(basis[c], scale[c]);
    }

    // A negative triple product means the basis is left-handed; flip
    // every axis so the remainder is a pure rotation
    if vector::dot(&basis[0], &vector::cross(&basis[1], &basis[2])) < V::zero() {
        for c in 0..3 {
            scale[c] = -scale[c];
            basis[c] = vector::negate(basis[c]);
        }
    }

    Some((translation, scale, basis))
}

//fp decompose
/// Split an affine matrix into translation, rotation quaternion and
/// per-axis scale
///
/// Returns None when the matrix has an effectively zero w-w entry or
/// a degenerate basis; a left-handed basis is recovered with all
/// three scales negative.
pub fn decompose<V: Float>(m: &[[V; 4]; 4]) -> Option<([V; 3], [V; 4], [V; 3])> {
    let (translation, scale, basis) = orthonormal_basis(m)?;
    Some((translation, quat::of_rotation3(&basis), scale))
}

//fp decompose_euler
/// Split an affine matrix into translation, Euler angles
/// (pitch, yaw, roll in radians) and per-axis scale
pub fn decompose_euler<V: Float>(m: &[[V; 4]; 4]) -> Option<([V; 3], [V; 3], [V; 3])> {
    let (translation, scale, basis) = orthonormal_basis(m)?;

    let mut rotation = [V::zero(); 3];
    rotation[1] = scalar::clamp(-basis[0][2], -V::one(), V::one()).asin();
    if rotation[1].cos() != V::zero() {
        rotation[0] = scalar::atan2(basis[1][2], basis[2][2]);
        rotation[2] = scalar::atan2(basis[0][1], basis[0][0]);
    } else {
        rotation[0] = scalar::atan2(-basis[2][0], basis[1][1]);
        rotation[2] = V::zero();
    }

    Some((translation, rotation, scale))
}

//fp recompose
/// Build an affine matrix back up as translation * rotation * scale
///
/// # Example
///
/// ```
/// use gfx_nd::{quat, transform, vector};
/// let t = [10., 20., 30.];
/// let r = quat::from_euler(&[0., 0., 0.5_f64]);
/// let s = [1., 2., 1.];
/// let m = transform::recompose(&t, &r, &s);
/// let (t2, r2, s2) = transform::decompose(&m).unwrap();
/// assert!( vector::distance(&t, &t2) < 1e-12 );
/// assert!( vector::distance(&s, &s2) < 1e-12 );
/// assert!( vector::distance(&r, &r2) < 1e-12 );
/// ```
pub fn recompose<V: Float>(translation: &[V; 3], rotation: &[V; 4], scale: &[V; 3]) -> [[V; 4]; 4] {
    let t = self::translation(translation);
    let r = quat::mat4_cast(rotation);
    matrix::multiply(&matrix::multiply(&t, &r), &scaling(scale))
}

//fp recompose_euler
/// Build an affine matrix from translation, Euler angles and scale
pub fn recompose_euler<V: Float>(translation: &[V; 3], rotation: &[V; 3], scale: &[V; 3]) -> [[V; 4]; 4] {
    recompose(translation, &quat::from_euler(rotation), scale)
}

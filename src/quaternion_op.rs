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

@file    quaternion_op.rs
@brief   Quaternion operations - part of graphics math library
 */

//a Imports
use crate::matrix_op as matrix;
use crate::scalar_op as scalar;
use crate::vector_op as vector;
use crate::Float;

//a Notes on storage
// A quaternion is an [V; 4] in x, y, z, w order: the vector part in
// the first three components and the scalar part last. Constructors
// and destructors speak (w, x, y, z), matching the usual written
// convention w + xi + yj + zk.
//
// The rotation matrix of a unit quaternion, by column:
//   1-2(y2+z2)   2(xy-wz)    2(xz+wy)
//   2(xy+wz)    1-2(x2+z2)   2(yz-wx)
//   2(xz-wy)     2(yz+wx)   1-2(x2+y2)

//a Constructors and destructors
//fp identity
/// Create the identity rotation (w=1, x=y=z=0)
#[inline]
pub fn identity<V: Float>() -> [V; 4] {
    [V::zero(), V::zero(), V::zero(), V::one()]
}

//fp of_wxyz
/// Create a quaternion from its scalar and vector components
#[inline]
pub fn of_wxyz<V: Float>(w: V, x: V, y: V, z: V) -> [V; 4] {
    [x, y, z, w]
}

//fp as_wxyz
/// Break a quaternion out into (w, x, y, z)
#[inline]
pub fn as_wxyz<V: Float>(q: &[V; 4]) -> (V, V, V, V) {
    (q[3], q[0], q[1], q[2])
}

//fp of_axis_angle
/// The rotation by an angle about a unit axis: (cos(a/2), sin(a/2)*axis)
///
/// The axis is trusted to be unit length; use [rotate] from the
/// identity for an axis that may need normalization.
pub fn of_axis_angle<V: Float>(angle: V, axis: &[V; 3]) -> [V; 4] {
    let half = angle * V::frac(1, 2);
    let s = half.sin();
    [axis[0] * s, axis[1] * s, axis[2] * s, half.cos()]
}

//fp from_euler
/// The rotation described by Euler angles in radians, taken as
/// (pitch about X, yaw about Y, roll about Z) and composed as
/// qZ(roll) * qY(yaw) * qX(pitch)
pub fn from_euler<V: Float>(euler: &[V; 3]) -> [V; 4] {
    let half = V::frac(1, 2);
    let (cx, cy, cz) = (
        (euler[0] * half).cos(),
        (euler[1] * half).cos(),
        (euler[2] * half).cos(),
    );
    let (sx, sy, sz) = (
        (euler[0] * half).sin(),
        (euler[1] * half).sin(),
        (euler[2] * half).sin(),
    );
    [
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    ]
}

//fp between
/// The rotation carrying unit vector u onto unit vector v along the
/// shorter great circle; anti-parallel inputs rotate about an
/// arbitrary perpendicular axis
pub fn between<V: Float>(u: &[V; 3], v: &[V; 3]) -> [V; 4] {
    let norm_uv = (vector::dot(u, u) * vector::dot(v, v)).sqrt();
    let mut real_part = norm_uv + vector::dot(u, v);
    let t;
    if real_part < V::lit(1e-6) * norm_uv {
        // Pointing in opposite directions; any perpendicular axis does
        real_part = V::zero();
        t = if scalar::abs(u[0]) > scalar::abs(u[2]) {
            [-u[1], u[0], V::zero()]
        } else {
            [V::zero(), -u[2], u[1]]
        };
    } else {
        t = vector::cross(u, v);
    }
    normalize([t[0], t[1], t[2], real_part])
}

//a Algebra
//fp multiply
/// The Hamilton product of two quaternions
///
/// # Example
///
/// ```
/// use gfx_nd::quat;
/// let i = quat::of_wxyz(0., 1., 0., 0.);
/// let j = quat::of_wxyz(0., 0., 1., 0.);
/// assert_eq!( quat::multiply(&i, &j), quat::of_wxyz(0., 0., 0., 1.) );
/// ```
#[inline]
pub fn multiply<V: Float>(a: &[V; 4], b: &[V; 4]) -> [V; 4] {
    let x = a[3] * b[0] + a[0] * b[3] + a[1] * b[2] - a[2] * b[1];
    let y = a[3] * b[1] + a[1] * b[3] + a[2] * b[0] - a[0] * b[2];
    let z = a[3] * b[2] + a[2] * b[3] + a[0] * b[1] - a[1] * b[0];
    let w = a[3] * b[3] - a[0] * b[0] - a[1] * b[1] - a[2] * b[2];
    [x, y, z, w]
}

//fp rotate_vec3
/// Rotate a vector by the quaternion, as the vector part of
/// q * (0, v) * conjugate(q), computed via
/// v + 2w(qv x v) + 2(qv x (qv x v))
pub fn rotate_vec3<V: Float>(q: &[V; 4], v: &[V; 3]) -> [V; 3] {
    let qv = [q[0], q[1], q[2]];
    let uv = vector::cross(&qv, v);
    let uuv = vector::cross(&qv, &uv);
    let two = V::int(2);
    [
        v[0] + (uv[0] * q[3] + uuv[0]) * two,
        v[1] + (uv[1] * q[3] + uuv[1]) * two,
        v[2] + (uv[2] * q[3] + uuv[2]) * two,
    ]
}

//fp dot
/// The four-component dot product of two quaternions
#[inline]
pub fn dot<V: Float>(a: &[V; 4], b: &[V; 4]) -> V {
    vector::dot(a, b)
}

//mp length
/// The length sqrt(q.q) of a quaternion
#[inline]
pub fn length<V: Float>(q: &[V; 4]) -> V {
    vector::length(q)
}

//cp normalize
/// Scale to unit length; an effectively zero quaternion yields the
/// identity rotation rather than NaN (the deliberate asymmetry with
/// vector normalization)
pub fn normalize<V: Float>(q: [V; 4]) -> [V; 4] {
    let l = vector::length(&q);
    if l < V::epsilon() {
        identity()
    } else {
        vector::reduce(q, l)
    }
}

//cp conjugate
/// Negate the vector part
#[inline]
pub fn conjugate<V: Float>(q: &[V; 4]) -> [V; 4] {
    [-q[0], -q[1], -q[2], q[3]]
}

//cp inverse
/// The multiplicative inverse, conjugate(q)/dot(q, q)
pub fn inverse<V: Float>(q: &[V; 4]) -> [V; 4] {
    vector::reduce(conjugate(q), dot(q, q))
}

//cp rotate
/// Apply a further rotation by an angle about an axis; the axis is
/// renormalized if it has drifted from unit length
pub fn rotate<V: Float>(q: &[V; 4], angle: V, axis: &[V; 3]) -> [V; 4] {
    let mut tmp = *axis;
    let len = vector::length(&tmp);
    if scalar::abs(len - V::one()) > V::lit(0.001) {
        tmp = vector::reduce(tmp, len);
    }
    multiply(q, &of_axis_angle(angle, &tmp))
}

//a Transcendentals
//fp exp
/// The quaternion exponential of the vector part: (cos a, sin(a) v/a)
/// for a the vector magnitude; a vanishing vector part gives the zero
/// quaternion
pub fn exp<V: Float>(q: &[V; 4]) -> [V; 4] {
    let u = [q[0], q[1], q[2]];
    let angle = vector::length(&u);
    if angle < V::epsilon() {
        return [V::zero(); 4];
    }
    let v = vector::reduce(u, angle);
    let s = angle.sin();
    [v[0] * s, v[1] * s, v[2] * s, angle.cos()]
}

//fp log
/// The quaternion logarithm
///
/// With a the vector magnitude: for a below machine epsilon the real
/// axis cases apply (log w for positive w, (log -w, PI, 0, 0) for
/// negative, all-infinite at zero); otherwise
/// (log(w2+a2)/2, t*x, t*y, t*z) with t = atan2(a, w)/a.
///
/// The epsilon threshold is deliberately the scalar machine epsilon;
/// widening it would change [pow] near the real axis.
pub fn log<V: Float>(q: &[V; 4]) -> [V; 4] {
    let u = [q[0], q[1], q[2]];
    let vec_len = vector::length(&u);
    let w = q[3];
    if vec_len < V::epsilon() {
        if w > V::zero() {
            return of_wxyz(w.ln(), V::zero(), V::zero(), V::zero());
        }
        if w < V::zero() {
            return of_wxyz((-w).ln(), V::pi(), V::zero(), V::zero());
        }
        return [V::infinity(); 4];
    }
    let t = scalar::atan2(vec_len, w) / vec_len;
    let quat_len2 = vec_len * vec_len + w * w;
    of_wxyz(quat_len2.ln() * V::frac(1, 2), t * q[0], t * q[1], t * q[2])
}

//fp pow
/// Raise a quaternion to a real power
///
/// The rotation angle is recovered through asin of the vector
/// magnitude when the scalar part dominates (|w|/|q| above cos(1/2)),
/// where acos would lose precision, and through acos otherwise; the
/// angle is scaled by the exponent and the magnitude by |q|^(y-1).
pub fn pow<V: Float>(q: &[V; 4], y: V) -> [V; 4] {
    // Raising to the power of zero yields one; this also heads off a
    // division by zero below
    if y > -V::epsilon() && y < V::epsilon() {
        return identity();
    }

    let magnitude = dot(q, q).sqrt();

    let angle;
    if scalar::abs(q[3] / magnitude) > V::cos_one_over_two() {
        let vector_magnitude = q[0] * q[0] + q[1] * q[1] + q[2] * q[2];
        if vector_magnitude < V::min_positive_value() {
            // A real quaternion; equivalent to raising a real to a power
            return of_wxyz(q[3].powf(y), V::zero(), V::zero(), V::zero());
        }
        angle = (vector_magnitude.sqrt() / magnitude).asin();
    } else {
        angle = (q[3] / magnitude).acos();
    }

    let new_angle = angle * y;
    let div = new_angle.sin() / angle.sin();
    let mag = magnitude.powf(y - V::one());
    of_wxyz(
        new_angle.cos() * magnitude * mag,
        q[0] * div * mag,
        q[1] * div * mag,
        q[2] * div * mag,
    )
}

//fp sqrt
/// The square root, as pow(q, 1/2)
#[inline]
pub fn sqrt<V: Float>(q: &[V; 4]) -> [V; 4] {
    pow(q, V::frac(1, 2))
}

//a Interpolation
//fp lerp
/// Component-wise linear interpolation; only meaningful for a in [0, 1]
pub fn lerp<V: Float>(x: &[V; 4], y: &[V; 4], a: V) -> [V; 4] {
    vector::mix(x, y, a)
}

//fp mix
/// Spherical interpolation between two unit quaternions, without
/// taking the short path: the sign of the second operand is honoured
///
/// Nearly-identical orientations fall back to linear interpolation to
/// avoid a vanishing sin denominator.
pub fn mix<V: Float>(x: &[V; 4], y: &[V; 4], a: V) -> [V; 4] {
    let cos_theta = dot(x, y);

    if cos_theta > V::one() - V::epsilon() {
        return vector::mix(x, y, a);
    }
    let angle = cos_theta.acos();
    let sx = ((V::one() - a) * angle).sin();
    let sy = (a * angle).sin();
    vector::reduce(
        vector::add(vector::scale(*x, sx), &vector::scale(*y, sy), V::one()),
        angle.sin(),
    )
}

//fp slerp
/// Spherical interpolation taking the short path: the second operand
/// is negated when the pair's dot product is negative
///
/// # Example
///
/// ```
/// use gfx_nd::quat;
/// let q = quat::of_axis_angle(std::f64::consts::FRAC_PI_2, &[0., 0., 1.]);
/// let h = quat::slerp(&quat::identity(), &q, 0.5);
/// assert!( (quat::angle(&h) - std::f64::consts::FRAC_PI_4).abs() < 1e-10 );
/// ```
pub fn slerp<V: Float>(x: &[V; 4], y: &[V; 4], a: V) -> [V; 4] {
    let mut z = *y;
    let mut cos_theta = dot(x, y);

    if cos_theta < V::zero() {
        z = vector::negate(z);
        cos_theta = -cos_theta;
    }
    if cos_theta > V::one() - V::epsilon() {
        return vector::mix(x, &z, a);
    }
    let angle = cos_theta.acos();
    let sx = ((V::one() - a) * angle).sin();
    let sy = (a * angle).sin();
    vector::reduce(
        vector::add(vector::scale(*x, sx), &vector::scale(z, sy), V::one()),
        angle.sin(),
    )
}

//a Extraction
//fp angle
/// The rotation angle of a unit quaternion
///
/// Near the identity the scalar part is close to one and acos of it
/// is inaccurate, so the angle is recovered from the vector magnitude
/// instead; the crossover is at |w| = cos(1/2).
pub fn angle<V: Float>(q: &[V; 4]) -> V {
    if scalar::abs(q[3]) > V::cos_one_over_two() {
        let a = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2]).sqrt().asin() * V::int(2);
        if q[3] < V::zero() {
            return V::pi() * V::int(2) - a;
        }
        return a;
    }
    q[3].acos() * V::int(2)
}

//fp axis
/// The rotation axis of a unit quaternion; the conventional Z axis is
/// returned when the rotation is too close to the identity to define
/// one
pub fn axis<V: Float>(q: &[V; 4]) -> [V; 3] {
    let tmp1 = V::one() - q[3] * q[3];
    if tmp1 <= V::zero() {
        return [V::zero(), V::zero(), V::one()];
    }
    let tmp2 = V::one() / tmp1.sqrt();
    [q[0] * tmp2, q[1] * tmp2, q[2] * tmp2]
}

//fp pitch
/// The rotation about X in the (pitch, yaw, roll) decomposition
pub fn pitch<V: Float>(q: &[V; 4]) -> V {
    let y = V::int(2) * (q[1] * q[2] + q[3] * q[0]);
    let x = q[3] * q[3] - q[0] * q[0] - q[1] * q[1] + q[2] * q[2];

    // Gimbal-locked at both arguments zero
    if vector::all(&vector::equal_eps(&[x, y], &[V::zero(); 2], V::epsilon())) {
        return V::int(2) * scalar::atan2(q[0], q[3]);
    }
    scalar::atan2(y, x)
}

//fp yaw
/// The rotation about Y in the (pitch, yaw, roll) decomposition
pub fn yaw<V: Float>(q: &[V; 4]) -> V {
    scalar::clamp(V::int(-2) * (q[0] * q[2] - q[3] * q[1]), -V::one(), V::one()).asin()
}

//fp roll
/// The rotation about Z in the (pitch, yaw, roll) decomposition
pub fn roll<V: Float>(q: &[V; 4]) -> V {
    let y = V::int(2) * (q[0] * q[1] + q[3] * q[2]);
    let x = q[3] * q[3] + q[0] * q[0] - q[1] * q[1] - q[2] * q[2];

    if vector::all(&vector::equal_eps(&[x, y], &[V::zero(); 2], V::epsilon())) {
        return V::zero();
    }
    scalar::atan2(y, x)
}

//fp euler_angles
/// The (pitch, yaw, roll) Euler angles of a unit quaternion, in
/// radians
pub fn euler_angles<V: Float>(q: &[V; 4]) -> [V; 3] {
    [pitch(q), yaw(q), roll(q)]
}

//a Matrix conversions
//fp mat3_cast
/// The 3x3 rotation matrix of a unit quaternion
pub fn mat3_cast<V: Float>(q: &[V; 4]) -> [[V; 3]; 3] {
    let one = V::one();
    let two = V::int(2);
    let (qxx, qyy, qzz) = (q[0] * q[0], q[1] * q[1], q[2] * q[2]);
    let (qxz, qxy, qyz) = (q[0] * q[2], q[0] * q[1], q[1] * q[2]);
    let (qwx, qwy, qwz) = (q[3] * q[0], q[3] * q[1], q[3] * q[2]);

    let mut m = matrix::identity();
    m[0][0] = one - two * (qyy + qzz);
    m[0][1] = two * (qxy + qwz);
    m[0][2] = two * (qxz - qwy);

    m[1][0] = two * (qxy - qwz);
    m[1][1] = one - two * (qxx + qzz);
    m[1][2] = two * (qyz + qwx);

    m[2][0] = two * (qxz + qwy);
    m[2][1] = two * (qyz - qwx);
    m[2][2] = one - two * (qxx + qyy);
    m
}

//fp mat4_cast
/// The 4x4 rotation matrix of a unit quaternion, with identity
/// translation row and column
#[inline]
pub fn mat4_cast<V: Float>(q: &[V; 4]) -> [[V; 4]; 4] {
    matrix::from_mat3(&mat3_cast(q))
}

//fp of_rotation3
/// The unit quaternion of a pure rotation matrix
///
/// The largest of the four squared components is found from the
/// diagonal and recovered through a square root; the other three are
/// derived from the off-diagonal differences and sums. Selecting the
/// largest keeps the divisor well away from zero for every rotation.
pub fn of_rotation3<V: Float>(m: &[[V; 3]; 3]) -> [V; 4] {
    let four_x_sq_m1 = m[0][0] - m[1][1] - m[2][2];
    let four_y_sq_m1 = m[1][1] - m[0][0] - m[2][2];
    let four_z_sq_m1 = m[2][2] - m[0][0] - m[1][1];
    let four_w_sq_m1 = m[0][0] + m[1][1] + m[2][2];

    let mut biggest_index = 0;
    let mut four_biggest_sq_m1 = four_w_sq_m1;
    if four_x_sq_m1 > four_biggest_sq_m1 {
        four_biggest_sq_m1 = four_x_sq_m1;
        biggest_index = 1;
    }
    if four_y_sq_m1 > four_biggest_sq_m1 {
        four_biggest_sq_m1 = four_y_sq_m1;
        biggest_index = 2;
    }
    if four_z_sq_m1 > four_biggest_sq_m1 {
        four_biggest_sq_m1 = four_z_sq_m1;
        biggest_index = 3;
    }

    let half = V::frac(1, 2);
    let biggest = (four_biggest_sq_m1 + V::one()).sqrt() * half;
    let mult = V::frac(1, 4) / biggest;

    match biggest_index {
        0 => of_wxyz(
            biggest,
            (m[1][2] - m[2][1]) * mult,
            (m[2][0] - m[0][2]) * mult,
            (m[0][1] - m[1][0]) * mult,
        ),
        1 => of_wxyz(
            (m[1][2] - m[2][1]) * mult,
            biggest,
            (m[0][1] + m[1][0]) * mult,
            (m[2][0] + m[0][2]) * mult,
        ),
        2 => of_wxyz(
            (m[2][0] - m[0][2]) * mult,
            (m[0][1] + m[1][0]) * mult,
            biggest,
            (m[1][2] + m[2][1]) * mult,
        ),
        _ => of_wxyz(
            (m[0][1] - m[1][0]) * mult,
            (m[2][0] + m[0][2]) * mult,
            (m[1][2] + m[2][1]) * mult,
            biggest,
        ),
    }
}

//fp of_rotation4
/// The unit quaternion of the rotation in the upper-left 3x3 of a
/// 4x4 matrix
#[inline]
pub fn of_rotation4<V: Float>(m: &[[V; 4]; 4]) -> [V; 4] {
    of_rotation3(&matrix::to_mat3(m))
}

//fp look_at
/// The rotation of a camera looking along the given direction with
/// the given up vector
pub fn look_at<V: Float>(direction: &[V; 3], up: &[V; 3]) -> [V; 4] {
    let mut m = matrix::zero();
    m[2] = *direction;
    m[0] = vector::normalize(vector::cross(up, &m[2]));
    m[1] = vector::cross(&m[2], &m[0]);
    of_rotation3(&m)
}

//a Comparisons
//fp equal
/// Component-wise ==, in x, y, z, w order
pub fn equal<V: Float>(a: &[V; 4], b: &[V; 4]) -> [bool; 4] {
    vector::equal(a, b)
}

//fp not_equal
/// Component-wise !=
pub fn not_equal<V: Float>(a: &[V; 4], b: &[V; 4]) -> [bool; 4] {
    vector::not_equal(a, b)
}

//fp equal_eps
/// Component-wise equality within an absolute epsilon
pub fn equal_eps<V: Float>(a: &[V; 4], b: &[V; 4], epsilon: V) -> [bool; 4] {
    vector::equal_eps(a, b, epsilon)
}

//fp not_equal_eps
/// Complement of [equal_eps]
pub fn not_equal_eps<V: Float>(a: &[V; 4], b: &[V; 4], epsilon: V) -> [bool; 4] {
    vector::not_equal_eps(a, b, epsilon)
}

//fp less_than
/// Component-wise <
pub fn less_than<V: Float>(a: &[V; 4], b: &[V; 4]) -> [bool; 4] {
    vector::less_than(a, b)
}

//fp less_than_equal
/// Component-wise <=
pub fn less_than_equal<V: Float>(a: &[V; 4], b: &[V; 4]) -> [bool; 4] {
    vector::less_than_equal(a, b)
}

//fp greater_than
/// Component-wise >
pub fn greater_than<V: Float>(a: &[V; 4], b: &[V; 4]) -> [bool; 4] {
    vector::greater_than(a, b)
}

//fp greater_than_equal
/// Component-wise >=
pub fn greater_than_equal<V: Float>(a: &[V; 4], b: &[V; 4]) -> [bool; 4] {
    vector::greater_than_equal(a, b)
}

//fp is_nan
/// Component-wise NaN predicate
pub fn is_nan<V: Float>(q: &[V; 4]) -> [bool; 4] {
    vector::is_nan(q)
}

//fp is_inf
/// Component-wise infinity predicate
pub fn is_inf<V: Float>(q: &[V; 4]) -> [bool; 4] {
    vector::is_inf(q)
}

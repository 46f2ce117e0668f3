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

@file    vector_op.rs
@brief   Vector operations and component-wise lifts - part of graphics math library
 */

//a Imports
use crate::scalar_op as scalar;
use crate::{Float, Int, Num};

//a Vector constructors
//fp zero
/// Create a zero vector of the correct size
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// let a = vector::zero::<f32, 4>();
/// assert_eq!( a, [0., 0., 0., 0.]);
/// ```
pub fn zero<V: Num, const D: usize>() -> [V; D] {
    [V::zero(); D]
}

//fp splat
/// Create a vector with every component set to the same value
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// assert_eq!( vector::splat::<f32, 3>(2.), [2., 2., 2.]);
/// ```
pub fn splat<V: Num, const D: usize>(s: V) -> [V; D] {
    [s; D]
}

//mp set_zero
/// Set the vector in-place to be zero
pub fn set_zero<V: Num>(v: &mut [V]) {
    for c in v.iter_mut() {
        c.set_zero();
    }
}

//fp is_zero
/// Return true if the vector is all zeros
pub fn is_zero<V: Num>(v: &[V]) -> bool {
    for c in v {
        if !c.is_zero() {
            return false;
        }
    }
    true
}

//a Combinations
//cp scale
/// Scale every element of a vector by a single scaling factor
pub fn scale<V: Num, const D: usize>(mut v: [V; D], s: V) -> [V; D] {
    for c in &mut v {
        *c = (*c) * s;
    }
    v
}

//cp reduce
/// Reduce every element of a vector by a single scaling factor
pub fn reduce<V: Num, const D: usize>(mut v: [V; D], s: V) -> [V; D] {
    for c in &mut v {
        *c = (*c) / s;
    }
    v
}

//cp comp_mult
/// Consume the vector and return a new vector that is the original
/// scaled in each coordinate by a different scale factor
pub fn comp_mult<V: Num, const D: usize>(mut v: [V; D], s: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = v[i] * s[i];
    }
    v
}

//cp add
/// Add another vector scaled by a value to a vector, returning the sum
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// let a = [3., 1.];
/// let b = [2., 3.];
/// assert_eq!( vector::add( a, &b, 3.), [9., 10.]);
/// ```
pub fn add<V: Num, const D: usize>(mut v: [V; D], other: &[V; D], scale: V) -> [V; D] {
    for i in 0..D {
        v[i] = v[i] + other[i] * scale;
    }
    v
}

//cp sub
/// Consume the vector, and return a new vector that is the difference of
/// this and a borrowed other vector scaled
pub fn sub<V: Num, const D: usize>(mut v: [V; D], other: &[V; D], scale: V) -> [V; D] {
    for i in 0..D {
        v[i] = v[i] - other[i] * scale;
    }
    v
}

//cp negate
/// Negate every component
pub fn negate<V: Num + std::ops::Neg<Output = V>, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = -*c;
    }
    v
}

//a Geometric
//mp dot
/// Return the inner product (aka dot product or scalar product) of this and another vector
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// assert_eq!( vector::dot(&[1., -1.], &[4., 1.]), 3. );
/// ```
pub fn dot<V: Num, const D: usize>(v: &[V; D], other: &[V; D]) -> V {
    let mut r = V::zero();
    for i in 0..D {
        r = r + v[i] * other[i];
    }
    r
}

//mp length_sq
/// Return the length^2 of the vector
pub fn length_sq<V: Num>(v: &[V]) -> V {
    let mut r = V::zero();
    for c in v.iter() {
        r = r + (*c) * (*c)
    }
    r
}

//mp length
/// Return the length of the vector
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// assert_eq!( vector::length(&[3., 4.]), 5. );
/// ```
pub fn length<V: Float>(v: &[V]) -> V {
    length_sq(v).sqrt()
}

//mp distance_sq
/// Return the square of the distance between two vectors
pub fn distance_sq<V: Num, const D: usize>(v: &[V; D], other: &[V; D]) -> V {
    let mut r = V::zero();
    for i in 0..D {
        let d = v[i] - other[i];
        r = r + d * d;
    }
    r
}

//mp distance
/// Return the distance between two vectors
pub fn distance<V: Float, const D: usize>(v: &[V; D], other: &[V; D]) -> V {
    distance_sq(v, other).sqrt()
}

//cp normalize
/// Scale the vector to unit length as v * 1/sqrt(v.v)
///
/// A zero-length vector yields NaN components; callers that need a
/// guarded form must test the length first. (The quaternion
/// normalization is the guarded one, returning the identity.)
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// assert!( vector::distance(&vector::normalize([3., 4.]), &[0.6, 0.8]) < 1e-15 );
/// assert!( vector::normalize([0.0f64, 0.])[0].is_nan() );
/// ```
pub fn normalize<V: Float, const D: usize>(v: [V; D]) -> [V; D] {
    let r_l = scalar::inverse_sqrt(dot(&v, &v));
    scale(v, r_l)
}

//fp cross
/// Return the cross product of two 3-dimensional vectors, using the
/// right-hand rule
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// let x = [1., 0., 0.];
/// let y = [0., 1., 0.];
/// assert_eq!( vector::cross(&x, &y), [0., 0., 1.] );
/// ```
pub fn cross<V: Num>(x: &[V; 3], y: &[V; 3]) -> [V; 3] {
    let c0 = x[1] * y[2] - x[2] * y[1];
    let c1 = x[2] * y[0] - x[0] * y[2];
    let c2 = x[0] * y[1] - x[1] * y[0];
    [c0, c1, c2]
}

//fp cross2
/// Return the scalar pseudo-cross x0*y1 - y0*x1 of two 2-dimensional
/// vectors, broadcast into both components of the result
pub fn cross2<V: Num>(x: &[V; 2], y: &[V; 2]) -> [V; 2] {
    let c = x[0] * y[1] - x[1] * y[0];
    [c, c]
}

//fp face_forward
/// Return n if nref points against i, otherwise -n
pub fn face_forward<V: Float, const D: usize>(n: &[V; D], i: &[V; D], nref: &[V; D]) -> [V; D] {
    if dot(nref, i) < V::zero() {
        *n
    } else {
        negate(*n)
    }
}

//fp reflect
/// Reflect the incident vector i about the unit normal n
pub fn reflect<V: Float, const D: usize>(i: &[V; D], n: &[V; D]) -> [V; D] {
    let d = dot(n, i);
    sub(*i, n, d + d)
}

//fp refract
/// Refract the incident vector i at the unit normal n with the given
/// ratio of indices of refraction; total internal reflection gives
/// the zero vector
pub fn refract<V: Float, const D: usize>(i: &[V; D], n: &[V; D], eta: V) -> [V; D] {
    let d = dot(n, i);
    let k = V::one() - eta * eta * (V::one() - d * d);
    if k < V::zero() {
        zero()
    } else {
        sub(scale(*i, eta), n, eta * d + k.sqrt())
    }
}

//a Component-wise lifts of the scalar library
//cp abs
/// Component-wise absolute value of a float vector
pub fn abs<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::abs(*c);
    }
    v
}

//cp iabs
/// Component-wise absolute value of an integer vector
pub fn iabs<V: Int, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::iabs(*c);
    }
    v
}

//cp sign
/// Component-wise sign, -1 / 0 / +1
pub fn sign<V: Num + std::ops::Neg<Output = V>, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::sign(*c);
    }
    v
}

//cp floor
/// Component-wise floor
pub fn floor<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.floor();
    }
    v
}

//cp ceil
/// Component-wise ceiling
pub fn ceil<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.ceil();
    }
    v
}

//cp trunc
/// Component-wise truncation toward zero
pub fn trunc<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.trunc();
    }
    v
}

//cp round
/// Component-wise rounding, halves away from zero
pub fn round<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.round();
    }
    v
}

//cp round_even
/// Component-wise rounding, halves to even
pub fn round_even<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::round_even(*c);
    }
    v
}

//cp fract
/// Component-wise x - floor(x)
pub fn fract<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::fract(*c);
    }
    v
}

//cp modulo
/// Component-wise mathematical modulus with a scalar divisor
pub fn modulo<V: Float, const D: usize>(mut v: [V; D], y: V) -> [V; D] {
    for c in &mut v {
        *c = scalar::modulo(*c, y);
    }
    v
}

//cp modulo_vec
/// Component-wise mathematical modulus with a per-component divisor
pub fn modulo_vec<V: Float, const D: usize>(mut v: [V; D], y: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::modulo(v[i], y[i]);
    }
    v
}

//cp fmod
/// Component-wise C-style remainder with a scalar divisor
pub fn fmod<V: Float, const D: usize>(mut v: [V; D], y: V) -> [V; D] {
    for c in &mut v {
        *c = scalar::fmod(*c, y);
    }
    v
}

//cp fmod_vec
/// Component-wise C-style remainder with a per-component divisor
pub fn fmod_vec<V: Float, const D: usize>(mut v: [V; D], y: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::fmod(v[i], y[i]);
    }
    v
}

//cp modf
/// Split each component into fractional and integer parts
pub fn modf<V: Float, const D: usize>(v: [V; D]) -> ([V; D], [V; D]) {
    let mut f = zero();
    let mut i = zero();
    for j in 0..D {
        let (fj, ij) = scalar::modf(v[j]);
        f[j] = fj;
        i[j] = ij;
    }
    (f, i)
}

//cp min
/// Component-wise minimum against a scalar, with the scalar [min] NaN rule
pub fn min<V: Num, const D: usize>(mut v: [V; D], s: V) -> [V; D] {
    for c in &mut v {
        *c = scalar::min(*c, s);
    }
    v
}

//cp min_vec
/// Component-wise minimum of two vectors
pub fn min_vec<V: Num, const D: usize>(mut v: [V; D], other: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::min(v[i], other[i]);
    }
    v
}

//cp max
/// Component-wise maximum against a scalar, with the scalar [max] NaN rule
pub fn max<V: Num, const D: usize>(mut v: [V; D], s: V) -> [V; D] {
    for c in &mut v {
        *c = scalar::max(*c, s);
    }
    v
}

//cp max_vec
/// Component-wise maximum of two vectors
pub fn max_vec<V: Num, const D: usize>(mut v: [V; D], other: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::max(v[i], other[i]);
    }
    v
}

//cp clamp
/// Clamp each element to be between min and max
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// let a = [-1., 3.];
/// assert_eq!( vector::clamp( a, 0., 1.), [0., 1.]);
/// assert_eq!( vector::clamp( a, -10., 10.), [-1., 3.]);
/// ```
pub fn clamp<V: Num, const D: usize>(mut v: [V; D], lo: V, hi: V) -> [V; D] {
    for c in &mut v {
        *c = scalar::clamp(*c, lo, hi);
    }
    v
}

//cp clamp_vec
/// Clamp each element between per-component bounds
pub fn clamp_vec<V: Num, const D: usize>(mut v: [V; D], lo: &[V; D], hi: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::clamp(v[i], lo[i], hi[i]);
    }
    v
}

//cp mix
/// Find the linear interpolation between two vectors by a parameter `t`
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// let a = [3., 1.];
/// let b = [2., 3.];
/// assert_eq!( vector::mix( &a, &b, 0.),  [3., 1.]);
/// assert_eq!( vector::mix( &a, &b, 1.),  [2., 3.]);
/// assert_eq!( vector::mix( &a, &b, 0.5), [2.5, 2.]);
/// ```
pub fn mix<V: Float, const D: usize>(a: &[V; D], b: &[V; D], t: V) -> [V; D] {
    let mut v = zero();
    let omt = V::one() - t;
    for i in 0..D {
        v[i] = a[i] * omt + b[i] * t;
    }
    v
}

//cp mix_vec
/// Linear interpolation with a per-component parameter
pub fn mix_vec<V: Float, const D: usize>(a: &[V; D], b: &[V; D], t: &[V; D]) -> [V; D] {
    let mut v = zero();
    for i in 0..D {
        v[i] = scalar::mix(a[i], b[i], t[i]);
    }
    v
}

//cp mix_bool
/// Per-component select: b where the flag is set, a elsewhere
pub fn mix_bool<V: Float, const D: usize>(a: &[V; D], b: &[V; D], t: &[bool; D]) -> [V; D] {
    let mut v = zero();
    for i in 0..D {
        v[i] = scalar::mix_bool(a[i], b[i], t[i]);
    }
    v
}

//cp lerp
/// Synonym of [mix]; only meaningful for t in [0, 1]
pub fn lerp<V: Float, const D: usize>(a: &[V; D], b: &[V; D], t: V) -> [V; D] {
    mix(a, b, t)
}

//cp step
/// Component-wise 0/1 step against a scalar edge
pub fn step<V: Float, const D: usize>(edge: V, mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::step(edge, *c);
    }
    v
}

//cp step_vec
/// Component-wise 0/1 step against a per-component edge
pub fn step_vec<V: Float, const D: usize>(edge: &[V; D], mut v: [V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::step(edge[i], v[i]);
    }
    v
}

//cp smooth_step
/// Component-wise Hermite interpolation between two scalar edges
pub fn smooth_step<V: Float, const D: usize>(edge0: V, edge1: V, mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::smooth_step(edge0, edge1, *c);
    }
    v
}

//cp smooth_step_vec
/// Component-wise Hermite interpolation between per-component edges
pub fn smooth_step_vec<V: Float, const D: usize>(
    edge0: &[V; D],
    edge1: &[V; D],
    mut v: [V; D],
) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::smooth_step(edge0[i], edge1[i], v[i]);
    }
    v
}

//cp sqrt
/// Component-wise square root
pub fn sqrt<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.sqrt();
    }
    v
}

//cp inverse_sqrt
/// Component-wise 1/sqrt(x)
pub fn inverse_sqrt<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::inverse_sqrt(*c);
    }
    v
}

//cp pow
/// Component-wise power with per-component exponents
pub fn pow<V: Float, const D: usize>(mut v: [V; D], e: &[V; D]) -> [V; D] {
    for i in 0..D {
        v[i] = v[i].powf(e[i]);
    }
    v
}

//cp exp
/// Component-wise e^x
pub fn exp<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.exp();
    }
    v
}

//cp log
/// Component-wise natural logarithm
pub fn log<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.ln();
    }
    v
}

//cp exp2
/// Component-wise 2^x
pub fn exp2<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.exp2();
    }
    v
}

//cp log2
/// Component-wise base-2 logarithm
pub fn log2<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.log2();
    }
    v
}

//cp radians
/// Component-wise degrees to radians
pub fn radians<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::radians(*c);
    }
    v
}

//cp degrees
/// Component-wise radians to degrees
pub fn degrees<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = scalar::degrees(*c);
    }
    v
}

//cp sin
/// Component-wise sine
pub fn sin<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.sin();
    }
    v
}

//cp cos
/// Component-wise cosine
pub fn cos<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.cos();
    }
    v
}

//cp tan
/// Component-wise tangent
pub fn tan<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.tan();
    }
    v
}

//cp asin
/// Component-wise arc sine
pub fn asin<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.asin();
    }
    v
}

//cp acos
/// Component-wise arc cosine
pub fn acos<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.acos();
    }
    v
}

//cp atan
/// Component-wise one-argument arc tangent
pub fn atan<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.atan();
    }
    v
}

//cp atan2
/// Component-wise two-argument arc tangent of y/x
pub fn atan2<V: Float, const D: usize>(mut y: [V; D], x: &[V; D]) -> [V; D] {
    for i in 0..D {
        y[i] = y[i].atan2(x[i]);
    }
    y
}

//cp sinh
/// Component-wise hyperbolic sine
pub fn sinh<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.sinh();
    }
    v
}

//cp cosh
/// Component-wise hyperbolic cosine
pub fn cosh<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.cosh();
    }
    v
}

//cp tanh
/// Component-wise hyperbolic tangent
pub fn tanh<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.tanh();
    }
    v
}

//cp asinh
/// Component-wise inverse hyperbolic sine
pub fn asinh<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.asinh();
    }
    v
}

//cp acosh
/// Component-wise inverse hyperbolic cosine
pub fn acosh<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.acosh();
    }
    v
}

//cp atanh
/// Component-wise inverse hyperbolic tangent
pub fn atanh<V: Float, const D: usize>(mut v: [V; D]) -> [V; D] {
    for c in &mut v {
        *c = c.atanh();
    }
    v
}

//cp fma
/// Component-wise fused multiply-add a*b + c
pub fn fma<V: Float, const D: usize>(mut a: [V; D], b: &[V; D], c: &[V; D]) -> [V; D] {
    for i in 0..D {
        a[i] = a[i].mul_add(b[i], c[i]);
    }
    a
}

//cp frexp
/// Split each component into significand and exponent
pub fn frexp<V: Float, const D: usize>(v: [V; D]) -> ([V; D], [i32; D]) {
    let mut m = zero();
    let mut e = [0_i32; D];
    for i in 0..D {
        let (mi, ei) = scalar::frexp(v[i]);
        m[i] = mi;
        e[i] = ei;
    }
    (m, e)
}

//cp ldexp
/// Component-wise x * 2^exp
pub fn ldexp<V: Float, const D: usize>(mut v: [V; D], exp: &[i32; D]) -> [V; D] {
    for i in 0..D {
        v[i] = scalar::ldexp(v[i], exp[i]);
    }
    v
}

//cp is_power_of_two
/// Component-wise power-of-two predicate
pub fn is_power_of_two<V: Int, const D: usize>(v: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = scalar::is_power_of_two(v[i]);
    }
    r
}

//cp is_odd
/// Component-wise parity predicate
pub fn is_odd<V: Int, const D: usize>(v: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = scalar::is_odd(v[i]);
    }
    r
}

//cp is_nan
/// Component-wise NaN predicate
pub fn is_nan<V: Float, const D: usize>(v: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = v[i].is_nan();
    }
    r
}

//cp is_inf
/// Component-wise infinity predicate
pub fn is_inf<V: Float, const D: usize>(v: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = v[i].is_infinite();
    }
    r
}

//a Comparisons
//fp equal
/// Component-wise ==
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// assert_eq!( vector::equal(&[1., 2.], &[1., 3.]), [true, false] );
/// assert!( vector::all(&vector::equal(&[1., 2.], &[1., 2.])) );
/// ```
pub fn equal<V: Num, const D: usize>(a: &[V; D], b: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = a[i] == b[i];
    }
    r
}

//fp not_equal
/// Component-wise !=
pub fn not_equal<V: Num, const D: usize>(a: &[V; D], b: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = a[i] != b[i];
    }
    r
}

//fp less_than
/// Component-wise <
pub fn less_than<V: Num, const D: usize>(a: &[V; D], b: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = a[i] < b[i];
    }
    r
}

//fp less_than_equal
/// Component-wise <=
pub fn less_than_equal<V: Num, const D: usize>(a: &[V; D], b: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = a[i] <= b[i];
    }
    r
}

//fp greater_than
/// Component-wise >
pub fn greater_than<V: Num, const D: usize>(a: &[V; D], b: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = a[i] > b[i];
    }
    r
}

//fp greater_than_equal
/// Component-wise >=
pub fn greater_than_equal<V: Num, const D: usize>(a: &[V; D], b: &[V; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = a[i] >= b[i];
    }
    r
}

//fp equal_eps
/// Component-wise equality within an absolute scalar epsilon
pub fn equal_eps<V: Float, const D: usize>(a: &[V; D], b: &[V; D], epsilon: V) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = scalar::equal_eps(a[i], b[i], epsilon);
    }
    r
}

//fp equal_eps_vec
/// Component-wise equality within per-component epsilons
pub fn equal_eps_vec<V: Float, const D: usize>(
    a: &[V; D],
    b: &[V; D],
    epsilon: &[V; D],
) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = scalar::equal_eps(a[i], b[i], epsilon[i]);
    }
    r
}

//fp not_equal_eps
/// Complement of [equal_eps]
pub fn not_equal_eps<V: Float, const D: usize>(a: &[V; D], b: &[V; D], epsilon: V) -> [bool; D] {
    not(&equal_eps(a, b, epsilon))
}

//fp equal_ulps
/// Component-wise equality within a bit-distance tolerance
pub fn equal_ulps<V: Float, const D: usize>(a: &[V; D], b: &[V; D], ulps: i32) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = scalar::equal_ulps(a[i], b[i], ulps);
    }
    r
}

//fp equal_ulps_vec
/// Component-wise equality within per-component bit-distance tolerances
pub fn equal_ulps_vec<V: Float, const D: usize>(
    a: &[V; D],
    b: &[V; D],
    ulps: &[i32; D],
) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = scalar::equal_ulps(a[i], b[i], ulps[i]);
    }
    r
}

//fp not_equal_ulps
/// Complement of [equal_ulps]
pub fn not_equal_ulps<V: Float, const D: usize>(a: &[V; D], b: &[V; D], ulps: i32) -> [bool; D] {
    not(&equal_ulps(a, b, ulps))
}

//a Boolean reductions
//fp any
/// OR of the components of a bool vector
pub fn any<const D: usize>(v: &[bool; D]) -> bool {
    for c in v {
        if *c {
            return true;
        }
    }
    false
}

//fp all
/// AND of the components of a bool vector
pub fn all<const D: usize>(v: &[bool; D]) -> bool {
    for c in v {
        if !*c {
            return false;
        }
    }
    true
}

//fp not
/// Component-wise negation of a bool vector
pub fn not<const D: usize>(v: &[bool; D]) -> [bool; D] {
    let mut r = [false; D];
    for i in 0..D {
        r[i] = !v[i];
    }
    r
}

//a Formatting
//mp fmt - format a vector for display
/// Format the vector for display
///
/// # Example
///
/// ```
/// use gfx_nd::vector;
/// struct Pt { c : [f32;2] }
/// impl std::fmt::Display for Pt {
///   fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result { vector::fmt(f, &self.c) }
/// }
/// assert_eq!( format!("{}", &Pt{c:[0., 1.]} ), "(0,1)" );
/// ```
pub fn fmt<V: Num>(f: &mut std::fmt::Formatter, v: &[V]) -> std::fmt::Result {
    for i in 0..v.len() {
        if i == 0 {
            write!(f, "({}", v[i])?;
        } else {
            write!(f, ",{}", v[i])?;
        }
    }
    write!(f, ")")
}

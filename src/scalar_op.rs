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

@file    scalar_op.rs
@brief   Scalar function library - part of graphics math library
 */

//a Imports
use crate::{Float, Int, Num};

//a Common
//fp min
/// Return y if y < x, otherwise x
///
/// The comparison form fixes the NaN behavior: a NaN first argument
/// propagates, a NaN second argument is discarded.
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::min(3, 5), 3 );
/// assert!( scalar::min(f32::NAN, 1.0).is_nan() );
/// assert_eq!( scalar::min(1.0, f32::NAN), 1.0 );
/// ```
#[inline]
pub fn min<T: Num>(x: T, y: T) -> T {
    if y < x {
        y
    } else {
        x
    }
}

//fp max
/// Return y if x < y, otherwise x
///
/// The NaN rule mirrors [min]: NaN in the first argument propagates,
/// NaN elsewhere is discarded.
#[inline]
pub fn max<T: Num>(x: T, y: T) -> T {
    if x < y {
        y
    } else {
        x
    }
}

//fp min3
/// Return the smallest of three values, chaining [min]
#[inline]
pub fn min3<T: Num>(a: T, b: T, c: T) -> T {
    min(min(a, b), c)
}

//fp min4
/// Return the smallest of four values, chaining [min]
#[inline]
pub fn min4<T: Num>(a: T, b: T, c: T, d: T) -> T {
    min(min(min(a, b), c), d)
}

//fp max3
/// Return the largest of three values, chaining [max]
#[inline]
pub fn max3<T: Num>(a: T, b: T, c: T) -> T {
    max(max(a, b), c)
}

//fp max4
/// Return the largest of four values, chaining [max]
#[inline]
pub fn max4<T: Num>(a: T, b: T, c: T, d: T) -> T {
    max(max(max(a, b), c), d)
}

//fp abs
/// Absolute value of a float; -0 maps to +0 and NaN stays NaN
#[inline]
pub fn abs<F: Float>(x: F) -> F {
    x.abs()
}

//fp iabs
/// Absolute value of an integer, with a wrapping negation so the
/// most-negative signed value maps to itself (its magnitude is not
/// representable); unsigned values pass straight through
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::iabs(-7_i32), 7 );
/// assert_eq!( scalar::iabs(7_u32), 7 );
/// assert_eq!( scalar::iabs(i8::MIN), i8::MIN );
/// ```
#[inline]
pub fn iabs<T: Int>(x: T) -> T {
    if x < T::zero() {
        T::zero().wrapping_sub(&x)
    } else {
        x
    }
}

//fp sign
/// Return -1, 0 or +1 with the sign of the value; zero and NaN both
/// give 0
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::sign(-3.5), -1.0 );
/// assert_eq!( scalar::sign(0.0), 0.0 );
/// assert_eq!( scalar::sign(f64::NAN), 0.0 );
/// ```
#[inline]
pub fn sign<T: Num + std::ops::Neg<Output = T>>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

//fp floor
/// Largest integer value not greater than x
#[inline]
pub fn floor<F: Float>(x: F) -> F {
    x.floor()
}

//fp ceil
/// Smallest integer value not less than x
#[inline]
pub fn ceil<F: Float>(x: F) -> F {
    x.ceil()
}

//fp trunc
/// The integer part of x, rounding toward zero
#[inline]
pub fn trunc<F: Float>(x: F) -> F {
    x.trunc()
}

//fp round
/// Round to the nearest integer, halves away from zero
#[inline]
pub fn round<F: Float>(x: F) -> F {
    x.round()
}

//fp round_even
/// Round to the nearest integer, halves to the even neighbour
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::round_even(2.5), 2.0 );
/// assert_eq!( scalar::round_even(3.5), 4.0 );
/// assert_eq!( scalar::round_even(-2.5), -2.0 );
/// assert_eq!( scalar::round_even(-3.5), -4.0 );
/// assert_eq!( scalar::round_even(2.25), 2.0 );
/// ```
pub fn round_even<F: Float>(x: F) -> F {
    let half = F::frac(1, 2);
    let i = x.trunc();
    let f = x - i;
    if f != half && f != -half {
        return x.round();
    }
    // trunc part is even iff halving it leaves no fraction
    if (i * half).fract() == F::zero() {
        i
    } else {
        i + sign(x)
    }
}

//fp fract
/// The fractional part x - floor(x); NaN for infinite or NaN input
#[inline]
pub fn fract<F: Float>(x: F) -> F {
    x - x.floor()
}

//fp modulo
/// The mathematical modulus x - y*floor(x/y); the result takes the
/// sign of y
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::modulo(5.0, 3.0), 2.0 );
/// assert_eq!( scalar::modulo(-5.0, 3.0), 1.0 );
/// assert_eq!( scalar::modulo(5.0, -3.0), -1.0 );
/// ```
#[inline]
pub fn modulo<F: Float>(x: F, y: F) -> F {
    x - y * (x / y).floor()
}

//fp fmod
/// The C-style remainder x - y*trunc(x/y); the result takes the sign
/// of x
#[inline]
pub fn fmod<F: Float>(x: F, y: F) -> F {
    x - y * (x / y).trunc()
}

//fp modf
/// Split a value into (fractional, integer) parts, both taking the
/// sign of x
#[inline]
pub fn modf<F: Float>(x: F) -> (F, F) {
    (x.fract(), x.trunc())
}

//fp clamp
/// Clamp x to the closed range [lo, hi]; undefined when lo > hi, and
/// NaN follows the [min]/[max] rules
#[inline]
pub fn clamp<T: Num>(x: T, lo: T, hi: T) -> T {
    min(max(x, lo), hi)
}

//fp mix
/// Linear blend x*(1-a) + y*a
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::mix(2.0, 10.0, 0.0), 2.0 );
/// assert_eq!( scalar::mix(2.0, 10.0, 1.0), 10.0 );
/// assert_eq!( scalar::mix(2.0, 10.0, 0.25), 4.0 );
/// ```
#[inline]
pub fn mix<F: Float>(x: F, y: F, a: F) -> F {
    x * (F::one() - a) + y * a
}

//fp mix_bool
/// Select y when the flag is set, x otherwise
#[inline]
pub fn mix_bool<F: Float>(x: F, y: F, a: bool) -> F {
    if a {
        y
    } else {
        x
    }
}

//fp lerp
/// Synonym of [mix]; only meaningful for a in [0, 1]
#[inline]
pub fn lerp<F: Float>(x: F, y: F, a: F) -> F {
    mix(x, y, a)
}

//fp step
/// 0 when x is below the edge, 1 otherwise
#[inline]
pub fn step<F: Float>(edge: F, x: F) -> F {
    if x < edge {
        F::zero()
    } else {
        F::one()
    }
}

//fp smooth_step
/// Hermite interpolation between the two edges; undefined when
/// edge0 >= edge1
#[inline]
pub fn smooth_step<F: Float>(edge0: F, edge1: F, x: F) -> F {
    let t = clamp((x - edge0) / (edge1 - edge0), F::zero(), F::one());
    t * t * (F::int(3) - F::int(2) * t)
}

//fp is_nan
/// True when the value is a NaN
#[inline]
pub fn is_nan<F: Float>(x: F) -> bool {
    x.is_nan()
}

//fp is_inf
/// True when the value is positive or negative infinity
#[inline]
pub fn is_inf<F: Float>(x: F) -> bool {
    x.is_infinite()
}

//fp fma
/// a*b + c, fused into a single rounding where the platform allows
#[inline]
pub fn fma<F: Float>(a: F, b: F, c: F) -> F {
    a.mul_add(b, c)
}

//fp frexp
/// Split x into (significand, exponent) with the significand in
/// [0.5, 1); zero gives (0, 0), and the result is undefined for
/// infinite or NaN input
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert_eq!( scalar::frexp(1.0_f64), (0.5, 1) );
/// assert_eq!( scalar::frexp(96.0_f64), (0.75, 7) );
/// assert_eq!( scalar::frexp(0.0_f64), (0.0, 0) );
/// ```
pub fn frexp<F: Float>(x: F) -> (F, i32) {
    if x.is_zero() {
        return (x, 0);
    }
    let (mantissa, exponent, _sign) = x.integer_decode();
    let bits = 64 - mantissa.leading_zeros() as i32;
    let e = exponent as i32 + bits;
    (x * F::int(2).powi(-e), e)
}

//fp ldexp
/// x * 2^exp; undefined for infinite or NaN input
#[inline]
pub fn ldexp<F: Float>(x: F, exp: i32) -> F {
    x * F::int(2).powi(exp)
}

//fp is_power_of_two
/// True when the absolute value is a power of two; the wrapping
/// absolute keeps the most-negative signed value (magnitude 2^(N-1))
/// reporting true
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert!( scalar::is_power_of_two(64_u32) );
/// assert!( scalar::is_power_of_two(-4_i32) );
/// assert!( !scalar::is_power_of_two(12_i32) );
/// assert!( !scalar::is_power_of_two(0_i32) );
/// ```
#[inline]
pub fn is_power_of_two<T: Int>(x: T) -> bool {
    let a = iabs(x);
    a != T::zero() && (a & a.wrapping_sub(&T::one())) == T::zero()
}

//fp is_odd
/// True when the absolute value has its lowest bit set
#[inline]
pub fn is_odd<T: Int>(x: T) -> bool {
    (iabs(x) & T::one()) != T::zero()
}

//a Exponential
//fp pow
/// base raised to the power exp
#[inline]
pub fn pow<F: Float>(base: F, exp: F) -> F {
    base.powf(exp)
}

//fp exp
/// e raised to the power x
#[inline]
pub fn exp<F: Float>(x: F) -> F {
    x.exp()
}

//fp log
/// Natural logarithm; -inf at zero, NaN below
#[inline]
pub fn log<F: Float>(x: F) -> F {
    x.ln()
}

//fp exp2
/// 2 raised to the power x
#[inline]
pub fn exp2<F: Float>(x: F) -> F {
    x.exp2()
}

//fp log2
/// Base-2 logarithm
#[inline]
pub fn log2<F: Float>(x: F) -> F {
    x.log2()
}

//fp sqrt
/// Square root; NaN for negative input
#[inline]
pub fn sqrt<F: Float>(x: F) -> F {
    x.sqrt()
}

//fp inverse_sqrt
/// 1/sqrt(x); +inf at zero, NaN for negative input
#[inline]
pub fn inverse_sqrt<F: Float>(x: F) -> F {
    F::one() / x.sqrt()
}

//a Trigonometric
//fp radians
/// Degrees to radians
#[inline]
pub fn radians<F: Float>(degrees: F) -> F {
    degrees * F::lit(0.017_453_292_519_943_295)
}

//fp degrees
/// Radians to degrees
#[inline]
pub fn degrees<F: Float>(radians: F) -> F {
    radians * F::lit(57.295_779_513_082_32)
}

//fp sin
/// Sine of an angle in radians
#[inline]
pub fn sin<F: Float>(x: F) -> F {
    x.sin()
}

//fp cos
/// Cosine of an angle in radians
#[inline]
pub fn cos<F: Float>(x: F) -> F {
    x.cos()
}

//fp tan
/// Tangent of an angle in radians
#[inline]
pub fn tan<F: Float>(x: F) -> F {
    x.tan()
}

//fp asin
/// Arc sine in radians; NaN outside [-1, 1]
#[inline]
pub fn asin<F: Float>(x: F) -> F {
    x.asin()
}

//fp acos
/// Arc cosine in radians; NaN outside [-1, 1]
#[inline]
pub fn acos<F: Float>(x: F) -> F {
    x.acos()
}

//fp atan
/// One-argument arc tangent in radians
#[inline]
pub fn atan<F: Float>(x: F) -> F {
    x.atan()
}

//fp atan2
/// Two-argument arc tangent of y/x, using the signs of both to pick
/// the quadrant; (0, 0) gives 0
#[inline]
pub fn atan2<F: Float>(y: F, x: F) -> F {
    y.atan2(x)
}

//fp sinh
/// Hyperbolic sine
#[inline]
pub fn sinh<F: Float>(x: F) -> F {
    x.sinh()
}

//fp cosh
/// Hyperbolic cosine
#[inline]
pub fn cosh<F: Float>(x: F) -> F {
    x.cosh()
}

//fp tanh
/// Hyperbolic tangent
#[inline]
pub fn tanh<F: Float>(x: F) -> F {
    x.tanh()
}

//fp asinh
/// Inverse hyperbolic sine
#[inline]
pub fn asinh<F: Float>(x: F) -> F {
    x.asinh()
}

//fp acosh
/// Inverse hyperbolic cosine; NaN below 1
#[inline]
pub fn acosh<F: Float>(x: F) -> F {
    x.acosh()
}

//fp atanh
/// Inverse hyperbolic tangent; +-inf at +-1, NaN beyond
#[inline]
pub fn atanh<F: Float>(x: F) -> F {
    x.atanh()
}

//a Comparison
//fp equal_eps
/// True when the two values are within an absolute epsilon of each
/// other
#[inline]
pub fn equal_eps<F: Float>(x: F, y: F, epsilon: F) -> bool {
    abs(x - y) <= epsilon
}

//fp not_equal_eps
/// Complement of [equal_eps]
#[inline]
pub fn not_equal_eps<F: Float>(x: F, y: F, epsilon: F) -> bool {
    !equal_eps(x, y, epsilon)
}

//fp equal_ulps
/// True when the two values are within `ulps` representable values of
/// each other
///
/// The bit patterns are compared as signed integers; values of
/// different sign never match except for positive and negative zero.
///
/// # Example
///
/// ```
/// use gfx_nd::scalar;
/// assert!( scalar::equal_ulps(1.0_f32, 1.0 + f32::EPSILON, 1) );
/// assert!( !scalar::equal_ulps(1.0_f32, 1.0 + 3.0 * f32::EPSILON, 1) );
/// assert!( scalar::equal_ulps(0.0_f32, -0.0_f32, 0) );
/// assert!( !scalar::equal_ulps(1.0_f32, -1.0_f32, i32::MAX) );
/// ```
pub fn equal_ulps<F: Float>(x: F, y: F, ulps: i32) -> bool {
    let a = x.bits_signed();
    let b = y.bits_signed();
    if (a < 0) != (b < 0) {
        // Different signs only match at +0 == -0
        x == y
    } else {
        (a - b).abs() <= ulps as i64
    }
}

//fp not_equal_ulps
/// Complement of [equal_ulps]
#[inline]
pub fn not_equal_ulps<F: Float>(x: F, y: F, ulps: i32) -> bool {
    !equal_ulps(x, y, ulps)
}

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

@file    traits.rs
@brief   Scalar element traits - part of graphics math library
 */

//a Num, Int and Float traits
//tp Num
/// The [Num] trait is required for matrix or vector elements; it is
/// not a float, and so some of the matrix and vector operations can
/// operate on integer types such as i32, u32 and u64
///
/// The trait requires basic numeric operations, plus specifically
/// [std::fmt::Display]. Unlike a float it does not require negation:
/// unsigned element types are permitted, and operations that need a
/// sign bound [std::ops::Neg] at the function.
pub trait Num:
    num_traits::Num
    + num_traits::NumAssignOps
    + Clone
    + Copy
    + PartialEq
    + PartialOrd
    + std::fmt::Display
    + std::fmt::Debug
{
}

//tp Int
/// The [Int] trait is required for elements used with the integer-only
/// operations: `%`, the bit operators, the shifts, and the
/// parity/power-of-two predicates.
///
/// The extra [num_traits::WrappingSub] requirement lets the predicates
/// take a wrapping absolute value, so the most-negative value of a
/// signed type keeps its magnitude-preserving-where-representable
/// semantics rather than overflowing.
pub trait Int:
    Num
    + num_traits::PrimInt
    + num_traits::WrappingSub
    + std::ops::Shl<Self, Output = Self>
    + std::ops::Shr<Self, Output = Self>
    + std::ops::BitAndAssign
    + std::ops::BitOrAssign
    + std::ops::BitXorAssign
    + std::ops::ShlAssign<Self>
    + std::ops::ShrAssign<Self>
{
}

//tp Float
/// The [Float] trait is required for matrix or vector elements which have a
/// float aspect, such as `sqrt`, and for anything trigonometric.
///
/// The trait is essentially `num_traits::Float`, but it supplies
/// implicit methods for construction of a [Float] from an `isize`
/// value, or as a rational from a pair of `isize` values, plus the
/// set of compile-time constants the function library needs.
///
/// As num_traits::Float includes num_traits::NumCast it is not
/// possible to require, as would perhaps be desired, a From<f32>
/// trait, without conflicts occurring.
pub trait Float: Num + num_traits::Float {
    //fp int
    /// Create a [Float] from an `isize` value; this should support
    /// constant implementations with no run-time overhead.
    #[inline]
    fn int(n: isize) -> Self {
        Self::from(n).unwrap()
    }

    //fp frac
    /// Create a [Float] as a fraction described by a numerator and
    /// denomiator pair of `isize` values; this should support
    /// constant implementations with no run-time overhead.
    #[inline]
    fn frac(n: isize, d: usize) -> Self {
        Self::from(n).unwrap() / Self::from(d).unwrap()
    }

    //fp lit
    /// Create a [Float] from an `f64` literal; the one place the crate
    /// writes its numeric constants, each at full binary64 precision.
    #[inline]
    fn lit(v: f64) -> Self {
        Self::from(v).unwrap()
    }

    //fp bits_signed
    /// The IEEE bit pattern of the value as a signed integer, widened
    /// to 64 bits; used by the ULP comparisons
    fn bits_signed(self) -> i64;

    //fp pi and friends
    /// Return the value of PI
    #[inline]
    fn pi() -> Self {
        Self::lit(std::f64::consts::PI)
    }
    /// Return the value of 2*PI
    #[inline]
    fn tau() -> Self {
        Self::lit(std::f64::consts::TAU)
    }
    /// Return the value of 2*PI; both spellings are exposed
    #[inline]
    fn two_pi() -> Self {
        Self::tau()
    }
    /// Return the value of PI/2
    #[inline]
    fn half_pi() -> Self {
        Self::lit(std::f64::consts::FRAC_PI_2)
    }
    /// Return the value of PI/4
    #[inline]
    fn quarter_pi() -> Self {
        Self::lit(std::f64::consts::FRAC_PI_4)
    }
    /// Return the value of 3*PI/2
    #[inline]
    fn three_over_two_pi() -> Self {
        Self::lit(4.712_388_980_384_69)
    }
    /// Return the value of 1/PI
    #[inline]
    fn one_over_pi() -> Self {
        Self::lit(std::f64::consts::FRAC_1_PI)
    }
    /// Return the value of 1/(2*PI)
    #[inline]
    fn one_over_two_pi() -> Self {
        Self::lit(0.159_154_943_091_895_34)
    }
    /// Return the value of 2/PI
    #[inline]
    fn two_over_pi() -> Self {
        Self::lit(std::f64::consts::FRAC_2_PI)
    }
    /// Return the value of 4/PI
    #[inline]
    fn four_over_pi() -> Self {
        Self::lit(1.273_239_544_735_162_7)
    }
    /// Return the value of 2/sqrt(PI)
    #[inline]
    fn two_over_root_pi() -> Self {
        Self::lit(std::f64::consts::FRAC_2_SQRT_PI)
    }
    /// Return the value of 1/sqrt(2)
    #[inline]
    fn one_over_root_two() -> Self {
        Self::lit(std::f64::consts::FRAC_1_SQRT_2)
    }
    /// Return the value of sqrt(PI/2)
    #[inline]
    fn root_half_pi() -> Self {
        Self::lit(1.253_314_137_315_500_3)
    }
    /// Return the value of sqrt(2*PI)
    #[inline]
    fn root_two_pi() -> Self {
        Self::lit(2.506_628_274_631_000_7)
    }
    /// Return the value of sqrt(PI)
    #[inline]
    fn root_pi() -> Self {
        Self::lit(1.772_453_850_905_516)
    }
    /// Return the value of sqrt(ln(4))
    #[inline]
    fn root_ln_four() -> Self {
        Self::lit(1.177_410_022_515_475)
    }
    /// Return the value of e
    #[inline]
    fn e() -> Self {
        Self::lit(std::f64::consts::E)
    }
    /// Return the Euler-Mascheroni constant
    #[inline]
    fn euler() -> Self {
        Self::lit(0.577_215_664_901_532_9)
    }
    /// Return the value of sqrt(2)
    #[inline]
    fn root_two() -> Self {
        Self::lit(std::f64::consts::SQRT_2)
    }
    /// Return the value of sqrt(3)
    #[inline]
    fn root_three() -> Self {
        Self::lit(1.732_050_807_568_877_2)
    }
    /// Return the value of sqrt(5)
    #[inline]
    fn root_five() -> Self {
        Self::lit(2.236_067_977_499_79)
    }
    /// Return the value of ln(2)
    #[inline]
    fn ln_two() -> Self {
        Self::lit(std::f64::consts::LN_2)
    }
    /// Return the value of ln(10)
    #[inline]
    fn ln_ten() -> Self {
        Self::lit(std::f64::consts::LN_10)
    }
    /// Return the value of ln(ln(2))
    #[inline]
    fn ln_ln_two() -> Self {
        Self::lit(-0.366_512_920_581_664_3)
    }
    /// Return the value of 1/3
    #[inline]
    fn third() -> Self {
        Self::frac(1, 3)
    }
    /// Return the value of 2/3
    #[inline]
    fn two_thirds() -> Self {
        Self::frac(2, 3)
    }
    /// Return the golden ratio
    #[inline]
    fn golden_ratio() -> Self {
        Self::lit(1.618_033_988_749_895)
    }
    /// Return cos(1/2); the crossover point used by the quaternion
    /// `angle` and `pow` functions when choosing between the asin and
    /// acos recovery paths
    #[inline]
    fn cos_one_over_two() -> Self {
        Self::lit(0.877_582_561_890_372_7)
    }
}

//ti Num for the arithmetic element types
impl Num for f32 {}
impl Num for f64 {}
impl Num for i8 {}
impl Num for i16 {}
impl Num for i32 {}
impl Num for i64 {}
impl Num for u8 {}
impl Num for u16 {}
impl Num for u32 {}
impl Num for u64 {}

//ti Int for the integer element types
impl Int for i8 {}
impl Int for i16 {}
impl Int for i32 {}
impl Int for i64 {}
impl Int for u8 {}
impl Int for u16 {}
impl Int for u32 {}
impl Int for u64 {}

//ti Float for f32/f64
impl Float for f32 {
    #[inline]
    fn bits_signed(self) -> i64 {
        self.to_bits() as i32 as i64
    }
}
impl Float for f64 {
    #[inline]
    fn bits_signed(self) -> i64 {
        self.to_bits() as i64
    }
}

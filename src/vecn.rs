//a Imports
use serde::{Deserialize, Serialize};

use super::vector;
use super::{Float, Int, Num};

//a Macros
//mi index_ops!
macro_rules! index_ops {
    { $t:ident } => {
        impl <T:Num, const D:usize> std::ops::Index<usize> for $t <T, D> {
            type Output = T;
            fn index(&self, index: usize) -> &T {
                &self.data[index]
            }
        }
        impl <T:Num, const D:usize> std::ops::IndexMut<usize> for $t <T, D> {
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.data[index]
            }
        }
    }
}

//mi ref_op!
macro_rules! ref_op {
    { $t:ident, $t_as:ty } => {
        impl <T:Num, const D:usize> std::convert::AsRef<$t_as> for $t <T, D> {
            fn as_ref(&self) -> &$t_as {&self.data}
        }
        impl <T:Num, const D:usize> std::convert::AsMut<$t_as> for $t <T, D> {
            fn as_mut(&mut self) -> &mut $t_as {&mut self.data}
        }
    }
}

//mi binary_op!
macro_rules! binary_op {
    { $t:ident, $bound:ident, $trait_op:ident, $op:ident, $binop:tt, $trait_assign_op:ident, $assign_op:ident, $assign_binop:tt } => {
        impl <T:$bound, const D:usize> std::ops::$trait_op<Self> for $t<T, D> {
            type Output = Self;
            fn $op(self, other: Self) -> Self {
                let mut data = [T::zero();D];
                for i in 0..D {
                    data[i] = self.data[i] $binop other.data[i];
                }
                Self { data }
            }
        }
        impl <T:$bound, const D:usize> std::ops::$trait_assign_op<Self> for $t<T, D> {
            fn $assign_op(&mut self, other: Self) {
                for i in 0..D {self.data[i] $assign_binop other.data[i];}
            }
        }
        impl <T:$bound, const D:usize> std::ops::$trait_op<T> for $t<T, D> {
            type Output = Self;
            fn $op(self, other: T) -> Self {
                let mut data = [T::zero();D];
                for i in 0..D {
                    data[i] = self.data[i] $binop other;
                }
                Self { data }
            }
        }
        impl <T:$bound, const D:usize> std::ops::$trait_assign_op<T> for $t<T, D> {
            fn $assign_op(&mut self, other: T) {
                for i in 0..D {self.data[i] $assign_binop other;}
            }
        }
    }
}

//mi scalar_lhs_ops!
macro_rules! scalar_lhs_ops {
    { $($f:ty),* } => { $(
        impl <const D:usize> std::ops::Add<VecN<$f, D>> for $f {
            type Output = VecN<$f, D>;
            fn add(self, other: VecN<$f, D>) -> VecN<$f, D> { other + self }
        }
        impl <const D:usize> std::ops::Sub<VecN<$f, D>> for $f {
            type Output = VecN<$f, D>;
            fn sub(self, other: VecN<$f, D>) -> VecN<$f, D> { VecN::splat(self) - other }
        }
        impl <const D:usize> std::ops::Mul<VecN<$f, D>> for $f {
            type Output = VecN<$f, D>;
            fn mul(self, other: VecN<$f, D>) -> VecN<$f, D> { other * self }
        }
        impl <const D:usize> std::ops::Div<VecN<$f, D>> for $f {
            type Output = VecN<$f, D>;
            fn div(self, other: VecN<$f, D>) -> VecN<$f, D> { VecN::splat(self) / other }
        }
    )* }
}

//mi accessors!
macro_rules! accessors {
    { $n:literal, $( $get:ident $set:ident $i:literal ),* } => {
        impl <T:Num> VecN<T, $n> {
            $(
                /// Read the component
                #[inline]
                pub fn $get(&self) -> T { self.data[$i] }
                /// Set the component
                #[inline]
                pub fn $set(&mut self, v: T) { self.data[$i] = v; }
            )*
        }
    }
}

//a VecN
//tp VecN
/// The [VecN] is a wrapper around a `D` sized array of [Num]s, the
/// crate's fixed-length vector type for D of 2, 3 or 4.
///
/// Components are named x, y, z, w in index order, with r, g, b, a
/// and s, t, p, q accessor aliases; the underlying `[T; D]` can be
/// borrowed directly for sharing with graphics APIs.
#[derive(Clone, Copy, Debug)]
pub struct VecN<T: Num, const D: usize> {
    data: [T; D],
}

//ip Serialize for VecN
impl<T: Num + serde::Serialize, const D: usize> Serialize for VecN<T, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut seq = serializer.serialize_tuple(D)?;
        for e in self.data.iter() {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}

//ip Deserialize for VecN
impl<'de, T: Num + serde::Deserialize<'de>, const D: usize> Deserialize<'de> for VecN<T, D> {
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
        DE: serde::Deserializer<'de>,
    {
        let array = Vec::<T>::deserialize(deserializer)?;
        if array.len() != D {
            return Err(serde::de::Error::invalid_length(array.len(), &"<D> scalars"));
        }
        let mut data = Self::default();
        for (i, d) in array.into_iter().enumerate() {
            data[i] = d;
        }
        Ok(data)
    }
}

//ip VecN operators
index_ops! { VecN }
ref_op! { VecN, [T;D] }
ref_op! { VecN, [T] }
binary_op! { VecN, Num, Add, add, +, AddAssign, add_assign, += }
binary_op! { VecN, Num, Sub, sub, -, SubAssign, sub_assign, -= }
binary_op! { VecN, Num, Mul, mul, *, MulAssign, mul_assign, *= }
binary_op! { VecN, Num, Div, div, /, DivAssign, div_assign, /= }
binary_op! { VecN, Int, Rem, rem, %, RemAssign, rem_assign, %= }
binary_op! { VecN, Int, BitAnd, bitand, &, BitAndAssign, bitand_assign, &= }
binary_op! { VecN, Int, BitOr, bitor, |, BitOrAssign, bitor_assign, |= }
binary_op! { VecN, Int, BitXor, bitxor, ^, BitXorAssign, bitxor_assign, ^= }
binary_op! { VecN, Int, Shl, shl, <<, ShlAssign, shl_assign, <<= }
binary_op! { VecN, Int, Shr, shr, >>, ShrAssign, shr_assign, >>= }
scalar_lhs_ops! { f32, f64, i8, i16, i32, i64, u8, u16, u32, u64 }

//ip Neg for VecN
impl<T: Num + std::ops::Neg<Output = T>, const D: usize> std::ops::Neg for VecN<T, D> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for d in self.data.iter_mut() {
            *d = -*d;
        }
        self
    }
}

//ip Default for VecN
impl<T: Num, const D: usize> std::default::Default for VecN<T, D> {
    fn default() -> Self {
        Self {
            data: vector::zero(),
        }
    }
}

//ip Display for VecN
impl<T: Num, const D: usize> std::fmt::Display for VecN<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        vector::fmt(f, &self.data)
    }
}

//ip From<[T;D]> for VecN
impl<T: Num, const D: usize> From<[T; D]> for VecN<T, D> {
    fn from(data: [T; D]) -> Self {
        Self { data }
    }
}

//ip From<VecN> for [T;D]
impl<T: Num, const D: usize> From<VecN<T, D>> for [T; D] {
    fn from(s: VecN<T, D>) -> [T; D] {
        s.data
    }
}

//ip VecN
impl<T: Num, const D: usize> VecN<T, D> {
    //fp from_array
    /// Create a vector from an array of [Num]
    #[must_use]
    #[inline]
    pub fn from_array(data: [T; D]) -> Self {
        Self { data }
    }

    //fp splat
    /// Create a vector with every component set to the same value
    #[must_use]
    #[inline]
    pub fn splat(s: T) -> Self {
        Self { data: [s; D] }
    }

    //fp zero
    /// Create a vector whose elements are all zero
    #[must_use]
    #[inline]
    pub fn zero() -> Self {
        Self {
            data: vector::zero(),
        }
    }

    //mp into_array
    /// Take the vector apart into its array
    #[must_use]
    #[inline]
    pub fn into_array(self) -> [T; D] {
        self.data
    }

    //mp is_zero
    /// Return true if the vector is all zeros
    pub fn is_zero(&self) -> bool {
        vector::is_zero(&self.data)
    }

    //mp set_zero
    /// Set the vector to be all zeros
    pub fn set_zero(&mut self) {
        vector::set_zero(&mut self.data)
    }

    //mp reduce_sum
    /// Sum all of the components of the vector
    pub fn reduce_sum(&self) -> T {
        let mut r = T::zero();
        for d in self.data {
            r += d
        }
        r
    }

    //mp dot
    /// Return the dot product of two vectors
    pub fn dot(&self, other: &Self) -> T {
        vector::dot(&self.data, &other.data)
    }

    //mp length_sq
    /// Return the square of the length of the vector
    #[inline]
    pub fn length_sq(&self) -> T {
        self.dot(self)
    }

    //mp equal
    /// Component-wise ==, as a bool array
    pub fn equal(&self, other: &Self) -> [bool; D] {
        vector::equal(&self.data, &other.data)
    }

    //mp not_equal
    /// Component-wise !=, as a bool array
    pub fn not_equal(&self, other: &Self) -> [bool; D] {
        vector::not_equal(&self.data, &other.data)
    }

    //mp less_than
    /// Component-wise <, as a bool array
    pub fn less_than(&self, other: &Self) -> [bool; D] {
        vector::less_than(&self.data, &other.data)
    }

    //mp less_than_equal
    /// Component-wise <=, as a bool array
    pub fn less_than_equal(&self, other: &Self) -> [bool; D] {
        vector::less_than_equal(&self.data, &other.data)
    }

    //mp greater_than
    /// Component-wise >, as a bool array
    pub fn greater_than(&self, other: &Self) -> [bool; D] {
        vector::greater_than(&self.data, &other.data)
    }

    //mp greater_than_equal
    /// Component-wise >=, as a bool array
    pub fn greater_than_equal(&self, other: &Self) -> [bool; D] {
        vector::greater_than_equal(&self.data, &other.data)
    }

    //mp min
    /// Component-wise minimum against a scalar
    #[must_use]
    pub fn min(self, s: T) -> Self {
        vector::min(self.data, s).into()
    }

    //mp max
    /// Component-wise maximum against a scalar
    #[must_use]
    pub fn max(self, s: T) -> Self {
        vector::max(self.data, s).into()
    }

    //mp min_vec
    /// Component-wise minimum of two vectors
    #[must_use]
    pub fn min_vec(self, other: &Self) -> Self {
        vector::min_vec(self.data, &other.data).into()
    }

    //mp max_vec
    /// Component-wise maximum of two vectors
    #[must_use]
    pub fn max_vec(self, other: &Self) -> Self {
        vector::max_vec(self.data, &other.data).into()
    }

    //mp clamp
    /// Clamp every component between the two bounds
    #[must_use]
    pub fn clamp(self, lo: T, hi: T) -> Self {
        vector::clamp(self.data, lo, hi).into()
    }
}

//ip VecN<Float>
impl<T: Float, const D: usize> VecN<T, D> {
    //mp length
    /// Return the length of the vector
    #[inline]
    pub fn length(&self) -> T {
        vector::length(&self.data)
    }

    //mp distance_sq
    /// Return the square of the distance between this vector and another
    #[inline]
    pub fn distance_sq(&self, other: &Self) -> T {
        vector::distance_sq(&self.data, &other.data)
    }

    //mp distance
    /// Return the distance between this vector and another
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        vector::distance(&self.data, &other.data)
    }

    //cp normalize
    /// Scale to unit length; a zero vector yields NaN components
    #[must_use]
    pub fn normalize(self) -> Self {
        vector::normalize(self.data).into()
    }

    //cp mix
    /// Create a linear combination of this vector and another using
    /// parameter `t` from zero to one
    #[must_use]
    pub fn mix(self, other: &Self, t: T) -> Self {
        vector::mix(&self.data, &other.data, t).into()
    }

    //cp abs
    /// Component-wise absolute value
    #[must_use]
    pub fn abs(self) -> Self {
        vector::abs(self.data).into()
    }

    //cp floor
    /// Component-wise floor
    #[must_use]
    pub fn floor(self) -> Self {
        vector::floor(self.data).into()
    }

    //cp ceil
    /// Component-wise ceiling
    #[must_use]
    pub fn ceil(self) -> Self {
        vector::ceil(self.data).into()
    }

    //cp round
    /// Component-wise round, halves away from zero
    #[must_use]
    pub fn round(self) -> Self {
        vector::round(self.data).into()
    }

    //cp fract
    /// Component-wise x - floor(x)
    #[must_use]
    pub fn fract(self) -> Self {
        vector::fract(self.data).into()
    }

    //cp sqrt
    /// Component-wise square root
    #[must_use]
    pub fn sqrt(self) -> Self {
        vector::sqrt(self.data).into()
    }

    //mp is_nan
    /// Component-wise NaN test, as a bool array
    pub fn is_nan(&self) -> [bool; D] {
        vector::is_nan(&self.data)
    }

    //mp is_inf
    /// Component-wise infinity test, as a bool array
    pub fn is_inf(&self) -> [bool; D] {
        vector::is_inf(&self.data)
    }

    //mp equal_eps
    /// Component-wise equality within an absolute epsilon
    pub fn equal_eps(&self, other: &Self, epsilon: T) -> [bool; D] {
        vector::equal_eps(&self.data, &other.data, epsilon)
    }

    //mp equal_ulps
    /// Component-wise equality within a bit-distance tolerance
    pub fn equal_ulps(&self, other: &Self, ulps: i32) -> [bool; D] {
        vector::equal_ulps(&self.data, &other.data, ulps)
    }
}

//ip VecN<T, 2>
impl<T: Num> VecN<T, 2> {
    //fp new
    /// Create a 2-component vector
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    //cp extend
    /// Append a component, making a 3-component vector
    #[must_use]
    pub fn extend(self, z: T) -> VecN<T, 3> {
        VecN::from_array([self.data[0], self.data[1], z])
    }

    //mp cross2
    /// The scalar pseudo-cross x0*y1 - y0*x1, broadcast into both
    /// components
    #[must_use]
    pub fn cross2(&self, other: &Self) -> Self {
        vector::cross2(&self.data, &other.data).into()
    }
}

//ip VecN<T, 3>
impl<T: Num> VecN<T, 3> {
    //fp new
    /// Create a 3-component vector
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    //cp extend
    /// Append a component, making a 4-component vector
    #[must_use]
    pub fn extend(self, w: T) -> VecN<T, 4> {
        VecN::from_array([self.data[0], self.data[1], self.data[2], w])
    }

    //cp xy
    /// Drop the last component
    #[must_use]
    pub fn xy(self) -> VecN<T, 2> {
        VecN::from_array([self.data[0], self.data[1]])
    }

    //mp cross
    /// Cross product of two 3-component vectors
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        vector::cross(&self.data, &other.data).into()
    }
}

//ip VecN<T, 4>
impl<T: Num> VecN<T, 4> {
    //fp new
    /// Create a 4-component vector
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    //cp xyz
    /// Drop the last component
    #[must_use]
    pub fn xyz(self) -> VecN<T, 3> {
        VecN::from_array([self.data[0], self.data[1], self.data[2]])
    }

    //cp xy
    /// Keep only the first two components
    #[must_use]
    pub fn xy(self) -> VecN<T, 2> {
        VecN::from_array([self.data[0], self.data[1]])
    }
}

//a Component accessors, with the r,g,b,a and s,t,p,q aliases
accessors! { 2, x set_x 0, y set_y 1, r set_r 0, g set_g 1, s set_s 0, t set_t 1 }
accessors! { 3, x set_x 0, y set_y 1, z set_z 2, r set_r 0, g set_g 1, b set_b 2, s set_s 0, t set_t 1, p set_p 2 }
accessors! { 4, x set_x 0, y set_y 1, z set_z 2, w set_w 3, r set_r 0, g set_g 1, b set_b 2, a set_a 3, s set_s 0, t set_t 1, p set_p 2, q set_q 3 }

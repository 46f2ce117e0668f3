//a Imports
use serde::{Deserialize, Serialize};

use super::{quat, vector};
use super::{Float, MatN, VecN};

//a Macros
//mi binary_op!
macro_rules! binary_op {
    { op_self, $t:ident, $trait_op:ident, $op:ident, $binop:tt, $trait_assign_op:ident, $assign_op:ident, $assign_binop:tt } => {
        impl <F:Float> std::ops::$trait_op<Self> for $t<F> {
            type Output = Self;
            fn $op(self, other: Self) -> Self {
                let mut data = [F::zero();4];
                for i in 0..4 {
                    data[i] = self.data[i] $binop other.data[i];
                }
                Self { data }
            }
        }
        impl <F:Float> std::ops::$trait_assign_op<Self> for $t<F> {
            fn $assign_op(&mut self, other: Self) {
                for i in 0..4 {self.data[i] $assign_binop other.data[i];}
            }
        }
    };
    { op_f, $t:ident, $trait_op:ident, $op:ident, $binop:tt, $trait_assign_op:ident, $assign_op:ident, $assign_binop:tt } => {
        impl <F:Float> std::ops::$trait_op<F> for $t<F> {
            type Output = Self;
            fn $op(self, other: F) -> Self {
                let mut data = [F::zero();4];
                for i in 0..4 {
                    data[i] = self.data[i] $binop other;
                }
                Self { data }
            }
        }
        impl <F:Float> std::ops::$trait_assign_op<F> for $t<F> {
            fn $assign_op(&mut self, other: F) {
                for i in 0..4 {self.data[i] $assign_binop other;}
            }
        }
    };
}

//a Quat
//tp Quat
/// The [Quat] is a rotation quaternion over a [Float] element type,
/// stored as an `[F; 4]` in x, y, z, w order with the scalar part
/// last; constructors and destructors speak (w, x, y, z).
///
/// A [Quat] is not invariantly unit length: operations that assume a
/// unit quaternion say so, and [Quat::normalize] returns the identity
/// rotation for an effectively zero input.
#[derive(Clone, Copy, Debug)]
pub struct Quat<F: Float> {
    data: [F; 4],
}

//ip Serialize for Quat
impl<F: Float + serde::Serialize> Serialize for Quat<F> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut seq = serializer.serialize_tuple(4)?;
        for e in self.data.iter() {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}

//ip Deserialize for Quat
impl<'de, F: Float + serde::Deserialize<'de>> Deserialize<'de> for Quat<F> {
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
        DE: serde::Deserializer<'de>,
    {
        let array = Vec::<F>::deserialize(deserializer)?;
        if array.len() != 4 {
            return Err(serde::de::Error::invalid_length(array.len(), &"4 scalars"));
        }
        let mut data = [F::zero(); 4];
        for (i, d) in array.into_iter().enumerate() {
            data[i] = d;
        }
        Ok(Self { data })
    }
}

//ip Quat operators
binary_op! { op_self, Quat, Add, add, +, AddAssign, add_assign, += }
binary_op! { op_self, Quat, Sub, sub, -, SubAssign, sub_assign, -= }
binary_op! { op_f, Quat, Mul, mul, *, MulAssign, mul_assign, *= }
binary_op! { op_f, Quat, Div, div, /, DivAssign, div_assign, /= }

//ip Index for Quat
impl<F: Float> std::ops::Index<usize> for Quat<F> {
    type Output = F;
    fn index(&self, index: usize) -> &F {
        &self.data[index]
    }
}
impl<F: Float> std::ops::IndexMut<usize> for Quat<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        &mut self.data[index]
    }
}

//ip AsRef/AsMut for Quat
impl<F: Float> std::convert::AsRef<[F; 4]> for Quat<F> {
    fn as_ref(&self) -> &[F; 4] {
        &self.data
    }
}
impl<F: Float> std::convert::AsMut<[F; 4]> for Quat<F> {
    fn as_mut(&mut self) -> &mut [F; 4] {
        &mut self.data
    }
}

//ip Neg for Quat
impl<F: Float> std::ops::Neg for Quat<F> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for d in self.data.iter_mut() {
            *d = -*d;
        }
        self
    }
}

//ip Mul<Self> for Quat - the Hamilton product
impl<F: Float> std::ops::Mul<Self> for Quat<F> {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        Self {
            data: quat::multiply(&self.data, &other.data),
        }
    }
}

//ip MulAssign<Self> for Quat
impl<F: Float> std::ops::MulAssign<Self> for Quat<F> {
    fn mul_assign(&mut self, other: Self) {
        self.data = quat::multiply(&self.data, &other.data);
    }
}

//ip Mul<VecN<F,3>> for Quat - rotate a vector
impl<F: Float> std::ops::Mul<VecN<F, 3>> for Quat<F> {
    type Output = VecN<F, 3>;
    fn mul(self, v: VecN<F, 3>) -> VecN<F, 3> {
        quat::rotate_vec3(&self.data, v.as_ref()).into()
    }
}

//ip Default for Quat - the identity rotation
impl<F: Float> std::default::Default for Quat<F> {
    fn default() -> Self {
        Self {
            data: quat::identity(),
        }
    }
}

//ip Display for Quat
impl<F: Float> std::fmt::Display for Quat<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        vector::fmt(f, &self.data)
    }
}

//ip From<[F;4]> for Quat
impl<F: Float> From<[F; 4]> for Quat<F> {
    fn from(data: [F; 4]) -> Self {
        Self { data }
    }
}

//ip From<Quat> for [F;4]
impl<F: Float> From<Quat<F>> for [F; 4] {
    fn from(s: Quat<F>) -> [F; 4] {
        s.data
    }
}

//ip Quat
impl<F: Float> Quat<F> {
    //fp identity
    /// Create the identity rotation (w=1, x=y=z=0)
    #[must_use]
    pub fn identity() -> Self {
        Self {
            data: quat::identity(),
        }
    }

    //fp new
    /// Create a quaternion from its (w, x, y, z) components
    #[must_use]
    pub fn new(w: F, x: F, y: F, z: F) -> Self {
        Self {
            data: quat::of_wxyz(w, x, y, z),
        }
    }

    //fp from_array
    /// Create a quaternion from an array in x, y, z, w order
    #[must_use]
    pub fn from_array(data: [F; 4]) -> Self {
        Self { data }
    }

    //fp from_euler
    /// The rotation of Euler angles (pitch, yaw, roll) in radians
    #[must_use]
    pub fn from_euler(euler: &VecN<F, 3>) -> Self {
        Self {
            data: quat::from_euler(euler.as_ref()),
        }
    }

    //fp between
    /// The rotation carrying unit vector u onto unit vector v
    #[must_use]
    pub fn between(u: &VecN<F, 3>, v: &VecN<F, 3>) -> Self {
        Self {
            data: quat::between(u.as_ref(), v.as_ref()),
        }
    }

    //fp of_axis_angle
    /// The rotation by an angle about a unit axis
    #[must_use]
    pub fn of_axis_angle(angle: F, axis: &VecN<F, 3>) -> Self {
        Self {
            data: quat::of_axis_angle(angle, axis.as_ref()),
        }
    }

    //fp from_rotation3
    /// The quaternion of a pure rotation matrix
    #[must_use]
    pub fn from_rotation3(m: &MatN<F, 3>) -> Self {
        Self {
            data: quat::of_rotation3(&m.into_cols()),
        }
    }

    //fp from_rotation4
    /// The quaternion of the rotation in the upper-left of a 4x4
    /// matrix
    #[must_use]
    pub fn from_rotation4(m: &MatN<F, 4>) -> Self {
        Self {
            data: quat::of_rotation4(&m.into_cols()),
        }
    }

    //fp look_at
    /// The rotation of a camera looking along a direction with an up
    /// vector
    #[must_use]
    pub fn look_at(direction: &VecN<F, 3>, up: &VecN<F, 3>) -> Self {
        Self {
            data: quat::look_at(direction.as_ref(), up.as_ref()),
        }
    }

    //mp into_array
    /// Take the quaternion apart into its x, y, z, w array
    #[must_use]
    pub fn into_array(self) -> [F; 4] {
        self.data
    }

    //mp as_wxyz
    /// Break out into (w, x, y, z)
    pub fn as_wxyz(&self) -> (F, F, F, F) {
        quat::as_wxyz(&self.data)
    }

    //ap w, x, y, z
    /// The scalar part
    #[inline]
    pub fn w(&self) -> F {
        self.data[3]
    }
    /// The i component of the vector part
    #[inline]
    pub fn x(&self) -> F {
        self.data[0]
    }
    /// The j component of the vector part
    #[inline]
    pub fn y(&self) -> F {
        self.data[1]
    }
    /// The k component of the vector part
    #[inline]
    pub fn z(&self) -> F {
        self.data[2]
    }

    //mp dot
    /// The four-component dot product with another quaternion
    pub fn dot(&self, other: &Self) -> F {
        quat::dot(&self.data, &other.data)
    }

    //mp length_sq
    /// The squared length
    #[inline]
    pub fn length_sq(&self) -> F {
        self.dot(self)
    }

    //mp length
    /// The length sqrt(q.q)
    #[inline]
    pub fn length(&self) -> F {
        quat::length(&self.data)
    }

    //cp normalize
    /// Scale to unit length; an effectively zero quaternion yields
    /// the identity rotation
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            data: quat::normalize(self.data),
        }
    }

    //cp conjugate
    /// Negate the vector part
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self {
            data: quat::conjugate(&self.data),
        }
    }

    //cp inverse
    /// The multiplicative inverse
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            data: quat::inverse(&self.data),
        }
    }

    //cp rotate
    /// Apply a further rotation by an angle about an axis
    #[must_use]
    pub fn rotate(self, angle: F, axis: &VecN<F, 3>) -> Self {
        Self {
            data: quat::rotate(&self.data, angle, axis.as_ref()),
        }
    }

    //cp exp
    /// The quaternion exponential of the vector part
    #[must_use]
    pub fn exp(self) -> Self {
        Self {
            data: quat::exp(&self.data),
        }
    }

    //cp log
    /// The quaternion logarithm
    #[must_use]
    pub fn log(self) -> Self {
        Self {
            data: quat::log(&self.data),
        }
    }

    //cp pow
    /// Raise to a real power
    #[must_use]
    pub fn pow(self, y: F) -> Self {
        Self {
            data: quat::pow(&self.data, y),
        }
    }

    //cp sqrt
    /// The square root, as pow(1/2)
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self {
            data: quat::sqrt(&self.data),
        }
    }

    //cp lerp
    /// Component-wise linear interpolation toward another quaternion
    #[must_use]
    pub fn lerp(self, other: &Self, a: F) -> Self {
        Self {
            data: quat::lerp(&self.data, &other.data, a),
        }
    }

    //cp mix
    /// Spherical interpolation, honouring the sign of the second
    /// operand
    #[must_use]
    pub fn mix(self, other: &Self, a: F) -> Self {
        Self {
            data: quat::mix(&self.data, &other.data, a),
        }
    }

    //cp slerp
    /// Spherical interpolation along the shorter path
    #[must_use]
    pub fn slerp(self, other: &Self, a: F) -> Self {
        Self {
            data: quat::slerp(&self.data, &other.data, a),
        }
    }

    //mp angle
    /// The rotation angle, for a unit quaternion
    pub fn angle(&self) -> F {
        quat::angle(&self.data)
    }

    //mp axis
    /// The rotation axis, for a unit quaternion
    pub fn axis(&self) -> VecN<F, 3> {
        quat::axis(&self.data).into()
    }

    //mp pitch
    /// The rotation about X in the Euler decomposition
    pub fn pitch(&self) -> F {
        quat::pitch(&self.data)
    }

    //mp yaw
    /// The rotation about Y in the Euler decomposition
    pub fn yaw(&self) -> F {
        quat::yaw(&self.data)
    }

    //mp roll
    /// The rotation about Z in the Euler decomposition
    pub fn roll(&self) -> F {
        quat::roll(&self.data)
    }

    //mp euler_angles
    /// The (pitch, yaw, roll) Euler angles in radians
    pub fn euler_angles(&self) -> VecN<F, 3> {
        quat::euler_angles(&self.data).into()
    }

    //mp mat3
    /// The 3x3 rotation matrix, for a unit quaternion
    #[must_use]
    pub fn mat3(&self) -> MatN<F, 3> {
        quat::mat3_cast(&self.data).into()
    }

    //mp mat4
    /// The 4x4 rotation matrix, for a unit quaternion
    #[must_use]
    pub fn mat4(&self) -> MatN<F, 4> {
        quat::mat4_cast(&self.data).into()
    }

    //mp equal
    /// Component-wise ==, in x, y, z, w order
    ///
    /// A rotation and its negation are component-unequal even though
    /// they rotate identically.
    pub fn equal(&self, other: &Self) -> [bool; 4] {
        quat::equal(&self.data, &other.data)
    }

    //mp not_equal
    /// Component-wise !=
    pub fn not_equal(&self, other: &Self) -> [bool; 4] {
        quat::not_equal(&self.data, &other.data)
    }

    //mp equal_eps
    /// Component-wise equality within an absolute epsilon
    pub fn equal_eps(&self, other: &Self, epsilon: F) -> [bool; 4] {
        quat::equal_eps(&self.data, &other.data, epsilon)
    }

    //mp is_nan
    /// Component-wise NaN test
    pub fn is_nan(&self) -> [bool; 4] {
        quat::is_nan(&self.data)
    }

    //mp is_inf
    /// Component-wise infinity test
    pub fn is_inf(&self) -> [bool; 4] {
        quat::is_inf(&self.data)
    }
}

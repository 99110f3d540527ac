use crate::rotation::{AxisAngle, EulerAngles};
use crate::vector::Vector3;
use crate::{Number, Real};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// A quaternion with scalar part `w`
///
/// Structurally a 4-component value like [`crate::Vector4`], but with the
/// Hamilton product as its multiplication. Unit quaternions represent 3d
/// rotations; build them from [`AxisAngle`] or [`EulerAngles`] and apply
/// them to vectors with `*`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Quaternion<T: Number> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T: Number> Quaternion<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// The rotation that leaves vectors unchanged
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Magnitude squared
    #[inline]
    pub fn mag2(self) -> T {
        self.dot(self)
    }
}

impl<T: Number + Neg<Output = T>> Quaternion<T> {
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl<T: Real> Quaternion<T> {
    /// Magnitude
    #[inline]
    pub fn mag(self) -> T {
        self.mag2().sqrt()
    }

    /// Returns the unit quaternion with the same orientation
    pub fn normal(self) -> Self {
        self / self.mag()
    }

    /// Normalizes in place
    pub fn normalize(&mut self) {
        *self = self.normal();
    }

    /// Multiplicative inverse; for unit quaternions this equals the
    /// conjugate
    pub fn inverse(self) -> Self {
        self.conjugate() / self.mag2()
    }

    /// Linear interpolation of the raw components, without renormalizing
    pub fn lerp(start: Self, end: Self, t: T) -> Self {
        start + (end - start) * t
    }

    /// Spherical linear interpolation along the arc from `start` to `end`
    pub fn slerp(start: Self, end: Self, t: T) -> Self {
        let cos_theta = start.dot(end);
        // nearly parallel orientations degenerate to a normalized lerp
        if cos_theta > T::one() - T::epsilon() {
            return Self::lerp(start, end, t).normal();
        }
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let start_weight = ((T::one() - t) * theta).sin() / sin_theta;
        let end_weight = (t * theta).sin() / sin_theta;
        start * start_weight + end * end_weight
    }

    /// Like [`Quaternion::slerp`], but negates `end` when the two
    /// quaternions sit on opposite hemispheres, taking the shorter of the
    /// two arcs between the orientations they represent
    pub fn slerp_shortest(start: Self, end: Self, t: T) -> Self {
        if start.dot(end) < T::zero() {
            Self::slerp(start, -end, t)
        } else {
            Self::slerp(start, end, t)
        }
    }

    /// The axis and angle of the rotation this unit quaternion represents
    pub fn axis_angle(self) -> AxisAngle<T> {
        let two = T::one() + T::one();
        let w = self.w.min(T::one()).max(-T::one());
        let angle = two * w.acos();
        let sin2 = T::one() - w * w;
        if sin2 <= T::epsilon() {
            // the axis of a (near-)identity rotation is arbitrary
            AxisAngle::new(Vector3::new(T::one(), T::zero(), T::zero()), angle)
        } else {
            let sin = sin2.sqrt();
            AxisAngle::new(
                Vector3::new(self.x / sin, self.y / sin, self.z / sin),
                angle,
            )
        }
    }

    /// The euler angles of the rotation this unit quaternion represents
    pub fn euler_angles(self) -> EulerAngles<T> {
        let one = T::one();
        let two = one + one;
        let pitch = (two * (self.w * self.x + self.y * self.z))
            .atan2(one - two * (self.x * self.x + self.y * self.y));
        let yaw = (two * (self.w * self.y - self.z * self.x))
            .min(one)
            .max(-one)
            .asin();
        let roll = (two * (self.w * self.z + self.x * self.y))
            .atan2(one - two * (self.y * self.y + self.z * self.z));
        EulerAngles::new(pitch, yaw, roll)
    }
}

impl<T: Real> From<AxisAngle<T>> for Quaternion<T> {
    fn from(axis_angle: AxisAngle<T>) -> Self {
        let two = T::one() + T::one();
        let half = axis_angle.angle / two;
        let axis = axis_angle.axis.normal();
        let sin = half.sin();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }
}

impl<T: Real> From<Quaternion<T>> for AxisAngle<T> {
    fn from(quaternion: Quaternion<T>) -> Self {
        quaternion.axis_angle()
    }
}

impl<T: Real> From<EulerAngles<T>> for Quaternion<T> {
    fn from(angles: EulerAngles<T>) -> Self {
        let two = T::one() + T::one();
        let (sin_pitch, cos_pitch) = (angles.pitch / two).sin_cos();
        let (sin_yaw, cos_yaw) = (angles.yaw / two).sin_cos();
        let (sin_roll, cos_roll) = (angles.roll / two).sin_cos();
        Self::new(
            sin_pitch * cos_yaw * cos_roll - cos_pitch * sin_yaw * sin_roll,
            cos_pitch * sin_yaw * cos_roll + sin_pitch * cos_yaw * sin_roll,
            cos_pitch * cos_yaw * sin_roll - sin_pitch * sin_yaw * cos_roll,
            cos_pitch * cos_yaw * cos_roll + sin_pitch * sin_yaw * sin_roll,
        )
    }
}

impl<T: Real> From<Quaternion<T>> for EulerAngles<T> {
    fn from(quaternion: Quaternion<T>) -> Self {
        quaternion.euler_angles()
    }
}

impl<T: Number + Neg<Output = T>> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Number> Add<Self> for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl<T: Number> AddAssign<Self> for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Number> Sub<Self> for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl<T: Number> SubAssign<Self> for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Number> Mul<Self> for Quaternion<T> {
    type Output = Self;

    /// Hamilton product, composing `rhs` first and `self` second
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<T: Number> MulAssign<Self> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Number> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T: Number> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl<T: Real> Div<Self> for Quaternion<T> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.inverse()
    }
}

impl<T: Number> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    /// Rotates a vector by this (unit) quaternion
    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        let two = T::one() + T::one();
        let axis = Vector3::new(self.x, self.y, self.z);
        let t = axis.cross(rhs) * two;
        rhs + t * self.w + axis.cross(t)
    }
}

impl<T: Number + fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl<T> AbsDiffEq for Quaternion<T>
where
    T: Number + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: Number + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quaternion<T>
where
    T: Number + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
            && self.w.ulps_eq(&other.w, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use crate::quaternion::Quaternion;
    use crate::rotation::{AxisAngle, EulerAngles};
    use crate::vector::Vector3;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    #[test]
    fn identity_is_the_multiplicative_unit() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * Quaternion::identity(), q);
        assert_eq!(Quaternion::identity() * q, q);
    }

    #[test]
    fn hamilton_product_of_basis_elements() {
        let i = Quaternion::new(1, 0, 0, 0);
        let j = Quaternion::new(0, 1, 0, 0);
        let k = Quaternion::new(0, 0, 1, 0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, -Quaternion::identity());
    }

    #[test]
    fn rotates_vectors() {
        let quarter_turn: Quaternion<f64> =
            AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2).into();
        assert_relative_eq!(
            quarter_turn * Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            quarter_turn * Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(0.0, 0.0, 5.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_composes_through_multiplication() {
        let quarter_turn: Quaternion<f64> =
            AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2).into();
        let half_turn = quarter_turn * quarter_turn;
        assert_relative_eq!(
            half_turn * Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn magnitude_and_normalization() {
        let q = Quaternion::new(0.0f32, 3.0, 0.0, 4.0);
        assert_eq!(q.mag2(), 25.0);
        assert_eq!(q.mag(), 5.0);
        assert_relative_eq!(q.normal(), Quaternion::new(0.0, 0.6, 0.0, 0.8));

        let mut r = q;
        r.normalize();
        assert_relative_eq!(r.mag(), 1.0);
    }

    #[test]
    fn conjugate_negates_the_vector_part() {
        let q = Quaternion::new(1, 2, 3, 4);
        assert_eq!(q.conjugate(), Quaternion::new(-1, -2, -3, 4));
    }

    #[test]
    fn inverse_undoes_multiplication() {
        let q = Quaternion::new(0.0f64, 3.0, 0.0, 4.0);
        assert_relative_eq!(q * q.inverse(), Quaternion::identity(), epsilon = 1e-12);

        let r = q / q;
        assert_relative_eq!(r, Quaternion::identity(), epsilon = 1e-12);
    }

    #[test]
    fn axis_angle_round_trip() {
        let source = AxisAngle::new(Vector3::new(0.0f64, 0.0, 1.0), FRAC_PI_3);
        let recovered = Quaternion::from(source).axis_angle();
        assert_relative_eq!(recovered.axis, source.axis, epsilon = 1e-12);
        assert_relative_eq!(recovered.angle, source.angle, epsilon = 1e-12);
    }

    #[test]
    fn euler_angles_round_trip() {
        let source = EulerAngles::new(0.3f64, -0.4, 0.5);
        let recovered = Quaternion::from(source).euler_angles();
        assert_relative_eq!(recovered.pitch, source.pitch, epsilon = 1e-12);
        assert_relative_eq!(recovered.yaw, source.yaw, epsilon = 1e-12);
        assert_relative_eq!(recovered.roll, source.roll, epsilon = 1e-12);
    }

    #[test]
    fn euler_angles_compose_pitch_then_yaw_then_roll() {
        let angles = EulerAngles::new(0.3f64, -0.4, 0.5);
        let pitch: Quaternion<f64> =
            AxisAngle::new(Vector3::new(1.0, 0.0, 0.0), angles.pitch).into();
        let yaw: Quaternion<f64> = AxisAngle::new(Vector3::new(0.0, 1.0, 0.0), angles.yaw).into();
        let roll: Quaternion<f64> = AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), angles.roll).into();
        assert_relative_eq!(
            Quaternion::from(angles),
            roll * yaw * pitch,
            epsilon = 1e-12
        );
    }

    #[test]
    fn dot_and_lerp() {
        let a = Quaternion::new(1.0f32, 0.0, 0.0, 0.0);
        let b = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        assert_eq!(a.dot(b), 0.0);
        assert_relative_eq!(
            Quaternion::lerp(a, b, 0.5),
            Quaternion::new(0.5, 0.5, 0.0, 0.0)
        );
    }

    #[test]
    fn slerp_interpolates_the_rotation_angle() {
        let start = Quaternion::<f64>::identity();
        let end: Quaternion<f64> = AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2).into();

        assert_relative_eq!(Quaternion::slerp(start, end, 0.0), start, epsilon = 1e-12);
        assert_relative_eq!(Quaternion::slerp(start, end, 1.0), end, epsilon = 1e-12);

        let expected_midpoint: Quaternion<f64> =
            AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_4).into();
        assert_relative_eq!(
            Quaternion::slerp(start, end, 0.5),
            expected_midpoint,
            epsilon = 1e-12
        );
    }

    #[test]
    fn slerp_shortest_flips_the_far_hemisphere() {
        let start = Quaternion::<f64>::identity();
        let end: Quaternion<f64> = AxisAngle::new(Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2).into();
        assert_relative_eq!(
            Quaternion::slerp_shortest(start, -end, 0.5),
            Quaternion::slerp(start, end, 0.5),
            epsilon = 1e-12
        );
    }

    #[test]
    fn display() {
        assert_eq!(Quaternion::new(1, 2, 3, 4).to_string(), "(1, 2, 3, 4)");
    }
}

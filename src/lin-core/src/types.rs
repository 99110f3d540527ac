//! GLSL-flavored aliases for the common concrete instantiations.
//!
//! Matrix aliases read rows-by-columns, e.g. [`Mat2x3`] has 2 rows and 3
//! columns.

use crate::matrix::Matrix;
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3, Vector4};

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

pub type DVec2 = Vector2<f64>;
pub type DVec3 = Vector3<f64>;
pub type DVec4 = Vector4<f64>;

pub type IVec2 = Vector2<i32>;
pub type IVec3 = Vector3<i32>;
pub type IVec4 = Vector4<i32>;

pub type UVec2 = Vector2<u32>;
pub type UVec3 = Vector3<u32>;
pub type UVec4 = Vector4<u32>;

pub type Mat2x2 = Matrix<f32, 2, 2>;
pub type Mat2x3 = Matrix<f32, 2, 3>;
pub type Mat2x4 = Matrix<f32, 2, 4>;
pub type Mat3x2 = Matrix<f32, 3, 2>;
pub type Mat3x3 = Matrix<f32, 3, 3>;
pub type Mat3x4 = Matrix<f32, 3, 4>;
pub type Mat4x2 = Matrix<f32, 4, 2>;
pub type Mat4x3 = Matrix<f32, 4, 3>;
pub type Mat4x4 = Matrix<f32, 4, 4>;
pub type Mat2 = Mat2x2;
pub type Mat3 = Mat3x3;
pub type Mat4 = Mat4x4;

pub type DMat2x2 = Matrix<f64, 2, 2>;
pub type DMat2x3 = Matrix<f64, 2, 3>;
pub type DMat2x4 = Matrix<f64, 2, 4>;
pub type DMat3x2 = Matrix<f64, 3, 2>;
pub type DMat3x3 = Matrix<f64, 3, 3>;
pub type DMat3x4 = Matrix<f64, 3, 4>;
pub type DMat4x2 = Matrix<f64, 4, 2>;
pub type DMat4x3 = Matrix<f64, 4, 3>;
pub type DMat4x4 = Matrix<f64, 4, 4>;
pub type DMat2 = DMat2x2;
pub type DMat3 = DMat3x3;
pub type DMat4 = DMat4x4;

pub type Quat = Quaternion<f32>;
pub type DQuat = Quaternion<f64>;

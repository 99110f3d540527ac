//! Affine and projection transform builders for 4x4 matrices.

use crate::matrix::Matrix;
use crate::vector::{Vector3, Vector4};
use crate::Real;

impl<T: Real> Matrix<T, 4, 4> {
    /// Affine translation by `displacement`
    pub fn translation(displacement: Vector3<T>) -> Self {
        let mut result = Self::identity();
        result[(0, 3)] = displacement.x;
        result[(1, 3)] = displacement.y;
        result[(2, 3)] = displacement.z;
        result
    }

    /// Affine rotation whose local z axis points along `out`, with `up`
    /// fixing the roll around it
    pub fn rotation(out: Vector3<T>, up: Vector3<T>) -> Self {
        let z_axis = out.normal();
        let x_axis = up.cross(z_axis).normal();
        let y_axis = z_axis.cross(x_axis);
        Self::new(
            x_axis.extend(T::zero()),
            y_axis.extend(T::zero()),
            z_axis.extend(T::zero()),
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        )
    }

    /// Affine scale along the three axes
    pub fn scale(x_scale: T, y_scale: T, z_scale: T) -> Self {
        let mut result = Self::identity();
        result[(0, 0)] = x_scale;
        result[(1, 1)] = y_scale;
        result[(2, 2)] = z_scale;
        result
    }

    /// Orthographic projection onto the given clipping box, mapping it to
    /// the [-1, 1] cube with the near plane at z = -1
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let mut result = Self::identity();
        result[(0, 0)] = two / (right - left);
        result[(1, 1)] = two / (top - bottom);
        result[(2, 2)] = -two / (far - near);
        result[(0, 3)] = -(right + left) / (right - left);
        result[(1, 3)] = -(top + bottom) / (top - bottom);
        result[(2, 3)] = -(far + near) / (far - near);
        result
    }

    /// Perspective projection with vertical field of view `fov` in radians,
    /// looking down the negative z axis
    pub fn perspective(fov: T, aspect: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let focal = T::one() / (fov / two).tan();
        let mut result = Self::default();
        result[(0, 0)] = focal / aspect;
        result[(1, 1)] = focal;
        result[(2, 2)] = (far + near) / (near - far);
        result[(2, 3)] = (two * far * near) / (near - far);
        result[(3, 2)] = -T::one();
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::Matrix;
    use crate::vector::{Vector3, Vector4};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translation_moves_points() {
        let m = Matrix::<f32, 4, 4>::translation(Vector3::new(1.0, 2.0, 3.0));
        let p = Vector4::new(5.0, 5.0, 5.0, 1.0);
        assert_relative_eq!(m * p, Vector4::new(6.0, 7.0, 8.0, 1.0));

        // directions (w = 0) are unaffected
        let d = Vector4::new(5.0, 5.0, 5.0, 0.0);
        assert_relative_eq!(m * d, d);
    }

    #[test]
    fn scale_stretches_axes() {
        let m = Matrix::<f32, 4, 4>::scale(2.0, 3.0, 4.0);
        let p = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(m * p, Vector4::new(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn rotation_with_canonical_axes_is_identity() {
        let m = Matrix::<f32, 4, 4>::rotation(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(m, Matrix::identity());
    }

    #[test]
    fn rotation_maps_local_z_onto_out() {
        let out = Vector3::new(1.0f32, 0.0, 0.0);
        let up = Vector3::new(0.0, 1.0, 0.0);
        let m = Matrix::<f32, 4, 4>::rotation(out, up);
        assert_relative_eq!(m * Vector4::new(0.0, 0.0, 1.0, 0.0), out.extend(0.0));
        // the basis stays orthonormal
        assert_relative_eq!(m.transpose() * m, Matrix::identity());
    }

    #[test]
    fn orthographic_maps_the_box_corners() {
        let m = Matrix::<f32, 4, 4>::orthographic(-10.0, 10.0, -5.0, 5.0, 1.0, 11.0);
        assert_relative_eq!(
            m * Vector4::new(-10.0, -5.0, -1.0, 1.0),
            Vector4::new(-1.0, -1.0, -1.0, 1.0)
        );
        assert_relative_eq!(
            m * Vector4::new(10.0, 5.0, -11.0, 1.0),
            Vector4::new(1.0, 1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let near = 0.1f32;
        let far = 100.0;
        let m = Matrix::<f32, 4, 4>::perspective(FRAC_PI_2, 1.0, near, far);

        let on_near = m * Vector4::new(0.0, 0.0, -near, 1.0);
        assert_relative_eq!(on_near.z / on_near.w, -1.0, epsilon = 1e-4);

        let on_far = m * Vector4::new(0.0, 0.0, -far, 1.0);
        assert_relative_eq!(on_far.z / on_far.w, 1.0, epsilon = 1e-4);

        // a 90 degree vertical field of view sees y = |z| at the frustum edge
        let edge = m * Vector4::new(0.0, 10.0, -10.0, 1.0);
        assert_relative_eq!(edge.y / edge.w, 1.0, epsilon = 1e-4);
    }
}

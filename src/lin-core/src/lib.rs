//! Fixed-size linear algebra with GLSL-style swizzling.
//!
//! Vectors, matrices and quaternions are stack-allocated value types whose
//! dimensions are const generics, so every arity or index mismatch is a
//! compile-time error. Components are reachable by name (`v.x`), by index
//! (`v[0]`) and through swizzle accessors (`v.wzyx()`), all referring to the
//! same underlying slots.
//!
//! ```
//! use lin_core::{Vector2, Vector4};
//!
//! let v = Vector4::new(1, 2, 3, 4);
//! assert_eq!(v.wzyx().vector(), Vector4::new(4, 3, 2, 1));
//!
//! let mut p = Vector2::new(3.0f32, 7.0);
//! p.yx_mut().assign(Vector2::new(1.0, 2.0));
//! assert_eq!(p, Vector2::new(2.0, 1.0));
//! ```

pub mod matrix;
pub mod quaternion;
pub mod rotation;
pub mod swizzle;
pub mod types;
pub mod vector;

use num_traits::{Float, Num};
use std::fmt::Debug;

/// Number value usable as a vector, matrix or quaternion component
pub trait Number: Num + Debug + Copy + Default {}
impl Number for u32 {}
impl Number for i32 {}
impl Number for f32 {}
impl Number for f64 {}

/// Floating-point component, required by magnitudes, interpolation and the
/// transform builders
pub trait Real: Number + Float {}
impl Real for f32 {}
impl Real for f64 {}

pub trait Inverse: Sized {
    #[allow(clippy::result_unit_err)]
    fn try_inverse(self) -> Result<Self, ()>;

    /// Try inverse the object
    ///
    /// # Panics
    ///
    /// Panic if it is not invertible
    fn inverse(self) -> Self {
        self.try_inverse().expect("Not invertible")
    }
}

pub use matrix::*;
pub use quaternion::*;
pub use rotation::*;
pub use swizzle::*;
pub use types::*;
pub use vector::*;

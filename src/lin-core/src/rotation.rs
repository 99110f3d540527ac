//! Rotation descriptions that pair naturally with quaternions.

use crate::vector::Vector3;
use crate::Number;

/// A rotation of `angle` radians around `axis`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisAngle<T: Number> {
    pub axis: Vector3<T>,
    pub angle: T,
}

impl<T: Number> AxisAngle<T> {
    pub fn new(axis: Vector3<T>, angle: T) -> Self {
        Self { axis, angle }
    }
}

/// Euler angles in radians: `pitch` rotates around x, `yaw` around y and
/// `roll` around z; a composed rotation applies pitch first, then yaw,
/// then roll
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EulerAngles<T: Number> {
    pub pitch: T,
    pub yaw: T,
    pub roll: T,
}

impl<T: Number> EulerAngles<T> {
    pub fn new(pitch: T, yaw: T, roll: T) -> Self {
        Self { pitch, yaw, roll }
    }
}

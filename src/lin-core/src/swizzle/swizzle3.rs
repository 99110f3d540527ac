use crate::swizzle::{is_assignable_swizzle, UNUSED};
use crate::vector::Vector;
use crate::{impl_swizzle_ops, Number};
use std::ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3-component selection over the slots of an owning vector
pub struct Swizzle3<V, const E1: usize, const E2: usize, const E3: usize> {
    vector: V,
}

impl<V, const E1: usize, const E2: usize, const E3: usize> Swizzle3<V, E1, E2, E3> {
    #[inline]
    pub(crate) fn new(vector: V) -> Self {
        Self { vector }
    }
}

impl<T, const N: usize, V, const E1: usize, const E2: usize, const E3: usize> Swizzle3<V, E1, E2, E3>
where
    T: Number,
    V: Deref<Target = Vector<T, N>>,
{
    /// Gathers the selected slots into an independent 3-vector
    ///
    /// # Example
    ///
    /// ```
    /// use lin_core::Vector3;
    ///
    /// let v = Vector3::new(1, 2, 3);
    /// assert_eq!(v.xxz().vector(), Vector3::new(1, 1, 3));
    /// ```
    #[inline]
    pub fn vector(&self) -> Vector<T, 3> {
        let vector: &Vector<T, N> = &self.vector;
        Vector::from([vector[E1], vector[E2], vector[E3]])
    }
}

impl<'a, T: Number, const N: usize, const E1: usize, const E2: usize, const E3: usize>
    From<Swizzle3<&'a Vector<T, N>, E1, E2, E3>> for Vector<T, 3>
{
    #[inline]
    fn from(swizzle: Swizzle3<&'a Vector<T, N>, E1, E2, E3>) -> Self {
        swizzle.vector()
    }
}

impl<'a, T: Number, const N: usize, const E1: usize, const E2: usize, const E3: usize>
    From<Swizzle3<&'a mut Vector<T, N>, E1, E2, E3>> for Vector<T, 3>
{
    #[inline]
    fn from(swizzle: Swizzle3<&'a mut Vector<T, N>, E1, E2, E3>) -> Self {
        swizzle.vector()
    }
}

impl<'a, T, const N: usize, const E1: usize, const E2: usize, const E3: usize>
    Swizzle3<&'a mut Vector<T, N>, E1, E2, E3>
where
    T: Number,
{
    const ASSIGNABLE: () = assert!(
        is_assignable_swizzle::<N, E1, E2, E3, { UNUSED }>(),
        "swizzle selection repeats a component and cannot be assigned through"
    );

    /// Scatters `value` into the selected slots of the owning vector
    ///
    /// Only selections without repeated components compile:
    ///
    /// ```compile_fail
    /// use lin_core::Vector3;
    ///
    /// let mut v = Vector3::new(1, 2, 3);
    /// v.zxz_mut().assign(Vector3::new(4, 5, 6));
    /// ```
    #[inline]
    pub fn assign(&mut self, value: Vector<T, 3>) {
        let () = Self::ASSIGNABLE;
        self.vector[E1] = value[0];
        self.vector[E2] = value[1];
        self.vector[E3] = value[2];
    }
}

impl_swizzle_ops!(Swizzle3, 3 => E1, E2, E3);

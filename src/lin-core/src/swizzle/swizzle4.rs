use crate::swizzle::is_assignable_swizzle;
use crate::vector::Vector;
use crate::{impl_swizzle_ops, Number};
use std::ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 4-component selection over the slots of an owning vector
pub struct Swizzle4<V, const E1: usize, const E2: usize, const E3: usize, const E4: usize> {
    vector: V,
}

impl<V, const E1: usize, const E2: usize, const E3: usize, const E4: usize>
    Swizzle4<V, E1, E2, E3, E4>
{
    #[inline]
    pub(crate) fn new(vector: V) -> Self {
        Self { vector }
    }
}

impl<T, const N: usize, V, const E1: usize, const E2: usize, const E3: usize, const E4: usize>
    Swizzle4<V, E1, E2, E3, E4>
where
    T: Number,
    V: Deref<Target = Vector<T, N>>,
{
    /// Gathers the selected slots into an independent 4-vector
    ///
    /// # Example
    ///
    /// ```
    /// use lin_core::Vector4;
    ///
    /// let v = Vector4::new(1.0f32, 2.0, 3.0, 4.0);
    /// assert_eq!(v.wzyx().vector(), Vector4::new(4.0, 3.0, 2.0, 1.0));
    /// ```
    #[inline]
    pub fn vector(&self) -> Vector<T, 4> {
        let vector: &Vector<T, N> = &self.vector;
        Vector::from([vector[E1], vector[E2], vector[E3], vector[E4]])
    }
}

impl<'a, T: Number, const N: usize, const E1: usize, const E2: usize, const E3: usize, const E4: usize>
    From<Swizzle4<&'a Vector<T, N>, E1, E2, E3, E4>> for Vector<T, 4>
{
    #[inline]
    fn from(swizzle: Swizzle4<&'a Vector<T, N>, E1, E2, E3, E4>) -> Self {
        swizzle.vector()
    }
}

impl<'a, T: Number, const N: usize, const E1: usize, const E2: usize, const E3: usize, const E4: usize>
    From<Swizzle4<&'a mut Vector<T, N>, E1, E2, E3, E4>> for Vector<T, 4>
{
    #[inline]
    fn from(swizzle: Swizzle4<&'a mut Vector<T, N>, E1, E2, E3, E4>) -> Self {
        swizzle.vector()
    }
}

impl<'a, T, const N: usize, const E1: usize, const E2: usize, const E3: usize, const E4: usize>
    Swizzle4<&'a mut Vector<T, N>, E1, E2, E3, E4>
where
    T: Number,
{
    const ASSIGNABLE: () = assert!(
        is_assignable_swizzle::<N, E1, E2, E3, E4>(),
        "swizzle selection repeats a component and cannot be assigned through"
    );

    /// Scatters `value` into the selected slots of the owning vector
    ///
    /// Only selections without repeated components compile:
    ///
    /// ```compile_fail
    /// use lin_core::Vector4;
    ///
    /// let mut v = Vector4::new(1, 2, 3, 4);
    /// v.xyzz_mut().assign(Vector4::new(5, 6, 7, 8));
    /// ```
    #[inline]
    pub fn assign(&mut self, value: Vector<T, 4>) {
        let () = Self::ASSIGNABLE;
        self.vector[E1] = value[0];
        self.vector[E2] = value[1];
        self.vector[E3] = value[2];
        self.vector[E4] = value[3];
    }
}

impl_swizzle_ops!(Swizzle4, 4 => E1, E2, E3, E4);

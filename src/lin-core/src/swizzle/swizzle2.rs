use crate::swizzle::{is_assignable_swizzle, UNUSED};
use crate::vector::Vector;
use crate::{impl_swizzle_ops, Number};
use std::ops::{Add, AddAssign, Deref, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2-component selection over the slots of an owning vector
///
/// `V` is the borrow of the owner (`&Vector<T, N>` or `&mut Vector<T, N>`),
/// `E1` and `E2` are the selected slot indices.
pub struct Swizzle2<V, const E1: usize, const E2: usize> {
    vector: V,
}

impl<V, const E1: usize, const E2: usize> Swizzle2<V, E1, E2> {
    #[inline]
    pub(crate) fn new(vector: V) -> Self {
        Self { vector }
    }
}

impl<T, const N: usize, V, const E1: usize, const E2: usize> Swizzle2<V, E1, E2>
where
    T: Number,
    V: Deref<Target = Vector<T, N>>,
{
    /// Gathers the selected slots into an independent 2-vector
    ///
    /// Always available, including for selections with repeated slots.
    ///
    /// # Example
    ///
    /// ```
    /// use lin_core::Vector2;
    ///
    /// let v = Vector2::new(1, 2);
    /// assert_eq!(v.yx().vector(), Vector2::new(2, 1));
    /// assert_eq!(v.xx().vector(), Vector2::new(1, 1));
    /// ```
    #[inline]
    pub fn vector(&self) -> Vector<T, 2> {
        let vector: &Vector<T, N> = &self.vector;
        Vector::from([vector[E1], vector[E2]])
    }
}

impl<'a, T: Number, const N: usize, const E1: usize, const E2: usize>
    From<Swizzle2<&'a Vector<T, N>, E1, E2>> for Vector<T, 2>
{
    #[inline]
    fn from(swizzle: Swizzle2<&'a Vector<T, N>, E1, E2>) -> Self {
        swizzle.vector()
    }
}

impl<'a, T: Number, const N: usize, const E1: usize, const E2: usize>
    From<Swizzle2<&'a mut Vector<T, N>, E1, E2>> for Vector<T, 2>
{
    #[inline]
    fn from(swizzle: Swizzle2<&'a mut Vector<T, N>, E1, E2>) -> Self {
        swizzle.vector()
    }
}

impl<'a, T, const N: usize, const E1: usize, const E2: usize> Swizzle2<&'a mut Vector<T, N>, E1, E2>
where
    T: Number,
{
    const ASSIGNABLE: () = assert!(
        is_assignable_swizzle::<N, E1, E2, { UNUSED }, { UNUSED }>(),
        "swizzle selection repeats a component and cannot be assigned through"
    );

    /// Scatters `value` into the selected slots of the owning vector
    ///
    /// The right-hand side is taken by value, so it is fully evaluated
    /// before the first slot is written; writing `v.xy()` from `v.yx()`
    /// therefore swaps cleanly.
    ///
    /// ```
    /// use lin_core::Vector2;
    ///
    /// let mut v = Vector2::new(1, 2);
    /// let reversed = v.yx().vector();
    /// v.xy_mut().assign(reversed);
    /// assert_eq!(v, Vector2::new(2, 1));
    /// ```
    ///
    /// Selections with a repeated component do not compile:
    ///
    /// ```compile_fail
    /// use lin_core::Vector2;
    ///
    /// let mut v = Vector2::new(1, 2);
    /// v.xx_mut().assign(Vector2::new(3, 4));
    /// ```
    #[inline]
    pub fn assign(&mut self, value: Vector<T, 2>) {
        let () = Self::ASSIGNABLE;
        self.vector[E1] = value[0];
        self.vector[E2] = value[1];
    }
}

impl_swizzle_ops!(Swizzle2, 2 => E1, E2);

#[cfg(test)]
mod tests {
    use crate::vector::{Vector2, Vector4};

    #[test]
    fn read_reorders_and_repeats() {
        let v = Vector2::new(1, 2);
        assert_eq!(v.xy().vector(), Vector2::new(1, 2));
        assert_eq!(v.yx().vector(), Vector2::new(2, 1));
        assert_eq!(v.xx().vector(), Vector2::new(1, 1));
        assert_eq!(v.yy().vector(), Vector2::new(2, 2));
    }

    #[test]
    fn read_subset_of_larger_vector() {
        let v = Vector4::new(1, 2, 3, 4);
        assert_eq!(v.xz().vector(), Vector2::new(1, 3));
        assert_eq!(v.wy().vector(), Vector2::new(4, 2));
    }

    #[test]
    fn conversion_into_vector() {
        let v = Vector2::new(5, 6);
        let read: Vector2<i32> = v.yx().into();
        assert_eq!(read, Vector2::new(6, 5));
    }

    #[test]
    fn assign_scatters_into_selected_slots_only() {
        let mut v = Vector4::new(1, 2, 3, 4);
        v.yw_mut().assign(Vector2::new(20, 40));
        assert_eq!(v, Vector4::new(1, 20, 3, 40));
    }

    #[test]
    fn self_referential_swap() {
        let mut v = Vector2::new(1, 2);
        let swapped = v.yx().vector();
        v.xy_mut().assign(swapped);
        assert_eq!(v, Vector2::new(2, 1));
    }

    #[test]
    fn compound_assignment_reads_before_writing() {
        let mut v = Vector2::new(1, 2);
        let mut swizzle = v.yx_mut();
        swizzle += Vector2::new(10, 20);
        // yx selects (2, 1); the sums (12, 21) scatter back to (y, x)
        assert_eq!(v, Vector2::new(21, 12));
    }

    #[test]
    fn compound_scalar_assignment() {
        let mut v = Vector2::new(2, 3);
        let mut swizzle = v.xy_mut();
        swizzle *= 4;
        assert_eq!(v, Vector2::new(8, 12));
    }

    #[test]
    fn read_operators_produce_vectors() {
        let v = Vector2::new(4, 6);
        assert_eq!(-v.xy().vector(), Vector2::new(-4, -6));
        assert_eq!(v.yx() + Vector2::new(1, 1), Vector2::new(7, 5));
        assert_eq!(v.xy() - Vector2::new(1, 2), Vector2::new(3, 4));
        assert_eq!(v.xy() * 2, Vector2::new(8, 12));
        assert_eq!(v.xy() / 2, Vector2::new(2, 3));
    }
}

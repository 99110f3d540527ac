//! Swizzle accessors.
//!
//! A swizzle is a named selection of 2 to 4 component slots of an owning
//! vector, e.g. `v.xy()`, `v.xxz()` or `v.wzyx()`. The selection may repeat,
//! omit and reorder slots. Reading always works and gathers the selected
//! slots into an independent vector; writing is only offered through the
//! `_mut` accessors and only compiles for selections without repeated slots,
//! because scattering into a repeated slot has no well-defined result.
//!
//! The accessor types are lightweight proxies holding a borrow of the owner,
//! so the borrow checker pins their lifetime to the owner and rules out a
//! write that aliases a live read of the same vector. A mutating assignment
//! takes its right-hand side by value, which forces the full right-hand
//! vector to exist before the first slot is written.
//!
//! Reading the owner while a writable proxy is alive is rejected:
//!
//! ```compile_fail
//! use lin_core::Vector2;
//!
//! let mut v = Vector2::new(1, 2);
//! let mut target = v.xy_mut();
//! target.assign(v.yx().vector());
//! ```
//!
//! Snapshot the right-hand side into a local first:
//!
//! ```
//! use lin_core::Vector2;
//!
//! let mut v = Vector2::new(1, 2);
//! let reversed = v.yx().vector();
//! v.xy_mut().assign(reversed);
//! assert_eq!(v, Vector2::new(2, 1));
//! ```

mod swizzle2;
mod swizzle3;
mod swizzle4;

pub use swizzle2::Swizzle2;
pub use swizzle3::Swizzle3;
pub use swizzle4::Swizzle4;

/// Sentinel index for the trailing slots a 2- or 3-element selection does
/// not use
pub const UNUSED: usize = usize::MAX;

/// Checks that a selection of component slots can be assigned through
///
/// `N` is the component count of the owning vector; `E1`..`E4` are the
/// selected slot indices, with [`UNUSED`] marking slots that are not part of
/// the selection. A selection is assignable when every used index is in
/// bounds and no index occurs twice.
///
/// # Example
///
/// ```
/// use lin_core::{is_assignable_swizzle, UNUSED};
///
/// assert!(is_assignable_swizzle::<2, 1, 0, { UNUSED }, { UNUSED }>());
/// assert!(!is_assignable_swizzle::<2, 0, 0, { UNUSED }, { UNUSED }>());
/// assert!(!is_assignable_swizzle::<2, 0, 2, { UNUSED }, { UNUSED }>());
/// ```
pub const fn is_assignable_swizzle<
    const N: usize,
    const E1: usize,
    const E2: usize,
    const E3: usize,
    const E4: usize,
>() -> bool {
    let elements = [E1, E2, E3, E4];
    let mut i = 0;
    while i < elements.len() {
        if elements[i] != UNUSED {
            if elements[i] >= N {
                return false;
            }
            let mut j = i + 1;
            while j < elements.len() {
                if elements[i] == elements[j] {
                    return false;
                }
                j += 1;
            }
        }
        i += 1;
    }
    true
}

/// Implements the read operators (against vectors and scalars) for a swizzle
/// proxy, plus the compound assignment operators on its mutable form. Every
/// compound assignment gathers the current selection, computes the full new
/// value and only then scatters, so no slot is written from a partially
/// updated state.
#[macro_export]
macro_rules! impl_swizzle_ops {
    ($name:ident, $k:literal => $($e:ident),+) => {
        impl<'a, T, const N: usize, $(const $e: usize),+> Neg for $name<&'a Vector<T, N>, $($e),+>
        where
            T: Number + Neg<Output = T>,
        {
            type Output = Vector<T, $k>;

            #[inline]
            fn neg(self) -> Self::Output {
                -self.vector()
            }
        }

        impl<'a, T, const N: usize, $(const $e: usize),+> Neg for $name<&'a mut Vector<T, N>, $($e),+>
        where
            T: Number + Neg<Output = T>,
        {
            type Output = Vector<T, $k>;

            #[inline]
            fn neg(self) -> Self::Output {
                -self.vector()
            }
        }

        $crate::impl_swizzle_ops!(@vector $name, $k, Add, add, [$($e),+]);
        $crate::impl_swizzle_ops!(@vector $name, $k, Sub, sub, [$($e),+]);
        $crate::impl_swizzle_ops!(@vector $name, $k, Mul, mul, [$($e),+]);
        $crate::impl_swizzle_ops!(@vector $name, $k, Div, div, [$($e),+]);
        $crate::impl_swizzle_ops!(@scalar $name, $k, Mul, mul, [$($e),+]);
        $crate::impl_swizzle_ops!(@scalar $name, $k, Div, div, [$($e),+]);
    };
    (@vector $name:ident, $k:literal, $trait:ident, $func:ident, [$($e:ident),+]) => {
        impl<'a, T: Number, const N: usize, $(const $e: usize),+> $trait<Vector<T, $k>>
            for $name<&'a Vector<T, N>, $($e),+>
        {
            type Output = Vector<T, $k>;

            #[inline]
            fn $func(self, rhs: Vector<T, $k>) -> Self::Output {
                $trait::$func(self.vector(), rhs)
            }
        }

        impl<'a, T: Number, const N: usize, $(const $e: usize),+> $trait<Vector<T, $k>>
            for $name<&'a mut Vector<T, N>, $($e),+>
        {
            type Output = Vector<T, $k>;

            #[inline]
            fn $func(self, rhs: Vector<T, $k>) -> Self::Output {
                $trait::$func(self.vector(), rhs)
            }
        }

        ::paste::paste! {
            impl<'a, T: Number, const N: usize, $(const $e: usize),+> [<$trait Assign>]<Vector<T, $k>>
                for $name<&'a mut Vector<T, N>, $($e),+>
            {
                fn [<$func _assign>](&mut self, rhs: Vector<T, $k>) {
                    let value = $trait::$func(self.vector(), rhs);
                    self.assign(value);
                }
            }
        }
    };
    (@scalar $name:ident, $k:literal, $trait:ident, $func:ident, [$($e:ident),+]) => {
        impl<'a, T: Number, const N: usize, $(const $e: usize),+> $trait<T>
            for $name<&'a Vector<T, N>, $($e),+>
        {
            type Output = Vector<T, $k>;

            #[inline]
            fn $func(self, rhs: T) -> Self::Output {
                $trait::$func(self.vector(), rhs)
            }
        }

        impl<'a, T: Number, const N: usize, $(const $e: usize),+> $trait<T>
            for $name<&'a mut Vector<T, N>, $($e),+>
        {
            type Output = Vector<T, $k>;

            #[inline]
            fn $func(self, rhs: T) -> Self::Output {
                $trait::$func(self.vector(), rhs)
            }
        }

        ::paste::paste! {
            impl<'a, T: Number, const N: usize, $(const $e: usize),+> [<$trait Assign>]<T>
                for $name<&'a mut Vector<T, N>, $($e),+>
            {
                fn [<$func _assign>](&mut self, rhs: T) {
                    let value = $trait::$func(self.vector(), rhs);
                    self.assign(value);
                }
            }
        }
    };
}

/// Generates one accessor method pair per ordered 2-letter combination of
/// the given components, e.g. `xy()` and `xy_mut()`
#[macro_export]
macro_rules! impl_swizzle2_accessors {
    ($(($c:ident $i:literal))+) => {
        $crate::impl_swizzle2_accessors!(@each [$(($c $i))+]; $(($c $i))+);
    };
    (@each $all:tt; $(($a:ident $ai:literal))+) => {
        $($crate::impl_swizzle2_accessors!(@last ($a $ai); $all);)+
    };
    (@last ($a:ident $ai:literal); [$(($b:ident $bi:literal))+]) => {
        $(
            ::paste::paste! {
                #[inline]
                pub fn [<$a $b>](&self) -> Swizzle2<&Self, $ai, $bi> {
                    Swizzle2::new(self)
                }

                #[inline]
                pub fn [<$a $b _mut>](&mut self) -> Swizzle2<&mut Self, $ai, $bi> {
                    Swizzle2::new(self)
                }
            }
        )+
    };
}

/// Generates one accessor method pair per ordered 3-letter combination of
/// the given components, e.g. `xxz()` and `xxz_mut()`
#[macro_export]
macro_rules! impl_swizzle3_accessors {
    ($(($c:ident $i:literal))+) => {
        $crate::impl_swizzle3_accessors!(@each [$(($c $i))+]; $(($c $i))+);
    };
    (@each $all:tt; $(($a:ident $ai:literal))+) => {
        $($crate::impl_swizzle3_accessors!(@mid ($a $ai); $all; $all);)+
    };
    (@mid $first:tt; $all:tt; [$(($b:ident $bi:literal))+]) => {
        $($crate::impl_swizzle3_accessors!(@last $first; ($b $bi); $all);)+
    };
    (@last ($a:ident $ai:literal); ($b:ident $bi:literal); [$(($c:ident $ci:literal))+]) => {
        $(
            ::paste::paste! {
                #[inline]
                pub fn [<$a $b $c>](&self) -> Swizzle3<&Self, $ai, $bi, $ci> {
                    Swizzle3::new(self)
                }

                #[inline]
                pub fn [<$a $b $c _mut>](&mut self) -> Swizzle3<&mut Self, $ai, $bi, $ci> {
                    Swizzle3::new(self)
                }
            }
        )+
    };
}

/// Generates one accessor method pair per ordered 4-letter combination of
/// the given components, e.g. `wzyx()` and `wzyx_mut()`
#[macro_export]
macro_rules! impl_swizzle4_accessors {
    ($(($c:ident $i:literal))+) => {
        $crate::impl_swizzle4_accessors!(@each [$(($c $i))+]; $(($c $i))+);
    };
    (@each $all:tt; $(($a:ident $ai:literal))+) => {
        $($crate::impl_swizzle4_accessors!(@second ($a $ai); $all; $all);)+
    };
    (@second $first:tt; $all:tt; [$(($b:ident $bi:literal))+]) => {
        $($crate::impl_swizzle4_accessors!(@third $first; ($b $bi); $all; $all);)+
    };
    (@third $first:tt; $second:tt; $all:tt; [$(($c:ident $ci:literal))+]) => {
        $($crate::impl_swizzle4_accessors!(@last $first; $second; ($c $ci); $all);)+
    };
    (@last ($a:ident $ai:literal); ($b:ident $bi:literal); ($c:ident $ci:literal); [$(($d:ident $di:literal))+]) => {
        $(
            ::paste::paste! {
                #[inline]
                pub fn [<$a $b $c $d>](&self) -> Swizzle4<&Self, $ai, $bi, $ci, $di> {
                    Swizzle4::new(self)
                }

                #[inline]
                pub fn [<$a $b $c $d _mut>](&mut self) -> Swizzle4<&mut Self, $ai, $bi, $ci, $di> {
                    Swizzle4::new(self)
                }
            }
        )+
    };
}

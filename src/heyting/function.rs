// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Function spaces into a Heyting algebra, ordered pointwise.

use super::HeytingAlgebra;
use crate::lattice::{HasBottom, HasTop, JoinSemiLattice, MeetSemiLattice};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A function from `A` to `B`.
///
/// If `B` is a lattice, so is `Pointwise<A, B>`, with all operations applied pointwise, e.g.
/// `(f ∧ g)(x) = f(x) ∧ g(x)`.  Likewise, `(f ⇒ g)(x) = f(x) ⇒ g(x)` if `B` is a Heyting
/// algebra.
///
/// Functions are shared, so cloning is cheap.
pub struct Pointwise<A, B>(Arc<dyn Fn(A) -> B + Send + Sync>);

impl<A, B> Pointwise<A, B> {
    /// Wrap the function `f`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Pointwise(Arc::new(f))
    }

    /// Apply this function to `x`.
    pub fn apply(&self, x: A) -> B {
        (self.0)(x)
    }
}

impl<A: 'static, B: Clone + Send + Sync + 'static> Pointwise<A, B> {
    /// The function which maps every argument to `value`.
    pub fn constant(value: B) -> Self {
        Pointwise::new(move |_| value.clone())
    }
}

impl<A, B> Clone for Pointwise<A, B> {
    fn clone(&self) -> Self {
        Pointwise(Arc::clone(&self.0))
    }
}

impl<A, B> Debug for Pointwise<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pointwise").finish_non_exhaustive()
    }
}

impl<A, B> JoinSemiLattice for Pointwise<A, B>
where
    A: Clone + 'static,
    B: JoinSemiLattice + 'static,
{
    fn join(self, other: Self) -> Self {
        Pointwise::new(move |x: A| self.apply(x.clone()).join(other.apply(x)))
    }
}

impl<A, B> MeetSemiLattice for Pointwise<A, B>
where
    A: Clone + 'static,
    B: MeetSemiLattice + 'static,
{
    fn meet(self, other: Self) -> Self {
        Pointwise::new(move |x: A| self.apply(x.clone()).meet(other.apply(x)))
    }
}

impl<A: 'static, B: HasTop + Clone + Send + Sync + 'static> HasTop for Pointwise<A, B> {
    fn top() -> Self {
        Pointwise::constant(B::top())
    }
}

impl<A: 'static, B: HasBottom + Clone + Send + Sync + 'static> HasBottom for Pointwise<A, B> {
    fn bottom() -> Self {
        Pointwise::constant(B::bottom())
    }
}

impl<A, B> HeytingAlgebra for Pointwise<A, B>
where
    A: Clone + 'static,
    B: HeytingAlgebra + Send + Sync + 'static,
{
    fn implies(self, other: Self) -> Self {
        Pointwise::new(move |x: A| self.apply(x.clone()).implies(other.apply(x)))
    }

    fn not(self) -> Self {
        Pointwise::new(move |x| self.apply(x).not())
    }
}

/// An endomorphism on `A`, i.e. a function from `A` to `A`.
///
/// Endomorphisms compose with [`Endo::compose`], and form a Heyting algebra pointwise just like
/// [`Pointwise`] if `A` is a Heyting algebra.
pub struct Endo<A>(pub Pointwise<A, A>);

impl<A> Endo<A> {
    /// Wrap the function `f`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> A + Send + Sync + 'static,
    {
        Endo(Pointwise::new(f))
    }

    /// Apply this endomorphism to `x`.
    pub fn apply(&self, x: A) -> A {
        self.0.apply(x)
    }
}

impl<A: 'static> Endo<A> {
    /// The identity function.
    pub fn identity() -> Self {
        Endo::new(|x| x)
    }

    /// Compose `self` after `other`, i.e. apply `other` first and then `self`.
    pub fn compose(self, other: Self) -> Self {
        Endo::new(move |x| self.apply(other.apply(x)))
    }
}

impl<A> Clone for Endo<A> {
    fn clone(&self) -> Self {
        Endo(self.0.clone())
    }
}

impl<A> Debug for Endo<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Endo").field(&self.0).finish()
    }
}

impl<A: JoinSemiLattice + Clone + 'static> JoinSemiLattice for Endo<A> {
    fn join(self, other: Self) -> Self {
        Endo(self.0.join(other.0))
    }
}

impl<A: MeetSemiLattice + Clone + 'static> MeetSemiLattice for Endo<A> {
    fn meet(self, other: Self) -> Self {
        Endo(self.0.meet(other.0))
    }
}

impl<A: HasTop + Clone + Send + Sync + 'static> HasTop for Endo<A> {
    fn top() -> Self {
        Endo(Pointwise::top())
    }
}

impl<A: HasBottom + Clone + Send + Sync + 'static> HasBottom for Endo<A> {
    fn bottom() -> Self {
        Endo(Pointwise::bottom())
    }
}

impl<A: HeytingAlgebra + Send + Sync + 'static> HeytingAlgebra for Endo<A> {
    fn implies(self, other: Self) -> Self {
        Endo(self.0.implies(other.0))
    }

    fn not(self) -> Self {
        Endo(self.0.not())
    }
}

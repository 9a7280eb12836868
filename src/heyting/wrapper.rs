// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Wrapper types which inherit the algebra of the wrapped value.

use super::HeytingAlgebra;
use crate::lattice::{HasBottom, HasTop, JoinSemiLattice, MeetSemiLattice};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A transparent wrapper around a value.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity<T>(pub T);

impl<T> Identity<T> {
    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: JoinSemiLattice> JoinSemiLattice for Identity<T> {
    fn join(self, other: Self) -> Self {
        Identity(self.0.join(other.0))
    }
}

impl<T: MeetSemiLattice> MeetSemiLattice for Identity<T> {
    fn meet(self, other: Self) -> Self {
        Identity(self.0.meet(other.0))
    }
}

impl<T: HasTop> HasTop for Identity<T> {
    fn top() -> Self {
        Identity(T::top())
    }
}

impl<T: HasBottom> HasBottom for Identity<T> {
    fn bottom() -> Self {
        Identity(T::bottom())
    }
}

impl<T: HeytingAlgebra> HeytingAlgebra for Identity<T> {
    fn implies(self, other: Self) -> Self {
        Identity(self.0.implies(other.0))
    }

    fn not(self) -> Self {
        Identity(self.0.not())
    }
}

/// A value of type `T` tagged with a phantom type `P`.
///
/// The tag does not take part in any operation; all traits only require bounds on `T`.
pub struct Const<T, P>(pub T, PhantomData<P>);

impl<T, P> Const<T, P> {
    /// Tag `value` with `P`.
    pub fn new(value: T) -> Self {
        Const(value, PhantomData)
    }

    /// Unwrap the value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Clone, P> Clone for Const<T, P> {
    fn clone(&self) -> Self {
        Const::new(self.0.clone())
    }
}

impl<T: Copy, P> Copy for Const<T, P> {}

impl<T: PartialEq, P> PartialEq for Const<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, P> Eq for Const<T, P> {}

impl<T: Hash, P> Hash for Const<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: Debug, P> Debug for Const<T, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Const").field(&self.0).finish()
    }
}

impl<T: JoinSemiLattice, P> JoinSemiLattice for Const<T, P> {
    fn join(self, other: Self) -> Self {
        Const::new(self.0.join(other.0))
    }
}

impl<T: MeetSemiLattice, P> MeetSemiLattice for Const<T, P> {
    fn meet(self, other: Self) -> Self {
        Const::new(self.0.meet(other.0))
    }
}

impl<T: HasTop, P> HasTop for Const<T, P> {
    fn top() -> Self {
        Const::new(T::top())
    }
}

impl<T: HasBottom, P> HasBottom for Const<T, P> {
    fn bottom() -> Self {
        Const::new(T::bottom())
    }
}

impl<T: HeytingAlgebra, P> HeytingAlgebra for Const<T, P> {
    fn implies(self, other: Self) -> Self {
        Const::new(self.0.implies(other.0))
    }

    fn not(self) -> Self {
        Const::new(self.0.not())
    }
}

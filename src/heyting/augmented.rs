// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattices with an additional top or bottom element, or both.
//!
//! The new elements are strictly greater or less than every element of the underlying lattice,
//! and absorb into meet and join accordingly.

use super::HeytingAlgebra;
use crate::lattice::{HasBottom, HasTop, JoinSemiLattice, LatticeOrder, MeetSemiLattice};
use serde::{Deserialize, Serialize};

/// A lattice `T` with an additional top element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WithTop<T> {
    /// An element of the underlying lattice.
    Value(T),
    /// The new top element, greater than every value.
    Top,
}

impl<T> From<T> for WithTop<T> {
    fn from(value: T) -> Self {
        WithTop::Value(value)
    }
}

impl<T: JoinSemiLattice> JoinSemiLattice for WithTop<T> {
    fn join(self, other: Self) -> Self {
        match (self, other) {
            (WithTop::Value(a), WithTop::Value(b)) => WithTop::Value(a.join(b)),
            _ => WithTop::Top,
        }
    }
}

impl<T: MeetSemiLattice> MeetSemiLattice for WithTop<T> {
    fn meet(self, other: Self) -> Self {
        match (self, other) {
            (WithTop::Value(a), WithTop::Value(b)) => WithTop::Value(a.meet(b)),
            (WithTop::Top, x) | (x, WithTop::Top) => x,
        }
    }
}

impl<T> HasTop for WithTop<T> {
    fn top() -> Self {
        WithTop::Top
    }
}

impl<T: HasBottom> HasBottom for WithTop<T> {
    fn bottom() -> Self {
        WithTop::Value(T::bottom())
    }
}

/// Implication, where `a ⇒ b` is the new top whenever `a ≤ b` in the underlying lattice.
///
/// The underlying top is not the greatest element any more, so in this case `a ⇒ b` is the new
/// top even though the underlying `a ⇒ b` is the underlying top.
impl<T: HeytingAlgebra + PartialEq> HeytingAlgebra for WithTop<T> {
    fn implies(self, other: Self) -> Self {
        match (self, other) {
            (_, WithTop::Top) => WithTop::Top,
            (WithTop::Top, b) => b,
            (WithTop::Value(a), WithTop::Value(b)) => {
                if a.leq(&b) {
                    WithTop::Top
                } else {
                    WithTop::Value(a.implies(b))
                }
            }
        }
    }
}

/// A lattice `T` with an additional bottom element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WithBottom<T> {
    /// The new bottom element, less than every value.
    Bottom,
    /// An element of the underlying lattice.
    Value(T),
}

impl<T> From<T> for WithBottom<T> {
    fn from(value: T) -> Self {
        WithBottom::Value(value)
    }
}

impl<T: JoinSemiLattice> JoinSemiLattice for WithBottom<T> {
    fn join(self, other: Self) -> Self {
        match (self, other) {
            (WithBottom::Value(a), WithBottom::Value(b)) => WithBottom::Value(a.join(b)),
            (WithBottom::Bottom, x) | (x, WithBottom::Bottom) => x,
        }
    }
}

impl<T: MeetSemiLattice> MeetSemiLattice for WithBottom<T> {
    fn meet(self, other: Self) -> Self {
        match (self, other) {
            (WithBottom::Value(a), WithBottom::Value(b)) => WithBottom::Value(a.meet(b)),
            _ => WithBottom::Bottom,
        }
    }
}

impl<T: HasTop> HasTop for WithBottom<T> {
    fn top() -> Self {
        WithBottom::Value(T::top())
    }
}

impl<T> HasBottom for WithBottom<T> {
    fn bottom() -> Self {
        WithBottom::Bottom
    }
}

impl<T: HeytingAlgebra> HeytingAlgebra for WithBottom<T> {
    fn implies(self, other: Self) -> Self {
        match (self, other) {
            (WithBottom::Bottom, _) => Self::top(),
            (WithBottom::Value(_), WithBottom::Bottom) => WithBottom::Bottom,
            (WithBottom::Value(a), WithBottom::Value(b)) => WithBottom::Value(a.implies(b)),
        }
    }
}

/// A lattice `T` with an additional top and an additional bottom element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WithBounds<T> {
    /// The new bottom element, less than every value.
    Bottom,
    /// An element of the underlying lattice.
    Value(T),
    /// The new top element, greater than every value.
    Top,
}

impl<T> From<T> for WithBounds<T> {
    fn from(value: T) -> Self {
        WithBounds::Value(value)
    }
}

impl<T: JoinSemiLattice> JoinSemiLattice for WithBounds<T> {
    fn join(self, other: Self) -> Self {
        match (self, other) {
            (WithBounds::Top, _) | (_, WithBounds::Top) => WithBounds::Top,
            (WithBounds::Bottom, x) | (x, WithBounds::Bottom) => x,
            (WithBounds::Value(a), WithBounds::Value(b)) => WithBounds::Value(a.join(b)),
        }
    }
}

impl<T: MeetSemiLattice> MeetSemiLattice for WithBounds<T> {
    fn meet(self, other: Self) -> Self {
        match (self, other) {
            (WithBounds::Bottom, _) | (_, WithBounds::Bottom) => WithBounds::Bottom,
            (WithBounds::Top, x) | (x, WithBounds::Top) => x,
            (WithBounds::Value(a), WithBounds::Value(b)) => WithBounds::Value(a.meet(b)),
        }
    }
}

impl<T> HasTop for WithBounds<T> {
    fn top() -> Self {
        WithBounds::Top
    }
}

impl<T> HasBottom for WithBounds<T> {
    fn bottom() -> Self {
        WithBounds::Bottom
    }
}

impl<T: HeytingAlgebra + PartialEq> HeytingAlgebra for WithBounds<T> {
    fn implies(self, other: Self) -> Self {
        match (self, other) {
            (WithBounds::Bottom, _) => WithBounds::Top,
            (_, WithBounds::Top) => WithBounds::Top,
            (WithBounds::Top, b) => b,
            (WithBounds::Value(_), WithBounds::Bottom) => WithBounds::Bottom,
            (WithBounds::Value(a), WithBounds::Value(b)) => {
                if a.leq(&b) {
                    WithBounds::Top
                } else {
                    WithBounds::Value(a.implies(b))
                }
            }
        }
    }
}

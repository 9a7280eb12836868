// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Heyting algebras over totally ordered sets.
//!
//! Every bounded chain is a Heyting algebra, with `a ⇒ b = ⊤` if `a ≤ b` and `a ⇒ b = b`
//! otherwise.

use super::HeytingAlgebra;
use crate::lattice::{HasBottom, HasTop, JoinSemiLattice, MeetSemiLattice};
use serde::{Deserialize, Serialize};

fn chain_implies<T: Ord + HasTop>(a: T, b: T) -> T {
    if a <= b {
        T::top()
    } else {
        b
    }
}

/// A truth value of three valued logic.
///
/// This is the smallest Heyting algebra which is not a Boolean algebra: the law of excluded
/// middle fails for [`ThreeValued::Unknown`], whose negation is [`ThreeValued::False`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum ThreeValued {
    /// Definitely false.
    False = 0,
    /// Neither known to be true nor known to be false.
    Unknown = 1,
    /// Definitely true.
    True = 2,
}

impl From<bool> for ThreeValued {
    fn from(value: bool) -> Self {
        if value {
            ThreeValued::True
        } else {
            ThreeValued::False
        }
    }
}

impl HasTop for ThreeValued {
    /// [`ThreeValued::True`], as the top element of the [`ThreeValued`] enum.
    fn top() -> Self {
        ThreeValued::True
    }
}

impl HasBottom for ThreeValued {
    /// [`ThreeValued::False`], as the bottom element of the [`ThreeValued`] enum.
    fn bottom() -> Self {
        ThreeValued::False
    }
}

impl JoinSemiLattice for ThreeValued {
    fn join(self, other: Self) -> Self {
        self.max(other)
    }
}

impl MeetSemiLattice for ThreeValued {
    fn meet(self, other: Self) -> Self {
        self.min(other)
    }
}

impl HeytingAlgebra for ThreeValued {
    fn implies(self, other: Self) -> Self {
        chain_implies(self, other)
    }
}

/// A totally ordered value, as a lattice under `min` and `max`.
///
/// Bounds are provided for the primitive integer types.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ordered<T>(pub T);

impl<T: Ord> JoinSemiLattice for Ordered<T> {
    fn join(self, other: Self) -> Self {
        self.max(other)
    }
}

impl<T: Ord> MeetSemiLattice for Ordered<T> {
    fn meet(self, other: Self) -> Self {
        self.min(other)
    }
}

macro_rules! bounded_ordered {
    ($($t:ty),*) => {
        $(
            impl HasTop for Ordered<$t> {
                fn top() -> Self {
                    Ordered(<$t>::MAX)
                }
            }

            impl HasBottom for Ordered<$t> {
                fn bottom() -> Self {
                    Ordered(<$t>::MIN)
                }
            }
        )*
    };
}

bounded_ordered!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T> HeytingAlgebra for Ordered<T>
where
    T: Ord + Clone,
    Ordered<T>: HasTop + HasBottom,
{
    fn implies(self, other: Self) -> Self {
        chain_implies(self, other)
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Type definitions and utilities for bounded lattices.

use std::marker::PhantomData;

/// A join semi lattice.
pub trait JoinSemiLattice {
    /// Compute the least upper bound of `self` and `other`.
    fn join(self, other: Self) -> Self;
}

/// A meet semi lattice.
pub trait MeetSemiLattice {
    /// Compute the greatest lower bound of `self` and `other`.
    fn meet(self, other: Self) -> Self;
}

/// A set which has a top element.
pub trait HasTop {
    /// The element which is greater or equal to all other elements.
    fn top() -> Self;
}

/// A set which has a bottom element.
pub trait HasBottom {
    /// The element which is less or equal to all other elements.
    fn bottom() -> Self;
}

/// A lattice with a top and a bottom element.
///
/// Implemented for every type which is both a join and a meet semi lattice and has both bounds.
pub trait BoundedLattice: JoinSemiLattice + MeetSemiLattice + HasTop + HasBottom {}

impl<T> BoundedLattice for T where T: JoinSemiLattice + MeetSemiLattice + HasTop + HasBottom {}

/// The partial order induced by meet.
pub trait LatticeOrder: MeetSemiLattice + Clone + PartialEq {
    /// Whether `self ≤ other`, i.e. whether `self ∧ other = self`.
    fn leq(&self, other: &Self) -> bool {
        self.clone().meet(other.clone()) == *self
    }

    /// Whether `self` and `other` are each less or equal to the other.
    ///
    /// For a lawful lattice this coincides with equality, unless `PartialEq` distinguishes
    /// representations the lattice order does not.
    fn order_equivalent(&self, other: &Self) -> bool {
        self.leq(other) && other.leq(self)
    }
}

impl<T> LatticeOrder for T where T: MeetSemiLattice + Clone + PartialEq {}

impl JoinSemiLattice for bool {
    fn join(self, other: Self) -> Self {
        self || other
    }
}

impl MeetSemiLattice for bool {
    fn meet(self, other: Self) -> Self {
        self && other
    }
}

impl HasTop for bool {
    fn top() -> Self {
        true
    }
}

impl HasBottom for bool {
    fn bottom() -> Self {
        false
    }
}

impl JoinSemiLattice for () {
    fn join(self, _other: Self) -> Self {}
}

impl MeetSemiLattice for () {
    fn meet(self, _other: Self) -> Self {}
}

impl HasTop for () {
    fn top() -> Self {}
}

impl HasBottom for () {
    fn bottom() -> Self {}
}

impl<T> JoinSemiLattice for PhantomData<T> {
    fn join(self, _other: Self) -> Self {
        PhantomData
    }
}

impl<T> MeetSemiLattice for PhantomData<T> {
    fn meet(self, _other: Self) -> Self {
        PhantomData
    }
}

impl<T> HasTop for PhantomData<T> {
    fn top() -> Self {
        PhantomData
    }
}

impl<T> HasBottom for PhantomData<T> {
    fn bottom() -> Self {
        PhantomData
    }
}

impl<A: JoinSemiLattice, B: JoinSemiLattice> JoinSemiLattice for (A, B) {
    fn join(self, other: Self) -> Self {
        (self.0.join(other.0), self.1.join(other.1))
    }
}

impl<A: MeetSemiLattice, B: MeetSemiLattice> MeetSemiLattice for (A, B) {
    fn meet(self, other: Self) -> Self {
        (self.0.meet(other.0), self.1.meet(other.1))
    }
}

impl<A: HasTop, B: HasTop> HasTop for (A, B) {
    fn top() -> Self {
        (A::top(), B::top())
    }
}

impl<A: HasBottom, B: HasBottom> HasBottom for (A, B) {
    fn bottom() -> Self {
        (A::bottom(), B::bottom())
    }
}

#[cfg(test)]
mod test {
    use crate::lattice::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    #[test]
    fn bool_bounds() {
        assert!(bool::top());
        assert!(!bool::bottom());
    }

    #[test]
    fn bool_order() {
        assert!(false.leq(&false));
        assert!(false.leq(&true));
        assert!(true.leq(&true));
        assert!(!true.leq(&false));
    }

    #[test]
    fn pair_order_is_componentwise() {
        assert!((false, true).leq(&(true, true)));
        assert!(!(false, true).leq(&(true, false)));
        assert!(!(true, false).leq(&(false, true)));
    }

    #[quickcheck]
    fn bool_join_gt(left: bool, right: bool) {
        let top = left.join(right);
        assert!(left.leq(&top), "{:?} <= {:?}", left, top);
        assert!(right.leq(&top), "{:?} <= {:?}", right, top);
    }

    #[quickcheck]
    fn bool_meet_lt(left: bool, right: bool) {
        let bottom = left.meet(right);
        assert!(bottom.leq(&left), "{:?} <= {:?}", bottom, left);
        assert!(bottom.leq(&right), "{:?} <= {:?}", bottom, right);
    }

    #[quickcheck]
    fn pair_meet_bottom(p: (bool, (bool, bool))) {
        assert_eq!(p.meet(HasBottom::bottom()), (false, (false, false)));
    }

    #[quickcheck]
    fn pair_join_top(p: (bool, (bool, bool))) {
        assert_eq!(p.join(HasTop::top()), (true, (true, true)));
    }

    #[quickcheck]
    fn order_equivalent_is_equality_for_pairs(left: (bool, bool), right: (bool, bool)) {
        assert_eq!(left.order_equivalent(&right), left == right);
    }
}

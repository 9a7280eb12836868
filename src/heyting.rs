// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Heyting algebras, and instances for common structural types.

mod augmented;
mod chain;
mod function;
mod wrapper;

use crate::lattice::{BoundedLattice, LatticeOrder};
use std::marker::PhantomData;

pub use augmented::{WithBottom, WithBounds, WithTop};
pub use chain::{Ordered, ThreeValued};
pub use function::{Endo, Pointwise};
pub use wrapper::{Const, Identity};

/// A Heyting algebra: a bounded lattice with an implication.
///
/// Implication is the relative pseudo-complement: `a ⇒ b` is the greatest `x` such that
/// `x ∧ a ≤ b`, or equivalently, for all `x`, `x ∧ a ≤ b` if and only if `x ≤ (a ⇒ b)`.
///
/// [`HeytingAlgebra::implies`] and [`HeytingAlgebra::not`] default to each other, so
/// implementations must override at least one of them; overriding neither recurses forever.
/// The default implication `¬a ∨ b` is only lawful in Boolean algebras, so all other
/// implementations should override [`HeytingAlgebra::implies`].
pub trait HeytingAlgebra: BoundedLattice + Clone {
    /// Compute the implication `self ⇒ other`.
    ///
    /// Defaults to `¬self ∨ other`.
    fn implies(self, other: Self) -> Self {
        self.not().join(other)
    }

    /// Compute the negation `¬self`.
    ///
    /// Defaults to `self ⇒ ⊥`.
    fn not(self) -> Self {
        self.implies(Self::bottom())
    }

    /// Compute the biconditional `(self ⇒ other) ∧ (other ⇒ self)`.
    fn iff(self, other: Self) -> Self {
        self.clone()
            .implies(other.clone())
            .meet(other.implies(self))
    }

    /// Whether `self` and `other` are equivalent in this algebra, i.e. whether
    /// `⊤ ≤ (self ⇔ other)`.
    fn equivalent(self, other: Self) -> bool
    where
        Self: PartialEq,
    {
        Self::top().leq(&self.iff(other))
    }

    /// Map `self` to its double negation `¬¬self`.
    ///
    /// This maps the algebra onto its Boolean sub algebra of regular elements.  Note that
    /// `self ≤ ¬¬self` always holds, but `self = ¬¬self` only holds in Boolean algebras.
    fn to_boolean(self) -> Self {
        self.not().not()
    }
}

impl HeytingAlgebra for bool {
    fn implies(self, other: Self) -> Self {
        !self || other
    }

    fn not(self) -> Self {
        !self
    }
}

/// The trivial one element algebra.
impl HeytingAlgebra for () {
    fn implies(self, _other: Self) -> Self {}
}

impl<T> HeytingAlgebra for PhantomData<T> {
    fn implies(self, _other: Self) -> Self {
        PhantomData
    }
}

/// The product algebra, with all operations componentwise.
impl<A: HeytingAlgebra, B: HeytingAlgebra> HeytingAlgebra for (A, B) {
    fn implies(self, other: Self) -> Self {
        (self.0.implies(other.0), self.1.implies(other.1))
    }

    fn not(self) -> Self {
        (self.0.not(), self.1.not())
    }
}

#[cfg(test)]
mod test {
    use crate::heyting::*;
    use crate::lattice::*;
    use crate::laws::*;
    use pretty_assertions::assert_eq;
    use quickcheck::{Arbitrary, Gen};
    use quickcheck_macros::quickcheck;
    use std::marker::PhantomData;

    /// A Boolean algebra which only defines negation.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    struct Bit(bool);

    impl JoinSemiLattice for Bit {
        fn join(self, other: Self) -> Self {
            Bit(self.0 || other.0)
        }
    }

    impl MeetSemiLattice for Bit {
        fn meet(self, other: Self) -> Self {
            Bit(self.0 && other.0)
        }
    }

    impl HasTop for Bit {
        fn top() -> Self {
            Bit(true)
        }
    }

    impl HasBottom for Bit {
        fn bottom() -> Self {
            Bit(false)
        }
    }

    impl HeytingAlgebra for Bit {
        fn not(self) -> Self {
            Bit(!self.0)
        }
    }

    impl Arbitrary for Bit {
        fn arbitrary(g: &mut Gen) -> Self {
            Bit(bool::arbitrary(g))
        }
    }

    #[test]
    fn bool_implies() {
        assert!(!true.implies(false));
        assert!(false.implies(true));
        assert!(true.implies(true));
        assert!(false.implies(false));
    }

    #[test]
    fn bool_not() {
        assert!(!true.not());
        assert!(false.not());
    }

    #[test]
    fn bool_equivalent() {
        assert!(true.equivalent(true));
        assert!(false.equivalent(false));
        assert!(!true.equivalent(false));
        assert!(!false.equivalent(true));
    }

    #[test]
    fn pair_implies() {
        assert_eq!((true, false).implies((false, true)), (false, true));
    }

    #[test]
    fn phantom_is_lawful() {
        let p = PhantomData::<String>;
        assert!(heyting_algebra_law(&p, &p, &p).is_lawful());
        assert!(negation_law(&p).is_lawful());
        assert!(p.equivalent(PhantomData));
    }

    #[quickcheck]
    fn bool_lawful(a: bool, b: bool, c: bool) {
        let verdict = heyting_algebra_law(&a, &b, &c)
            .and(residuation_law(&a, &b, &c))
            .and(negation_law(&a));
        assert!(verdict.is_lawful(), "{}", verdict);
    }

    #[quickcheck]
    fn unit_lawful(a: (), b: (), c: ()) {
        let verdict = heyting_algebra_law(&a, &b, &c).and(negation_law(&a));
        assert!(verdict.is_lawful(), "{}", verdict);
    }

    #[quickcheck]
    fn pair_lawful(a: (bool, bool), b: (bool, bool), c: (bool, bool)) {
        let verdict = heyting_algebra_law(&a, &b, &c)
            .and(residuation_law(&a, &b, &c))
            .and(negation_law(&a))
            .and(distributive_law(&a, &b, &c));
        assert!(verdict.is_lawful(), "{}", verdict);
    }

    #[quickcheck]
    fn pair_implies_componentwise(a: (bool, bool), b: (bool, bool)) {
        assert_eq!(a.implies(b), (a.0.implies(b.0), a.1.implies(b.1)));
    }

    #[quickcheck]
    fn default_implies_from_not(a: Bit, b: Bit) {
        assert_eq!(a.implies(b), Bit(a.0.implies(b.0)));
    }

    #[quickcheck]
    fn default_implies_lawful(a: Bit, b: Bit, c: Bit) {
        let verdict = heyting_algebra_law(&a, &b, &c).and(residuation_law(&a, &b, &c));
        assert!(verdict.is_lawful(), "{}", verdict);
    }

    #[quickcheck]
    fn iff_reflexive(a: (bool, bool)) {
        assert!(a.equivalent(a));
        assert_eq!(a.iff(a), HasTop::top());
    }

    #[quickcheck]
    fn iff_symmetric(a: (bool, bool), b: (bool, bool)) {
        assert_eq!(a.iff(b), b.iff(a));
    }

    #[quickcheck]
    fn to_boolean_is_double_negation(a: (bool, bool)) {
        assert_eq!(a.to_boolean(), a.not().not());
    }

    #[quickcheck]
    fn bool_to_boolean_is_identity(a: bool) {
        assert_eq!(a.to_boolean(), a);
    }
}

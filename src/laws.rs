// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Predicates for the laws of lattices and Heyting algebras.
//!
//! Each predicate checks one group of laws for the given operands and returns a [`Verdict`]
//! which records every violated law together with the offending operands.  Verdicts combine
//! with [`Verdict::and`], which keeps all violations of both sides.
//!
//! The predicates are meant for property based testing: run [`heyting_algebra_law`] over many
//! randomly generated operands to gain confidence that a [`HeytingAlgebra`] instance is lawful.

use crate::heyting::HeytingAlgebra;
use crate::lattice::{HasBottom, HasTop, JoinSemiLattice, LatticeOrder, MeetSemiLattice};
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error;
use tracing::{event, instrument, Level};

/// The verdict of checking laws.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Verdict {
    /// Descriptions of all violated laws, in the order they were checked.
    violations: Vec<String>,
}

impl Verdict {
    /// A verdict without any violated laws.
    pub fn lawful() -> Self {
        Self::default()
    }

    /// Whether no law was violated.
    pub fn is_lawful(&self) -> bool {
        self.violations.is_empty()
    }

    /// Get descriptions of all violated laws.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Check a single law.
    ///
    /// If `holds` is false record the violation described by `describe`.
    pub fn check<F>(mut self, holds: bool, describe: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if !holds {
            let violation = describe();
            event!(Level::DEBUG, "Law violated: {}", violation);
            self.violations.push(violation);
        }
        self
    }

    /// Combine this verdict with `other`, keeping the violations of both.
    pub fn and(mut self, other: Verdict) -> Self {
        self.violations.extend(other.violations);
        self
    }

    /// Turn this verdict into a result which fails if any law was violated.
    pub fn into_result(self) -> Result<(), LawViolation> {
        if self.is_lawful() {
            Ok(())
        } else {
            Err(LawViolation {
                violations: self.violations,
            })
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_lawful() {
            write!(f, "all laws hold")
        } else {
            write!(f, "{}", self.violations.join("\n"))
        }
    }
}

/// One or more laws were violated.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("{} law(s) violated: {}", .violations.len(), .violations.join("; "))]
pub struct LawViolation {
    violations: Vec<String>,
}

impl LawViolation {
    /// Get descriptions of all violated laws.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// Check the laws of a bounded meet semi lattice.
///
/// Meet must be associative, commutative and idempotent, top must be its identity, and
/// `a ∧ b ≤ a` must hold.
#[instrument(level = "trace", skip_all)]
pub fn bounded_meet_semilattice_law<T>(a: &T, b: &T, c: &T) -> Verdict
where
    T: MeetSemiLattice + HasTop + Clone + PartialEq + Debug,
{
    let meet = |x: &T, y: &T| x.clone().meet(y.clone());
    Verdict::lawful()
        .check(meet(a, &meet(b, c)) == meet(&meet(a, b), c), || {
            format!(
                "meet associativity: {:?} ∧ ({:?} ∧ {:?}) ≠ ({:?} ∧ {:?}) ∧ {:?}",
                a, b, c, a, b, c
            )
        })
        .check(meet(a, b) == meet(b, a), || {
            format!("meet commutativity: {:?} ∧ {:?} ≠ {:?} ∧ {:?}", a, b, b, a)
        })
        .check(meet(a, a) == *a, || {
            format!("meet idempotence: {:?} ∧ {:?} ≠ {:?}", a, a, a)
        })
        .check(meet(&T::top(), a) == *a, || {
            format!("meet identity: ⊤ ∧ {:?} ≠ {:?}", a, a)
        })
        .check(meet(a, b).leq(a), || {
            format!("meet lower bound: {:?} ∧ {:?} ≰ {:?}", a, b, a)
        })
}

/// Check the laws of a bounded join semi lattice.
///
/// Join must be associative, commutative and idempotent, bottom must be its identity, and
/// `a ≤ a ∨ b` must hold.
#[instrument(level = "trace", skip_all)]
pub fn bounded_join_semilattice_law<T>(a: &T, b: &T, c: &T) -> Verdict
where
    T: JoinSemiLattice + MeetSemiLattice + HasBottom + Clone + PartialEq + Debug,
{
    let join = |x: &T, y: &T| x.clone().join(y.clone());
    Verdict::lawful()
        .check(join(a, &join(b, c)) == join(&join(a, b), c), || {
            format!(
                "join associativity: {:?} ∨ ({:?} ∨ {:?}) ≠ ({:?} ∨ {:?}) ∨ {:?}",
                a, b, c, a, b, c
            )
        })
        .check(join(a, b) == join(b, a), || {
            format!("join commutativity: {:?} ∨ {:?} ≠ {:?} ∨ {:?}", a, b, b, a)
        })
        .check(join(a, a) == *a, || {
            format!("join idempotence: {:?} ∨ {:?} ≠ {:?}", a, a, a)
        })
        .check(join(&T::bottom(), a) == *a, || {
            format!("join identity: ⊥ ∨ {:?} ≠ {:?}", a, a)
        })
        .check(a.leq(&join(a, b)), || {
            format!("join upper bound: {:?} ≰ {:?} ∨ {:?}", a, a, b)
        })
}

/// Check the laws of implication.
///
/// Implication must satisfy modus ponens, i.e. `(a ⇒ b) ∧ a ≤ b`, and `b ≤ a ⇒ (a ∧ b)`.
#[instrument(level = "trace", skip_all)]
pub fn implies_law<T>(a: &T, b: &T) -> Verdict
where
    T: HeytingAlgebra + PartialEq + Debug,
{
    let modus_ponens = a.clone().implies(b.clone()).meet(a.clone());
    let weakening = a.clone().implies(a.clone().meet(b.clone()));
    Verdict::lawful()
        .check(modus_ponens.leq(b), || {
            format!("modus ponens: ({:?} ⇒ {:?}) ∧ {:?} ≰ {:?}", a, b, a, b)
        })
        .check(b.leq(&weakening), || {
            format!("weakening: {:?} ≰ {:?} ⇒ ({:?} ∧ {:?})", b, a, a, b)
        })
}

/// Check all laws of a Heyting algebra.
///
/// This is the conjunction of [`bounded_meet_semilattice_law`], [`bounded_join_semilattice_law`]
/// and [`implies_law`].
#[instrument(level = "trace", skip_all)]
pub fn heyting_algebra_law<T>(a: &T, b: &T, c: &T) -> Verdict
where
    T: HeytingAlgebra + PartialEq + Debug,
{
    bounded_meet_semilattice_law(a, b, c)
        .and(bounded_join_semilattice_law(a, b, c))
        .and(implies_law(a, b))
}

/// Check the defining adjunction of implication: `x ∧ a ≤ b` if and only if `x ≤ (a ⇒ b)`.
#[instrument(level = "trace", skip_all)]
pub fn residuation_law<T>(x: &T, a: &T, b: &T) -> Verdict
where
    T: HeytingAlgebra + PartialEq + Debug,
{
    let left = x.clone().meet(a.clone()).leq(b);
    let right = x.leq(&a.clone().implies(b.clone()));
    Verdict::lawful().check(left == right, || {
        format!(
            "residuation: ({:?} ∧ {:?} ≤ {:?}) = {} but ({:?} ≤ {:?} ⇒ {:?}) = {}",
            x, a, b, left, x, a, b, right
        )
    })
}

/// Check the laws of negation.
///
/// Negation must agree with `a ⇒ ⊥`, `a ≤ ¬¬a` must hold, and `a` must be equivalent to itself.
#[instrument(level = "trace", skip_all)]
pub fn negation_law<T>(a: &T) -> Verdict
where
    T: HeytingAlgebra + PartialEq + Debug,
{
    let not = a.clone().not();
    Verdict::lawful()
        .check(not == a.clone().implies(T::bottom()), || {
            format!("negation: ¬{:?} ≠ {:?} ⇒ ⊥", a, a)
        })
        .check(a.leq(&a.clone().to_boolean()), || {
            format!("double negation: {:?} ≰ ¬¬{:?}", a, a)
        })
        .check(a.clone().equivalent(a.clone()), || {
            format!("reflexivity: {:?} ⇔ {:?} is not ⊤", a, a)
        })
}

/// Check the absorption laws `a ∧ (a ∨ b) = a` and `a ∨ (a ∧ b) = a`.
#[instrument(level = "trace", skip_all)]
pub fn absorption_law<T>(a: &T, b: &T) -> Verdict
where
    T: JoinSemiLattice + MeetSemiLattice + Clone + PartialEq + Debug,
{
    Verdict::lawful()
        .check(a.clone().meet(a.clone().join(b.clone())) == *a, || {
            format!("meet absorption: {:?} ∧ ({:?} ∨ {:?}) ≠ {:?}", a, a, b, a)
        })
        .check(a.clone().join(a.clone().meet(b.clone())) == *a, || {
            format!("join absorption: {:?} ∨ ({:?} ∧ {:?}) ≠ {:?}", a, a, b, a)
        })
}

/// Check that meet distributes over join: `a ∧ (b ∨ c) = (a ∧ b) ∨ (a ∧ c)`.
///
/// Every Heyting algebra is a distributive lattice.
#[instrument(level = "trace", skip_all)]
pub fn distributive_law<T>(a: &T, b: &T, c: &T) -> Verdict
where
    T: JoinSemiLattice + MeetSemiLattice + Clone + PartialEq + Debug,
{
    let left = a.clone().meet(b.clone().join(c.clone()));
    let right = a
        .clone()
        .meet(b.clone())
        .join(a.clone().meet(c.clone()));
    Verdict::lawful().check(left == right, || {
        format!(
            "distributivity: {:?} ∧ ({:?} ∨ {:?}) ≠ ({:?} ∧ {:?}) ∨ ({:?} ∧ {:?})",
            a, b, c, a, b, a, c
        )
    })
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(warnings, missing_docs, clippy::all)]

//! Heyting algebras over bounded lattices.
//!
//! [`heyting::HeytingAlgebra`] extends the bounded lattices of [`lattice`] with implication and
//! negation, and comes with instances for common structural types.  The predicates in [`laws`]
//! check that an instance is lawful, typically over randomly generated operands.
//!
//! ```
//! use heyting::heyting::{HeytingAlgebra, WithTop};
//! use heyting::laws::heyting_algebra_law;
//!
//! assert!(!true.implies(false));
//! assert_eq!((true, false).implies((false, true)), (false, true));
//! assert_eq!(WithTop::Value(true).implies(WithTop::Value(true)), WithTop::Top);
//! assert!(heyting_algebra_law(&true, &false, &true).is_lawful());
//! ```

pub mod heyting;
pub mod lattice;
pub mod laws;

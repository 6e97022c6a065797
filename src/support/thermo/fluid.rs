//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted via trait implementations (e.g., coefficient tables for
//! [`Reynolds`](crate::support::thermo::model::Reynolds)).
//!
//! Some fluids are simple unit-like types, while others carry state-defining data.

mod helium4;

pub use helium4::Helium4;

//! Public reactor models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Each model lives in its own module. A model owns its collaborating objects
//! (a phase, an optional surface state) and exposes explicit `Result`-returning
//! operations; the thermodynamic machinery it is built on lives in
//! [`crate::support::thermo`] and stays reusable across models.

pub mod reactor;

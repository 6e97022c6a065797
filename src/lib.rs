//! # Reynolds Models
//!
//! Pure-fluid thermodynamic property models based on the multi-region analytic
//! correlations of W.C. Reynolds, *Thermodynamic Properties in SI*, plus a
//! zero-dimensional pure-fluid reactor built on top of them.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain models, currently the zero-D reactor in
//!   [`models::reactor`].
//! - [`support`]: Supporting utilities used by models, including the
//!   thermodynamic property machinery in [`support::thermo`].
//!
//! ## Property evaluation
//!
//! A fluid's state space is partitioned into analytic regions, each with its
//! own fitted coefficient table. Every property call selects the region for
//! the requested `(temperature, density)` pair fresh; nothing is cached
//! between calls, so perturbing a state (e.g. for a finite-difference
//! Jacobian) always sees a consistent region. States outside a fluid's
//! correlated domain are an error, never an extrapolation.

pub mod models;
pub mod support;

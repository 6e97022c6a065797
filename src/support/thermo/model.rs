//! Thermodynamic property models.

pub mod reynolds;

pub use reynolds::Reynolds;

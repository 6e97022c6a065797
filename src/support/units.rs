//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature,
//! pressure, density). This module defines typed quantities that are useful
//! for modeling but aren't included in [`uom`], such as specific internal
//! energy and specific entropy. Each is an [`ISQ`](uom::si::ISQ) type alias,
//! so values are constructed and read with the units of the [`uom`] quantity
//! sharing its dimension:
//!
//! ```
//! use uom::si::available_energy::joule_per_kilogram;
//! use reynolds_models::support::units::SpecificInternalEnergy;
//!
//! let u = SpecificInternalEnergy::new::<joule_per_kilogram>(1.8712207e4);
//! assert_eq!(u.get::<joule_per_kilogram>(), 1.8712207e4);
//! ```

mod quantities;

pub use quantities::{
    SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, SpecificInternalEnergy, SpecificVolume,
};

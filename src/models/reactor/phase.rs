//! Phase seam between the reactor and the property models.
//!
//! The reactor drives a [`Phase`] without knowing which property model backs
//! it. [`PureFluidPhase`] implements the seam for a single-species fluid on
//! top of [`Reynolds`].

use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{HasEnthalpy, HasInternalEnergy, HasPressure, StateFrom},
    model::{Reynolds, reynolds::ReynoldsFluid},
};
use crate::support::units::{SpecificEnthalpy, SpecificInternalEnergy, SpecificVolume};

/// Broad classification of a phase, checked when attaching it to a reactor.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// A single-species fluid described by a pure-fluid equation of state.
    PureFluid,
    /// A multi-species mixture.
    Mixture,
}

/// A mutable thermodynamic phase driven by the reactor state vector.
pub trait Phase {
    fn kind(&self) -> PhaseKind;

    /// Number of species in the phase.
    fn n_species(&self) -> usize;

    /// Name of the `k`-th species, if it exists.
    fn species_name(&self, k: usize) -> Option<&str>;

    /// Index of the species with the given name, if it exists.
    fn species_index(&self, name: &str) -> Option<usize>;

    /// Stores the given mass fractions verbatim, without normalizing.
    ///
    /// Integrators hand over fractions that may transiently not sum to one;
    /// the phase must not renormalize them.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidState`] if the slice length does not
    /// match the species count.
    fn set_mass_fractions_unnormalized(&mut self, y: &[f64]) -> Result<(), PropertyError>;

    /// Moves the phase to the state with the given specific internal energy
    /// and specific volume.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if no valid state matches the inputs.
    fn set_state_uv(
        &mut self,
        energy: SpecificInternalEnergy,
        volume: SpecificVolume,
    ) -> Result<(), PropertyError>;

    /// Moves the phase to the given density, keeping its temperature.
    fn set_density(&mut self, density: MassDensity);

    fn temperature(&self) -> ThermodynamicTemperature;

    fn density(&self) -> MassDensity;

    /// Current mass fractions, in species order.
    fn mass_fractions(&self) -> &[f64];

    /// Specific enthalpy at the current state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the property cannot be evaluated here.
    fn enthalpy_mass(&self) -> Result<SpecificEnthalpy, PropertyError>;

    /// Pressure at the current state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the property cannot be evaluated here.
    fn pressure(&self) -> Result<Pressure, PropertyError>;

    /// Specific internal energy at the current state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the property cannot be evaluated here.
    fn int_energy_mass(&self) -> Result<SpecificInternalEnergy, PropertyError>;

    /// Snapshots the phase state as `[T, ρ, Y...]` into `buffer`.
    fn save_state(&self, buffer: &mut Vec<f64>);
}

/// Single-species phase backed by the [`Reynolds`] property model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PureFluidPhase<F> {
    thermo: Reynolds<F>,
    state: State<F>,
    mass_fractions: [f64; 1],
}

impl<F: ReynoldsFluid> PureFluidPhase<F> {
    /// Creates a phase at the given initial state.
    #[must_use]
    pub fn new(thermo: Reynolds<F>, initial: State<F>) -> Self {
        Self {
            thermo,
            state: initial,
            mass_fractions: [1.0],
        }
    }

    /// The property model backing this phase.
    #[must_use]
    pub fn thermo(&self) -> &Reynolds<F> {
        &self.thermo
    }

    /// The current thermodynamic state.
    #[must_use]
    pub fn state(&self) -> &State<F> {
        &self.state
    }
}

impl<F: ReynoldsFluid + Copy> Phase for PureFluidPhase<F> {
    fn kind(&self) -> PhaseKind {
        PhaseKind::PureFluid
    }

    fn n_species(&self) -> usize {
        1
    }

    fn species_name(&self, k: usize) -> Option<&str> {
        (k == 0).then_some(F::NAME)
    }

    fn species_index(&self, name: &str) -> Option<usize> {
        (name == F::NAME).then_some(0)
    }

    fn set_mass_fractions_unnormalized(&mut self, y: &[f64]) -> Result<(), PropertyError> {
        if y.len() != 1 {
            return Err(PropertyError::InvalidState {
                context: format!("expected 1 mass fraction, got {}", y.len()),
            });
        }
        self.mass_fractions = [y[0]];
        Ok(())
    }

    fn set_state_uv(
        &mut self,
        energy: SpecificInternalEnergy,
        volume: SpecificVolume,
    ) -> Result<(), PropertyError> {
        self.state = self.thermo.state_from((self.state.fluid, energy, volume))?;
        Ok(())
    }

    fn set_density(&mut self, density: MassDensity) {
        self.state = self.state.with_density(density);
    }

    fn temperature(&self) -> ThermodynamicTemperature {
        self.state.temperature
    }

    fn density(&self) -> MassDensity {
        self.state.density
    }

    fn mass_fractions(&self) -> &[f64] {
        &self.mass_fractions
    }

    fn enthalpy_mass(&self) -> Result<SpecificEnthalpy, PropertyError> {
        self.thermo.enthalpy(&self.state)
    }

    fn pressure(&self) -> Result<Pressure, PropertyError> {
        self.thermo.pressure(&self.state)
    }

    fn int_energy_mass(&self) -> Result<SpecificInternalEnergy, PropertyError> {
        self.thermo.internal_energy(&self.state)
    }

    fn save_state(&self, buffer: &mut Vec<f64>) {
        buffer.clear();
        buffer.push(self.state.temperature.get::<kelvin>());
        buffer.push(self.state.density.get::<kilogram_per_cubic_meter>());
        buffer.extend_from_slice(&self.mass_fractions);
    }
}

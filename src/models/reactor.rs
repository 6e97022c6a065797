//! Zero-dimensional pure-fluid reactor state adapter.
//!
//! `PureFluidReactor` maps an ODE integrator's flat state vector onto a
//! thermodynamic [`Phase`] and back. The state vector layout is
//!
//! ```text
//! y = [mass, volume, total internal energy, Y[0..K), θ[K..)]
//! ```
//!
//! with `K` species mass fractions followed by any surface coverages. The
//! reactor owns no chemistry and no integrator: it validates the vector,
//! pushes it into the phase, and caches the properties other connected
//! components read between steps.

pub mod phase;
pub mod surface;

pub use phase::{Phase, PhaseKind, PureFluidPhase};
pub use surface::{NoSurface, SurfaceState};

use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        available_energy::joule_per_kilogram,
        f64::{Mass, MassDensity, Pressure, Volume},
        mass::kilogram,
        mass_density::kilogram_per_cubic_meter,
        specific_volume::cubic_meter_per_kilogram,
        volume::cubic_meter,
    },
};

use crate::support::constraint::{Constraint, StrictlyPositive};
use crate::support::thermo::PropertyError;
use crate::support::units::{SpecificEnthalpy, SpecificInternalEnergy, SpecificVolume};

/// Errors from attaching a phase or applying a state vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReactorError {
    /// The attached phase is not a pure fluid.
    #[error("incompatible phase type: expected a pure fluid, found {found:?}")]
    IncompatiblePhase { found: PhaseKind },

    /// The state vector does not match the reactor's component count.
    #[error("state vector has wrong length: expected {expected}, got {got}")]
    StateVectorLength { expected: usize, got: usize },

    /// A state-vector entry that must be strictly positive is not.
    #[error("non-physical {what}: must be strictly positive")]
    NonPhysical { what: &'static str },

    /// A thermodynamic property evaluation failed.
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// The surface rejected its coverage entries.
    #[error("surface coverage error: {context}")]
    Coverage { context: String },
}

/// Zero-D reactor over a pure-fluid phase and an optional surface.
#[derive(Debug, Clone)]
pub struct PureFluidReactor<P, S = NoSurface> {
    phase: P,
    surface: S,
    energy_equation: bool,
    mass: Mass,
    volume: Volume,
    enthalpy: SpecificEnthalpy,
    pressure: Pressure,
    internal_energy: SpecificInternalEnergy,
    saved_state: Vec<f64>,
}

impl<P: Phase> PureFluidReactor<P, NoSurface> {
    /// Creates a reactor over the given phase with no surface species.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::IncompatiblePhase`] unless the phase is a
    /// pure fluid.
    pub fn new(phase: P) -> Result<Self, ReactorError> {
        Self::with_surface(phase, NoSurface)
    }
}

impl<P: Phase, S: SurfaceState> PureFluidReactor<P, S> {
    /// Creates a reactor over the given phase and surface.
    ///
    /// The energy equation starts enabled; see [`Self::with_energy_equation`].
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::IncompatiblePhase`] unless the phase is a
    /// pure fluid. The check runs before any mutation.
    pub fn with_surface(phase: P, surface: S) -> Result<Self, ReactorError> {
        let found = phase.kind();
        if found != PhaseKind::PureFluid {
            return Err(ReactorError::IncompatiblePhase { found });
        }

        Ok(Self {
            phase,
            surface,
            energy_equation: true,
            mass: Mass::ZERO,
            volume: Volume::ZERO,
            enthalpy: SpecificEnthalpy::ZERO,
            pressure: Pressure::ZERO,
            internal_energy: SpecificInternalEnergy::ZERO,
            saved_state: Vec::new(),
        })
    }

    /// Enables or disables the energy equation.
    ///
    /// With the energy equation disabled the phase keeps its temperature and
    /// only tracks density; the energy entry of the state vector is ignored.
    #[must_use]
    pub fn with_energy_equation(mut self, enabled: bool) -> Self {
        self.energy_equation = enabled;
        self
    }

    /// Length of this reactor's slice of the integrator state vector.
    #[must_use]
    pub fn n_components(&self) -> usize {
        3 + self.phase.n_species() + self.surface.n_coverages()
    }

    /// Applies a state vector: updates the phase and surface, then caches
    /// enthalpy, pressure, and internal energy for connected components.
    ///
    /// # Errors
    ///
    /// - [`ReactorError::StateVectorLength`] if `y` has the wrong length.
    /// - [`ReactorError::NonPhysical`] if mass or volume is not strictly
    ///   positive.
    /// - [`ReactorError::Property`] if the phase cannot reach the requested
    ///   state or a cached property cannot be evaluated there.
    /// - [`ReactorError::Coverage`] if the surface rejects its entries.
    pub fn update_state(&mut self, y: &[f64]) -> Result<(), ReactorError> {
        let expected = self.n_components();
        if y.len() != expected {
            return Err(ReactorError::StateVectorLength {
                expected,
                got: y.len(),
            });
        }

        let mass = y[0];
        let volume = y[1];
        if StrictlyPositive::check(&mass).is_err() {
            return Err(ReactorError::NonPhysical { what: "mass" });
        }
        if StrictlyPositive::check(&volume).is_err() {
            return Err(ReactorError::NonPhysical { what: "volume" });
        }
        self.mass = Mass::new::<kilogram>(mass);
        self.volume = Volume::new::<cubic_meter>(volume);

        let n = self.phase.n_species();
        self.phase.set_mass_fractions_unnormalized(&y[3..3 + n])?;

        if self.energy_equation {
            self.phase.set_state_uv(
                SpecificInternalEnergy::new::<joule_per_kilogram>(y[2] / mass),
                SpecificVolume::new::<cubic_meter_per_kilogram>(volume / mass),
            )?;
        } else {
            self.phase
                .set_density(MassDensity::new::<kilogram_per_cubic_meter>(mass / volume));
        }

        self.surface.update_coverages(&y[3 + n..])?;

        self.enthalpy = self.phase.enthalpy_mass()?;
        self.pressure = self.phase.pressure()?;
        self.internal_energy = self.phase.int_energy_mass()?;
        self.phase.save_state(&mut self.saved_state);

        Ok(())
    }

    /// Writes the reactor's current state into a state vector.
    ///
    /// Mass is recomputed from the phase density and the reactor volume, so
    /// the vector round-trips through [`Self::update_state`].
    ///
    /// # Errors
    ///
    /// - [`ReactorError::StateVectorLength`] if `y` has the wrong length.
    /// - [`ReactorError::Property`] if internal energy cannot be evaluated
    ///   at the phase's current state.
    pub fn fill_state(&self, y: &mut [f64]) -> Result<(), ReactorError> {
        let expected = self.n_components();
        if y.len() != expected {
            return Err(ReactorError::StateVectorLength {
                expected,
                got: y.len(),
            });
        }

        let volume = self.volume.get::<cubic_meter>();
        let mass = self.phase.density().get::<kilogram_per_cubic_meter>() * volume;
        y[0] = mass;
        y[1] = volume;
        y[2] = mass
            * self
                .phase
                .int_energy_mass()?
                .get::<joule_per_kilogram>();

        let n = self.phase.n_species();
        y[3..3 + n].copy_from_slice(self.phase.mass_fractions());
        y[3 + n..].copy_from_slice(self.surface.coverages());

        Ok(())
    }

    /// Index in the state vector of the named component.
    ///
    /// Recognized names are `"mass"`, `"volume"`, `"temperature"`, the
    /// phase's species names, and the surface's coverage names.
    #[must_use]
    pub fn component_index(&self, name: &str) -> Option<usize> {
        match name {
            "mass" => Some(0),
            "volume" => Some(1),
            "temperature" => Some(2),
            _ => self
                .phase
                .species_index(name)
                .map(|k| k + 3)
                .or_else(|| {
                    self.surface
                        .coverage_index(name)
                        .map(|k| k + 3 + self.phase.n_species())
                }),
        }
    }

    /// Name of the `k`-th state-vector component.
    #[must_use]
    pub fn component_name(&self, k: usize) -> Option<&str> {
        match k {
            0 => Some("mass"),
            1 => Some("volume"),
            2 => Some("temperature"),
            _ => {
                let k = k - 3;
                let n = self.phase.n_species();
                if k < n {
                    self.phase.species_name(k)
                } else {
                    self.surface.coverage_name(k - n)
                }
            }
        }
    }

    /// The phase this reactor drives.
    #[must_use]
    pub fn phase(&self) -> &P {
        &self.phase
    }

    /// Total fluid mass from the last applied state vector.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Reactor volume from the last applied state vector.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Specific enthalpy cached by the last [`Self::update_state`].
    #[must_use]
    pub fn enthalpy(&self) -> SpecificEnthalpy {
        self.enthalpy
    }

    /// Pressure cached by the last [`Self::update_state`].
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Specific internal energy cached by the last [`Self::update_state`].
    #[must_use]
    pub fn internal_energy(&self) -> SpecificInternalEnergy {
        self.internal_energy
    }

    /// Phase snapshot `[T, ρ, Y...]` from the last [`Self::update_state`].
    #[must_use]
    pub fn saved_state(&self) -> &[f64] {
        &self.saved_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{MassDensity, ThermodynamicTemperature},
        mass_density::kilogram_per_cubic_meter,
        pressure::pascal,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::{
        State,
        capability::HasPressure,
        fluid::Helium4,
        model::Reynolds,
    };

    fn phase() -> PureFluidPhase<Helium4> {
        let thermo = Reynolds::<Helium4>::new().unwrap();
        let initial = State::new(
            ThermodynamicTemperature::new::<kelvin>(4.0),
            MassDensity::new::<kilogram_per_cubic_meter>(10.0),
            Helium4,
        );
        PureFluidPhase::new(thermo, initial)
    }

    #[test]
    fn fixed_temperature_mode_tracks_density_only() {
        let mut reactor = PureFluidReactor::new(phase())
            .unwrap()
            .with_energy_equation(false);

        // Energy entry is ignored in this mode.
        reactor.update_state(&[2.0, 1.0, 0.0, 0.7]).unwrap();

        assert_relative_eq!(
            reactor
                .phase()
                .density()
                .get::<kilogram_per_cubic_meter>(),
            2.0
        );
        assert_relative_eq!(reactor.phase().temperature().get::<kelvin>(), 4.0);

        // The unnormalized fraction is stored verbatim.
        assert_eq!(reactor.phase().mass_fractions(), &[0.7]);

        // Cached pressure matches a direct model evaluation at (T, ρ).
        let thermo = Reynolds::<Helium4>::new().unwrap();
        let expected = thermo
            .pressure(&State {
                temperature: ThermodynamicTemperature::new::<kelvin>(4.0),
                density: MassDensity::new::<kilogram_per_cubic_meter>(2.0),
                fluid: Helium4,
            })
            .unwrap();
        assert_relative_eq!(
            reactor.pressure().get::<pascal>(),
            expected.get::<pascal>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn energy_mode_recovers_temperature() {
        let mut reactor = PureFluidReactor::new(phase()).unwrap();

        // 1 kg in 0.1 m³ at the energy of (4 K, 10 kg/m³).
        reactor
            .update_state(&[1.0, 0.1, 22_165.188_611_901_976, 1.0])
            .unwrap();

        assert_relative_eq!(
            reactor.phase().temperature().get::<kelvin>(),
            4.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            reactor.pressure().get::<pascal>(),
            65_878.372_127_671_45,
            max_relative = 1e-6
        );

        // Snapshot is [T, ρ, Y].
        let saved = reactor.saved_state();
        assert_eq!(saved.len(), 3);
        assert_relative_eq!(saved[0], 4.0, epsilon = 1e-6);
        assert_relative_eq!(saved[1], 10.0, max_relative = 1e-12);
        assert_relative_eq!(saved[2], 1.0);
    }

    #[test]
    fn fill_state_round_trips() {
        let mut reactor = PureFluidReactor::new(phase()).unwrap();

        let y_in = [1.0, 0.1, 22_165.188_611_901_976, 1.0];
        reactor.update_state(&y_in).unwrap();

        let mut y_out = [0.0; 4];
        reactor.fill_state(&mut y_out).unwrap();

        for (actual, expected) in y_out.iter().zip(y_in) {
            assert_relative_eq!(*actual, expected, max_relative = 1e-6);
        }
    }

    #[test]
    fn component_map_is_bidirectional() {
        let reactor = PureFluidReactor::new(phase()).unwrap();

        assert_eq!(reactor.n_components(), 4);
        for (name, index) in [("mass", 0), ("volume", 1), ("temperature", 2), ("helium-4", 3)] {
            assert_eq!(reactor.component_index(name), Some(index));
            assert_eq!(reactor.component_name(index), Some(name));
        }
        assert_eq!(reactor.component_index("argon"), None);
        assert_eq!(reactor.component_name(4), None);
    }

    #[test]
    fn wrong_length_and_non_physical_vectors_are_rejected() {
        let mut reactor = PureFluidReactor::new(phase()).unwrap();

        assert!(matches!(
            reactor.update_state(&[1.0, 0.1, 0.0]),
            Err(ReactorError::StateVectorLength {
                expected: 4,
                got: 3
            })
        ));
        assert!(matches!(
            reactor.update_state(&[0.0, 0.1, 0.0, 1.0]),
            Err(ReactorError::NonPhysical { what: "mass" })
        ));
        assert!(matches!(
            reactor.update_state(&[1.0, -0.1, 0.0, 1.0]),
            Err(ReactorError::NonPhysical { what: "volume" })
        ));
    }

    #[test]
    fn non_pure_fluid_phases_are_rejected() {
        struct MixturePhase;

        impl Phase for MixturePhase {
            fn kind(&self) -> PhaseKind {
                PhaseKind::Mixture
            }
            fn n_species(&self) -> usize {
                unimplemented!()
            }
            fn species_name(&self, _k: usize) -> Option<&str> {
                unimplemented!()
            }
            fn species_index(&self, _name: &str) -> Option<usize> {
                unimplemented!()
            }
            fn set_mass_fractions_unnormalized(&mut self, _y: &[f64]) -> Result<(), PropertyError> {
                unimplemented!()
            }
            fn set_state_uv(
                &mut self,
                _energy: SpecificInternalEnergy,
                _volume: SpecificVolume,
            ) -> Result<(), PropertyError> {
                unimplemented!()
            }
            fn set_density(&mut self, _density: MassDensity) {
                unimplemented!()
            }
            fn temperature(&self) -> ThermodynamicTemperature {
                unimplemented!()
            }
            fn density(&self) -> MassDensity {
                unimplemented!()
            }
            fn mass_fractions(&self) -> &[f64] {
                unimplemented!()
            }
            fn enthalpy_mass(&self) -> Result<SpecificEnthalpy, PropertyError> {
                unimplemented!()
            }
            fn pressure(&self) -> Result<Pressure, PropertyError> {
                unimplemented!()
            }
            fn int_energy_mass(&self) -> Result<SpecificInternalEnergy, PropertyError> {
                unimplemented!()
            }
            fn save_state(&self, _buffer: &mut Vec<f64>) {
                unimplemented!()
            }
        }

        assert!(matches!(
            PureFluidReactor::new(MixturePhase),
            Err(ReactorError::IncompatiblePhase {
                found: PhaseKind::Mixture
            })
        ));
    }
}

//! Multi-region analytic equation-of-state model.
//!
//! `Reynolds` evaluates pressure, internal energy, entropy, and enthalpy from
//! fitted coefficient tables in the form published by W.C. Reynolds,
//! *Thermodynamic Properties in SI*. A fluid's `(T, ρ)` plane is partitioned
//! into analytic regions, each with its own table; every property call
//! selects the region fresh from the inputs.
//!
//! # Equation of state
//!
//! Within a region, pressure is the ideal-gas term plus seven basis terms,
//! each a temperature polynomial times a power of density (two of them
//! exponentially damped):
//!
//! ```text
//! P(T, ρ) = ρ·R·T + Σⱼ Cⱼ(T)·fⱼ(ρ)
//! ```
//!
//! Internal energy and entropy follow from the same tables by exact
//! differentiation and integration, anchored at a reference state, so the
//! three properties are thermodynamically consistent within a region.
//!
//! # Domain
//!
//! States outside the fitted domain are an error, never an extrapolation.
//! This includes the published gap between the supercritical band and the
//! high-temperature band, which no table covers.

pub mod data;

mod basis;
mod region;
mod saturation;
mod solve_uv;

pub use solve_uv::UvSolveConfig;

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, MolarMass, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{
    SpecificEnthalpy, SpecificEntropy, SpecificGasConstant, SpecificInternalEnergy, SpecificVolume,
};
use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{
            HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, HasSaturationPressure,
            StateFrom, ThermoModel,
        },
    },
};

use basis::Basis;
use data::ReynoldsData;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReynoldsParametersError {
    #[error("invalid gas constant R: {r:?} J/kg·K")]
    GasConstant { r: f64 },
    #[error("invalid ideal heat capacity cv: {cv:?} J/kg·K")]
    IdealHeatCapacity { cv: f64 },
    #[error("invalid critical temperature: {t_crit:?} K")]
    CriticalTemperature { t_crit: f64 },
    #[error("invalid critical density: {rho_crit:?} kg/m³")]
    CriticalDensity { rho_crit: f64 },
    #[error("invalid molar mass: {molar_mass:?} kg/mol")]
    MolarMass { molar_mass: f64 },
    #[error("invalid temperature range: need 0 < t_min < t_crit < t_max; t_min={t_min:?}, t_crit={t_crit:?}, t_max={t_max:?}")]
    TemperatureRange { t_min: f64, t_crit: f64, t_max: f64 },
    #[error("invalid reference temperature: {t_ref:?} K")]
    ReferenceTemperature { t_ref: f64 },
    #[error(
        "invalid region bounds: need t_crit ≤ supercritical_max < high_temperature_min ≤ t_max; supercritical_max={supercritical_max:?}, high_temperature_min={high_temperature_min:?}"
    )]
    RegionBounds {
        supercritical_max: f64,
        high_temperature_min: f64,
    },
}

/// Fluid data required by the [`Reynolds`] model.
pub trait ReynoldsFluid {
    /// Human-readable fluid name.
    const NAME: &'static str;

    /// Returns the fluid's coefficient tables and constants.
    fn data() -> &'static ReynoldsData;
}

/// Multi-region equation-of-state model over a fluid's published tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reynolds<Fluid> {
    data: &'static ReynoldsData,
    /// Additive shift applied to every internal energy result, J/kg.
    energy_offset: f64,
    /// Additive shift applied to every entropy result, J/kg·K.
    entropy_offset: f64,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Reynolds<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid: ReynoldsFluid> Reynolds<Fluid> {
    /// Creates a model using the tables and constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`ReynoldsParametersError`] if any required constant is
    /// invalid or the region boundaries are inconsistent.
    pub fn new() -> Result<Self, ReynoldsParametersError> {
        let data = Fluid::data();
        Self::validate(data)?;

        Ok(Self {
            data,
            energy_offset: 0.0,
            entropy_offset: 0.0,
            _marker: PhantomData,
        })
    }

    fn validate(data: &ReynoldsData) -> Result<(), ReynoldsParametersError> {
        let constants = &data.constants;

        if StrictlyPositive::check(&constants.gas_constant).is_err() {
            return Err(ReynoldsParametersError::GasConstant {
                r: constants.gas_constant,
            });
        }
        if StrictlyPositive::check(&constants.cv_ideal).is_err() {
            return Err(ReynoldsParametersError::IdealHeatCapacity {
                cv: constants.cv_ideal,
            });
        }
        if StrictlyPositive::check(&constants.t_crit).is_err() {
            return Err(ReynoldsParametersError::CriticalTemperature {
                t_crit: constants.t_crit,
            });
        }
        if StrictlyPositive::check(&constants.rho_crit).is_err() {
            return Err(ReynoldsParametersError::CriticalDensity {
                rho_crit: constants.rho_crit,
            });
        }
        if StrictlyPositive::check(&constants.molar_mass).is_err() {
            return Err(ReynoldsParametersError::MolarMass {
                molar_mass: constants.molar_mass,
            });
        }

        let ordered = StrictlyPositive::check(&constants.t_min).is_ok()
            && constants.t_min < constants.t_crit
            && constants.t_crit < constants.t_max;
        if !ordered {
            return Err(ReynoldsParametersError::TemperatureRange {
                t_min: constants.t_min,
                t_crit: constants.t_crit,
                t_max: constants.t_max,
            });
        }

        if StrictlyPositive::check(&data.reference.temperature).is_err() {
            return Err(ReynoldsParametersError::ReferenceTemperature {
                t_ref: data.reference.temperature,
            });
        }

        let bounds = &data.bounds;
        let consistent = constants.t_crit <= bounds.supercritical_max
            && bounds.supercritical_max < bounds.high_temperature_min
            && bounds.high_temperature_min <= constants.t_max;
        if !consistent {
            return Err(ReynoldsParametersError::RegionBounds {
                supercritical_max: bounds.supercritical_max,
                high_temperature_min: bounds.high_temperature_min,
            });
        }

        Ok(())
    }
}

impl<Fluid> Reynolds<Fluid> {
    /// Returns a model with the given shifts added to every energy and
    /// entropy result.
    ///
    /// Offsets realign the fluid's reference state with another property
    /// source without touching the published tables.
    #[must_use]
    pub fn with_offsets(self, energy: SpecificInternalEnergy, entropy: SpecificEntropy) -> Self {
        Self {
            energy_offset: energy.get::<joule_per_kilogram>(),
            entropy_offset: entropy.get::<joule_per_kilogram_kelvin>(),
            ..self
        }
    }

    pub(crate) fn data(&self) -> &'static ReynoldsData {
        self.data
    }

    /// Critical temperature of the fluid.
    #[must_use]
    pub fn critical_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.data.constants.t_crit)
    }

    /// Critical pressure of the fluid.
    #[must_use]
    pub fn critical_pressure(&self) -> Pressure {
        Pressure::new::<pascal>(self.data.constants.p_crit)
    }

    /// Critical density of the fluid.
    #[must_use]
    pub fn critical_density(&self) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(self.data.constants.rho_crit)
    }

    /// Specific volume at the critical point.
    #[must_use]
    pub fn critical_specific_volume(&self) -> SpecificVolume {
        SpecificVolume::new::<cubic_meter_per_kilogram>(1.0 / self.data.constants.rho_crit)
    }

    /// Minimum temperature for which the correlations are valid.
    #[must_use]
    pub fn minimum_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.data.constants.t_min)
    }

    /// Maximum temperature for which the correlations are valid.
    #[must_use]
    pub fn maximum_temperature(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.data.constants.t_max)
    }

    /// Molar mass of the fluid.
    #[must_use]
    pub fn molar_mass(&self) -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(self.data.constants.molar_mass)
    }

    /// Specific gas constant of the fluid.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        SpecificGasConstant::new::<joule_per_kilogram_kelvin>(self.data.constants.gas_constant)
    }

    /// Saturated liquid density at the given temperature.
    ///
    /// This is also the boundary between the low-density and dense regions
    /// below the critical temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if `temperature` is outside
    /// `[t_min, t_crit]`.
    pub fn saturated_liquid_density(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MassDensity, PropertyError> {
        let rho = saturation::liquid_density_si(self.data, temperature.get::<kelvin>())?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(rho))
    }

    /// Constructs a state from specific internal energy and specific volume
    /// with explicit solver settings.
    ///
    /// The equivalent [`StateFrom`] input uses [`UvSolveConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `volume` is non-physical, the energy is
    /// unreachable at this density, or the solve does not converge.
    pub fn state_from_energy_volume(
        &self,
        fluid: Fluid,
        energy: SpecificInternalEnergy,
        volume: SpecificVolume,
        config: &UvSolveConfig,
    ) -> Result<State<Fluid>, PropertyError> {
        let v = volume.get::<cubic_meter_per_kilogram>();
        if !v.is_finite() || v <= 0.0 {
            return Err(PropertyError::InvalidState {
                context: format!("specific volume must be finite and positive: v = {v} m³/kg"),
            });
        }
        let rho = 1.0 / v;

        let t = solve_uv::solve_temperature(self, rho, energy.get::<joule_per_kilogram>(), config)?;

        Ok(State {
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
            fluid,
        })
    }

    /// Pressure in Pa at `t` (K) and `rho` (kg/m³).
    pub(crate) fn pressure_si(&self, t: f64, rho: f64) -> Result<f64, PropertyError> {
        let table = region::select(self.data, t, rho)?;

        let mut p = rho * self.data.constants.gas_constant * t;
        for basis in Basis::ALL {
            p += basis.temperature_sum(table, t) * basis.density_factor(rho, table.gamma);
        }
        Ok(p)
    }

    /// Specific internal energy in J/kg at `t` (K) and `rho` (kg/m³).
    pub(crate) fn internal_energy_si(&self, t: f64, rho: f64) -> Result<f64, PropertyError> {
        let table = region::select(self.data, t, rho)?;
        let constants = &self.data.constants;
        let reference = &self.data.reference;

        let mut u = constants.cv_ideal * (t - reference.temperature);
        for basis in Basis::ALL {
            u += basis.density_integral(rho, table.gamma)
                * (basis.temperature_sum(table, t) - t * basis.temperature_sum_dt(table, t));
        }
        u += reference.internal_energy;
        Ok(u + self.energy_offset)
    }

    /// Specific entropy in J/kg·K at `t` (K) and `rho` (kg/m³).
    pub(crate) fn entropy_si(&self, t: f64, rho: f64) -> Result<f64, PropertyError> {
        let table = region::select(self.data, t, rho)?;
        let constants = &self.data.constants;
        let reference = &self.data.reference;

        let mut s = constants.cv_ideal * (t / reference.temperature).ln();
        for basis in Basis::ALL {
            s -= basis.temperature_sum_dt(table, t) * basis.density_integral(rho, table.gamma);
        }
        s += reference.entropy - constants.gas_constant * rho.ln();
        Ok(s + self.entropy_offset)
    }
}

impl<Fluid> HasPressure for Reynolds<Fluid> {
    fn pressure(&self, state: &State<Fluid>) -> Result<Pressure, PropertyError> {
        let p = self.pressure_si(
            state.temperature.get::<kelvin>(),
            state.density.get::<kilogram_per_cubic_meter>(),
        )?;
        Ok(Pressure::new::<pascal>(p))
    }
}

impl<Fluid> HasInternalEnergy for Reynolds<Fluid> {
    fn internal_energy(
        &self,
        state: &State<Fluid>,
    ) -> Result<SpecificInternalEnergy, PropertyError> {
        let u = self.internal_energy_si(
            state.temperature.get::<kelvin>(),
            state.density.get::<kilogram_per_cubic_meter>(),
        )?;
        Ok(SpecificInternalEnergy::new::<joule_per_kilogram>(u))
    }
}

impl<Fluid> HasEnthalpy for Reynolds<Fluid> {
    /// Computes enthalpy with `h = u + P/ρ`.
    fn enthalpy(&self, state: &State<Fluid>) -> Result<SpecificEnthalpy, PropertyError> {
        Ok(self.internal_energy(state)? + self.pressure(state)? / state.density)
    }
}

impl<Fluid> HasEntropy for Reynolds<Fluid> {
    fn entropy(&self, state: &State<Fluid>) -> Result<SpecificEntropy, PropertyError> {
        let s = self.entropy_si(
            state.temperature.get::<kelvin>(),
            state.density.get::<kilogram_per_cubic_meter>(),
        )?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }
}

impl<Fluid> HasSaturationPressure for Reynolds<Fluid> {
    fn saturation_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let p = saturation::saturation_pressure_si(self.data, temperature.get::<kelvin>())?;
        Ok(Pressure::new::<pascal>(p))
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature, MassDensity)> for Reynolds<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature, density): (Fluid, ThermodynamicTemperature, MassDensity),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State {
            temperature,
            density,
            fluid,
        })
    }
}

impl<Fluid> StateFrom<(Fluid, SpecificInternalEnergy, SpecificVolume)> for Reynolds<Fluid> {
    type Error = PropertyError;

    fn state_from(
        &self,
        (fluid, energy, volume): (Fluid, SpecificInternalEnergy, SpecificVolume),
    ) -> Result<State<Fluid>, Self::Error> {
        self.state_from_energy_volume(fluid, energy, volume, &UvSolveConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::thermo::fluid::Helium4;

    fn thermo() -> Reynolds<Helium4> {
        Reynolds::<Helium4>::new().expect("helium-4 data must be valid")
    }

    fn state(t: f64, rho: f64) -> State<Helium4> {
        State {
            temperature: ThermodynamicTemperature::new::<kelvin>(t),
            density: MassDensity::new::<kilogram_per_cubic_meter>(rho),
            fluid: Helium4,
        }
    }

    #[test]
    fn cryogenic_vapor_properties() {
        let thermo = thermo();
        let state = state(4.0, 10.0);

        assert_relative_eq!(
            thermo.pressure(&state).unwrap().get::<pascal>(),
            65_878.372_127_671_45,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            thermo
                .internal_energy(&state)
                .unwrap()
                .get::<joule_per_kilogram>(),
            22_165.188_611_901_976,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            thermo
                .entropy(&state)
                .unwrap()
                .get::<joule_per_kilogram_kelvin>(),
            7_806.606_880_167_998,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            thermo.enthalpy(&state).unwrap().get::<joule_per_kilogram>(),
            28_753.025_824_669_123,
            max_relative = 1e-10
        );
    }

    #[test]
    fn high_temperature_properties() {
        let thermo = thermo();
        let state = state(300.0, 0.5);

        let p = thermo.pressure(&state).unwrap().get::<pascal>();
        assert_relative_eq!(p, 312_049.417_231_760_9, max_relative = 1e-10);

        // Dilute hot helium is nearly ideal.
        let ideal = 0.5 * 2_077.225_786_99 * 300.0;
        assert_relative_eq!(p, ideal, max_relative = 2e-3);

        assert_relative_eq!(
            thermo
                .internal_energy(&state)
                .unwrap()
                .get::<joule_per_kilogram>(),
            946_785.622_644_184_5,
            max_relative = 1e-10
        );
        assert_relative_eq!(
            thermo
                .entropy(&state)
                .unwrap()
                .get::<joule_per_kilogram_kelvin>(),
            27_598.054_691_005_924,
            max_relative = 1e-10
        );
    }

    #[test]
    fn pressure_at_the_critical_point_matches_the_critical_pressure() {
        let thermo = thermo();
        let state = state(5.2014, 69.64);

        assert_relative_eq!(
            thermo.pressure(&state).unwrap().get::<pascal>(),
            thermo.critical_pressure().get::<pascal>(),
            max_relative = 1e-4
        );
    }

    #[test]
    fn pressure_is_continuous_across_the_critical_temperature() {
        let thermo = thermo();
        let eps = 1e-9;

        // On both sides of the seam these densities resolve to the same
        // table, so the boundary-rule change must not move the result.
        for rho in [30.0, 100.0] {
            let state = state(5.2014, rho);
            let below = thermo
                .pressure(&state.with_temperature(ThermodynamicTemperature::new::<kelvin>(
                    5.2014 - eps,
                )))
                .unwrap();
            let above = thermo
                .pressure(&state.with_temperature(ThermodynamicTemperature::new::<kelvin>(
                    5.2014 + eps,
                )))
                .unwrap();
            assert_relative_eq!(
                below.get::<pascal>(),
                above.get::<pascal>(),
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn near_saturation_pressure_is_physically_reasonable() {
        // Saturated helium vapor at 4 K is near 16.9 kg/m³ and 82 kPa; the
        // low-density table should land in that neighborhood.
        let thermo = thermo();
        let p = thermo.pressure(&state(4.0, 16.9)).unwrap().get::<pascal>();

        assert_relative_eq!(p, 92_652.403_740_084, max_relative = 1e-10);
        assert!((75_000.0..110_000.0).contains(&p));
    }

    #[test]
    fn offsets_shift_energy_and_entropy() {
        let base = thermo();
        let shifted = thermo().with_offsets(
            SpecificInternalEnergy::new::<joule_per_kilogram>(100.0),
            SpecificEntropy::new::<joule_per_kilogram_kelvin>(10.0),
        );
        let state = state(4.0, 10.0);

        assert_relative_eq!(
            shifted
                .internal_energy(&state)
                .unwrap()
                .get::<joule_per_kilogram>(),
            base.internal_energy(&state)
                .unwrap()
                .get::<joule_per_kilogram>()
                + 100.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            shifted
                .entropy(&state)
                .unwrap()
                .get::<joule_per_kilogram_kelvin>(),
            base.entropy(&state)
                .unwrap()
                .get::<joule_per_kilogram_kelvin>()
                + 10.0,
            max_relative = 1e-12
        );

        // Pressure is offset-independent.
        assert_eq!(
            base.pressure(&state).unwrap(),
            shifted.pressure(&state).unwrap()
        );
    }

    #[test]
    fn accessors_report_the_fluid_constants() {
        let thermo = thermo();

        assert_relative_eq!(thermo.critical_temperature().get::<kelvin>(), 5.2014);
        assert_relative_eq!(thermo.critical_pressure().get::<pascal>(), 0.22746e6);
        assert_relative_eq!(
            thermo.critical_density().get::<kilogram_per_cubic_meter>(),
            69.64
        );
        assert_relative_eq!(
            thermo
                .critical_specific_volume()
                .get::<cubic_meter_per_kilogram>(),
            1.0 / 69.64
        );
        assert_relative_eq!(thermo.minimum_temperature().get::<kelvin>(), 2.177);
        assert_relative_eq!(thermo.maximum_temperature().get::<kelvin>(), 1501.0);
        assert_relative_eq!(
            thermo.molar_mass().get::<kilogram_per_mole>(),
            4.0026e-3,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            thermo.gas_constant().get::<joule_per_kilogram_kelvin>(),
            2_077.225_786_99
        );
    }

    #[test]
    fn out_of_domain_states_are_errors() {
        let thermo = thermo();

        assert!(matches!(
            thermo.pressure(&state(2.0, 10.0)),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            thermo.internal_energy(&state(12.0, 10.0)),
            Err(PropertyError::UnimplementedRegion { .. })
        ));
        assert!(matches!(
            thermo.entropy(&state(4.0, -1.0)),
            Err(PropertyError::InvalidState { .. })
        ));
    }

    #[test]
    fn state_from_energy_and_volume_recovers_the_state() {
        let thermo = thermo();

        let state: State<Helium4> = thermo
            .state_from((
                SpecificInternalEnergy::new::<joule_per_kilogram>(22_165.188_611_901_976),
                SpecificVolume::new::<cubic_meter_per_kilogram>(0.1),
            ))
            .unwrap();

        assert_relative_eq!(state.temperature.get::<kelvin>(), 4.0, epsilon = 1e-6);
        assert_relative_eq!(
            state.density.get::<kilogram_per_cubic_meter>(),
            10.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn non_physical_specific_volume_is_invalid() {
        let thermo = thermo();

        let result = thermo.state_from_energy_volume(
            Helium4,
            SpecificInternalEnergy::new::<joule_per_kilogram>(2.0e4),
            SpecificVolume::new::<cubic_meter_per_kilogram>(0.0),
            &UvSolveConfig::default(),
        );
        assert!(matches!(result, Err(PropertyError::InvalidState { .. })));
    }

    #[test]
    fn validation_rejects_broken_data() {
        let mut data = Helium4::data().clone();
        data.constants.gas_constant = -1.0;
        assert!(matches!(
            Reynolds::<Helium4>::validate(&data),
            Err(ReynoldsParametersError::GasConstant { .. })
        ));

        let mut data = Helium4::data().clone();
        data.constants.t_min = 6.0;
        assert!(matches!(
            Reynolds::<Helium4>::validate(&data),
            Err(ReynoldsParametersError::TemperatureRange { .. })
        ));

        let mut data = Helium4::data().clone();
        data.bounds.high_temperature_min = 9.0;
        assert!(matches!(
            Reynolds::<Helium4>::validate(&data),
            Err(ReynoldsParametersError::RegionBounds { .. })
        ));
    }
}

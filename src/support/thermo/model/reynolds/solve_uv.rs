//! Iterative temperature recovery from internal energy and density.
//!
//! Conserved-variable integrators hand back specific internal energy and
//! specific volume, not temperature. This module inverts the energy
//! correlation by bisecting on temperature within each region band, relying
//! on internal energy increasing monotonically with temperature at fixed
//! density.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::PropertyError;
use crate::support::units::SpecificInternalEnergy;

use super::Reynolds;

/// Solver configuration for the energy-to-temperature inversion.
#[derive(Debug, Clone, Copy)]
pub struct UvSolveConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance for the temperature search variable.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the internal energy residual.
    pub energy_tol: SpecificInternalEnergy,
}

impl Default for UvSolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            energy_tol: SpecificInternalEnergy::new::<joule_per_kilogram>(1e-6),
        }
    }
}

impl UvSolveConfig {
    /// Converts this configuration into a bisection solver configuration.
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.energy_tol.get::<joule_per_kilogram>(),
        }
    }
}

/// One sample of the energy correlation during iteration.
#[derive(Debug, Clone, Copy)]
struct UvSample {
    /// Temperature in K.
    temperature: f64,
    /// Specific internal energy in J/kg.
    internal_energy: f64,
}

/// Model adapter exposing temperature as the sole input variable.
struct UvModel<'a, Fluid> {
    thermo: &'a Reynolds<Fluid>,
    /// Density in kg/m³, held fixed during the solve.
    rho: f64,
}

impl<Fluid> Model for UvModel<'_, Fluid> {
    type Input = ThermodynamicTemperature;
    type Output = UvSample;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature = input.get::<kelvin>();
        let internal_energy = self.thermo.internal_energy_si(temperature, self.rho)?;
        Ok(UvSample {
            temperature,
            internal_energy,
        })
    }
}

/// Equation problem definition for energy matching.
///
/// Computes the residual as `achieved_energy - target_energy`.
struct UvProblem {
    /// Target specific internal energy in J/kg.
    target: f64,
}

impl EquationProblem<1> for UvProblem {
    type Input = ThermodynamicTemperature;
    type Output = UvSample;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.internal_energy - self.target])
    }
}

/// Finds the temperature in K at which the fluid's specific internal energy
/// equals `target` (J/kg) at fixed density `rho` (kg/m³).
///
/// The energy achievable at a given density splits into one interval per
/// region band, separated by the unimplemented gap. The target is matched
/// against each band's endpoint energies before bisecting within the band
/// that brackets it.
///
/// # Errors
///
/// - [`PropertyError::OutOfDomain`] if `target` is below the energy at the
///   minimum temperature or above the energy at the maximum temperature.
/// - [`PropertyError::UnimplementedRegion`] if `target` falls between the
///   bands' energy intervals.
/// - [`PropertyError::Calculation`] if bisection fails or does not converge.
pub(super) fn solve_temperature<Fluid>(
    thermo: &Reynolds<Fluid>,
    rho: f64,
    target: f64,
    config: &UvSolveConfig,
) -> Result<f64, PropertyError> {
    let constants = &thermo.data().constants;
    let bounds = &thermo.data().bounds;

    let bands = [
        (constants.t_min, bounds.supercritical_max),
        (bounds.high_temperature_min, constants.t_max),
    ];

    let mut below_a_gap = false;
    for (t_lo, t_hi) in bands {
        let u_lo = thermo.internal_energy_si(t_lo, rho)?;
        let u_hi = thermo.internal_energy_si(t_hi, rho)?;

        if target < u_lo {
            return Err(if below_a_gap {
                PropertyError::UnimplementedRegion {
                    context: format!(
                        "internal energy {target} J/kg at {rho} kg/m³ falls in the gap between coefficient regions"
                    ),
                }
            } else {
                PropertyError::OutOfDomain {
                    context: format!(
                        "internal energy {target} J/kg at {rho} kg/m³ is below the value at the minimum temperature ({u_lo} J/kg at {t_lo} K)"
                    ),
                }
            });
        }

        if target <= u_hi {
            return bisect(thermo, rho, target, [t_lo, t_hi], config);
        }

        below_a_gap = true;
    }

    Err(PropertyError::OutOfDomain {
        context: format!(
            "internal energy {target} J/kg at {rho} kg/m³ exceeds the value at the maximum temperature"
        ),
    })
}

fn bisect<Fluid>(
    thermo: &Reynolds<Fluid>,
    rho: f64,
    target: f64,
    bracket: [f64; 2],
    config: &UvSolveConfig,
) -> Result<f64, PropertyError> {
    let model = UvModel { thermo, rho };
    let problem = UvProblem { target };

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )
    .map_err(|e| PropertyError::Calculation {
        context: format!("temperature bisection failed: {e}"),
    })?;

    if solution.status != bisection::Status::Converged {
        return Err(PropertyError::Calculation {
            context: format!(
                "temperature bisection hit the iteration limit: residual = {} J/kg after {} iterations",
                solution.residual, solution.iters
            ),
        });
    }

    Ok(solution.snapshot.output.temperature)
}

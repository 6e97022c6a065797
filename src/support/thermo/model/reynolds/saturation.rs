//! Saturation-curve fits: vapor pressure and saturated liquid density.

use crate::support::thermo::PropertyError;
use crate::support::thermo::model::reynolds::data::ReynoldsData;

fn check_range(data: &ReynoldsData, t: f64, what: &str) -> Result<(), PropertyError> {
    let constants = &data.constants;
    if !t.is_finite() || t < constants.t_min || t > constants.t_crit {
        return Err(PropertyError::OutOfDomain {
            context: format!(
                "{what} is defined on [{}, {}] K: T = {t} K",
                constants.t_min, constants.t_crit
            ),
        });
    }
    Ok(())
}

/// Saturation (vapor) pressure in Pa: `exp(Σ cₖ·T^(1 − k))`.
///
/// Valid from `t_min` to `t_crit`.
pub(crate) fn saturation_pressure_si(data: &ReynoldsData, t: f64) -> Result<f64, PropertyError> {
    check_range(data, t, "saturation pressure")?;

    let sum: f64 = data
        .saturation
        .pressure
        .iter()
        .enumerate()
        .map(|(k, c)| c * t.powi(1 - k as i32))
        .sum();

    Ok(sum.exp())
}

/// Saturated liquid density in kg/m³: `Σ cₖ·(1 − T/T_crit)^(k/3)`.
///
/// Valid from `t_min` to `t_crit`. At the critical temperature every term
/// but the first vanishes, so the fit returns its leading coefficient.
pub(crate) fn liquid_density_si(data: &ReynoldsData, t: f64) -> Result<f64, PropertyError> {
    check_range(data, t, "saturated liquid density")?;

    let xx = 1.0 - t / data.constants.t_crit;
    let sum = data
        .saturation
        .liquid_density
        .iter()
        .enumerate()
        .map(|(k, c)| c * xx.powf(k as f64 / 3.0))
        .sum();

    Ok(sum)
}

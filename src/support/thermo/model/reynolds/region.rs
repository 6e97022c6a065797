//! Per-call selection of the coefficient region for a `(T, ρ)` pair.

use crate::support::thermo::PropertyError;
use crate::support::thermo::model::reynolds::{data::{CoefficientTable, ReynoldsData}, saturation};

/// Selects the coefficient table covering `(t, rho)`, both in SI units.
///
/// Selection is stateless: each call starts from the data alone, so a
/// perturbed state never sees a region chosen for a neighboring one.
///
/// Below the critical temperature the liquid boundary is the saturated
/// liquid density; at and above it, up to `bounds.supercritical_max`, the
/// boundary is the critical density. Densities on a boundary resolve to the
/// low-density table, so the critical point itself evaluates on the
/// low-density side.
///
/// # Errors
///
/// - [`PropertyError::InvalidState`] if `t` or `rho` is not finite or
///   `rho` is not positive.
/// - [`PropertyError::OutOfDomain`] if `t` is outside `[t_min, t_max]`.
/// - [`PropertyError::UnimplementedRegion`] for temperatures between
///   `bounds.supercritical_max` and `bounds.high_temperature_min`.
pub(crate) fn select<'a>(
    data: &'a ReynoldsData,
    t: f64,
    rho: f64,
) -> Result<&'a CoefficientTable, PropertyError> {
    if !t.is_finite() || !rho.is_finite() || rho <= 0.0 {
        return Err(PropertyError::InvalidState {
            context: format!("temperature and density must be finite and positive: T = {t} K, rho = {rho} kg/m³"),
        });
    }

    let constants = &data.constants;
    let bounds = &data.bounds;

    if t < constants.t_min || t > constants.t_max {
        return Err(PropertyError::OutOfDomain {
            context: format!(
                "temperature {t} K is outside [{}, {}] K",
                constants.t_min, constants.t_max
            ),
        });
    }

    if t < constants.t_crit {
        let boundary = saturation::liquid_density_si(data, t)?;
        if rho <= boundary {
            Ok(&data.low_density)
        } else {
            Ok(&data.dense)
        }
    } else if t <= bounds.supercritical_max {
        if rho <= constants.rho_crit {
            Ok(&data.low_density)
        } else {
            Ok(&data.dense)
        }
    } else if t < bounds.high_temperature_min {
        Err(PropertyError::UnimplementedRegion {
            context: format!(
                "no coefficient table covers temperatures in ({}, {}) K: T = {t} K",
                bounds.supercritical_max, bounds.high_temperature_min
            ),
        })
    } else {
        Ok(&data.high_temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::thermo::{fluid::Helium4, model::reynolds::ReynoldsFluid};

    fn data() -> &'static ReynoldsData {
        Helium4::data()
    }

    #[test]
    fn vapor_below_critical_uses_low_density_table() {
        let table = select(data(), 4.0, 10.0).unwrap();
        assert_eq!(table, &data().low_density);
    }

    #[test]
    fn liquid_below_critical_uses_dense_table() {
        let table = select(data(), 4.0, 130.0).unwrap();
        assert_eq!(table, &data().dense);
    }

    #[test]
    fn liquid_boundary_itself_is_low_density() {
        let boundary = saturation::liquid_density_si(data(), 4.0).unwrap();
        let table = select(data(), 4.0, boundary).unwrap();
        assert_eq!(table, &data().low_density);
    }

    #[test]
    fn supercritical_splits_on_critical_density() {
        let t_crit = data().constants.t_crit;
        let rho_crit = data().constants.rho_crit;

        assert_eq!(select(data(), 7.0, 30.0).unwrap(), &data().low_density);
        assert_eq!(select(data(), 7.0, 100.0).unwrap(), &data().dense);

        // The critical point itself resolves to the low-density table.
        assert_eq!(
            select(data(), t_crit, rho_crit).unwrap(),
            &data().low_density
        );
    }

    #[test]
    fn high_temperature_table_covers_all_densities() {
        assert_eq!(select(data(), 15.0, 0.5).unwrap(), &data().high_temperature);
        assert_eq!(
            select(data(), 1501.0, 140.0).unwrap(),
            &data().high_temperature
        );
    }

    #[test]
    fn gap_between_tables_is_unimplemented() {
        for t in [10.5, 12.0, 14.999] {
            assert!(matches!(
                select(data(), t, 10.0),
                Err(PropertyError::UnimplementedRegion { .. })
            ));
        }
    }

    #[test]
    fn out_of_range_temperatures_are_rejected() {
        assert!(matches!(
            select(data(), 2.0, 10.0),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            select(data(), 2000.0, 10.0),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn non_physical_inputs_are_invalid() {
        assert!(matches!(
            select(data(), f64::NAN, 10.0),
            Err(PropertyError::InvalidState { .. })
        ));
        assert!(matches!(
            select(data(), 4.0, 0.0),
            Err(PropertyError::InvalidState { .. })
        ));
        assert!(matches!(
            select(data(), 4.0, -1.0),
            Err(PropertyError::InvalidState { .. })
        ));
    }
}

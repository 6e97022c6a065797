//! The seven basis terms of the pressure correlation.
//!
//! Each term factors into a temperature polynomial from the region's
//! [`CoefficientTable`] and a density function. Pressure uses the density
//! function directly; internal energy and entropy use its closed-form
//! integral `∫ f(ρ)/ρ² dρ` together with the exact temperature derivative
//! of the polynomial.

use crate::support::thermo::model::reynolds::data::CoefficientTable;

/// One basis term of the equation of state, named for its density factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Basis {
    /// ρ² with `Σ cₖ·T^(2 − k/2)`.
    Rho2,
    /// ρ³ with `Σ cₖ·T^(1 − k/2)`.
    Rho3,
    /// ρ⁴ with `Σ cₖ·T^(1/2 − k)`.
    Rho4,
    /// ρ⁵ with `Σ cₖ·T^(1/2 − k/4)`.
    Rho5,
    /// ρ⁶ with `c₀ + c₁/T`.
    Rho6,
    /// ρ³·e^(−γρ²) with `c₀ + c₁/T + c₂/T²`.
    CoreCubic,
    /// ρ⁵·e^(−γρ²) with `c₀ + c₁/T + c₂/T²`.
    CoreQuintic,
}

impl Basis {
    pub(crate) const ALL: [Basis; 7] = [
        Basis::Rho2,
        Basis::Rho3,
        Basis::Rho4,
        Basis::Rho5,
        Basis::Rho6,
        Basis::CoreCubic,
        Basis::CoreQuintic,
    ];

    /// Evaluates this term's temperature polynomial at `t`.
    pub(crate) fn temperature_sum(self, table: &CoefficientTable, t: f64) -> f64 {
        match self {
            Basis::Rho2 => power_series(&table.rho2, t, 2.0, 0.5),
            Basis::Rho3 => power_series(&table.rho3, t, 1.0, 0.5),
            Basis::Rho4 => power_series(&table.rho4, t, 0.5, 1.0),
            Basis::Rho5 => power_series(&table.rho5, t, 0.5, 0.25),
            Basis::Rho6 => inverse_series(&table.rho6, t),
            Basis::CoreCubic => inverse_series(&table.core3, t),
            Basis::CoreQuintic => inverse_series(&table.core5, t),
        }
    }

    /// Evaluates the exact temperature derivative of this term's polynomial.
    pub(crate) fn temperature_sum_dt(self, table: &CoefficientTable, t: f64) -> f64 {
        match self {
            Basis::Rho2 => power_series_dt(&table.rho2, t, 2.0, 0.5),
            Basis::Rho3 => power_series_dt(&table.rho3, t, 1.0, 0.5),
            Basis::Rho4 => power_series_dt(&table.rho4, t, 0.5, 1.0),
            Basis::Rho5 => power_series_dt(&table.rho5, t, 0.5, 0.25),
            Basis::Rho6 => inverse_series_dt(&table.rho6, t),
            Basis::CoreCubic => inverse_series_dt(&table.core3, t),
            Basis::CoreQuintic => inverse_series_dt(&table.core5, t),
        }
    }

    /// Evaluates this term's density factor `f(ρ)` in the pressure sum.
    pub(crate) fn density_factor(self, rho: f64, gamma: f64) -> f64 {
        match self {
            Basis::Rho2 => rho.powi(2),
            Basis::Rho3 => rho.powi(3),
            Basis::Rho4 => rho.powi(4),
            Basis::Rho5 => rho.powi(5),
            Basis::Rho6 => rho.powi(6),
            Basis::CoreCubic => rho.powi(3) * damping(rho, gamma),
            Basis::CoreQuintic => rho.powi(5) * damping(rho, gamma),
        }
    }

    /// Evaluates `∫₀^ρ f(r)/r² dr` for this term's density factor.
    pub(crate) fn density_integral(self, rho: f64, gamma: f64) -> f64 {
        match self {
            Basis::Rho2 => rho,
            Basis::Rho3 => rho.powi(2) / 2.0,
            Basis::Rho4 => rho.powi(3) / 3.0,
            Basis::Rho5 => rho.powi(4) / 4.0,
            Basis::Rho6 => rho.powi(5) / 5.0,
            Basis::CoreCubic => (1.0 - damping(rho, gamma)) / (2.0 * gamma),
            Basis::CoreQuintic => {
                let g_rho2 = gamma * rho * rho;
                (1.0 - damping(rho, gamma) * (g_rho2 + 1.0)) / (2.0 * gamma * gamma)
            }
        }
    }
}

fn damping(rho: f64, gamma: f64) -> f64 {
    (-gamma * rho * rho).exp()
}

/// `Σ cₖ·T^(lead − step·k)`
fn power_series(coefficients: &[f64], t: f64, lead: f64, step: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(k, c)| c * t.powf(step.mul_add(-(k as f64), lead)))
        .sum()
}

/// `Σ cₖ·(lead − step·k)·T^(lead − step·k − 1)`
fn power_series_dt(coefficients: &[f64], t: f64, lead: f64, step: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(k, c)| {
            let exponent = step.mul_add(-(k as f64), lead);
            c * exponent * t.powf(exponent - 1.0)
        })
        .sum()
}

/// `Σ cₖ/Tᵏ`
fn inverse_series(coefficients: &[f64], t: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(k, c)| c / t.powi(k as i32))
        .sum()
}

/// `Σ −k·cₖ/T^(k+1)`
fn inverse_series_dt(coefficients: &[f64], t: f64) -> f64 {
    coefficients
        .iter()
        .enumerate()
        .map(|(k, c)| -(k as f64) * c / t.powi(k as i32 + 1))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::thermo::{fluid::Helium4, model::reynolds::ReynoldsFluid};

    #[test]
    fn derivative_matches_central_difference() {
        let data = Helium4::data();
        let h = 1e-4;

        for table in [&data.low_density, &data.dense, &data.high_temperature] {
            for basis in Basis::ALL {
                for t in [3.0, 4.0, 5.0, 8.0, 20.0] {
                    let numeric = (basis.temperature_sum(table, t + h)
                        - basis.temperature_sum(table, t - h))
                        / (2.0 * h);
                    let analytic = basis.temperature_sum_dt(table, t);
                    assert_relative_eq!(analytic, numeric, max_relative = 1e-5, epsilon = 1e-10);
                }
            }
        }
    }

    #[test]
    fn integral_matches_quadrature() {
        let gamma = Helium4::data().low_density.gamma;
        let rho = 50.0;
        let n = 2000;

        // Simpson's rule on ∫ f(r)/r² dr. Every integrand is a polynomial in
        // r times at most a Gaussian, so the limit at r = 0 is finite (zero
        // for all but the ρ² term, whose integrand is constant 1).
        for basis in Basis::ALL {
            let f = |r: f64| {
                if r == 0.0 {
                    match basis {
                        Basis::Rho2 => 1.0,
                        _ => 0.0,
                    }
                } else {
                    basis.density_factor(r, gamma) / (r * r)
                }
            };

            let h = rho / f64::from(n);
            let mut sum = f(0.0) + f(rho);
            for i in 1..n {
                let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
                sum += weight * f(f64::from(i) * h);
            }
            let quadrature = sum * h / 3.0;

            assert_relative_eq!(
                basis.density_integral(rho, gamma),
                quadrature,
                max_relative = 1e-6
            );
        }
    }
}

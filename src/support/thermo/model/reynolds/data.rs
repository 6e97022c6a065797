//! Static data consumed by the [`Reynolds`](super::Reynolds) model.
//!
//! All values are plain SI numbers (kelvin, pascal, kg/m³, J/kg, J/kg·K).
//! Fluids provide one [`ReynoldsData`] value, typically as a `static`, through
//! their [`ReynoldsFluid`](super::ReynoldsFluid) implementation. The model
//! wraps these raw numbers in [`uom`] quantities at its public boundary.

/// One region's fitted equation-of-state coefficients.
///
/// The pressure correlation is a sum of seven temperature polynomials, each
/// multiplied by its own power of density (ρ² through ρ⁶, plus two
/// exponentially damped terms ρ³·e^(−γρ²) and ρ⁵·e^(−γρ²)). Fields are named
/// for the density power their coefficients multiply.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    /// Coefficients for the ρ² term: `Σ cₖ·T^(2 − k/2)`.
    pub rho2: [f64; 9],
    /// Coefficients for the ρ³ term: `Σ cₖ·T^(1 − k/2)`.
    pub rho3: [f64; 8],
    /// Coefficients for the ρ⁴ term: `Σ cₖ·T^(1/2 − k)`.
    pub rho4: [f64; 4],
    /// Coefficients for the ρ⁵ term: `Σ cₖ·T^(1/2 − k/4)`.
    pub rho5: [f64; 6],
    /// Coefficients for the ρ⁶ term: `c₀ + c₁/T`.
    pub rho6: [f64; 2],
    /// Coefficients for the ρ³·e^(−γρ²) term: `c₀ + c₁/T + c₂/T²`.
    pub core3: [f64; 3],
    /// Coefficients for the ρ⁵·e^(−γρ²) term: `c₀ + c₁/T + c₂/T²`.
    pub core5: [f64; 3],
    /// Damping constant γ in the exponential density terms, m⁶/kg².
    pub gamma: f64,
}

/// Fixed physical constants for a fluid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstanceConstants {
    /// Minimum temperature for which the correlations are valid, K.
    pub t_min: f64,
    /// Maximum temperature for which the correlations are valid, K.
    pub t_max: f64,
    /// Critical temperature, K.
    pub t_crit: f64,
    /// Critical pressure, Pa.
    pub p_crit: f64,
    /// Critical density, kg/m³.
    pub rho_crit: f64,
    /// Molar mass, kg/mol.
    pub molar_mass: f64,
    /// Specific gas constant, J/kg·K.
    pub gas_constant: f64,
    /// Ideal-gas specific heat at constant volume, J/kg·K.
    pub cv_ideal: f64,
}

/// Reference state anchoring the energy and entropy integrations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceState {
    /// Reference temperature T₀, K.
    pub temperature: f64,
    /// Specific internal energy at the reference state, J/kg.
    pub internal_energy: f64,
    /// Specific entropy at the reference state, J/kg·K.
    pub entropy: f64,
}

/// Temperature boundaries between coefficient regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    /// Upper temperature of the supercritical band covered by the low-density
    /// and dense tables, K.
    pub supercritical_max: f64,
    /// Lower temperature of the high-temperature table's band, K.
    ///
    /// Temperatures between `supercritical_max` and this bound fall in a gap
    /// no table covers.
    pub high_temperature_min: f64,
}

/// Saturation-curve fits, valid from `t_min` to `t_crit`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaturationFit {
    /// Vapor-pressure coefficients: `ln P = Σ cₖ·T^(1 − k)` for k = 0..9.
    pub pressure: [f64; 10],
    /// Saturated-liquid density coefficients:
    /// `ρ = Σ cₖ·(1 − T/T_crit)^(k/3)` for k = 0..6.
    pub liquid_density: [f64; 7],
}

/// Complete data set for one fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct ReynoldsData {
    pub constants: SubstanceConstants,
    pub reference: ReferenceState,
    pub bounds: RegionBounds,
    /// Region for vapor below critical and low densities above it.
    pub low_density: CoefficientTable,
    /// Region for compressed liquid and dense supercritical fluid.
    pub dense: CoefficientTable,
    /// Region for all densities above `bounds.high_temperature_min`.
    pub high_temperature: CoefficientTable,
    pub saturation: SaturationFit,
}

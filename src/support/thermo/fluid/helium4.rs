use crate::support::thermo::model::reynolds::{
    ReynoldsFluid,
    data::{
        CoefficientTable, ReferenceState, RegionBounds, ReynoldsData, SaturationFit,
        SubstanceConstants,
    },
};

/// Canonical identifier for helium-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Helium4;

impl ReynoldsFluid for Helium4 {
    const NAME: &'static str = "helium-4";

    fn data() -> &'static ReynoldsData {
        &DATA
    }
}

/// Helium-4 tables from W.C. Reynolds, *Thermodynamic Properties in SI*.
///
/// Three coefficient tables share the same ρ² block. The low-density table
/// covers vapor and the near-critical band, the dense table covers
/// compressed liquid, and the high-temperature table covers 15 K and up.
///
/// In the published low-density table the last ρ⁵ coefficient
/// (-9.44142746383e-2) and the first ρ⁶ coefficient (-3.72006192405e-6) are
/// printed run together; they are transcribed here as separate values.
static DATA: ReynoldsData = ReynoldsData {
    constants: SubstanceConstants {
        t_min: 2.177,
        t_max: 1501.0,
        t_crit: 5.2014,
        p_crit: 0.22746e6,
        rho_crit: 69.64,
        molar_mass: 4.0026e-3,
        gas_constant: 2077.22578699,
        cv_ideal: 3115.85,
    },
    reference: ReferenceState {
        temperature: 2.177,
        internal_energy: 1.8712207e4,
        entropy: 1.0812833e4,
    },
    bounds: RegionBounds {
        supercritical_max: 10.0,
        high_temperature_min: 15.0,
    },
    low_density: CoefficientTable {
        rho2: [
            -2.63717841606e-4,
            -5.79620044301e-2,
            6.04727743809,
            3.86500111589e1,
            -2.75796664744e2,
            -4.96960774707e2,
            2.04341052964e3,
            -2.66595676810e3,
            1.07968703317e3,
        ],
        rho3: [
            2.33740311250e-1,
            -5.14034417722,
            3.08419481342e1,
            -1.67047385071e2,
            5.24045883077e2,
            -8.07915654647e2,
            6.31099960781e2,
            -2.45791511511e2,
        ],
        rho4: [
            1.47668657398e-2,
            -2.53062442742e-1,
            7.33463898526e-1,
            2.92163822280e-1,
        ],
        rho5: [
            4.07953759561e-3,
            -3.73905300971e-2,
            1.36171997779e-1,
            -2.47415495892e-1,
            2.33727221372e-1,
            -9.44142746383e-2,
        ],
        rho6: [-3.72006192405e-6, 1.59283523218e-5],
        core3: [7.75248537108, -4.13169817472e1, 5.40743659299e1],
        core5: [5.34172600153e-4, -1.05413018834e-3, -8.82580260817e-4],
        gamma: 1.56047072875e-4,
    },
    dense: CoefficientTable {
        rho2: [
            -2.63717841606e-4,
            -5.79620044301e-2,
            6.04727743809,
            3.86500111589e1,
            -2.75796664744e2,
            -4.96960774707e2,
            2.04341052964e3,
            -2.66595676810e3,
            1.07968703317e3,
        ],
        rho3: [
            3.23316248529e-2,
            2.01417823467,
            -3.20336592218e1,
            1.17952847254e2,
            -2.72064513304e2,
            8.06705554799e2,
            -6.34863771449e2,
            4.23944026969e2,
        ],
        rho4: [
            -1.26804959063e-2,
            5.58960362485e-2,
            5.81328684698e-1,
            -1.03365680210,
        ],
        rho5: [
            -1.01057001312e-3,
            8.40859671873e-3,
            -2.48181422872e-2,
            3.24270326025e-2,
            -1.04566294786e-2,
            -1.05412341221e-2,
        ],
        rho6: [-1.04201749588e-6, 1.09726080203e-5],
        core3: [1.24933778088e1, -1.41252424541e2, -2.38228039845e2],
        core5: [2.65139980533e-4, 3.33310756017e-3, -2.41601688592e-3],
        gamma: 3.12094145751e-5,
    },
    high_temperature: CoefficientTable {
        rho2: [
            -2.63717841606e-4,
            -5.79620044301e-2,
            6.04727743809,
            3.86500111589e1,
            -2.75796664744e2,
            -4.96960774707e2,
            2.04341052964e3,
            -2.66595676810e3,
            1.07968703317e3,
        ],
        rho3: [
            -5.69281410539e-2,
            2.54082433493,
            -4.33612764494e1,
            2.32901880818e2,
            -6.88289870860e2,
            2.12493828516e3,
            -2.69258356337e3,
            1.42625846393e3,
        ],
        rho4: [
            7.76178949940e-4,
            6.75967782095e-2,
            9.09992115812e-2,
            -3.81211874106e-1,
        ],
        rho5: [
            -2.30068006523e-5,
            4.02950826349e-5,
            1.07511466109e-3,
            -4.93747339170e-3,
            1.11576934297e-2,
            -1.23679512941e-2,
        ],
        rho6: [-3.64745210287e-7, 1.02807881652e-5],
        core3: [8.98703364016, -2.28140026278e2, 5.33588707469],
        core5: [1.06067862115e-4, -4.46441499497e-3, 3.80683087199e-3],
        gamma: 3.12094145751e-5,
    },
    saturation: SaturationFit {
        pressure: [
            -3.9394635287,
            1.3925998798e2,
            -1.6407741565e3,
            1.1974557102e4,
            -5.5283309818e4,
            1.16621956504e5,
            -3.2521282840e5,
            3.9884322750e5,
            -2.771806992e5,
            8.3395204183e4,
        ],
        liquid_density: [
            6.6940000000e1,
            1.2874326484e2,
            -4.3128217346e2,
            1.7851911824e3,
            -3.3509624489e3,
            3.0344215824e3,
            -1.0981289602e3,
        ],
    },
};

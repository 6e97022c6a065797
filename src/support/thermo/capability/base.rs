/// Base trait for thermodynamic property models.
///
/// A model declares the fluid type its states carry; every capability trait
/// ([`HasPressure`](super::HasPressure), [`StateFrom`](super::StateFrom), ...)
/// builds on this association.
pub trait ThermoModel {
    /// The fluid type carried by this model's states.
    type Fluid;
}

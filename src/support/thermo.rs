//! Thermodynamic and fluid property modeling.

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;

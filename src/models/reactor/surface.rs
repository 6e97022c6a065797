//! Surface-coverage collaborator for the reactor state vector.
//!
//! The reactor's state vector may end with surface-species coverages. The
//! [`SurfaceState`] trait lets a surface model own those trailing entries
//! without the reactor knowing anything about surface chemistry;
//! [`NoSurface`] is the default for reactors with no surface species.

use super::ReactorError;

/// Owner of the coverage entries at the tail of the reactor state vector.
pub trait SurfaceState {
    /// Number of coverage entries this surface contributes.
    fn n_coverages(&self) -> usize;

    /// Accepts the coverage slice from a new state vector.
    ///
    /// # Errors
    ///
    /// Returns [`ReactorError::Coverage`] if the slice cannot be applied.
    fn update_coverages(&mut self, theta: &[f64]) -> Result<(), ReactorError>;

    /// Current coverages, in state-vector order.
    fn coverages(&self) -> &[f64];

    /// Name of the `k`-th coverage component, if it exists.
    fn coverage_name(&self, k: usize) -> Option<&str>;

    /// Index of the coverage component with the given name, if it exists.
    fn coverage_index(&self, name: &str) -> Option<usize>;
}

/// A surface with no species: contributes nothing to the state vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSurface;

impl SurfaceState for NoSurface {
    fn n_coverages(&self) -> usize {
        0
    }

    fn update_coverages(&mut self, theta: &[f64]) -> Result<(), ReactorError> {
        if theta.is_empty() {
            Ok(())
        } else {
            Err(ReactorError::Coverage {
                context: format!("no surface species, but {} coverages provided", theta.len()),
            })
        }
    }

    fn coverages(&self) -> &[f64] {
        &[]
    }

    fn coverage_name(&self, _k: usize) -> Option<&str> {
        None
    }

    fn coverage_index(&self, _name: &str) -> Option<usize> {
        None
    }
}

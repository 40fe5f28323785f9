use thiserror::Error;

use crate::objective::Axis;

#[derive(Error, Debug)]
pub enum PsoError {
    #[error("Invalid {axis} domain [{min}, {max}]: bounds must be ordered with a finite range")]
    InvalidDomain { axis: Axis, min: f64, max: f64 },

    #[error("Observer failed at iteration {iteration}: {source}")]
    Observer {
        iteration: usize,
        #[source]
        source: anyhow::Error,
    },
}

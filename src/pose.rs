//! The pose capability: something that can produce the sensor's pose in
//! the fixed frame, or fail in a way the pipeline can match on.

use thiserror::Error;

use crate::types::SensorPose;

/// Why a fixed-frame pose could not be produced this cycle.
#[derive(Debug, Error)]
pub enum PoseLookupError {
    #[error("transform lookup failed: {0}")]
    Lookup(String),
    #[error("transform connectivity failed: {0}")]
    Connectivity(String),
    #[error("transform extrapolation failed: {0}")]
    Extrapolation(String),
}

/// Source of fixed-frame sensor poses.
///
/// Implemented by whatever transform service the embedding provides. A
/// failed lookup skips the grid update for that cycle only; it never
/// affects the controller path.
pub trait PoseSource {
    fn lookup(&self, fixed_frame: &str, sensor_frame: &str)
        -> Result<SensorPose, PoseLookupError>;
}

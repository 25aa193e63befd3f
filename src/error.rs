use thiserror::Error;

use crate::{
    cfg::Error as ConfigError,
    prelude::{Epoch, Field, MeasurementType},
};

#[derive(Debug, PartialEq, Error)]
pub enum Error {
    /// A [MeasurementType] required by the reduction is absent from the Reading.
    #[error("missing {0} measurement")]
    MissingMeasurement(MeasurementType),

    /// The same [MeasurementType] appears more than once in the Reading:
    /// we cannot tell which one to reduce.
    #[error("ambiguous reading: more than one {0} measurement")]
    AmbiguousMeasurement(MeasurementType),

    /// Angle, or DMS component, out of its domain.
    #[error("invalid angle: {0}")]
    InvalidAngle(f64),

    /// The [MeasurementType] exists but lacks a time stamp or
    /// the variometer channel this reduction needs.
    #[error("{0} measurement has no {1} value")]
    MissingChannel(MeasurementType, Field),

    /// Set numbers are positive integers.
    #[error("invalid set number: {0}")]
    InvalidSetNumber(u32),

    /// Set numbers are unique within one Observation.
    #[error("duplicate set number: {0}")]
    DuplicateSetNumber(u32),

    /// Observation begins after its earliest timed measurement.
    #[error("observation begins after first measurement ({0})")]
    InvalidBegin(Epoch),

    /// Absolute horizontal intensity is not strictly positive:
    /// the scale value cannot be derived.
    #[error("degenerate horizontal intensity: {0} nT")]
    DegenerateHorizontalIntensity(f64),

    /// Invalid site constants
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

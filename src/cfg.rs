use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration Error
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("pier correction is not a finite number")]
    PierCorrection,
    #[error("true azimuth of mark is not a finite number")]
    TrueAzimuthOfMark,
    #[error("scale value must be finite and strictly positive")]
    ScaleValue,
}

#[cfg(feature = "serde")]
fn default_pier_correction() -> f64 {
    0.0
}

fn default_scale_value() -> Option<f64> {
    None
}

/// Site constants of one observatory / instrument pairing.
/// They are surveyed once and do not change between sets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Total field difference between the absolute pier and the
    /// variometer sensor location (nT). It is added to the mean
    /// scalar reading before the intensity reduction.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_pier_correction", alias = "pierCorrection")
    )]
    pub pier_correction: f64,

    /// Surveyed true bearing from the absolute pier to the
    /// azimuth mark, in decimal degrees.
    #[cfg_attr(feature = "serde", serde(alias = "trueAzimuthOfMark"))]
    pub true_azimuth_of_mark: f64,

    /// Declination channel scale value, in arc-minutes per nT.
    /// When undefined, it is derived from the absolute horizontal
    /// intensity of each reading.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_scale_value", alias = "scaleValue")
    )]
    pub scale_value: Option<f64>,
}

impl Config {
    /// Builds a new [Config] from the two surveyed site constants.
    pub fn new(pier_correction: f64, true_azimuth_of_mark: f64) -> Self {
        Self {
            pier_correction,
            true_azimuth_of_mark,
            scale_value: default_scale_value(),
        }
    }

    /// Copies and returns [Config] with a fixed scale value (arc-minutes per nT).
    pub fn with_scale_value(&self, scale_value: f64) -> Self {
        let mut s = *self;
        s.scale_value = Some(scale_value);
        s
    }

    /// Verifies all constants are usable.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if !self.pier_correction.is_finite() {
            return Err(Error::PierCorrection);
        }
        if !self.true_azimuth_of_mark.is_finite() {
            return Err(Error::TrueAzimuthOfMark);
        }
        if let Some(scale_value) = self.scale_value {
            if !scale_value.is_finite() || scale_value <= 0.0 {
                return Err(Error::ScaleValue);
            }
        }
        Ok(())
    }
}

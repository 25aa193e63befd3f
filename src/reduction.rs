//! Reduced set
use crate::{constants::ARCMIN_PER_DEGREE, prelude::Epoch};

#[cfg(feature = "serde")]
use serde::Serialize;

/// [Reduction] gathers every value reduced from one set.
/// Angles are expressed in decimal degrees, intensities in nT.
/// Tracking these over time (baseline curves, outlier rejection)
/// is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Reduction {
    /// Set number
    pub set_number: u32,
    /// Mean [Epoch] of the declination circle readings
    pub declination_epoch: Epoch,
    /// Mean [Epoch] of the inclination readings
    pub inclination_epoch: Epoch,
    /// Absolute declination
    pub declination: f64,
    /// Ordinate: declination recorded by the variometer
    pub d_computed: f64,
    /// Declination baseline
    pub d_baseline: f64,
    /// Declination channel scale value (arc-minutes per nT)
    pub scale_value: f64,
    /// Inclination
    pub inclination: f64,
    /// Total field at the absolute pier
    pub f_corrected: f64,
    /// Absolute horizontal intensity
    pub h_absolute: f64,
    /// Variometer H channel
    pub h_computed: f64,
    /// H baseline
    pub h_baseline: f64,
    /// Absolute vertical intensity
    pub z_absolute: f64,
    /// Variometer Z channel
    pub z_computed: f64,
    /// Z baseline
    pub z_baseline: f64,
}

impl Reduction {
    /// Absolute declination in arc-minutes
    pub fn declination_arcmin(&self) -> f64 {
        self.declination * ARCMIN_PER_DEGREE
    }

    /// Declination baseline in arc-minutes
    pub fn d_baseline_arcmin(&self) -> f64 {
        self.d_baseline * ARCMIN_PER_DEGREE
    }
}

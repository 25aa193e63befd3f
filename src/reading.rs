//! One measurement set
use itertools::Itertools;
use log::trace;

use crate::{
    error::Error,
    prelude::{Epoch, Measurement, MeasurementType, Role},
    selection::{select_by_role, time_span},
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A [Reading] gathers the [Measurement]s of one set:
/// the declination sequence (marks and four circle positions)
/// and the inclination sequence (four meridian positions).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Reading {
    /// Set number, positive and unique within one Observation
    set_number: u32,
    /// [Measurement]s in acquisition order
    measurements: Vec<Measurement>,
}

impl Reading {
    /// Builds a new [Reading]. Structural completeness is not verified here,
    /// but by each reduction that needs it.
    pub fn new(set_number: u32, measurements: Vec<Measurement>) -> Result<Self, Error> {
        if set_number == 0 {
            return Err(Error::InvalidSetNumber(set_number));
        }
        Ok(Self {
            set_number,
            measurements,
        })
    }

    /// Set number
    pub fn set_number(&self) -> u32 {
        self.set_number
    }

    /// All [Measurement]s, in acquisition order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Returns the single [Measurement] of this [MeasurementType].
    pub fn measurement(&self, kind: MeasurementType) -> Result<&Measurement, Error> {
        let mut matches = self.measurements.iter().filter(|m| m.kind == kind);
        let found = matches.next().ok_or(Error::MissingMeasurement(kind))?;
        if matches.next().is_some() {
            return Err(Error::AmbiguousMeasurement(kind));
        }
        trace!("set #{} - {}: {:.6}°", self.set_number, kind, found.angle);
        Ok(found)
    }

    /// Returns the [Measurement]s of these [MeasurementType]s,
    /// in the requested order.
    pub(crate) fn measurements_of<const N: usize>(
        &self,
        kinds: [MeasurementType; N],
    ) -> Result<[&Measurement; N], Error> {
        let mut found = Vec::with_capacity(N);
        for kind in kinds {
            found.push(self.measurement(kind)?);
        }
        found
            .try_into()
            .map_err(|_| Error::MissingMeasurement(kinds[0]))
    }

    /// Declination [Measurement]s, in acquisition order
    pub fn declinations(&self) -> Vec<&Measurement> {
        select_by_role(&self.measurements, Role::Declination).collect()
    }

    /// Inclination [Measurement]s, in acquisition order
    pub fn inclinations(&self) -> Vec<&Measurement> {
        select_by_role(&self.measurements, Role::Inclination).collect()
    }

    /// [MeasurementType]s that appear more than once
    pub fn duplicates(&self) -> Vec<MeasurementType> {
        self.measurements
            .iter()
            .map(|m| m.kind)
            .duplicates()
            .collect()
    }

    /// Earliest timed [Measurement], if any
    pub fn first_epoch(&self) -> Option<Epoch> {
        time_span(&self.measurements).map(|(start, _)| start)
    }

    /// Latest timed [Measurement], if any
    pub fn last_epoch(&self) -> Option<Epoch> {
        time_span(&self.measurements).map(|(_, end)| end)
    }
}

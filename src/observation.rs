//! Observation session
use itertools::Itertools;

use crate::{
    error::Error,
    prelude::{Epoch, Reading},
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// An [Observation] is one session at the absolute pier:
/// consecutive [Reading]s (sets), sorted by set number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Observation {
    /// Session start
    begin: Epoch,
    /// Sets, sorted by set number
    readings: Vec<Reading>,
}

impl Observation {
    /// Builds a new [Observation]. [Reading]s are sorted by set number.
    /// ## Input
    /// - begin: session start. Cannot be later than the first timed measurement.
    /// - readings: sets, with unique set numbers
    pub fn new(begin: Epoch, readings: Vec<Reading>) -> Result<Self, Error> {
        if let Some(set_number) = readings.iter().map(|r| r.set_number()).duplicates().next() {
            return Err(Error::DuplicateSetNumber(set_number));
        }

        if let Some(first) = readings.iter().filter_map(|r| r.first_epoch()).min() {
            if begin > first {
                return Err(Error::InvalidBegin(first));
            }
        }

        let readings = readings
            .into_iter()
            .sorted_by_key(|r| r.set_number())
            .collect();

        Ok(Self { begin, readings })
    }

    /// Session start
    pub fn begin(&self) -> Epoch {
        self.begin
    }

    /// Latest timed measurement of this session
    pub fn end(&self) -> Option<Epoch> {
        self.readings.iter().filter_map(|r| r.last_epoch()).max()
    }

    /// [Reading]s, sorted by set number
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// Returns [Reading] for this set number
    pub fn reading(&self, set_number: u32) -> Option<&Reading> {
        self.readings
            .binary_search_by_key(&set_number, |r| r.set_number())
            .ok()
            .map(|index| &self.readings[index])
    }
}

//! Role partitioning and field projection over [Measurement]s
use itertools::{Itertools, MinMaxResult};

use crate::prelude::{Epoch, Measurement};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role a [Measurement] plays within a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// Mark and east/west circle readings
    Declination,
    /// North/south readings in the magnetic meridian plane
    Inclination,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Declination => write!(f, "declination"),
            Self::Inclination => write!(f, "inclination"),
        }
    }
}

/// Named [Measurement] attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Field {
    /// Sampling [Epoch]
    Time,
    /// Theodolite circle reading (decimal degrees)
    Angle,
    /// Variometer declination channel (nT)
    E,
    /// Variometer horizontal intensity channel (nT)
    H,
    /// Variometer vertical intensity channel (nT)
    Z,
    /// Scalar magnetometer total field (nT)
    F,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Angle => write!(f, "angle"),
            Self::E => write!(f, "e"),
            Self::H => write!(f, "h"),
            Self::Z => write!(f, "z"),
            Self::F => write!(f, "f"),
        }
    }
}

/// Projected [Field] value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// [Field::Time]
    Time(Epoch),
    /// Angle (degrees) or channel value (nT)
    Scalar(f64),
}

impl FieldValue {
    /// Returns [Epoch], if this is a [Field::Time] value
    pub fn as_time(&self) -> Option<Epoch> {
        match self {
            Self::Time(t) => Some(*t),
            Self::Scalar(_) => None,
        }
    }

    /// Returns scalar, if this is not a [Field::Time] value
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Time(_) => None,
        }
    }
}

impl Measurement {
    /// Returns this [Field], if defined
    pub fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Time => self.time.map(FieldValue::Time),
            Field::Angle => Some(FieldValue::Scalar(self.angle)),
            Field::E => self.e.map(FieldValue::Scalar),
            Field::H => self.h.map(FieldValue::Scalar),
            Field::Z => self.z.map(FieldValue::Scalar),
            Field::F => self.f.map(FieldValue::Scalar),
        }
    }
}

/// Iterates the [Measurement]s that play this [Role],
/// preserving their relative order. Short input is not an error:
/// completeness is verified by the reduction itself.
pub fn select_by_role<'a, I>(measurements: I, role: Role) -> impl Iterator<Item = &'a Measurement>
where
    I: IntoIterator<Item = &'a Measurement>,
{
    measurements.into_iter().filter(move |m| m.role() == role)
}

/// Projects each [Measurement] onto one [Field].
/// The output is aligned with the input: a [Measurement] lacking this
/// [Field] produces `None` at its position. For example mark sightings
/// are not timed, so projecting [Field::Time] over a declination set
/// yields four gaps, that the caller has to skip or reject.
pub fn project<'a, I>(measurements: I, field: Field) -> Vec<Option<FieldValue>>
where
    I: IntoIterator<Item = &'a Measurement>,
{
    measurements.into_iter().map(|m| m.field(field)).collect()
}

/// [project] onto [Field::Time]
pub fn project_times<'a, I>(measurements: I) -> Vec<Option<Epoch>>
where
    I: IntoIterator<Item = &'a Measurement>,
{
    measurements.into_iter().map(|m| m.time).collect()
}

/// [project] onto a scalar [Field]. [Field::Time] projects to gaps only.
pub fn project_scalars<'a, I>(measurements: I, field: Field) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a Measurement>,
{
    measurements
        .into_iter()
        .map(|m| m.field(field).and_then(|value| value.as_scalar()))
        .collect()
}

/// Returns earliest and latest [Epoch] among timed [Measurement]s.
/// Untimed entries are skipped.
pub fn time_span<'a, I>(measurements: I) -> Option<(Epoch, Epoch)>
where
    I: IntoIterator<Item = &'a Measurement>,
{
    match measurements.into_iter().filter_map(|m| m.time).minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(t) => Some((t, t)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

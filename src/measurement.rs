//! Theodolite readings
use crate::{
    constants::FULL_CIRCLE_DEG,
    error::Error,
    prelude::{Epoch, Role},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position (or target) of one theodolite reading within a set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MeasurementType {
    /// Azimuth mark, telescope up, before the circle readings
    FirstMarkUp,
    /// Azimuth mark, telescope down, before the circle readings
    FirstMarkDown,
    /// Sensor west, telescope down
    WestDown,
    /// Sensor east, telescope down
    EastDown,
    /// Sensor west, telescope up
    WestUp,
    /// Sensor east, telescope up
    EastUp,
    /// Azimuth mark, telescope up, after the circle readings
    SecondMarkUp,
    /// Azimuth mark, telescope down, after the circle readings
    SecondMarkDown,
    /// Sensor south, telescope down (magnetic meridian plane)
    SouthDown,
    /// Sensor north, telescope up (magnetic meridian plane)
    NorthUp,
    /// Sensor south, telescope up (magnetic meridian plane)
    SouthUp,
    /// Sensor north, telescope down (magnetic meridian plane)
    NorthDown,
}

/// The eight readings of a declination set, in acquisition order.
pub const DECLINATION_TYPES: [MeasurementType; 8] = [
    MeasurementType::FirstMarkUp,
    MeasurementType::FirstMarkDown,
    MeasurementType::WestDown,
    MeasurementType::EastDown,
    MeasurementType::WestUp,
    MeasurementType::EastUp,
    MeasurementType::SecondMarkUp,
    MeasurementType::SecondMarkDown,
];

/// The four mark readings of a declination set.
pub const MARK_TYPES: [MeasurementType; 4] = [
    MeasurementType::FirstMarkUp,
    MeasurementType::FirstMarkDown,
    MeasurementType::SecondMarkUp,
    MeasurementType::SecondMarkDown,
];

/// The four (timed) circle readings of a declination set.
pub const DECLINATION_CIRCLE_TYPES: [MeasurementType; 4] = [
    MeasurementType::WestDown,
    MeasurementType::EastDown,
    MeasurementType::WestUp,
    MeasurementType::EastUp,
];

/// The four readings of an inclination set, in acquisition order.
pub const INCLINATION_TYPES: [MeasurementType; 4] = [
    MeasurementType::SouthDown,
    MeasurementType::NorthUp,
    MeasurementType::SouthUp,
    MeasurementType::NorthDown,
];

impl MeasurementType {
    /// Returns the [Role] this reading plays in a set
    pub fn role(&self) -> Role {
        match self {
            Self::FirstMarkUp
            | Self::FirstMarkDown
            | Self::WestDown
            | Self::EastDown
            | Self::WestUp
            | Self::EastUp
            | Self::SecondMarkUp
            | Self::SecondMarkDown => Role::Declination,
            Self::SouthDown | Self::NorthUp | Self::SouthUp | Self::NorthDown => {
                Role::Inclination
            },
        }
    }

    /// True for azimuth mark sightings. Those carry no time stamp.
    pub fn is_mark(&self) -> bool {
        matches!(
            self,
            Self::FirstMarkUp | Self::FirstMarkDown | Self::SecondMarkUp | Self::SecondMarkDown
        )
    }

    /// True when the telescope is in the "up" position
    pub fn is_up(&self) -> bool {
        matches!(
            self,
            Self::FirstMarkUp
                | Self::WestUp
                | Self::EastUp
                | Self::SecondMarkUp
                | Self::NorthUp
                | Self::SouthUp
        )
    }
}

impl std::fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FirstMarkUp => write!(f, "first_mark_up"),
            Self::FirstMarkDown => write!(f, "first_mark_down"),
            Self::WestDown => write!(f, "west_down"),
            Self::EastDown => write!(f, "east_down"),
            Self::WestUp => write!(f, "west_up"),
            Self::EastUp => write!(f, "east_up"),
            Self::SecondMarkUp => write!(f, "second_mark_up"),
            Self::SecondMarkDown => write!(f, "second_mark_down"),
            Self::SouthDown => write!(f, "south_down"),
            Self::NorthUp => write!(f, "north_up"),
            Self::SouthUp => write!(f, "south_up"),
            Self::NorthDown => write!(f, "north_down"),
        }
    }
}

/// Unknown [MeasurementType] label
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown measurement type \"{0}\"")]
pub struct ParsingError(pub String);

impl std::str::FromStr for MeasurementType {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase().replace(['-', ' '], "_");
        match label.as_str() {
            "first_mark_up" => Ok(Self::FirstMarkUp),
            "first_mark_down" => Ok(Self::FirstMarkDown),
            "west_down" => Ok(Self::WestDown),
            "east_down" => Ok(Self::EastDown),
            "west_up" => Ok(Self::WestUp),
            "east_up" => Ok(Self::EastUp),
            "second_mark_up" => Ok(Self::SecondMarkUp),
            "second_mark_down" => Ok(Self::SecondMarkDown),
            "south_down" => Ok(Self::SouthDown),
            "north_up" => Ok(Self::NorthUp),
            "south_up" => Ok(Self::SouthUp),
            "north_down" => Ok(Self::NorthDown),
            _ => Err(ParsingError(s.to_string())),
        }
    }
}

/// One theodolite reading, with the variometer values
/// sampled at the same instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMeasurement"))]
pub struct Measurement {
    /// [MeasurementType]
    pub kind: MeasurementType,
    /// Circle reading, decimal degrees in [0, 360[
    pub angle: f64,
    /// Sampling [Epoch]. Mark sightings are not timed.
    pub time: Option<Epoch>,
    /// Variometer E (declination) channel, nT.
    pub e: Option<f64>,
    /// Variometer H channel, nT.
    pub h: Option<f64>,
    /// Variometer Z channel, nT.
    pub z: Option<f64>,
    /// Scalar magnetometer F, nT.
    pub f: Option<f64>,
}

impl Measurement {
    /// Builds a new untimed [Measurement] with no variometer values.
    /// ## Input
    /// - kind: [MeasurementType]
    /// - angle: circle reading in decimal degrees, within [0, 360[
    pub fn new(kind: MeasurementType, angle: f64) -> Result<Self, Error> {
        if !angle.is_finite() || !(0.0..FULL_CIRCLE_DEG).contains(&angle) {
            return Err(Error::InvalidAngle(angle));
        }
        Ok(Self {
            kind,
            angle,
            time: None,
            e: None,
            h: None,
            z: None,
            f: None,
        })
    }

    /// Copies and returns [Measurement] sampled at this [Epoch]
    pub fn with_time(&self, time: Epoch) -> Self {
        let mut s = *self;
        s.time = Some(time);
        s
    }

    /// Copies and returns [Measurement] with E channel value (nT)
    pub fn with_e(&self, e: f64) -> Self {
        let mut s = *self;
        s.e = Some(e);
        s
    }

    /// Copies and returns [Measurement] with H channel value (nT)
    pub fn with_h(&self, h: f64) -> Self {
        let mut s = *self;
        s.h = Some(h);
        s
    }

    /// Copies and returns [Measurement] with Z channel value (nT)
    pub fn with_z(&self, z: f64) -> Self {
        let mut s = *self;
        s.z = Some(z);
        s
    }

    /// Copies and returns [Measurement] with scalar F value (nT)
    pub fn with_f(&self, f: f64) -> Self {
        let mut s = *self;
        s.f = Some(f);
        s
    }

    /// [Role] of this [Measurement]
    pub fn role(&self) -> Role {
        self.kind.role()
    }
}

/// Unvalidated [Measurement], as found in serialized input
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMeasurement {
    kind: MeasurementType,
    angle: f64,
    time: Option<Epoch>,
    e: Option<f64>,
    h: Option<f64>,
    z: Option<f64>,
    f: Option<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMeasurement> for Measurement {
    type Error = Error;
    fn try_from(raw: RawMeasurement) -> Result<Self, Self::Error> {
        let mut measurement = Self::new(raw.kind, raw.angle)?;
        measurement.time = raw.time;
        measurement.e = raw.e;
        measurement.h = raw.h;
        measurement.z = raw.z;
        measurement.f = raw.f;
        Ok(measurement)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_partition() {
        for kind in DECLINATION_TYPES {
            assert_eq!(kind.role(), Role::Declination);
        }
        for kind in INCLINATION_TYPES {
            assert_eq!(kind.role(), Role::Inclination);
            assert!(!kind.is_mark());
        }
        for kind in MARK_TYPES {
            assert!(kind.is_mark());
            assert!(DECLINATION_TYPES.contains(&kind));
        }
        for kind in DECLINATION_CIRCLE_TYPES {
            assert!(!kind.is_mark());
            assert!(DECLINATION_TYPES.contains(&kind));
        }
    }

    #[test]
    fn type_labels() {
        for kind in DECLINATION_TYPES.iter().chain(INCLINATION_TYPES.iter()) {
            let label = kind.to_string();
            assert_eq!(MeasurementType::from_str(&label), Ok(*kind));
        }
        assert_eq!(
            MeasurementType::from_str(" West-Up"),
            Ok(MeasurementType::WestUp)
        );
        assert!(MeasurementType::from_str("zenith").is_err());
    }

    #[test]
    fn angle_domain() {
        assert!(Measurement::new(MeasurementType::WestUp, 0.0).is_ok());
        assert!(Measurement::new(MeasurementType::WestUp, 359.999).is_ok());
        assert_eq!(
            Measurement::new(MeasurementType::WestUp, 360.0),
            Err(Error::InvalidAngle(360.0))
        );
        assert_eq!(
            Measurement::new(MeasurementType::WestUp, -0.5),
            Err(Error::InvalidAngle(-0.5))
        );
        assert!(Measurement::new(MeasurementType::WestUp, f64::NAN).is_err());
    }

    #[test]
    fn builders_copy() {
        let t = Epoch::from_gregorian_utc_hms(2016, 4, 15, 14, 28, 21);
        let raw = Measurement::new(MeasurementType::WestDown, 291.2).unwrap();
        let full = raw.with_time(t).with_e(-61.85);

        assert!(raw.time.is_none());
        assert!(raw.e.is_none());
        assert_eq!(full.time, Some(t));
        assert_eq!(full.e, Some(-61.85));
        assert_eq!(full.angle, raw.angle);
        assert_eq!(full.role(), Role::Declination);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn deserialized_angle_domain() {
        let out_of_domain = serde_json::from_str::<Measurement>(
            r#"{"kind": "west_up", "angle": 725.0, "time": null, "e": -62.38}"#,
        );
        assert!(out_of_domain.is_err());

        let negative =
            serde_json::from_str::<Measurement>(r#"{"kind": "south_down", "angle": -1.0}"#);
        assert!(negative.is_err());

        let t = Epoch::from_gregorian_utc_hms(2016, 4, 15, 14, 30, 41);
        let measurement = Measurement::new(MeasurementType::WestUp, 111.39)
            .unwrap()
            .with_time(t)
            .with_e(-62.38);

        let json = serde_json::to_string(&measurement).unwrap();
        let parsed = serde_json::from_str::<Measurement>(&json).unwrap();
        assert_eq!(parsed, measurement);

        let mark = serde_json::from_str::<Measurement>(r#"{"kind": "first_mark_up", "angle": 18.8}"#)
            .unwrap();
        assert_eq!(mark, Measurement::new(MeasurementType::FirstMarkUp, 18.8).unwrap());
    }
}

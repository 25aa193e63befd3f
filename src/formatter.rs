//! Degree / minute / second conversions
use crate::{
    constants::{ARCMIN_PER_DEGREE, ARCSEC_PER_DEGREE},
    error::Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn arc_component(value: f64) -> Result<f64, Error> {
    if value.is_finite() && (0.0..ARCMIN_PER_DEGREE).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidAngle(value))
    }
}

/// Converts a theodolite DMS reading into decimal degrees.
/// The sign is carried by `degrees`: use [Dms] to express
/// negative angles above -1°.
/// ## Input
/// - degrees: whole degrees (sign of the angle)
/// - minutes: arc-minutes within [0, 60[
/// - seconds: arc-seconds within [0, 60[
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> Result<f64, Error> {
    Dms {
        negative: degrees.is_sign_negative() && degrees != 0.0,
        degrees: degrees.abs(),
        minutes,
        seconds,
    }
    .to_decimal()
}

/// Signed degree, minute, second angle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    /// True for angles below zero, whatever `degrees`
    pub negative: bool,
    /// Whole degrees (magnitude)
    pub degrees: f64,
    /// Arc-minutes
    pub minutes: f64,
    /// Arc-seconds
    pub seconds: f64,
}

impl Dms {
    /// Builds a positive [Dms]
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            negative: false,
            degrees,
            minutes,
            seconds,
        }
    }

    /// Copies and returns [Dms] with negative sign
    pub fn negated(&self) -> Self {
        let mut s = *self;
        s.negative = !s.negative;
        s
    }

    /// Converts to decimal degrees
    pub fn to_decimal(&self) -> Result<f64, Error> {
        if !self.degrees.is_finite() {
            return Err(Error::InvalidAngle(self.degrees));
        }
        let minutes = arc_component(self.minutes)?;
        let seconds = arc_component(self.seconds)?;

        let magnitude =
            self.degrees.abs() + minutes / ARCMIN_PER_DEGREE + seconds / ARCSEC_PER_DEGREE;

        if self.negative {
            Ok(-magnitude)
        } else {
            Ok(magnitude)
        }
    }

    /// Splits decimal degrees into [Dms] components
    pub fn from_decimal(angle: f64) -> Result<Self, Error> {
        if !angle.is_finite() {
            return Err(Error::InvalidAngle(angle));
        }

        let total_seconds = angle.abs() * ARCSEC_PER_DEGREE;
        let degrees = (total_seconds / ARCSEC_PER_DEGREE).floor();
        let remainder = total_seconds - degrees * ARCSEC_PER_DEGREE;
        let minutes = (remainder / ARCMIN_PER_DEGREE).floor();
        let seconds = remainder - minutes * ARCMIN_PER_DEGREE;

        Ok(Self {
            negative: angle < 0.0,
            degrees,
            minutes,
            seconds,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{dms_to_decimal, Dms};
    use crate::error::Error;

    #[test]
    fn theodolite_readings() {
        assert_eq!(dms_to_decimal(18.0, 48.0, 0.0), Ok(18.8));
        assert_eq!(dms_to_decimal(198.0, 48.0, 36.0), Ok(198.81));

        let value = dms_to_decimal(291.0, 13.0, 36.0).unwrap();
        assert!((value - 291.226_666_666).abs() < 1.0E-8);
    }

    #[test]
    fn sign_from_degrees() {
        assert_eq!(dms_to_decimal(-18.0, 48.0, 0.0), Ok(-18.8));
        // zero degrees cannot carry a sign
        assert_eq!(dms_to_decimal(0.0, 30.0, 0.0), Ok(0.5));
        assert_eq!(Dms::new(0.0, 30.0, 0.0).negated().to_decimal(), Ok(-0.5));
    }

    #[test]
    fn components_out_of_range() {
        assert_eq!(
            dms_to_decimal(10.0, 60.0, 0.0),
            Err(Error::InvalidAngle(60.0))
        );
        assert_eq!(
            dms_to_decimal(10.0, 0.0, -1.0),
            Err(Error::InvalidAngle(-1.0))
        );
        assert!(dms_to_decimal(f64::NAN, 0.0, 0.0).is_err());
        assert!(dms_to_decimal(10.0, f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn decimal_to_dms() {
        let dms = Dms::from_decimal(-0.8458).unwrap();
        assert!(dms.negative);
        assert_eq!(dms.degrees, 0.0);
        assert_eq!(dms.minutes, 50.0);
        assert!((dms.seconds - 44.88).abs() < 1.0E-6);

        let back = dms.to_decimal().unwrap();
        assert!((back + 0.8458).abs() < 1.0E-9);

        assert!(Dms::from_decimal(f64::NAN).is_err());
    }
}

//! Absolute observation reduction
use log::debug;

use crate::{
    averager::{wrap_half_circle, AngleAverager, Averager},
    cfg::Config,
    constants::{ARCMIN_PER_DEGREE, ARCMIN_PER_RADIAN, HALF_CIRCLE_DEG, QUARTER_CIRCLE_DEG},
    error::Error,
    measurement::{DECLINATION_CIRCLE_TYPES, INCLINATION_TYPES, MARK_TYPES},
    prelude::{Duration, Epoch, Field, Measurement, MeasurementType, Reading, Reduction},
    selection::time_span,
};

/// Returns this channel value, or [Error::MissingChannel]
fn channel(measurement: &Measurement, field: Field) -> Result<f64, Error> {
    measurement
        .field(field)
        .and_then(|value| value.as_scalar())
        .ok_or(Error::MissingChannel(measurement.kind, field))
}

/// Returns sampling [Epoch], or [Error::MissingChannel]
fn epoch(measurement: &Measurement) -> Result<Epoch, Error> {
    measurement
        .time
        .ok_or(Error::MissingChannel(measurement.kind, Field::Time))
}

/// Mean of one channel over one four position sequence
fn channel_mean(measurements: &[&Measurement; 4], field: Field) -> Result<f64, Error> {
    let mut averager = Averager::new();
    for measurement in measurements {
        averager.add(channel(measurement, field)?);
    }
    averager
        .value()
        .ok_or(Error::MissingChannel(measurements[0].kind, field))
}

/// Earliest and latest [Epoch] of one four position sequence,
/// every position must be timed.
fn span(measurements: &[&Measurement; 4]) -> Result<(Epoch, Epoch), Error> {
    for measurement in measurements {
        epoch(measurement)?;
    }
    time_span(measurements.iter().copied())
        .ok_or(Error::MissingChannel(measurements[0].kind, Field::Time))
}

/// Mean [Epoch] of one four position sequence
fn mean_epoch(measurements: &[&Measurement; 4]) -> Result<Epoch, Error> {
    let (start, _) = span(measurements)?;
    let offsets = measurements
        .iter()
        .map(|m| epoch(m).map(|t| (t - start).to_seconds()))
        .collect::<Result<Averager, Error>>()?;
    let offset_s = offsets
        .value()
        .ok_or(Error::MissingChannel(measurements[0].kind, Field::Time))?;
    Ok(start + Duration::from_seconds(offset_s))
}

/// [BaselineCalculator] reduces one [Reading] (set) into absolute
/// values and variometer baselines. It only holds the site constants:
/// every method is a pure function of the [Reading].
///
/// Angles are returned in decimal degrees, intensities in nT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineCalculator {
    /// Site constants
    cfg: Config,
}

impl BaselineCalculator {
    /// Builds a new [BaselineCalculator] for this observatory / instrument pairing.
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        debug!(
            "calculator: pier correction={}nT, mark azimuth={}°",
            cfg.pier_correction, cfg.true_azimuth_of_mark
        );
        Ok(Self { cfg })
    }

    /// [Config] in use
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Mean azimuth mark circle reading. Mark down sightings are taken
    /// from the opposite telescope face and brought back by 180°.
    pub fn mean_mark(&self, reading: &Reading) -> Result<f64, Error> {
        let marks = reading.measurements_of(MARK_TYPES)?;
        let averager = marks
            .iter()
            .map(|m| {
                if m.kind.is_up() {
                    m.angle
                } else {
                    m.angle - HALF_CIRCLE_DEG
                }
            })
            .collect::<AngleAverager>();

        let mean = averager
            .value()
            .ok_or(Error::MissingMeasurement(MeasurementType::FirstMarkUp))?;

        debug!("set #{} - mean mark: {:.6}°", reading.set_number(), mean);
        Ok(mean)
    }

    /// Magnetic meridian, as a circle reading. At the magnetometer null, the sensor
    /// is perpendicular to the field: each of the four positions is turned by ±90°
    /// onto the meridian, and the four are averaged so that collimation and
    /// leveling errors cancel out.
    pub fn magnetic_meridian(&self, reading: &Reading) -> Result<f64, Error> {
        let circles = reading.measurements_of(DECLINATION_CIRCLE_TYPES)?;
        let averager = circles
            .iter()
            .map(|m| match m.kind {
                MeasurementType::WestUp | MeasurementType::EastDown => {
                    m.angle + QUARTER_CIRCLE_DEG
                },
                _ => m.angle - QUARTER_CIRCLE_DEG,
            })
            .collect::<AngleAverager>();

        let meridian = averager
            .value()
            .ok_or(Error::MissingMeasurement(MeasurementType::WestDown))?;

        debug!(
            "set #{} - magnetic meridian: {:.6}°",
            reading.set_number(),
            meridian
        );
        Ok(meridian)
    }

    /// Absolute declination (decimal degrees, within ]-180, 180]).
    pub fn magnetic_declination(&self, reading: &Reading) -> Result<f64, Error> {
        let mark = self.mean_mark(reading)?;
        let meridian = self.magnetic_meridian(reading)?;

        let declination = wrap_half_circle(self.cfg.true_azimuth_of_mark - mark + meridian);

        debug!(
            "set #{} - absolute declination: {:.4}'",
            reading.set_number(),
            declination * ARCMIN_PER_DEGREE
        );
        Ok(declination)
    }

    /// Inclination (decimal degrees), from the four meridian plane positions.
    /// Each up/down pair spans twice the inclination.
    pub fn inclination(&self, reading: &Reading) -> Result<f64, Error> {
        let [south_down, north_up, south_up, north_down] =
            reading.measurements_of(INCLINATION_TYPES)?;

        let south = wrap_half_circle(south_down.angle - south_up.angle);
        let north = wrap_half_circle(north_up.angle - north_down.angle);
        let inclination = (south + north) / 4.0;

        debug!(
            "set #{} - inclination: {:.6}°",
            reading.set_number(),
            inclination
        );
        Ok(inclination)
    }

    /// Total field at the absolute pier (nT): mean scalar reading
    /// during the inclination sequence, plus pier correction.
    pub fn f_corrected(&self, reading: &Reading) -> Result<f64, Error> {
        let inclinations = reading.measurements_of(INCLINATION_TYPES)?;
        let f = channel_mean(&inclinations, Field::F)?;
        Ok(f + self.cfg.pier_correction)
    }

    /// Absolute horizontal intensity (nT)
    pub fn h_absolute(&self, reading: &Reading) -> Result<f64, Error> {
        let inclination = self.inclination(reading)?;
        let f = self.f_corrected(reading)?;
        Ok(f * inclination.to_radians().cos())
    }

    /// Absolute vertical intensity (nT)
    pub fn z_absolute(&self, reading: &Reading) -> Result<f64, Error> {
        let inclination = self.inclination(reading)?;
        let f = self.f_corrected(reading)?;
        Ok(f * inclination.to_radians().sin())
    }

    /// Mean variometer H channel during the inclination sequence (nT)
    pub fn h_computed(&self, reading: &Reading) -> Result<f64, Error> {
        let inclinations = reading.measurements_of(INCLINATION_TYPES)?;
        channel_mean(&inclinations, Field::H)
    }

    /// Mean variometer Z channel during the inclination sequence (nT)
    pub fn z_computed(&self, reading: &Reading) -> Result<f64, Error> {
        let inclinations = reading.measurements_of(INCLINATION_TYPES)?;
        channel_mean(&inclinations, Field::Z)
    }

    /// H baseline (nT)
    pub fn h_baseline(&self, reading: &Reading) -> Result<f64, Error> {
        Ok(self.h_absolute(reading)? - self.h_computed(reading)?)
    }

    /// Z baseline (nT)
    pub fn z_baseline(&self, reading: &Reading) -> Result<f64, Error> {
        Ok(self.z_absolute(reading)? - self.z_computed(reading)?)
    }

    /// Scale value of the declination channel, in arc-minutes per nT.
    /// Fixed by [Config] when defined, otherwise derived from the
    /// absolute horizontal intensity of this [Reading].
    pub fn scale_value(&self, reading: &Reading) -> Result<f64, Error> {
        if let Some(scale_value) = self.cfg.scale_value {
            return Ok(scale_value);
        }
        let h = self.h_absolute(reading)?;
        if h.is_nan() || h <= 0.0 {
            return Err(Error::DegenerateHorizontalIntensity(h));
        }
        Ok(ARCMIN_PER_RADIAN / h)
    }

    /// Ordinate: declination (decimal degrees) recorded by the variometer
    /// E channel, averaged over the four circle readings.
    pub fn d_computed(&self, reading: &Reading) -> Result<f64, Error> {
        let circles = reading.measurements_of(DECLINATION_CIRCLE_TYPES)?;
        let e = channel_mean(&circles, Field::E)?;
        let scale_value = self.scale_value(reading)?;

        let ordinate = e * scale_value / ARCMIN_PER_DEGREE;

        debug!(
            "set #{} - ordinate: {:.4}' (e={:.3}nT, scale={:.6}'/nT)",
            reading.set_number(),
            ordinate * ARCMIN_PER_DEGREE,
            e,
            scale_value
        );
        Ok(ordinate)
    }

    /// Declination baseline (decimal degrees)
    pub fn d_baseline(&self, reading: &Reading) -> Result<f64, Error> {
        Ok(self.magnetic_declination(reading)? - self.d_computed(reading)?)
    }

    /// First and last circle reading of the declination sequence
    pub fn declination_time_span(&self, reading: &Reading) -> Result<(Epoch, Epoch), Error> {
        span(&reading.measurements_of(DECLINATION_CIRCLE_TYPES)?)
    }

    /// First and last reading of the inclination sequence
    pub fn inclination_time_span(&self, reading: &Reading) -> Result<(Epoch, Epoch), Error> {
        span(&reading.measurements_of(INCLINATION_TYPES)?)
    }

    /// Mean [Epoch] of the declination sequence
    pub fn declination_mean_epoch(&self, reading: &Reading) -> Result<Epoch, Error> {
        mean_epoch(&reading.measurements_of(DECLINATION_CIRCLE_TYPES)?)
    }

    /// Mean [Epoch] of the inclination sequence
    pub fn inclination_mean_epoch(&self, reading: &Reading) -> Result<Epoch, Error> {
        mean_epoch(&reading.measurements_of(INCLINATION_TYPES)?)
    }

    /// Reduces one complete set
    pub fn reduce(&self, reading: &Reading) -> Result<Reduction, Error> {
        let declination = self.magnetic_declination(reading)?;
        let d_computed = self.d_computed(reading)?;

        let inclination = self.inclination(reading)?;
        let f_corrected = self.f_corrected(reading)?;
        let h_absolute = self.h_absolute(reading)?;
        let z_absolute = self.z_absolute(reading)?;
        let h_computed = self.h_computed(reading)?;
        let z_computed = self.z_computed(reading)?;

        Ok(Reduction {
            set_number: reading.set_number(),
            declination_epoch: self.declination_mean_epoch(reading)?,
            inclination_epoch: self.inclination_mean_epoch(reading)?,
            declination,
            d_computed,
            d_baseline: declination - d_computed,
            scale_value: self.scale_value(reading)?,
            inclination,
            f_corrected,
            h_absolute,
            h_computed,
            h_baseline: h_absolute - h_computed,
            z_absolute,
            z_computed,
            z_baseline: z_absolute - z_computed,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{channel_mean, mean_epoch, span};
    use crate::{
        error::Error,
        measurement::{DECLINATION_CIRCLE_TYPES, INCLINATION_TYPES},
        prelude::{Field, Measurement, MeasurementType, Reading},
        tests::{reference_measurements, utc},
    };

    fn reading_with(update: fn(Measurement) -> Measurement) -> Reading {
        let measurements = reference_measurements(1).into_iter().map(update).collect();
        Reading::new(1, measurements).unwrap()
    }

    #[test]
    fn sequence_timing() {
        let reading = reading_with(|m| m);
        let circles = reading.measurements_of(DECLINATION_CIRCLE_TYPES).unwrap();

        assert_eq!(span(&circles), Ok((utc("14:28:21"), utc("14:31:51"))));

        let mean = mean_epoch(&circles).unwrap();
        assert!((mean - utc("14:30:10")).to_seconds().abs() < 1.0E-6);
    }

    #[test]
    fn errors_name_the_sequence() {
        let reading = reading_with(|m| Measurement {
            time: None,
            h: None,
            ..m
        });
        let inclinations = reading.measurements_of(INCLINATION_TYPES).unwrap();

        assert_eq!(
            channel_mean(&inclinations, Field::H),
            Err(Error::MissingChannel(MeasurementType::SouthDown, Field::H))
        );
        assert_eq!(
            span(&inclinations),
            Err(Error::MissingChannel(MeasurementType::SouthDown, Field::Time))
        );
        assert_eq!(
            mean_epoch(&inclinations),
            Err(Error::MissingChannel(MeasurementType::SouthDown, Field::Time))
        );

        let circles = reading.measurements_of(DECLINATION_CIRCLE_TYPES).unwrap();
        assert_eq!(
            span(&circles),
            Err(Error::MissingChannel(MeasurementType::WestDown, Field::Time))
        );
        assert!(channel_mean(&circles, Field::E).is_ok());
    }
}

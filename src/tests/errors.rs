use crate::{
    prelude::{
        BaselineCalculator, Config, ConfigError, Error, Field, Measurement, MeasurementType,
        Reading,
    },
    tests::{reference_config, reference_measurements},
};

use rstest::*;

#[fixture]
fn calculator() -> BaselineCalculator {
    BaselineCalculator::new(reference_config()).unwrap()
}

fn without(kind: MeasurementType) -> Reading {
    let measurements = reference_measurements(1)
        .into_iter()
        .filter(|m| m.kind != kind)
        .collect();
    Reading::new(1, measurements).unwrap()
}

#[rstest]
#[case(MeasurementType::EastUp)]
#[case(MeasurementType::WestDown)]
#[case(MeasurementType::FirstMarkDown)]
#[case(MeasurementType::SecondMarkUp)]
fn missing_declination_position(calculator: BaselineCalculator, #[case] kind: MeasurementType) {
    let reading = without(kind);
    assert_eq!(
        calculator.magnetic_declination(&reading),
        Err(Error::MissingMeasurement(kind))
    );
    assert_eq!(
        calculator.d_baseline(&reading),
        Err(Error::MissingMeasurement(kind))
    );
    assert_eq!(
        calculator.reduce(&reading),
        Err(Error::MissingMeasurement(kind))
    );
    // inclination is still available
    assert!(calculator.inclination(&reading).is_ok());
}

#[rstest]
fn missing_inclination_position(calculator: BaselineCalculator) {
    let reading = without(MeasurementType::NorthDown);

    // declination does not depend on the inclination sequence
    assert!(calculator.magnetic_declination(&reading).is_ok());

    // the ordinate does, through the scale value
    assert_eq!(
        calculator.d_computed(&reading),
        Err(Error::MissingMeasurement(MeasurementType::NorthDown))
    );
    assert_eq!(
        calculator.h_absolute(&reading),
        Err(Error::MissingMeasurement(MeasurementType::NorthDown))
    );

    // unless it is fixed
    let fixed =
        BaselineCalculator::new(reference_config().with_scale_value(0.143654)).unwrap();
    let ordinate = fixed.d_computed(&reading).unwrap();
    assert_eq!(format!("{:.2}", ordinate * 60.0), "-8.96");
}

#[rstest]
fn ambiguous_position(calculator: BaselineCalculator) {
    let mut measurements = reference_measurements(1);
    measurements.push(
        Measurement::new(MeasurementType::WestUp, 111.4)
            .unwrap()
            .with_e(-62.0),
    );
    let reading = Reading::new(1, measurements).unwrap();

    assert_eq!(
        calculator.magnetic_declination(&reading),
        Err(Error::AmbiguousMeasurement(MeasurementType::WestUp))
    );
    assert_eq!(
        calculator.d_computed(&reading),
        Err(Error::AmbiguousMeasurement(MeasurementType::WestUp))
    );
    assert_eq!(reading.duplicates(), vec![MeasurementType::WestUp]);
}

#[rstest]
fn missing_channels(calculator: BaselineCalculator) {
    let measurements = reference_measurements(1)
        .into_iter()
        .map(|m| match m.kind {
            MeasurementType::EastDown => Measurement { e: None, ..m },
            MeasurementType::SouthUp => Measurement { f: None, ..m },
            MeasurementType::NorthUp => Measurement { time: None, ..m },
            _ => m,
        })
        .collect();
    let reading = Reading::new(1, measurements).unwrap();

    assert!(calculator.magnetic_declination(&reading).is_ok());
    assert!(calculator.inclination(&reading).is_ok());

    assert_eq!(
        calculator.f_corrected(&reading),
        Err(Error::MissingChannel(MeasurementType::SouthUp, Field::F))
    );
    assert_eq!(
        calculator.d_computed(&reading),
        Err(Error::MissingChannel(MeasurementType::EastDown, Field::E))
    );
    assert_eq!(
        calculator.inclination_time_span(&reading),
        Err(Error::MissingChannel(MeasurementType::NorthUp, Field::Time))
    );
}

#[test]
fn invalid_configuration() {
    assert_eq!(
        BaselineCalculator::new(Config::new(f64::NAN, 176.6458)),
        Err(Error::Configuration(ConfigError::PierCorrection))
    );
    assert_eq!(
        BaselineCalculator::new(Config::new(-4.2, f64::NEG_INFINITY)),
        Err(Error::Configuration(ConfigError::TrueAzimuthOfMark))
    );
    assert_eq!(
        BaselineCalculator::new(reference_config().with_scale_value(-1.0)),
        Err(Error::Configuration(ConfigError::ScaleValue))
    );
}

#[test]
fn degenerate_horizontal_intensity() {
    let calculator = BaselineCalculator::new(Config::new(0.0, 176.6458)).unwrap();

    // scalar magnetometer reporting nothing
    let measurements = reference_measurements(1)
        .into_iter()
        .map(|m| match m.f {
            Some(_) => m.with_f(0.0),
            None => m,
        })
        .collect();
    let reading = Reading::new(1, measurements).unwrap();

    assert_eq!(calculator.h_absolute(&reading), Ok(0.0));
    assert_eq!(
        calculator.scale_value(&reading),
        Err(Error::DegenerateHorizontalIntensity(0.0))
    );
    assert_eq!(
        calculator.d_computed(&reading),
        Err(Error::DegenerateHorizontalIntensity(0.0))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        Error::MissingMeasurement(MeasurementType::EastUp).to_string(),
        "missing east_up measurement"
    );
    assert_eq!(
        Error::MissingChannel(MeasurementType::WestDown, Field::E).to_string(),
        "west_down measurement has no e value"
    );
}

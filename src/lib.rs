#![doc = include_str!("../README.md")]

// private modules
mod averager;
mod calculator;
mod cfg;
mod constants;
mod error;
mod formatter;
mod measurement;
mod observation;
mod reading;
mod reduction;
mod selection;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::averager::{AngleAverager, Averager};
    pub use crate::calculator::BaselineCalculator;
    pub use crate::cfg::{Config, Error as ConfigError};
    pub use crate::constants::ARCMIN_PER_RADIAN;
    pub use crate::error::Error;
    pub use crate::formatter::{dms_to_decimal, Dms};
    pub use crate::measurement::{
        Measurement, MeasurementType, ParsingError, DECLINATION_CIRCLE_TYPES,
        DECLINATION_TYPES, INCLINATION_TYPES, MARK_TYPES,
    };
    pub use crate::observation::Observation;
    pub use crate::reading::Reading;
    pub use crate::reduction::Reduction;
    pub use crate::selection::{
        project, project_scalars, project_times, select_by_role, time_span, Field, FieldValue,
        Role,
    };
    // re-export
    pub use hifitime::{Duration, Epoch};
}

// pub export
pub use error::Error;

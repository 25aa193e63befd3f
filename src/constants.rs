/// Arc-minutes per radian (180 * 60 / π), used to express
/// variometer scale values in arc-minutes per nT.
pub const ARCMIN_PER_RADIAN: f64 = 3437.7468;

/// Arc-minutes per degree
pub const ARCMIN_PER_DEGREE: f64 = 60.0;

/// Arc-seconds per degree
pub const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Full circle, in degrees
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Half circle, in degrees. Telescope faces and
/// mark up/down readings are separated by this much.
pub const HALF_CIRCLE_DEG: f64 = 180.0;

/// Quarter circle, in degrees. The magnetometer null is reached
/// with the sensor axis perpendicular to the magnetic meridian.
pub const QUARTER_CIRCLE_DEG: f64 = 90.0;

use crate::constants::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG};

/// Wraps an angle (degrees) into ]-180, 180]
pub(crate) fn wrap_half_circle(angle: f64) -> f64 {
    let wrapped = normalize_circle(angle);
    if wrapped > HALF_CIRCLE_DEG {
        wrapped - FULL_CIRCLE_DEG
    } else {
        wrapped
    }
}

/// Normalizes an angle (degrees) into [0, 360[
pub(crate) fn normalize_circle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(FULL_CIRCLE_DEG);
    // rem_euclid may round up to the modulus itself
    if normalized >= FULL_CIRCLE_DEG {
        0.0
    } else {
        normalized
    }
}

/// Running arithmetic mean
#[derive(Debug, Clone, Default)]
pub struct Averager {
    pub mean: f64,
    pub count: u64,
}

impl Averager {
    /// Builds new Averager
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
        }
    }

    /// Push new value into [Averager]
    pub fn add(&mut self, x: f64) {
        self.count += 1;
        let k = self.count as f64;
        self.mean = x / k + self.mean * (k - 1.0) / k;
    }

    /// Returns the mean, if at least one value was pushed
    pub fn value(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean)
        }
    }
}

/// Mean of angles that may straddle the 0°/360° boundary.
/// Each sample is first reduced to its shortest offset from the
/// first sample, so 359.9° and 0.1° average to 0°, not 180°.
#[derive(Debug, Clone, Default)]
pub struct AngleAverager {
    reference: Option<f64>,
    offsets: Averager,
}

impl AngleAverager {
    /// Builds new [AngleAverager]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push new angle (degrees) into [AngleAverager]
    pub fn add(&mut self, angle: f64) {
        let reference = *self.reference.get_or_insert(angle);
        self.offsets.add(wrap_half_circle(angle - reference));
    }

    /// Returns mean angle in [0, 360[, if at least one angle was pushed
    pub fn value(&self) -> Option<f64> {
        let reference = self.reference?;
        let offset = self.offsets.value()?;
        Some(normalize_circle(reference + offset))
    }
}

impl FromIterator<f64> for AngleAverager {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut averager = Self::new();
        for angle in iter {
            averager.add(angle);
        }
        averager
    }
}

impl FromIterator<f64> for Averager {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut averager = Self::new();
        for x in iter {
            averager.add(x);
        }
        averager
    }
}

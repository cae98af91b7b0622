//! The eight clinical measurements and the order the artifact consumes them in.

use serde::{Deserialize, Serialize};

use crate::PredictError;

/// Number of features the classification artifact expects.
pub const FEATURE_COUNT: usize = 8;

/// One of the eight clinical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Measurement {
    Pregnancies,
    Glucose,
    BloodPressure,
    SkinThickness,
    Insulin,
    Bmi,
    Dpf,
    Age,
}

impl Measurement {
    /// Feature order the artifact was trained with. Reordering silently
    /// corrupts every prediction.
    pub const ORDER: [Measurement; FEATURE_COUNT] = [
        Measurement::Pregnancies,
        Measurement::Glucose,
        Measurement::BloodPressure,
        Measurement::SkinThickness,
        Measurement::Insulin,
        Measurement::Bmi,
        Measurement::Dpf,
        Measurement::Age,
    ];

    /// Position in the feature vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Key used in request bodies.
    pub fn key(self) -> &'static str {
        match self {
            Measurement::Pregnancies => "pregnancies",
            Measurement::Glucose => "glucose",
            Measurement::BloodPressure => "bloodPressure",
            Measurement::SkinThickness => "skinThickness",
            Measurement::Insulin => "insulin",
            Measurement::Bmi => "bmi",
            Measurement::Dpf => "dpf",
            Measurement::Age => "age",
        }
    }

    /// Column name in the training data.
    pub fn column(self) -> &'static str {
        match self {
            Measurement::Pregnancies => "Pregnancies",
            Measurement::Glucose => "Glucose",
            Measurement::BloodPressure => "BloodPressure",
            Measurement::SkinThickness => "SkinThickness",
            Measurement::Insulin => "Insulin",
            Measurement::Bmi => "BMI",
            Measurement::Dpf => "DiabetesPedigreeFunction",
            Measurement::Age => "Age",
        }
    }

    /// Human-readable label for form prompts.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::Pregnancies => "Number of pregnancies",
            Measurement::Glucose => "Glucose level (mg/dL)",
            Measurement::BloodPressure => "Blood pressure (mm Hg)",
            Measurement::SkinThickness => "Skin thickness (mm)",
            Measurement::Insulin => "Insulin level (mu U/ml)",
            Measurement::Bmi => "BMI",
            Measurement::Dpf => "Diabetes pedigree function",
            Measurement::Age => "Age (years)",
        }
    }

    /// Input bounds offered by interactive surfaces. The inference handler
    /// itself never range-checks.
    pub fn bounds(self) -> FieldBounds {
        match self {
            Measurement::Pregnancies => FieldBounds::integer(0.0, 20.0, 1.0),
            Measurement::Glucose => FieldBounds::integer(0.0, 300.0, 120.0),
            Measurement::BloodPressure => FieldBounds::integer(0.0, 200.0, 70.0),
            Measurement::SkinThickness => FieldBounds::integer(0.0, 100.0, 20.0),
            Measurement::Insulin => FieldBounds::integer(0.0, 900.0, 80.0),
            Measurement::Bmi => FieldBounds::decimal(0.0, 70.0, 25.0),
            Measurement::Dpf => FieldBounds::decimal(0.0, 3.0, 0.5),
            Measurement::Age => FieldBounds::integer(0.0, 120.0, 30.0),
        }
    }

    /// Looks a measurement up by its request key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|m| m.key() == key)
    }
}

/// Range, default and granularity of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Whole numbers only.
    pub integer: bool,
}

impl FieldBounds {
    fn integer(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default, integer: true }
    }

    fn decimal(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default, integer: false }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Eight finite measurements in artifact order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementVector([f64; FEATURE_COUNT]);

impl MeasurementVector {
    /// Builds a vector from values already in [`Measurement::ORDER`].
    ///
    /// Rejects non-finite values, naming the first offending field.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Result<Self, PredictError> {
        if let Some(m) = Measurement::ORDER.into_iter().find(|m| !values[m.index()].is_finite()) {
            return Err(PredictError::invalid(m.key(), "value must be a finite number"));
        }
        Ok(Self(values))
    }

    /// Vector holding every field's form default.
    pub fn defaults() -> Self {
        Self(Measurement::ORDER.map(|m| m.bounds().default))
    }

    pub fn get(&self, measurement: Measurement) -> f64 {
        self.0[measurement.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measurement, f64)> + '_ {
        Measurement::ORDER.into_iter().zip(self.0.iter().copied())
    }
}

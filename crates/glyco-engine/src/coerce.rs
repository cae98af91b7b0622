//! Coercion of raw request values into a [`MeasurementVector`].

use glyco_core::{Measurement, MeasurementVector, PredictError, FEATURE_COUNT};
use serde_json::Value;

/// Builds the feature vector from a request body.
///
/// Fields are read in artifact order, so the first offending field in that
/// order is the one reported. Unknown keys are ignored.
pub fn measurement_vector(body: &Value) -> Result<MeasurementVector, PredictError> {
    let Some(fields) = body.as_object() else {
        return Err(PredictError::invalid("body", "expected a JSON object"));
    };

    let mut values = [0.0; FEATURE_COUNT];
    for m in Measurement::ORDER {
        values[m.index()] = coerce_value(m.key(), fields.get(m.key()))?;
    }
    MeasurementVector::new(values)
}

/// Coerces one JSON value to a finite `f64`. Numbers pass through, strings are
/// parsed after trimming; anything else is rejected.
pub fn coerce_value(field: &str, value: Option<&Value>) -> Result<f64, PredictError> {
    let number = match value {
        None => return Err(PredictError::invalid(field, "field is required")),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| PredictError::invalid(field, "number out of range"))?,
        Some(Value::String(s)) => parse_text(field, s)?,
        Some(Value::Null) => return Err(PredictError::invalid(field, "field is required")),
        Some(other) => {
            return Err(PredictError::invalid(
                field,
                format!("expected a number, got {}", kind(other)),
            ))
        }
    };

    if !number.is_finite() {
        return Err(PredictError::invalid(field, "value must be a finite number"));
    }
    Ok(number)
}

/// Parses free text the way a form field is read.
pub fn parse_text(field: &str, raw: &str) -> Result<f64, PredictError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PredictError::invalid(field, "field is required"));
    }

    let number = trimmed.parse::<f64>().map_err(|_| {
        PredictError::invalid(field, format!("could not convert '{}' to a number", trimmed))
    })?;

    if !number.is_finite() {
        return Err(PredictError::invalid(field, "value must be a finite number"));
    }
    Ok(number)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
